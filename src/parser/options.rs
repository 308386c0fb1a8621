//! Parsing options and configuration.

/// Markup identifier of Ulysses' "Markdown XL" dialect.
pub const MARKDOWN_XL: &str = "markdownl";

/// Options for parsing sheets.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Required markup identifier (None = accept any dialect)
    pub markup_identifier: Option<String>,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a specific markup identifier.
    pub fn with_markup_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.markup_identifier = Some(identifier.into());
        self
    }

    /// Require the Markdown XL dialect.
    pub fn markdown_xl_only(self) -> Self {
        self.with_markup_identifier(MARKDOWN_XL)
    }

    /// Check a sheet's markup identifier against the requirement.
    pub fn accepts_markup(&self, identifier: Option<&str>) -> bool {
        match &self.markup_identifier {
            Some(required) => identifier == Some(required.as_str()),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_accepts_anything() {
        let options = ParseOptions::default();
        assert!(options.markup_identifier.is_none());
        assert!(options.accepts_markup(None));
        assert!(options.accepts_markup(Some("markdown")));
    }

    #[test]
    fn test_markdown_xl_only() {
        let options = ParseOptions::new().markdown_xl_only();
        assert!(options.accepts_markup(Some("markdownl")));
        assert!(!options.accepts_markup(Some("textbundle")));
        assert!(!options.accepts_markup(None));
    }
}
