//! Rendering options and configuration.

/// Options for rendering a sheet.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Write the keyword front matter block (only when there are keywords)
    pub include_frontmatter: bool,

    /// Compose text to NFC before transliteration
    pub normalize_unicode: bool,

    /// Render paragraphs in parallel
    pub parallel: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable front matter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Enable or disable NFC composition before transliteration.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Enable or disable parallel paragraph rendering.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Render paragraphs one after another.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_frontmatter: true,
            normalize_unicode: true,
            parallel: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_frontmatter(false)
            .with_unicode_normalization(false)
            .with_parallel(true);

        assert!(!options.include_frontmatter);
        assert!(!options.normalize_unicode);
        assert!(options.parallel);
        assert!(!options.sequential().parallel);
    }

    #[test]
    fn test_render_options_defaults() {
        let options = RenderOptions::default();
        assert!(options.include_frontmatter);
        assert!(options.normalize_unicode);
        assert!(!options.parallel);
    }
}
