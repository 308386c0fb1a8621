//! # unulyz
//!
//! Ulysses sheet to Markdown conversion library for Rust.
//!
//! A sheet (`Content.xml`, or a `.ulyz` archive wrapping one) carries its own
//! tag vocabulary: named definitions that map inline markers to literal
//! patterns. This library resolves those tags, rebuilds each paragraph as a
//! single ASCII line, and writes the result as Markdown with the sheet's
//! keywords as front matter.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unulyz::{parse_file, render};
//!
//! fn main() -> unulyz::Result<()> {
//!     // Parse a sheet
//!     let sheet = parse_file("Draft.ulyz")?;
//!
//!     // Render and serialize
//!     let options = render::RenderOptions::default();
//!     let doc = render::render_sheet(&sheet, &options)?;
//!     print!("{}", render::to_markdown(&doc, &options));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Tag resolution**: single-pattern markers and start/end wrappers
//! - **Graceful tag groups**: undefined decorative tags render as nothing
//! - **Strict inline elements**: undefined wrappers fail the sheet
//! - **ASCII output**: every line is transliterated
//! - **Batch conversion**: whole directories, in parallel with Rayon

pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{BatchReport, ConvertFailure, ConvertOptions, ConvertResult};
pub use detect::{detect_format_from_bytes, detect_format_from_path, SheetFormat};
pub use error::{Error, Result};
pub use model::{Attachment, Child, Markup, Paragraph, Sheet, TagDefinitionNode, TagItem};
pub use parser::{ParseOptions, SheetParser};
pub use render::{
    DocumentRenderer, FrontMatter, JsonFormat, RenderOptions, RenderResult, RenderStats,
    RenderedDocument, TagDefinition, TagTable,
};

use std::path::Path;

/// Parse a `.xml` or `.ulyz` file.
///
/// # Example
///
/// ```no_run
/// use unulyz::parse_file;
///
/// let sheet = parse_file("Content.xml").unwrap();
/// println!("Paragraphs: {}", sheet.paragraph_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Sheet> {
    SheetParser::new().parse_file(path)
}

/// Parse a file with custom options.
///
/// # Example
///
/// ```no_run
/// use unulyz::{parse_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new().markdown_xl_only();
/// let sheet = parse_file_with_options("Draft.ulyz", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Sheet> {
    SheetParser::with_options(options).parse_file(path)
}

/// Parse sheet XML or a `.ulyz` archive from bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Sheet> {
    SheetParser::new().parse_bytes(data)
}

/// Parse sheet XML from a string.
///
/// # Example
///
/// ```
/// let xml = r#"<sheet><markup/><string><p>Hello</p></string></sheet>"#;
/// let sheet = unulyz::parse_str(xml).unwrap();
/// assert_eq!(sheet.paragraph_count(), 1);
/// ```
pub fn parse_str(xml: &str) -> Result<Sheet> {
    SheetParser::new().parse_str(xml)
}

/// Convert a sheet file to Markdown.
///
/// # Example
///
/// ```no_run
/// use unulyz::to_markdown;
///
/// let markdown = to_markdown("Draft.ulyz").unwrap();
/// std::fs::write("Draft.md", markdown).unwrap();
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    to_markdown_with_options(path, &RenderOptions::default())
}

/// Convert a sheet file to Markdown with custom options.
pub fn to_markdown_with_options<P: AsRef<Path>>(
    path: P,
    options: &RenderOptions,
) -> Result<String> {
    let sheet = parse_file(path)?;
    let doc = render::render_sheet(&sheet, options)?;
    Ok(render::to_markdown(&doc, options))
}

/// Convert a sheet file to JSON.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let sheet = parse_file(path)?;
    let doc = render::render_sheet(&sheet, &RenderOptions::default())?;
    render::to_json(&doc, format)
}

/// Builder for parsing and converting sheets.
///
/// # Example
///
/// ```no_run
/// use unulyz::Unulyz;
///
/// let markdown = Unulyz::new()
///     .markdown_xl_only()
///     .without_frontmatter()
///     .parse("Draft.ulyz")?
///     .to_markdown();
/// # Ok::<(), unulyz::Error>(())
/// ```
pub struct Unulyz {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Unulyz {
    /// Create a new Unulyz builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Require the Markdown XL markup dialect.
    pub fn markdown_xl_only(mut self) -> Self {
        self.parse_options = self.parse_options.markdown_xl_only();
        self
    }

    /// Require a specific markup identifier.
    pub fn with_markup_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.parse_options = self.parse_options.with_markup_identifier(identifier);
        self
    }

    /// Omit the keyword front matter.
    pub fn without_frontmatter(mut self) -> Self {
        self.render_options = self.render_options.with_frontmatter(false);
        self
    }

    /// Render paragraphs in parallel.
    pub fn parallel(mut self) -> Self {
        self.render_options = self.render_options.with_parallel(true);
        self
    }

    /// Parse and render a file.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<UnulyzResult> {
        let sheet = SheetParser::with_options(self.parse_options).parse_file(path)?;
        UnulyzResult::render(&sheet, self.render_options)
    }

    /// Parse and render sheet XML or a `.ulyz` archive held in memory.
    pub fn parse_bytes(self, data: &[u8]) -> Result<UnulyzResult> {
        let sheet = SheetParser::with_options(self.parse_options).parse_bytes(data)?;
        UnulyzResult::render(&sheet, self.render_options)
    }
}

impl Default for Unulyz {
    fn default() -> Self {
        Self::new()
    }
}

/// A rendered sheet with its render options.
pub struct UnulyzResult {
    result: RenderResult,
    render_options: RenderOptions,
}

impl UnulyzResult {
    fn render(sheet: &Sheet, render_options: RenderOptions) -> Result<Self> {
        let result = render::render_sheet_with_stats(sheet, &render_options)?;
        Ok(Self {
            result,
            render_options,
        })
    }

    /// Convert to Markdown.
    pub fn to_markdown(&self) -> String {
        render::to_markdown(&self.result.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.result.document, format)
    }

    /// Get the rendered document.
    pub fn rendered(&self) -> &RenderedDocument {
        &self.result.document
    }

    /// Get the rendering statistics.
    pub fn stats(&self) -> &RenderStats {
        &self.result.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = r#"<sheet><markup identifier="markdownl"><tag definition="strong" startPattern="**" endPattern="**"/></markup><string><p>Hi <element kind="strong">there</element></p></string><attachment type="keywords">a,b</attachment></sheet>"#;

    #[test]
    fn test_unulyz_builder() {
        let builder = Unulyz::new().markdown_xl_only().without_frontmatter();
        assert_eq!(
            builder.parse_options.markup_identifier.as_deref(),
            Some("markdownl")
        );
        assert!(!builder.render_options.include_frontmatter);
    }

    #[test]
    fn test_unulyz_builder_default() {
        let builder = Unulyz::default();
        assert!(builder.parse_options.markup_identifier.is_none());
        assert!(builder.render_options.include_frontmatter);
        assert!(!builder.render_options.parallel);
    }

    #[test]
    fn test_unulyz_parse_bytes() {
        let result = Unulyz::new().parse_bytes(SHEET.as_bytes()).unwrap();
        assert_eq!(result.to_markdown(), "---\nkeywords: a, b\n---\n\nHi **there**\n");
        assert_eq!(result.rendered().line_count(), 1);
        assert_eq!(result.stats().element_count, 1);
    }

    #[test]
    fn test_unulyz_wrong_markup() {
        let result = Unulyz::new()
            .with_markup_identifier("textbundle")
            .parse_bytes(SHEET.as_bytes());
        assert!(matches!(result, Err(Error::UnsupportedMarkup(_))));
    }

    #[test]
    fn test_parse_bytes_unknown_magic() {
        let result = parse_bytes(b"%PDF-1.7");
        assert!(matches!(result, Err(Error::UnknownFormat(_))));
    }

    #[test]
    fn test_parse_bytes_empty_data() {
        assert!(parse_bytes(&[]).is_err());
    }

    #[test]
    fn test_parse_str() {
        let sheet = parse_str(SHEET).unwrap();
        assert_eq!(sheet.paragraph_count(), 1);
        assert_eq!(sheet.markup.definitions.len(), 1);
    }
}
