//! Error types for unulyz library.

use std::io;
use thiserror::Error;

/// Result type alias for unulyz operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading or rendering a sheet.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error reading a `.ulyz` archive.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Error tokenizing sheet XML.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The input is neither sheet XML nor a `.ulyz` archive.
    #[error("Unknown file format: {0}")]
    UnknownFormat(String),

    /// The sheet XML does not have the expected structure.
    #[error("Malformed sheet: {0}")]
    MalformedSheet(String),

    /// The archive has no `Content.xml` member.
    #[error("No Content.xml found in archive")]
    ContentNotFound,

    /// The archive has more than one `Content.xml` member.
    #[error("Archive contains {0} Content.xml members, expected exactly one")]
    AmbiguousContent(usize),

    /// The sheet uses a markup dialect other than the one requested.
    #[error("Don't understand markup format {0}")]
    UnsupportedMarkup(String),

    /// A tag definition has neither `pattern` nor a `startPattern`/`endPattern` pair.
    #[error("Unknown tag format: {0}")]
    MalformedTagDefinition(String),

    /// An inline element references a tag that is not defined.
    #[error("Undefined tag kind: {0}")]
    UndefinedTagKind(String),

    /// An inline element references a single-pattern tag.
    #[error("Tag {0} cannot wrap inline content (no start/end pattern)")]
    WrongTagShape(String),

    /// A paragraph child is of a kind the renderer does not know.
    #[error("Unhandled child: <{0}>")]
    UnhandledChildKind(String),

    /// Error during output serialization.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether this error comes from the sheet content rather than from I/O.
    ///
    /// Content errors are permanent for a given input.
    pub fn is_content_error(&self) -> bool {
        matches!(
            self,
            Error::MalformedTagDefinition(_)
                | Error::UndefinedTagKind(_)
                | Error::WrongTagShape(_)
                | Error::UnhandledChildKind(_)
                | Error::MalformedSheet(_)
                | Error::UnsupportedMarkup(_)
        )
    }
}
