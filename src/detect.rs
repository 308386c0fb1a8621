//! Sheet format detection.

use crate::error::{Error, Result};
use std::path::Path;

/// Input container format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    /// Bare sheet XML (`Content.xml` or an exported `.xml`)
    Xml,
    /// Zipped Ulysses sheet (`.ulyz`)
    Ulyz,
}

impl SheetFormat {
    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            SheetFormat::Xml => "xml",
            SheetFormat::Ulyz => "ulyz",
        }
    }
}

impl std::fmt::Display for SheetFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetFormat::Xml => write!(f, "sheet XML"),
            SheetFormat::Ulyz => write!(f, "Ulysses archive"),
        }
    }
}

/// ZIP local file header magic.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
/// UTF-8 byte order mark.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Detect the format from a file extension (case-insensitive).
///
/// # Example
/// ```
/// use unulyz::detect::{detect_format_from_path, SheetFormat};
///
/// assert_eq!(detect_format_from_path("Notes.ulyz").unwrap(), SheetFormat::Ulyz);
/// assert!(detect_format_from_path("notes.txt").is_err());
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<SheetFormat> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("xml") => Ok(SheetFormat::Xml),
        Some("ulyz") => Ok(SheetFormat::Ulyz),
        _ => Err(Error::UnknownFormat(path.display().to_string())),
    }
}

/// Detect the format from the leading bytes.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<SheetFormat> {
    if data.starts_with(ZIP_MAGIC) {
        return Ok(SheetFormat::Ulyz);
    }

    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    match data.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'<') => Ok(SheetFormat::Xml),
        _ => Err(Error::UnknownFormat(
            "neither XML nor ZIP content".to_string(),
        )),
    }
}

/// Check if a path has a convertible extension.
pub fn is_supported_path<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_from_path() {
        assert_eq!(
            detect_format_from_path("a/Content.xml").unwrap(),
            SheetFormat::Xml
        );
        assert_eq!(
            detect_format_from_path("draft.ULYZ").unwrap(),
            SheetFormat::Ulyz
        );
        assert!(matches!(
            detect_format_from_path("draft.md"),
            Err(Error::UnknownFormat(_))
        ));
        assert!(detect_format_from_path("noext").is_err());
    }

    #[test]
    fn test_detect_from_bytes() {
        assert_eq!(
            detect_format_from_bytes(b"PK\x03\x04rest").unwrap(),
            SheetFormat::Ulyz
        );
        assert_eq!(
            detect_format_from_bytes(b"\xEF\xBB\xBF  \n<?xml version=\"1.0\"?>").unwrap(),
            SheetFormat::Xml
        );
        assert!(detect_format_from_bytes(b"%PDF-1.7").is_err());
        assert!(detect_format_from_bytes(b"").is_err());
    }

    #[test]
    fn test_is_supported_path() {
        assert!(is_supported_path("x.xml"));
        assert!(is_supported_path("x.ulyz"));
        assert!(!is_supported_path("x.md"));
    }

    #[test]
    fn test_display() {
        assert_eq!(SheetFormat::Ulyz.to_string(), "Ulysses archive");
        assert_eq!(SheetFormat::Xml.extension(), "xml");
    }
}
