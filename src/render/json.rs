//! JSON rendering of rendered sheets.

use crate::error::{Error, Result};

use super::RenderedDocument;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a rendered document to JSON.
pub fn to_json(doc: &RenderedDocument, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::FrontMatter;

    fn sample() -> RenderedDocument {
        RenderedDocument {
            front_matter: FrontMatter {
                tags: vec!["rust".to_string()],
            },
            lines: vec!["# Title\n".to_string()],
        }
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"front_matter\""));
        assert!(json.contains("\"rust\""));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert_eq!(
            json,
            r##"{"front_matter":{"tags":["rust"]},"lines":["# Title\n"]}"##
        );
    }
}
