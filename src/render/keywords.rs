//! Keyword extraction from sheet attachments.

use crate::model::Attachment;

/// Extract the keyword list from the first `keywords` attachment.
///
/// A sheet without one has no keywords. Later `keywords` attachments are
/// ignored.
pub fn extract_keywords(attachments: &[Attachment]) -> Vec<String> {
    let mut found = attachments.iter().filter(|a| a.is_keywords());

    let Some(first) = found.next() else {
        return Vec::new();
    };

    let ignored = found.count();
    if ignored > 0 {
        log::warn!("Ignoring {} additional keywords attachment(s)", ignored);
    }

    split_keywords(&first.payload)
}

/// Split a comma-separated keyword list.
pub fn split_keywords(payload: &str) -> Vec<String> {
    payload
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_attachments() {
        assert!(extract_keywords(&[]).is_empty());
    }

    #[test]
    fn test_no_keywords_attachment() {
        let attachments = vec![Attachment::new("goal", "1000"), Attachment::new("note", "x")];
        assert!(extract_keywords(&attachments).is_empty());
    }

    #[test]
    fn test_split_and_trim() {
        let attachments = vec![Attachment::keywords("rust, parser ,  notes")];
        assert_eq!(
            extract_keywords(&attachments),
            vec!["rust", "parser", "notes"]
        );
    }

    #[test]
    fn test_first_keywords_wins() {
        let attachments = vec![
            Attachment::new("note", "ignored"),
            Attachment::keywords("first"),
            Attachment::keywords("second,third"),
        ];
        assert_eq!(extract_keywords(&attachments), vec!["first"]);
    }

    #[test]
    fn test_empty_entries_dropped() {
        assert_eq!(split_keywords("a,,b, ,"), vec!["a", "b"]);
        assert!(split_keywords("").is_empty());
    }
}
