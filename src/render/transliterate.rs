//! Unicode to ASCII transliteration of rendered lines.

use deunicode::deunicode_char;
use unicode_normalization::UnicodeNormalization;

/// Lossy, deterministic Unicode to ASCII conversion.
///
/// Text is first composed to NFC so that decomposed and precomposed input
/// map to the same output, then each non-ASCII character is replaced by its
/// closest ASCII approximation. ASCII characters, line breaks included, are
/// kept as they are. Characters with no approximation are dropped.
#[derive(Debug, Clone)]
pub struct Transliterator {
    normalize_unicode: bool,
}

impl Transliterator {
    /// Create a transliterator.
    pub fn new(normalize_unicode: bool) -> Self {
        Self { normalize_unicode }
    }

    /// Transliterate a line.
    ///
    /// Pure-ASCII input is returned unchanged.
    pub fn process(&self, text: &str) -> String {
        if text.is_ascii() {
            return text.to_string();
        }

        let composed: String = if self.normalize_unicode {
            text.nfc().collect()
        } else {
            text.to_string()
        };

        let mut out = String::with_capacity(composed.len());
        for c in composed.chars() {
            if c.is_ascii() {
                out.push(c);
            } else if let Some(ascii) = deunicode_char(c) {
                out.push_str(ascii);
            }
        }
        out
    }

    /// Number of characters the transliteration has to replace.
    pub fn count_non_ascii(text: &str) -> usize {
        text.chars().filter(|c| !c.is_ascii()).count()
    }
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Transliterate text with default settings.
pub fn transliterate(text: &str) -> String {
    Transliterator::default().process(text)
}
