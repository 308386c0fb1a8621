//! Rendering result with statistics.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::RenderedDocument;

/// Result of rendering a sheet, including diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered document
    pub document: RenderedDocument,

    /// Statistics collected while rendering
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(document: RenderedDocument, stats: RenderStats) -> Self {
        Self { document, stats }
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of keywords in the front matter
    pub keyword_count: u32,

    /// Number of tag definitions in the sheet's markup
    pub tag_definition_count: u32,

    /// Number of paragraphs rendered
    pub paragraph_count: u32,

    /// Number of `<tags>` groups rendered
    pub tag_group_count: u32,

    /// Number of inline elements rendered
    pub element_count: u32,

    /// Tag references inside groups that resolved to a definition
    pub resolved_tag_count: u32,

    /// Tag references inside groups with no definition
    pub unresolved_tag_count: u32,

    /// Distinct tag kinds that had no definition
    pub unresolved_kinds: BTreeSet<String>,

    /// Non-ASCII characters replaced by transliteration
    pub transliterated_char_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a tag reference with no definition.
    pub fn record_unresolved(&mut self, kind: &str) {
        self.unresolved_tag_count += 1;
        if !self.unresolved_kinds.contains(kind) {
            self.unresolved_kinds.insert(kind.to_string());
        }
    }

    /// Check if every tag reference resolved.
    pub fn all_resolved(&self) -> bool {
        self.unresolved_tag_count == 0
    }

    /// Merge per-paragraph statistics.
    pub fn merge(&mut self, other: &RenderStats) {
        self.keyword_count += other.keyword_count;
        self.tag_definition_count += other.tag_definition_count;
        self.paragraph_count += other.paragraph_count;
        self.tag_group_count += other.tag_group_count;
        self.element_count += other.element_count;
        self.resolved_tag_count += other.resolved_tag_count;
        self.unresolved_tag_count += other.unresolved_tag_count;
        self.unresolved_kinds
            .extend(other.unresolved_kinds.iter().cloned());
        self.transliterated_char_count += other.transliterated_char_count;
    }
}
