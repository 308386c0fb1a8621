//! Sheet-level types.

use super::Paragraph;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Attachment kind holding the comma-separated keyword list.
pub const KEYWORDS_ATTACHMENT: &str = "keywords";

/// A parsed Ulysses sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    /// Attachments in document order (keywords, notes, goals, ...)
    pub attachments: Vec<Attachment>,

    /// Markup section (tag vocabulary)
    pub markup: Markup,

    /// Body paragraphs in document order
    pub paragraphs: Vec<Paragraph>,
}

impl Sheet {
    /// Create a new empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attachment.
    pub fn add_attachment(&mut self, attachment: Attachment) {
        self.attachments.push(attachment);
    }

    /// Add a tag definition to the markup section.
    pub fn add_tag_definition(&mut self, node: TagDefinitionNode) {
        self.markup.definitions.push(node);
    }

    /// Add a paragraph to the body.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Get the number of paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Check if the sheet has no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}

/// A sheet attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Attachment type (the `type` attribute)
    pub kind: String,

    /// Text content
    pub payload: String,
}

impl Attachment {
    /// Create a new attachment.
    pub fn new(kind: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: payload.into(),
        }
    }

    /// Create a keywords attachment from a comma-separated list.
    pub fn keywords(payload: impl Into<String>) -> Self {
        Self::new(KEYWORDS_ATTACHMENT, payload)
    }

    /// Check if this is a keywords attachment.
    pub fn is_keywords(&self) -> bool {
        self.kind == KEYWORDS_ATTACHMENT
    }
}

/// The markup section of a sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markup {
    /// Markup dialect identifier (e.g., "markdownl")
    pub identifier: Option<String>,

    /// Tag definitions in document order
    pub definitions: Vec<TagDefinitionNode>,
}

/// A raw `<tag>` node from the markup section, before classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDefinitionNode {
    /// Tag name (the `definition` attribute)
    pub definition: Option<String>,

    /// Single-slot pattern
    pub pattern: Option<String>,

    /// Opening pattern of a wrapping tag
    pub start_pattern: Option<String>,

    /// Closing pattern of a wrapping tag
    pub end_pattern: Option<String>,
}

impl TagDefinitionNode {
    /// Create a node with only a name.
    pub fn named(definition: impl Into<String>) -> Self {
        Self {
            definition: Some(definition.into()),
            ..Default::default()
        }
    }

    /// Create a single-pattern node.
    pub fn simple(definition: impl Into<String>, pattern: impl Into<String>) -> Self {
        let mut node = Self::named(definition);
        node.pattern = Some(pattern.into());
        node
    }

    /// Create a start/end pattern node.
    pub fn paired(
        definition: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        let mut node = Self::named(definition);
        node.start_pattern = Some(start.into());
        node.end_pattern = Some(end.into());
        node
    }
}

impl fmt::Display for TagDefinitionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<tag")?;
        let attrs = [
            ("definition", &self.definition),
            ("pattern", &self.pattern),
            ("startPattern", &self.start_pattern),
            ("endPattern", &self.end_pattern),
        ];
        for (name, value) in attrs {
            if let Some(value) = value {
                write!(f, " {}=\"{}\"", name, value)?;
            }
        }
        write!(f, "/>")
    }
}
