//! Paragraph and inline node types.

use serde::{Deserialize, Serialize};

/// A paragraph (`<p>`) of the sheet body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Child nodes in document order
    pub children: Vec<Child>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph from its children.
    pub fn with_children(children: Vec<Child>) -> Self {
        Self { children }
    }

    /// Create a paragraph with plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::with_children(vec![Child::Text(text.into())])
    }

    /// Add plain text.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.children.push(Child::Text(text.into()));
    }

    /// Add a tag group.
    pub fn add_tags(&mut self, items: Vec<TagItem>) {
        self.children.push(Child::Tags(items));
    }

    /// Add an inline element.
    pub fn add_element(&mut self, kind: impl Into<String>, text: impl Into<String>) {
        self.children.push(Child::element(kind, text));
    }

    /// Add any child.
    pub fn push(&mut self, child: Child) {
        self.children.push(child);
    }

    /// Check if the paragraph has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// A child node of a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Child {
    /// Literal text between nodes
    Text(String),

    /// A `<tags>` run of tag references and text
    Tags(Vec<TagItem>),

    /// An `<element kind="...">` wrapping literal text
    Element {
        /// Tag name
        kind: String,
        /// Text content
        text: String,
    },

    /// Any other node; never rendered
    Other {
        /// Element name
        name: String,
    },
}

impl Child {
    /// Create an inline element.
    pub fn element(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Child::Element {
            kind: kind.into(),
            text: text.into(),
        }
    }

    /// Node name as it appears in the sheet, `None` for text.
    pub fn node_name(&self) -> Option<&str> {
        match self {
            Child::Text(_) => None,
            Child::Tags(_) => Some("tags"),
            Child::Element { .. } => Some("element"),
            Child::Other { name } => Some(name),
        }
    }
}

/// An item inside a `<tags>` group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum TagItem {
    /// A `<tag kind="...">` reference; `text` is the literal marker from the sheet
    Reference { kind: String, text: String },

    /// Literal text
    Text(String),
}

impl TagItem {
    /// Create a tag reference without literal text.
    pub fn reference(kind: impl Into<String>) -> Self {
        TagItem::Reference {
            kind: kind.into(),
            text: String::new(),
        }
    }

    /// Create a literal text item.
    pub fn text(text: impl Into<String>) -> Self {
        TagItem::Text(text.into())
    }
}
