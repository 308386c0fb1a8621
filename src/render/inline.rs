//! Rendering of individual paragraph children.

use crate::error::{Error, Result};
use crate::model::{Child, TagItem};

use super::{RenderStats, TagDefinition, TagTable};

/// Renders paragraph children against a tag table.
///
/// Tag groups are decorative: a reference to an undefined tag contributes
/// nothing. Inline elements are structural: an undefined or non-wrapping
/// tag is an error.
pub struct NodeDispatcher<'a> {
    table: &'a TagTable,
}

impl<'a> NodeDispatcher<'a> {
    /// Create a dispatcher over a tag table.
    pub fn new(table: &'a TagTable) -> Self {
        Self { table }
    }

    /// Render one child node.
    pub fn render_child(&self, child: &Child, stats: &mut RenderStats) -> Result<String> {
        match child {
            Child::Text(text) => Ok(text.trim().to_string()),
            Child::Tags(items) => Ok(self.process_tags(items, stats)),
            Child::Element { kind, text } => {
                stats.element_count += 1;
                self.process_element(kind, text)
            }
            Child::Other { name } => Err(Error::UnhandledChildKind(name.clone())),
        }
    }

    /// Render a `<tags>` group: resolved markers and literal text, space-joined.
    pub fn process_tags(&self, items: &[TagItem], stats: &mut RenderStats) -> String {
        stats.tag_group_count += 1;

        let frags: Vec<String> = items
            .iter()
            .map(|item| match item {
                TagItem::Reference { kind, .. } => match self.table.get(kind) {
                    Some(definition) => {
                        stats.resolved_tag_count += 1;
                        definition.marker()
                    }
                    None => {
                        log::debug!("No definition for tag {}, dropping it", kind);
                        stats.record_unresolved(kind);
                        String::new()
                    }
                },
                TagItem::Text(text) => text.clone(),
            })
            .collect();

        frags.join(" ")
    }

    /// Render an `<element>`: its text wrapped in the tag's start/end patterns.
    pub fn process_element(&self, kind: &str, text: &str) -> Result<String> {
        log::debug!("Processing {} element", kind);

        match self.table.get(kind) {
            Some(TagDefinition::Paired { start, end }) => {
                Ok(format!("{}{}{}", start, text, end))
            }
            Some(TagDefinition::Simple { .. }) => Err(Error::WrongTagShape(kind.to_string())),
            None => Err(Error::UndefinedTagKind(kind.to_string())),
        }
    }
}

/// Render a tag group against a table.
pub fn process_tags(items: &[TagItem], table: &TagTable) -> String {
    NodeDispatcher::new(table).process_tags(items, &mut RenderStats::new())
}

/// Render an inline element against a table.
pub fn process_element(kind: &str, text: &str, table: &TagTable) -> Result<String> {
    NodeDispatcher::new(table).process_element(kind, text)
}
