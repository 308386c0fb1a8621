//! Tag vocabulary of a sheet.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::TagDefinitionNode;

/// How a named tag renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum TagDefinition {
    /// A single literal, emitted verbatim
    Simple { pattern: String },

    /// A start/end pair wrapping inline text
    Paired { start: String, end: String },
}

impl TagDefinition {
    /// Create a single-pattern definition.
    pub fn simple(pattern: impl Into<String>) -> Self {
        TagDefinition::Simple {
            pattern: pattern.into(),
        }
    }

    /// Create a wrapping definition.
    pub fn paired(start: impl Into<String>, end: impl Into<String>) -> Self {
        TagDefinition::Paired {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Classify a raw `<tag>` node.
    ///
    /// Returns the tag name together with its definition. A node is `Simple`
    /// when it carries `pattern`, `Paired` when it carries both
    /// `startPattern` and `endPattern`; anything else is malformed.
    pub fn from_node(node: &TagDefinitionNode) -> Result<(String, Self)> {
        let name = node
            .definition
            .clone()
            .ok_or_else(|| Error::MalformedTagDefinition(node.to_string()))?;

        let definition = match (&node.pattern, &node.start_pattern, &node.end_pattern) {
            (Some(pattern), _, _) => TagDefinition::simple(pattern.as_str()),
            (None, Some(start), Some(end)) => TagDefinition::paired(start.as_str(), end.as_str()),
            _ => return Err(Error::MalformedTagDefinition(node.to_string())),
        };

        Ok((name, definition))
    }

    /// Check if this is a wrapping definition.
    pub fn is_paired(&self) -> bool {
        matches!(self, TagDefinition::Paired { .. })
    }

    /// The text contributed when referenced from a tag group.
    pub fn marker(&self) -> String {
        match self {
            TagDefinition::Simple { pattern } => pattern.clone(),
            TagDefinition::Paired { start, end } => format!("{}{}", start, end),
        }
    }
}

/// Name to definition lookup, built once per sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagTable {
    definitions: HashMap<String, TagDefinition>,
}

impl TagTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table from the markup section's definition nodes.
    ///
    /// Fails on the first malformed node; no partial table is returned.
    pub fn from_nodes(nodes: &[TagDefinitionNode]) -> Result<Self> {
        log::info!("Processing {} tag definitions", nodes.len());

        let mut table = Self::new();
        for node in nodes {
            let (name, definition) = TagDefinition::from_node(node)?;
            table.insert(name, definition);
        }
        Ok(table)
    }

    /// Register a definition, replacing any earlier one with the same name.
    pub fn insert(&mut self, name: impl Into<String>, definition: TagDefinition) {
        let name = name.into();
        if let Some(previous) = self.definitions.insert(name.clone(), definition) {
            log::warn!("Tag {} defined more than once, replacing {:?}", name, previous);
        }
    }

    /// Look up a definition by exact name.
    pub fn get(&self, name: &str) -> Option<&TagDefinition> {
        self.definitions.get(name)
    }

    /// Check if a name is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, TagDefinition)> for TagTable {
    fn from_iter<I: IntoIterator<Item = (S, TagDefinition)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, definition) in iter {
            table.insert(name, definition);
        }
        table
    }
}
