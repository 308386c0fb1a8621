//! Sheet model types.
//!
//! This module defines the typed tree the sheet parser produces and the
//! renderer consumes. Nothing here knows about XML or files.

mod paragraph;
mod sheet;

pub use paragraph::{Child, Paragraph, TagItem};
pub use sheet::{Attachment, Markup, Sheet, TagDefinitionNode, KEYWORDS_ATTACHMENT};
