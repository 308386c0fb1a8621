//! Sheet parsing module.

pub mod archive;
mod options;
mod sheet_parser;
mod tree;

pub use archive::{find_content_member, read_content_xml, CONTENT_XML};
pub use options::{ParseOptions, MARKDOWN_XL};
pub use sheet_parser::SheetParser;
