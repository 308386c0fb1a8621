//! Tag resolution and paragraph reconstruction, plus output writers.

mod document;
mod inline;
mod json;
mod keywords;
mod markdown;
mod options;
mod paragraph;
mod result;
mod tags;
mod transliterate;

pub use document::{
    render_sheet, render_sheet_with_stats, DocumentRenderer, FrontMatter, RenderedDocument,
};
pub use inline::{process_element, process_tags, NodeDispatcher};
pub use json::{to_json, JsonFormat};
pub use keywords::{extract_keywords, split_keywords};
pub use markdown::{to_markdown, write_markdown, write_markdown_file};
pub use options::RenderOptions;
pub use paragraph::{ParagraphRenderer, LINE_TERMINATOR};
pub use result::{RenderResult, RenderStats};
pub use tags::{TagDefinition, TagTable};
pub use transliterate::{transliterate, Transliterator};
