//! Markdown serialization of rendered sheets.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;

use super::{FrontMatter, RenderOptions, RenderedDocument};

/// Convert a rendered document to Markdown text.
pub fn to_markdown(doc: &RenderedDocument, options: &RenderOptions) -> String {
    let mut output = String::new();

    if options.include_frontmatter && !doc.front_matter.is_empty() {
        output.push_str(&front_matter_block(&doc.front_matter));
    }

    for line in &doc.lines {
        output.push_str(line);
    }

    output
}

/// Write a rendered document as Markdown.
pub fn write_markdown<W: Write>(
    doc: &RenderedDocument,
    writer: &mut W,
    options: &RenderOptions,
) -> Result<()> {
    writer.write_all(to_markdown(doc, options).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Write a rendered document to a Markdown file.
pub fn write_markdown_file<P: AsRef<Path>>(
    doc: &RenderedDocument,
    path: P,
    options: &RenderOptions,
) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_markdown(doc, &mut writer, options)
}

/// YAML front matter block, followed by a blank line.
fn front_matter_block(front_matter: &FrontMatter) -> String {
    format!("---\nkeywords: {}\n---\n\n", front_matter.tags.join(", "))
}
