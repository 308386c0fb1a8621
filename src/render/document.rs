//! Whole-sheet rendering.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::Sheet;

use super::{
    extract_keywords, ParagraphRenderer, RenderOptions, RenderResult, RenderStats, TagTable,
    Transliterator,
};

/// Metadata block written before the body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontMatter {
    /// Keywords from the sheet's keywords attachment
    pub tags: Vec<String>,
}

impl FrontMatter {
    /// Check if there is anything to write.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// A fully rendered sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedDocument {
    /// Front matter
    pub front_matter: FrontMatter,

    /// Output lines in paragraph order, each ending in `\n`
    pub lines: Vec<String>,
}

impl RenderedDocument {
    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Body text without front matter.
    pub fn body(&self) -> String {
        self.lines.concat()
    }
}

/// Renders whole sheets.
///
/// Keywords are extracted, the tag table is built, and every paragraph is
/// rendered in order. The first error aborts the sheet and no document is
/// produced.
pub struct DocumentRenderer {
    options: RenderOptions,
}

impl DocumentRenderer {
    /// Create a document renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a sheet.
    pub fn render(&self, sheet: &Sheet) -> Result<RenderedDocument> {
        Ok(self.render_with_stats(sheet)?.document)
    }

    /// Render a sheet, returning statistics alongside the document.
    pub fn render_with_stats(&self, sheet: &Sheet) -> Result<RenderResult> {
        let mut stats = RenderStats::new();

        let keywords = extract_keywords(&sheet.attachments);
        stats.keyword_count = keywords.len() as u32;

        let table = TagTable::from_nodes(&sheet.markup.definitions)?;
        stats.tag_definition_count = sheet.markup.definitions.len() as u32;

        log::info!("Document has {} line(s)", sheet.paragraphs.len());

        let transliterator = Transliterator::new(self.options.normalize_unicode);
        let renderer = ParagraphRenderer::with_transliterator(&table, transliterator);

        let lines = if self.options.parallel {
            self.render_parallel(sheet, &renderer, &mut stats)?
        } else {
            sheet
                .paragraphs
                .iter()
                .map(|para| renderer.render_with_stats(para, &mut stats))
                .collect::<Result<Vec<_>>>()?
        };

        let document = RenderedDocument {
            front_matter: FrontMatter { tags: keywords },
            lines,
        };

        Ok(RenderResult::new(document, stats))
    }

    fn render_parallel(
        &self,
        sheet: &Sheet,
        renderer: &ParagraphRenderer<'_>,
        stats: &mut RenderStats,
    ) -> Result<Vec<String>> {
        let rendered: Vec<Result<(String, RenderStats)>> = sheet
            .paragraphs
            .par_iter()
            .map(|para| -> Result<(String, RenderStats)> {
                let mut para_stats = RenderStats::new();
                let line = renderer.render_with_stats(para, &mut para_stats)?;
                Ok((line, para_stats))
            })
            .collect();

        // Walk in document order so the reported error is the first one.
        let mut lines = Vec::with_capacity(rendered.len());
        for result in rendered {
            let (line, para_stats) = result?;
            stats.merge(&para_stats);
            lines.push(line);
        }
        Ok(lines)
    }
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

/// Render a sheet with the given options.
pub fn render_sheet(sheet: &Sheet, options: &RenderOptions) -> Result<RenderedDocument> {
    DocumentRenderer::new(options.clone()).render(sheet)
}

/// Render a sheet and collect statistics.
pub fn render_sheet_with_stats(sheet: &Sheet, options: &RenderOptions) -> Result<RenderResult> {
    DocumentRenderer::new(options.clone()).render_with_stats(sheet)
}
