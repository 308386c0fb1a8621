//! Paragraph reconstruction.

use crate::error::Result;
use crate::model::Paragraph;

use super::{NodeDispatcher, RenderStats, TagTable, Transliterator};

/// Line terminator appended to every rendered paragraph.
pub const LINE_TERMINATOR: char = '\n';

/// Renders paragraphs to finished output lines.
pub struct ParagraphRenderer<'a> {
    dispatcher: NodeDispatcher<'a>,
    transliterator: Transliterator,
}

impl<'a> ParagraphRenderer<'a> {
    /// Create a renderer over a tag table.
    pub fn new(table: &'a TagTable) -> Self {
        Self::with_transliterator(table, Transliterator::default())
    }

    /// Create a renderer with a specific transliterator.
    pub fn with_transliterator(table: &'a TagTable, transliterator: Transliterator) -> Self {
        Self {
            dispatcher: NodeDispatcher::new(table),
            transliterator,
        }
    }

    /// Render a paragraph to a single ASCII line ending in `\n`.
    pub fn render(&self, para: &Paragraph) -> Result<String> {
        self.render_with_stats(para, &mut RenderStats::new())
    }

    /// Render a paragraph, recording statistics.
    pub fn render_with_stats(&self, para: &Paragraph, stats: &mut RenderStats) -> Result<String> {
        let frags = para
            .children
            .iter()
            .map(|child| self.dispatcher.render_child(child, stats))
            .collect::<Result<Vec<_>>>()?;

        let joined = frags.join(" ");
        log::debug!("Built {:?}", joined);

        stats.paragraph_count += 1;
        stats.transliterated_char_count += Transliterator::count_non_ascii(&joined) as u32;

        let mut line = self.transliterator.process(&joined);
        line.push(LINE_TERMINATOR);
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{Child, TagItem};
    use crate::render::TagDefinition;

    fn table() -> TagTable {
        [
            ("bold", TagDefinition::paired("**", "**")),
            ("heading1", TagDefinition::simple("#")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_render_text_and_element() {
        let table = table();
        let renderer = ParagraphRenderer::new(&table);
        let para = Paragraph::with_children(vec![
            Child::Text("  Hello  ".into()),
            Child::element("bold", "world"),
        ]);
        assert_eq!(renderer.render(&para).unwrap(), "Hello **world**\n");
    }

    #[test]
    fn test_render_empty_paragraph() {
        let table = table();
        let renderer = ParagraphRenderer::new(&table);
        assert_eq!(renderer.render(&Paragraph::new()).unwrap(), "\n");
    }

    #[test]
    fn test_render_heading_group() {
        let table = table();
        let renderer = ParagraphRenderer::new(&table);
        let para = Paragraph::with_children(vec![
            Child::Tags(vec![TagItem::reference("heading1")]),
            Child::Text("Title".into()),
        ]);
        assert_eq!(renderer.render(&para).unwrap(), "# Title\n");
    }

    #[test]
    fn test_whitespace_text_keeps_separator() {
        let table = table();
        let renderer = ParagraphRenderer::new(&table);
        let para = Paragraph::with_children(vec![
            Child::element("bold", "a"),
            Child::Text(" ".into()),
            Child::element("bold", "b"),
        ]);
        assert_eq!(renderer.render(&para).unwrap(), "**a**  **b**\n");
    }

    #[test]
    fn test_render_transliterates() {
        let table = table();
        let renderer = ParagraphRenderer::new(&table);
        let mut stats = RenderStats::new();
        let para = Paragraph::with_children(vec![
            Child::Text("Café".into()),
            Child::element("bold", "déjà vu"),
        ]);
        let line = renderer.render_with_stats(&para, &mut stats).unwrap();
        assert_eq!(line, "Cafe **deja vu**\n");
        assert_eq!(stats.transliterated_char_count, 3);
        assert_eq!(stats.paragraph_count, 1);
    }

    #[test]
    fn test_non_ascii_line_keeps_terminator() {
        let table = table();
        let renderer = ParagraphRenderer::new(&table);
        let para = Paragraph::with_text("Caf\u{e9}");
        assert_eq!(renderer.render(&para).unwrap(), "Cafe\n");
    }

    #[test]
    fn test_unhandled_child_fails() {
        let table = table();
        let renderer = ParagraphRenderer::new(&table);
        let para = Paragraph::with_children(vec![
            Child::Text("before".into()),
            Child::Other {
                name: "annotation".into(),
            },
        ]);
        assert!(matches!(
            renderer.render(&para),
            Err(Error::UnhandledChildKind(_))
        ));
    }

    #[test]
    fn test_undefined_element_fails() {
        let table = table();
        let renderer = ParagraphRenderer::new(&table);
        let para = Paragraph::with_children(vec![Child::element("mark", "x")]);
        assert!(matches!(
            renderer.render(&para),
            Err(Error::UndefinedTagKind(_))
        ));
    }
}
