//! Ulysses sheet parser.

use std::io::{Read, Seek};
use std::path::Path;

use crate::detect::{detect_format_from_bytes, detect_format_from_path, SheetFormat};
use crate::error::{Error, Result};
use crate::model::{Attachment, Child, Markup, Paragraph, Sheet, TagDefinitionNode, TagItem};

use super::archive::read_content_xml;
use super::options::ParseOptions;
use super::tree::{parse_document, XmlElement, XmlNode};

/// Parser for sheet XML (`Content.xml`) and `.ulyz` archives.
pub struct SheetParser {
    options: ParseOptions,
}

impl SheetParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parse a `.xml` or `.ulyz` file.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<Sheet> {
        let path = path.as_ref();
        log::info!("Loading {}", path.display());

        match detect_format_from_path(path)? {
            SheetFormat::Xml => {
                let data = std::fs::read(path)?;
                self.parse_xml_bytes(&data)
            }
            SheetFormat::Ulyz => {
                let file = std::fs::File::open(path)?;
                self.parse_archive(file)
            }
        }
    }

    /// Parse sheet XML or a `.ulyz` archive held in memory.
    pub fn parse_bytes(&self, data: &[u8]) -> Result<Sheet> {
        match detect_format_from_bytes(data)? {
            SheetFormat::Xml => self.parse_xml_bytes(data),
            SheetFormat::Ulyz => self.parse_archive(std::io::Cursor::new(data)),
        }
    }

    /// Parse a `.ulyz` archive.
    pub fn parse_archive<R: Read + Seek>(&self, reader: R) -> Result<Sheet> {
        let data = read_content_xml(reader)?;
        self.parse_xml_bytes(&data)
    }

    /// Parse UTF-8 sheet XML, with or without a byte order mark.
    pub fn parse_xml_bytes(&self, data: &[u8]) -> Result<Sheet> {
        let data = data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(data);
        let xml = std::str::from_utf8(data)
            .map_err(|e| Error::MalformedSheet(format!("not UTF-8: {}", e)))?;
        self.parse_str(xml)
    }

    /// Parse sheet XML.
    pub fn parse_str(&self, xml: &str) -> Result<Sheet> {
        let root = parse_document(xml)?;
        if root.name != "sheet" {
            return Err(Error::MalformedSheet(format!(
                "expected <sheet> root, found <{}>",
                root.name
            )));
        }

        let markup = root
            .find("markup")
            .ok_or_else(|| Error::MalformedSheet("no <markup> section".to_string()))?;
        let identifier = markup.attr("identifier");
        if !self.options.accepts_markup(identifier) {
            return Err(Error::UnsupportedMarkup(
                identifier.unwrap_or("<none>").to_string(),
            ));
        }

        let body = root
            .find("string")
            .ok_or_else(|| Error::MalformedSheet("no <string> body".to_string()))?;

        let attachments = root
            .find_all("attachment")
            .into_iter()
            .map(|a| Attachment::new(a.attr("type").unwrap_or_default(), a.text()))
            .collect();

        let definitions = markup
            .find_all("tag")
            .into_iter()
            .map(tag_definition_node)
            .collect();

        let paragraphs = body
            .find_all("p")
            .into_iter()
            .map(paragraph)
            .collect::<Result<Vec<_>>>()?;

        Ok(Sheet {
            attachments,
            markup: Markup {
                identifier: identifier.map(String::from),
                definitions,
            },
            paragraphs,
        })
    }
}

impl Default for SheetParser {
    fn default() -> Self {
        Self::new()
    }
}

fn tag_definition_node(tag: &XmlElement) -> TagDefinitionNode {
    TagDefinitionNode {
        definition: tag.attr("definition").map(String::from),
        pattern: tag.attr("pattern").map(String::from),
        start_pattern: tag.attr("startPattern").map(String::from),
        end_pattern: tag.attr("endPattern").map(String::from),
    }
}

fn paragraph(p: &XmlElement) -> Result<Paragraph> {
    let children = p
        .children
        .iter()
        .map(|node| match node {
            XmlNode::Text(text) => Ok(Child::Text(text.clone())),
            XmlNode::Element(el) => child_element(el),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Paragraph::with_children(children))
}

fn child_element(el: &XmlElement) -> Result<Child> {
    match el.name.as_str() {
        "tags" => Ok(Child::Tags(el.children.iter().filter_map(tag_item).collect())),
        "element" => {
            let kind = el.attr("kind").ok_or_else(|| {
                Error::MalformedSheet("<element> without kind attribute".to_string())
            })?;
            Ok(Child::element(kind, el.text()))
        }
        other => Ok(Child::Other {
            name: other.to_string(),
        }),
    }
}

/// Whitespace-only text between the items of a tag group is layout, not content.
fn tag_item(node: &XmlNode) -> Option<TagItem> {
    match node {
        XmlNode::Text(text) if text.trim().is_empty() => None,
        XmlNode::Text(text) => Some(TagItem::Text(text.clone())),
        XmlNode::Element(el) => Some(match el.attr("kind") {
            Some(kind) => TagItem::Reference {
                kind: kind.to_string(),
                text: el.text(),
            },
            None => TagItem::Text(el.text()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<sheet version="5" app_version="21.0">
<markup version="1" identifier="markdownl" displayName="Markdown XL">
<tag definition="heading1" pattern="#"/>
<tag definition="strong" startPattern="**" endPattern="**"/>
</markup>
<string xml:space="preserve">
<p><tags><tag kind="heading1"># </tag></tags>Title</p>
<p>Some <element kind="strong">bold</element> text</p>
</string>
<attachment type="keywords">rust,notes</attachment>
</sheet>"##;

    #[test]
    fn test_parse_sheet() {
        let sheet = SheetParser::new().parse_str(SHEET).unwrap();

        assert_eq!(sheet.markup.identifier.as_deref(), Some("markdownl"));
        assert_eq!(sheet.markup.definitions.len(), 2);
        assert_eq!(
            sheet.markup.definitions[1],
            TagDefinitionNode::paired("strong", "**", "**")
        );
        assert_eq!(sheet.attachments, vec![Attachment::keywords("rust,notes")]);
        assert_eq!(sheet.paragraph_count(), 2);

        assert_eq!(
            sheet.paragraphs[0].children,
            vec![
                Child::Tags(vec![TagItem::Reference {
                    kind: "heading1".into(),
                    text: "# ".into(),
                }]),
                Child::Text("Title".into()),
            ]
        );
        assert_eq!(
            sheet.paragraphs[1].children,
            vec![
                Child::Text("Some ".into()),
                Child::element("strong", "bold"),
                Child::Text(" text".into()),
            ]
        );
    }

    #[test]
    fn test_unknown_child_kept_as_other() {
        let xml = r#"<sheet><markup/><string><p>a<annotation>b</annotation></p></string></sheet>"#;
        let sheet = SheetParser::new().parse_str(xml).unwrap();
        assert_eq!(
            sheet.paragraphs[0].children[1],
            Child::Other {
                name: "annotation".into()
            }
        );
    }

    #[test]
    fn test_element_without_kind() {
        let xml = r#"<sheet><markup/><string><p><element>b</element></p></string></sheet>"#;
        assert!(matches!(
            SheetParser::new().parse_str(xml),
            Err(Error::MalformedSheet(_))
        ));
    }

    #[test]
    fn test_tag_item_without_kind_is_text() {
        let xml = r#"<sheet><markup/><string><p><tags><tag kind="a">x</tag>lit<b>y</b></tags></p></string></sheet>"#;
        let sheet = SheetParser::new().parse_str(xml).unwrap();
        assert_eq!(
            sheet.paragraphs[0].children[0],
            Child::Tags(vec![
                TagItem::Reference {
                    kind: "a".into(),
                    text: "x".into()
                },
                TagItem::text("lit"),
                TagItem::text("y"),
            ])
        );
    }

    #[test]
    fn test_tag_group_layout_whitespace_skipped() {
        let xml = "<sheet><markup/><string><p><tags>\n  <tag kind=\"h\">#</tag>\n</tags>Title</p></string></sheet>";
        let sheet = SheetParser::new().parse_str(xml).unwrap();
        assert_eq!(
            sheet.paragraphs[0].children,
            vec![
                Child::Tags(vec![TagItem::Reference {
                    kind: "h".into(),
                    text: "#".into(),
                }]),
                Child::Text("Title".into()),
            ]
        );
    }

    #[test]
    fn test_sheet_serde_roundtrip() {
        let sheet = SheetParser::new().parse_str(SHEET).unwrap();
        let json = serde_json::to_string(&sheet).unwrap();
        let back: Sheet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sheet);
    }

    #[test]
    fn test_wrong_root() {
        assert!(matches!(
            SheetParser::new().parse_str("<document/>"),
            Err(Error::MalformedSheet(_))
        ));
    }

    #[test]
    fn test_missing_sections() {
        let parser = SheetParser::new();
        assert!(parser.parse_str("<sheet><string/></sheet>").is_err());
        assert!(parser.parse_str("<sheet><markup/></sheet>").is_err());
    }

    #[test]
    fn test_markup_identifier_required() {
        let parser = SheetParser::with_options(ParseOptions::new().markdown_xl_only());
        assert!(parser.parse_str(SHEET).is_ok());

        let other = SHEET.replace("markdownl", "minimark");
        assert!(matches!(
            parser.parse_str(&other),
            Err(Error::UnsupportedMarkup(ref id)) if id == "minimark"
        ));
    }

    #[test]
    fn test_parse_bytes_with_bom() {
        let mut data = b"\xEF\xBB\xBF".to_vec();
        data.extend_from_slice(SHEET.as_bytes());
        let sheet = SheetParser::new().parse_bytes(&data).unwrap();
        assert_eq!(sheet.paragraph_count(), 2);
    }

    #[test]
    fn test_attachment_without_type() {
        let xml = r#"<sheet><markup/><string/><attachment>x</attachment></sheet>"#;
        let sheet = SheetParser::new().parse_str(xml).unwrap();
        assert_eq!(sheet.attachments, vec![Attachment::new("", "x")]);
        assert!(sheet.is_empty());
    }
}
