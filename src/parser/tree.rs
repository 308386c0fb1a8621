//! Minimal element tree over quick-xml events.

use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Error, Result};

/// A node of the element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum XmlNode {
    Element(XmlElement),
    Text(String),
}

/// An element with its attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct XmlElement {
    /// Local name (namespace prefix stripped)
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    fn from_start(e: &BytesStart<'_>) -> Result<Self> {
        let name = String::from_utf8_lossy(local_name(e.name().as_ref())).into_owned();

        let mut attributes = Vec::new();
        for attr in e.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let key = String::from_utf8_lossy(local_name(attr.key.as_ref())).into_owned();
            let raw = String::from_utf8_lossy(&attr.value);
            let value = unescape(&raw)
                .map_err(|e| Error::MalformedSheet(format!("attribute {}: {}", key, e)))?
                .into_owned();
            attributes.push((key, value));
        }

        Ok(Self {
            name,
            attributes,
            children: Vec::new(),
        })
    }

    /// Attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Concatenated text of all descendants.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                XmlNode::Text(text) => out.push_str(text),
                XmlNode::Element(el) => el.collect_text(out),
            }
        }
    }

    /// First descendant element with the given name, in document order.
    pub fn find(&self, name: &str) -> Option<&XmlElement> {
        for child in &self.children {
            if let XmlNode::Element(el) = child {
                if el.name == name {
                    return Some(el);
                }
                if let Some(found) = el.find(name) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// All descendant elements with the given name, in document order.
    pub fn find_all(&self, name: &str) -> Vec<&XmlElement> {
        let mut found = Vec::new();
        self.collect_named(name, &mut found);
        found
    }

    fn collect_named<'a>(&'a self, name: &str, found: &mut Vec<&'a XmlElement>) {
        for child in &self.children {
            if let XmlNode::Element(el) = child {
                if el.name == name {
                    found.push(el);
                }
                el.collect_named(name, found);
            }
        }
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        // Entity references arrive as separate events; keep one text node per run.
        if let Some(XmlNode::Text(last)) = self.children.last_mut() {
            last.push_str(text);
        } else {
            self.children.push(XmlNode::Text(text.to_string()));
        }
    }
}

/// Parse a document into its root element.
///
/// Whitespace is preserved; comments, processing instructions and the
/// declaration are skipped.
pub(crate) fn parse_document(xml: &str) -> Result<XmlElement> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => stack.push(XmlElement::from_start(&e)?),
            Event::Empty(e) => {
                let element = XmlElement::from_start(&e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| Error::MalformedSheet("unbalanced end tag".to_string()))?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(e) => {
                if let Some(current) = stack.last_mut() {
                    current.push_text(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Event::CData(e) => {
                if let Some(current) = stack.last_mut() {
                    current.push_text(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::GeneralRef(e) => {
                if let Some(current) = stack.last_mut() {
                    let entity = String::from_utf8_lossy(e.as_ref());
                    let resolved =
                        resolve_entity(&entity).unwrap_or_else(|| format!("&{};", entity));
                    current.push_text(&resolved);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(Error::MalformedSheet(format!("unclosed element <{}>", open.name)));
    }

    root.ok_or_else(|| Error::MalformedSheet("document has no root element".to_string()))
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(XmlNode::Element(element));
        return Ok(());
    }
    if root.is_some() {
        return Err(Error::MalformedSheet(format!(
            "second root element <{}>",
            element.name
        )));
    }
    *root = Some(element);
    Ok(())
}

/// Strip a namespace prefix.
fn local_name(name: &[u8]) -> &[u8] {
    name.iter()
        .rposition(|&b| b == b':')
        .map(|i| &name[i + 1..])
        .unwrap_or(name)
}

/// Resolve predefined and numeric character references.
fn resolve_entity(entity: &str) -> Option<String> {
    match entity {
        "apos" => return Some("'".to_string()),
        "quot" => return Some("\"".to_string()),
        "lt" => return Some("<".to_string()),
        "gt" => return Some(">".to_string()),
        "amp" => return Some("&".to_string()),
        _ => {}
    }

    let code = if let Some(hex) = entity.strip_prefix("#x") {
        u32::from_str_radix(hex, 16).ok()?
    } else if let Some(dec) = entity.strip_prefix('#') {
        dec.parse::<u32>().ok()?
    } else {
        return None;
    };

    char::from_u32(code).map(|c| c.to_string())
}
