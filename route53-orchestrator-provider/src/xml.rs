//! Generic XML tree and the quick-xml backed parser
//!
//! Response decoding works on [`XmlNode`] rather than on typed serde structs: Route 53
//! responses mix repeated elements (`<HostedZone>` inside `<HostedZones>`) with optional
//! scalars, and a tree with named child access keeps the decoders explicit about both.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::{ProviderError, Result};
use crate::traits::XmlParser;

/// One element of a parsed document.
///
/// Names are local names: namespace prefixes are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    name: String,
    text: String,
    children: Vec<XmlNode>,
}

impl XmlNode {
    /// Create an element with no content.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unescaped text content (empty for container elements).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All child elements, in document order.
    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// Whether the element has no child elements.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// First child with the given name.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Every child with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Text of the first child with the given name.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(XmlNode::text)
    }

    /// Follow a path of child names.
    pub fn path(&self, names: &[&str]) -> Option<&XmlNode> {
        names.iter().try_fold(self, |node, name| node.child(name))
    }

    /// Parse the text of a child as `true`/`false`.
    pub fn child_bool(&self, name: &str) -> Option<bool> {
        match self.child_text(name)? {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    /// Parse the text of a child as a number.
    pub fn child_parse<T: std::str::FromStr>(&self, name: &str) -> Option<T> {
        self.child_text(name)?.trim().parse().ok()
    }

    fn push_child(&mut self, child: XmlNode) {
        self.children.push(child);
    }
}

/// [`XmlParser`] built on quick-xml's pull reader.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickXmlParser;

impl QuickXmlParser {
    fn parse_error(detail: impl std::fmt::Display) -> ProviderError {
        ProviderError::ParseError {
            provider: crate::PROVIDER_NAME.to_string(),
            detail: detail.to_string(),
        }
    }

    fn local_name(raw: &[u8]) -> String {
        String::from_utf8_lossy(raw).into_owned()
    }
}

impl XmlParser for QuickXmlParser {
    fn parse(&self, raw: &str) -> Result<XmlNode> {
        let mut reader = Reader::from_str(raw);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root: Option<XmlNode> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(start)) => {
                    stack.push(XmlNode::new(Self::local_name(
                        start.local_name().as_ref(),
                    )));
                }
                Ok(Event::Empty(empty)) => {
                    let node = XmlNode::new(Self::local_name(empty.local_name().as_ref()));
                    match stack.last_mut() {
                        Some(parent) => parent.push_child(node),
                        None if root.is_none() => root = Some(node),
                        None => return Err(Self::parse_error("multiple root elements")),
                    }
                }
                Ok(Event::End(_)) => {
                    let node = stack
                        .pop()
                        .ok_or_else(|| Self::parse_error("unbalanced closing tag"))?;
                    match stack.last_mut() {
                        Some(parent) => parent.push_child(node),
                        None if root.is_none() => root = Some(node),
                        None => return Err(Self::parse_error("multiple root elements")),
                    }
                }
                Ok(Event::Text(text)) => {
                    let text = text.unescape().map_err(Self::parse_error)?;
                    if let Some(node) = stack.last_mut() {
                        node.text.push_str(&text);
                    }
                }
                Ok(Event::CData(cdata)) => {
                    if let Some(node) = stack.last_mut() {
                        node.text
                            .push_str(&String::from_utf8_lossy(&cdata.into_inner()));
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    return Err(Self::parse_error(format!(
                        "at byte {}: {e}",
                        reader.buffer_position()
                    )));
                }
            }
        }

        if !stack.is_empty() {
            return Err(Self::parse_error("unexpected end of document"));
        }
        root.ok_or_else(|| Self::parse_error("document has no root element"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<XmlNode> {
        QuickXmlParser.parse(raw)
    }

    #[test]
    fn parses_nested_elements_with_namespace() {
        let root = parse(
            r#"<?xml version="1.0"?>
            <ListHostedZonesResponse xmlns="https://route53.amazonaws.com/doc/2013-04-01/">
                <HostedZones>
                    <HostedZone><Id>/hostedzone/Z1</Id><Name>a.com.</Name></HostedZone>
                    <HostedZone><Id>/hostedzone/Z2</Id><Name>b.com.</Name></HostedZone>
                </HostedZones>
                <IsTruncated>false</IsTruncated>
            </ListHostedZonesResponse>"#,
        )
        .unwrap();

        assert_eq!(root.name(), "ListHostedZonesResponse");
        let zones = root.child("HostedZones").unwrap();
        let names: Vec<_> = zones
            .children_named("HostedZone")
            .filter_map(|z| z.child_text("Name"))
            .collect();
        assert_eq!(names, vec!["a.com.", "b.com."]);
        assert_eq!(root.child_bool("IsTruncated"), Some(false));
    }

    #[test]
    fn unescapes_entities_in_text() {
        let root = parse("<R><Value>&quot;v=spf1 &amp; more&quot;</Value></R>").unwrap();
        assert_eq!(root.child_text("Value"), Some("\"v=spf1 & more\""));
    }

    #[test]
    fn empty_elements_become_leaf_children() {
        let root = parse("<R><Marker/><MaxItems>100</MaxItems></R>").unwrap();
        assert_eq!(root.child_text("Marker"), Some(""));
        assert_eq!(root.child_parse::<u32>("MaxItems"), Some(100));
        assert!(root.child("Marker").unwrap().is_leaf());
    }

    #[test]
    fn path_follows_nested_children() {
        let root = parse("<R><A><B><C>deep</C></B></A></R>").unwrap();
        assert_eq!(root.path(&["A", "B", "C"]).map(XmlNode::text), Some("deep"));
        assert!(root.path(&["A", "X"]).is_none());
    }

    #[test]
    fn rejects_truncated_document() {
        assert!(matches!(
            parse("<R><A>"),
            Err(ProviderError::ParseError { .. })
        ));
    }

    #[test]
    fn rejects_empty_document() {
        assert!(matches!(parse(""), Err(ProviderError::ParseError { .. })));
    }
}
