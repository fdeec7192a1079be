//! Minimal read-only element tree for configuration documents.
//!
//! The loader consumes an already-materialised document tree rather than
//! streaming events, so this module builds a small owned [`Element`] tree
//! on top of `quick-xml` and exposes the handful of navigation primitives
//! the loader needs: attribute lookup, child lookup by tag name, and text
//! content.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

/// Errors raised while building the document tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum XmlError {
    /// The document could not be parsed.
    #[error("malformed XML: {0}")]
    Malformed(String),

    /// The document contains no root element.
    #[error("document contains no root element")]
    Empty,
}

/// One element of a configuration document.
///
/// Holds the tag name, the attributes in document order, the child
/// elements in document order, and the concatenated text content.
///
/// # Examples
///
/// ```
/// use adapter_stress::Element;
///
/// let doc = Element::parse_str(r#"<FxSpot ccypair="EURUSD"><ShiftSize>0.05</ShiftSize></FxSpot>"#)
///     .unwrap();
/// assert_eq!(doc.name(), "FxSpot");
/// assert_eq!(doc.attr("ccypair"), Some("EURUSD"));
/// assert_eq!(doc.child("ShiftSize").unwrap().text(), "0.05");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: String,
}

impl Element {
    /// Parses a document string into its root element.
    ///
    /// Text content is trimmed; processing instructions, comments and
    /// declarations are ignored.
    pub fn parse_str(xml: &str) -> Result<Element, XmlError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(start)) => {
                    stack.push(Element::from_start(&start)?);
                }
                Ok(Event::Empty(start)) => {
                    let element = Element::from_start(&start)?;
                    Self::close(&mut stack, &mut root, element)?;
                }
                Ok(Event::End(_)) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| XmlError::Malformed("unexpected closing tag".to_string()))?;
                    Self::close(&mut stack, &mut root, element)?;
                }
                Ok(Event::Text(text)) => {
                    let value = text
                        .unescape()
                        .map_err(|e| XmlError::Malformed(e.to_string()))?;
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&value);
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(XmlError::Malformed(e.to_string())),
            }
        }

        if !stack.is_empty() {
            return Err(XmlError::Malformed("unclosed element".to_string()));
        }
        root.ok_or(XmlError::Empty)
    }

    /// Returns the tag name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the trimmed text content.
    #[inline]
    pub fn text(&self) -> &str {
        self.text.trim()
    }

    /// Returns the value of the named attribute, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the first child element with the given tag name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Returns all child elements with the given tag name, in document order.
    pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Returns all child elements in document order.
    #[inline]
    pub fn child_nodes(&self) -> &[Element] {
        &self.children
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Element, XmlError> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| XmlError::Malformed(e.to_string()))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|e| XmlError::Malformed(e.to_string()))?
                .into_owned();
            attributes.push((key, value));
        }
        Ok(Element {
            name,
            attributes,
            children: Vec::new(),
            text: String::new(),
        })
    }

    fn close(
        stack: &mut Vec<Element>,
        root: &mut Option<Element>,
        element: Element,
    ) -> Result<(), XmlError> {
        match stack.last_mut() {
            Some(parent) => parent.children.push(element),
            None => {
                if root.is_some() {
                    return Err(XmlError::Malformed("multiple root elements".to_string()));
                }
                *root = Some(element);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_element() {
        let doc = Element::parse_str("<StressTesting/>").unwrap();
        assert_eq!(doc.name(), "StressTesting");
        assert!(doc.child_nodes().is_empty());
    }

    #[test]
    fn test_parse_nested_elements() {
        let doc = Element::parse_str(
            "<StressTesting><StressTest id=\"a\"/><StressTest id=\"b\"/></StressTesting>",
        )
        .unwrap();
        let ids: Vec<&str> = doc
            .children("StressTest")
            .map(|test| test.attr("id").unwrap())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_text_content() {
        let doc = Element::parse_str("<Shifts>  0.01,0.02  </Shifts>").unwrap();
        assert_eq!(doc.text(), "0.01,0.02");
    }

    #[test]
    fn test_parse_escaped_text() {
        let doc = Element::parse_str("<Name>A &amp; B</Name>").unwrap();
        assert_eq!(doc.text(), "A & B");
    }

    #[test]
    fn test_attr_missing() {
        let doc = Element::parse_str("<StressTest id=\"x\"/>").unwrap();
        assert_eq!(doc.attr("id"), Some("x"));
        assert_eq!(doc.attr("label"), None);
    }

    #[test]
    fn test_child_missing() {
        let doc = Element::parse_str("<A><B/></A>").unwrap();
        assert!(doc.child("B").is_some());
        assert!(doc.child("C").is_none());
    }

    #[test]
    fn test_children_filters_by_name() {
        let doc = Element::parse_str("<A><B/><C/><B/></A>").unwrap();
        assert_eq!(doc.children("B").count(), 2);
        assert_eq!(doc.child_nodes().len(), 3);
    }

    #[test]
    fn test_parse_empty_document() {
        assert_eq!(Element::parse_str(""), Err(XmlError::Empty));
    }

    #[test]
    fn test_parse_unclosed_element() {
        assert!(matches!(
            Element::parse_str("<A><B></A>"),
            Err(XmlError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_declaration_ignored() {
        let doc = Element::parse_str("<?xml version=\"1.0\"?><Root/>").unwrap();
        assert_eq!(doc.name(), "Root");
    }
}
