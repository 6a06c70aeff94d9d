//! XML parser seam and its roxmltree-backed implementation.

use quick_xml::events::Event;
use quick_xml::Reader;
use roxmltree::{Node, NodeType};

use crate::config::{DEFAULT_MAX_DEPTH, DEFAULT_NODES_LIMIT};
use crate::error::ParseError;

use super::node::{XmlDocument, XmlNode};

/// Parser collaborator turning XML text into an [`XmlDocument`].
///
/// Implementations must reject input that is not well-formed; the converter
/// trusts the error signal and never inspects the text itself.
pub trait XmlParser: Send + Sync {
    /// Parse XML text into a document.
    ///
    /// # Errors
    /// Returns a [`ParseError`] for malformed or rejected input.
    fn parse(&self, text: &str) -> Result<XmlDocument, ParseError>;
}

/// Limits applied while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Accept documents containing a DTD.
    pub allow_dtd: bool,
    /// Maximum number of nodes roxmltree may allocate.
    pub nodes_limit: u32,
    /// Maximum element nesting depth; the root element has depth 1.
    pub max_depth: usize,
}

impl ParserOptions {
    #[must_use]
    pub fn with_allow_dtd(mut self, allow_dtd: bool) -> Self {
        self.allow_dtd = allow_dtd;
        self
    }

    #[must_use]
    pub fn with_nodes_limit(mut self, nodes_limit: u32) -> Self {
        self.nodes_limit = nodes_limit;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            allow_dtd: false,
            nodes_limit: DEFAULT_NODES_LIMIT,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Strict XML parser built on roxmltree.
///
/// Element and attribute names are reported in their qualified form
/// (`prefix:name`) when the document binds a prefix, like DOM `tagName`.
/// Namespace declarations are not reported as attributes.
#[derive(Debug, Clone, Default)]
pub struct RoxmlParser {
    options: ParserOptions,
}

impl RoxmlParser {
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }
}

impl XmlParser for RoxmlParser {
    fn parse(&self, text: &str) -> Result<XmlDocument, ParseError> {
        check_depth(text, self.options.max_depth)?;

        let mut options = roxmltree::ParsingOptions::default();
        options.allow_dtd = self.options.allow_dtd;
        options.nodes_limit = self.options.nodes_limit;

        let document = roxmltree::Document::parse_with_options(text, options)?;
        let root = build_node(document.root_element(), text, 1, self.options.max_depth)?;
        Ok(XmlDocument::new(root))
    }
}

/// Reject input nesting elements deeper than `max_depth`.
///
/// roxmltree recurses per nesting level, so this runs as a flat token scan
/// before it. Tokenizer errors end the scan; roxmltree reports them.
fn check_depth(text: &str, max_depth: usize) -> Result<(), ParseError> {
    let mut reader = Reader::from_str(text);
    let mut depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) => {
                depth += 1;
                if depth > max_depth {
                    return Err(ParseError::TooDeep { max_depth });
                }
            }
            Ok(Event::Empty(_)) => {
                if depth + 1 > max_depth {
                    return Err(ParseError::TooDeep { max_depth });
                }
            }
            Ok(Event::End(_)) => depth = depth.saturating_sub(1),
            Ok(Event::Eof) | Err(_) => return Ok(()),
            Ok(_) => {}
        }
    }
}

/// Copy a roxmltree node and its subtree into an owned [`XmlNode`].
///
/// Nodes produced by entity expansion are still checked against `max_depth`.
fn build_node(
    node: Node<'_, '_>,
    text: &str,
    depth: usize,
    max_depth: usize,
) -> Result<XmlNode, ParseError> {
    match node.node_type() {
        NodeType::Element => {
            if depth > max_depth {
                return Err(ParseError::TooDeep { max_depth });
            }

            let tag = node.tag_name();
            let name = qualified_name(node, element_qname(node, text), tag.namespace(), tag.name());
            let mut element = XmlNode::element(name);
            for attr in node.attributes() {
                let written = text.get(attr.range_qname());
                element.push_attribute(
                    qualified_name(node, written, attr.namespace(), attr.name()),
                    attr.value(),
                );
            }
            for child in node.children() {
                element.push_child(build_node(child, text, depth + 1, max_depth)?);
            }
            Ok(element)
        }
        NodeType::Text => Ok(XmlNode::text(node.text().unwrap_or_default())),
        NodeType::Comment => Ok(XmlNode::comment(node.text().unwrap_or_default())),
        NodeType::PI => {
            let data = node.pi().and_then(|pi| pi.value).unwrap_or_default();
            Ok(XmlNode::processing_instruction(data))
        }
        NodeType::Root => Err(ParseError::Rejected(
            "document node nested inside an element".to_string(),
        )),
    }
}

/// The element name as written in the start tag.
fn element_qname<'t>(node: Node<'_, '_>, text: &'t str) -> Option<&'t str> {
    let rest = text.get(node.range().start + 1..)?;
    rest.split(|c: char| c.is_whitespace() || c == '/' || c == '>').next()
}

/// Resolve the `prefix:name` form of an element or attribute name.
///
/// The name written in the source wins, so two prefixes bound to the same
/// URI stay distinct. Names without a usable source slice (entity
/// expansion) fall back to the first prefix in scope for the URI.
fn qualified_name(
    node: Node<'_, '_>,
    written: Option<&str>,
    namespace: Option<&str>,
    name: &str,
) -> String {
    if let Some(written) = written {
        if written == name
            || written
                .strip_suffix(name)
                .is_some_and(|prefix| prefix.ends_with(':') && prefix.len() > 1)
        {
            return written.to_string();
        }
    }

    match namespace
        .and_then(|uri| node.lookup_prefix(uri))
        .filter(|prefix| !prefix.is_empty())
    {
        Some(prefix) => format!("{prefix}:{name}"),
        None => name.to_string(),
    }
}
