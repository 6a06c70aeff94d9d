//! Owned XML node model handed from the parser to the traversal engine.

/// DOM node type code of element nodes.
pub const ELEMENT_NODE: u16 = 1;
/// DOM node type code of text nodes (including CDATA content).
pub const TEXT_NODE: u16 = 3;
/// DOM node type code of processing instructions.
pub const PROCESSING_INSTRUCTION_NODE: u16 = 7;
/// DOM node type code of comments.
pub const COMMENT_NODE: u16 = 8;

/// Kind of an XML node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Element with a tag name, attributes and children.
    Element,
    /// Character data.
    Text,
    /// `<!-- ... -->`
    Comment,
    /// `<?target value?>`
    ProcessingInstruction,
}

impl NodeKind {
    /// The DOM `nodeType` code for this kind.
    #[must_use]
    pub const fn node_type(self) -> u16 {
        match self {
            NodeKind::Element => ELEMENT_NODE,
            NodeKind::Text => TEXT_NODE,
            NodeKind::ProcessingInstruction => PROCESSING_INSTRUCTION_NODE,
            NodeKind::Comment => COMMENT_NODE,
        }
    }
}

/// A single `name="value"` attribute as exposed by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// A node of a parsed XML document.
///
/// Only elements carry a tag name; text, comment and processing instruction
/// nodes carry a value instead. Attributes and children keep the order in
/// which the parser exposed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlNode {
    kind: NodeKind,
    tag_name: Option<String>,
    value: Option<String>,
    attributes: Vec<Attribute>,
    children: Vec<XmlNode>,
}

impl XmlNode {
    fn with_kind(kind: NodeKind, tag_name: Option<String>, value: Option<String>) -> Self {
        Self {
            kind,
            tag_name,
            value,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create an element node.
    #[must_use]
    pub fn element(tag_name: impl Into<String>) -> Self {
        Self::with_kind(NodeKind::Element, Some(tag_name.into()), None)
    }

    /// Create a text node.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::with_kind(NodeKind::Text, None, Some(value.into()))
    }

    /// Create a comment node.
    #[must_use]
    pub fn comment(value: impl Into<String>) -> Self {
        Self::with_kind(NodeKind::Comment, None, Some(value.into()))
    }

    /// Create a processing instruction node holding its data.
    ///
    /// Like in the DOM, the target is not a tag name.
    #[must_use]
    pub fn processing_instruction(data: impl Into<String>) -> Self {
        Self::with_kind(NodeKind::ProcessingInstruction, None, Some(data.into()))
    }

    /// Append an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_attribute(name, value);
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn with_child(mut self, child: XmlNode) -> Self {
        self.push_child(child);
        self
    }

    /// Append an attribute in place.
    pub fn push_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.push(Attribute {
            name: name.into(),
            value: value.into(),
        });
    }

    /// Append a child node in place.
    pub fn push_child(&mut self, child: XmlNode) {
        self.children.push(child);
    }

    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The DOM `nodeType` code of this node.
    #[must_use]
    pub fn node_type(&self) -> u16 {
        self.kind.node_type()
    }

    #[must_use]
    pub fn is_text(&self) -> bool {
        self.node_type() == TEXT_NODE
    }

    #[must_use]
    pub fn is_element(&self) -> bool {
        self.node_type() == ELEMENT_NODE
    }

    /// Qualified tag name of an element; `None` for every other node.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        self.tag_name.as_deref()
    }

    /// Text of a text, comment or processing instruction node.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    #[must_use]
    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }
}

/// A parsed XML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    root: XmlNode,
}

impl XmlDocument {
    /// Create a document around its root element.
    #[must_use]
    pub fn new(root: XmlNode) -> Self {
        Self { root }
    }

    /// The root element of the document.
    #[must_use]
    pub fn document_element(&self) -> &XmlNode {
        &self.root
    }

    /// Take ownership of the root element.
    #[must_use]
    pub fn into_document_element(self) -> XmlNode {
        self.root
    }
}
