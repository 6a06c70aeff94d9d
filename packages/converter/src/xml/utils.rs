//! Attribute and child extraction for XML nodes.

use crate::registry::Attributes;

use super::node::XmlNode;

/// Get the attributes of a node as a fresh name → value map.
///
/// Returns an empty map for a missing node or a node without attributes.
/// Names keep the order the node exposes them in. When a name occurs more
/// than once the last value wins.
///
/// # Examples
/// ```
/// use xml_to_tree::xml::{attributes_of, XmlNode};
///
/// let node = XmlNode::element("n").with_attribute("a", "1").with_attribute("b", "two");
/// let attributes = attributes_of(Some(&node));
///
/// assert_eq!(attributes["a"], "1");
/// assert_eq!(attributes["b"], "two");
/// assert!(attributes_of(None).is_empty());
/// ```
pub fn attributes_of(node: Option<&XmlNode>) -> Attributes {
    let Some(node) = node else {
        return Attributes::new();
    };

    node.attributes()
        .iter()
        .map(|attr| (attr.name.clone(), attr.value.clone()))
        .collect()
}

/// Get the child nodes of a node in document order.
///
/// Text, comment and processing instruction children are included; deciding
/// what to do with them is up to the caller.
///
/// # Examples
/// ```
/// use xml_to_tree::xml::{children_of, XmlNode};
///
/// let node = XmlNode::element("p")
///     .with_child(XmlNode::element("a"))
///     .with_child(XmlNode::text("b"));
///
/// assert_eq!(children_of(Some(&node)).len(), 2);
/// assert!(children_of(None).is_empty());
/// ```
pub fn children_of(node: Option<&XmlNode>) -> Vec<&XmlNode> {
    node.map(|node| node.children().iter().collect())
        .unwrap_or_default()
}
