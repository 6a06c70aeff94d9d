//! Traversal engine converting an XML node tree into an output tree.

use tracing::{debug, trace};

use super::core::Registry;
use super::types::{Element, OutputNode, Props, Value, CHILDREN_PROP, KEY_PROP};
use crate::error::{ConvertError, Result};
use crate::xml::{attributes_of, children_of, XmlNode};

/// Visit a node and its subtree, converting elements with the registry.
///
/// - A missing node yields `None`.
/// - A text node yields its text verbatim, including empty strings.
/// - A node without a tag name (comments, processing instructions) yields
///   `None` and its subtree is not visited.
/// - An element without a registered converter yields `None` and its whole
///   subtree is dropped.
/// - Any other element is converted: its props start from
///   `key = index.to_string()`, the converter's props are laid over them,
///   and the non-empty results of visiting its children are stored under
///   `children` (a single value for one child, an array for several, no
///   entry for none).
///
/// `index` is the node's position among all of its parent's child nodes.
///
/// # Errors
/// Returns `ConvertError::Converter` as soon as any converter in the subtree
/// fails; no partial tree is returned.
pub fn visit_node<D: ?Sized>(
    node: Option<&XmlNode>,
    index: usize,
    registry: &Registry<D>,
    data: Option<&D>,
) -> Result<Option<OutputNode>> {
    let Some(node) = node else {
        return Ok(None);
    };

    if node.is_text() {
        let text = node.value().unwrap_or_default();
        return Ok(Some(OutputNode::Text(text.to_string())));
    }

    let Some(tag_name) = node.tag_name() else {
        return Ok(None);
    };

    let Some(converter) = registry.get(tag_name) else {
        debug!(tag = %tag_name, "No converter found for element, dropping subtree");
        return Ok(None);
    };

    let attributes = attributes_of(Some(node));
    let conversion = converter
        .convert(&attributes, data)
        .map_err(|source| ConvertError::Converter {
            tag_name: tag_name.to_string(),
            source,
        })?;

    let mut props = Props::new();
    props.insert(KEY_PROP.to_string(), Value::String(index.to_string()));
    props.extend(conversion.props);

    let mut children = Vec::new();
    for (child_index, child) in children_of(Some(node)).into_iter().enumerate() {
        if let Some(output) = visit_node(Some(child), child_index, registry, data)? {
            children.push(Value::from(output));
        }
    }

    trace!(
        tag = %tag_name,
        kind = %conversion.kind,
        index,
        children = children.len(),
        "Converted element"
    );

    if children.len() > 1 {
        props.insert(CHILDREN_PROP.to_string(), Value::Array(children));
    } else if let Some(child) = children.pop() {
        props.insert(CHILDREN_PROP.to_string(), child);
    }

    Ok(Some(OutputNode::Element(Element {
        kind: conversion.kind,
        props,
    })))
}
