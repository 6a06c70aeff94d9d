//! Types shared by the registry, the converters and the traversal engine.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::Serialize;

/// Attributes of a single XML element, mapping attribute name to raw value.
///
/// Names keep the order in which the element declares them. Values are never
/// coerced: `<n a="1"/>` yields `a => "1"`.
pub type Attributes = IndexMap<String, String>;

/// Props of an output element.
pub type Props = BTreeMap<String, Value>;

/// Prop holding the key derived from the sibling index.
pub const KEY_PROP: &str = "key";

/// Prop holding the converted child nodes.
pub const CHILDREN_PROP: &str = "children";

/// Any value that can be stored in [`Props`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// String value, also used for converted text nodes
    String(String),
    /// Array of values, used for multiple children
    Array(Vec<Value>),
    /// Nested map of values
    Object(BTreeMap<String, Value>),
    /// A converted output element
    Element(Box<Element>),
}

impl Value {
    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Try to get value as boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get value as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get value as f64
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get value as string reference
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get value as array reference
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Try to get value as object reference
    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Try to get value as an output element
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Value::Element(e) => Some(e),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Array(values)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Object(map)
    }
}

impl From<Element> for Value {
    fn from(element: Element) -> Self {
        Value::Element(Box::new(element))
    }
}

impl From<OutputNode> for Value {
    fn from(node: OutputNode) -> Self {
        match node {
            OutputNode::Text(text) => Value::String(text),
            OutputNode::Element(element) => Value::Element(Box::new(element)),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Value::Int)
                .or_else(|| n.as_f64().map(Value::Float))
                .unwrap_or(Value::Null),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Output descriptor returned by a converter: the element type and its props.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Conversion {
    /// Type of the output element.
    #[serde(rename = "type")]
    pub kind: String,
    /// Props of the output element.
    pub props: Props,
}

impl Conversion {
    /// Create a conversion with the given type and no props.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            props: Props::new(),
        }
    }

    /// Create a conversion whose props are the element's raw attributes.
    #[must_use]
    pub fn from_attributes(kind: impl Into<String>, attributes: &Attributes) -> Self {
        let props = attributes
            .iter()
            .map(|(name, value)| (name.clone(), Value::String(value.clone())))
            .collect();
        Self {
            kind: kind.into(),
            props,
        }
    }

    /// Replace the props.
    #[must_use]
    pub fn with_props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    /// Set a single prop.
    #[must_use]
    pub fn with_prop(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }
}

/// A constructed output element.
///
/// `props` always carries a `key` and, when at least one child converted to
/// something, a `children` entry (a single value for one child, an array
/// otherwise).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    /// Type of the element, as returned by its converter.
    #[serde(rename = "type")]
    pub kind: String,
    /// Merged props including `key` and `children`.
    pub props: Props,
}

impl Element {
    /// The element key.
    #[must_use]
    pub fn key(&self) -> Option<&Value> {
        self.props.get(KEY_PROP)
    }

    /// The converted children, if any.
    #[must_use]
    pub fn children(&self) -> Option<&Value> {
        self.props.get(CHILDREN_PROP)
    }

    /// Get a prop by name.
    #[must_use]
    pub fn prop(&self, name: &str) -> Option<&Value> {
        self.props.get(name)
    }
}

/// Result of visiting a single XML node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OutputNode {
    /// Text content of a text node, verbatim.
    Text(String),
    /// A converted element.
    Element(Element),
}

impl OutputNode {
    /// Get the text if this is a text node.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            OutputNode::Text(text) => Some(text),
            OutputNode::Element(_) => None,
        }
    }

    /// Get the element if this is an element.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            OutputNode::Element(element) => Some(element),
            OutputNode::Text(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_conversion_from_attributes() {
        let mut attributes = Attributes::new();
        attributes.insert("a".to_string(), "1".to_string());
        attributes.insert("b".to_string(), "two".to_string());

        let conversion = Conversion::from_attributes("ul", &attributes);
        assert_eq!(conversion.kind, "ul");
        assert_eq!(conversion.props.get("a"), Some(&Value::from("1")));
        assert_eq!(conversion.props.get("b"), Some(&Value::from("two")));
    }

    #[test]
    fn test_conversion_with_prop() {
        let conversion = Conversion::new("div").with_prop("fancy", true);
        assert_eq!(conversion.props.get("fancy"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_value_accessors() {
        assert!(Value::Null.is_null());
        assert!(!Value::from(false).is_null());

        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from("true").as_bool(), None);

        assert_eq!(Value::from(7).as_int(), Some(7));
        assert_eq!(Value::from(7.5).as_int(), None);

        assert_eq!(Value::from(7.5).as_float(), Some(7.5));
        assert_eq!(Value::from(7).as_float(), Some(7.0));
        assert_eq!(Value::from("7").as_float(), None);
    }

    #[test]
    fn test_value_from_json() {
        let value = Value::from(json!({ "n": 5, "f": 1.5, "s": "x", "l": [null, true] }));
        let object = value.as_object().unwrap();
        assert_eq!(object.get("n"), Some(&Value::Int(5)));
        assert_eq!(object.get("f"), Some(&Value::Float(1.5)));
        assert_eq!(object.get("s").and_then(Value::as_str), Some("x"));
        assert_eq!(
            object.get("l"),
            Some(&Value::Array(vec![Value::Null, Value::Bool(true)]))
        );
    }

    #[test]
    fn test_output_node_into_value() {
        assert_eq!(
            Value::from(OutputNode::Text("hello".to_string())),
            Value::from("hello")
        );

        let element = Element {
            kind: "li".to_string(),
            props: Props::new(),
        };
        let value = Value::from(OutputNode::Element(element.clone()));
        assert_eq!(value.as_element(), Some(&element));
    }

    #[test]
    fn test_element_serializes_with_type_field() {
        let mut props = Props::new();
        props.insert(KEY_PROP.to_string(), Value::from("0"));
        props.insert(CHILDREN_PROP.to_string(), Value::from("hello"));
        let node = OutputNode::Element(Element {
            kind: "x".to_string(),
            props,
        });

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            json,
            json!({ "type": "x", "props": { "key": "0", "children": "hello" } })
        );
    }
}
