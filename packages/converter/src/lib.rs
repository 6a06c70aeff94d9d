//! xml-to-tree - Convert XML documents into application-defined output trees.
//!
//! Callers register one converter per XML tag name. Converting a document
//! visits every node in document order: text becomes a string, registered
//! elements become [`Element`] nodes built from their converter's result,
//! and everything else is dropped.
//!
//! # Example
//!
//! ```
//! use xml_to_tree::{AttributePassthrough, Attributes, Conversion, Converter, Registry, Value};
//!
//! let registry = Registry::<()>::new()
//!     .with("List", AttributePassthrough::new("ul"))
//!     .with_fn("Todo", |attributes: &Attributes, _| {
//!         let done = attributes.get("done").is_some_and(|v| v == "yes");
//!         Ok(Conversion::new("li").with_prop("done", done))
//!     });
//! let converter = Converter::new(registry).unwrap();
//!
//! let tree = converter
//!     .convert(r#"<List title="chores"><Todo done="yes">Dishes</Todo></List>"#, None)
//!     .unwrap()
//!     .unwrap();
//! let list = tree.as_element().unwrap();
//!
//! assert_eq!(list.kind, "ul");
//! assert_eq!(list.prop("title"), Some(&Value::from("chores")));
//!
//! let todo = list.children().and_then(Value::as_element).unwrap();
//! assert_eq!(todo.prop("done").and_then(Value::as_bool), Some(true));
//! assert_eq!(todo.children(), Some(&Value::from("Dishes")));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Fixed messages and parser limits
//! - [`error`]: Error types and Result alias
//! - [`xml`]: Node model, parser seam and attribute/child extraction
//! - [`registry`]: Converter registry, output types and the traversal engine
//! - [`Converter`]: Facade combining a validated registry with a parser

pub mod config;
pub mod error;
pub mod registry;
pub mod xml;

mod converter;

pub use converter::Converter;

// Re-export commonly used items
pub use error::{ConvertError, ParseError, Result};
pub use registry::{
    validate, visit_node, AttributePassthrough, Attributes, Conversion, ConverterFailure,
    ConverterResult, Element, ElementConverter, OutputNode, Props, Registry, Value,
};
pub use xml::{ParserOptions, RoxmlParser, XmlDocument, XmlNode, XmlParser};
