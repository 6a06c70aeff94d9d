//! Converter registry and traversal engine.
//!
//! Converters are registered for specific tag names. The engine walks the
//! XML tree, dispatches each element to its converter and assembles the
//! output tree bottom-up.

mod core;
mod element;
mod engine;
mod types;

pub use self::core::{validate, Registry};
pub use element::{AttributePassthrough, ConverterFailure, ConverterResult, ElementConverter};
pub use engine::visit_node;
pub use types::{
    Attributes, Conversion, Element, OutputNode, Props, Value, CHILDREN_PROP, KEY_PROP,
};
