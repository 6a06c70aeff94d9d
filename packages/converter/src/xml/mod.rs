//! XML node model, parser seam and extraction helpers.

mod node;
mod parser;
mod utils;

pub use node::{
    Attribute, NodeKind, XmlDocument, XmlNode, COMMENT_NODE, ELEMENT_NODE,
    PROCESSING_INSTRUCTION_NODE, TEXT_NODE,
};
pub use parser::{ParserOptions, RoxmlParser, XmlParser};
pub use utils::{attributes_of, children_of};
