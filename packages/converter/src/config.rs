//! Configuration constants for the converter.

/// Message of the error returned when a converter registry is unusable.
pub const INVALID_REGISTRY_MESSAGE: &str = "Invalid value for converter map argument. Please use a non-empty map with converter functions as values.";

/// Warning logged when the XML input cannot be parsed.
pub const INVALID_XML_MESSAGE: &str = "Unable to parse invalid XML input. Please input valid XML.";

/// Default maximum element nesting depth accepted by the parser.
///
/// Checked by a flat token scan before roxmltree runs. roxmltree, the owned
/// tree builder and the conversion all recurse once per nesting level, and
/// this keeps them within a default thread stack in debug builds too.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Default node limit passed to roxmltree.
pub const DEFAULT_NODES_LIMIT: u32 = u32::MAX;
