//! Error types for the converter.
//!
//! `ConvertError` covers the failures that reach the caller. `ParseError`
//! is produced by parser implementations and absorbed by
//! [`Converter::convert`](crate::Converter::convert).

use thiserror::Error;

use crate::config::INVALID_REGISTRY_MESSAGE;
use crate::registry::ConverterFailure;

/// Main error type for the converter library.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The converter registry is empty.
    #[error("{}", INVALID_REGISTRY_MESSAGE)]
    InvalidRegistry,

    /// A registered converter failed.
    #[error("Converter for element <{tag_name}> failed: {source}")]
    Converter {
        tag_name: String,
        #[source]
        source: ConverterFailure,
    },
}

/// Error signalled by an XML parser.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input is not well-formed XML.
    #[error("XML parsing failed: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Elements are nested deeper than allowed.
    #[error("Element nesting exceeds the maximum depth of {max_depth}")]
    TooDeep { max_depth: usize },

    /// The parser refused the input for another reason.
    #[error("XML input rejected: {0}")]
    Rejected(String),
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
