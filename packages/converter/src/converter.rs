//! Converter facade: parse XML text and convert it with a validated registry.

use std::fmt;

use tracing::{debug, warn};

use crate::config::INVALID_XML_MESSAGE;
use crate::error::{ConvertError, Result};
use crate::registry::{validate, visit_node, OutputNode, Registry};
use crate::xml::{RoxmlParser, XmlParser};

/// Converts XML text into an output tree.
///
/// The registry is validated once at construction and never changes
/// afterwards, so a `Converter` can be shared between threads and every
/// call to [`Converter::convert`] is independent.
///
/// # Example
///
/// ```
/// use xml_to_tree::{Conversion, Converter, Registry, Value};
///
/// let registry = Registry::<()>::new().with_fn("a", |_, _| Ok(Conversion::new("x")));
/// let converter = Converter::new(registry).unwrap();
///
/// let tree = converter.convert("<a>hello</a>", None).unwrap().unwrap();
/// let element = tree.as_element().unwrap();
/// assert_eq!(element.kind, "x");
/// assert_eq!(element.children(), Some(&Value::from("hello")));
/// assert_eq!(element.key(), Some(&Value::from("0")));
/// ```
pub struct Converter<D: ?Sized = ()> {
    registry: Registry<D>,
    parser: Box<dyn XmlParser>,
}

impl<D: ?Sized> Converter<D> {
    /// Create a converter using the default roxmltree parser.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidRegistry` if the registry is empty.
    pub fn new(registry: Registry<D>) -> Result<Self> {
        Self::with_parser(registry, RoxmlParser::default())
    }

    /// Create a converter using a custom parser.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidRegistry` if the registry is empty.
    pub fn with_parser(registry: Registry<D>, parser: impl XmlParser + 'static) -> Result<Self> {
        if !validate(&registry) {
            return Err(ConvertError::InvalidRegistry);
        }

        Ok(Self {
            registry,
            parser: Box::new(parser),
        })
    }

    /// Get a reference to the underlying registry.
    #[must_use]
    pub fn registry(&self) -> &Registry<D> {
        &self.registry
    }

    /// Convert XML text into an output tree.
    ///
    /// Returns `Ok(None)` when the text cannot be parsed (a warning is
    /// logged) or when the root element has no converter. `data` is passed
    /// unchanged to every converter call.
    ///
    /// # Errors
    /// Returns `ConvertError::Converter` if a converter fails.
    pub fn convert(&self, xml: &str, data: Option<&D>) -> Result<Option<OutputNode>> {
        let document = match self.parser.parse(xml) {
            Ok(document) => document,
            Err(err) => {
                warn!(error = %err, "{}", INVALID_XML_MESSAGE);
                return Ok(None);
            }
        };

        visit_node(Some(document.document_element()), 0, &self.registry, data)
    }

    /// Convert raw bytes holding UTF-8 encoded XML.
    ///
    /// Bytes that are not valid UTF-8 yield `Ok(None)` without reaching the
    /// parser.
    ///
    /// # Errors
    /// Returns `ConvertError::Converter` if a converter fails.
    pub fn convert_bytes(&self, xml: &[u8], data: Option<&D>) -> Result<Option<OutputNode>> {
        match std::str::from_utf8(xml) {
            Ok(text) => self.convert(text, data),
            Err(err) => {
                debug!(error = %err, "XML input is not valid UTF-8, skipping conversion");
                Ok(None)
            }
        }
    }
}

impl<D: ?Sized> fmt::Debug for Converter<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
