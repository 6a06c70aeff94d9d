//! Element converter trait definition.

use super::types::{Attributes, Conversion};

/// Error returned by a failing converter.
pub type ConverterFailure = Box<dyn std::error::Error + Send + Sync>;

/// Result returned by a converter.
pub type ConverterResult = std::result::Result<Conversion, ConverterFailure>;

/// Trait for element converters.
///
/// A converter maps the attributes of one element, plus the caller's
/// optional context data, to the `{type, props}` descriptor of the output
/// element. Children are handled by the engine, not by the converter.
///
/// Closures of the form `Fn(&Attributes, Option<&D>) -> ConverterResult`
/// implement this trait; register them with
/// [`Registry::register_fn`](super::Registry::register_fn) so their argument
/// types are inferred.
pub trait ElementConverter<D: ?Sized>: Send + Sync {
    /// Convert the element's attributes into an output descriptor.
    ///
    /// # Errors
    /// Any error is propagated unchanged out of the conversion call.
    fn convert(&self, attributes: &Attributes, data: Option<&D>) -> ConverterResult;
}

impl<D: ?Sized, F> ElementConverter<D> for F
where
    F: Fn(&Attributes, Option<&D>) -> ConverterResult + Send + Sync,
{
    fn convert(&self, attributes: &Attributes, data: Option<&D>) -> ConverterResult {
        self(attributes, data)
    }
}

/// Converter that emits a fixed output type with the raw attributes as props.
///
/// ```
/// use xml_to_tree::{AttributePassthrough, Attributes, ElementConverter};
///
/// let mut attributes = Attributes::new();
/// attributes.insert("name".to_string(), "simple".to_string());
///
/// let converter = AttributePassthrough::new("ul");
/// let conversion = ElementConverter::<()>::convert(&converter, &attributes, None).unwrap();
/// assert_eq!(conversion.kind, "ul");
/// assert_eq!(conversion.props["name"].as_str(), Some("simple"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributePassthrough {
    kind: String,
}

impl AttributePassthrough {
    /// Create a passthrough converter producing elements of type `kind`.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }

    /// The output type this converter produces.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

impl<D: ?Sized> ElementConverter<D> for AttributePassthrough {
    fn convert(&self, attributes: &Attributes, _data: Option<&D>) -> ConverterResult {
        Ok(Conversion::from_attributes(self.kind.clone(), attributes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::types::Value;

    struct FancyConverter;

    impl ElementConverter<str> for FancyConverter {
        fn convert(&self, _attributes: &Attributes, data: Option<&str>) -> ConverterResult {
            Ok(Conversion::new("div").with_prop("fancy", data.unwrap_or("plain")))
        }
    }

    #[test]
    fn test_converter_trait() {
        let converter = FancyConverter;
        let attributes = Attributes::new();

        let result = converter.convert(&attributes, Some("gold")).unwrap();
        assert_eq!(result.kind, "div");
        assert_eq!(result.props.get("fancy"), Some(&Value::from("gold")));

        let result = converter.convert(&attributes, None).unwrap();
        assert_eq!(result.props.get("fancy"), Some(&Value::from("plain")));
    }

    #[test]
    fn test_closure_converter() {
        let converter = |attributes: &Attributes, _data: Option<&()>| -> ConverterResult {
            Ok(Conversion::new("span").with_prop("count", attributes.len() as i64))
        };

        let mut attributes = Attributes::new();
        attributes.insert("x".to_string(), "1".to_string());

        let result = ElementConverter::convert(&converter, &attributes, None).unwrap();
        assert_eq!(result.kind, "span");
        assert_eq!(result.props.get("count"), Some(&Value::Int(1)));
    }

    #[test]
    fn test_attribute_passthrough_keeps_strings() {
        let mut attributes = Attributes::new();
        attributes.insert("a".to_string(), "1".to_string());
        attributes.insert("b".to_string(), "true".to_string());

        let converter = AttributePassthrough::new("ul");
        let result = ElementConverter::<()>::convert(&converter, &attributes, None).unwrap();
        assert_eq!(converter.kind(), "ul");
        assert_eq!(result.props.get("a"), Some(&Value::from("1")));
        assert_eq!(result.props.get("b"), Some(&Value::from("true")));
    }
}
