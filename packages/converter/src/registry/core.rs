//! Converter registry mapping tag names to element converters.

use std::collections::{HashMap, HashSet};
use std::fmt;

use super::element::{ConverterResult, ElementConverter};
use super::types::Attributes;

/// Registry mapping element tag names to converters.
///
/// Tag names are matched exactly against the element's qualified name
/// (`prefix:name` for prefixed elements). `D` is the type of the optional
/// context data handed to every converter.
pub struct Registry<D: ?Sized = ()> {
    converters: HashMap<String, Box<dyn ElementConverter<D>>>,
}

impl<D: ?Sized> Registry<D> {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            converters: HashMap::new(),
        }
    }

    /// Register a converter for a specific tag name.
    ///
    /// Registering the same tag twice replaces the earlier converter.
    pub fn register(
        &mut self,
        tag_name: impl Into<String>,
        converter: impl ElementConverter<D> + 'static,
    ) {
        self.converters.insert(tag_name.into(), Box::new(converter));
    }

    /// Register a closure as the converter for a tag name.
    pub fn register_fn<F>(&mut self, tag_name: impl Into<String>, converter: F)
    where
        F: Fn(&Attributes, Option<&D>) -> ConverterResult + Send + Sync + 'static,
    {
        self.register(tag_name, converter);
    }

    /// Builder variant of [`Registry::register`].
    #[must_use]
    pub fn with(
        mut self,
        tag_name: impl Into<String>,
        converter: impl ElementConverter<D> + 'static,
    ) -> Self {
        self.register(tag_name, converter);
        self
    }

    /// Builder variant of [`Registry::register_fn`].
    #[must_use]
    pub fn with_fn<F>(mut self, tag_name: impl Into<String>, converter: F) -> Self
    where
        F: Fn(&Attributes, Option<&D>) -> ConverterResult + Send + Sync + 'static,
    {
        self.register_fn(tag_name, converter);
        self
    }

    /// Get the converter registered for a tag name.
    #[must_use]
    pub fn get(&self, tag_name: &str) -> Option<&dyn ElementConverter<D>> {
        self.converters.get(tag_name).map(|c| c.as_ref())
    }

    /// Check if a converter is registered for a tag.
    #[must_use]
    pub fn has_converter(&self, tag_name: &str) -> bool {
        self.converters.contains_key(tag_name)
    }

    /// Return set of all registered tag names.
    #[must_use]
    pub fn registered_tags(&self) -> HashSet<&str> {
        self.converters.keys().map(|s| s.as_str()).collect()
    }

    /// Number of registered converters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.converters.len()
    }

    /// Check if no converter is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}

impl<D: ?Sized> Default for Registry<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: ?Sized> fmt::Debug for Registry<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<&str> = self.converters.keys().map(|s| s.as_str()).collect();
        tags.sort_unstable();
        f.debug_struct("Registry").field("tags", &tags).finish()
    }
}

/// Check that a registry can be used for conversion.
///
/// Every entry of a [`Registry`] is a converter by construction, so the only
/// way for a registry to be invalid is to be empty.
#[must_use]
pub fn validate<D: ?Sized>(registry: &Registry<D>) -> bool {
    !registry.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::element::AttributePassthrough;
    use crate::registry::types::Conversion;

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = Registry::<()>::new();
        registry.register("test", AttributePassthrough::new("div"));

        assert!(registry.get("test").is_some());
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_registry_register_fn() {
        let mut registry = Registry::<str>::new();
        registry.register_fn("greeting", |_, data| {
            Ok(Conversion::new("p").with_prop("who", data.unwrap_or("nobody")))
        });

        let converter = registry.get("greeting").unwrap();
        let result = converter.convert(&Attributes::new(), Some("Simba")).unwrap();
        assert_eq!(result.props["who"].as_str(), Some("Simba"));
    }

    #[test]
    fn test_registry_replaces_converter() {
        let registry = Registry::<()>::new()
            .with("a", AttributePassthrough::new("first"))
            .with("a", AttributePassthrough::new("second"));

        assert_eq!(registry.len(), 1);
        let result = registry
            .get("a")
            .unwrap()
            .convert(&Attributes::new(), None)
            .unwrap();
        assert_eq!(result.kind, "second");
    }

    #[test]
    fn test_registry_has_converter() {
        let registry = Registry::<()>::new().with_fn("test", |_, _| Ok(Conversion::new("x")));

        assert!(registry.has_converter("test"));
        assert!(!registry.has_converter("missing"));
        assert_eq!(registry.registered_tags(), HashSet::from(["test"]));
    }

    #[test]
    fn test_registry_is_case_sensitive() {
        let registry = Registry::<()>::new().with("Todo", AttributePassthrough::new("li"));

        assert!(registry.has_converter("Todo"));
        assert!(!registry.has_converter("todo"));
    }

    #[test]
    fn test_validate_accepts_non_empty_registry() {
        let registry = Registry::<()>::new()
            .with("foo", AttributePassthrough::new("foo"))
            .with("bar", AttributePassthrough::new("bar"))
            .with("baz", AttributePassthrough::new("baz"));

        assert!(validate(&registry));
    }

    #[test]
    fn test_validate_rejects_empty_registry() {
        assert!(!validate(&Registry::<()>::new()));
        assert!(!validate(&Registry::<()>::default()));
    }

    #[test]
    fn test_registry_debug_lists_sorted_tags() {
        let registry = Registry::<()>::new()
            .with("b", AttributePassthrough::new("b"))
            .with("a", AttributePassthrough::new("a"));

        assert_eq!(format!("{registry:?}"), r#"Registry { tags: ["a", "b"] }"#);
    }
}
