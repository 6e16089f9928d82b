use serde_yaml::Mapping;

/// A named entry of one of the document's top-level collections.
///
/// A component's name is the key it is stored under; it is not repeated
/// inside the mapping produced by [`Component::to_mapping`].
pub trait Component: Sized {
    /// The top-level key of the collection holding this kind of component.
    const COLLECTION: &'static str;

    /// Builds the component from its mapping. Recognized fields are decoded,
    /// everything else lands in `extra` in document order. Never fails.
    fn from_mapping(name: &str, data: &Mapping) -> Self;

    /// Produces the sparse mapping for this component: absent and empty
    /// fields are omitted and `extra` entries are merged in at the top level.
    fn to_mapping(&self) -> Mapping;

    fn name(&self) -> &str;
}
