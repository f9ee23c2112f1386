use serde_json::Value;

use crate::{RegistryError, Resource};

/// Options forwarded to the serializer on every write path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Permit full resources in places where a relationship reference is
    /// normally expected. Interpretation belongs to schema-aware serializers.
    pub convert_resources_to_relationships: bool,
}

/**
 * The serializer interface
 * Converts between stored objects and typed resources. Transforms are
 * synchronous, any failure surfaces to the registry caller unchanged.
 */
pub trait Serializer<R>: Send + Sync
where
    R: Resource,
{
    fn to_json(&self, resource: &R, options: &SerializeOptions) -> Result<Value, RegistryError>;

    fn from_json(&self, object: Value) -> Result<R, RegistryError>;
}
