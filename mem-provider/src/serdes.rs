use std::marker::PhantomData;

use common_utils::Logged;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use registry_provider::{RegistryError, Resource, SerializeOptions, Serializer};

/**
 * A serializer for resource types that are plain serde data models.
 * A plain data model carries no relationship metadata, so
 * `convert_resources_to_relationships` has nothing to convert here. The
 * option is accepted for contract compatibility, schema-aware serializers own
 * its meaning.
 */
#[derive(Clone, Debug)]
pub struct SerdeSerializer<R> {
    _t: PhantomData<R>,
}

impl<R> SerdeSerializer<R> {
    pub fn new() -> Self {
        Self { _t: PhantomData }
    }
}

impl<R> Default for SerdeSerializer<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Serializer<R> for SerdeSerializer<R>
where
    R: Resource + Serialize + DeserializeOwned,
{
    fn to_json(&self, resource: &R, _options: &SerializeOptions) -> Result<Value, RegistryError> {
        serde_json::to_value(resource)
            .log()
            .map_err(|e| RegistryError::SerdeError(e.to_string()))
    }

    fn from_json(&self, object: Value) -> Result<R, RegistryError> {
        serde_json::from_value(object)
            .log()
            .map_err(|e| RegistryError::SerdeError(e.to_string()))
    }
}
