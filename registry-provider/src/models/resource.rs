use std::fmt::Debug;

/**
 * A domain entity with a unique identifier.
 * Schema and validation are owned by the caller, the registry only reads the
 * identifier and the serialized form produced by the serializer.
 */
pub trait Resource: Clone + Debug + Send + Sync {
    fn identifier(&self) -> &str;
}

/// Removal input, either a bare identifier or a resolved resource instance.
/// Both forms produce the same `ResourceRemoved` event.
#[derive(Clone, Debug)]
pub enum RemoveTarget<R>
where
    R: Resource,
{
    ByIdentifier(String),
    ByResource(R),
}

impl<R> RemoveTarget<R>
where
    R: Resource,
{
    pub fn identifier(&self) -> &str {
        match self {
            RemoveTarget::ByIdentifier(id) => id,
            RemoveTarget::ByResource(resource) => resource.identifier(),
        }
    }
}

impl<R> From<String> for RemoveTarget<R>
where
    R: Resource,
{
    fn from(id: String) -> Self {
        RemoveTarget::ByIdentifier(id)
    }
}

impl<R> From<&str> for RemoveTarget<R>
where
    R: Resource,
{
    fn from(id: &str) -> Self {
        RemoveTarget::ByIdentifier(id.to_owned())
    }
}
