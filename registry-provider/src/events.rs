use crate::{RegistryDescriptor, Resource};

/**
 * Lifecycle notifications emitted by a registry.
 * Events are delivered synchronously before the corresponding store write
 * completes, so a listener may observe a resource whose write later fails.
 */
#[derive(Clone, Debug)]
pub enum RegistryEvent<R>
where
    R: Resource,
{
    ResourceAdded {
        registry: RegistryDescriptor,
        resource: R,
    },
    ResourceUpdated {
        registry: RegistryDescriptor,
        old_resource: R,
        new_resource: R,
    },
    ResourceRemoved {
        registry: RegistryDescriptor,
        resource_id: String,
    },
}

/**
 * The notification sink interface
 * Registered listeners are called once per resource for every mutating
 * operation. Listener panics are not caught, delivery failures are the
 * listener's own concern.
 */
pub trait RegistryListener<R>: Send + Sync
where
    R: Resource,
{
    fn on_event(&self, event: &RegistryEvent<R>);
}
