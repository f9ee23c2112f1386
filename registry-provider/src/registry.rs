use std::sync::Arc;

use log::debug;
use tokio::sync::RwLock;

use crate::{
    DataCollection, RegistryDescriptor, RegistryError, RegistryEvent, RegistryListener,
    RemoveTarget, Resource, SerializeOptions, Serializer,
};

/**
 * A facade for managing and persisting resources.
 * Binds a data collection and a serializer to a named, typed resource set and
 * emits one lifecycle event per resource for every mutation. The facade owns
 * no error taxonomy and no locking of its own, collection and serializer
 * failures surface to the caller unchanged.
 */
pub struct Registry<R>
where
    R: Resource,
{
    collection: Arc<RwLock<dyn DataCollection>>,
    serializer: Arc<dyn Serializer<R>>,
    registry_type: String,
    id: String,
    name: String,

    // Notification sinks, called synchronously before each store write
    pub listeners: Vec<Arc<dyn RegistryListener<R>>>,
}

impl<R> Registry<R>
where
    R: Resource,
{
    pub fn new(
        collection: Arc<RwLock<dyn DataCollection>>,
        serializer: Arc<dyn Serializer<R>>,
        registry_type: impl Into<String>,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            collection,
            serializer,
            registry_type: registry_type.into(),
            id: id.into(),
            name: name.into(),
            listeners: Default::default(),
        }
    }

    pub fn registry_type(&self) -> &str {
        &self.registry_type
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /**
     * Stable identity of this registry, not its contents.
     */
    pub fn descriptor(&self) -> RegistryDescriptor {
        RegistryDescriptor {
            registry_type: self.registry_type.clone(),
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }

    /**
     * Get all resources in this registry, in whatever order the underlying
     * collection yields them.
     */
    pub async fn get_all(&self) -> Result<Vec<R>, RegistryError> {
        self.collection
            .read()
            .await
            .get_all()
            .await?
            .into_iter()
            .map(|object| self.serializer.from_json(object))
            .collect()
    }

    /**
     * Get one resource by identifier, fails with the collection's not-found
     * error if the identifier is absent.
     */
    pub async fn get(&self, id: &str) -> Result<R, RegistryError> {
        let object = self.collection.read().await.get(id).await?;
        self.serializer.from_json(object)
    }

    /**
     * Determine whether a resource with the identifier exists, without
     * deserializing it.
     */
    pub async fn exists(&self, id: &str) -> Result<bool, RegistryError> {
        self.collection.read().await.exists(id).await
    }

    /**
     * Add the resource, keyed by its identifier.
     * The `ResourceAdded` event fires after serialization but before the
     * store write completes, so a failed write still leaves the event
     * delivered. A failed serialization emits nothing.
     */
    pub async fn add(&self, resource: &R, options: &SerializeOptions) -> Result<(), RegistryError> {
        let id = resource.identifier().to_owned();
        let object = self.serializer.to_json(resource, options)?;
        debug!("Adding resource '{}' to registry '{}'", id, self.name);
        self.notify(&RegistryEvent::ResourceAdded {
            registry: self.descriptor(),
            resource: resource.clone(),
        });
        self.collection.write().await.add(&id, object).await
    }

    /**
     * Add each resource strictly sequentially, every store write completes
     * before the next begins. Stops at the first failure, leaving prior adds
     * committed.
     */
    pub async fn add_all(
        &self,
        resources: &[R],
        options: &SerializeOptions,
    ) -> Result<(), RegistryError> {
        for resource in resources {
            self.add(resource, options).await?;
        }
        Ok(())
    }

    /**
     * Update the resource stored under its identifier.
     * The `ResourceUpdated` event carries the value stored immediately before
     * this call as `old_resource`. It fires after that value is fetched and
     * before the store write completes.
     */
    pub async fn update(
        &self,
        resource: &R,
        options: &SerializeOptions,
    ) -> Result<(), RegistryError> {
        let id = resource.identifier().to_owned();
        let object = self.serializer.to_json(resource, options)?;
        let old_resource = self.get(&id).await?;
        debug!("Updating resource '{}' in registry '{}'", id, self.name);
        self.notify(&RegistryEvent::ResourceUpdated {
            registry: self.descriptor(),
            old_resource,
            new_resource: resource.clone(),
        });
        self.collection.write().await.update(&id, object).await
    }

    /**
     * Update each resource strictly sequentially, stopping at the first
     * failure. No rollback of already-applied updates.
     */
    pub async fn update_all(
        &self,
        resources: &[R],
        options: &SerializeOptions,
    ) -> Result<(), RegistryError> {
        for resource in resources {
            self.update(resource, options).await?;
        }
        Ok(())
    }

    /**
     * Remove by resource instance or bare identifier, both produce the same
     * `ResourceRemoved` event. The event fires before the deletion completes.
     */
    pub async fn remove(&self, target: RemoveTarget<R>) -> Result<(), RegistryError> {
        let id = target.identifier().to_owned();
        debug!("Removing resource '{}' from registry '{}'", id, self.name);
        self.notify(&RegistryEvent::ResourceRemoved {
            registry: self.descriptor(),
            resource_id: id.clone(),
        });
        self.collection.write().await.remove(&id).await
    }

    /**
     * Remove each target strictly sequentially, stopping at the first
     * failure.
     */
    pub async fn remove_all(&self, targets: Vec<RemoveTarget<R>>) -> Result<(), RegistryError> {
        for target in targets {
            self.remove(target).await?;
        }
        Ok(())
    }

    fn notify(&self, event: &RegistryEvent<R>) {
        for listener in self.listeners.iter() {
            listener.on_event(event);
        }
    }
}
