use std::collections::HashMap;

use async_trait::async_trait;
use log::debug;
use serde_json::Value;

use registry_provider::{DataCollection, RegistryError};

/**
 * An in-memory data collection, the reference `DataCollection` backend.
 * Shared with a registry as `Arc<RwLock<MemoryCollection>>`. Iteration order
 * of `get_all` follows the underlying map and carries no guarantee.
 */
#[derive(Debug, Default)]
pub struct MemoryCollection {
    objects: HashMap<String, Value>,
}

impl MemoryCollection {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[async_trait]
impl DataCollection for MemoryCollection {
    #[tracing::instrument(level = "trace", skip(self))]
    async fn get_all(&self) -> Result<Vec<Value>, RegistryError> {
        Ok(self.objects.values().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<Value, RegistryError> {
        self.objects
            .get(id)
            .cloned()
            .ok_or_else(|| RegistryError::ResourceNotFound(id.to_owned()))
    }

    async fn exists(&self, id: &str) -> Result<bool, RegistryError> {
        Ok(self.objects.contains_key(id))
    }

    async fn add(&mut self, id: &str, object: Value) -> Result<(), RegistryError> {
        if self.objects.contains_key(id) {
            return Err(RegistryError::ResourceExists(id.to_owned()));
        }
        debug!("Adding object: '{}'", id);
        self.objects.insert(id.to_owned(), object);
        Ok(())
    }

    async fn update(&mut self, id: &str, object: Value) -> Result<(), RegistryError> {
        if !self.objects.contains_key(id) {
            return Err(RegistryError::ResourceNotFound(id.to_owned()));
        }
        debug!("Updating object: '{}'", id);
        self.objects.insert(id.to_owned(), object);
        Ok(())
    }

    async fn remove(&mut self, id: &str) -> Result<(), RegistryError> {
        debug!("Removing object: '{}'", id);
        self.objects
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| RegistryError::ResourceNotFound(id.to_owned()))
    }
}
