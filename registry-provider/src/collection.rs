use std::fmt::Debug;

use async_trait::async_trait;
use serde_json::Value;

use crate::RegistryError;

/**
 * The data collection interface
 * An async key-value store holding the serialized form of resources, keyed by
 * resource identifier. The registry performs no locking around these calls,
 * concurrent mutations of the same identifier can interleave.
 */
#[async_trait]
pub trait DataCollection: Send + Sync + Debug {
    /**
     * Get all stored objects, in whatever order the store yields them.
     */
    async fn get_all(&self) -> Result<Vec<Value>, RegistryError>;

    /**
     * Get one stored object by identifier, fails if the identifier is absent.
     */
    async fn get(&self, id: &str) -> Result<Value, RegistryError>;

    /**
     * Determine whether an object with the identifier is stored.
     */
    async fn exists(&self, id: &str) -> Result<bool, RegistryError>;

    /**
     * Store a new object under the identifier.
     */
    async fn add(&mut self, id: &str, object: Value) -> Result<(), RegistryError>;

    /**
     * Replace the object stored under the identifier.
     */
    async fn update(&mut self, id: &str, object: Value) -> Result<(), RegistryError>;

    /**
     * Delete the object stored under the identifier.
     */
    async fn remove(&mut self, id: &str) -> Result<(), RegistryError>;
}
