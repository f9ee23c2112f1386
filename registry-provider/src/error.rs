use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, Error, Serialize, Deserialize)]
pub enum RegistryError {
    #[error("Resource[{0}] not found")]
    ResourceNotFound(String),

    #[error("Resource[{0}] already exists")]
    ResourceExists(String),

    #[error("{0}")]
    SerdeError(String),

    #[error("{0}")]
    ExternalStorageError(String),
}
