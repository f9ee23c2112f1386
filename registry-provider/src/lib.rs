mod collection;
mod error;
mod events;
mod models;
mod registry;
mod serializer;

pub use collection::*;
pub use error::RegistryError;
pub use events::*;
pub use models::*;
pub use registry::*;
pub use serializer::*;
