mod descriptor;
mod resource;

pub use descriptor::*;
pub use resource::*;
