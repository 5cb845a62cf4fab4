//! Domain Layer
//!
//! Pure domain logic without infrastructure dependencies.
//! Contains entities, value objects, form binding, and errors.

pub mod entities;
pub mod errors;
pub mod forms;
pub mod value_objects;

// Re-exports for convenience
pub use entities::*;
pub use errors::*;
pub use forms::*;
pub use value_objects::*;
