//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod character_repository;
mod organization_repository;

pub use character_repository::*;
pub use organization_repository::*;
