//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Character: Clinician / site-admin record
//! - Organization: Parent organization of a Character

mod character;
mod organization;

pub use character::*;
pub use organization::*;
