//! Form Binding
//!
//! Submits raw request data onto domain entities with validation.
//! Extra fields are ignored; missing fields are cleared.

mod clinician_site_admin;
mod errors;
mod fields;
mod request;

pub use clinician_site_admin::*;
pub use errors::*;
pub use request::*;
