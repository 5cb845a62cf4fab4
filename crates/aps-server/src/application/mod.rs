//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and external collaborators.

mod compliance_service;

#[cfg(test)]
pub mod testing;

pub use compliance_service::{ComplianceService, SavedCompliance};
