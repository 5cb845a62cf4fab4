//! APS Domain Library
//!
//! Core domain types and interfaces for the APS clinician site-admin
//! compliance flow.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Character, Organization)
//!   - `value_objects/`: Immutable value types (ComplianceAgreementNumber)
//!   - `forms/`: The clinician site-admin form binder and its errors
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External collaborator interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use aps::domain::{Character, ClinicianSiteAdminForm};
//! use aps::ports::{CharacterRepository, ContactManager};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Character, ClinicianSiteAdminForm, ComplianceAgreementNumber, DomainError, FormError,
    FormErrors, Organization,
};
pub use ports::{CharacterRepository, ContactManager, OrganizationRepository};
