//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod compliance_agreement_number;

pub use compliance_agreement_number::*;
