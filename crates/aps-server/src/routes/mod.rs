//! APS API Routes
//!
//! - /aps/admin-compliance/save - Site-admin compliance submission

pub mod compliance;
pub mod error;
pub mod request_data;
pub mod swagger;
