//! APS API Models
//!
//! - Compliance: admin compliance save request/response
//! - Error: error payloads

mod compliance;
mod error;

pub use compliance::*;
pub use error::*;
