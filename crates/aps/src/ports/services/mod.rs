//! Service Ports
//!
//! Abstract interfaces for collaborators invoked by the compliance flow.

mod contact_manager;

pub use contact_manager::*;
