//! Contact Manager Port
//!
//! Maintains a Character's contact preferences.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Character};

/// Contact preference collaborator
///
/// # Example
///
/// ```rust,ignore
/// use aps::ports::ContactManager;
///
/// struct PgContactManager { /* sqlx pool */ }
///
/// #[async_trait]
/// impl ContactManager for PgContactManager {
///     async fn save_preferred_organization(&self, character: &Character)
///         -> Result<(), DomainError>
///     {
///         // Upsert character -> organization
///     }
/// }
/// ```
#[async_trait]
pub trait ContactManager: Send + Sync {
    /// Record the Character's current organization as their preferred one
    async fn save_preferred_organization(&self, character: &Character)
        -> Result<(), DomainError>;
}
