//! Character Repository Port
//!
//! Abstract interface for Character persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Character};

/// Repository interface for Character entities
#[async_trait]
pub trait CharacterRepository: Send + Sync {
    /// Find a Character by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Character>, DomainError>;

    /// Persist and flush an existing Character, returning the stored row.
    ///
    /// Fails with `DomainError::NotFound` if the row no longer exists.
    async fn save(&self, character: &Character) -> Result<Character, DomainError>;
}
