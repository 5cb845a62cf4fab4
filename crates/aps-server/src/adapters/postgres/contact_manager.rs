//! PostgreSQL implementation of ContactManager
//!
//! Preferred organizations are kept one per Character.

use async_trait::async_trait;
use sqlx::PgPool;

use aps::{Character, ContactManager, DomainError};

pub struct PgContactManager {
    pool: PgPool,
}

impl PgContactManager {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactManager for PgContactManager {
    async fn save_preferred_organization(&self, character: &Character) -> Result<(), DomainError> {
        let organization_id = character.organization_id.ok_or_else(|| {
            DomainError::Validation(format!("Character {} has no organization", character.id))
        })?;

        sqlx::query(
            r#"
            INSERT INTO preferred_organizations (character_id, organization_id)
            VALUES ($1, $2)
            ON CONFLICT (character_id)
            DO UPDATE SET organization_id = EXCLUDED.organization_id, updated_at = NOW()
            "#,
        )
        .bind(character.id)
        .bind(organization_id)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::ExternalService(e.to_string()))?;

        tracing::debug!(
            "Preferred organization {} saved for Character {}",
            organization_id,
            character.id
        );

        Ok(())
    }
}
