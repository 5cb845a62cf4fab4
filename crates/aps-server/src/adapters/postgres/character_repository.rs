//! PostgreSQL implementation of CharacterRepository

use async_trait::async_trait;
use sqlx::PgPool;

use aps::{Character, CharacterRepository, DomainError};

/// PostgreSQL implementation of CharacterRepository
pub struct PgCharacterRepository {
    pool: PgPool,
}

impl PgCharacterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct CharacterRow {
    id: i64,
    version: i32,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    job_title: Option<String>,
    organization_id: Option<i64>,
    site_admin_compliance_agreement: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<CharacterRow> for Character {
    fn from(row: CharacterRow) -> Self {
        Self {
            id: row.id,
            version: row.version,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone: row.phone,
            job_title: row.job_title,
            organization_id: row.organization_id,
            site_admin_compliance_agreement: row.site_admin_compliance_agreement,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl CharacterRepository for PgCharacterRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Character>, DomainError> {
        let row = sqlx::query_as::<_, CharacterRow>("SELECT * FROM characters WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn save(&self, character: &Character) -> Result<Character, DomainError> {
        let row = sqlx::query_as::<_, CharacterRow>(
            r#"
            UPDATE characters
            SET first_name = $2, last_name = $3, email = $4, phone = $5, job_title = $6,
                organization_id = $7, site_admin_compliance_agreement = $8,
                version = version + 1, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(character.id)
        .bind(&character.first_name)
        .bind(&character.last_name)
        .bind(&character.email)
        .bind(&character.phone)
        .bind(&character.job_title)
        .bind(character.organization_id)
        .bind(&character.site_admin_compliance_agreement)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?
        .ok_or_else(|| DomainError::not_found("Character", character.id))?;

        Ok(row.into())
    }
}
