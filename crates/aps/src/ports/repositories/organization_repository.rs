//! Organization Repository Port

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Organization};

/// Repository interface for Organization entities
#[async_trait]
pub trait OrganizationRepository: Send + Sync {
    /// Find an Organization by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Organization>, DomainError>;
}
