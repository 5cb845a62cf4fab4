//! Admin Compliance - Request/Response DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Save admin compliance request
///
/// Documentation only: the handler reads the body as a flat map.
/// Sent as JSON or form-encoded. Keys not listed here are accepted and ignored.
#[derive(ToSchema)]
pub struct SaveAdminComplianceRequest {
    /// Character to update
    #[schema(example = 5)]
    pub character_id: i64,
    /// Also save the organization as the Character's preferred organization
    pub is_preferred_org_save: Option<bool>,
    #[schema(example = "Ada")]
    pub first_name: String,
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[schema(example = "ada@example.org")]
    pub email: String,
    pub phone: Option<String>,
    pub job_title: Option<String>,
    /// Organization ID
    #[schema(example = 12)]
    pub organization: i64,
}

/// Save admin compliance response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveAdminComplianceResponse {
    pub organization_id: i64,
}
