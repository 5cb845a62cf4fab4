//! Admin Compliance Routes
//!
//! HTTP handlers that delegate to ComplianceService for business logic.

use axum::{extract::State, routing::post, Json, Router};

use super::error::ApiError;
use super::request_data::RequestData;
use crate::models::{
    ErrorResponse, SaveAdminComplianceRequest, SaveAdminComplianceResponse,
    ValidationErrorResponse,
};
use crate::AppState;

/// Save site-admin compliance for a Character
#[utoipa::path(
    post,
    path = "/aps/admin-compliance/save",
    request_body(
        content = SaveAdminComplianceRequest,
        description = "JSON object or form-encoded fields"
    ),
    responses(
        (status = 200, description = "Compliance saved", body = SaveAdminComplianceResponse),
        (status = 400, description = "Form validation failed", body = ValidationErrorResponse),
        (status = 404, description = "Character not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Compliance"
)]
pub async fn save_admin_compliance(
    State(state): State<AppState>,
    RequestData(data): RequestData,
) -> Result<Json<SaveAdminComplianceResponse>, ApiError> {
    let saved = state.compliance_service.save_admin_compliance(data).await?;

    tracing::debug!(
        "Character {} at version {} (preferred organization saved: {})",
        saved.character.id,
        saved.character.version,
        saved.preferred_organization_saved
    );

    Ok(Json(SaveAdminComplianceResponse {
        organization_id: saved.organization_id,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/aps/admin-compliance/save", post(save_admin_compliance))
}
