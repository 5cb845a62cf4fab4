//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    ErrorResponse, FieldErrorResponse, SaveAdminComplianceRequest, SaveAdminComplianceResponse,
    ValidationErrorResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        crate::health_check,
        // Compliance endpoints
        super::compliance::save_admin_compliance,
    ),
    info(
        title = "APS API",
        version = "0.1.0",
        description = "Clinician site-admin compliance API",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Compliance", description = "Site-admin compliance agreements"),
    ),
    components(
        schemas(
            crate::HealthCheck,
            SaveAdminComplianceRequest,
            SaveAdminComplianceResponse,
            ValidationErrorResponse,
            FieldErrorResponse,
            ErrorResponse,
        )
    ),
)]
pub struct ApiDoc;
