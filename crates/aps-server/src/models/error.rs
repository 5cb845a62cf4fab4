//! Error payloads

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use aps::FormErrors;

/// Field-level validation failure
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorResponse {
    pub field: String,
    pub message: String,
}

/// 400 response for a rejected form
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldErrorResponse>,
}

impl From<FormErrors> for ValidationErrorResponse {
    fn from(errors: FormErrors) -> Self {
        Self {
            errors: errors
                .into_iter()
                .map(|e| FieldErrorResponse {
                    field: e.field,
                    message: e.message,
                })
                .collect(),
        }
    }
}

/// Generic error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
