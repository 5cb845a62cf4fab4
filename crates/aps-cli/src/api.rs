//! APS API Client

use anyhow::{bail, Context, Result};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{Map, Value};

/// API Client for the APS server
pub struct ApsClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Response Types
// ============================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveAdminComplianceResponse {
    pub organization_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct ValidationErrorResponse {
    errors: Vec<FieldError>,
}

/// Result of a compliance submission the server understood
#[derive(Debug)]
pub enum SaveOutcome {
    Saved { organization_id: i64 },
    Rejected(Vec<FieldError>),
}

impl ApsClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Submit the admin compliance form
    pub async fn save_admin_compliance(&self, payload: &Map<String, Value>) -> Result<SaveOutcome> {
        let url = format!("{}/aps/admin-compliance/save", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .context("Failed to connect to APS API")?;

        match resp.status() {
            status if status.is_success() => {
                let saved: SaveAdminComplianceResponse =
                    resp.json().await.context("Failed to parse response")?;
                Ok(SaveOutcome::Saved {
                    organization_id: saved.organization_id,
                })
            }
            StatusCode::BAD_REQUEST => {
                let body = resp.text().await.unwrap_or_default();
                match serde_json::from_str::<ValidationErrorResponse>(&body) {
                    Ok(rejected) => Ok(SaveOutcome::Rejected(rejected.errors)),
                    Err(_) => bail!("API error (400 Bad Request): {}", body),
                }
            }
            status => {
                let body = resp.text().await.unwrap_or_default();
                bail!("API error ({}): {}", status, body);
            }
        }
    }
}
