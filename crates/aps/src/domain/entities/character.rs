//! Character - Clinician / Site-Admin Record
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ComplianceAgreementNumber;

/// Character - a clinician or site-admin account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: i64,
    /// Version marker, bumped by the store on every update (not checked)
    pub version: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub job_title: Option<String>,
    /// Parent organization
    pub organization_id: Option<i64>,
    /// Compliance agreement number accepted as site admin
    pub site_admin_compliance_agreement: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Character {
    /// Create an empty Character with the given ID (version 1)
    pub fn new(id: i64) -> Self {
        let now = Utc::now();
        Self {
            id,
            version: 1,
            first_name: None,
            last_name: None,
            email: None,
            phone: None,
            job_title: None,
            organization_id: None,
            site_admin_compliance_agreement: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record the site-admin compliance agreement
    pub fn stamp_compliance(&mut self, number: &ComplianceAgreementNumber) {
        self.site_admin_compliance_agreement = Some(number.as_str().to_string());
        self.updated_at = Utc::now();
    }

    pub fn has_signed_compliance(&self) -> bool {
        self.site_admin_compliance_agreement.is_some()
    }
}
