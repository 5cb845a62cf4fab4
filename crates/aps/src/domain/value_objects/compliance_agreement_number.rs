//! ComplianceAgreementNumber - Configured admin compliance constant

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::errors::DomainError;

/// The agreement number stamped onto a Character when a site admin
/// accepts compliance. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ComplianceAgreementNumber(String);

impl ComplianceAgreementNumber {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation(
                "Compliance agreement number must not be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComplianceAgreementNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ComplianceAgreementNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ComplianceAgreementNumber> for String {
    fn from(value: ComplianceAgreementNumber) -> Self {
        value.0
    }
}
