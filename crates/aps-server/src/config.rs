//! Server configuration
//!
//! Values come from Shuttle secrets (Secrets.toml locally).

use anyhow::{Context, Result};

use aps::ComplianceAgreementNumber;

pub const COMPLIANCE_AGREEMENT_NUMBER_ADMIN: &str = "COMPLIANCE_AGREEMENT_NUMBER_ADMIN";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Stamped onto a Character when site-admin compliance is saved
    pub admin_compliance_number: ComplianceAgreementNumber,
}

impl ServerConfig {
    pub fn from_secrets(secrets: &shuttle_runtime::SecretStore) -> Result<Self> {
        Self::from_lookup(|key| secrets.get(key))
    }

    /// Build from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(COMPLIANCE_AGREEMENT_NUMBER_ADMIN)
            .with_context(|| format!("{} is not set", COMPLIANCE_AGREEMENT_NUMBER_ADMIN))?;

        let admin_compliance_number = ComplianceAgreementNumber::parse(&raw)
            .with_context(|| format!("{} is invalid", COMPLIANCE_AGREEMENT_NUMBER_ADMIN))?;

        Ok(Self {
            admin_compliance_number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_from_lookup() {
        let secrets = HashMap::from([(
            COMPLIANCE_AGREEMENT_NUMBER_ADMIN.to_string(),
            " CA-ADMIN-7 ".to_string(),
        )]);

        let config = ServerConfig::from_lookup(|key| secrets.get(key).cloned()).unwrap();
        assert_eq!(config.admin_compliance_number.as_str(), "CA-ADMIN-7");
    }

    #[test]
    fn test_missing_number_fails() {
        let err = ServerConfig::from_lookup(|_| None).unwrap_err();
        assert!(err.to_string().contains(COMPLIANCE_AGREEMENT_NUMBER_ADMIN));
    }

    #[test]
    fn test_blank_number_fails() {
        assert!(ServerConfig::from_lookup(|_| Some("  ".to_string())).is_err());
    }
}
