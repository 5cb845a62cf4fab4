//! Admin Compliance Application Service (Use Case)
//!
//! Binds a site-admin form onto a Character, stamps the configured
//! compliance agreement and optionally saves the preferred organization.

use serde_json::{Map, Value};
use std::sync::Arc;

use aps::domain::forms::{self, VERSION};
use aps::{
    Character, CharacterRepository, ClinicianSiteAdminForm, ComplianceAgreementNumber,
    ContactManager, DomainError, OrganizationRepository,
};

/// Outcome of a successful compliance save
#[derive(Debug, Clone)]
pub struct SavedCompliance {
    pub organization_id: i64,
    pub character: Character,
    pub preferred_organization_saved: bool,
}

/// Application service for the admin compliance flow
pub struct ComplianceService {
    characters: Arc<dyn CharacterRepository>,
    organizations: Arc<dyn OrganizationRepository>,
    contacts: Arc<dyn ContactManager>,
    admin_compliance_number: ComplianceAgreementNumber,
}

impl ComplianceService {
    pub fn new(
        characters: Arc<dyn CharacterRepository>,
        organizations: Arc<dyn OrganizationRepository>,
        contacts: Arc<dyn ContactManager>,
        admin_compliance_number: ComplianceAgreementNumber,
    ) -> Self {
        Self {
            characters,
            organizations,
            contacts,
            admin_compliance_number,
        }
    }

    /// Save site-admin compliance for the character named in `data`
    pub async fn save_admin_compliance(
        &self,
        mut data: Map<String, Value>,
    ) -> Result<SavedCompliance, DomainError> {
        let character_id = forms::character_id(&data).map_err(DomainError::InvalidForm)?;

        let character = self
            .characters
            .find_by_id(character_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Character", character_id))?;

        data.insert(VERSION.to_string(), Value::from(character.version));
        let preferred_org_save = forms::is_truthy(data.get(forms::IS_PREFERRED_ORG_SAVE));

        let mut form = ClinicianSiteAdminForm::submit(&data);
        if let Some(organization_id) = form.organization_id() {
            if self.organizations.find_by_id(organization_id).await?.is_none() {
                form.reject_organization();
            }
        }

        if !form.is_valid() {
            tracing::info!(
                "Rejected admin compliance for Character {}: {} error(s)",
                character_id,
                form.errors().len()
            );
            return Err(DomainError::InvalidForm(form.into_errors()));
        }

        let mut draft = character;
        form.bind_onto(&mut draft);
        draft.stamp_compliance(&self.admin_compliance_number);

        let saved = self.characters.save(&draft).await?;

        if preferred_org_save {
            self.contacts.save_preferred_organization(&saved).await?;
        }

        let organization_id = saved
            .organization_id
            .ok_or_else(|| DomainError::Repository("Saved Character has no organization".into()))?;

        tracing::info!(
            "Saved admin compliance: Character {} (organization {}, preferred: {})",
            saved.id,
            organization_id,
            preferred_org_save
        );

        Ok(SavedCompliance {
            organization_id,
            character: saved,
            preferred_organization_saved: preferred_org_save,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{valid_payload, Fixture};
    use serde_json::json;

    #[tokio::test]
    async fn test_valid_payload_stamps_compliance() {
        let fixture = Fixture::new();

        let saved = fixture
            .service()
            .save_admin_compliance(valid_payload(false))
            .await
            .unwrap();

        assert_eq!(saved.organization_id, Fixture::ORGANIZATION_ID);
        assert!(!saved.preferred_organization_saved);
        assert_eq!(fixture.characters.save_count(), 1);

        let stored = fixture.characters.get(Fixture::CHARACTER_ID).unwrap();
        assert_eq!(
            stored.site_admin_compliance_agreement.as_deref(),
            Some(Fixture::COMPLIANCE_NUMBER)
        );
        assert_eq!(stored.first_name.as_deref(), Some("Ada"));
        assert_eq!(stored.version, 2);
    }

    #[tokio::test]
    async fn test_invalid_payload_persists_nothing() {
        let fixture = Fixture::new();
        let mut payload = valid_payload(true);
        payload.insert("email".into(), json!("nope"));
        payload.remove("last_name");

        let err = fixture
            .service()
            .save_admin_compliance(payload)
            .await
            .unwrap_err();

        match err {
            DomainError::InvalidForm(errors) => {
                assert_eq!(errors.len(), 2);
                assert_eq!(errors.for_field("email").len(), 1);
                assert_eq!(errors.for_field("last_name").len(), 1);
            }
            other => panic!("expected InvalidForm, got {other:?}"),
        }
        assert_eq!(fixture.characters.save_count(), 0);
        assert_eq!(fixture.contacts.call_count(), 0);

        let stored = fixture.characters.get(Fixture::CHARACTER_ID).unwrap();
        assert_eq!(stored.site_admin_compliance_agreement, None);
    }

    #[tokio::test]
    async fn test_preferred_org_flag_calls_contact_manager_once() {
        let fixture = Fixture::new();

        let saved = fixture
            .service()
            .save_admin_compliance(valid_payload(true))
            .await
            .unwrap();

        assert!(saved.preferred_organization_saved);
        assert_eq!(fixture.contacts.calls(), vec![Fixture::CHARACTER_ID]);
    }

    #[tokio::test]
    async fn test_preferred_org_flag_absent_never_calls_contact_manager() {
        let fixture = Fixture::new();
        let mut payload = valid_payload(false);
        payload.remove("is_preferred_org_save");

        fixture
            .service()
            .save_admin_compliance(payload)
            .await
            .unwrap();

        assert_eq!(fixture.contacts.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_character_is_not_found() {
        let fixture = Fixture::new();
        let mut payload = valid_payload(true);
        payload.insert("character_id".into(), json!(404));

        let err = fixture
            .service()
            .save_admin_compliance(payload)
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(fixture.characters.save_count(), 0);
        assert_eq!(fixture.contacts.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_character_id_is_invalid_form() {
        let fixture = Fixture::new();
        let mut payload = valid_payload(false);
        payload.remove("character_id");

        let err = fixture
            .service()
            .save_admin_compliance(payload)
            .await
            .unwrap_err();

        match err {
            DomainError::InvalidForm(errors) => {
                assert_eq!(
                    errors.for_field("character_id"),
                    vec!["This value should not be blank."]
                );
            }
            other => panic!("expected InvalidForm, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unknown_organization_is_rejected() {
        let fixture = Fixture::new();
        let mut payload = valid_payload(false);
        payload.insert("organization".into(), json!(999));

        let err = fixture
            .service()
            .save_admin_compliance(payload)
            .await
            .unwrap_err();

        match err {
            DomainError::InvalidForm(errors) => {
                assert_eq!(
                    errors.for_field("organization"),
                    vec!["This value is not valid."]
                );
            }
            other => panic!("expected InvalidForm, got {other:?}"),
        }
        assert_eq!(fixture.characters.save_count(), 0);
    }

    #[tokio::test]
    async fn test_submitted_version_is_overridden() {
        let fixture = Fixture::new();
        let mut payload = valid_payload(false);
        payload.insert("version".into(), json!(77));

        let saved = fixture
            .service()
            .save_admin_compliance(payload)
            .await
            .unwrap();

        // stored version 1, bumped once by the save
        assert_eq!(saved.character.version, 2);
    }

    #[tokio::test]
    async fn test_contact_manager_failure_keeps_compliance() {
        let fixture = Fixture::with_failing_contacts();

        let err = fixture
            .service()
            .save_admin_compliance(valid_payload(true))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::ExternalService(_)));
        assert_eq!(fixture.characters.save_count(), 1);
        let stored = fixture.characters.get(Fixture::CHARACTER_ID).unwrap();
        assert!(stored.has_signed_compliance());
    }
}
