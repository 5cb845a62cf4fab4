//! In-memory ports for service and route tests

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use aps::{
    Character, CharacterRepository, ComplianceAgreementNumber, ContactManager, DomainError,
    Organization, OrganizationRepository,
};

use super::ComplianceService;

#[derive(Default)]
pub struct InMemoryCharacterRepository {
    characters: Mutex<HashMap<i64, Character>>,
    saves: AtomicUsize,
}

impl InMemoryCharacterRepository {
    pub fn insert(&self, character: Character) {
        self.characters
            .lock()
            .unwrap()
            .insert(character.id, character);
    }

    pub fn get(&self, id: i64) -> Option<Character> {
        self.characters.lock().unwrap().get(&id).cloned()
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CharacterRepository for InMemoryCharacterRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Character>, DomainError> {
        Ok(self.get(id))
    }

    async fn save(&self, character: &Character) -> Result<Character, DomainError> {
        let mut characters = self.characters.lock().unwrap();
        let current = characters
            .get(&character.id)
            .ok_or_else(|| DomainError::not_found("Character", character.id))?;

        let mut stored = character.clone();
        stored.version = current.version + 1;
        characters.insert(stored.id, stored.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);

        Ok(stored)
    }
}

#[derive(Default)]
pub struct InMemoryOrganizationRepository {
    organizations: Mutex<HashMap<i64, Organization>>,
}

impl InMemoryOrganizationRepository {
    pub fn insert(&self, organization: Organization) {
        self.organizations
            .lock()
            .unwrap()
            .insert(organization.id, organization);
    }
}

#[async_trait]
impl OrganizationRepository for InMemoryOrganizationRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Organization>, DomainError> {
        Ok(self.organizations.lock().unwrap().get(&id).cloned())
    }
}

/// Records which characters had their preferred organization saved
#[derive(Default)]
pub struct RecordingContactManager {
    calls: Mutex<Vec<i64>>,
    fail: bool,
}

impl RecordingContactManager {
    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn calls(&self) -> Vec<i64> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ContactManager for RecordingContactManager {
    async fn save_preferred_organization(&self, character: &Character) -> Result<(), DomainError> {
        self.calls.lock().unwrap().push(character.id);
        if self.fail {
            return Err(DomainError::ExternalService(
                "contact manager unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

/// One character (version 1) in one organization
pub struct Fixture {
    pub characters: Arc<InMemoryCharacterRepository>,
    pub organizations: Arc<InMemoryOrganizationRepository>,
    pub contacts: Arc<RecordingContactManager>,
}

impl Fixture {
    pub const CHARACTER_ID: i64 = 5;
    pub const ORGANIZATION_ID: i64 = 12;
    pub const COMPLIANCE_NUMBER: &'static str = "CA-ADMIN-2024";

    pub fn new() -> Self {
        Self::with_contacts(RecordingContactManager::default())
    }

    pub fn with_failing_contacts() -> Self {
        Self::with_contacts(RecordingContactManager::failing())
    }

    fn with_contacts(contacts: RecordingContactManager) -> Self {
        let characters = Arc::new(InMemoryCharacterRepository::default());
        characters.insert(Character::new(Self::CHARACTER_ID));

        let organizations = Arc::new(InMemoryOrganizationRepository::default());
        organizations.insert(Organization::new(
            Self::ORGANIZATION_ID,
            "Northside Clinic".to_string(),
        ));

        Self {
            characters,
            organizations,
            contacts: Arc::new(contacts),
        }
    }

    pub fn service(&self) -> ComplianceService {
        ComplianceService::new(
            self.characters.clone(),
            self.organizations.clone(),
            self.contacts.clone(),
            ComplianceAgreementNumber::parse(Self::COMPLIANCE_NUMBER).unwrap(),
        )
    }
}

pub fn valid_payload(preferred_org: bool) -> Map<String, Value> {
    json!({
        "character_id": Fixture::CHARACTER_ID,
        "is_preferred_org_save": preferred_org,
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": "ada@example.org",
        "phone": "555-867-5309",
        "job_title": "Site Administrator",
        "organization": Fixture::ORGANIZATION_ID,
        "referrer": "onboarding-wizard"
    })
    .as_object()
    .cloned()
    .unwrap()
}
