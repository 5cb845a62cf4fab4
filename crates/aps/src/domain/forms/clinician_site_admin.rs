//! Clinician Site-Admin Form
//!
//! Binds the site-admin profile fields onto a [`Character`].

use serde_json::{Map, Value};

use super::errors::FormErrors;
use super::fields::{self, FieldData};
use crate::domain::entities::Character;

pub const FIRST_NAME: &str = "first_name";
pub const LAST_NAME: &str = "last_name";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";
pub const JOB_TITLE: &str = "job_title";
pub const ORGANIZATION: &str = "organization";
pub const VERSION: &str = "version";

const NAME_MAX_LENGTH: usize = 100;
const JOB_TITLE_MAX_LENGTH: usize = 255;

/// A submitted clinician site-admin form.
///
/// Every field the form knows about is read from the data; a field that is
/// absent binds as empty. Keys the form does not know are ignored.
#[derive(Debug, Clone)]
pub struct ClinicianSiteAdminForm {
    first_name: FieldData<String>,
    last_name: FieldData<String>,
    email: FieldData<String>,
    phone: FieldData<String>,
    job_title: FieldData<String>,
    organization: FieldData<i64>,
    version: FieldData<i32>,
    errors: FormErrors,
}

impl ClinicianSiteAdminForm {
    /// Transform and validate submitted data
    pub fn submit(data: &Map<String, Value>) -> Self {
        let version = match fields::integer(data.get(VERSION)) {
            FieldData::Bound(Some(v)) => match i32::try_from(v) {
                Ok(v) => FieldData::Bound(Some(v)),
                Err(_) => FieldData::Invalid,
            },
            FieldData::Bound(None) => FieldData::Bound(None),
            FieldData::Invalid => FieldData::Invalid,
        };

        let mut form = Self {
            first_name: fields::text(data.get(FIRST_NAME)),
            last_name: fields::text(data.get(LAST_NAME)),
            email: fields::text(data.get(EMAIL)),
            phone: fields::text(data.get(PHONE)),
            job_title: fields::text(data.get(JOB_TITLE)),
            organization: fields::integer(data.get(ORGANIZATION)),
            version,
            errors: FormErrors::new(),
        };
        form.validate();
        form
    }

    fn validate(&mut self) {
        let mut errors = FormErrors::new();

        transformation(&self.first_name, FIRST_NAME, &mut errors);
        not_blank(&self.first_name, FIRST_NAME, &mut errors);
        max_length(&self.first_name, FIRST_NAME, NAME_MAX_LENGTH, &mut errors);

        transformation(&self.last_name, LAST_NAME, &mut errors);
        not_blank(&self.last_name, LAST_NAME, &mut errors);
        max_length(&self.last_name, LAST_NAME, NAME_MAX_LENGTH, &mut errors);

        transformation(&self.email, EMAIL, &mut errors);
        not_blank(&self.email, EMAIL, &mut errors);
        if let Some(email) = self.email.value() {
            if !fields::is_valid_email(email) {
                errors.push(EMAIL, fields::INVALID_EMAIL);
            }
        }

        transformation(&self.phone, PHONE, &mut errors);
        if let Some(phone) = self.phone.value() {
            if !fields::is_valid_phone(phone) {
                errors.push(PHONE, fields::INVALID_PHONE);
            }
        }

        transformation(&self.job_title, JOB_TITLE, &mut errors);
        max_length(&self.job_title, JOB_TITLE, JOB_TITLE_MAX_LENGTH, &mut errors);

        transformation(&self.organization, ORGANIZATION, &mut errors);
        not_blank(&self.organization, ORGANIZATION, &mut errors);

        transformation(&self.version, VERSION, &mut errors);

        self.errors = errors;
    }

    /// Copy the transformed values onto the entity.
    /// Fields that failed transformation keep their current value, and an
    /// absent version never clears the entity's version.
    pub fn bind_onto(&self, character: &mut Character) {
        self.first_name.apply(&mut character.first_name);
        self.last_name.apply(&mut character.last_name);
        self.email.apply(&mut character.email);
        self.phone.apply(&mut character.phone);
        self.job_title.apply(&mut character.job_title);
        self.organization.apply(&mut character.organization_id);

        if let Some(version) = self.version.value() {
            character.version = *version;
        }
    }

    /// Organization chosen in the form, if it transformed cleanly
    pub fn organization_id(&self) -> Option<i64> {
        self.organization.value().copied()
    }

    /// Attach an error found outside the form itself (e.g. an unknown choice)
    pub fn add_error(&mut self, field: &str, message: &str) {
        self.errors.push(field, message);
    }

    pub fn reject_organization(&mut self) {
        self.add_error(ORGANIZATION, fields::NOT_VALID);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn into_errors(self) -> FormErrors {
        self.errors
    }
}

fn transformation<T: Clone>(data: &FieldData<T>, field: &str, errors: &mut FormErrors) {
    if matches!(data, FieldData::Invalid) {
        errors.push(field, fields::NOT_VALID);
    }
}

fn not_blank<T: Clone>(data: &FieldData<T>, field: &str, errors: &mut FormErrors) {
    if data.is_blank() {
        errors.push(field, fields::NOT_BLANK);
    }
}

fn max_length(data: &FieldData<String>, field: &str, max: usize, errors: &mut FormErrors) {
    if let Some(value) = data.value() {
        if !fields::is_within_length(value, max) {
            errors.push(field, fields::too_long(max));
        }
    }
}
