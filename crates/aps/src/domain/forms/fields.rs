//! Scalar coercion and constraint checks shared by forms

use serde_json::Value;
use validator::{ValidateEmail, ValidateLength};

pub(crate) const NOT_BLANK: &str = "This value should not be blank.";
pub(crate) const NOT_VALID: &str = "This value is not valid.";
pub(crate) const INVALID_EMAIL: &str = "This value is not a valid email address.";
pub(crate) const INVALID_PHONE: &str = "This value is not a valid phone number.";

pub(crate) fn too_long(max: usize) -> String {
    format!("This value is too long. It should have {max} characters or less.")
}

/// Submitted value after transformation.
/// `Invalid` fields leave the entity untouched.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FieldData<T> {
    Bound(Option<T>),
    Invalid,
}

impl<T: Clone> FieldData<T> {
    pub(crate) fn value(&self) -> Option<&T> {
        match self {
            Self::Bound(value) => value.as_ref(),
            Self::Invalid => None,
        }
    }

    pub(crate) fn is_blank(&self) -> bool {
        matches!(self, Self::Bound(None))
    }

    pub(crate) fn apply(&self, target: &mut Option<T>) {
        if let Self::Bound(value) = self {
            *target = value.clone();
        }
    }
}

/// Text input: scalars are stringified and trimmed, empty becomes `None`
pub(crate) fn text(value: Option<&Value>) -> FieldData<String> {
    let raw = match value {
        None | Some(Value::Null) => return FieldData::Bound(None),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(true)) => "1".to_string(),
        Some(Value::Bool(false)) => String::new(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => return FieldData::Invalid,
    };

    if raw.is_empty() {
        FieldData::Bound(None)
    } else {
        FieldData::Bound(Some(raw))
    }
}

/// Integer input: JSON integers or numeric strings
pub(crate) fn integer(value: Option<&Value>) -> FieldData<i64> {
    match value {
        None | Some(Value::Null) => FieldData::Bound(None),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => FieldData::Bound(Some(i)),
            None => FieldData::Invalid,
        },
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return FieldData::Bound(None);
            }
            match trimmed.parse::<i64>() {
                Ok(i) => FieldData::Bound(Some(i)),
                Err(_) => FieldData::Invalid,
            }
        }
        Some(_) => FieldData::Invalid,
    }
}

/// Address with a dotted domain, as browsers validate `type="email"`
pub(crate) fn is_valid_email(email: &str) -> bool {
    email.validate_email()
        && email
            .rsplit_once('@')
            .is_some_and(|(_, domain)| domain.contains('.'))
}

pub(crate) fn is_within_length(value: &str, max: usize) -> bool {
    value.validate_length(None, Some(max as u64), None)
}

pub(crate) fn is_valid_phone(phone: &str) -> bool {
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | '.' | ' '));
    let digits = phone.chars().filter(char::is_ascii_digit).count();

    allowed && (7..=15).contains(&digits)
}
