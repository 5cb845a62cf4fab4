//! Request-level fields that sit outside the form

use serde_json::{Map, Value};

use super::errors::FormErrors;
use super::fields::{self, FieldData};

pub const CHARACTER_ID: &str = "character_id";
pub const IS_PREFERRED_ORG_SAVE: &str = "is_preferred_org_save";

/// Read the target character's identifier from request data
pub fn character_id(data: &Map<String, Value>) -> Result<i64, FormErrors> {
    match fields::integer(data.get(CHARACTER_ID)) {
        FieldData::Bound(Some(id)) => Ok(id),
        FieldData::Bound(None) => Err(FormErrors::single(CHARACTER_ID, fields::NOT_BLANK)),
        FieldData::Invalid => Err(FormErrors::single(CHARACTER_ID, fields::NOT_VALID)),
    }
}

/// Loose boolean used for flags sent by both JSON and form-encoded clients.
///
/// Numeric strings follow the same rule as JSON numbers (non-zero is true),
/// so a form-encoded flag reads the same as its JSON counterpart.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => {
            let s = s.trim();
            match s.parse::<f64>() {
                Ok(f) if f.is_finite() => f != 0.0,
                _ => matches!(
                    s.to_ascii_lowercase().as_str(),
                    "true" | "on" | "yes"
                ),
            }
        }
        _ => false,
    }
}
