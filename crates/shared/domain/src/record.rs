//! Record conversion for domain entities.
//!
//! A [`Record`] is the field-keyed document exchanged with repositories.
//! Entities are built from records through [`FromRecord`], which checks
//! required keys, deserializes, then runs the entity's validation rules.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use crate::constants::STORE_ASSIGNED_FIELDS;
use crate::error::{DomainError, DomainResult, FieldError, ValidationError};

/// Field-keyed document as stored by a repository.
pub type Record = Map<String, Value>;

/// Validated construction of an entity from a [`Record`].
pub trait FromRecord: Sized + Default + Serialize + DeserializeOwned + Validate {
    /// Keys that must be present (and non-null) for construction to proceed
    const REQUIRED_FIELDS: &'static [&'static str];

    /// Build the entity, reporting every offending field on failure.
    ///
    /// Missing keys are listed first, then keys whose value has the wrong
    /// type, then rule violations on the fields that remain.
    fn from_record(record: &Record) -> Result<Self, ValidationError> {
        let missing = missing_fields(record, Self::REQUIRED_FIELDS);
        let mut errors: Vec<FieldError> = missing
            .iter()
            .map(|field| FieldError::new(*field, "is required"))
            .collect();

        // Each key is type-checked on its own against the default entity,
        // so a bad value is reported under its own name.
        let base = Self::default()
            .to_record()
            .map_err(|e| ValidationError::single("record", e.to_string()))?;
        let mut accepted = base.clone();
        for (key, value) in record {
            if missing.iter().any(|field| *field == key.as_str()) {
                continue;
            }
            let mut candidate = base.clone();
            candidate.insert(key.clone(), value.clone());
            match serde_json::from_value::<Self>(Value::Object(candidate)) {
                Ok(_) => {
                    accepted.insert(key.clone(), value.clone());
                }
                Err(e) => errors.push(FieldError::new(key.as_str(), e.to_string())),
            }
        }

        let entity: Self = serde_json::from_value(Value::Object(accepted))
            .map_err(|e| ValidationError::single("record", e.to_string()))?;

        if let Err(rules) = entity.validate() {
            let rejected: Vec<String> = errors.iter().map(|f| f.field.clone()).collect();
            errors.extend(
                ValidationError::from(rules)
                    .fields
                    .into_iter()
                    .filter(|f| !rejected.contains(&f.field)),
            );
        }

        if errors.is_empty() {
            Ok(entity)
        } else {
            Err(ValidationError::new(errors))
        }
    }

    /// Build the entity from caller input for a new record.
    ///
    /// Store-assigned keys are dropped so the repository generates them.
    fn from_new_record(data: &Record) -> Result<Self, ValidationError> {
        let mut data = data.clone();
        for key in STORE_ASSIGNED_FIELDS {
            data.remove(*key);
        }
        Self::from_record(&data)
    }

    /// Normalized record for persistence
    fn to_record(&self) -> DomainResult<Record> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(DomainError::internal(format!(
                "entity serialized to a non-object value: {}",
                other
            ))),
            Err(e) => Err(DomainError::internal(e.to_string())),
        }
    }
}

/// Required keys that are absent or null
pub fn missing_fields<'a>(record: &Record, required: &[&'a str]) -> Vec<&'a str> {
    required
        .iter()
        .copied()
        .filter(|key| record.get(*key).map_or(true, Value::is_null))
        .collect()
}

/// Check that every required key is present and non-null
pub fn has_fields(record: &Record, required: &[&str]) -> bool {
    missing_fields(record, required).is_empty()
}
