//! Spa domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::record::FromRecord;

/// A spa venue offering services.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Spa {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(length(min = 1, max = 120, message = "must be 1-120 characters"))]
    pub name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 7, max = 20, message = "must be 7-20 characters"))]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 5.0, message = "must be between 0 and 5"))]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl FromRecord for Spa {
    const REQUIRED_FIELDS: &'static [&'static str] = &["name", "address"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use serde_json::{json, Value};

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("test record must be an object"),
        }
    }

    #[test]
    fn test_from_record() {
        let spa = Spa::from_record(&record(json!({
            "name": "Blue Lagoon",
            "address": "Grindavik 240",
            "city": "Grindavik",
            "rating": 4.5
        })))
        .unwrap();

        assert_eq!(spa.name, "Blue Lagoon");
        assert_eq!(spa.rating, Some(4.5));
    }

    #[test]
    fn test_rating_out_of_range() {
        let err = Spa::from_record(&record(json!({
            "name": "Blue Lagoon",
            "address": "Grindavik 240",
            "rating": 7.0
        })))
        .unwrap_err();

        assert_eq!(err.field_names(), vec!["rating"]);
    }

    #[test]
    fn test_missing_address() {
        let err = Spa::from_record(&record(json!({ "name": "Blue Lagoon" }))).unwrap_err();

        assert_eq!(err.field_names(), vec!["address"]);
    }

    #[test]
    fn test_rating_survives_to_record_unchanged() {
        let spa = Spa::from_record(&record(json!({
            "name": "Blue Lagoon",
            "address": "Grindavik 240",
            "rating": 4.1
        })))
        .unwrap();

        assert_eq!(spa.to_record().unwrap()["rating"], json!(4.1));
    }
}
