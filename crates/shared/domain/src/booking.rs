//! Booking domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::record::FromRecord;

/// Booking lifecycle status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    /// Whether the booking still occupies its slot
    pub fn is_active(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

/// A user's reservation of a service at a spa.
///
/// Holds ids only; referential integrity belongs to the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Booking {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub user_id: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub spa_id: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub service_id: String,
    pub scheduled_at: DateTime<Utc>,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500, message = "must be at most 500 characters"))]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl FromRecord for Booking {
    const REQUIRED_FIELDS: &'static [&'static str] =
        &["user_id", "spa_id", "service_id", "scheduled_at"];
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
    fn test_from_record_defaults_to_pending() {
        let booking = Booking::from_record(&record(json!({
            "user_id": "u1",
            "spa_id": "s1",
            "service_id": "sv1",
            "scheduled_at": "2025-03-01T10:00:00Z"
        })))
        .unwrap();

        assert_eq!(booking.status, BookingStatus::Pending);
        assert!(booking.status.is_active());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let err = Booking::from_record(&record(json!({
            "user_id": "u1",
            "spa_id": "s1",
            "service_id": "sv1",
            "scheduled_at": "2025-03-01T10:00:00Z",
            "status": "teleported"
        })))
        .unwrap_err();

        assert_eq!(err.field_names(), vec!["status"]);
    }

    #[test]
    fn test_missing_references() {
        let err = Booking::from_record(&record(json!({
            "scheduled_at": "2025-03-01T10:00:00Z"
        })))
        .unwrap_err();

        assert_eq!(err.field_names(), vec!["user_id", "spa_id", "service_id"]);
    }
}
