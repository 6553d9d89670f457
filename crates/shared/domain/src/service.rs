//! Service domain entity (a treatment offered by a spa).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::record::FromRecord;

/// A bookable treatment. The referenced spa is not checked here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Service {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub spa_id: String,
    #[validate(length(min = 1, max = 120, message = "must be 1-120 characters"))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[validate(range(min = 5, max = 480, message = "must be 5-480 minutes"))]
    pub duration_minutes: u32,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl FromRecord for Service {
    const REQUIRED_FIELDS: &'static [&'static str] =
        &["spa_id", "name", "duration_minutes", "price"];
}
