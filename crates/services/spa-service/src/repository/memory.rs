//! In-memory repository, used by tests and local tooling.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{Record, CREATED_AT_FIELD, ID_FIELD, UPDATED_AT_FIELD};

use super::Repository;

/// Collection held in process memory, in insertion order.
///
/// Stamps `_id` and `created_at` on insert and `updated_at` on update, and
/// optionally rejects duplicate values on unique fields.
pub struct InMemoryRepository {
    collection: String,
    unique_fields: Vec<String>,
    records: RwLock<Vec<Record>>,
}

impl InMemoryRepository {
    /// Create an empty collection
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            unique_fields: Vec::new(),
            records: RwLock::new(Vec::new()),
        }
    }

    /// Reject inserts and updates that duplicate `field`
    pub fn with_unique(mut self, field: impl Into<String>) -> Self {
        self.unique_fields.push(field.into());
        self
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    fn not_found(&self, id: &str) -> AppError {
        AppError::not_found(format!("{} {}", self.collection, id))
    }

    /// Fails if `candidate` collides with a record other than `skip_id`
    fn check_unique(&self, records: &[Record], candidate: &Record, skip_id: Option<&str>) -> AppResult<()> {
        for field in &self.unique_fields {
            let Some(value) = candidate.get(field).filter(|v| !v.is_null()) else {
                continue;
            };
            let taken = records.iter().any(|existing| {
                record_id(existing) != skip_id && existing.get(field) == Some(value)
            });
            if taken {
                return Err(AppError::conflict(format!("{} {}", self.collection, field)));
            }
        }
        Ok(())
    }
}

fn record_id(record: &Record) -> Option<&str> {
    record.get(ID_FIELD).and_then(Value::as_str)
}

fn now() -> Value {
    Value::String(Utc::now().to_rfc3339())
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn add(&self, mut record: Record) -> AppResult<String> {
        let mut records = self.records.write().await;

        let id = match record_id(&record) {
            Some(id) => id.to_string(),
            None => Uuid::new_v4().to_string(),
        };
        if records.iter().any(|r| record_id(r) == Some(id.as_str())) {
            return Err(AppError::conflict(format!("{} {}", self.collection, id)));
        }
        self.check_unique(&records, &record, None)?;

        record.insert(ID_FIELD.to_string(), Value::String(id.clone()));
        record.entry(CREATED_AT_FIELD).or_insert_with(now);
        records.push(record);

        tracing::debug!(collection = %self.collection, id = %id, "record inserted");
        Ok(id)
    }

    async fn update(&self, id: &str, changes: Record) -> AppResult<Record> {
        let mut records = self.records.write().await;

        let index = records
            .iter()
            .position(|r| record_id(r) == Some(id))
            .ok_or_else(|| self.not_found(id))?;

        let mut merged = records[index].clone();
        for (key, value) in changes {
            if key != ID_FIELD {
                merged.insert(key, value);
            }
        }
        merged.insert(UPDATED_AT_FIELD.to_string(), now());
        self.check_unique(&records, &merged, Some(id))?;

        records[index] = merged.clone();
        Ok(merged)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let mut records = self.records.write().await;

        let index = records
            .iter()
            .position(|r| record_id(r) == Some(id))
            .ok_or_else(|| self.not_found(id))?;
        records.remove(index);
        Ok(())
    }

    async fn get_all(&self) -> AppResult<Vec<Record>> {
        Ok(self.records.read().await.clone())
    }

    async fn get_by_id(&self, id: &str) -> AppResult<Option<Record>> {
        self.get_by_attribute(ID_FIELD, &Value::String(id.to_string()))
            .await
    }

    async fn get_by_attribute(&self, name: &str, value: &Value) -> AppResult<Option<Record>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.get(name) == Some(value)).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("test record must be an object"),
        }
    }

    #[tokio::test]
    async fn test_add_stamps_id_and_created_at() {
        let repo = InMemoryRepository::new("spas");
        let id = repo.add(record(json!({ "name": "Aqua" }))).await.unwrap();

        let stored = repo.get_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.get("_id"), Some(&json!(id)));
        assert!(stored.contains_key("created_at"));
        assert_eq!(stored.get("name"), Some(&json!("Aqua")));
    }

    #[tokio::test]
    async fn test_add_keeps_caller_id() {
        let repo = InMemoryRepository::new("spas");
        let id = repo
            .add(record(json!({ "_id": "fixed", "name": "Aqua" })))
            .await
            .unwrap();

        assert_eq!(id, "fixed");
        let err = repo
            .add(record(json!({ "_id": "fixed", "name": "Other" })))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_unique_field_rejects_duplicates() {
        let repo = InMemoryRepository::new("users").with_unique("email");
        repo.add(record(json!({ "email": "a@b.com" }))).await.unwrap();

        let err = repo
            .add(record(json!({ "email": "a@b.com" })))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_merges_and_protects_id() {
        let repo = InMemoryRepository::new("users").with_unique("email");
        let id = repo
            .add(record(json!({ "email": "a@b.com", "full_name": "Ana" })))
            .await
            .unwrap();
        let other = repo.add(record(json!({ "email": "c@d.com" }))).await.unwrap();

        let updated = repo
            .update(&id, record(json!({ "_id": "hijack", "full_name": "Ana Maria" })))
            .await
            .unwrap();
        assert_eq!(updated.get("_id"), Some(&json!(id)));
        assert_eq!(updated.get("full_name"), Some(&json!("Ana Maria")));
        assert_eq!(updated.get("email"), Some(&json!("a@b.com")));
        assert!(updated.contains_key("updated_at"));

        // updating a record to its own value is fine, stealing another's is not
        repo.update(&id, record(json!({ "email": "a@b.com" })))
            .await
            .unwrap();
        let err = repo
            .update(&other, record(json!({ "email": "a@b.com" })))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_id() {
        let repo = InMemoryRepository::new("bookings");

        let err = repo.update("nope", Record::new()).await.unwrap_err();
        assert!(err.is_not_found());

        let err = repo.delete("nope").await.unwrap_err();
        assert_eq!(err.to_string(), "bookings nope not found");
    }

    #[tokio::test]
    async fn test_get_all_in_insertion_order_and_delete() {
        let repo = InMemoryRepository::new("services");
        let first = repo.add(record(json!({ "name": "a" }))).await.unwrap();
        repo.add(record(json!({ "name": "b" }))).await.unwrap();

        let names: Vec<Value> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r["name"].clone())
            .collect();
        assert_eq!(names, vec![json!("a"), json!("b")]);

        repo.delete(&first).await.unwrap();
        assert!(repo.get_by_id(&first).await.unwrap().is_none());
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_by_attribute_absent() {
        let repo = InMemoryRepository::new("users");
        assert!(repo.is_empty().await);

        let found = repo
            .get_by_attribute("email", &json!("ghost@b.com"))
            .await
            .unwrap();
        assert!(found.is_none());
    }
}
