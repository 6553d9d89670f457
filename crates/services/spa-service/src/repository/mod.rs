//! Repository layer for data access.
//!
//! One contract serves every collection: records in, records out, keyed by
//! the string id stored under `_id`. Lookups return the record or nothing,
//! never a wrapper around it.

mod memory;

use async_trait::async_trait;
use serde_json::Value;

use common::AppResult;
use domain::Record;

pub use memory::InMemoryRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Persistence contract for a single collection.
///
/// Missing ids surface as `AppError::NotFound`; backend failures as
/// `AppError::Storage`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait Repository: Send + Sync {
    /// Insert a record and return its generated id
    async fn add(&self, record: Record) -> AppResult<String>;

    /// Merge `changes` into the stored record and return the result
    async fn update(&self, id: &str, changes: Record) -> AppResult<Record>;

    /// Remove a record by id
    async fn delete(&self, id: &str) -> AppResult<()>;

    /// All records in the collection
    async fn get_all(&self) -> AppResult<Vec<Record>>;

    async fn get_by_id(&self, id: &str) -> AppResult<Option<Record>>;

    /// First record whose `name` field equals `value`
    async fn get_by_attribute(&self, name: &str, value: &Value) -> AppResult<Option<Record>>;
}
