//! Facade over the user, spa, service and booking collections.
//!
//! Creates go through validated construction; everything else is forwarded
//! to the owning repository unchanged. Per-entity operations live in the
//! sibling modules as `impl Facade` blocks.

use std::sync::Arc;

use tracing::{info, warn};

use common::AppResult;
use domain::{FromRecord, Record};

use crate::config::SpaServiceConfig;
use crate::repository::{InMemoryRepository, Repository};

pub(crate) const USERS: &str = "users";
pub(crate) const SPAS: &str = "spas";
pub(crate) const SERVICES: &str = "services";
pub(crate) const BOOKINGS: &str = "bookings";

/// Single entry point for spa-booking CRUD and authentication.
///
/// Holds no state besides the repository handles, so it is cheap to share
/// behind an `Arc` and calls are independent of each other.
pub struct Facade {
    pub(super) users: Arc<dyn Repository>,
    pub(super) spas: Arc<dyn Repository>,
    pub(super) services: Arc<dyn Repository>,
    pub(super) bookings: Arc<dyn Repository>,
}

impl Facade {
    pub fn new(
        users: Arc<dyn Repository>,
        spas: Arc<dyn Repository>,
        services: Arc<dyn Repository>,
        bookings: Arc<dyn Repository>,
    ) -> Self {
        Self {
            users,
            spas,
            services,
            bookings,
        }
    }

    /// Facade backed by fresh in-memory collections
    pub fn in_memory(config: &SpaServiceConfig) -> Self {
        let users = if config.unique_user_email {
            InMemoryRepository::new(USERS).with_unique(domain::EMAIL_FIELD)
        } else {
            InMemoryRepository::new(USERS)
        };

        Self::new(
            Arc::new(users),
            Arc::new(InMemoryRepository::new(SPAS)),
            Arc::new(InMemoryRepository::new(SERVICES)),
            Arc::new(InMemoryRepository::new(BOOKINGS)),
        )
    }
}

/// Build `T` from `data` and persist its normalized record.
///
/// Validation errors are returned before the repository is touched.
/// `_id` and timestamps in `data` are ignored; the store assigns them.
pub(super) async fn insert_validated<T: FromRecord>(
    repo: &dyn Repository,
    collection: &str,
    data: &Record,
) -> AppResult<String> {
    let entity = T::from_new_record(data)?;
    let id = repo.add(entity.to_record()?).await?;

    info!(collection, id = %id, "record created");
    Ok(id)
}

pub(super) async fn delete_logged(
    repo: &dyn Repository,
    collection: &str,
    id: &str,
) -> AppResult<()> {
    if let Err(err) = repo.delete(id).await {
        warn!(
            collection,
            id,
            not_found = err.is_not_found(),
            error = %err,
            "delete failed"
        );
        return Err(err);
    }

    info!(collection, id, "record deleted");
    Ok(())
}
