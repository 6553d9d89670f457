//! Spa operations.

use serde_json::Value;
use tracing::instrument;

use common::{AppResult, OptionExt};
use domain::{Record, Spa, ID_FIELD};

use super::facade::{delete_logged, insert_validated, Facade, SPAS};

impl Facade {
    /// Store a new spa and return it as the store now holds it.
    ///
    /// The record is re-read by `_id` so any fields the store stamps on
    /// write (id, timestamps) are part of the result.
    #[instrument(skip(self, data))]
    pub async fn create_spa(&self, data: &Record) -> AppResult<Record> {
        let id = insert_validated::<Spa>(self.spas.as_ref(), SPAS, data).await?;

        self.spas
            .get_by_attribute(ID_FIELD, &Value::String(id.clone()))
            .await?
            .ok_or_not_found(format!("{} {}", SPAS, id))
    }

    #[instrument(skip(self, data))]
    pub async fn update_spa(&self, id: &str, data: Record) -> AppResult<Record> {
        self.spas.update(id, data).await
    }

    pub async fn get_spa_by_id(&self, id: &str) -> AppResult<Option<Record>> {
        self.spas.get_by_id(id).await
    }

    pub async fn get_all_spas(&self) -> AppResult<Vec<Record>> {
        self.spas.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn delete_spa(&self, id: &str) -> AppResult<()> {
        delete_logged(self.spas.as_ref(), SPAS, id).await
    }
}
