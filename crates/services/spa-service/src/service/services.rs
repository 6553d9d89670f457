//! Service (treatment) operations.

use tracing::instrument;

use common::AppResult;
use domain::{Record, Service};

use super::facade::{delete_logged, insert_validated, Facade, SERVICES};

impl Facade {
    #[instrument(skip(self, data))]
    pub async fn create_service(&self, data: &Record) -> AppResult<String> {
        insert_validated::<Service>(self.services.as_ref(), SERVICES, data).await
    }

    #[instrument(skip(self, data))]
    pub async fn update_service(&self, id: &str, data: Record) -> AppResult<Record> {
        self.services.update(id, data).await
    }

    pub async fn get_service_by_id(&self, id: &str) -> AppResult<Option<Record>> {
        self.services.get_by_id(id).await
    }

    pub async fn get_all_services(&self) -> AppResult<Vec<Record>> {
        self.services.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn delete_service(&self, id: &str) -> AppResult<()> {
        delete_logged(self.services.as_ref(), SERVICES, id).await
    }
}
