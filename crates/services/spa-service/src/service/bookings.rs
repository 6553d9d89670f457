//! Booking operations.

use tracing::instrument;

use common::AppResult;
use domain::{Booking, Record};

use super::facade::{delete_logged, insert_validated, Facade, BOOKINGS};

impl Facade {
    #[instrument(skip(self, data))]
    pub async fn create_booking(&self, data: &Record) -> AppResult<String> {
        insert_validated::<Booking>(self.bookings.as_ref(), BOOKINGS, data).await
    }

    pub async fn get_booking_by_id(&self, id: &str) -> AppResult<Option<Record>> {
        self.bookings.get_by_id(id).await
    }

    pub async fn get_all_bookings(&self) -> AppResult<Vec<Record>> {
        self.bookings.get_all().await
    }

    #[instrument(skip(self, data))]
    pub async fn update_booking(&self, id: &str, data: Record) -> AppResult<Record> {
        self.bookings.update(id, data).await
    }

    #[instrument(skip(self))]
    pub async fn delete_booking(&self, id: &str) -> AppResult<()> {
        delete_logged(self.bookings.as_ref(), BOOKINGS, id).await
    }
}
