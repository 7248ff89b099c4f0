//! Appointments store abstraction
//!
//! The grid never owns reservation data. It reads one day's snapshot and
//! forwards status actions through [`AppointmentsStore`]. The HTTP-backed
//! implementation lives on [`mesa_client::StoreClient`]; [`InMemoryStore`]
//! serves tests and local demos.

mod memory;

pub use memory::InMemoryStore;

use async_trait::async_trait;
use chrono::NaiveDate;
use mesa_client::{ClientError, StoreClient};
use shared::models::{DiningTable, Reservation, ReservationAction};
use shared::{AppError, AppResult, ErrorCode};

#[async_trait]
pub trait AppointmentsStore: Send + Sync {
    /// All configured tables
    async fn list_tables(&self) -> AppResult<Vec<DiningTable>>;

    /// Reservations whose start falls on `date` (local)
    async fn list_reservations(&self, date: NaiveDate) -> AppResult<Vec<Reservation>>;

    async fn get_reservation(&self, id: i64) -> AppResult<Reservation>;

    /// Persist a status transition
    async fn apply_action(&self, id: i64, action: ReservationAction) -> AppResult<()>;
}

#[async_trait]
impl AppointmentsStore for StoreClient {
    async fn list_tables(&self) -> AppResult<Vec<DiningTable>> {
        StoreClient::list_tables(self)
            .await
            .map_err(|e| store_error(e, "list tables"))
    }

    async fn list_reservations(&self, date: NaiveDate) -> AppResult<Vec<Reservation>> {
        StoreClient::list_reservations(self, date)
            .await
            .map_err(|e| store_error(e, "list reservations"))
    }

    async fn get_reservation(&self, id: i64) -> AppResult<Reservation> {
        StoreClient::get_reservation(self, id)
            .await
            .map_err(|e| match e {
                ClientError::NotFound(_) => AppError::reservation_not_found(id),
                other => store_error(other, "get reservation"),
            })
    }

    async fn apply_action(&self, id: i64, action: ReservationAction) -> AppResult<()> {
        StoreClient::apply_action(self, id, action)
            .await
            .map_err(|e| match e {
                ClientError::NotFound(_) => AppError::reservation_not_found(id),
                other => store_error(other, "apply reservation action"),
            })
    }
}

/// Convert a client failure into an API error
pub fn store_error(err: ClientError, operation: &str) -> AppError {
    let app_err = if err.is_timeout() {
        AppError::with_message(ErrorCode::TimeoutError, format!("Store timed out: {}", operation))
    } else if err.is_unavailable() {
        AppError::store_unavailable(format!("Store unavailable: {}", operation))
    } else {
        match &err {
            ClientError::NotFound(msg) => AppError::not_found(msg.clone()),
            ClientError::Conflict(msg) => {
                AppError::with_message(ErrorCode::ReservationActionNotAllowed, msg.clone())
            }
            ClientError::Unauthorized | ClientError::Forbidden(_) => AppError::with_message(
                ErrorCode::StoreUnavailable,
                "Store rejected the configured API key",
            ),
            ClientError::Validation(msg) => AppError::validation(msg.clone()),
            ClientError::InvalidResponse(_) | ClientError::Http(_) | ClientError::Server { .. } => {
                AppError::new(ErrorCode::StoreResponseInvalid)
            }
        }
    };

    tracing::error!(operation, error = %err, code = %app_err.code, "Store request failed");
    app_err.with_detail("operation", operation)
}
