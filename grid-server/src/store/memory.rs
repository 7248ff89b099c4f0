//! In-memory appointments store

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use shared::models::{DiningTable, Reservation, ReservationAction};
use shared::{AppError, AppResult};
use tokio::sync::RwLock;

use super::AppointmentsStore;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone)]
struct Entry {
    date: NaiveDate,
    reservation: Reservation,
}

/// Store backed by process memory
///
/// Reservations are filed under an explicit service date so that records
/// with unparseable timestamps can still be served.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Vec<DiningTable>>,
    reservations: RwLock<Vec<Entry>>,
    unavailable: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tables(self, tables: Vec<DiningTable>) -> Self {
        Self {
            tables: RwLock::new(tables),
            ..self
        }
    }

    /// File `reservations` under `date`, keeping their order
    pub fn with_reservations(self, date: NaiveDate, reservations: Vec<Reservation>) -> Self {
        let mut entries = self.reservations.into_inner();
        entries.extend(reservations.into_iter().map(|reservation| Entry { date, reservation }));
        Self {
            reservations: RwLock::new(entries),
            ..self
        }
    }

    /// Simulate an outage: every call fails with `StoreUnavailable`
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> AppResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::store_unavailable("In-memory store marked unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl AppointmentsStore for InMemoryStore {
    async fn list_tables(&self) -> AppResult<Vec<DiningTable>> {
        self.check_available()?;
        Ok(self.tables.read().await.clone())
    }

    async fn list_reservations(&self, date: NaiveDate) -> AppResult<Vec<Reservation>> {
        self.check_available()?;
        Ok(self
            .reservations
            .read()
            .await
            .iter()
            .filter(|e| e.date == date)
            .map(|e| e.reservation.clone())
            .collect())
    }

    async fn get_reservation(&self, id: i64) -> AppResult<Reservation> {
        self.check_available()?;
        self.reservations
            .read()
            .await
            .iter()
            .find(|e| e.reservation.id == id)
            .map(|e| e.reservation.clone())
            .ok_or_else(|| AppError::reservation_not_found(id))
    }

    async fn apply_action(&self, id: i64, action: ReservationAction) -> AppResult<()> {
        self.check_available()?;
        let mut entries = self.reservations.write().await;
        let reservation = entries
            .iter_mut()
            .map(|e| &mut e.reservation)
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::reservation_not_found(id))?;

        action.check(reservation.phase()).map_err(AppError::new)?;

        let now = Local::now().naive_local().format(TIMESTAMP_FORMAT).to_string();
        match action {
            ReservationAction::MarkSeated => reservation.seated_at = Some(now),
            ReservationAction::MarkLeft => reservation.left_at = Some(now),
            ReservationAction::MarkNoShow => reservation.no_show = true,
        }
        tracing::debug!(reservation_id = id, %action, phase = ?reservation.phase(), "Applied action in memory");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::test_support::{reservation, table};
    use shared::ErrorCode;
    use shared::models::ReservationPhase;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[tokio::test]
    async fn test_filters_by_service_date() {
        let other = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let store = InMemoryStore::new()
            .with_tables(vec![table(1, 1)])
            .with_reservations(day(), vec![reservation(1, &[1], "", "")])
            .with_reservations(other, vec![reservation(2, &[1], "2024-01-02T20:00:00", "2024-01-02T21:00:00")]);

        let ids: Vec<i64> = store.list_reservations(day()).await.unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1]);
        assert_eq!(store.list_tables().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_actions_transition_phase() {
        let store = InMemoryStore::new().with_reservations(
            day(),
            vec![reservation(1, &[1], "2024-01-01T20:00:00", "2024-01-01T21:00:00")],
        );

        store.apply_action(1, ReservationAction::MarkSeated).await.unwrap();
        assert_eq!(store.get_reservation(1).await.unwrap().phase(), ReservationPhase::Seated);

        let err = store.apply_action(1, ReservationAction::MarkNoShow).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ReservationAlreadySeated);

        store.apply_action(1, ReservationAction::MarkLeft).await.unwrap();
        assert_eq!(store.get_reservation(1).await.unwrap().phase(), ReservationPhase::Left);
    }

    #[tokio::test]
    async fn test_unknown_id_and_outage() {
        let store = InMemoryStore::new();
        let err = store.get_reservation(42).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ReservationNotFound);

        store.set_unavailable(true);
        let err = store.list_tables().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StoreUnavailable);
    }
}
