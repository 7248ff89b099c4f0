//! Block row-span computation

use shared::models::Reservation;

use super::occupancy::ReservationWindow;
use super::slots::SLOT_MINUTES;

/// Span used when a reservation's timestamps cannot be parsed (one hour)
pub const DEFAULT_SPAN: u32 = 4;

/// `ceil(duration / 15)`, at least one row
fn span_for_window(window: &ReservationWindow) -> u32 {
    window.duration_minutes().div_ceil(SLOT_MINUTES).max(1)
}

/// Visual row-span of a reservation's block, in slots
///
/// Falls back to [`DEFAULT_SPAN`] on unparseable timestamps.
pub fn block_span(reservation: &Reservation) -> u32 {
    match ReservationWindow::of(reservation) {
        Ok(window) => span_for_window(&window),
        Err(e) => {
            tracing::debug!(
                reservation_id = reservation.id,
                error = %e,
                "Falling back to default block span"
            );
            DEFAULT_SPAN
        }
    }
}
