//! Occupancy resolution - which reservation holds a (table, slot) cell
//!
//! A reservation occupies `[rounded_start, end)` on every table it lists.
//! When the end time-of-day is before the start it is read as the next day
//! (`end + 1440`). The first matching reservation in input order wins; there
//! is no stacking.

use std::ops::RangeInclusive;

use shared::models::Reservation;

use super::parse::{TimeParseError, minute_of_day, parse_naive_local};
use super::slots::{SLOT_COUNT, SLOT_MINUTES, TimeSlot, WINDOW_END_MINUTES, WINDOW_START_MINUTES, round_to_slot};

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Time-of-day extent of one reservation, in minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservationWindow {
    /// Raw start minute-of-day
    pub start: u32,
    /// Start snapped to the nearest slot boundary
    pub rounded_start: u32,
    /// End minute, unwrapped past midnight when it precedes the start
    pub end: u32,
}

impl ReservationWindow {
    pub fn from_minutes(start: u32, end: u32) -> Self {
        let end = if end < start { end + MINUTES_PER_DAY } else { end };
        Self {
            start,
            rounded_start: round_to_slot(start),
            end,
        }
    }

    pub fn of(reservation: &Reservation) -> Result<Self, TimeParseError> {
        let start = parse_naive_local(&reservation.start_time)?;
        let end = parse_naive_local(&reservation.end_time)?;
        Ok(Self::from_minutes(minute_of_day(&start), minute_of_day(&end)))
    }

    /// Whether the slot boundary at `minutes` lies in `[rounded_start, end)`
    pub fn contains(&self, minutes: u32) -> bool {
        self.rounded_start <= minutes && minutes < self.end
    }

    /// Raw duration (end - start), never negative
    pub fn duration_minutes(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Slot indices this window occupies inside the 12:00-24:00 grid
    pub fn slot_range(&self) -> Option<RangeInclusive<usize>> {
        let first = self.rounded_start.max(WINDOW_START_MINUTES);
        let last = self.end.checked_sub(1)?.min(WINDOW_END_MINUTES);
        if first > last || first > WINDOW_END_MINUTES {
            return None;
        }
        // first is a slot boundary; last rounds down to one
        let first_idx = ((first - WINDOW_START_MINUTES) / SLOT_MINUTES) as usize;
        let last_idx = ((last - WINDOW_START_MINUTES) / SLOT_MINUTES) as usize;
        (first_idx <= last_idx && last_idx < SLOT_COUNT).then_some(first_idx..=last_idx)
    }
}

/// Reservation paired with its parsed window
#[derive(Debug, Clone, Copy)]
pub struct Placement<'a> {
    pub reservation: &'a Reservation,
    pub window: ReservationWindow,
}

impl Placement<'_> {
    /// Whether this slot is the visual start of the block
    pub fn starts_at(&self, slot: TimeSlot) -> bool {
        self.window.rounded_start == slot.minutes()
    }
}

/// Occupancy lookup over one reservation snapshot
///
/// Timestamps are parsed once per reservation. Reservations that do not
/// participate in layout or whose timestamps fail to parse never match;
/// the parse failure is logged.
#[derive(Debug, Clone)]
pub struct OccupancyIndex<'a> {
    placements: Vec<Placement<'a>>,
}

impl<'a> OccupancyIndex<'a> {
    pub fn build(reservations: &'a [Reservation]) -> Self {
        let placements = reservations
            .iter()
            .filter(|r| r.participates_in_layout())
            .filter_map(|reservation| match ReservationWindow::of(reservation) {
                Ok(window) => Some(Placement { reservation, window }),
                Err(e) => {
                    tracing::debug!(
                        reservation_id = reservation.id,
                        start_time = %reservation.start_time,
                        end_time = %reservation.end_time,
                        error = %e,
                        "Reservation timestamps unparseable, treated as non-occupying"
                    );
                    None
                }
            })
            .collect();
        Self { placements }
    }

    /// Placements in input order
    pub fn placements(&self) -> &[Placement<'a>] {
        &self.placements
    }

    /// First reservation occupying `(table_id, slot)`, if any
    pub fn resolve(&self, table_id: i64, slot: TimeSlot) -> Option<&Placement<'a>> {
        let minutes = slot.minutes();
        self.placements
            .iter()
            .find(|p| p.reservation.occupies_table(table_id) && p.window.contains(minutes))
    }
}

/// Single-cell resolution over a raw reservation list
pub fn resolve(table_id: i64, slot: TimeSlot, reservations: &[Reservation]) -> Option<&Reservation> {
    OccupancyIndex::build(reservations)
        .resolve(table_id, slot)
        .map(|p| p.reservation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::test_support::reservation;
    use shared::models::ReservationStatus;

    fn slot(label: &str) -> TimeSlot {
        TimeSlot::parse_label(label).unwrap()
    }

    #[test]
    fn test_multi_table_occupancy_excludes_end_slot() {
        let list = vec![reservation(1, &[2, 3], "2024-01-01T20:00:00Z", "2024-01-01T22:00:00Z")];

        for table in [2, 3] {
            assert!(resolve(table, slot("19:45"), &list).is_none());
            for label in ["20:00", "20:15", "21:00", "21:45"] {
                assert_eq!(resolve(table, slot(label), &list).map(|r| r.id), Some(1), "{label}");
            }
            assert!(resolve(table, slot("22:00"), &list).is_none());
        }
        assert!(resolve(1, slot("20:00"), &list).is_none());
    }

    #[test]
    fn test_rounded_start_is_used_for_matching() {
        let list = vec![reservation(1, &[1], "2024-01-01T13:07:00Z", "2024-01-01T14:00:00Z")];
        assert_eq!(resolve(1, slot("13:00"), &list).map(|r| r.id), Some(1));
        assert_eq!(resolve(1, slot("13:45"), &list).map(|r| r.id), Some(1));
        assert!(resolve(1, slot("14:00"), &list).is_none());
    }

    #[test]
    fn test_midnight_crossing_fills_to_window_end() {
        let list = vec![reservation(1, &[4], "2024-01-01T23:00:00", "2024-01-02T00:30:00")];
        for label in ["23:00", "23:15", "23:30", "23:45", "24:00"] {
            assert_eq!(resolve(4, slot(label), &list).map(|r| r.id), Some(1), "{label}");
        }
        assert!(resolve(4, slot("22:45"), &list).is_none());

        let window = ReservationWindow::of(&list[0]).unwrap();
        assert_eq!(window.end, 24 * 60 + 30);
        assert_eq!(window.slot_range(), Some(44..=48));
    }

    #[test]
    fn test_first_found_wins() {
        let list = vec![
            reservation(7, &[1], "2024-01-01T19:00:00", "2024-01-01T21:00:00"),
            reservation(8, &[1], "2024-01-01T20:00:00", "2024-01-01T22:00:00"),
        ];
        assert_eq!(resolve(1, slot("20:30"), &list).map(|r| r.id), Some(7));
        assert_eq!(resolve(1, slot("21:00"), &list).map(|r| r.id), Some(8));
    }

    #[test]
    fn test_cancelled_and_malformed_never_match() {
        let mut cancelled = reservation(1, &[1], "2024-01-01T20:00:00", "2024-01-01T22:00:00");
        cancelled.status = ReservationStatus::Cancelled;
        let broken = reservation(2, &[1], "", "2024-01-01T22:00:00");
        let list = vec![cancelled, broken];

        assert!(resolve(1, slot("20:30"), &list).is_none());
        assert!(OccupancyIndex::build(&list).placements().is_empty());
    }

    #[test]
    fn test_completed_reservations_participate() {
        let mut done = reservation(1, &[1], "2024-01-01T12:00:00", "2024-01-01T13:00:00");
        done.status = ReservationStatus::Completed;
        let list = vec![done];
        assert_eq!(resolve(1, slot("12:00"), &list).map(|r| r.id), Some(1));
    }

    #[test]
    fn test_slot_range_clipping() {
        // Starts before the window
        let w = ReservationWindow::from_minutes(11 * 60, 13 * 60);
        assert_eq!(w.slot_range(), Some(0..=3));

        // Ends before the window
        let w = ReservationWindow::from_minutes(9 * 60, 11 * 60);
        assert_eq!(w.slot_range(), None);

        // Zero duration
        let w = ReservationWindow::from_minutes(20 * 60, 20 * 60);
        assert_eq!(w.duration_minutes(), 0);
        assert_eq!(w.slot_range(), None);

        // Unaligned end rounds down to the covering slot
        let w = ReservationWindow::from_minutes(20 * 60, 20 * 60 + 20);
        assert_eq!(w.slot_range(), Some(32..=33));
    }
}
