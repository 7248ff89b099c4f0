//! 当日统计 - day summary
use chrono::NaiveDate;
use serde::Serialize;
use shared::models::{DiningTable, Reservation, ReservationPhase, ReservationStatus};

use super::occupancy::OccupancyIndex;
use super::overlap::detect_overlaps;
use super::slots::{SLOT_COUNT, time_slots};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub confirmed: usize,
    pub completed: usize,
    pub cancelled: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub total_reservations: usize,
    pub by_status: StatusCounts,
    /// Guests across confirmed and completed reservations
    pub covers: u64,
    pub multi_table: usize,
    pub no_shows: usize,
    pub seated_now: usize,
    pub table_count: usize,
    pub occupied_cells: usize,
    pub total_cells: usize,
    /// `occupied_cells / total_cells`, 0 when there are no tables
    pub occupancy_ratio: f64,
    /// Busiest slot label; `None` when nothing is occupied
    pub peak_slot: Option<String>,
    pub peak_tables: usize,
    pub overlap_count: usize,
}

pub fn summarize(date: NaiveDate, tables: &[DiningTable], reservations: &[Reservation]) -> DaySummary {
    let mut by_status = StatusCounts::default();
    for r in reservations {
        match r.status {
            ReservationStatus::Confirmed => by_status.confirmed += 1,
            ReservationStatus::Completed => by_status.completed += 1,
            ReservationStatus::Cancelled => by_status.cancelled += 1,
        }
    }

    let participating = || reservations.iter().filter(|r| r.participates_in_layout());
    let covers = participating().map(|r| u64::from(r.num_people)).sum();
    let multi_table = participating().filter(|r| r.is_multi_table()).count();
    let no_shows = reservations.iter().filter(|r| r.phase() == ReservationPhase::NoShow).count();
    let seated_now = reservations.iter().filter(|r| r.phase() == ReservationPhase::Seated).count();

    let index = OccupancyIndex::build(reservations);
    let mut occupied_cells = 0;
    let mut peak: Option<(String, usize)> = None;
    for slot in time_slots() {
        let busy = tables.iter().filter(|t| index.resolve(t.id, slot).is_some()).count();
        occupied_cells += busy;
        if busy > 0 && peak.as_ref().is_none_or(|(_, n)| busy > *n) {
            peak = Some((slot.label(), busy));
        }
    }

    let total_cells = tables.len() * SLOT_COUNT;
    let occupancy_ratio = if total_cells == 0 {
        0.0
    } else {
        occupied_cells as f64 / total_cells as f64
    };
    let (peak_slot, peak_tables) = match peak {
        Some((label, n)) => (Some(label), n),
        None => (None, 0),
    };

    DaySummary {
        date,
        total_reservations: reservations.len(),
        by_status,
        covers,
        multi_table,
        no_shows,
        seated_now,
        table_count: tables.len(),
        occupied_cells,
        total_cells,
        occupancy_ratio,
        peak_slot,
        peak_tables,
        overlap_count: detect_overlaps(reservations, tables).len(),
    }
}
