//! Double-booking detection
//!
//! The renderer resolves collisions first-found; this module reports them so
//! the front desk can fix the underlying data.

use serde::Serialize;
use shared::models::{DiningTable, Reservation};

use super::occupancy::OccupancyIndex;
use super::slots::TimeSlot;

/// Two reservations claiming the same table slot(s)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlapWarning {
    pub table_id: i64,
    /// Reservation shown on the grid (earlier in input order)
    pub first_id: i64,
    /// Reservation hidden behind it
    pub second_id: i64,
    /// First shared slot label
    pub from: String,
    /// Last shared slot label
    pub until: String,
}

/// Every pair of participating reservations sharing a configured table whose
/// in-window slot ranges intersect.
pub fn detect_overlaps(reservations: &[Reservation], tables: &[DiningTable]) -> Vec<OverlapWarning> {
    let index = OccupancyIndex::build(reservations);
    let placements = index.placements();
    let mut warnings = Vec::new();

    for table in tables {
        let on_table: Vec<_> = placements
            .iter()
            .filter(|p| p.reservation.occupies_table(table.id))
            .filter_map(|p| p.window.slot_range().map(|range| (p.reservation.id, range)))
            .collect();

        for (i, (first_id, first)) in on_table.iter().enumerate() {
            for (second_id, second) in &on_table[i + 1..] {
                let lo = *first.start().max(second.start());
                let hi = *first.end().min(second.end());
                if lo > hi {
                    continue;
                }
                let (Some(from), Some(until)) = (TimeSlot::from_index(lo), TimeSlot::from_index(hi)) else {
                    continue;
                };
                tracing::warn!(
                    table_id = table.id,
                    table_number = table.table_number,
                    first_id = *first_id,
                    second_id = *second_id,
                    from = %from.label(),
                    until = %until.label(),
                    "Overlapping reservations on table"
                );
                warnings.push(OverlapWarning {
                    table_id: table.id,
                    first_id: *first_id,
                    second_id: *second_id,
                    from: from.label(),
                    until: until.label(),
                });
            }
        }
    }

    warnings
}
