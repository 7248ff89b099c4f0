//! Block visual category
//!
//! Fixed precedence, first match wins:
//! multi-table with notes > multi-table > completed > single table with notes
//! > confirmed > fallback.

use serde::Serialize;
use shared::models::{Reservation, ReservationStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockCategory {
    MultiTableWithNotes,
    MultiTable,
    Completed,
    SingleTableWithNotes,
    Confirmed,
    Fallback,
}

impl BlockCategory {
    /// All categories in precedence order
    pub const ALL: [BlockCategory; 6] = [
        Self::MultiTableWithNotes,
        Self::MultiTable,
        Self::Completed,
        Self::SingleTableWithNotes,
        Self::Confirmed,
        Self::Fallback,
    ];

    pub fn of(reservation: &Reservation) -> Self {
        let multi = reservation.is_multi_table();
        let notes = reservation.has_notes();

        if multi && notes {
            Self::MultiTableWithNotes
        } else if multi {
            Self::MultiTable
        } else if reservation.status == ReservationStatus::Completed {
            Self::Completed
        } else if notes {
            Self::SingleTableWithNotes
        } else if reservation.status == ReservationStatus::Confirmed {
            Self::Confirmed
        } else {
            Self::Fallback
        }
    }

    /// Block background color
    pub fn color(&self) -> &'static str {
        match self {
            Self::MultiTableWithNotes => "#7c3aed",
            Self::MultiTable => "#a78bfa",
            Self::Completed => "#9ca3af",
            Self::SingleTableWithNotes => "#f59e0b",
            Self::Confirmed => "#10b981",
            Self::Fallback => "#e5e7eb",
        }
    }
}
