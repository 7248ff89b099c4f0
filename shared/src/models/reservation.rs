//! Reservation Model (预订)
//!
//! Read-only projection of the appointments store's reservation records.
//! Status transitions are owned by the store; this module only derives the
//! phase and checks which actions a phase admits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{RawId, RecordError};
use crate::error::ErrorCode;

/// Reservation status as stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Confirmed,
    Completed,
    Cancelled,
}

impl ReservationStatus {
    /// Only confirmed and completed reservations are placed on the grid
    pub fn participates_in_layout(&self) -> bool {
        matches!(self, Self::Confirmed | Self::Completed)
    }
}

impl FromStr for ReservationStatus {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "confirmed" => Ok(Self::Confirmed),
            "completed" => Ok(Self::Completed),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            other => Err(RecordError::UnknownStatus(other.to_string())),
        }
    }
}

/// Derived service phase
///
/// `Booked → Seated → Left → Completed`, or `Booked → NoShow`, or
/// `Booked → Cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationPhase {
    Booked,
    Seated,
    Left,
    NoShow,
    Completed,
    Cancelled,
}

/// Reservation entity after boundary validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub client_name: String,
    pub phone: Option<String>,
    pub status: ReservationStatus,
    /// Naive local timestamp, zone suffix (if any) is ignored
    pub start_time: String,
    /// Naive local timestamp, zone suffix (if any) is ignored
    pub end_time: String,
    pub table_ids: Vec<i64>,
    pub num_people: u32,
    pub notes: Option<String>,
    pub seated_at: Option<String>,
    pub left_at: Option<String>,
    pub delay_minutes: Option<i32>,
    pub duration_minutes: Option<i32>,
    #[serde(default)]
    pub no_show: bool,
}

impl Reservation {
    pub fn is_multi_table(&self) -> bool {
        self.table_ids.len() > 1
    }

    pub fn has_notes(&self) -> bool {
        self.notes.as_deref().is_some_and(|n| !n.trim().is_empty())
    }

    pub fn participates_in_layout(&self) -> bool {
        self.status.participates_in_layout()
    }

    pub fn occupies_table(&self, table_id: i64) -> bool {
        self.table_ids.contains(&table_id)
    }

    pub fn phase(&self) -> ReservationPhase {
        match self.status {
            ReservationStatus::Cancelled => ReservationPhase::Cancelled,
            ReservationStatus::Completed => ReservationPhase::Completed,
            ReservationStatus::Confirmed => {
                if self.no_show {
                    ReservationPhase::NoShow
                } else if self.left_at.is_some() {
                    ReservationPhase::Left
                } else if self.seated_at.is_some() {
                    ReservationPhase::Seated
                } else {
                    ReservationPhase::Booked
                }
            }
        }
    }

    /// Validate a raw snapshot, dropping (and logging) unusable records.
    /// Input order is preserved.
    pub fn from_raw_batch(raw: Vec<RawReservation>) -> Vec<Self> {
        raw.into_iter()
            .filter_map(|r| match Self::try_from(r) {
                Ok(res) => Some(res),
                Err(e) => {
                    tracing::warn!(error = %e, "Rejected reservation record from store");
                    None
                }
            })
            .collect()
    }
}

/// Reservation record as emitted by the appointments store, before validation
#[derive(Debug, Clone, Deserialize)]
pub struct RawReservation {
    pub id: RawId,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub table_ids: Option<Vec<RawId>>,
    #[serde(default)]
    pub num_people: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub seated_at: Option<String>,
    #[serde(default)]
    pub left_at: Option<String>,
    #[serde(default)]
    pub delay_minutes: Option<i32>,
    #[serde(default)]
    pub duration_minutes: Option<i32>,
    #[serde(default)]
    pub no_show: Option<bool>,
}

impl TryFrom<RawReservation> for Reservation {
    type Error = RecordError;

    fn try_from(raw: RawReservation) -> Result<Self, Self::Error> {
        let id = raw.id.to_i64().ok_or_else(|| RecordError::InvalidId(raw.id.to_string()))?;
        let status = raw
            .status
            .as_deref()
            .ok_or(RecordError::MissingField {
                entity: "reservation",
                id,
                field: "status",
            })?
            .parse::<ReservationStatus>()?;

        let mut table_ids = Vec::new();
        for raw_table in raw.table_ids.unwrap_or_default() {
            let table_id = raw_table
                .to_i64()
                .ok_or_else(|| RecordError::InvalidTableId {
                    reservation_id: id,
                    value: raw_table.to_string(),
                })?;
            if !table_ids.contains(&table_id) {
                table_ids.push(table_id);
            }
        }

        Ok(Self {
            id,
            client_name: raw.client_name.unwrap_or_default(),
            phone: non_blank(raw.phone),
            status,
            start_time: raw.start_time.unwrap_or_default(),
            end_time: raw.end_time.unwrap_or_default(),
            table_ids,
            num_people: raw
                .num_people
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(0),
            notes: non_blank(raw.notes),
            seated_at: non_blank(raw.seated_at),
            left_at: non_blank(raw.left_at),
            delay_minutes: raw.delay_minutes,
            duration_minutes: raw.duration_minutes,
            no_show: raw.no_show.unwrap_or(false),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Status actions exposed by the detail view, delegated to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationAction {
    MarkSeated,
    MarkLeft,
    MarkNoShow,
}

impl ReservationAction {
    pub const ALL: [ReservationAction; 3] = [Self::MarkSeated, Self::MarkLeft, Self::MarkNoShow];

    /// URL path segment used by both the store and the grid API
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::MarkSeated => "seat",
            Self::MarkLeft => "leave",
            Self::MarkNoShow => "no-show",
        }
    }

    /// Check whether the action is admissible in `phase`
    pub fn check(&self, phase: ReservationPhase) -> Result<(), ErrorCode> {
        use ReservationPhase as P;

        match (self, phase) {
            (_, P::Cancelled) => Err(ErrorCode::ReservationCancelled),
            (_, P::Completed) => Err(ErrorCode::ReservationCompleted),
            (_, P::NoShow) => Err(ErrorCode::ReservationNoShow),

            (Self::MarkSeated, P::Booked) => Ok(()),
            (Self::MarkSeated, P::Seated | P::Left) => Err(ErrorCode::ReservationAlreadySeated),

            (Self::MarkLeft, P::Seated) => Ok(()),
            (Self::MarkLeft, P::Booked) => Err(ErrorCode::ReservationNotSeated),
            (Self::MarkLeft, P::Left) => Err(ErrorCode::ReservationAlreadyLeft),

            (Self::MarkNoShow, P::Booked) => Ok(()),
            (Self::MarkNoShow, P::Seated | P::Left) => Err(ErrorCode::ReservationAlreadySeated),
        }
    }

    /// Actions admissible in `phase`, in display order
    pub fn available_in(phase: ReservationPhase) -> Vec<ReservationAction> {
        Self::ALL
            .into_iter()
            .filter(|a| a.check(phase).is_ok())
            .collect()
    }
}

impl fmt::Display for ReservationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

impl FromStr for ReservationAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "seat" => Ok(Self::MarkSeated),
            "leave" => Ok(Self::MarkLeft),
            "no-show" => Ok(Self::MarkNoShow),
            _ => Err(format!("unknown reservation action: {}", s)),
        }
    }
}
