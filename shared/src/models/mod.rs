//! Data models
//!
//! Projections of the appointments store's entities. Raw records are
//! validated at the boundary (`Raw*` → entity via `TryFrom`) so that the
//! grid logic only ever sees well-formed tables and reservations.
//! All IDs are `i64`.

pub mod dining_table;
pub mod reservation;

// Re-exports
pub use dining_table::*;
pub use reservation::*;

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Identifier as emitted by the store: a number or a numeric string
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Int(i64),
    Text(String),
}

impl RawId {
    /// Positive integer value, if any
    pub fn to_i64(&self) -> Option<i64> {
        let id = match self {
            Self::Int(v) => *v,
            Self::Text(s) => s.trim().parse().ok()?,
        };
        (id > 0).then_some(id)
    }
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Text(s) => write!(f, "{:?}", s),
        }
    }
}

/// Reason a raw store record was rejected at the boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("invalid id: {0}")]
    InvalidId(String),

    #[error("{entity} {id}: missing field `{field}`")]
    MissingField {
        entity: &'static str,
        id: i64,
        field: &'static str,
    },

    #[error("unknown reservation status: {0}")]
    UnknownStatus(String),

    #[error("reservation {reservation_id}: invalid table id {value}")]
    InvalidTableId { reservation_id: i64, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_id() {
        assert_eq!(RawId::Int(4).to_i64(), Some(4));
        assert_eq!(RawId::Text(" 12 ".into()).to_i64(), Some(12));
        assert_eq!(RawId::Int(0).to_i64(), None);
        assert_eq!(RawId::Int(-3).to_i64(), None);
        assert_eq!(RawId::Text("t-1".into()).to_i64(), None);
    }
}
