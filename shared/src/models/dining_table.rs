//! Dining Table Model

use serde::{Deserialize, Serialize};

use super::{RawId, RecordError};

/// Dining table entity (桌台)
///
/// Immutable for the duration of a render pass. Grid columns are ordered by
/// `table_number`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: i64,
    pub table_number: i32,
    pub capacity: i32,
}

/// Table record as emitted by the appointments store, before validation
#[derive(Debug, Clone, Deserialize)]
pub struct RawDiningTable {
    pub id: RawId,
    #[serde(default)]
    pub table_number: Option<i32>,
    #[serde(default)]
    pub capacity: Option<i32>,
}

impl TryFrom<RawDiningTable> for DiningTable {
    type Error = RecordError;

    fn try_from(raw: RawDiningTable) -> Result<Self, Self::Error> {
        let id = raw.id.to_i64().ok_or_else(|| RecordError::InvalidId(raw.id.to_string()))?;
        let table_number = raw.table_number.ok_or(RecordError::MissingField {
            entity: "table",
            id,
            field: "table_number",
        })?;
        Ok(Self {
            id,
            table_number,
            capacity: raw.capacity.unwrap_or(0).max(0),
        })
    }
}

impl DiningTable {
    /// Validate a raw snapshot, dropping (and logging) unusable records, and
    /// return the tables in column order.
    pub fn from_raw_batch(raw: Vec<RawDiningTable>) -> Vec<Self> {
        let mut tables: Vec<Self> = raw
            .into_iter()
            .filter_map(|r| match Self::try_from(r) {
                Ok(t) => Some(t),
                Err(e) => {
                    tracing::warn!(error = %e, "Rejected table record from store");
                    None
                }
            })
            .collect();
        sort_by_table_number(&mut tables);
        tables
    }
}

/// Column order: ascending `table_number`, stable for ties
pub fn sort_by_table_number(tables: &mut [DiningTable]) {
    tables.sort_by_key(|t| t.table_number);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(json: &str) -> RawDiningTable {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_accepts_string_ids() {
        let table = DiningTable::try_from(raw(r#"{"id":"7","table_number":3,"capacity":4}"#)).unwrap();
        assert_eq!(table.id, 7);
        assert_eq!(table.table_number, 3);
        assert_eq!(table.capacity, 4);
    }

    #[test]
    fn test_rejects_bad_records() {
        assert!(DiningTable::try_from(raw(r#"{"id":"abc","table_number":1}"#)).is_err());
        assert!(DiningTable::try_from(raw(r#"{"id":0,"table_number":1}"#)).is_err());
        assert!(DiningTable::try_from(raw(r#"{"id":5}"#)).is_err());
    }

    #[test]
    fn test_batch_orders_by_table_number() {
        let batch = vec![
            raw(r#"{"id":1,"table_number":12,"capacity":2}"#),
            raw(r#"{"id":2,"table_number":3,"capacity":4}"#),
            raw(r#"{"id":"x","table_number":1}"#),
            raw(r#"{"id":3,"table_number":7}"#),
        ];
        let tables = DiningTable::from_raw_batch(batch);
        let numbers: Vec<i32> = tables.iter().map(|t| t.table_number).collect();
        assert_eq!(numbers, vec![3, 7, 12]);
        assert_eq!(tables[1].capacity, 0);
    }
}
