//! Day grid renderer
//!
//! Produces a serializable view model: one column per table (ordered by
//! table number), one row per 15-minute slot. A block covers exactly the
//! contiguous cells the occupancy resolver assigns to its reservation; the
//! cells below the start are emitted as [`GridCell::Covered`] so a front end
//! can lay the grid out like an HTML table with `rowspan`.
//!
//! Rendering is pure. Language and role arrive through [`RenderContext`].

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use shared::RenderContext;
use shared::models::{DiningTable, Reservation, ReservationPhase, ReservationStatus, sort_by_table_number};

use super::category::BlockCategory;
use super::labels::{category_label, empty_state_message};
use super::occupancy::{OccupancyIndex, Placement};
use super::overlap::{OverlapWarning, detect_overlaps};
use super::parse::minute_of_day;
use super::slots::{SLOT_COUNT, SLOT_MINUTES, TimeSlot, WINDOW_END_MINUTES, WINDOW_START_MINUTES, time_slots};

/// Snapshot to render
#[derive(Debug, Clone)]
pub struct GridInput {
    pub date: NaiveDate,
    pub tables: Vec<DiningTable>,
    pub reservations: Vec<Reservation>,
    /// Local wall-clock time used for the now indicator
    pub now: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridView {
    pub date: NaiveDate,
    pub columns: Vec<GridColumn>,
    pub rows: Vec<GridRow>,
    /// Fractional slot index of the current time, today only
    pub now_indicator: Option<f64>,
    /// Localized message when no tables are configured
    pub empty_state: Option<String>,
    pub overlaps: Vec<OverlapWarning>,
    pub legend: Vec<LegendEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridColumn {
    pub table_id: i64,
    pub table_number: i32,
    pub capacity: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridRow {
    pub slot: usize,
    pub label: String,
    pub cells: Vec<GridCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridCell {
    Empty,
    BlockStart(Block),
    /// Spanned by a block that starts higher up in the same column
    Covered { reservation_id: i64 },
}

impl GridCell {
    pub fn reservation_id(&self) -> Option<i64> {
        match self {
            Self::Empty => None,
            Self::BlockStart(block) => Some(block.reservation_id),
            Self::Covered { reservation_id } => Some(*reservation_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub reservation_id: i64,
    /// Display label
    pub client_name: String,
    pub num_people: u32,
    /// Rows covered, this one included. Follows occupancy (rounded start),
    /// so it can differ from [`crate::grid::block_span`].
    pub span: u32,
    pub category: BlockCategory,
    pub category_label: String,
    pub color: String,
    pub multi_table: bool,
    pub has_notes: bool,
    pub status: ReservationStatus,
    pub phase: ReservationPhase,
    /// The reservation started before this cell (before 12:00, or hidden
    /// behind an earlier block on the same table)
    pub continued: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LegendEntry {
    pub category: BlockCategory,
    pub label: String,
    pub color: String,
}

/// Fractional slot index for `now`, if `now` falls on `date` inside 12:00-24:00
pub fn now_indicator(date: NaiveDate, now: NaiveDateTime) -> Option<f64> {
    if now.date() != date {
        return None;
    }
    let minutes = minute_of_day(&now);
    (WINDOW_START_MINUTES..=WINDOW_END_MINUTES)
        .contains(&minutes)
        .then(|| f64::from(minutes - WINDOW_START_MINUTES) / f64::from(SLOT_MINUTES))
}

pub fn legend(ctx: &RenderContext) -> Vec<LegendEntry> {
    BlockCategory::ALL
        .into_iter()
        .map(|category| LegendEntry {
            category,
            label: category_label(category, ctx.language).to_string(),
            color: category.color().to_string(),
        })
        .collect()
}

pub fn render(input: GridInput, ctx: &RenderContext) -> GridView {
    let GridInput {
        date,
        mut tables,
        reservations,
        now,
    } = input;

    sort_by_table_number(&mut tables);
    let columns: Vec<GridColumn> = tables
        .iter()
        .map(|t| GridColumn {
            table_id: t.id,
            table_number: t.table_number,
            capacity: t.capacity,
        })
        .collect();

    let now_indicator = now_indicator(date, now);
    let legend = legend(ctx);

    if tables.is_empty() {
        tracing::info!(%date, reservations = reservations.len(), "No tables configured, rendering empty state");
        return GridView {
            date,
            columns,
            rows: Vec::new(),
            now_indicator,
            empty_state: Some(empty_state_message(ctx.language).to_string()),
            overlaps: Vec::new(),
            legend,
        };
    }

    let index = OccupancyIndex::build(&reservations);
    let column_cells: Vec<Vec<GridCell>> = tables
        .iter()
        .map(|table| render_column(&index, table.id, ctx))
        .collect();

    let rows: Vec<GridRow> = time_slots()
        .into_iter()
        .map(|slot| GridRow {
            slot: slot.index(),
            label: slot.label(),
            cells: column_cells.iter().map(|col| col[slot.index()].clone()).collect(),
        })
        .collect();

    let overlaps = detect_overlaps(&reservations, &tables);
    let blocks = column_cells
        .iter()
        .flatten()
        .filter(|c| matches!(c, GridCell::BlockStart(_)))
        .count();

    tracing::info!(
        %date,
        tables = tables.len(),
        reservations = reservations.len(),
        placed = index.placements().len(),
        blocks,
        overlaps = overlaps.len(),
        "Rendered reservation grid"
    );

    GridView {
        date,
        columns,
        rows,
        now_indicator,
        empty_state: None,
        overlaps,
        legend,
    }
}

/// One table's cells, top to bottom
fn render_column(index: &OccupancyIndex<'_>, table_id: i64, ctx: &RenderContext) -> Vec<GridCell> {
    let slots = time_slots();
    let mut cells = Vec::with_capacity(SLOT_COUNT);
    // (last covered index, reservation id)
    let mut active: Option<(usize, i64)> = None;

    for slot in &slots {
        let i = slot.index();
        if let Some((last, reservation_id)) = active {
            if i <= last {
                cells.push(GridCell::Covered { reservation_id });
                continue;
            }
            active = None;
        }

        let Some(placement) = index.resolve(table_id, *slot) else {
            cells.push(GridCell::Empty);
            continue;
        };

        let continued = !placement.starts_at(*slot);
        // Cells the resolver assigns to this reservation; at least this one
        let span = remaining_run(index, table_id, placement.reservation.id, &slots[i..]).max(1);

        active = Some((i + span as usize - 1, placement.reservation.id));
        cells.push(GridCell::BlockStart(block(placement, span, continued, ctx)));
    }

    cells
}

/// Contiguous slots from the head of `slots` still resolving to `reservation_id`
fn remaining_run(index: &OccupancyIndex<'_>, table_id: i64, reservation_id: i64, slots: &[TimeSlot]) -> u32 {
    slots
        .iter()
        .take_while(|slot| {
            index
                .resolve(table_id, **slot)
                .is_some_and(|p| p.reservation.id == reservation_id)
        })
        .count() as u32
}

fn block(placement: &Placement<'_>, span: u32, continued: bool, ctx: &RenderContext) -> Block {
    let r = placement.reservation;
    let category = BlockCategory::of(r);
    Block {
        reservation_id: r.id,
        client_name: r.client_name.clone(),
        num_people: r.num_people,
        span,
        category,
        category_label: category_label(category, ctx.language).to_string(),
        color: category.color().to_string(),
        multi_table: r.is_multi_table(),
        has_notes: r.has_notes(),
        status: r.status,
        phase: r.phase(),
        continued,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::test_support::{reservation, table};
    use shared::{Language, UserRole};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn yesterday_noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 12, 31)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn input(tables: Vec<DiningTable>, reservations: Vec<Reservation>) -> GridInput {
        GridInput {
            date: day(),
            tables,
            reservations,
            now: yesterday_noon(),
        }
    }

    fn cell<'a>(view: &'a GridView, label: &str, column: usize) -> &'a GridCell {
        let row = view.rows.iter().find(|r| r.label == label).unwrap();
        &row.cells[column]
    }

    fn block_at<'a>(view: &'a GridView, label: &str, column: usize) -> &'a Block {
        match cell(view, label, column) {
            GridCell::BlockStart(b) => b,
            other => panic!("expected block start at {label}, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_reservations_all_empty() {
        let view = render(input(vec![table(1, 1), table(2, 2)], vec![]), &RenderContext::default());
        assert_eq!(view.rows.len(), 49);
        assert!(view.rows.iter().all(|r| r.cells.iter().all(|c| *c == GridCell::Empty)));
        assert!(view.empty_state.is_none());
        assert!(view.overlaps.is_empty());
    }

    #[test]
    fn test_no_tables_shows_localized_empty_state() {
        let ctx = RenderContext::new(Language::Es, UserRole::Viewer);
        let view = render(input(vec![], vec![]), &ctx);
        assert!(view.rows.is_empty());
        assert!(view.columns.is_empty());
        assert!(view.empty_state.unwrap().contains("mesas"));
    }

    #[test]
    fn test_columns_ordered_by_table_number() {
        let view = render(
            input(vec![table(30, 3), table(10, 1), table(20, 2)], vec![]),
            &RenderContext::default(),
        );
        let numbers: Vec<i32> = view.columns.iter().map(|c| c.table_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_unaligned_start_block() {
        let view = render(
            input(
                vec![table(1, 1)],
                vec![reservation(5, &[1], "2024-01-01T13:07:00Z", "2024-01-01T14:00:00Z")],
            ),
            &RenderContext::default(),
        );
        let b = block_at(&view, "13:00", 0);
        assert_eq!(b.span, 4);
        assert!(!b.continued);
        for label in ["13:15", "13:30", "13:45"] {
            assert_eq!(*cell(&view, label, 0), GridCell::Covered { reservation_id: 5 });
        }
        assert_eq!(*cell(&view, "14:00", 0), GridCell::Empty);
        assert_eq!(*cell(&view, "12:45", 0), GridCell::Empty);
    }

    #[test]
    fn test_multi_table_block_on_each_table() {
        let mut r = reservation(9, &[2, 3], "2024-01-01T20:00:00Z", "2024-01-01T22:00:00Z");
        r.notes = Some("Anniversary".into());
        let view = render(
            input(vec![table(1, 1), table(2, 2), table(3, 3)], vec![r]),
            &RenderContext::default(),
        );

        for column in [1, 2] {
            let b = block_at(&view, "20:00", column);
            assert_eq!(b.span, 8);
            assert_eq!(b.category, BlockCategory::MultiTableWithNotes);
            assert!(b.multi_table && b.has_notes);
            assert_eq!(*cell(&view, "21:45", column), GridCell::Covered { reservation_id: 9 });
            assert_eq!(*cell(&view, "22:00", column), GridCell::Empty);
        }
        assert!(view.rows.iter().all(|r| r.cells[0] == GridCell::Empty));
    }

    #[test]
    fn test_start_rounding_up_leaves_next_booking_intact() {
        let view = render(
            input(
                vec![table(1, 1)],
                vec![
                    reservation(1, &[1], "2024-01-01T13:08:00", "2024-01-01T14:00:00"),
                    reservation(2, &[1], "2024-01-01T14:00:00", "2024-01-01T15:00:00"),
                ],
            ),
            &RenderContext::default(),
        );
        assert_eq!(*cell(&view, "13:00", 0), GridCell::Empty);
        let first = block_at(&view, "13:15", 0);
        assert_eq!(first.span, 3);
        assert_eq!(*cell(&view, "13:45", 0), GridCell::Covered { reservation_id: 1 });

        let next = block_at(&view, "14:00", 0);
        assert_eq!(next.reservation_id, 2);
        assert!(!next.continued);
        assert_eq!(next.span, 4);
        assert!(view.overlaps.is_empty());
    }

    #[test]
    fn test_start_rounding_down_is_one_block() {
        let view = render(
            input(
                vec![table(2, 1)],
                vec![reservation(3, &[2], "2024-01-01T13:05:00", "2024-01-01T13:50:00")],
            ),
            &RenderContext::default(),
        );
        let b = block_at(&view, "13:00", 0);
        assert_eq!(b.span, 4);
        assert!(!b.continued);
        assert_eq!(*cell(&view, "13:45", 0), GridCell::Covered { reservation_id: 3 });
        assert_eq!(*cell(&view, "14:00", 0), GridCell::Empty);
    }

    #[test]
    fn test_cells_agree_with_resolver() {
        let reservations = vec![
            reservation(1, &[1], "2024-01-01T13:08:00", "2024-01-01T14:00:00"),
            reservation(2, &[1], "2024-01-01T14:00:00", "2024-01-01T15:00:00"),
            reservation(3, &[2], "2024-01-01T13:05:00", "2024-01-01T13:50:00"),
            reservation(4, &[2], "2024-01-01T19:00:00", "2024-01-01T21:00:00"),
            reservation(5, &[2], "2024-01-01T20:00:00", "2024-01-01T22:00:00"),
        ];
        let tables = vec![table(1, 1), table(2, 2)];
        let view = render(input(tables.clone(), reservations.clone()), &RenderContext::default());

        for row in &view.rows {
            let slot = TimeSlot::from_index(row.slot).unwrap();
            for (column, t) in tables.iter().enumerate() {
                let expected = crate::grid::resolve(t.id, slot, &reservations).map(|r| r.id);
                assert_eq!(row.cells[column].reservation_id(), expected, "{} table {}", row.label, t.id);
            }
        }
    }

    #[test]
    fn test_midnight_crossing_is_clipped() {
        let view = render(
            input(
                vec![table(4, 4)],
                vec![reservation(3, &[4], "2024-01-01T23:00:00", "2024-01-02T00:30:00")],
            ),
            &RenderContext::default(),
        );
        let b = block_at(&view, "23:00", 0);
        assert_eq!(b.span, 5);
        assert_eq!(*cell(&view, "24:00", 0), GridCell::Covered { reservation_id: 3 });
    }

    #[test]
    fn test_started_before_window_is_a_continued_block() {
        let view = render(
            input(
                vec![table(1, 1)],
                vec![reservation(2, &[1], "2024-01-01T11:00:00", "2024-01-01T13:00:00")],
            ),
            &RenderContext::default(),
        );
        let b = block_at(&view, "12:00", 0);
        assert!(b.continued);
        assert_eq!(b.span, 4);
        assert_eq!(*cell(&view, "13:00", 0), GridCell::Empty);
    }

    #[test]
    fn test_overlap_keeps_first_found_and_reports() {
        let view = render(
            input(
                vec![table(1, 1)],
                vec![
                    reservation(7, &[1], "2024-01-01T19:00:00", "2024-01-01T21:00:00"),
                    reservation(8, &[1], "2024-01-01T20:00:00", "2024-01-01T22:00:00"),
                ],
            ),
            &RenderContext::default(),
        );
        assert_eq!(block_at(&view, "19:00", 0).span, 8);
        assert_eq!(*cell(&view, "20:30", 0), GridCell::Covered { reservation_id: 7 });

        let tail = block_at(&view, "21:00", 0);
        assert_eq!(tail.reservation_id, 8);
        assert!(tail.continued);
        assert_eq!(tail.span, 4);

        assert_eq!(view.overlaps.len(), 1);
        assert_eq!(view.overlaps[0].first_id, 7);
    }

    #[test]
    fn test_malformed_reservation_does_not_panic() {
        let view = render(
            input(
                vec![table(1, 1)],
                vec![
                    reservation(1, &[1], "", "2024-01-01T14:00:00"),
                    reservation(2, &[1], "2024-01-01T12:00:00", "garbage"),
                ],
            ),
            &RenderContext::default(),
        );
        assert!(view.rows.iter().all(|r| r.cells[0] == GridCell::Empty));
    }

    #[test]
    fn test_category_labels_follow_language() {
        let view = render(
            input(
                vec![table(1, 1)],
                vec![reservation(1, &[1], "2024-01-01T20:00:00", "2024-01-01T21:00:00")],
            ),
            &RenderContext::new(Language::Zh, UserRole::Staff),
        );
        assert_eq!(block_at(&view, "20:00", 0).category_label, "已确认");
        assert_eq!(view.legend.len(), BlockCategory::ALL.len());
        assert_eq!(view.legend[0].label, "多桌（有备注）");
    }

    #[test]
    fn test_now_indicator() {
        let d = day();
        let at = |h, m| d.and_hms_opt(h, m, 0).unwrap();
        assert_eq!(now_indicator(d, at(12, 0)), Some(0.0));
        assert_eq!(now_indicator(d, at(13, 7)), Some(67.0 / 15.0));
        assert_eq!(now_indicator(d, at(11, 59)), None);
        assert_eq!(now_indicator(d, yesterday_noon()), None);
    }

    #[test]
    fn test_cell_serialization_shape() {
        let json = serde_json::to_value(GridCell::Covered { reservation_id: 4 }).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "covered", "reservation_id": 4}));
        let json = serde_json::to_value(GridCell::Empty).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "empty"}));
    }
}
