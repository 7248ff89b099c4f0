//! 预订表格布局引擎 - reservation grid layout
//!
//! Pure, synchronous functions turning one day's table and reservation
//! snapshot into a day-view grid:
//!
//! - [`slots`] - the 49 fifteen-minute rows from 12:00 to 24:00
//! - [`parse`] - naive local timestamp parsing
//! - [`occupancy`] - which reservation holds a `(table, slot)` cell
//! - [`span`] - nominal row span of a reservation
//! - [`category`] - block visual category
//! - [`render`] - the full view model
//! - [`overlap`], [`summary`], [`detail`] - diagnostics and side views
//!
//! Malformed timestamps never fail a render; the affected reservation is
//! simply not placed.

pub mod category;
pub mod detail;
pub mod labels;
pub mod occupancy;
pub mod overlap;
pub mod parse;
pub mod render;
pub mod slots;
pub mod span;
pub mod summary;

pub use category::BlockCategory;
pub use detail::{ActionView, ReservationDetail, build_detail};
pub use occupancy::{OccupancyIndex, ReservationWindow, resolve};
pub use overlap::{OverlapWarning, detect_overlaps};
pub use render::{Block, GridCell, GridColumn, GridInput, GridRow, GridView, LegendEntry, now_indicator, render};
pub use slots::{SLOT_COUNT, SLOT_MINUTES, TimeSlot, round_to_slot, slot_labels, time_slots};
pub use span::{DEFAULT_SPAN, block_span};
pub use summary::{DaySummary, StatusCounts, summarize};
