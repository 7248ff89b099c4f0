//! Reservation detail view
//!
//! What the dashboard shows after a block is clicked. Status actions are
//! listed only when the role may update reservations and the current phase
//! admits them.

use serde::Serialize;
use shared::RenderContext;
use shared::models::{DiningTable, Reservation, ReservationAction, ReservationPhase, ReservationStatus};

use super::category::BlockCategory;
use super::labels::{action_label, category_label, phase_label};
use super::occupancy::ReservationWindow;
use super::slots::format_minutes;
use super::span::block_span;

#[derive(Debug, Clone, Serialize)]
pub struct ActionView {
    pub action: ReservationAction,
    /// Path segment under `/api/reservations/{id}/`
    pub path: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReservationDetail {
    pub id: i64,
    pub client_name: String,
    pub phone: Option<String>,
    pub num_people: u32,
    pub status: ReservationStatus,
    pub phase: ReservationPhase,
    pub phase_label: &'static str,
    pub start_time: String,
    pub end_time: String,
    /// `"HH:MM"` local, absent when the timestamps do not parse
    pub time_range: Option<String>,
    pub table_ids: Vec<i64>,
    /// Table numbers for ids known to the floor plan, ascending
    pub table_numbers: Vec<i32>,
    pub notes: Option<String>,
    pub seated_at: Option<String>,
    pub left_at: Option<String>,
    pub delay_minutes: Option<i32>,
    pub duration_minutes: Option<i32>,
    pub category: BlockCategory,
    pub category_label: &'static str,
    pub span: u32,
    pub actions: Vec<ActionView>,
}

pub fn build_detail(reservation: &Reservation, tables: &[DiningTable], ctx: &RenderContext) -> ReservationDetail {
    let phase = reservation.phase();
    let category = BlockCategory::of(reservation);

    let time_range = ReservationWindow::of(reservation).ok().map(|w| {
        // end may be unwrapped past midnight
        format!("{} - {}", format_minutes(w.start), format_minutes(w.end % (24 * 60)))
    });

    let mut table_numbers: Vec<i32> = tables
        .iter()
        .filter(|t| reservation.occupies_table(t.id))
        .map(|t| t.table_number)
        .collect();
    table_numbers.sort_unstable();

    let actions = if ctx.role.can_update_reservations() {
        ReservationAction::available_in(phase)
            .into_iter()
            .map(|action| ActionView {
                action,
                path: action.path_segment(),
                label: action_label(action, ctx.language),
            })
            .collect()
    } else {
        Vec::new()
    };

    ReservationDetail {
        id: reservation.id,
        client_name: reservation.client_name.clone(),
        phone: reservation.phone.clone(),
        num_people: reservation.num_people,
        status: reservation.status,
        phase,
        phase_label: phase_label(phase, ctx.language),
        start_time: reservation.start_time.clone(),
        end_time: reservation.end_time.clone(),
        time_range,
        table_ids: reservation.table_ids.clone(),
        table_numbers,
        notes: reservation.notes.clone(),
        seated_at: reservation.seated_at.clone(),
        left_at: reservation.left_at.clone(),
        delay_minutes: reservation.delay_minutes,
        duration_minutes: reservation.duration_minutes,
        category,
        category_label: category_label(category, ctx.language),
        span: block_span(reservation),
        actions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::test_support::{reservation, table};
    use shared::{Language, UserRole};

    fn actions(detail: &ReservationDetail) -> Vec<ReservationAction> {
        detail.actions.iter().map(|a| a.action).collect()
    }

    #[test]
    fn test_viewer_gets_no_actions() {
        let r = reservation(1, &[1], "2024-01-01T20:00:00", "2024-01-01T21:00:00");
        let detail = build_detail(&r, &[table(1, 1)], &RenderContext::default());
        assert_eq!(detail.phase, ReservationPhase::Booked);
        assert!(detail.actions.is_empty());
    }

    #[test]
    fn test_actions_follow_phase() {
        let ctx = RenderContext::new(Language::En, UserRole::Staff);
        let mut r = reservation(1, &[1], "2024-01-01T20:00:00", "2024-01-01T21:00:00");
        assert_eq!(
            actions(&build_detail(&r, &[], &ctx)),
            vec![ReservationAction::MarkSeated, ReservationAction::MarkNoShow]
        );

        r.seated_at = Some("2024-01-01T20:05:00".into());
        assert_eq!(actions(&build_detail(&r, &[], &ctx)), vec![ReservationAction::MarkLeft]);

        r.left_at = Some("2024-01-01T21:10:00".into());
        assert!(build_detail(&r, &[], &ctx).actions.is_empty());
    }

    #[test]
    fn test_tables_and_time_range() {
        let ctx = RenderContext::new(Language::Es, UserRole::Manager);
        let r = reservation(3, &[20, 10, 99], "2024-01-01T23:00:00Z", "2024-01-02T00:30:00Z");
        let detail = build_detail(&r, &[table(10, 4), table(20, 2)], &ctx);
        assert_eq!(detail.table_numbers, vec![2, 4]);
        assert_eq!(detail.time_range.as_deref(), Some("23:00 - 00:30"));
        assert_eq!(detail.span, 6);
        assert_eq!(detail.category_label, "Varias mesas");
        assert_eq!(detail.actions[0].label, "Marcar sentados");
        assert_eq!(detail.actions[0].path, "seat");
    }

    #[test]
    fn test_unparseable_times() {
        let r = reservation(4, &[1], "", "");
        let detail = build_detail(&r, &[], &RenderContext::default());
        assert!(detail.time_range.is_none());
        assert_eq!(detail.span, 4);
    }
}
