//! Localized strings for the grid (中文 / English / Español)

use shared::Language;
use shared::models::{ReservationAction, ReservationPhase};

use super::category::BlockCategory;

pub fn category_label(category: BlockCategory, lang: Language) -> &'static str {
    use BlockCategory as C;
    use Language as L;

    match (category, lang) {
        (C::MultiTableWithNotes, L::En) => "Multiple tables, with notes",
        (C::MultiTableWithNotes, L::Es) => "Varias mesas, con notas",
        (C::MultiTableWithNotes, L::Zh) => "多桌（有备注）",
        (C::MultiTable, L::En) => "Multiple tables",
        (C::MultiTable, L::Es) => "Varias mesas",
        (C::MultiTable, L::Zh) => "多桌",
        (C::Completed, L::En) => "Completed",
        (C::Completed, L::Es) => "Completada",
        (C::Completed, L::Zh) => "已完成",
        (C::SingleTableWithNotes, L::En) => "With notes",
        (C::SingleTableWithNotes, L::Es) => "Con notas",
        (C::SingleTableWithNotes, L::Zh) => "有备注",
        (C::Confirmed, L::En) => "Confirmed",
        (C::Confirmed, L::Es) => "Confirmada",
        (C::Confirmed, L::Zh) => "已确认",
        (C::Fallback, L::En) => "Other",
        (C::Fallback, L::Es) => "Otra",
        (C::Fallback, L::Zh) => "其他",
    }
}

pub fn phase_label(phase: ReservationPhase, lang: Language) -> &'static str {
    use Language as L;
    use ReservationPhase as P;

    match (phase, lang) {
        (P::Booked, L::En) => "Booked",
        (P::Booked, L::Es) => "Reservada",
        (P::Booked, L::Zh) => "已预订",
        (P::Seated, L::En) => "Seated",
        (P::Seated, L::Es) => "Sentados",
        (P::Seated, L::Zh) => "已入座",
        (P::Left, L::En) => "Left",
        (P::Left, L::Es) => "Se fueron",
        (P::Left, L::Zh) => "已离店",
        (P::NoShow, L::En) => "No-show",
        (P::NoShow, L::Es) => "No se presentó",
        (P::NoShow, L::Zh) => "未到店",
        (P::Completed, L::En) => "Completed",
        (P::Completed, L::Es) => "Completada",
        (P::Completed, L::Zh) => "已完成",
        (P::Cancelled, L::En) => "Cancelled",
        (P::Cancelled, L::Es) => "Cancelada",
        (P::Cancelled, L::Zh) => "已取消",
    }
}

pub fn action_label(action: ReservationAction, lang: Language) -> &'static str {
    use Language as L;
    use ReservationAction as A;

    match (action, lang) {
        (A::MarkSeated, L::En) => "Mark as seated",
        (A::MarkSeated, L::Es) => "Marcar sentados",
        (A::MarkSeated, L::Zh) => "标记入座",
        (A::MarkLeft, L::En) => "Mark as left",
        (A::MarkLeft, L::Es) => "Marcar salida",
        (A::MarkLeft, L::Zh) => "标记离店",
        (A::MarkNoShow, L::En) => "Mark as no-show",
        (A::MarkNoShow, L::Es) => "Marcar no presentado",
        (A::MarkNoShow, L::Zh) => "标记未到店",
    }
}

/// Shown instead of the grid when no tables are configured
pub fn empty_state_message(lang: Language) -> &'static str {
    match lang {
        Language::En => "No tables configured yet. Add tables to see the reservation grid.",
        Language::Es => "Aún no hay mesas configuradas. Añade mesas para ver la cuadrícula de reservas.",
        Language::Zh => "尚未配置桌台，请先添加桌台以查看预订表。",
    }
}
