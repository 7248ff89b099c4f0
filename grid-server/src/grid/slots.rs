//! 时间槽 - day-view rows
//!
//! The grid covers 12:00 to 24:00 inclusive in 15-minute steps (49 slots).

use serde::Serialize;

/// Slot granularity in minutes
pub const SLOT_MINUTES: u32 = 15;
/// Minute-of-day of the first slot (12:00)
pub const WINDOW_START_MINUTES: u32 = 12 * 60;
/// Minute-of-day of the last slot (24:00)
pub const WINDOW_END_MINUTES: u32 = 24 * 60;
/// Number of slots in the window, both ends included
pub const SLOT_COUNT: usize = ((WINDOW_END_MINUTES - WINDOW_START_MINUTES) / SLOT_MINUTES) as usize + 1;

/// One 15-minute row of the day grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TimeSlot {
    index: usize,
}

impl TimeSlot {
    pub fn from_index(index: usize) -> Option<Self> {
        (index < SLOT_COUNT).then_some(Self { index })
    }

    /// Slot whose boundary is exactly `minutes` (minute-of-day), if inside the window
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        if !(WINDOW_START_MINUTES..=WINDOW_END_MINUTES).contains(&minutes)
            || minutes % SLOT_MINUTES != 0
        {
            return None;
        }
        Self::from_index(((minutes - WINDOW_START_MINUTES) / SLOT_MINUTES) as usize)
    }

    /// Parse a `"HH:MM"` label back into a slot
    pub fn parse_label(label: &str) -> Option<Self> {
        let (h, m) = label.split_once(':')?;
        let h: u32 = h.parse().ok()?;
        let m: u32 = m.parse().ok()?;
        if m >= 60 {
            return None;
        }
        Self::from_minutes(h * 60 + m)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Minute-of-day of this slot's boundary
    pub fn minutes(&self) -> u32 {
        WINDOW_START_MINUTES + self.index as u32 * SLOT_MINUTES
    }

    /// `"HH:MM"`; the last slot is `"24:00"`
    pub fn label(&self) -> String {
        format_minutes(self.minutes())
    }
}

/// The 49 slots from 12:00 to 24:00, in row order
pub fn time_slots() -> Vec<TimeSlot> {
    (0..SLOT_COUNT).map(|index| TimeSlot { index }).collect()
}

/// Row labels, `"12:00"` .. `"24:00"`
pub fn slot_labels() -> Vec<String> {
    time_slots().iter().map(TimeSlot::label).collect()
}

/// Round a minute-of-day to the nearest slot boundary, halves rounding up.
///
/// `round_half_up(minutes / 15) * 15`. A remainder of 7 is below the half
/// (7.5) and rounds down, 8 rounds up.
pub fn round_to_slot(minutes: u32) -> u32 {
    (minutes + SLOT_MINUTES / 2) / SLOT_MINUTES * SLOT_MINUTES
}

/// Format a minute count as `"HH:MM"` (hours are not wrapped, 1440 is `"24:00"`)
pub fn format_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forty_nine_slots_from_noon_to_midnight() {
        let labels = slot_labels();
        assert_eq!(labels.len(), 49);
        assert_eq!(SLOT_COUNT, 49);
        assert_eq!(labels.first().map(String::as_str), Some("12:00"));
        assert_eq!(labels.last().map(String::as_str), Some("24:00"));
        assert_eq!(labels[1], "12:15");
        assert_eq!(labels[4], "13:00");
    }

    #[test]
    fn test_slots_strictly_increase_by_fifteen() {
        let slots = time_slots();
        for pair in slots.windows(2) {
            assert_eq!(pair[1].minutes() - pair[0].minutes(), SLOT_MINUTES);
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_slot_lookup() {
        assert_eq!(TimeSlot::from_minutes(780).map(|s| s.index()), Some(4));
        assert_eq!(TimeSlot::from_minutes(1440).map(|s| s.index()), Some(48));
        assert_eq!(TimeSlot::from_minutes(700), None);
        assert_eq!(TimeSlot::from_minutes(787), None);
        assert_eq!(TimeSlot::from_index(49), None);

        assert_eq!(TimeSlot::parse_label("20:00").map(|s| s.index()), Some(32));
        assert_eq!(TimeSlot::parse_label("24:00").map(|s| s.index()), Some(48));
        assert_eq!(TimeSlot::parse_label("11:45"), None);
        assert_eq!(TimeSlot::parse_label("13:60"), None);
        assert_eq!(TimeSlot::parse_label("noon"), None);
    }

    #[test]
    fn test_round_half_up() {
        // 13:07 -> 13:00
        assert_eq!(round_to_slot(13 * 60 + 7), 13 * 60);
        // 13:08 -> 13:15
        assert_eq!(round_to_slot(13 * 60 + 8), 13 * 60 + 15);
        assert_eq!(round_to_slot(13 * 60 + 22), 13 * 60 + 15);
        assert_eq!(round_to_slot(13 * 60 + 23), 13 * 60 + 30);
        assert_eq!(round_to_slot(23 * 60 + 53), 24 * 60);
        assert_eq!(round_to_slot(0), 0);
    }
}
