// src/model/schedule.rs

/// Length of the repeating schedule cycle.
pub const DAYS_PER_CYCLE: usize = 7;

/// A simple repeating workweek.
///
/// Day index 0 is always a workday: the first `workdays_per_week` days of every
/// 7-day cycle are workdays, the remaining ones are off days.
pub fn is_workday(day_index: usize, workdays_per_week: u8) -> bool {
    (day_index % DAYS_PER_CYCLE) < workdays_per_week as usize
}

/// Counts the off days among day indices `0..days`.
pub fn off_days_before(days: usize, workdays_per_week: u8) -> usize {
    (0..days)
        .filter(|&d| !is_workday(d, workdays_per_week))
        .count()
}
