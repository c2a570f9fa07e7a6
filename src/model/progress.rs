// src/model/progress.rs

/// Absolute tolerance used when deciding whether a cumulative total has
/// reached the target area.
pub const COMPLETION_TOLERANCE: f64 = 1e-9;

/// Running state of one process (sampling or spreading) working toward a
/// fixed total area.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessProgress {
    // Target
    pub total: f64,

    // State Variables
    pub cumulative: f64,

    // First day index at which `cumulative` reached `total`
    pub finish_day: Option<usize>,
}

impl ProcessProgress {
    pub fn new(total: f64) -> Self {
        Self {
            total,
            cumulative: 0.0,
            finish_day: None,
        }
    }

    /// True while the process still has area left to cover.
    pub fn is_open(&self) -> bool {
        self.cumulative < self.total
    }

    /// Area left before the total is reached (never negative).
    pub fn remaining(&self) -> f64 {
        (self.total - self.cumulative).max(0.0)
    }

    pub fn is_complete(&self) -> bool {
        self.cumulative >= self.total - COMPLETION_TOLERANCE
    }

    /// Adds `amount` to the running total, never overshooting the target.
    ///
    /// Returns the amount actually applied.
    pub fn advance(&mut self, amount: f64) -> f64 {
        let applied = amount.min(self.remaining()).max(0.0);
        self.cumulative += applied;
        applied
    }

    /// Records `day_index` as the finish day the first time the process is
    /// complete. Returns true only on that first crossing.
    pub fn mark_finish(&mut self, day_index: usize) -> bool {
        if self.finish_day.is_none() && self.is_complete() {
            self.finish_day = Some(day_index);
            return true;
        }
        false
    }
}
