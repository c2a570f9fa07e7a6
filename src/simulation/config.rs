// src/simulation/config.rs

use chrono::{Days, NaiveDate};

/// Everything the engine needs for one run. Built once, never mutated by the
/// engine.
///
/// Rates are expressed in hectares per workday; the conversion from crew
/// throughput or tonnage happens before construction (see `rates`).
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub total_area: f64,
    pub sampling_rate_per_workday: f64,
    pub spreading_rate_per_workday: f64,
    pub workdays_per_week: u8,
    pub lag_days: usize,
    pub start_date: NaiveDate,
    pub max_days: usize,
}

impl SimulationConfig {
    /// A config with an all-workday week, no lag and a one-year horizon.
    pub fn new(
        total_area: f64,
        sampling_rate_per_workday: f64,
        spreading_rate_per_workday: f64,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            total_area,
            sampling_rate_per_workday,
            spreading_rate_per_workday,
            workdays_per_week: 7,
            lag_days: 0,
            start_date,
            max_days: 365,
        }
    }

    pub fn with_workdays_per_week(mut self, workdays_per_week: u8) -> Self {
        self.workdays_per_week = workdays_per_week;
        self
    }

    pub fn with_lag_days(mut self, lag_days: usize) -> Self {
        self.lag_days = lag_days;
        self
    }

    pub fn with_max_days(mut self, max_days: usize) -> Self {
        self.max_days = max_days;
        self
    }

    /// Calendar date of a simulated day index.
    ///
    /// Saturates at the last representable date.
    pub fn date_for(&self, day_index: usize) -> NaiveDate {
        self.start_date
            .checked_add_days(Days::new(day_index as u64))
            .unwrap_or(NaiveDate::MAX)
    }
}
