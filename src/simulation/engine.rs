// src/simulation/engine.rs

use crate::model::progress::ProcessProgress;
use crate::model::schedule::is_workday;
use crate::simulation::config::SimulationConfig;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, trace};

// Serialize so the daily table can be written straight to CSV
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRecord {
    #[serde(rename = "day")]
    pub day_index: usize,
    pub date: NaiveDate,
    #[serde(rename = "workday")]
    pub is_workday: bool,
    #[serde(rename = "sampled_today_ha")]
    pub sampled_today: f64,
    #[serde(rename = "spread_today_ha")]
    pub spread_today: f64,
    #[serde(rename = "sampled_cum_ha")]
    pub sampled_cumulative: f64,
    #[serde(rename = "spread_cum_ha")]
    pub spread_cumulative: f64,
    #[serde(rename = "backlog_ha")]
    pub backlog: f64,
}

/// Outcome of one run: the daily records plus the scalars derived from them
/// during the same pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub config: SimulationConfig,
    pub records: Vec<DayRecord>,
    pub sampling_finish_day: Option<usize>,
    pub spreading_finish_day: Option<usize>,
    pub final_backlog: f64,
    pub peak_backlog: f64,
    pub peak_backlog_day: Option<usize>,
}

impl SimulationResult {
    pub fn days_simulated(&self) -> usize {
        self.records.len()
    }

    pub fn sampling_finish_date(&self) -> Option<NaiveDate> {
        self.sampling_finish_day.map(|d| self.config.date_for(d))
    }

    pub fn spreading_finish_date(&self) -> Option<NaiveDate> {
        self.spreading_finish_day.map(|d| self.config.date_for(d))
    }

    /// True when the whole area was spread before the safety cap.
    pub fn is_complete(&self) -> bool {
        self.spreading_finish_day.is_some()
    }
}

/// Advances sampling and spreading together, one calendar day at a time.
///
/// Spreading may only consume area that has already been sampled; area sampled
/// on a given day is spreadable on that same day.
pub struct RollingCoupledSimulator {
    config: SimulationConfig,

    // Running totals, owned exclusively by the run
    sampling: ProcessProgress,
    spreading: ProcessProgress,

    peak_backlog: f64,
    peak_backlog_day: Option<usize>,

    pub current_day: usize,
    pub history: Vec<DayRecord>,
}

impl RollingCoupledSimulator {
    pub fn new(config: SimulationConfig) -> Self {
        let sampling = ProcessProgress::new(config.total_area);
        let spreading = ProcessProgress::new(config.total_area);

        Self {
            config,
            sampling,
            spreading,
            peak_backlog: 0.0,
            peak_backlog_day: None,
            current_day: 0,
            history: Vec::new(),
        }
    }

    /// Runs until everything is spread or `max_days` days have been simulated.
    pub fn run(mut self) -> SimulationResult {
        info!(
            total_area = self.config.total_area,
            sampling_rate = self.config.sampling_rate_per_workday,
            spreading_rate = self.config.spreading_rate_per_workday,
            workdays_per_week = self.config.workdays_per_week,
            lag_days = self.config.lag_days,
            max_days = self.config.max_days,
            "starting coupled simulation"
        );

        while self.current_day < self.config.max_days {
            self.step();
            if self.spreading.is_complete() {
                break;
            }
        }

        if self.spreading.finish_day.is_none() {
            info!(
                days = self.history.len(),
                sampled = self.sampling.cumulative,
                spread = self.spreading.cumulative,
                "safety cap reached before spreading finished"
            );
        } else {
            info!(days = self.history.len(), "spreading finished");
        }

        self.into_result()
    }

    fn step(&mut self) {
        let day = self.current_day;
        let workday = is_workday(day, self.config.workdays_per_week);

        // Sampling happens on workdays only
        let mut sampled_today = 0.0;
        if workday && self.sampling.is_open() {
            sampled_today = self
                .sampling
                .advance(self.config.sampling_rate_per_workday);
        }

        // Spreading happens on workdays once the lag has elapsed. The ready
        // backlog already includes today's sampling.
        let mut spread_today = 0.0;
        if workday && day >= self.config.lag_days {
            let ready_backlog = self.backlog();
            if ready_backlog > 0.0 && self.spreading.is_open() {
                let amount = self.config.spreading_rate_per_workday.min(ready_backlog);
                spread_today = self.spreading.advance(amount);
            }
        }

        if self.sampling.mark_finish(day) {
            debug!(day, "sampling finished");
        }
        if self.spreading.mark_finish(day) {
            debug!(day, "spreading finished");
        }

        let backlog = self.backlog();
        if backlog > self.peak_backlog {
            self.peak_backlog = backlog;
            self.peak_backlog_day = Some(day);
        }

        trace!(
            day,
            workday,
            sampled_today,
            spread_today,
            backlog,
            "simulated day"
        );

        self.history.push(DayRecord {
            day_index: day,
            date: self.config.date_for(day),
            is_workday: workday,
            sampled_today,
            spread_today,
            sampled_cumulative: self.sampling.cumulative,
            spread_cumulative: self.spreading.cumulative,
            backlog,
        });

        self.current_day += 1;
    }

    /// Sampled but not yet spread.
    fn backlog(&self) -> f64 {
        (self.sampling.cumulative - self.spreading.cumulative).max(0.0)
    }

    fn into_result(self) -> SimulationResult {
        let final_backlog = self.history.last().map(|r| r.backlog).unwrap_or(0.0);

        SimulationResult {
            config: self.config,
            records: self.history,
            sampling_finish_day: self.sampling.finish_day,
            spreading_finish_day: self.spreading.finish_day,
            final_backlog,
            peak_backlog: self.peak_backlog,
            peak_backlog_day: self.peak_backlog_day,
        }
    }
}

/// Convenience wrapper: build a simulator for `config` and run it.
pub fn simulate(config: &SimulationConfig) -> SimulationResult {
    RollingCoupledSimulator::new(config.clone()).run()
}
