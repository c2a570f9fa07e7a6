//! Integrated sampling + spreading timeline.
//!
//! Sampling produces "ready" hectares; spreading consumes them. The two
//! processes share one total area and advance together, day by day, on a
//! repeating workweek.
//!
//! - **simulation**: engine config, plan inputs and the rolling engine
//! - **model**: workweek schedule and per-process running totals
//! - **rates**: unit conversions producing hectares per workday
//! - **io**: CSV export and text summary

pub mod error;
pub mod io;
pub mod model;
pub mod rates;
pub mod simulation;

pub use error::{PlanError, Result};
pub use io::reporting::{format_summary, write_day_log, write_simulation_log, RunSummary};
pub use model::progress::COMPLETION_TOLERANCE;
pub use simulation::config::SimulationConfig;
pub use simulation::engine::{simulate, DayRecord, RollingCoupledSimulator, SimulationResult};
pub use simulation::inputs::{parse_date, DerivedRates, PlanInputs, PlanOverrides};
