// src/io/reporting.rs

use crate::error::Result;
use crate::simulation::engine::{DayRecord, SimulationResult};
use crate::simulation::inputs::DerivedRates;
use chrono::NaiveDate;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Writes the daily table as CSV (header row plus one row per day).
pub fn write_day_log<W: Write>(writer: W, data: &[DayRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    for record in data {
        wtr.serialize(record)?;
    }

    // csv buffers internally; rows are only guaranteed on the writer after this
    wtr.flush()?;
    Ok(())
}

/// Creates (or truncates) `file_path` and writes the daily table into it.
pub fn write_simulation_log(file_path: impl AsRef<Path>, data: &[DayRecord]) -> Result<()> {
    let path = file_path.as_ref();
    let file = std::fs::File::create(path)?;
    write_day_log(file, data)?;

    info!(rows = data.len(), path = %path.display(), "exported daily table");
    Ok(())
}

/// Headline figures of one run, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub rates: DerivedRates,
    pub days_simulated: usize,
    pub sampling_finish: Option<NaiveDate>,
    pub spreading_finish: Option<NaiveDate>,
    pub final_backlog: f64,
    pub peak_backlog: f64,
    pub peak_backlog_date: Option<NaiveDate>,
}

impl RunSummary {
    pub fn new(rates: DerivedRates, result: &SimulationResult) -> Self {
        Self {
            rates,
            days_simulated: result.days_simulated(),
            sampling_finish: result.sampling_finish_date(),
            spreading_finish: result.spreading_finish_date(),
            final_backlog: result.final_backlog,
            peak_backlog: result.peak_backlog,
            peak_backlog_date: result.peak_backlog_day.map(|d| result.config.date_for(d)),
        }
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => "Not reached".to_string(),
    }
}

/// Renders the summary as plain text.
pub fn format_summary(summary: &RunSummary) -> String {
    let rates = &summary.rates;
    let mut out = String::from("Key rates (as modeled)\n");
    out.push_str(&format!("  Points per hectare:        {:.2}\n", rates.points_per_ha));
    out.push_str(&format!("  Sampling (ha / workday):   {:.2}\n", rates.sampling_ha_per_workday));
    out.push_str(&format!("  Spreading (ha / workday):  {:.2}\n", rates.spreading_ha_per_workday));
    out.push_str(&format!("  Spreading cap (t/day):     {:.0}\n", rates.spreading_tonnes_per_day));

    out.push_str("\nResults\n");
    out.push_str(&format!("  Days simulated:            {}\n", summary.days_simulated));
    out.push_str(&format!("  Sampling finish:           {}\n", format_date(summary.sampling_finish)));
    out.push_str(&format!("  Spreading finish:          {}\n", format_date(summary.spreading_finish)));
    out.push_str(&format!("  Backlog at end (ha):       {:.2}\n", summary.final_backlog));
    out.push_str(&format!("  Peak backlog (ha):         {:.2}", summary.peak_backlog));
    if let Some(date) = summary.peak_backlog_date {
        out.push_str(&format!(" on {}", date.format("%Y-%m-%d")));
    }
    out.push('\n');
    out
}
