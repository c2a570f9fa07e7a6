// src/simulation/inputs.rs

use crate::error::{PlanError, Result};
use crate::rates::derivation::{points_per_ha, sampling_ha_per_workday, spreading_ha_per_workday};
use crate::simulation::config::SimulationConfig;
use chrono::NaiveDate;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// Format accepted for dates given as text.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| PlanError::InvalidDate {
        value: value.to_string(),
        source,
    })
}

// Plan files may write the start date as a native TOML date or as a quoted
// string. A time part, if present, is ignored.
fn deserialize_start_date<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<toml::Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(toml::Value::Datetime(datetime)) => {
            let date = datetime
                .date
                .ok_or_else(|| D::Error::custom("expected a date, found a time without a date"))?;
            NaiveDate::from_ymd_opt(date.year as i32, date.month as u32, date.day as u32)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("{} is not a calendar date", datetime)))
        }
        Some(toml::Value::String(text)) => NaiveDate::parse_from_str(&text, DATE_FORMAT)
            .map(Some)
            .map_err(|e| D::Error::custom(format!("invalid date `{}`: {}", text, e))),
        Some(other) => Err(D::Error::custom(format!(
            "expected a date, found {}",
            other.type_str()
        ))),
    }
}

/// Raw planning parameters as a person would enter them.
///
/// Every field is optional in a plan file; missing ones fall back to
/// [`PlanInputs::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlanInputs {
    // Scope
    pub total_area_ha: f64,
    pub total_points: u64,

    // Sampling (points -> ha)
    pub sampling_people: u32,
    pub points_per_person_per_week: f64,
    pub workdays_per_week: u8,
    pub sampling_contingency_pct: f64,

    // Spreading (tonnes -> ha)
    pub t_per_ha: f64,
    pub tonnes_per_day: f64,
    pub lag_days: usize,

    // Dates & simulation
    #[serde(deserialize_with = "deserialize_start_date")]
    pub start_date: Option<NaiveDate>,
    pub max_sim_days: usize,
}

impl Default for PlanInputs {
    fn default() -> Self {
        Self {
            total_area_ha: 100.22,
            total_points: 13545,
            sampling_people: 5,
            points_per_person_per_week: 519.0,
            workdays_per_week: 5,
            sampling_contingency_pct: 10.0,
            t_per_ha: 40.0,
            tonnes_per_day: 80.0,
            lag_days: 1,
            start_date: None,
            max_sim_days: 365,
        }
    }
}

/// The rates as modeled, before any simulation runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedRates {
    pub points_per_ha: f64,
    pub sampling_ha_per_workday: f64,
    pub spreading_ha_per_workday: f64,
    pub spreading_tonnes_per_day: f64,
}

/// Values given on the command line; each one present replaces the value
/// from the plan file (or the default).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanOverrides {
    pub total_area_ha: Option<f64>,
    pub total_points: Option<u64>,
    pub workdays_per_week: Option<u8>,
    pub lag_days: Option<usize>,
    pub max_sim_days: Option<usize>,
    pub start_date: Option<String>,
}

impl PlanOverrides {
    /// Applies every present override to `inputs`. Fails only on a malformed
    /// start date; bounds are checked later by [`PlanInputs::validate`].
    pub fn apply(&self, mut inputs: PlanInputs) -> Result<PlanInputs> {
        if let Some(area) = self.total_area_ha {
            inputs.total_area_ha = area;
        }
        if let Some(points) = self.total_points {
            inputs.total_points = points;
        }
        if let Some(workdays) = self.workdays_per_week {
            inputs.workdays_per_week = workdays;
        }
        if let Some(lag) = self.lag_days {
            inputs.lag_days = lag;
        }
        if let Some(max_days) = self.max_sim_days {
            inputs.max_sim_days = max_days;
        }
        if let Some(value) = &self.start_date {
            inputs.start_date = Some(parse_date(value)?);
        }
        Ok(inputs)
    }
}

pub const ALLOWED_WORKDAYS: [u8; 3] = [5, 6, 7];
pub const MIN_T_PER_HA: f64 = 0.1;
pub const MIN_SIM_DAYS: usize = 30;

fn check_min(field: &'static str, value: f64, min: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(PlanError::invalid(field, format!("{} is not a finite number", value)));
    }
    if value < min {
        return Err(PlanError::invalid(field, format!("{} is below the minimum of {}", value, min)));
    }
    Ok(())
}

impl PlanInputs {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Checks every bound and reports the first violation.
    pub fn validate(&self) -> Result<()> {
        check_min("total_area_ha", self.total_area_ha, 0.0)?;

        if self.sampling_people < 1 {
            return Err(PlanError::invalid("sampling_people", "at least one person is required"));
        }
        check_min("points_per_person_per_week", self.points_per_person_per_week, 1.0)?;

        if !ALLOWED_WORKDAYS.contains(&self.workdays_per_week) {
            return Err(PlanError::invalid(
                "workdays_per_week",
                format!("{} is not one of 5, 6 or 7", self.workdays_per_week),
            ));
        }
        check_min("sampling_contingency_pct", self.sampling_contingency_pct, 0.0)?;

        check_min("t_per_ha", self.t_per_ha, MIN_T_PER_HA)?;
        check_min("tonnes_per_day", self.tonnes_per_day, 0.0)?;

        if self.max_sim_days < MIN_SIM_DAYS {
            return Err(PlanError::invalid(
                "max_sim_days",
                format!("{} is below the minimum of {}", self.max_sim_days, MIN_SIM_DAYS),
            ));
        }
        Ok(())
    }

    pub fn derive_rates(&self) -> DerivedRates {
        let density = points_per_ha(self.total_points, self.total_area_ha);
        DerivedRates {
            points_per_ha: density,
            sampling_ha_per_workday: sampling_ha_per_workday(
                self.sampling_people,
                self.points_per_person_per_week,
                self.workdays_per_week,
                self.sampling_contingency_pct,
                density,
            ),
            spreading_ha_per_workday: spreading_ha_per_workday(self.tonnes_per_day, self.t_per_ha),
            spreading_tonnes_per_day: self.tonnes_per_day,
        }
    }

    /// Validates and builds the engine config. `today` is used when no start
    /// date was given.
    pub fn to_simulation_config(&self, today: NaiveDate) -> Result<SimulationConfig> {
        self.validate()?;
        let rates = self.derive_rates();

        Ok(SimulationConfig {
            total_area: self.total_area_ha,
            sampling_rate_per_workday: rates.sampling_ha_per_workday,
            spreading_rate_per_workday: rates.spreading_ha_per_workday,
            workdays_per_week: self.workdays_per_week,
            lag_days: self.lag_days,
            start_date: self.start_date.unwrap_or(today),
            max_days: self.max_sim_days,
        })
    }
}
