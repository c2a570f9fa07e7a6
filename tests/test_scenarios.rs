//! Reference scenarios for the coupled sampling/spreading engine.

use chrono::NaiveDate;
use sampling_spreading::model::schedule::off_days_before;
use sampling_spreading::{simulate, SimulationConfig};

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
}

/// 100 ha, 7-day week, no lag.
fn base_config(sampling_rate: f64, spreading_rate: f64) -> SimulationConfig {
    SimulationConfig::new(100.0, sampling_rate, spreading_rate, start())
}

// ============================================================================
// Scenario A: spreading keeps pace with sampling
// ============================================================================

#[test]
fn test_unconstrained_spreading_finishes_with_sampling() {
    let result = simulate(&base_config(10.0, 10.0));

    assert_eq!(result.sampling_finish_day, Some(9));
    assert_eq!(result.spreading_finish_day, Some(9));
    assert_eq!(result.days_simulated(), 10);

    for record in &result.records {
        assert_eq!(record.backlog, 0.0, "day {} has backlog", record.day_index);
    }
    assert_eq!(result.final_backlog, 0.0);
    assert_eq!(result.peak_backlog_day, None);
}

// ============================================================================
// Scenario B: spreading is the bottleneck
// ============================================================================

#[test]
fn test_spreading_bound_backlog_rises_then_drains() {
    let result = simulate(&base_config(20.0, 5.0));

    assert_eq!(result.sampling_finish_day, Some(4));
    assert_eq!(result.spreading_finish_day, Some(19));
    assert_eq!(result.days_simulated(), 20);

    // Same-day spreading: 100 sampled minus 5 days * 5 spread by day 4
    assert_eq!(result.records[4].backlog, 75.0);
    assert_eq!(result.peak_backlog, 75.0);
    assert_eq!(result.peak_backlog_day, Some(4));

    let backlogs: Vec<f64> = result.records.iter().map(|r| r.backlog).collect();
    assert!(backlogs[..=4].windows(2).all(|w| w[0] < w[1]));
    assert!(backlogs[4..].windows(2).all(|w| w[0] > w[1]));
    assert_eq!(backlogs[19], 0.0);
}

// ============================================================================
// Scenario C: lag delays the start of spreading
// ============================================================================

#[test]
fn test_lag_shifts_spreading_finish_only() {
    let without_lag = simulate(&base_config(20.0, 5.0));
    let with_lag = simulate(&base_config(20.0, 5.0).with_lag_days(3));

    for day in 0..3 {
        assert_eq!(with_lag.records[day].spread_today, 0.0);
    }
    assert_eq!(with_lag.records[3].spread_today, 5.0);

    assert_eq!(with_lag.sampling_finish_day, without_lag.sampling_finish_day);
    assert_eq!(with_lag.spreading_finish_day, Some(22));
    assert_eq!(
        with_lag.spreading_finish_day.unwrap() - without_lag.spreading_finish_day.unwrap(),
        3
    );
}

#[test]
fn test_zero_lag_spreads_on_first_day() {
    let result = simulate(&base_config(20.0, 5.0));
    assert_eq!(result.records[0].spread_today, 5.0);
}

// ============================================================================
// Scenario D: weekends pause both processes
// ============================================================================

#[test]
fn test_five_day_week_skips_weekends() {
    let all_week = simulate(&base_config(10.0, 10.0));
    let weekdays = simulate(&base_config(10.0, 10.0).with_workdays_per_week(5));

    for record in &weekdays.records {
        if record.day_index % 7 >= 5 {
            assert!(!record.is_workday);
            assert_eq!(record.sampled_today, 0.0);
            assert_eq!(record.spread_today, 0.0);
        }
    }

    let finish = weekdays.spreading_finish_day.unwrap();
    assert_eq!(finish, 11);
    assert_eq!(weekdays.sampling_finish_day, Some(11));

    let skipped = off_days_before(finish + 1, 5);
    assert_eq!(finish - all_week.spreading_finish_day.unwrap(), skipped);
}

// ============================================================================
// Horizon and degenerate rates
// ============================================================================

#[test]
fn test_zero_spreading_rate_runs_to_safety_cap() {
    let result = simulate(&base_config(10.0, 0.0).with_max_days(40));

    assert_eq!(result.days_simulated(), 40);
    assert_eq!(result.sampling_finish_day, Some(9));
    assert_eq!(result.spreading_finish_day, None);
    assert_eq!(result.spreading_finish_date(), None);
    assert_eq!(result.final_backlog, 100.0);
    assert!(!result.is_complete());
}

#[test]
fn test_zero_sampling_rate_never_spreads() {
    let result = simulate(&base_config(0.0, 10.0).with_max_days(30));

    assert_eq!(result.days_simulated(), 30);
    assert_eq!(result.sampling_finish_day, None);
    assert_eq!(result.spreading_finish_day, None);
    assert!(result.records.iter().all(|r| r.spread_cumulative == 0.0));
}

#[test]
fn test_stops_exactly_at_safety_cap_when_finishing_on_last_day() {
    let result = simulate(&base_config(10.0, 10.0).with_max_days(10));
    assert_eq!(result.days_simulated(), 10);
    assert_eq!(result.spreading_finish_day, Some(9));

    let short = simulate(&base_config(10.0, 10.0).with_max_days(9));
    assert_eq!(short.days_simulated(), 9);
    assert_eq!(short.spreading_finish_day, None);
}

#[test]
fn test_dates_follow_day_index() {
    let result = simulate(&base_config(10.0, 10.0));
    for record in &result.records {
        assert_eq!(
            record.date,
            start() + chrono::Duration::days(record.day_index as i64)
        );
    }
    assert_eq!(
        result.spreading_finish_date(),
        NaiveDate::from_ymd_opt(2025, 1, 15)
    );
}

#[test]
fn test_fractional_rates_reach_total_within_tolerance() {
    // 0.1 does not add up to exactly 1.0 in binary floating point
    let config = SimulationConfig::new(1.0, 0.1, 0.1, start());
    let result = simulate(&config);

    assert_eq!(result.spreading_finish_day, Some(9));
    let last = result.records.last().unwrap();
    assert!((last.spread_cumulative - 1.0).abs() < 1e-9);
}
