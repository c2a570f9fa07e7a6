//! Conversions from planning quantities (sampling points, tonnes of product)
//! into the hectares-per-workday rates the engine consumes.
//!
//! Every division is guarded: a zero denominator yields a rate of 0 so that the
//! corresponding process simply never progresses.

/// Sampling density: how many sampling points fall in one hectare.
///
/// Returns 0 when the area is not positive.
pub fn points_per_ha(total_points: u64, total_area_ha: f64) -> f64 {
    if total_area_ha > 0.0 {
        total_points as f64 / total_area_ha
    } else {
        0.0
    }
}

/// Planning friction applied to sampling capacity.
///
/// A 10% contingency gives a friction of 1.10; effective output is the raw
/// output divided by it.
pub fn sampling_friction(contingency_pct: f64) -> f64 {
    1.0 + contingency_pct / 100.0
}

/// Raw team throughput in points per workday.
pub fn points_per_workday(
    sampling_people: u32,
    points_per_person_per_week: f64,
    workdays_per_week: u8,
) -> f64 {
    if workdays_per_week == 0 {
        return 0.0;
    }
    let points_per_week_team = sampling_people as f64 * points_per_person_per_week;
    points_per_week_team / workdays_per_week as f64
}

/// Effective sampling rate in hectares per workday after contingency.
///
/// # Arguments
/// * `sampling_people` - Crew size.
/// * `points_per_person_per_week` - Throughput of one person.
/// * `workdays_per_week` - Days per week the crew works (5, 6 or 7).
/// * `contingency_pct` - Planning buffer in percent.
/// * `points_per_ha` - Sampling density; 0 yields a rate of 0.
pub fn sampling_ha_per_workday(
    sampling_people: u32,
    points_per_person_per_week: f64,
    workdays_per_week: u8,
    contingency_pct: f64,
    points_per_ha: f64,
) -> f64 {
    if points_per_ha <= 0.0 {
        return 0.0;
    }
    let raw = points_per_workday(sampling_people, points_per_person_per_week, workdays_per_week);
    let effective = raw / sampling_friction(contingency_pct);
    effective / points_per_ha
}

/// Spreading rate in hectares per workday: tonnes moved per day divided by
/// the application rate. Returns 0 when the application rate is not positive.
pub fn spreading_ha_per_workday(tonnes_per_day: f64, t_per_ha: f64) -> f64 {
    if t_per_ha > 0.0 {
        tonnes_per_day / t_per_ha
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn density_guards_zero_area() {
        assert_eq!(points_per_ha(13545, 0.0), 0.0);
        assert_eq!(points_per_ha(13545, -1.0), 0.0);
        assert!(approx(points_per_ha(200, 100.0), 2.0));
    }

    #[test]
    fn contingency_reduces_sampling_rate() {
        // 5 people * 500 pts/week / 5 days = 500 pts/day; 500 / 1.25 = 400;
        // 400 pts / 20 pts/ha = 20 ha
        let rate = sampling_ha_per_workday(5, 500.0, 5, 25.0, 20.0);
        assert!(approx(rate, 20.0));

        let no_buffer = sampling_ha_per_workday(5, 500.0, 5, 0.0, 20.0);
        assert!(approx(no_buffer, 25.0));
    }

    #[test]
    fn sampling_rate_is_zero_without_density() {
        assert_eq!(sampling_ha_per_workday(5, 519.0, 5, 10.0, 0.0), 0.0);
    }

    #[test]
    fn spreading_rate_from_tonnage() {
        assert!(approx(spreading_ha_per_workday(80.0, 40.0), 2.0));
        assert_eq!(spreading_ha_per_workday(80.0, 0.0), 0.0);
        assert_eq!(spreading_ha_per_workday(0.0, 40.0), 0.0);
    }

    #[test]
    fn default_plan_rates() {
        let density = points_per_ha(13545, 100.22);
        assert!((density - 135.153).abs() < 1e-3);

        // 5 * 519 / 5 = 519 pts/day, / 1.1 = 471.82, / 135.153 = 3.49 ha
        let rate = sampling_ha_per_workday(5, 519.0, 5, 10.0, density);
        assert!((rate - 3.491).abs() < 1e-3);
    }
}
