//! Report rendering for both tools.
//!
//! Renderers return plain strings so line ordering stays unit-testable;
//! the binaries only print them.

use yardwork_core::mulch::MulchRecord;
use yardwork_core::units::{fahrenheit_to_celsius, round1};
use yardwork_core::weather::CityRecord;

/// Mulch run summary: figure, dimensions in entry order, volume, cost.
///
/// "sq. inches" is the label the store has always carried; it is nominal,
/// not dimensionally corrected.
pub fn mulch_report(record: &MulchRecord) -> String {
    let mut lines = vec![format!("Figure selected: {}", record.figure)];

    for (label, value) in record.vol_data.dimensions() {
        lines.push(format!("{label} of figure: {value} inches"));
    }

    lines.push(format!(
        "Amount of mulch needed: {} sq. inches",
        record.vol_data.volume()
    ));
    lines.push(format!("Final cost: ${:.2}", record.cost));

    lines.join("\n")
}

/// One city's summary, led by the running overall average.
///
/// Averages carry one-decimal Celsius; individual samples and the
/// high/low carry integer Celsius.
pub fn city_report(city: &CityRecord, overall: f64) -> String {
    let mut lines = vec![
        format!(
            "Current Overall Average Temperature: {}F, {}C",
            overall,
            round1(fahrenheit_to_celsius(overall))
        ),
        format!("City: {}", city.name),
        "Temperatures: ".to_string(),
    ];

    for &sample in city.temps.samples() {
        lines.push(format!(
            "    {}F, {}C",
            sample,
            fahrenheit_to_celsius(sample).round()
        ));
    }

    let average = city.temps.average();
    lines.push(format!(
        "Current Average Temperature: {}F, {}C",
        average,
        round1(fahrenheit_to_celsius(average))
    ));
    lines.push(format!(
        "Highest Temperature: {}F, {}C",
        city.temps.high(),
        fahrenheit_to_celsius(city.temps.high()).round()
    ));
    lines.push(format!(
        "Lowest Temperature: {}F, {}C",
        city.temps.low(),
        fahrenheit_to_celsius(city.temps.low()).round()
    ));

    lines.join("\n")
}

/// Final line printed after the last city.
pub fn overall_report(overall: f64) -> String {
    format!(
        "Overall Average Temperature: {}F, {}C",
        overall,
        round1(fahrenheit_to_celsius(overall))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use yardwork_core::mulch::ShapeData;
    use yardwork_core::weather::TempStats;

    fn city(name: &str, samples: &[f64]) -> CityRecord {
        let mut temps = TempStats::default();
        for &s in samples {
            temps.record(s);
        }
        CityRecord {
            name: name.to_string(),
            temps,
        }
    }

    #[test]
    fn rectangle_report_lists_dimensions_before_volume_and_cost() {
        let record = MulchRecord::new(ShapeData::rectangle(2.0, 3.0, 4.0));
        let report = mulch_report(&record);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(
            lines,
            [
                "Figure selected: Rectangle",
                "Length of figure: 2 inches",
                "Width of figure: 3 inches",
                "Depth of figure: 4 inches",
                "Amount of mulch needed: 24 sq. inches",
                "Final cost: $261.88",
            ]
        );
    }

    #[test]
    fn circle_report_shows_radius_then_depth() {
        let record = MulchRecord::new(ShapeData::circle(3.0, 2.0));
        let report = mulch_report(&record);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(
            lines,
            [
                "Figure selected: Circle",
                "Radius of figure: 3 inches",
                "Depth of figure: 2 inches",
                "Amount of mulch needed: 57 sq. inches",
                "Final cost: $587.59",
            ]
        );
    }

    #[test]
    fn city_report_shows_samples_in_both_units() {
        let city = city("Springfield", &[70.0, 65.0, 80.0]);
        let report = city_report(&city, 71.7);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(
            lines,
            [
                "Current Overall Average Temperature: 71.7F, 22.1C",
                "City: Springfield",
                "Temperatures: ",
                "    70F, 21C",
                "    65F, 18C",
                "    80F, 27C",
                "Current Average Temperature: 71.7F, 22.1C",
                "Highest Temperature: 80F, 27C",
                "Lowest Temperature: 65F, 18C",
            ]
        );
    }

    #[test]
    fn empty_city_report_renders_nan_average_and_zero_bounds() {
        let city = city("Nowhere", &[]);
        let report = city_report(&city, f64::NAN);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "Current Overall Average Temperature: NaNF, NaNC");
        assert_eq!(lines[2], "Temperatures: ");
        assert_eq!(lines[3], "Current Average Temperature: NaNF, NaNC");
        assert_eq!(lines[4], "Highest Temperature: 0F, -18C");
        assert_eq!(lines[5], "Lowest Temperature: 0F, -18C");
    }

    #[test]
    fn overall_report_carries_one_decimal_celsius() {
        assert_eq!(
            overall_report(71.7),
            "Overall Average Temperature: 71.7F, 22.1C"
        );
        assert_eq!(
            overall_report(32.0),
            "Overall Average Temperature: 32F, 0C"
        );
    }
}
