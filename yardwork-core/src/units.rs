//! Unit conversion and rounding helpers shared by both tools.

/// Convert a Fahrenheit temperature to Celsius.
///
/// The formula is exact; rounding happens only at display and aggregation
/// points, never inside the conversion.
pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

/// Round to the nearest tenth. NaN in, NaN out.
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Round to the nearest hundredth. NaN in, NaN out.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freezing_and_boiling_points() {
        assert_eq!(fahrenheit_to_celsius(32.0), 0.0);
        assert_eq!(fahrenheit_to_celsius(212.0), 100.0);
    }

    #[test]
    fn body_temperature_rounds_to_one_decimal() {
        assert_eq!(round1(fahrenheit_to_celsius(98.6)), 37.0);
    }

    #[test]
    fn round1_nearest_tenth() {
        assert_eq!(round1(215.0 / 3.0), 71.7);
        assert_eq!(round1(2.25), 2.3);
        assert!(round1(f64::NAN).is_nan());
    }

    #[test]
    fn round2_nearest_hundredth() {
        assert_eq!(round2(100.0 * 9.87 + 25.0), 1012.0);
        assert_eq!(round2(9.876), 9.88);
        assert!(round2(f64::NAN).is_nan());
    }
}
