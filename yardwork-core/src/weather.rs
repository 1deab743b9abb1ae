//! Temperature statistics for the weather tracker.

use crate::units::round1;

/// Inner-loop sentinel that ends temperature entry for a city.
pub const CLOSE_TOKEN: &str = "close";

/// True when a reply is the (case-insensitive) close sentinel.
pub fn is_close(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(CLOSE_TOKEN)
}

/// Parse a temperature reply as a whole-degree reading.
///
/// Malformed input is not rejected; it becomes a NaN sample and flows
/// through the statistics like any other value.
pub fn parse_sample(input: &str) -> f64 {
    input
        .trim()
        .parse::<i64>()
        .map(|v| v as f64)
        .unwrap_or(f64::NAN)
}

/// Running statistics over one city's samples.
///
/// The high starts at zero and only moves up; the low is seeded by the
/// first sample and afterwards only moves down. A city with no samples
/// therefore reports high == low == 0 and a NaN average.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TempStats {
    samples: Vec<f64>,
    high: f64,
    low: f64,
}

impl TempStats {
    pub fn record(&mut self, sample: f64) {
        if sample > self.high {
            self.high = sample;
        }
        if self.samples.is_empty() || sample < self.low {
            self.low = sample;
        }
        self.samples.push(sample);
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    /// Mean of the samples, rounded to one decimal.
    pub fn average(&self) -> f64 {
        round1(self.samples.iter().sum::<f64>() / self.samples.len() as f64)
    }
}

/// One city's name and readings, held only for the session.
#[derive(Debug, Clone, PartialEq)]
pub struct CityRecord {
    pub name: String,
    pub temps: TempStats,
}

/// Cross-city aggregate threaded through the collection loop.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionAverage {
    total: f64,
    cities: usize,
}

impl SessionAverage {
    /// Fold in a completed city's (already rounded) average.
    pub fn absorb(&mut self, city_average: f64) {
        self.total += city_average;
        self.cities += 1;
    }

    pub fn cities(&self) -> usize {
        self.cities
    }

    /// Mean of the per-city averages so far, rounded to one decimal.
    pub fn overall(&self) -> f64 {
        round1(self.total / self.cities as f64)
    }
}
