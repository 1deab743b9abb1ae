//! Shape, volume and pricing model for the mulch calculator.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use crate::units::round2;

/// Price charged per whole unit of volume.
pub const CHARGE_RATE: f64 = 9.87;

/// Flat delivery fee added to every order.
pub const CHARGE_FEE: f64 = 25.0;

/// Figure selection, answered with a single letter at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Rectangle,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Rectangle => "Rectangle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "C" => Ok(ShapeKind::Circle),
            "R" => Ok(ShapeKind::Rectangle),
            other => Err(anyhow!("Unknown figure '{other}'. Enter R or C.")),
        }
    }
}

/// Dimensions and computed volume for one figure.
///
/// Each variant carries its dimension fields in entry order; reports walk
/// [`ShapeData::dimensions`] instead of relying on any map ordering. The
/// serialized field names (`Radius`, `Depth`, `Volume`, ...) match the
/// records already laid down in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShapeData {
    #[serde(rename_all = "PascalCase")]
    Circle { radius: f64, depth: f64, volume: f64 },
    #[serde(rename_all = "PascalCase")]
    Rectangle {
        length: f64,
        width: f64,
        depth: f64,
        volume: f64,
    },
}

impl ShapeData {
    /// Cylinder volume, rounded to the nearest whole unit.
    pub fn circle(radius: f64, depth: f64) -> Self {
        let volume = (radius * radius * PI * depth).round();
        ShapeData::Circle { radius, depth, volume }
    }

    /// Box volume, rounded to the nearest whole unit.
    pub fn rectangle(length: f64, width: f64, depth: f64) -> Self {
        let volume = (length * width * depth).round();
        ShapeData::Rectangle { length, width, depth, volume }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeData::Circle { .. } => ShapeKind::Circle,
            ShapeData::Rectangle { .. } => ShapeKind::Rectangle,
        }
    }

    pub fn volume(&self) -> f64 {
        match self {
            ShapeData::Circle { volume, .. } | ShapeData::Rectangle { volume, .. } => *volume,
        }
    }

    /// Labeled dimension fields in the order they were entered, volume
    /// excluded.
    pub fn dimensions(&self) -> Vec<(&'static str, f64)> {
        match *self {
            ShapeData::Circle { radius, depth, .. } => {
                vec![("Radius", radius), ("Depth", depth)]
            }
            ShapeData::Rectangle { length, width, depth, .. } => {
                vec![("Length", length), ("Width", width), ("Depth", depth)]
            }
        }
    }
}

/// Cost of an order: volume at the fixed rate plus the delivery fee,
/// rounded to whole cents.
pub fn mulch_cost(volume: f64) -> f64 {
    round2(volume * CHARGE_RATE + CHARGE_FEE)
}

/// Parse a dimension reply. Malformed numbers are not re-asked; they come
/// back as NaN and flow through volume, cost and the report.
pub fn parse_dimension(input: &str) -> f64 {
    input.trim().parse().unwrap_or(f64::NAN)
}

/// One persisted calculator run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MulchRecord {
    pub figure: String,
    #[serde(rename = "volData")]
    pub vol_data: ShapeData,
    pub cost: f64,
}

impl MulchRecord {
    pub fn new(vol_data: ShapeData) -> Self {
        let cost = mulch_cost(vol_data.volume());
        MulchRecord {
            figure: vol_data.kind().as_str().to_string(),
            vol_data,
            cost,
        }
    }
}
