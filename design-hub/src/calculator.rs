//! Paint quantity and cost estimate for the four walls of a room.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coverage and pricing are product decisions, not physical constants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Square metres one litre covers in a single coat.
    pub coverage_per_liter: f64,
    pub price_per_liter: f64,
    pub currency: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            coverage_per_liter: 10.0,
            price_per_liter: 120.0,
            currency: "ZMW".to_string(),
        }
    }
}

/// Room dimensions in metres.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    /// Zero is treated as a single coat.
    pub coats: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaintEstimate {
    pub wall_area: f64,
    pub total_area: f64,
    pub liters: f64,
    pub cost: f64,
    pub currency: String,
}

impl fmt::Display for PaintEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Wall area: {:.2} m²", self.wall_area)?;
        writeln!(f, "Paint needed: {:.2} liters", self.liters)?;
        write!(f, "Estimated cost: {} {:.2}", self.currency, self.cost)
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CalculatorError {
    #[error("invalid room dimensions {length} x {width} x {height}")]
    InvalidDimensions { length: f64, width: f64, height: f64 },
    #[error("coverage per liter must be positive, got {0}")]
    InvalidCoverage(f64),
}

/// Litres are rounded to two decimals before pricing, so the quoted cost
/// always matches the quoted quantity.
pub fn estimate(room: &Room, config: &CalculatorConfig) -> Result<PaintEstimate, CalculatorError> {
    let Room {
        length,
        width,
        height,
        coats,
    } = *room;

    let valid = |value: f64| value.is_finite() && value > 0.0;
    if !(valid(length) && valid(width) && valid(height)) {
        return Err(CalculatorError::InvalidDimensions {
            length,
            width,
            height,
        });
    }

    if !valid(config.coverage_per_liter) {
        return Err(CalculatorError::InvalidCoverage(config.coverage_per_liter));
    }

    let wall_area = 2.0 * (length + width) * height;
    let total_area = wall_area * f64::from(coats.max(1));
    let liters = round2(total_area / config.coverage_per_liter);
    let cost = round2(liters * config.price_per_liter);

    Ok(PaintEstimate {
        wall_area,
        total_area,
        liters,
        cost,
        currency: config.currency.clone(),
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
