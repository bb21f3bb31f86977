//! WCAG 2.1 contrast ratio and accessibility tiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::{parse_hex, ColorError, Rgb};

pub const AAA_THRESHOLD: f64 = 7.0;
pub const AA_THRESHOLD: f64 = 4.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    Fail,
}

impl Tier {
    /// Lower bounds are inclusive: exactly 7.0 is AAA, exactly 4.5 is AA.
    pub fn classify(ratio: f64) -> Self {
        if ratio >= AAA_THRESHOLD {
            Tier::Aaa
        } else if ratio >= AA_THRESHOLD {
            Tier::Aa
        } else {
            Tier::Fail
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Aaa => "AAA",
            Tier::Aa => "AA",
            Tier::Fail => "Fail",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contrast {
    /// Rounded to two decimal places, always >= 1.
    pub ratio: f64,
    pub tier: Tier,
}

impl fmt::Display for Contrast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}:1 {}", self.ratio, self.tier)
    }
}

fn linearize(channel: f64) -> f64 {
    if channel <= 0.03928 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in `[0, 1]`, 0 for black and 1 for white.
pub fn relative_luminance(color: Rgb) -> f64 {
    let [r, g, b] = color.unit_channels().map(linearize);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// The ratio is symmetric in its arguments.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> Contrast {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };

    let ratio = ((lighter + 0.05) / (darker + 0.05) * 100.0).round() / 100.0;
    Contrast {
        ratio,
        tier: Tier::classify(ratio),
    }
}

pub fn contrast_for_hex(a: &str, b: &str) -> Result<Contrast, ColorError> {
    Ok(contrast_ratio(parse_hex(a)?, parse_hex(b)?))
}
