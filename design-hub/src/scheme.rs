//! Harmony schemes: derive a small, ordered palette from one base color.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::color::{hsl_to_hex, parse_hex, Hsl};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Complementary,
    Analogous,
    Triadic,
    Monochrome,
    Tetradic,
}

impl Scheme {
    pub const ALL: [Scheme; 5] = [
        Scheme::Complementary,
        Scheme::Analogous,
        Scheme::Triadic,
        Scheme::Monochrome,
        Scheme::Tetradic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Complementary => "complementary",
            Scheme::Analogous => "analogous",
            Scheme::Triadic => "triadic",
            Scheme::Monochrome => "monochrome",
            Scheme::Tetradic => "tetradic",
        }
    }

    /// Capitalized name used in headings.
    pub fn title(self) -> &'static str {
        match self {
            Scheme::Complementary => "Complementary",
            Scheme::Analogous => "Analogous",
            Scheme::Triadic => "Triadic",
            Scheme::Monochrome => "Monochrome",
            Scheme::Tetradic => "Tetradic",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SchemeError {
    #[error("unknown color scheme '{0}'")]
    Unknown(String),
    #[error("monochrome palettes need at least one shade")]
    NoShades,
}

impl FromStr for Scheme {
    type Err = SchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Scheme::ALL
            .into_iter()
            .find(|scheme| scheme.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| SchemeError::Unknown(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedColor {
    pub label: String,
    pub hex: String,
}

impl NamedColor {
    pub fn new(label: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            hex: hex.into(),
        }
    }
}

/// Product constants for the schemes that are not fixed hue rotations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarmonyRules {
    /// Hue distance, in degrees, of the analogous neighbours.
    pub analogous_spread: u16,
    pub monochrome_start: u8,
    pub monochrome_step: u8,
    pub monochrome_shades: u8,
}

impl Default for HarmonyRules {
    fn default() -> Self {
        Self {
            analogous_spread: 30,
            monochrome_start: 90,
            monochrome_step: 20,
            monochrome_shades: 5,
        }
    }
}

impl HarmonyRules {
    /// Rejects rules that would turn a valid base into an empty palette.
    pub fn validate(&self) -> Result<(), SchemeError> {
        if self.monochrome_shades == 0 {
            return Err(SchemeError::NoShades);
        }
        Ok(())
    }
}

/// Generates the palette for `base` with the default rules.
///
/// Returns `None` when `base` is not a valid hex color; no partial palette
/// is ever produced.
pub fn generate_palette(base: &str, scheme: Scheme) -> Option<Vec<NamedColor>> {
    generate_palette_with(base, scheme, &HarmonyRules::default())
}

pub fn generate_palette_with(
    base: &str,
    scheme: Scheme,
    rules: &HarmonyRules,
) -> Option<Vec<NamedColor>> {
    let hsl = parse_base(base, scheme.as_str())?;
    Some(derive_logged(base, hsl, scheme, rules))
}

/// String-keyed variant for callers holding a raw scheme name.
///
/// An unrecognized name yields an empty palette, meaning nothing to render.
pub fn generate_palette_named(base: &str, scheme: &str) -> Option<Vec<NamedColor>> {
    let hsl = parse_base(base, scheme)?;

    match scheme.parse::<Scheme>() {
        Ok(scheme) => Some(derive_logged(base, hsl, scheme, &HarmonyRules::default())),
        Err(err) => {
            debug!(target: "design_hub::scheme", %err, "nothing to render");
            Some(Vec::new())
        }
    }
}

fn parse_base(base: &str, scheme: &str) -> Option<Hsl> {
    match parse_hex(base) {
        Ok(rgb) => Some(rgb.to_hsl()),
        Err(err) => {
            warn!(target: "design_hub::scheme", %err, scheme, "declining to generate palette");
            None
        }
    }
}

fn derive_logged(base: &str, hsl: Hsl, scheme: Scheme, rules: &HarmonyRules) -> Vec<NamedColor> {
    let colors = derive(base, hsl, scheme, rules);
    debug!(
        target: "design_hub::scheme",
        base,
        %scheme,
        %hsl,
        colors = colors.len(),
        "generated palette"
    );
    colors
}

fn derive(base: &str, hsl: Hsl, scheme: Scheme, rules: &HarmonyRules) -> Vec<NamedColor> {
    let base_entry = || NamedColor::new("Base", base);
    let rotated = |label: &str, degrees: i32| NamedColor::new(label, hsl_to_hex(hsl.rotate(degrees)));

    match scheme {
        Scheme::Complementary => vec![base_entry(), rotated("Complement", 180)],
        Scheme::Analogous => {
            let spread = i32::from(rules.analogous_spread);
            vec![
                rotated("Left", -spread),
                base_entry(),
                rotated("Right", spread),
            ]
        }
        Scheme::Triadic => vec![
            base_entry(),
            rotated("Triadic 1", 120),
            rotated("Triadic 2", 240),
        ],
        Scheme::Monochrome => (0..rules.monochrome_shades)
            .map(|index| {
                let lightness = i32::from(rules.monochrome_start)
                    - i32::from(rules.monochrome_step) * i32::from(index);
                NamedColor::new(
                    format!("Shade {}", index + 1),
                    hsl_to_hex(hsl.with_lightness(lightness)),
                )
            })
            .collect(),
        Scheme::Tetradic => vec![
            base_entry(),
            rotated("Complement", 180),
            rotated("Split 1", 60),
            rotated("Split 2", 240),
        ],
    }
}
