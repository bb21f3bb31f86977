//! Hex, RGB and HSL color models and the conversions between them.
//!
//! HSL values live in the integer domains the hub displays: hue in degrees
//! `[0, 360)`, saturation and lightness in percent `[0, 100]`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex color '{0}'")]
    InvalidHex(String),
}

/// An sRGB color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb`, the form generated palette entries use.
    pub fn to_hex_lower(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }

    pub(crate) fn unit_channels(self) -> [f64; 3] {
        [self.r, self.g, self.b].map(|channel| f64::from(channel) / 255.0)
    }
}

/// Canonical uppercase `#RRGGBB`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

/// A hue/saturation/lightness triple, always normalized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hsl {
    h: u16,
    s: u8,
    l: u8,
}

impl Hsl {
    /// Wraps the hue into `[0, 360)` and clamps saturation and lightness
    /// into `[0, 100]`.
    pub fn new(hue: i32, saturation: i32, lightness: i32) -> Self {
        Self {
            h: hue.rem_euclid(360) as u16,
            s: saturation.clamp(0, 100) as u8,
            l: lightness.clamp(0, 100) as u8,
        }
    }

    pub fn hue(self) -> u16 {
        self.h
    }

    pub fn saturation(self) -> u8 {
        self.s
    }

    pub fn lightness(self) -> u8 {
        self.l
    }

    /// Turns the hue by `degrees`, keeping saturation and lightness.
    #[must_use]
    pub fn rotate(self, degrees: i32) -> Self {
        Self::new(i32::from(self.h) + degrees, i32::from(self.s), i32::from(self.l))
    }

    #[must_use]
    pub fn with_lightness(self, lightness: i32) -> Self {
        Self::new(i32::from(self.h), i32::from(self.s), lightness)
    }

    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// Returns true for `#RRGGBB` and `#RGB`, hex digits in either case.
pub fn is_valid_hex(candidate: &str) -> bool {
    candidate.strip_prefix('#').is_some_and(|digits| {
        matches!(digits.len(), 3 | 6) && digits.bytes().all(|byte| byte.is_ascii_hexdigit())
    })
}

/// Decodes six hex digits, with or without a leading `#`.
///
/// Shorthand is not expanded here; use [`parse_hex`] for user input.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(hex.to_string()));
    }

    let value =
        u32::from_str_radix(digits, 16).map_err(|_| ColorError::InvalidHex(hex.to_string()))?;
    Ok(Rgb::new((value >> 16) as u8, (value >> 8) as u8, value as u8))
}

/// Validates user input and decodes it, expanding `#RGB` to `#RRGGBB`.
pub fn parse_hex(candidate: &str) -> Result<Rgb, ColorError> {
    if !is_valid_hex(candidate) {
        return Err(ColorError::InvalidHex(candidate.to_string()));
    }

    let digits = &candidate[1..];
    if digits.len() == 3 {
        let expanded: String = digits.chars().flat_map(|digit| [digit, digit]).collect();
        hex_to_rgb(&expanded).map_err(|_| ColorError::InvalidHex(candidate.to_string()))
    } else {
        hex_to_rgb(digits)
    }
}

pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorError> {
    parse_hex(hex).map(rgb_to_hsl)
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (h, s, l) = unit_hsl(rgb);
    Hsl::new(
        (h * 360.0).round() as i32,
        (s * 100.0).round() as i32,
        (l * 100.0).round() as i32,
    )
}

pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    unit_hsl_to_rgb(
        f64::from(hsl.h) / 360.0,
        f64::from(hsl.s) / 100.0,
        f64::from(hsl.l) / 100.0,
    )
}

/// Lowercase `#rrggbb` for the given HSL value.
pub fn hsl_to_hex(hsl: Hsl) -> String {
    hsl_to_rgb(hsl).to_hex_lower()
}

/// Hue in turns `[0, 1)`, saturation and lightness in `[0, 1]`, unrounded.
fn unit_hsl(rgb: Rgb) -> (f64, f64, f64) {
    let [r, g, b] = rgb.unit_channels();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (sector / 6.0, s, l)
}

fn unit_hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    if s == 0.0 {
        let gray = unit_to_channel(l);
        return Rgb::new(gray, gray, gray);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::new(
        unit_to_channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
        unit_to_channel(hue_to_channel(p, q, h)),
        unit_to_channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn unit_to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn channel_distance(a: Rgb, b: Rgb) -> u8 {
        a.r.abs_diff(b.r).max(a.g.abs_diff(b.g)).max(a.b.abs_diff(b.b))
    }

    #[test]
    fn hex_to_rgb_decodes_channels_in_either_case() {
        assert_eq!(hex_to_rgb("#3498DB"), Ok(Rgb::new(52, 152, 219)));
        assert_eq!(hex_to_rgb("#3498db"), Ok(Rgb::new(52, 152, 219)));
        assert_eq!(hex_to_rgb("3498db"), Ok(Rgb::new(52, 152, 219)));
    }

    #[test]
    fn hex_to_rgb_does_not_expand_shorthand() {
        assert_eq!(
            hex_to_rgb("#abc"),
            Err(ColorError::InvalidHex("#abc".to_string()))
        );
    }

    #[test]
    fn is_valid_hex_accepts_long_and_short_forms_only() {
        for valid in ["#000000", "#FFFFFF", "#3498db", "#aBc", "#123"] {
            assert!(is_valid_hex(valid), "{valid} should be valid");
        }

        for invalid in [
            "", "#", "3498DB", "#3498D", "#3498DBB", "#12", "#ggg", "not-a-color", "#12345g",
            " #123456",
        ] {
            assert!(!is_valid_hex(invalid), "{invalid} should be invalid");
        }
    }

    #[test]
    fn parse_hex_expands_shorthand() {
        assert_eq!(parse_hex("#abc"), Ok(Rgb::new(0xaa, 0xbb, 0xcc)));
        assert_eq!(parse_hex("#F0A"), Ok(Rgb::new(0xff, 0x00, 0xaa)));
        assert!(parse_hex("abc").is_err());
    }

    #[test]
    fn display_renders_uppercase_canonical_hex() {
        let color: Rgb = "#3498db".parse().expect("parse color");
        assert_eq!(color.to_string(), "#3498DB");
        assert_eq!(color.to_hex_lower(), "#3498db");
    }

    #[test]
    fn rgb_to_hsl_matches_known_values() {
        assert_eq!(rgb_to_hsl(Rgb::new(52, 152, 219)), Hsl::new(204, 70, 53));
        assert_eq!(rgb_to_hsl(Rgb::new(255, 0, 0)), Hsl::new(0, 100, 50));
        assert_eq!(rgb_to_hsl(Rgb::new(0, 255, 0)), Hsl::new(120, 100, 50));
        assert_eq!(rgb_to_hsl(Rgb::new(0, 0, 255)), Hsl::new(240, 100, 50));
        assert_eq!(rgb_to_hsl(Rgb::WHITE), Hsl::new(0, 0, 100));
        assert_eq!(rgb_to_hsl(Rgb::new(128, 128, 128)), Hsl::new(0, 0, 50));
    }

    #[test]
    fn hue_rounding_up_to_full_turn_wraps_to_zero() {
        let hsl = rgb_to_hsl(Rgb::new(255, 0, 1));
        assert_eq!(hsl.hue(), 0);
    }

    #[test]
    fn hsl_new_normalizes_components() {
        let hsl = Hsl::new(360, 120, -5);
        assert_eq!((hsl.hue(), hsl.saturation(), hsl.lightness()), (0, 100, 0));
        assert_eq!(Hsl::new(-30, 50, 50).hue(), 330);
        assert_eq!(Hsl::new(204, 70, 53).rotate(180).hue(), 24);
        assert_eq!(Hsl::new(10, 70, 53).rotate(-30).hue(), 340);
    }

    #[test]
    fn hsl_to_hex_produces_lowercase_digits() {
        assert_eq!(hsl_to_hex(Hsl::new(24, 70, 53)), "#db7633");
        assert_eq!(hsl_to_hex(Hsl::new(0, 100, 50)), "#ff0000");
        assert_eq!(hsl_to_hex(Hsl::new(0, 0, 0)), "#000000");
    }

    #[test]
    fn zero_saturation_yields_gray() {
        let rgb = hsl_to_rgb(Hsl::new(200, 0, 90));
        assert_eq!(rgb, Rgb::new(230, 230, 230));
    }

    #[test]
    fn hex_to_hsl_accepts_shorthand() {
        assert_eq!(hex_to_hsl("#fff"), Ok(Hsl::new(0, 0, 100)));
        assert!(hex_to_hsl("#ff").is_err());
    }

    proptest! {
        #[test]
        fn full_precision_round_trip_stays_within_one(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let rgb = Rgb::new(r, g, b);
            let (h, s, l) = unit_hsl(rgb);
            let back = unit_hsl_to_rgb(h, s, l);
            prop_assert!(channel_distance(rgb, back) <= 1, "{rgb} came back as {back}");
        }

        #[test]
        fn integer_round_trip_stays_within_quantization(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let rgb = Rgb::new(r, g, b);
            let back = hsl_to_rgb(rgb_to_hsl(rgb));
            prop_assert!(channel_distance(rgb, back) <= 6, "{rgb} came back as {back}");
        }

        #[test]
        fn hsl_components_stay_in_range(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let hsl = rgb_to_hsl(Rgb::new(r, g, b));
            prop_assert!(hsl.hue() < 360);
            prop_assert!(hsl.saturation() <= 100);
            prop_assert!(hsl.lightness() <= 100);
        }
    }
}
