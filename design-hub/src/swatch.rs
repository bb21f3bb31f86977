//! Display-ready swatches built from a generated palette.

use serde::{Deserialize, Serialize};

use crate::color::{parse_hex, ColorError, Rgb};
use crate::contrast::{contrast_ratio, Contrast};
use crate::scheme::NamedColor;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Swatch {
    pub label: String,
    /// Canonical uppercase `#RRGGBB`.
    pub hex: String,
    pub rgb: Rgb,
    /// Measured against the palette's base color.
    pub contrast: Contrast,
}

impl Swatch {
    pub fn rgb_label(&self) -> String {
        format!("RGB({}, {}, {})", self.rgb.r, self.rgb.g, self.rgb.b)
    }
}

/// Annotates every palette entry with its RGB triple and its contrast
/// against `base`, keeping the palette order.
pub fn annotate(palette: &[NamedColor], base: &str) -> Result<Vec<Swatch>, ColorError> {
    let base = parse_hex(base)?;

    palette
        .iter()
        .map(|color| {
            let rgb = parse_hex(&color.hex)?;
            Ok(Swatch {
                label: color.label.clone(),
                hex: rgb.to_string(),
                rgb,
                contrast: contrast_ratio(rgb, base),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::Tier;
    use crate::scheme::{generate_palette, Scheme};

    #[test]
    fn annotate_keeps_order_and_uppercases_hex() {
        let palette = generate_palette("#3498db", Scheme::Complementary).expect("valid base");
        let swatches = annotate(&palette, "#3498db").expect("annotate palette");

        assert_eq!(swatches.len(), 2);
        assert_eq!(swatches[0].label, "Base");
        assert_eq!(swatches[0].hex, "#3498DB");
        assert_eq!(swatches[0].rgb_label(), "RGB(52, 152, 219)");
        assert_eq!(swatches[0].contrast.ratio, 1.0);
        assert_eq!(swatches[1].label, "Complement");
        assert_eq!(swatches[1].hex, "#DB7633");
        assert_eq!(swatches[1].rgb, Rgb::new(219, 118, 51));
    }

    #[test]
    fn shorthand_base_is_rendered_in_long_form() {
        let palette = generate_palette("#fff", Scheme::Monochrome).expect("valid base");
        let swatches = annotate(&palette, "#fff").expect("annotate palette");

        assert_eq!(swatches.len(), 5);
        assert!(swatches.iter().all(|swatch| swatch.hex.len() == 7));
        assert_eq!(swatches[4].contrast.tier, Tier::Aaa);
    }

    #[test]
    fn invalid_entry_fails_annotation() {
        let palette = vec![NamedColor::new("Broken", "#12")];
        assert_eq!(
            annotate(&palette, "#000000"),
            Err(ColorError::InvalidHex("#12".to_string()))
        );
    }
}
