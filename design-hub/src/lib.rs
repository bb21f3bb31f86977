//! Palette, contrast and paint-estimate core of the Vancy Painter design hub.
//!
//! Everything here returns plain data. Rendering, clipboard and page chrome
//! belong to whichever front end drives a [`DesignSession`].

pub mod api;
pub mod calculator;
pub mod color;
pub mod config;
pub mod contrast;
pub mod export;
pub mod preferences;
pub mod scheme;
pub mod session;
pub mod swatch;

pub use color::{is_valid_hex, parse_hex, ColorError, Hsl, Rgb};
pub use contrast::{contrast_for_hex, contrast_ratio, Contrast, Tier};
pub use scheme::{generate_palette, HarmonyRules, NamedColor, Scheme};
pub use session::DesignSession;
pub use swatch::Swatch;
