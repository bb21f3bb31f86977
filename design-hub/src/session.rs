use tracing::{debug, warn};

use crate::color::{is_valid_hex, parse_hex, ColorError};
use crate::preferences::{PreferenceStore, Preferences};
use crate::scheme::{generate_palette_with, HarmonyRules, Scheme};
use crate::swatch::{annotate, Swatch};

/// State owned by one presentation surface: the selected scheme, the base
/// color and the swatches last generated from them.
#[derive(Debug)]
pub struct DesignSession {
    scheme: Scheme,
    base: String,
    rules: HarmonyRules,
    palette: Vec<Swatch>,
    store: Option<PreferenceStore>,
}

impl DesignSession {
    /// Fails when `base` is not a valid hex color, so a session always
    /// holds a renderable base.
    pub fn new(
        base: impl Into<String>,
        scheme: Scheme,
        rules: HarmonyRules,
    ) -> Result<Self, ColorError> {
        let base = base.into();
        parse_hex(&base)?;

        let mut session = Self {
            scheme,
            base,
            rules,
            palette: Vec::new(),
            store: None,
        };
        session.regenerate();
        Ok(session)
    }

    /// Starts from the stored scheme, or the default when nothing readable
    /// is stored. Later scheme changes are written back to `store`.
    pub fn open(
        store: PreferenceStore,
        base: impl Into<String>,
        rules: HarmonyRules,
    ) -> Result<Self, ColorError> {
        let scheme = match store.load() {
            Ok(preferences) => preferences.scheme,
            Err(err) => {
                warn!(
                    ?err,
                    path = %store.path().display(),
                    "failed to load preferences, using default scheme"
                );
                Scheme::default()
            }
        };

        let mut session = Self::new(base, scheme, rules)?;
        session.store = Some(store);
        Ok(session)
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn rules(&self) -> &HarmonyRules {
        &self.rules
    }

    pub fn palette(&self) -> &[Swatch] {
        &self.palette
    }

    pub fn select_scheme(&mut self, scheme: Scheme) -> &[Swatch] {
        self.scheme = scheme;
        self.persist();
        self.regenerate();
        &self.palette
    }

    /// Returns false and keeps the previous palette when `hex` is invalid.
    pub fn set_base_color(&mut self, hex: &str) -> bool {
        if !is_valid_hex(hex) {
            warn!(base = hex, "ignoring invalid base color");
            return false;
        }

        self.base = hex.to_string();
        self.regenerate()
    }

    fn regenerate(&mut self) -> bool {
        let Some(colors) = generate_palette_with(&self.base, self.scheme, &self.rules) else {
            return false;
        };

        match annotate(&colors, &self.base) {
            Ok(swatches) => {
                debug!(scheme = %self.scheme, base = %self.base, "palette refreshed");
                self.palette = swatches;
                true
            }
            Err(err) => {
                warn!(?err, "failed to annotate palette");
                false
            }
        }
    }

    fn persist(&self) {
        let Some(store) = &self.store else {
            return;
        };

        let preferences = Preferences {
            scheme: self.scheme,
        };
        if let Err(err) = store.save(&preferences) {
            warn!(?err, "failed to save scheme preference");
        }
    }
}
