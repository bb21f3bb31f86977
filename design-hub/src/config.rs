use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use dirs::config_dir;
use serde::{Deserialize, Serialize};

use crate::calculator::CalculatorConfig;
use crate::scheme::{HarmonyRules, SchemeError};

pub const CONFIG_PATH_ENV: &str = "DESIGN_HUB_CONFIG_PATH";
const APP_DIR: &str = "design-hub";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("config directory unavailable")]
    MissingConfigDir,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error("invalid harmony rules: {0}")]
    Harmony(#[from] SchemeError),
}

/// Tunable constants. Read-only: the hub never writes this file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    pub harmony: HarmonyRules,
    pub calculator: CalculatorConfig,
}

impl HubConfig {
    pub fn load() -> Result<Self, PersistenceError> {
        let path = resolve_path(CONFIG_PATH_ENV, CONFIG_FILE)?;
        Self::load_from_path(path)
    }

    /// A missing file yields the defaults. Harmony rules are validated.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let config: Self = match fs::read_to_string(path.as_ref()) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(err.into()),
        };
        config.harmony.validate()?;
        Ok(config)
    }
}

/// `$<env_var>` when set, otherwise `<config dir>/design-hub/<file_name>`.
pub(crate) fn resolve_path(env_var: &str, file_name: &str) -> Result<PathBuf, PersistenceError> {
    if let Ok(custom) = env::var(env_var) {
        return Ok(PathBuf::from(custom));
    }
    let base = config_dir().ok_or(PersistenceError::MissingConfigDir)?;
    Ok(base.join(APP_DIR).join(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().expect("tempdir");
        let config = HubConfig::load_from_path(dir.path().join("config.json")).expect("load");
        assert_eq!(config, HubConfig::default());
        assert_eq!(config.harmony.analogous_spread, 30);
        assert_eq!(config.calculator.currency, "ZMW");
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"harmony": {"analogous_spread": 45}, "calculator": {"price_per_liter": 99.5}}"#,
        )
        .expect("write config");

        let config = HubConfig::load_from_path(&path).expect("load");

        assert_eq!(config.harmony.analogous_spread, 45);
        assert_eq!(config.harmony.monochrome_shades, 5);
        assert_eq!(config.calculator.price_per_liter, 99.5);
        assert_eq!(config.calculator.coverage_per_liter, 10.0);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").expect("write config");

        let err = HubConfig::load_from_path(&path).expect_err("malformed config");
        assert!(matches!(err, PersistenceError::Serde(_)));
    }

    #[test]
    fn zero_monochrome_shades_is_rejected() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"harmony": {"monochrome_shades": 0}}"#).expect("write config");

        let err = HubConfig::load_from_path(&path).expect_err("zero shades");
        assert!(matches!(err, PersistenceError::Harmony(SchemeError::NoShades)));
        assert_eq!(
            err.to_string(),
            "invalid harmony rules: monochrome palettes need at least one shade"
        );
    }

    #[test]
    fn missing_config_dir_error_message() {
        let message = PersistenceError::MissingConfigDir.to_string();
        assert_eq!(message, "config directory unavailable");
    }
}
