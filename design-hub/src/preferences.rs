//! The one durable preference: the last-used harmony scheme.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{resolve_path, PersistenceError};
use crate::scheme::Scheme;

pub const PREFS_PATH_ENV: &str = "DESIGN_HUB_PREFS_PATH";
const PREFS_FILE: &str = "preferences.json";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub scheme: Scheme,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses `DESIGN_HUB_PREFS_PATH` when set, else the platform config dir.
    pub fn locate() -> Result<Self, PersistenceError> {
        resolve_path(PREFS_PATH_ENV, PREFS_FILE).map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Preferences, PersistenceError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Preferences::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, preferences: &Preferences) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_vec_pretty(preferences)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}
