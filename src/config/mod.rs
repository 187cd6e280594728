use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::errors::PersistenceError;
use crate::ledger::ValidationPolicy;
use crate::storage::tmp_path;
use crate::utils::{app_data_dir, ensure_dir};

const CONFIG_FILE: &str = "config.json";
const RECORD_FILE: &str = "transactions.csv";

/// Which persistence strategy backs the transaction record file.
///
/// The two strategies write different file layouts and are not composable,
/// so the choice is explicit configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum PersistenceStrategy {
    /// Rewrite the file per transaction, keeping one trailing summary row.
    #[default]
    Resync,
    /// Append one row per transaction, each stamped with its own remaining balance.
    AppendOnly,
}

/// User-tunable tracker settings, persisted as pretty JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default)]
    pub validation: ValidationPolicy,
    #[serde(default)]
    pub strategy: PersistenceStrategy,
    /// Overrides the default data directory when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            validation: ValidationPolicy::Strict,
            strategy: PersistenceStrategy::Resync,
            data_dir: None,
        }
    }
}

impl TrackerConfig {
    /// Resolves the record file location inside the configured data directory.
    pub fn record_path(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(app_data_dir)
            .join(RECORD_FILE)
    }
}

/// Loads and saves the tracker configuration file.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, PersistenceError> {
        Self::from_base(app_data_dir())
    }

    pub fn from_base(base: PathBuf) -> Result<Self, PersistenceError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the stored configuration, or defaults when none exists yet.
    pub fn load(&self) -> Result<TrackerConfig, PersistenceError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(TrackerConfig::default())
        }
    }

    pub fn save(&self, config: &TrackerConfig) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
