use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::schedule::progress::{stage_progress, stage_progress_weighted};
use crate::core::stage::SubStage;
use crate::{splog_debug, Error, Result};

fn default_weighted_rollup() -> bool {
    true
}

/// Host-side configuration for the schedule engine.
///
/// The engine functions themselves are pure; this selects which of them
/// the hosting portal persists. `weighted_rollup` chooses between the
/// budget-weighted and equal-weight stage rollup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_weighted_rollup")]
    pub weighted_rollup: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weighted_rollup: true,
        }
    }
}

impl Config {
    pub fn siteplan_dir() -> Result<PathBuf> {
        Ok(dirs::home_dir().ok_or(Error::NoHomeDir)?.join(".siteplan"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::siteplan_dir()?.join("siteplan.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        splog_debug!("Config::load path={}", path.display());
        if !path.exists() {
            splog_debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(&fs::read_to_string(path)?)?;
        splog_debug!("Config loaded: weighted_rollup={}", config.weighted_rollup);
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let dir = Self::siteplan_dir()?;
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        fs::write(path, toml::to_string_pretty(self)?)?;
        splog_debug!("Config saved to {}", path.display());
        Ok(())
    }

    /// Compute the stage percentage the portal should persist, using
    /// the rollup variant this configuration selects.
    pub fn stage_rollup(&self, substages: &[SubStage]) -> u8 {
        if self.weighted_rollup {
            stage_progress_weighted(substages)
        } else {
            stage_progress(substages)
        }
    }
}
