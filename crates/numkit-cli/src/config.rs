//! Configuration loading from TOML files.
//!
//! Lookup order:
//! 1. `$NUMKIT_CONFIG` environment variable
//! 2. `config.toml` in the platform config dir (`~/.config/numkit` on Linux)
//! 3. Built-in defaults (everything is optional)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};

use numkit_core::{Interval, MAX_DIGITS};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub precision: PrecisionConfig,
    pub output: OutputConfig,
    pub mortgage: MortgageConfig,
}

/// Digit bound for the pi and e prompts.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PrecisionConfig {
    /// Clamped to what an f64 can carry.
    pub max_digits: u32,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Suffix printed after money amounts.
    pub currency: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MortgageConfig {
    /// Compounding interval when `--interval` is not given.
    pub interval: Interval,
}

// --- Defaults ---

impl Default for PrecisionConfig {
    fn default() -> Self {
        Self {
            max_digits: MAX_DIGITS,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            currency: "$".into(),
        }
    }
}

impl Default for MortgageConfig {
    fn default() -> Self {
        Self {
            interval: Interval::Monthly,
        }
    }
}

impl Config {
    /// Effective digit bound: the configured one, never above `MAX_DIGITS`.
    pub fn max_digits(&self) -> u32 {
        if self.precision.max_digits > MAX_DIGITS {
            warn!(
                configured = self.precision.max_digits,
                max = MAX_DIGITS,
                "max_digits exceeds f64 precision, clamping"
            );
            return MAX_DIGITS;
        }
        self.precision.max_digits
    }
}

/// Load config from disk. Returns defaults if no config file exists.
pub fn load_config() -> Result<Config> {
    match config_path() {
        Some(p) if p.exists() => load_config_from(&p),
        _ => Ok(Config::default()),
    }
}

/// Load config from an explicit file.
pub fn load_config_from(path: &Path) -> Result<Config> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Resolve the config file path.
fn config_path() -> Option<PathBuf> {
    if let Ok(p) = std::env::var("NUMKIT_CONFIG") {
        return Some(PathBuf::from(p));
    }

    directories::ProjectDirs::from("dev", "numkit", "numkit")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Show the active config path (for `numkit config`).
pub fn show_config_path() -> String {
    match config_path() {
        Some(p) if p.exists() => format!("{} (loaded)", p.display()),
        Some(p) => format!("{} (not found, using defaults)", p.display()),
        None => "no config path resolved (using defaults)".into(),
    }
}
