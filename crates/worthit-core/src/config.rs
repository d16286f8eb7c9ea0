use crate::errors::RetryPolicy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per operation (including the first).
    pub max_attempts: u32,
    /// Delay before the first retry in seconds (e.g. 0.25 = 250ms).
    pub initial_delay_secs: f64,
    /// Optional cap on the backoff delay in seconds; uncapped when absent.
    #[serde(default)]
    pub max_delay_secs: Option<u64>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        let p = RetryPolicy::default();
        Self {
            max_attempts: p.max_attempts(),
            initial_delay_secs: p.initial_delay().as_secs_f64(),
            max_delay_secs: p.max_delay().map(|d| d.as_secs()),
        }
    }
}

impl RetryConfig {
    /// Validate into a `RetryPolicy`.
    pub fn to_policy(&self) -> Result<RetryPolicy> {
        let initial = Duration::try_from_secs_f64(self.initial_delay_secs)
            .with_context(|| format!("invalid initial_delay_secs {}", self.initial_delay_secs))?;
        let policy = RetryPolicy::new(self.max_attempts, initial)?;
        match self.max_delay_secs {
            Some(secs) => Ok(policy.with_max_delay(Duration::from_secs(secs))?),
            None => Ok(policy),
        }
    }
}

/// Global configuration loaded from `~/.config/worthit/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorthitConfig {
    /// Optional tracing filter directive (e.g. "warn,worthit=debug"). `RUST_LOG` wins.
    #[serde(default)]
    pub log_filter: Option<String>,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl WorthitConfig {
    /// Configured retry policy, or the default one when the section is absent.
    pub fn retry_policy(&self) -> Result<RetryPolicy> {
        match &self.retry {
            Some(r) => r.to_policy().context("invalid [retry] section"),
            None => Ok(RetryPolicy::default()),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("worthit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Configuration plus where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: WorthitConfig,
    pub path: PathBuf,
    /// True when the file did not exist and defaults were written.
    pub created: bool,
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LoadedConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<LoadedConfig> {
    if !path.exists() {
        let default_cfg = WorthitConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)
            .with_context(|| format!("writing default config {}", path.display()))?;
        return Ok(LoadedConfig {
            config: default_cfg,
            path: path.to_path_buf(),
            created: true,
        });
    }

    Ok(LoadedConfig {
        config: load_from(path)?,
        path: path.to_path_buf(),
        created: false,
    })
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<WorthitConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: WorthitConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}
