use anyhow::{Context, Result};
use poker_ledger_core::DEFAULT_BUY_IN_AMOUNT_IN_CENTS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Front-end configuration persisted as TOML.
///
/// Fields:
/// - data_dir: directory holding `players.json` and `buyInAmountInCents.json`
/// - default_buy_in_in_cents: buy-in amount used until one is saved
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub data_dir: PathBuf,
    pub default_buy_in_in_cents: i64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from(".poker-ledger"),
            default_buy_in_in_cents: DEFAULT_BUY_IN_AMOUNT_IN_CENTS,
        }
    }
}

impl Config {
    /// Read the config at `path`, writing the defaults there first if the
    /// file does not exist yet
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if !path.exists() {
            let cfg = Config::default();
            cfg.save(path)?;
            tracing::info!(config = %path.display(), "wrote default config");
            return Ok(cfg);
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read config {}", path.display()))?;
        let cfg: Config = toml::from_str(&text)
            .with_context(|| format!("invalid TOML in config {}", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Write the config to `path`, creating its directory if needed
    pub fn save(&self, path: &Path) -> Result<()> {
        match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
                .with_context(|| format!("cannot create config directory {}", dir.display()))?,
            _ => {}
        }
        let text = toml::to_string_pretty(self).context("serializing config to TOML")?;
        fs::write(path, text).with_context(|| format!("cannot write config {}", path.display()))
    }

    fn validate(&self) -> Result<()> {
        if self.default_buy_in_in_cents < 0 {
            anyhow::bail!(
                "default_buy_in_in_cents must not be negative (got {})",
                self.default_buy_in_in_cents
            );
        }
        Ok(())
    }
}
