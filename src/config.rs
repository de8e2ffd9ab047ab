use crate::games::{builtin_games, GameDefinition};
use crate::lock::LockPolicy;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub lock: LockPolicy,
    /// Extra games, or replacements for built-in games of the same name.
    #[serde(default)]
    pub games: Vec<GameDefinition>,
}

impl Config {
    /// Loads `config.toml` from the working directory.
    pub fn new() -> Result<Self> {
        Self::from_path(CONFIG_FILE)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("invalid configuration in {}", path.display()))?;
        info!(
            "Config: cutoff {}s, require_prices {}, {} configured game(s)",
            config.lock.cutoff_seconds,
            config.lock.require_prices,
            config.games.len()
        );
        Ok(config)
    }

    /// Reads the file when it exists, otherwise falls back to the built-in defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_path(path)
        } else {
            info!("No {} found, using built-in games", path.display());
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.lock.cutoff_seconds.is_finite() && self.lock.cutoff_seconds >= 0.0,
            "lock.cutoff_seconds must be a non-negative number"
        );
        for game in &self.games {
            game.validate()?;
        }
        Ok(())
    }

    /// Built-in games with configured games layered on top, matched by name.
    pub fn games(&self) -> Vec<GameDefinition> {
        let mut games = builtin_games();
        for configured in &self.games {
            match games.iter_mut().find(|g| g.name == configured.name) {
                Some(existing) => *existing = configured.clone(),
                None => games.push(configured.clone()),
            }
        }
        games
    }

    pub fn game(&self, name: &str) -> Option<GameDefinition> {
        self.games().into_iter().find(|g| g.name == name)
    }
}
