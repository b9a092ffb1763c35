mod basic;

pub use basic::BasicConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::AcronymsError;

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Core server configuration (see `basic` table in config.toml).
    #[serde(default)]
    pub basic: BasicConfig,
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "ACRONYMS_";

impl Config {
    /// Builds a Figment that merges defaults, an optional config TOML file and
    /// `ACRONYMS_`-prefixed environment variables (nested keys split on `__`).
    pub fn figment() -> Figment {
        let figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let figment = if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() {
            figment.merge(Toml::file(DEFAULT_CONFIG_FILE))
        } else {
            figment
        };
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Loads configuration and validates required fields.
    ///
    /// The shared secret has no default; a deployment that forgets to set
    /// `basic.auth_secret` fails here instead of running with a guessable one.
    pub fn load() -> Result<Self, AcronymsError> {
        Self::from_figment(&Self::figment())
    }

    pub fn from_figment(figment: &Figment) -> Result<Self, AcronymsError> {
        let cfg: Self = figment
            .extract()
            .map_err(|err| AcronymsError::Config(err.to_string()))?;
        if cfg.basic.auth_secret.trim().is_empty() {
            return Err(AcronymsError::Config(
                "basic.auth_secret must be set and non-empty".to_string(),
            ));
        }
        Ok(cfg)
    }
}
