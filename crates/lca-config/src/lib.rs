//! # lca-config
//!
//! Layered configuration loading for the LCA engine using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LCA_*` prefix, `__` as separator)
//! 2. Project-level `.lca/config.toml`
//! 3. User-level `~/.config/lca/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LCA_DATABASE__PATH` -> `database.path`,
//! `LCA_FACTORS__TRANSPORT__RAIL` -> `factors.transport.rail`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use lca_config::LcaConfig;
//!
//! let config = LcaConfig::load_with_dotenv().expect("config");
//! println!("database: {}", config.database.path);
//! ```

mod database;
mod error;
mod estimation;
mod general;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use estimation::EstimationConfig;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use lca_core::errors::CoreError;
use lca_core::factors::FactorTables;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LcaConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub estimation: EstimationConfig,
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub factors: FactorTables,
}

impl LcaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or the factor tables are invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or the factor tables are invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".lca/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("LCA_").split("__"))
    }

    /// Reject factor tables that would produce nonsense estimates.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending table entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.factors.validate().map_err(|error| match error {
            CoreError::Validation(reason) | CoreError::InvalidIdentifier(reason) => {
                ConfigError::InvalidValue {
                    field: "factors".into(),
                    reason,
                }
            }
        })
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lca").join("config.toml"))
    }
}
