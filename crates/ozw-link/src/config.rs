//! Driver configuration
//!
//! Configuration is an immutable struct with named fields. Callers that
//! only want to change a few settings build a [`DriverConfigOverrides`] and
//! merge it over the defaults; the merge returns a new struct, so there is
//! no shared mutable defaults object anywhere.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// How many times the engine is started before a connect attempt gives up
pub const DEFAULT_DRIVER_ATTEMPTS: u32 = 3;

/// Configuration handed to the protocol engine on start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Directory holding the engine's device database and manufacturer files
    pub config_dir: PathBuf,
    /// Let the engine log to the console
    pub console_output: bool,
    /// Enable the engine's own log file
    pub logging: bool,
    /// Persist the network topology to disk on shutdown
    pub save_config: bool,
    /// Engine start attempts before a connect fails
    pub driver_attempts: u32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            config_dir: PathBuf::from("./config"),
            console_output: false,
            logging: false,
            save_config: false,
            driver_attempts: DEFAULT_DRIVER_ATTEMPTS,
        }
    }
}

/// Partial configuration: every field optional
///
/// Unset fields fall back to the base config during [`merged`].
///
/// [`merged`]: DriverConfigOverrides::merged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverConfigOverrides {
    pub config_dir: Option<PathBuf>,
    pub console_output: Option<bool>,
    pub logging: Option<bool>,
    pub save_config: Option<bool>,
    pub driver_attempts: Option<u32>,
}

impl DriverConfigOverrides {
    /// Merge these overrides over a base config, returning a new config
    pub fn merged(self, base: DriverConfig) -> DriverConfig {
        DriverConfig {
            config_dir: self.config_dir.unwrap_or(base.config_dir),
            console_output: self.console_output.unwrap_or(base.console_output),
            logging: self.logging.unwrap_or(base.logging),
            save_config: self.save_config.unwrap_or(base.save_config),
            driver_attempts: self.driver_attempts.unwrap_or(base.driver_attempts),
        }
    }
}
