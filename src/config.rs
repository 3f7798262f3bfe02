//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`LIFE_SECTION__KEY`)

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::domain::{Algorithm, BirthWindow};
use crate::error::Result;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from the `config` directory and the environment
    pub fn load() -> Result<Self> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref();

        // Built-in defaults fill anything the files leave out
        let figment = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(config_dir.join("default.toml")))
            .merge(Toml::file(config_dir.join("user.toml")))
            // LIFE_SIMULATION__DENSITY=40 -> simulation.density = 40
            .merge(Env::prefixed("LIFE_").split("__"));

        Ok(figment.extract()?)
    }
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Conway's Game of Life".to_string(),
            width: 1000,
            height: 800,
            resizable: true,
        }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Generations per second while running (1-60)
    pub step_frequency_hz: u32,
    /// Grid divisions per axis (20-80)
    pub density: u32,
    /// Buffer refresh period in milliseconds
    pub refresh_interval_ms: u64,
    pub start_running: bool,
    pub algorithm: Algorithm,
    /// Probability a square is alive after randomizing
    pub random_fill: f64,
    /// Where new cells may be born
    pub birth_window: BirthWindow,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            step_frequency_hz: 30,
            density: 50,
            refresh_interval_ms: 10,
            start_running: false,
            algorithm: Algorithm::Sequential,
            random_fill: 0.3,
            birth_window: BirthWindow::default(),
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Default log filter (error, warn, info, debug, trace); `RUST_LOG` wins
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
