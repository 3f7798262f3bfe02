// Domain layer - Cells, rule and generation stepping
pub mod domain;

// Application layer - Clocks, pointer edits and orchestration
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

pub mod config;
pub mod error;

// Re-exports for convenience
pub use domain::{Cell, CellSet, AutomatonEngine, Algorithm, BirthWindow};
pub use application::{SimulationController, SimulationEvent, PointerButton, GridConfig};
pub use config::AppConfig;
pub use error::{Error, Result};
