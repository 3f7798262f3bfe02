mod grid_config;
mod clock;
mod interaction;
mod controller;

pub use grid_config::{GridConfig, MIN_DENSITY, MAX_DENSITY};
pub use clock::{
    ClockTicks, DEFAULT_REFRESH_INTERVAL, PeriodicTrigger, STEP_FREQUENCY_RANGE, SimulationClock,
};
pub use interaction::{InteractionController, PointerButton, Edit};
pub use controller::{SimulationController, SimulationEvent, RunState};
