use std::time::Duration;

use rand::Rng;

use crate::config::SimulationConfig;
use crate::domain::{Algorithm, AutomatonEngine, CellSet};
use crate::error::Result;
use crate::rendering::{GpuSink, RenderBufferSync, build_cell_quads, build_grid_lines};

use super::{ClockTicks, Edit, GridConfig, InteractionController, PointerButton, SimulationClock};

/// Notifications for the presentation layer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationEvent {
    /// Emitted after every generation and after bulk edits
    LiveCellCountChanged(usize),
    /// Emitted on every toggle with the new state
    RunningStateChanged(bool),
}

/// Paused (initial) or Running; `toggle` is the only transition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Paused,
    Running,
}

impl RunState {
    pub fn toggled(self) -> Self {
        match self {
            RunState::Paused => RunState::Running,
            RunState::Running => RunState::Paused,
        }
    }

    pub fn is_running(self) -> bool {
        self == RunState::Running
    }
}

/// SimulationController orchestrates the simulation.
///
/// It owns the live cells, the stepping engine, the grid configuration, both
/// clocks and the render buffers. Everything runs on the thread that owns the
/// graphics context; a generation replaces `cells` in a single assignment, so
/// a refresh never sees a mix of two generations.
pub struct SimulationController<S> {
    cells: CellSet,
    engine: AutomatonEngine,
    grid: GridConfig,
    run_state: RunState,
    clock: SimulationClock,
    interaction: InteractionController,
    renderer: RenderBufferSync<S>,
    generation: u64,
    live_count: usize,
    events: Vec<SimulationEvent>,
}

impl<S: GpuSink> SimulationController<S> {
    /// Build the controller and upload the initial grid and (empty) cell geometry
    pub fn new(config: &SimulationConfig, width: f32, height: f32, sink: S) -> Result<Self> {
        let run_state = if config.start_running { RunState::Running } else { RunState::Paused };
        let mut controller = Self {
            cells: CellSet::new(),
            engine: AutomatonEngine::new(config.birth_window, config.algorithm),
            grid: GridConfig::new(config.density, width, height),
            run_state,
            clock: SimulationClock::new(
                config.step_frequency_hz,
                Duration::from_millis(config.refresh_interval_ms),
            ),
            interaction: InteractionController::new(),
            renderer: RenderBufferSync::new(sink)?,
            generation: 0,
            live_count: 0,
            events: Vec::new(),
        };
        controller.renderer.set_viewport(controller.grid.width(), controller.grid.height());
        controller.refresh()?;
        log::info!(
            "Simulation ready: {}x{} viewport, density {}, {} Hz, {}",
            width,
            height,
            controller.grid.density(),
            controller.clock.step_frequency(),
            if run_state.is_running() { "running" } else { "paused" },
        );
        Ok(controller)
    }

    /// Flip between running and paused and notify
    pub fn toggle_run(&mut self) -> bool {
        self.run_state = self.run_state.toggled();
        let running = self.run_state.is_running();
        log::info!("Simulation {}", if running { "running" } else { "paused" });
        self.events.push(SimulationEvent::RunningStateChanged(running));
        running
    }

    /// Reprogram the step trigger; returns the applied (clamped) frequency
    pub fn set_step_frequency(&mut self, hz: u32) -> u32 {
        let applied = self.clock.set_step_frequency(hz);
        if applied != hz {
            log::warn!("Step frequency {hz} Hz out of range, using {applied} Hz");
        }
        log::debug!("Step interval now {:?}", self.clock.step_interval());
        applied
    }

    /// Change grid density and rebuild the grid geometry right away
    pub fn set_density(&mut self, density: u32) -> Result<u32> {
        let applied = self.grid.set_density(density);
        if applied != density {
            log::warn!("Density {density} out of range, using {applied}");
        }
        self.upload_grid()?;
        log::debug!("Density {applied}, cell size {:.2}", self.grid.cell_size());
        Ok(applied)
    }

    /// Paint or erase under the pointer
    pub fn pointer_drag(&mut self, x: f32, y: f32, button: PointerButton) -> Option<Edit> {
        let edit = self
            .interaction
            .pointer_drag(&mut self.cells, &self.grid, x, y, button);
        if let Some(edit) = edit {
            log::trace!("{edit:?}");
        }
        edit
    }

    /// New viewport size for later geometry builds; stored cells are not rescaled
    pub fn resize(&mut self, width: f32, height: f32) {
        self.grid.resize(width, height);
        self.renderer.set_viewport(self.grid.width(), self.grid.height());
        log::debug!("Viewport resized to {}x{}", self.grid.width(), self.grid.height());
    }

    /// Feed elapsed time to both triggers and run whatever fired
    pub fn advance(&mut self, dt: Duration) -> Result<ClockTicks> {
        let ticks = self.clock.advance(dt);
        if ticks.step && self.run_state.is_running() {
            self.step();
        }
        if ticks.refresh {
            self.refresh()?;
        }
        Ok(ticks)
    }

    /// Compute one generation and swap it in
    pub fn step(&mut self) -> usize {
        let next = self.engine.step(&self.cells);
        self.generation += 1;
        log::debug!(
            "Generation {}: {} live (+{} -{})",
            self.generation,
            next.live_count,
            next.births,
            next.deaths
        );
        self.cells = next.cells;
        self.set_live_count(next.live_count);
        self.live_count
    }

    /// Rebuild and upload both buffers from the current state
    pub fn refresh(&mut self) -> Result<()> {
        self.upload_grid()?;
        let quads = build_cell_quads(&self.cells, self.grid.cell_size());
        self.renderer.upload_cells(&quads)?;
        log::trace!("Refreshed {} cell vertices", self.renderer.cell_vertex_count());
        Ok(())
    }

    pub fn draw(&mut self) -> Result<()> {
        self.renderer.draw()
    }

    /// Kill every cell and restart the generation count
    pub fn clear(&mut self) {
        self.cells.clear();
        self.generation = 0;
        self.set_live_count(0);
        log::info!("Cleared all cells");
    }

    /// Fill the birth window with random cells
    pub fn randomize<R: Rng + ?Sized>(&mut self, fill: f64, rng: &mut R) {
        self.cells.randomize(self.engine.window(), fill, rng);
        self.generation = 0;
        self.set_live_count(self.cells.len());
        log::info!("Randomized: {} live cells", self.live_count);
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.engine.set_algorithm(algorithm);
        log::info!("Stepping with {}", algorithm.name());
    }

    /// Take every notification emitted since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<SimulationEvent> {
        std::mem::take(&mut self.events)
    }

    fn set_live_count(&mut self, count: usize) {
        self.live_count = count;
        self.events.push(SimulationEvent::LiveCellCountChanged(count));
    }

    fn upload_grid(&mut self) -> Result<()> {
        let lines = build_grid_lines(
            self.grid.density(),
            self.grid.cell_size(),
            self.grid.width(),
            self.grid.height(),
        );
        self.renderer.upload_grid(&lines)
    }

    pub fn cells(&self) -> &CellSet {
        &self.cells
    }

    /// Direct access for seeding; changes show up on the next refresh
    pub fn cells_mut(&mut self) -> &mut CellSet {
        &mut self.cells
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state.is_running()
    }

    pub fn step_frequency(&self) -> u32 {
        self.clock.step_frequency()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.engine.algorithm()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Live cells as of the last step or bulk edit
    pub fn live_count(&self) -> usize {
        self.live_count
    }

    pub fn renderer(&self) -> &RenderBufferSync<S> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut RenderBufferSync<S> {
        &mut self.renderer
    }
}
