mod button;
mod slider;

pub use button::Button;
pub use slider::Slider;

// UI constants - functions for responsive layout
use macroquad::prelude::{screen_height, screen_width};

use crate::application::{MAX_DENSITY, MIN_DENSITY, STEP_FREQUENCY_RANGE, SimulationEvent};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
const MARGIN: f32 = 12.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Something the user asked for through the panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlAction {
    ToggleRun,
    SetStepFrequency(u32),
    SetDensity(u32),
}

/// Play/pause button, speed and density sliders and the labels they feed.
/// Listens to simulation notifications to keep captions current.
pub struct ControlPanel {
    pub play: Button,
    pub speed: Slider,
    pub density: Slider,
    cell_count: usize,
    running: bool,
}

impl ControlPanel {
    pub fn new(x: f32, step_frequency_hz: u32, density: u32, running: bool) -> Self {
        let width = PANEL_WIDTH - 2.0 * MARGIN;
        let mut panel = Self {
            play: Button::new(x + MARGIN, 20.0, width, BUTTON_HEIGHT, "Play"),
            speed: Slider::new(
                x + MARGIN,
                120.0,
                width,
                *STEP_FREQUENCY_RANGE.start(),
                *STEP_FREQUENCY_RANGE.end(),
                step_frequency_hz,
                "",
            ),
            density: Slider::new(x + MARGIN, 180.0, width, MIN_DENSITY, MAX_DENSITY, density, ""),
            cell_count: 0,
            running,
        };
        panel.refresh_labels();
        panel
    }

    /// Follow the panel when the window is resized
    pub fn set_x(&mut self, x: f32) {
        self.play.set_position(x + MARGIN, 20.0);
        self.speed.set_position(x + MARGIN, 120.0);
        self.density.set_position(x + MARGIN, 180.0);
    }

    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    pub fn running(&self) -> bool {
        self.running
    }

    /// Observer side of the notification contract
    pub fn apply(&mut self, event: SimulationEvent) {
        match event {
            SimulationEvent::LiveCellCountChanged(count) => self.cell_count = count,
            SimulationEvent::RunningStateChanged(running) => self.running = running,
        }
        self.refresh_labels();
    }

    /// Sync a slider moved by something other than the mouse (keyboard)
    pub fn show_step_frequency(&mut self, hz: u32) {
        self.speed.set_value(hz);
        self.refresh_labels();
    }

    /// Does the point belong to a control rather than the grid?
    pub fn captures(&self, point: (f32, f32)) -> bool {
        self.play.contains(point)
            || self.speed.contains(point)
            || self.density.contains(point)
            || self.speed.is_dragging()
            || self.density.is_dragging()
    }

    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Vec<ControlAction> {
        let mut actions = Vec::new();
        if self.play.is_clicked(mouse_pos) {
            actions.push(ControlAction::ToggleRun);
        }
        if let Some(hz) = self.speed.update(mouse_pos) {
            actions.push(ControlAction::SetStepFrequency(hz));
        }
        if let Some(density) = self.density.update(mouse_pos) {
            actions.push(ControlAction::SetDensity(density));
        }
        self.refresh_labels();
        actions
    }

    fn refresh_labels(&mut self) {
        self.play.set_label(if self.running { "Pause" } else { "Play" });
        self.speed.set_label(format!("Update Speed: {}hz", self.speed.value()));
        self.density.set_label(format!("Square Density: {}", self.density.value()));
    }
}
