use macroquad::prelude::*;
use ::rand::Rng;

use crate::application::{PointerButton, SimulationController};
use crate::error::Result;
use crate::rendering::GpuSink;
use crate::ui::{ControlAction, ControlPanel, grid_area_width};

/// Current pointer button state. Left wins when both are held.
pub fn pointer_button() -> PointerButton {
    if is_mouse_button_down(MouseButton::Left) {
        PointerButton::Primary
    } else if is_mouse_button_down(MouseButton::Right) {
        PointerButton::Secondary
    } else {
        PointerButton::None
    }
}

/// Paint or erase under the mouse while it is over the grid
pub fn handle_mouse_paint<S: GpuSink>(
    controller: &mut SimulationController<S>,
    panel: &ControlPanel,
    mouse_pos: (f32, f32),
) {
    let button = if mouse_pos.0 >= grid_area_width() || panel.captures(mouse_pos) {
        PointerButton::None
    } else {
        pointer_button()
    };
    controller.pointer_drag(mouse_pos.0, mouse_pos.1, button);
}

/// Forward panel actions to the controller
pub fn process_control_actions<S: GpuSink>(
    controller: &mut SimulationController<S>,
    actions: &[ControlAction],
) -> Result<()> {
    for action in actions {
        match *action {
            ControlAction::ToggleRun => {
                controller.toggle_run();
            }
            ControlAction::SetStepFrequency(hz) => {
                controller.set_step_frequency(hz);
            }
            ControlAction::SetDensity(density) => {
                controller.set_density(density)?;
            }
        }
    }
    Ok(())
}

/// Keyboard shortcuts
pub fn process_keyboard_input<S: GpuSink, R: Rng + ?Sized>(
    controller: &mut SimulationController<S>,
    panel: &mut ControlPanel,
    random_fill: f64,
    rng: &mut R,
) {
    if is_key_pressed(KeyCode::Space) {
        controller.toggle_run();
    }
    if is_key_pressed(KeyCode::C) {
        controller.clear();
    }
    if is_key_pressed(KeyCode::R) {
        controller.randomize(random_fill, rng);
    }
    if is_key_pressed(KeyCode::P) {
        controller.set_algorithm(controller.algorithm().toggled());
    }

    let speed_delta: i32 = match (is_key_pressed(KeyCode::Up), is_key_pressed(KeyCode::Down)) {
        (true, false) => 1,
        (false, true) => -1,
        _ => 0,
    };
    if speed_delta != 0 {
        let hz = controller.step_frequency().saturating_add_signed(speed_delta);
        let applied = controller.set_step_frequency(hz);
        panel.show_step_frequency(applied);
    }
}
