use std::time::Duration;

use macroquad::prelude::*;
use sparse_life::{
    AppConfig, SimulationController,
    rendering::{self, MacroquadSink},
    ui::{self, ControlPanel},
    input,
};

fn window_conf() -> Conf {
    let window = AppConfig::load().map(|c| c.window).unwrap_or_default();
    Conf {
        window_title: window.title,
        window_width: window.width as i32,
        window_height: window.height as i32,
        window_resizable: window.resizable,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    let log_env = env_logger::Env::default().default_filter_or(&config.debug.log_level);
    env_logger::Builder::from_env(log_env).init();
    log::info!("Starting Conway's Game of Life");
    if let Some(e) = load_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    if let Err(e) = run(config).await {
        log::error!("Fatal: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> sparse_life::Result<()> {
    let (width, height) = (ui::grid_area_width(), ui::grid_area_height());
    let mut controller = SimulationController::new(
        &config.simulation,
        width,
        height,
        MacroquadSink::new(height),
    )?;
    let mut panel = ControlPanel::new(
        ui::panel_x(),
        controller.step_frequency(),
        controller.grid().density(),
        controller.is_running(),
    );
    let mut rng = ::rand::rng();

    loop {
        let mouse_pos = mouse_position();

        // Track window resizes
        let (width, height) = (ui::grid_area_width(), ui::grid_area_height());
        if (width, height) != (controller.grid().width(), controller.grid().height()) {
            controller.resize(width, height);
            panel.set_x(ui::panel_x());
        }

        let actions = panel.update(mouse_pos);
        input::process_control_actions(&mut controller, &actions)?;
        let fill = config.simulation.random_fill;
        input::process_keyboard_input(&mut controller, &mut panel, fill, &mut rng);
        input::handle_mouse_paint(&mut controller, &panel, mouse_pos);

        controller.advance(Duration::from_secs_f32(get_frame_time()))?;
        for event in controller.drain_events() {
            panel.apply(event);
        }

        clear_background(WHITE);
        controller.draw()?;
        let (generation, algorithm) = (controller.generation(), controller.algorithm());
        rendering::draw_controls(&panel, generation, algorithm, mouse_pos);

        next_frame().await;
    }
}
