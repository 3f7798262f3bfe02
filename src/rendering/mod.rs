mod geometry;
mod buffers;
pub mod headless;
mod macroquad_sink;

pub use geometry::{
    COMPONENTS, EMPTY_PLACEHOLDER, FLOATS_PER_LINE, FLOATS_PER_QUAD, build_cell_quads,
    build_grid_lines,
};
pub use buffers::{
    ArrayHandle, BufferHandle, BufferUsage, GpuSink, Primitive, RenderBufferSync, VertexLayout,
};
pub use headless::{DrawCall, HeadlessSink};
pub use macroquad_sink::{MacroquadSink, CELL_COLOR, LINE_COLOR};

use macroquad::prelude::*;

use crate::domain::Algorithm;
use crate::ui::{ControlPanel, panel_x, PANEL_WIDTH};

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 10_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255)
    );
}

/// Draw the control panel: play button, sliders, counters and key help
pub fn draw_controls(
    panel: &ControlPanel,
    generation: u64,
    algorithm: Algorithm,
    mouse_pos: (f32, f32),
) {
    draw_panel_background();

    panel.play.draw(mouse_pos);
    panel.speed.draw();
    panel.density.draw();

    let px = panel_x() + 12.0;
    let labels = [
        (format!("Cells: {}", format_number(panel.cell_count())), 230.0, 18.0, WHITE),
        (format!("Generation: {}", generation), 252.0, 16.0, LIGHTGRAY),
        (
            if panel.running() { "Running".to_string() } else { "Paused".to_string() },
            274.0,
            16.0,
            if panel.running() {
                Color::from_rgba(0, 200, 0, 255)
            } else {
                Color::from_rgba(255, 165, 0, 255)
            },
        ),
        (format!("Stepping: {}", algorithm.name()), 296.0, 14.0, GRAY),
    ];
    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });

    let controls = [
        ("Controls:", 330.0, 14.0, WHITE),
        ("LMB drag: Paint", 345.0, 12.0, GRAY),
        ("RMB drag: Erase", 358.0, 12.0, GRAY),
        ("Space: Play/Pause", 371.0, 12.0, GRAY),
        ("Up/Down: Speed", 384.0, 12.0, GRAY),
        ("C: Clear  R: Random", 397.0, 12.0, GRAY),
        ("P: Toggle parallel", 410.0, 12.0, GRAY),
    ];
    controls.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(950), "950");
        assert_eq!(format_number(6561), "6561");
        assert_eq!(format_number(25_000), "25.0K");
        assert_eq!(format_number(2_500_000), "2.5M");
    }
}
