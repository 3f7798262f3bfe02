use macroquad::prelude::*;

const TRACK_HEIGHT: f32 = 6.0;
const KNOB_RADIUS: f32 = 8.0;

/// Horizontal integer slider. Drag or click the track to change the value.
#[derive(Clone)]
pub struct Slider {
    x: f32,
    y: f32,
    width: f32,
    min: u32,
    max: u32,
    value: u32,
    label: String,
    dragging: bool,
}

impl Slider {
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        min: u32,
        max: u32,
        value: u32,
        label: impl Into<String>,
    ) -> Self {
        Self {
            x,
            y,
            width,
            min,
            max: max.max(min),
            value: value.clamp(min, max.max(min)),
            label: label.into(),
            dragging: false,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn set_value(&mut self, value: u32) {
        self.value = value.clamp(self.min, self.max);
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Is the point over the track (with knob-sized slack)?
    pub fn contains(&self, point: (f32, f32)) -> bool {
        point.0 >= self.x - KNOB_RADIUS
            && point.0 <= self.x + self.width + KNOB_RADIUS
            && (point.1 - self.y).abs() <= KNOB_RADIUS
    }

    /// Value under horizontal position `x`, rounded to the nearest step
    pub fn value_at(&self, x: f32) -> u32 {
        let t = ((x - self.x) / self.width).clamp(0.0, 1.0);
        let span = (self.max - self.min) as f32;
        self.min + (t * span).round() as u32
    }

    fn knob_x(&self) -> f32 {
        let span = (self.max - self.min).max(1) as f32;
        self.x + self.width * (self.value - self.min) as f32 / span
    }

    /// Drag the slider with `pressed` / `down` button state.
    /// Returns the new value when it changed.
    pub fn drag(&mut self, mouse_pos: (f32, f32), pressed: bool, down: bool) -> Option<u32> {
        if pressed && self.contains(mouse_pos) {
            self.dragging = true;
        }
        if !down {
            self.dragging = false;
        }
        if !self.dragging {
            return None;
        }

        let value = self.value_at(mouse_pos.0);
        (value != self.value).then(|| {
            self.value = value;
            value
        })
    }

    /// Poll macroquad's left button and drag
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<u32> {
        self.drag(
            mouse_pos,
            is_mouse_button_pressed(MouseButton::Left),
            is_mouse_button_down(MouseButton::Left),
        )
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn draw(&self) {
        draw_text(&self.label, self.x, self.y - 14.0, 16.0, LIGHTGRAY);
        draw_rectangle(
            self.x,
            self.y - TRACK_HEIGHT / 2.0,
            self.width,
            TRACK_HEIGHT,
            Color::from_rgba(80, 80, 80, 255),
        );
        let color = if self.dragging {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        draw_circle(self.knob_x(), self.y, KNOB_RADIUS, color);
    }
}
