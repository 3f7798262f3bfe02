use macroquad::prelude::*;

/// Button UI component with hover and click detection
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    label: String,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            label: label.into(),
            color: Color::from_rgba(70, 130, 180, 255),
            hover_color: Color::from_rgba(100, 149, 237, 255),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Change the caption, e.g. Play <-> Pause
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Check if a point lies on the button
    pub fn contains(&self, point: (f32, f32)) -> bool {
        point.0 >= self.x
            && point.0 <= self.x + self.width
            && point.1 >= self.y
            && point.1 <= self.y + self.height
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.contains(mouse_pos) { self.hover_color } else { self.color };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        let text_size = measure_text(&self.label, None, 20, 1.0);
        draw_text(
            &self.label,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.contains(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_edge_inclusive() {
        let button = Button::new(10.0, 10.0, 100.0, 40.0, "Play");
        assert!(button.contains((10.0, 10.0)));
        assert!(button.contains((110.0, 50.0)));
        assert!(!button.contains((111.0, 30.0)));
    }

    #[test]
    fn test_set_label() {
        let mut button = Button::new(0.0, 0.0, 10.0, 10.0, "Play");
        button.set_label("Pause");
        assert_eq!(button.label(), "Pause");
    }
}
