use raylib::prelude::*;
use crate::constants::*;

/// Clickable parts of the slider.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Control {
    Previous,
    Next,
    Dot(usize),
}

/// Screen geometry of the slider for one window size and slide count.
#[derive(Debug, Clone)]
pub struct Layout {
    pub slider: Rectangle,
    pub prev_button: Vector2,
    pub next_button: Vector2,
    pub dots: Vec<Vector2>,
    dot_spacing: f32,
    has_controls: bool,
}

impl Layout {
    pub fn compute(screen_width: f32, screen_height: f32, slide_count: usize, has_controls: bool) -> Self {
        let width = screen_width * SLIDER_WIDTH_RATIO;
        let height = screen_height * SLIDER_HEIGHT_RATIO;
        let slider = Rectangle::new(
            (screen_width - width) * 0.5,
            (screen_height - height) * 0.5 - DOT_MARGIN * 0.5,
            width,
            height,
        );

        let mid_y = slider.y + slider.height * 0.5;
        let prev_button = Vector2::new(slider.x, mid_y);
        let next_button = Vector2::new(slider.x + slider.width, mid_y);

        // Centre the dot row under the slider, squeezing it to the slider width
        let dot_spacing = DOT_SPACING.min(slider.width / slide_count.max(1) as f32);
        let row_width = dot_spacing * slide_count.saturating_sub(1) as f32;
        let first_x = screen_width * 0.5 - row_width * 0.5;
        let dots_y = slider.y + slider.height + DOT_MARGIN;
        let dots = (0..slide_count)
            .map(|i| Vector2::new(first_x + dot_spacing * i as f32, dots_y))
            .collect();

        Self { slider, prev_button, next_button, dots, dot_spacing, has_controls }
    }

    /// Drawn dot radius, shrunk when the row is squeezed.
    pub fn dot_radius(&self) -> f32 {
        DOT_RADIUS.min(self.dot_spacing * 0.4)
    }

    /// Pointer counts as over the slider only while it is inside the window.
    pub fn pointer_inside(&self, on_screen: bool, point: Vector2) -> bool {
        on_screen && self.contains_slider(point)
    }

    /// Hover region: the slider itself plus its buttons and dot row.
    pub fn contains_slider(&self, point: Vector2) -> bool {
        if self.slider.check_collision_point_rec(point) {
            return true;
        }
        self.control_at(point).is_some()
    }

    pub fn control_at(&self, point: Vector2) -> Option<Control> {
        if !self.has_controls {
            return None;
        }
        if within(point, self.prev_button, BUTTON_RADIUS) {
            return Some(Control::Previous);
        }
        if within(point, self.next_button, BUTTON_RADIUS) {
            return Some(Control::Next);
        }
        // Half the spacing keeps neighbouring hit areas disjoint
        let reach = (self.dot_spacing * 0.5).min(DOT_RADIUS * 2.0);
        self.dots
            .iter()
            .position(|&centre| within(point, centre, reach))
            .map(Control::Dot)
    }
}

fn within(point: Vector2, centre: Vector2, radius: f32) -> bool {
    let dx = point.x - centre.x;
    let dy = point.y - centre.y;
    dx * dx + dy * dy <= radius * radius
}
