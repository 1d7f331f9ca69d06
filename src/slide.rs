use raylib::ease::{self, Tween};
use raylib::prelude::*;
use crate::constants::*;
use crate::controller::Activatable;

pub struct Slide {
    image: Texture2D,

    active: bool,
    opacity: f32,
    tween_fade_in: Tween,
}

impl Slide {
    pub fn new(image: Texture2D) -> Self {
        Self {
            image,
            active: false,
            opacity: 0.0,
            tween_fade_in: Tween::new(ease::cubic_out, 0.0, 1.0, FADE_DURATION),
        }
    }

    pub fn update(&mut self, dt: f32) {
        if self.active && !self.tween_fade_in.has_completed() {
            self.opacity = self.tween_fade_in.apply(dt);
        }
    }

    /// Draws the slide fitted and centred inside `area`. Inactive slides are skipped.
    pub fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle) {
        if !self.active {
            return;
        }

        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;
        let scale = fit_scale(tex_width, tex_height, area.width, area.height);

        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;
        let dest = Rectangle::new(
            area.x + (area.width - scaled_width) * 0.5,
            area.y + (area.height - scaled_height) * 0.5,
            scaled_width,
            scaled_height,
        );

        let alpha = (self.opacity.clamp(0.0, 1.0) * 255.0) as u8;
        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::new(255, 255, 255, alpha),
        );
    }
}

impl Activatable for Slide {
    fn set_active(&mut self, active: bool) {
        // Restart the fade whenever the slide becomes visible again
        if active && !self.active {
            self.tween_fade_in.reset();
            self.opacity = 0.0;
        }
        self.active = active;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// Largest scale at which a `width`×`height` image fits inside the area.
pub fn fit_scale(width: f32, height: f32, area_width: f32, area_height: f32) -> f32 {
    if width <= 0.0 || height <= 0.0 {
        return 1.0;
    }
    (area_width / width).min(area_height / height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landscape_image_is_bound_by_width() {
        assert_eq!(fit_scale(2000.0, 1000.0, 1000.0, 800.0), 0.5);
    }

    #[test]
    fn portrait_image_is_bound_by_height() {
        assert_eq!(fit_scale(600.0, 1200.0, 1000.0, 600.0), 0.5);
    }

    #[test]
    fn small_image_is_scaled_up() {
        assert_eq!(fit_scale(100.0, 100.0, 400.0, 300.0), 3.0);
    }

    #[test]
    fn degenerate_image_keeps_native_scale() {
        assert_eq!(fit_scale(0.0, 100.0, 400.0, 300.0), 1.0);
    }
}
