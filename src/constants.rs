use std::time::Duration;

pub const DEFAULT_WIDTH: i32 = 1280;              // Initial window width
pub const DEFAULT_HEIGHT: i32 = 720;              // Initial window height
pub const DEFAULT_FPS: u32 = 60;                  // Frames per second

pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(6000); // Time between auto-advances
pub const FADE_DURATION: f32 = 0.6;               // Fade-in of the newly active slide (seconds)

pub const SLIDER_WIDTH_RATIO: f32 = 0.8;          // Slider width relative to the window
pub const SLIDER_HEIGHT_RATIO: f32 = 0.7;         // Slider height relative to the window
pub const BUTTON_RADIUS: f32 = 24.0;              // Prev/next button radius (pixels)
pub const DOT_RADIUS: f32 = 6.0;                  // Indicator dot radius (pixels)
pub const DOT_SPACING: f32 = 24.0;                // Distance between dot centres (pixels)
pub const DOT_MARGIN: f32 = 28.0;                 // Gap between slider bottom and dot row (pixels)
