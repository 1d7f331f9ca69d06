use std::process;
use std::time::Duration;
use anyhow::{Context, Result};
use clap::Parser;
use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod autoplay;
mod cli;
mod constants;
mod controller;
mod index;
mod input;
mod layout;
mod slide;
mod state;
mod texture_loader;

use crate::cli::Args;
use crate::constants::*;
use crate::controller::{Activatable, SlideController};
use crate::input::PointerTracker;
use crate::layout::Layout;
use crate::slide::Slide;
use crate::state::PlaybackState;
use crate::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};

const BACKGROUND: Color = Color::new(18, 18, 18, 255);
const ACCENT: Color = Color::new(255, 107, 53, 255);
const MUTED: Color = Color::new(90, 90, 90, 255);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        error!("{e:#}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let mut image_paths = load_sorted_image_paths(&args.image_dir)?;
    if args.shuffle {
        image_paths.shuffle(&mut rand::rng());
    }
    info!(dir = %args.image_dir.display(), images = image_paths.len(), "found slide images");

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Transformations")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let mut slides = Vec::new();
    for path in &image_paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, path) {
            Ok(texture) => slides.push(Slide::new(texture)),
            Err(e) => warn!("skipping {}: {e:#}", path.display()),
        }
    }

    let mut controller = SlideController::new(slides, args.interval(), !args.no_controls)
        .context("no slides could be loaded")?;
    info!(
        slides = controller.len(),
        interval_ms = args.interval_ms,
        state = ?controller.playback_state(),
        "carousel ready"
    );

    let mut pointer = PointerTracker::new();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let layout = Layout::compute(
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
            controller.len(),
            controller.has_controls(),
        );

        // 1. Pointer -> slider events
        let mouse = rl.get_mouse_position();
        let clicked = if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            layout.control_at(mouse)
        } else {
            None
        };
        // Off-window cursors keep their last position, so gate on the window
        let inside = layout.pointer_inside(rl.is_cursor_on_screen(), mouse);
        for event in pointer.sample(inside, clicked) {
            controller.handle(event);
        }

        // 2. Auto-advance
        controller.tick(Duration::from_secs_f32(dt.max(0.0)));

        // 3. Slide fades
        for slide in controller.slides_mut() {
            slide.update(dt);
        }

        // --- Draw ---
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(BACKGROUND);
        draw_carousel(&mut d, &controller, &layout);
    }

    info!("window closed");
    Ok(())
}

fn draw_carousel(d: &mut RaylibDrawHandle, controller: &SlideController<Slide>, layout: &Layout) {
    d.draw_rectangle_rec(layout.slider, Color::BLACK);
    for slide in controller.slides() {
        slide.draw(d, layout.slider);
    }
    if controller.is_hovered() {
        d.draw_rectangle_lines_ex(layout.slider, 2.0, ACCENT);
    }

    let counter = format!("{} / {}", controller.cursor() + 1, controller.len());
    d.draw_text(&counter, layout.slider.x as i32 + 12, layout.slider.y as i32 + 12, 18, Color::LIGHTGRAY);

    if !controller.has_controls() {
        return;
    }

    for (centre, label) in [(layout.prev_button, "<"), (layout.next_button, ">")] {
        d.draw_circle_v(centre, BUTTON_RADIUS, ACCENT);
        d.draw_text(label, centre.x as i32 - 6, centre.y as i32 - 10, 20, Color::WHITE);
    }

    for (centre, dot) in layout.dots.iter().zip(controller.dots()) {
        let color = if dot.is_active() { ACCENT } else { MUTED };
        d.draw_circle_v(*centre, layout.dot_radius(), color);
    }

    // Thin bar along the slider bottom showing time to the next advance
    if let Some(progress) = controller.autoplay_progress() {
        let bar = Rectangle::new(
            layout.slider.x,
            layout.slider.y + layout.slider.height - 3.0,
            layout.slider.width * progress,
            3.0,
        );
        d.draw_rectangle_rec(bar, ACCENT);
    }

    if controller.playback_state() == PlaybackState::Paused {
        let x = (layout.slider.x + layout.slider.width) as i32 - 80;
        d.draw_text("paused", x, layout.slider.y as i32 + 12, 18, Color::LIGHTGRAY);
    }
}
