use std::time::Duration;
use anyhow::{ensure, Result};
use tracing::{debug, trace};

use crate::autoplay::{AutoPlayTimer, TimerHandle};
use crate::index::{resolve_index, wrap_index};
use crate::input::SliderEvent;
use crate::state::PlaybackState;

/// Anything carrying the "active" marker the controller toggles.
pub trait Activatable {
    fn set_active(&mut self, active: bool);
    fn is_active(&self) -> bool;
}

/// Indicator mirroring one slide. Created by the controller, one per slide.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Dot {
    active: bool,
}

impl Activatable for Dot {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// Keeps exactly one of N slides active and drives the auto-advance timer.
pub struct SlideController<S: Activatable> {
    slides: Vec<S>,
    dots: Vec<Dot>,
    cursor: usize,
    timer: AutoPlayTimer,
    has_controls: bool,
    hovered: bool,
}

impl<S: Activatable> SlideController<S> {
    /// Builds the controller with the first slide active. When `has_controls`
    /// is set the first auto-advance is scheduled immediately; otherwise the
    /// controller never schedules one.
    pub fn new(slides: Vec<S>, interval: Duration, has_controls: bool) -> Result<Self> {
        ensure!(!slides.is_empty(), "a slide controller needs at least one slide");

        let dots = vec![Dot::default(); slides.len()];
        let mut controller = Self {
            slides,
            dots,
            cursor: 0,
            timer: AutoPlayTimer::new(interval),
            has_controls,
            hovered: false,
        };
        controller.apply_active();

        if has_controls {
            let handle = controller.timer.schedule();
            debug!(?handle, slides = controller.len(), "auto-advance started");
        } else {
            debug!(slides = controller.len(), "no navigation controls, auto-advance disabled");
        }

        Ok(controller)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[S] {
        &self.slides
    }

    pub fn slides_mut(&mut self) -> &mut [S] {
        &mut self.slides
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn has_controls(&self) -> bool {
        self.has_controls
    }

    pub fn pending_timer(&self) -> Option<TimerHandle> {
        self.timer.pending()
    }

    /// Fraction of the current auto-advance interval already elapsed.
    pub fn autoplay_progress(&self) -> Option<f32> {
        let interval = self.timer.interval().as_secs_f32();
        let remaining = self.timer.remaining()?.as_secs_f32();
        if interval <= 0.0 {
            return Some(1.0);
        }
        Some((1.0 - remaining / interval).clamp(0.0, 1.0))
    }

    pub fn playback_state(&self) -> PlaybackState {
        if !self.has_controls {
            PlaybackState::Inert
        } else if self.timer.pending().is_some() {
            PlaybackState::Playing
        } else {
            PlaybackState::Paused
        }
    }

    /// Makes the slide at `index` (wrapped into range) the active one.
    pub fn show_slide(&mut self, index: i64) {
        self.cursor = wrap_index(index, self.len());
        self.apply_active();
        trace!(cursor = self.cursor, "slide shown");
    }

    pub fn next(&mut self) {
        self.step(1);
    }

    pub fn previous(&mut self) {
        self.step(-1);
    }

    pub fn go_to(&mut self, index: i64) {
        self.show_slide(index);
        self.reset_autoplay();
    }

    pub fn next_clicked(&mut self) {
        self.next();
        self.reset_autoplay();
    }

    pub fn previous_clicked(&mut self) {
        self.previous();
        self.reset_autoplay();
    }

    /// Restarts the auto-advance interval from now.
    pub fn reset_autoplay(&mut self) {
        if !self.has_controls {
            return;
        }
        let handle = self.timer.schedule();
        trace!(?handle, "auto-advance rescheduled");
    }

    pub fn pointer_entered(&mut self) {
        self.hovered = true;
        if !self.has_controls {
            return;
        }
        if let Some(handle) = self.timer.cancel() {
            debug!(?handle, "auto-advance paused");
        }
    }

    pub fn pointer_left(&mut self) {
        self.hovered = false;
        if !self.has_controls {
            return;
        }
        let handle = self.timer.schedule();
        debug!(?handle, "auto-advance resumed");
    }

    /// Advances the timer by one frame. Returns true when it moved the cursor.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.timer.advance(dt) {
            self.next();
            debug!(cursor = self.cursor, "auto-advanced");
            true
        } else {
            false
        }
    }

    pub fn handle(&mut self, event: SliderEvent) {
        match event {
            SliderEvent::PointerEntered => self.pointer_entered(),
            SliderEvent::PointerLeft => self.pointer_left(),
            SliderEvent::PreviousClicked => self.previous_clicked(),
            SliderEvent::NextClicked => self.next_clicked(),
            SliderEvent::DotClicked(index) => self.go_to(index as i64),
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    fn step(&mut self, delta: i64) {
        self.cursor = resolve_index(self.cursor, delta, self.len());
        self.apply_active();
        trace!(cursor = self.cursor, "slide shown");
    }

    fn apply_active(&mut self) {
        let cursor = self.cursor;
        for (i, slide) in self.slides.iter_mut().enumerate() {
            slide.set_active(i == cursor);
        }
        for (i, dot) in self.dots.iter_mut().enumerate() {
            dot.set_active(i == cursor);
        }
    }
}
