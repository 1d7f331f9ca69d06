use crate::layout::Control;

/// What the pointer did to the slider during one frame.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SliderEvent {
    PointerEntered,
    PointerLeft,
    PreviousClicked,
    NextClicked,
    DotClicked(usize),
}

/// Turns per-frame pointer samples into slider events, remembering whether
/// the pointer was over the slider on the previous frame.
#[derive(Debug, Default)]
pub struct PointerTracker {
    inside: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// `inside`: pointer is over the slider region this frame.
    /// `clicked`: control under the pointer if the button was pressed this frame.
    pub fn sample(&mut self, inside: bool, clicked: Option<Control>) -> Vec<SliderEvent> {
        let mut events = Vec::new();

        match (self.inside, inside) {
            (false, true) => events.push(SliderEvent::PointerEntered),
            (true, false) => events.push(SliderEvent::PointerLeft),
            _ => {}
        }
        self.inside = inside;

        if let Some(control) = clicked {
            events.push(match control {
                Control::Previous => SliderEvent::PreviousClicked,
                Control::Next => SliderEvent::NextClicked,
                Control::Dot(index) => SliderEvent::DotClicked(index),
            });
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_leave_fire_once_per_transition() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.sample(false, None), vec![]);
        assert_eq!(tracker.sample(true, None), vec![SliderEvent::PointerEntered]);
        assert_eq!(tracker.sample(true, None), vec![]);
        assert_eq!(tracker.sample(false, None), vec![SliderEvent::PointerLeft]);
        assert_eq!(tracker.sample(false, None), vec![]);
    }

    #[test]
    fn leaving_the_window_from_inside_the_slider_fires_leave() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.sample(true, None), vec![SliderEvent::PointerEntered]);
        // Cursor off screen is sampled as outside
        assert_eq!(tracker.sample(false, None), vec![SliderEvent::PointerLeft]);
        assert_eq!(tracker.sample(false, None), vec![]);
    }

    #[test]
    fn click_follows_the_hover_transition() {
        let mut tracker = PointerTracker::new();
        assert_eq!(
            tracker.sample(true, Some(Control::Dot(2))),
            vec![SliderEvent::PointerEntered, SliderEvent::DotClicked(2)]
        );
        assert_eq!(tracker.sample(true, Some(Control::Next)), vec![SliderEvent::NextClicked]);
        assert_eq!(tracker.sample(true, Some(Control::Previous)), vec![SliderEvent::PreviousClicked]);
    }
}
