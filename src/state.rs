#[derive(Debug, PartialEq, Clone, Copy)]
pub enum PlaybackState {
    Playing, // Auto-advance timer is armed
    Paused,  // Pointer is over the slider, no timer pending
    Inert,   // No navigation controls, auto-advance disabled
}
