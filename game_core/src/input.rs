//! Edge-triggered input latching
//!
//! The host polls every rendered frame but the simulation runs at a fixed
//! rate, so a press is held here until exactly one step consumes it.

use crate::FrameInput;

#[derive(Debug, Clone, Copy, Default)]
pub struct InputLatch {
    pause: bool,
    confirm: bool,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press_pause(&mut self) {
        self.pause = true;
    }

    pub fn press_confirm(&mut self) {
        self.confirm = true;
    }

    /// Build the input for one simulation step and clear latched presses
    pub fn take(&mut self, pointer_y: f32) -> FrameInput {
        let input = FrameInput {
            pointer_y,
            pause_pressed: self.pause,
            confirm_pressed: self.confirm,
        };
        *self = Self::default();
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_consumed_once() {
        let mut latch = InputLatch::new();
        latch.press_pause();

        let first = latch.take(100.0);
        let second = latch.take(100.0);

        assert!(first.pause_pressed);
        assert!(!second.pause_pressed, "Press must not repeat on the next step");
    }

    #[test]
    fn test_presses_survive_frames_without_steps() {
        let mut latch = InputLatch::new();
        latch.press_confirm();
        // no step this frame; press again next frame
        latch.press_confirm();

        let input = latch.take(42.0);
        assert!(input.confirm_pressed);
        assert!(!input.pause_pressed);
        assert_eq!(input.pointer_y, 42.0);
    }
}
