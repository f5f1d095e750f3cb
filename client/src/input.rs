//! Keyboard and mouse polling

use game_core::InputLatch;
use macroquad::prelude::*;

/// Latch this frame's pause and confirm presses
pub fn poll(latch: &mut InputLatch) {
    if is_key_pressed(KeyCode::Space) {
        latch.press_pause();
    }
    if is_key_pressed(KeyCode::Enter) || is_mouse_button_pressed(MouseButton::Left) {
        latch.press_confirm();
    }
}

/// Pointer Y in screen pixels
pub fn pointer_y() -> f32 {
    mouse_position().1
}

pub fn quit_requested() -> bool {
    is_key_pressed(KeyCode::Escape)
}
