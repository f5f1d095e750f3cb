//! Screen State Machine
//!
//! Logo -> Title -> Gameplay -> Ending -> Gameplay (restart).
//! Each screen has its own handler that decides what comes next.

use crate::{Config, Side};

/// Game screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Logo,
    Title,
    Gameplay,
    Ending,
}

/// What a screen handler sees for one frame
#[derive(Debug, Clone, Copy)]
pub struct ScreenInput {
    pub frame_counter: u32,
    pub confirm_pressed: bool,
    pub winner: Option<Side>,
}

/// Result of evaluating the current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Advance(Screen),
    /// Reset the match, then continue on the given screen
    Restart(Screen),
}

impl Screen {
    /// Evaluate the handler for this screen
    pub fn update(self, input: &ScreenInput, config: &Config) -> Transition {
        match self {
            Screen::Logo => update_logo(input, config),
            Screen::Title => update_title(input),
            Screen::Gameplay => update_gameplay(input),
            Screen::Ending => update_ending(input),
        }
    }
}

fn update_logo(input: &ScreenInput, config: &Config) -> Transition {
    if input.frame_counter > config.logo_frames {
        Transition::Advance(Screen::Title)
    } else {
        Transition::Stay
    }
}

fn update_title(input: &ScreenInput) -> Transition {
    if input.confirm_pressed {
        Transition::Advance(Screen::Gameplay)
    } else {
        Transition::Stay
    }
}

fn update_gameplay(input: &ScreenInput) -> Transition {
    match input.winner {
        Some(_) => Transition::Advance(Screen::Ending),
        None => Transition::Stay,
    }
}

fn update_ending(input: &ScreenInput) -> Transition {
    if input.confirm_pressed {
        Transition::Restart(Screen::Gameplay)
    } else {
        Transition::Stay
    }
}

/// Number of letters of the logo text shown so far
pub fn revealed_letters(frame_counter: u32, frames_per_letter: u32, len: usize) -> usize {
    let shown = frame_counter / frames_per_letter.max(1);
    (shown as usize).min(len)
}

/// Whether the blinking pause hint is visible this frame
pub fn blink_visible(frame_counter: u32, period: u32) -> bool {
    (frame_counter / period.max(1)) % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(frame_counter: u32, confirm_pressed: bool, winner: Option<Side>) -> ScreenInput {
        ScreenInput {
            frame_counter,
            confirm_pressed,
            winner,
        }
    }

    #[test]
    fn test_logo_waits_for_delay() {
        let config = Config::new();
        assert_eq!(
            Screen::Logo.update(&input(config.logo_frames, true, None), &config),
            Transition::Stay,
            "Confirm does not skip the logo"
        );
        assert_eq!(
            Screen::Logo.update(&input(config.logo_frames + 1, false, None), &config),
            Transition::Advance(Screen::Title)
        );
    }

    #[test]
    fn test_title_needs_confirm() {
        let config = Config::new();
        assert_eq!(Screen::Title.update(&input(500, false, None), &config), Transition::Stay);
        assert_eq!(
            Screen::Title.update(&input(500, true, None), &config),
            Transition::Advance(Screen::Gameplay)
        );
    }

    #[test]
    fn test_gameplay_ends_on_winner() {
        let config = Config::new();
        assert_eq!(Screen::Gameplay.update(&input(0, true, None), &config), Transition::Stay);
        assert_eq!(
            Screen::Gameplay.update(&input(0, false, Some(Side::Computer)), &config),
            Transition::Advance(Screen::Ending)
        );
    }

    #[test]
    fn test_ending_restarts_on_confirm() {
        let config = Config::new();
        let winner = Some(Side::Player);
        assert_eq!(Screen::Ending.update(&input(0, false, winner), &config), Transition::Stay);
        assert_eq!(
            Screen::Ending.update(&input(0, true, winner), &config),
            Transition::Restart(Screen::Gameplay)
        );
    }

    #[test]
    fn test_revealed_letters() {
        assert_eq!(revealed_letters(0, 4, 8), 0);
        assert_eq!(revealed_letters(9, 4, 8), 2);
        assert_eq!(revealed_letters(1000, 4, 8), 8, "Never more than the text");
    }

    #[test]
    fn test_blink_toggles_every_period() {
        assert!(blink_visible(0, 30));
        assert!(blink_visible(29, 30));
        assert!(!blink_visible(30, 30));
        assert!(blink_visible(60, 30));
    }
}
