use crate::components::Side;
use crate::params::Params;

/// Fixed-step frame clock
///
/// Converts variable wall-clock frame times into a whole number of
/// simulation steps of `Params::FIXED_DT`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    accumulator: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add elapsed time and return how many fixed steps are due
    pub fn advance(&mut self, dt: f32) -> u32 {
        // Clamp dt to prevent large jumps
        self.accumulator += dt.clamp(0.0, Params::MAX_DT);
        let mut steps = 0;
        while self.accumulator >= Params::FIXED_DT {
            self.accumulator -= Params::FIXED_DT;
            steps += 1;
        }
        steps
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u8,
    pub computer: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Computer => self.computer += 1,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.player >= win_score {
            Some(Side::Player)
        } else if self.computer >= win_score {
            Some(Side::Computer)
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Uniform integer in `[-steps, steps]`
    pub fn jitter(&mut self, steps: i32) -> i32 {
        use rand::Rng;
        self.0.gen_range(-steps..=steps)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub player_scored: bool,
    pub computer_scored: bool,
    pub ball_hit_paddle: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.player_scored = false;
        self.computer_scored = false;
        self.ball_hit_paddle = false;
    }

    /// Whether either side scored this frame
    pub fn any_scored(&self) -> bool {
        self.player_scored || self.computer_scored
    }
}

/// Input sampled by the host for one frame
///
/// Press flags are edge-triggered: true only on the frame the key or
/// button went down.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub pointer_y: f32,
    pub pause_pressed: bool,
    pub confirm_pressed: bool,
}

impl FrameInput {
    pub fn new(pointer_y: f32) -> Self {
        Self {
            pointer_y,
            ..Default::default()
        }
    }

    pub fn with_pause(mut self) -> Self {
        self.pause_pressed = true;
        self
    }

    pub fn with_confirm(mut self) -> Self {
        self.confirm_pressed = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Player);
        score.increment(Side::Player);
        score.increment(Side::Computer);
        assert_eq!(score.player, 2);
        assert_eq!(score.computer, 1);
    }

    #[test]
    fn test_score_has_winner_player() {
        let score = Score {
            player: 10,
            computer: 4,
        };
        assert_eq!(score.has_winner(10), Some(Side::Player));
    }

    #[test]
    fn test_score_has_winner_computer() {
        let score = Score {
            player: 9,
            computer: 10,
        };
        assert_eq!(score.has_winner(10), Some(Side::Computer));
    }

    #[test]
    fn test_score_no_winner_below_threshold() {
        let score = Score {
            player: 9,
            computer: 9,
        };
        assert_eq!(score.has_winner(10), None, "No winner below threshold");
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.player_scored = true;
        events.computer_scored = true;
        events.ball_hit_paddle = true;

        events.clear();

        assert_eq!(events, Events::default());
        assert!(!events.any_scored());
    }

    #[test]
    fn test_jitter_stays_in_range() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let k = rng.jitter(10);
            assert!((-10..=10).contains(&k), "jitter {k} out of range");
        }
    }

    #[test]
    fn test_jitter_is_deterministic_per_seed() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        let sa: Vec<i32> = (0..32).map(|_| a.jitter(10)).collect();
        let sb: Vec<i32> = (0..32).map(|_| b.jitter(10)).collect();
        assert_eq!(sa, sb);
    }

    #[test]
    fn test_frame_clock_fixed_steps() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(Params::FIXED_DT * 0.5), 0);
        assert_eq!(clock.advance(Params::FIXED_DT * 0.6), 1);
        assert_eq!(clock.advance(Params::FIXED_DT * 2.0), 2);
    }

    #[test]
    fn test_frame_clock_clamps_large_dt() {
        let mut clock = FrameClock::new();
        let steps = clock.advance(5.0);
        assert!(steps <= (Params::MAX_DT / Params::FIXED_DT).ceil() as u32);
    }
}
