use crate::error::{ConfigError, Result};
use crate::params::Params;
use serde::Deserialize;
use std::path::Path;

/// Game configuration
///
/// Every field falls back to its [`Params`] value when absent from TOML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub player_paddle_x: f32,
    pub computer_paddle_x: f32,
    pub computer_base_speed: f32,
    pub computer_max_speed: f32,
    pub computer_jitter_steps: i32,
    pub computer_jitter_scale: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_max: f32,
    pub ball_speed_increase: f32,
    pub win_score: u8,
    pub logo_frames: u32,
    pub reveal_frames_per_letter: u32,
    pub pause_blink_frames: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            player_paddle_x: Params::PLAYER_PADDLE_X,
            computer_paddle_x: Params::COMPUTER_PADDLE_X,
            computer_base_speed: Params::COMPUTER_BASE_SPEED,
            computer_max_speed: Params::COMPUTER_MAX_SPEED,
            computer_jitter_steps: Params::COMPUTER_JITTER_STEPS,
            computer_jitter_scale: Params::COMPUTER_JITTER_SCALE,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            win_score: Params::WIN_SCORE,
            logo_frames: Params::LOGO_FRAMES,
            reveal_frames_per_letter: Params::REVEAL_FRAMES_PER_LETTER,
            pause_blink_frames: Params::PAUSE_BLINK_FRAMES,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("player_paddle_x", self.player_paddle_x),
            ("computer_paddle_x", self.computer_paddle_x),
            ("computer_base_speed", self.computer_base_speed),
            ("computer_max_speed", self.computer_max_speed),
            ("computer_jitter_scale", self.computer_jitter_scale),
            ("ball_radius", self.ball_radius),
            ("ball_speed_initial", self.ball_speed_initial),
            ("ball_speed_max", self.ball_speed_max),
            ("ball_speed_increase", self.ball_speed_increase),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a finite number, got {value}"
                )));
            }
        }

        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_radius", self.ball_radius),
            ("ball_speed_initial", self.ball_speed_initial),
            ("ball_speed_increase", self.ball_speed_increase),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.paddle_height > self.screen_height {
            return Err(ConfigError::Invalid(format!(
                "paddle_height {} exceeds screen_height {}",
                self.paddle_height, self.screen_height
            )));
        }
        if self.ball_speed_max < self.ball_speed_initial {
            return Err(ConfigError::Invalid(format!(
                "ball_speed_max {} is below ball_speed_initial {}",
                self.ball_speed_max, self.ball_speed_initial
            )));
        }
        if self.computer_max_speed < self.computer_base_speed {
            return Err(ConfigError::Invalid(format!(
                "computer_max_speed {} is below computer_base_speed {}",
                self.computer_max_speed, self.computer_base_speed
            )));
        }
        if self.computer_jitter_steps < 0 {
            return Err(ConfigError::Invalid(
                "computer_jitter_steps must not be negative".to_string(),
            ));
        }
        if self.win_score == 0 {
            return Err(ConfigError::Invalid("win_score must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Get the left edge X of a paddle
    pub fn paddle_x(&self, side: crate::Side) -> f32 {
        match side {
            crate::Side::Player => self.player_paddle_x,
            crate::Side::Computer => self.computer_paddle_x,
        }
    }

    /// Clamp a paddle's top edge to the screen bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.screen_height - self.paddle_height)
    }

    /// Ball spawn point (screen centre)
    pub fn ball_spawn(&self) -> glam::Vec2 {
        glam::Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }
}

/// Window options handed to the host library
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub msaa_samples: i32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Pong Game".to_string(),
            msaa_samples: 4,
        }
    }
}

/// Sound files, relative to the working directory
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    pub enabled: bool,
    pub hit_sound: String,
    pub score_sound: String,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            hit_sound: "ballHit.wav".to_string(),
            score_sound: "ponto.mp3".to_string(),
        }
    }
}

/// Everything read from `pong.toml`
///
/// ```toml
/// [game]
/// win_score = 5
///
/// [audio]
/// enabled = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub game: Config,
    pub window: WindowSettings,
    pub audio: AudioSettings,
}

impl Settings {
    pub const FILE_NAME: &'static str = "pong.toml";

    /// Parse settings from TOML text and validate them
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(text)?;
        settings.game.validate()?;
        Ok(settings)
    }

    /// Load a settings file, returning `None` if it does not exist
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text).map(Some)
    }
}
