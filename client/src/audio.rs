//! Sound effects
//!
//! Missing or undecodable files are logged and skipped; the game runs
//! silent for that sound.

use game_core::{AudioSettings, Events};
use macroquad::audio::{load_sound, play_sound_once, Sound};

pub struct SoundBank {
    hit: Option<Sound>,
    score: Option<Sound>,
}

impl SoundBank {
    pub async fn load(settings: &AudioSettings) -> Self {
        if !settings.enabled {
            log::info!("audio disabled");
            return Self {
                hit: None,
                score: None,
            };
        }

        Self {
            hit: load_or_warn(&settings.hit_sound).await,
            score: load_or_warn(&settings.score_sound).await,
        }
    }

    /// Play the sounds for this frame's events
    pub fn play(&self, events: &Events) {
        if events.ball_hit_paddle {
            if let Some(sound) = &self.hit {
                play_sound_once(sound);
            }
        }
        if events.any_scored() {
            if let Some(sound) = &self.score {
                play_sound_once(sound);
            }
        }
    }
}

async fn load_or_warn(path: &str) -> Option<Sound> {
    match load_sound(path).await {
        Ok(sound) => {
            log::info!("loaded sound {path}");
            Some(sound)
        }
        Err(e) => {
            log::warn!("could not load sound '{path}' ({e}), running without it");
            None
        }
    }
}
