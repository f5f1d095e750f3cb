//! Pong desktop client
//!
//! Window, audio and input via macroquad; all game rules live in game_core.

mod audio;
mod input;
mod renderer;

use anyhow::{Context, Result};
use game_core::{FrameClock, Game, InputLatch, Settings};
use macroquad::prelude::*;
use std::path::Path;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Logging and settings, initialised once before the window opens
fn settings() -> &'static Settings {
    SETTINGS.get_or_init(|| {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .init();

        load_settings(Path::new(Settings::FILE_NAME)).unwrap_or_else(|e| {
            log::error!("{e:#}, using defaults");
            Settings::default()
        })
    })
}

/// Read `pong.toml` if present; defaults when it is missing
fn load_settings(path: &Path) -> Result<Settings> {
    let loaded = Settings::load(path)
        .with_context(|| format!("Failed to load settings from {}", path.display()))?;
    match loaded {
        Some(settings) => {
            log::info!("loaded settings from {}", path.display());
            Ok(settings)
        }
        None => Ok(Settings::default()),
    }
}

fn window_conf() -> Conf {
    let settings = settings();
    Conf {
        window_title: settings.window.title.clone(),
        window_width: settings.game.screen_width as i32,
        window_height: settings.game.screen_height as i32,
        sample_count: settings.window.msaa_samples,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let settings = settings();
    let sounds = audio::SoundBank::load(&settings.audio).await;

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let mut game = Game::new(settings.game.clone(), seed);
    let mut clock = FrameClock::new();
    let mut latch = InputLatch::new();

    log::info!("starting pong (seed {seed})");

    loop {
        if input::quit_requested() {
            break;
        }

        input::poll(&mut latch);

        for _ in 0..clock.advance(get_frame_time()) {
            let frame_input = latch.take(input::pointer_y());
            game.update(&frame_input);
            sounds.play(&game.events);
        }

        renderer::draw_frame(&game);
        next_frame().await;
    }

    log::info!("bye");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_settings_file_uses_defaults() {
        let settings = load_settings(Path::new("no/such/dir/pong.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_invalid_settings_file_names_path() {
        let path = std::env::temp_dir().join(format!("pong-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "[game]\nball_speed_max = nan\n").unwrap();

        let err = load_settings(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        let message = format!("{err:#}");
        assert!(message.contains("pong-bad-"), "Error should name the file: {message}");
        assert!(message.contains("ball_speed_max"), "Error should name the field: {message}");
    }
}
