//! Draw lists
//!
//! Turns a [`Game`] into host-independent draw commands. Reads state only;
//! the host executes the list with its own primitives.

use crate::{blink_visible, revealed_letters, Game, Screen, Side};

pub const WELCOME_TEXT: &str = "WELCOME!";

/// Named palette, mapped to real colours by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    White,
    Gray,
    LightGray,
    Green,
    Red,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Text with its top-left corner at (x, y)
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        tint: Tint,
    },
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        tint: Tint,
    },
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        tint: Tint,
    },
}

fn text(text: impl Into<String>, x: f32, y: f32, size: f32, tint: Tint) -> DrawCommand {
    DrawCommand::Text {
        text: text.into(),
        x,
        y,
        size,
        tint,
    }
}

/// Build the draw list for the current screen
pub fn draw_list(game: &Game) -> Vec<DrawCommand> {
    match game.screen {
        Screen::Logo => draw_logo(game),
        Screen::Title => draw_title(),
        Screen::Gameplay => draw_gameplay(game),
        Screen::Ending => draw_ending(game),
    }
}

fn draw_logo(game: &Game) -> Vec<DrawCommand> {
    let shown = revealed_letters(
        game.frame_counter,
        game.config.reveal_frames_per_letter,
        WELCOME_TEXT.len(),
    );
    vec![
        text(&WELCOME_TEXT[..shown], 20.0, 20.0, 40.0, Tint::LightGray),
        text("WAIT FOR 2 SECONDS...", 290.0, 220.0, 20.0, Tint::Gray),
    ]
}

fn draw_title() -> Vec<DrawCommand> {
    vec![
        text("PONG", 20.0, 20.0, 40.0, Tint::White),
        text("PRESS ENTER OR CLICK TO START", 150.0, 200.0, 15.0, Tint::White),
    ]
}

fn draw_gameplay(game: &Game) -> Vec<DrawCommand> {
    let config = &game.config;
    let ball = game.ball();

    let mut commands = vec![
        text(
            format!("Player Score: {}", game.score.player),
            10.0,
            10.0,
            20.0,
            Tint::White,
        ),
        text(
            format!("Computer Score: {}", game.score.computer),
            570.0,
            10.0,
            24.0,
            Tint::White,
        ),
    ];

    for side in [Side::Player, Side::Computer] {
        commands.push(DrawCommand::Rect {
            x: config.paddle_x(side),
            y: game.paddle_y(side),
            w: config.paddle_width,
            h: config.paddle_height,
            tint: Tint::White,
        });
    }

    commands.push(DrawCommand::Circle {
        x: ball.pos.x,
        y: ball.pos.y,
        radius: config.ball_radius,
        tint: Tint::White,
    });

    if game.paused && blink_visible(game.frame_counter, config.pause_blink_frames) {
        commands.push(text("PAUSED", 350.0, 200.0, 30.0, Tint::Gray));
        commands.push(text("PRESS SPACE TO RESUME", 320.0, 240.0, 10.0, Tint::Gray));
    }

    commands
}

fn draw_ending(game: &Game) -> Vec<DrawCommand> {
    let config = &game.config;
    let (headline, banner, tint) = match game.winner() {
        Some(Side::Player) => ("You Won!!", "You won!", Tint::Green),
        _ => ("You Lost!!", "You lost!", Tint::Red),
    };

    vec![
        text(headline, 20.0, 20.0, 40.0, Tint::White),
        text(
            "PRESS ENTER OR CLICK TO PLAY AGAIN",
            150.0,
            200.0,
            15.0,
            Tint::White,
        ),
        text(
            banner,
            config.screen_width / 2.0 - 100.0,
            config.screen_height / 2.0 - 20.0,
            40.0,
            tint,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, Score};

    fn setup_game(screen: Screen) -> Game {
        let mut game = Game::new(Config::new(), 1);
        game.screen = screen;
        game
    }

    fn texts(commands: &[DrawCommand]) -> Vec<&str> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_logo_reveals_letters() {
        let mut game = setup_game(Screen::Logo);
        game.frame_counter = 0;
        assert_eq!(texts(&draw_list(&game))[0], "");

        game.frame_counter = 3 * game.config.reveal_frames_per_letter;
        assert_eq!(texts(&draw_list(&game))[0], "WEL");

        game.frame_counter = 120;
        assert_eq!(texts(&draw_list(&game))[0], WELCOME_TEXT);
    }

    #[test]
    fn test_gameplay_draws_paddles_and_ball() {
        let mut game = setup_game(Screen::Gameplay);
        game.paused = false;
        game.score = Score {
            player: 3,
            computer: 7,
        };

        let commands = draw_list(&game);

        assert!(texts(&commands).contains(&"Player Score: 3"));
        assert!(texts(&commands).contains(&"Computer Score: 7"));
        assert!(commands.contains(&DrawCommand::Rect {
            x: 50.0,
            y: 165.0,
            w: 20.0,
            h: 110.0,
            tint: Tint::White
        }));
        assert!(commands.contains(&DrawCommand::Rect {
            x: 725.0,
            y: 170.0,
            w: 20.0,
            h: 110.0,
            tint: Tint::White
        }));
        assert!(commands.contains(&DrawCommand::Circle {
            x: 400.0,
            y: 225.0,
            radius: 10.0,
            tint: Tint::White
        }));
        assert!(!texts(&commands).contains(&"PAUSED"), "No hint while running");
    }

    #[test]
    fn test_pause_hint_blinks() {
        let mut game = setup_game(Screen::Gameplay);
        game.paused = true;

        game.frame_counter = 10;
        assert!(texts(&draw_list(&game)).contains(&"PAUSED"));

        game.frame_counter = 40;
        assert!(!texts(&draw_list(&game)).contains(&"PAUSED"));
    }

    #[test]
    fn test_ending_message_follows_winner() {
        let mut game = setup_game(Screen::Ending);
        game.score = Score {
            player: 10,
            computer: 2,
        };
        let won = draw_list(&game);
        assert!(texts(&won).contains(&"You Won!!"));
        assert!(won.iter().any(|c| matches!(
            c,
            DrawCommand::Text {
                tint: Tint::Green,
                ..
            }
        )));

        game.score = Score {
            player: 2,
            computer: 10,
        };
        let lost = draw_list(&game);
        assert!(texts(&lost).contains(&"You Lost!!"));
        assert!(lost.iter().any(|c| matches!(c, DrawCommand::Text { tint: Tint::Red, .. })));
    }

    #[test]
    fn test_drawing_does_not_change_state() {
        let game = setup_game(Screen::Gameplay);
        let before = (game.ball(), game.score, game.paused, game.frame_counter);
        let _ = draw_list(&game);
        assert_eq!(before, (game.ball(), game.score, game.paused, game.frame_counter));
    }
}
