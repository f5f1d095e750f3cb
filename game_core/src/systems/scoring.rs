use crate::{Ball, Config, Events, Score, Side};
use glam::Vec2;
use hecs::World;

/// Serve velocity after a point
///
/// Always moving down, toward the side that won the point.
pub fn serve_velocity(scorer: Side, config: &Config) -> Vec2 {
    let speed = config.ball_speed_initial;
    match scorer {
        Side::Computer => Vec2::new(speed, speed),
        Side::Player => Vec2::new(-speed, speed),
    }
}

/// Check if ball left the screen (scoring)
pub fn check_scoring(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.pos.x < 0.0 {
            Side::Computer
        } else if ball.pos.x > config.screen_width {
            Side::Player
        } else {
            continue;
        };

        score.increment(scorer);
        match scorer {
            Side::Player => events.player_scored = true,
            Side::Computer => events.computer_scored = true,
        }

        ball.reset(config.ball_spawn(), serve_velocity(scorer, config));
        log::debug!(
            "{:?} scored ({} - {})",
            scorer,
            score.player,
            score.computer
        );
    }
}
