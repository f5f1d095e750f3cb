use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Bounce the ball off the top and bottom walls
///
/// Only the vertical velocity is flipped; the ball is not pushed back
/// inside, so it may overlap the edge for a frame.
pub fn bounce_walls(world: &mut World, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let r = config.ball_radius;
        if ball.pos.y >= config.screen_height - r || ball.pos.y <= r {
            ball.vel.y = -ball.vel.y;
        }
    }
}

/// Check whether the ball touches a paddle
///
/// The ball's vertical span must overlap the paddle's, and its leading
/// edge must have crossed the paddle's hit line.
pub fn hits_paddle(ball: &Ball, side: Side, paddle_y: f32, config: &Config) -> bool {
    let r = config.ball_radius;
    let overlaps_vertically =
        ball.pos.y + r >= paddle_y && ball.pos.y - r <= paddle_y + config.paddle_height;

    let crossed_line = match side {
        Side::Player => ball.pos.x - r <= config.player_paddle_x + config.paddle_width,
        Side::Computer => ball.pos.x + r >= config.computer_paddle_x,
    };

    overlaps_vertically && crossed_line
}

/// Resolve ball hits against both paddles
pub fn check_paddle_hits(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data without holding borrows
    let mut paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();
    // Player first, matching the left-to-right check order
    paddles.sort_by_key(|(side, _)| *side == Side::Computer);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for &(side, paddle_y) in &paddles {
            if !hits_paddle(ball, side, paddle_y, config) {
                continue;
            }

            ball.vel.x = -ball.vel.x * config.ball_speed_increase;
            ball.vel.y *= config.ball_speed_increase;

            // Push ball out of paddle so it cannot hit twice
            ball.pos.x = match side {
                Side::Player => config.player_paddle_x + config.paddle_width + config.ball_radius,
                Side::Computer => config.computer_paddle_x - config.ball_radius,
            };

            events.ball_hit_paddle = true;
            log::debug!("ball hit {:?} paddle, vel now {}", side, ball.vel);
        }
    }
}
