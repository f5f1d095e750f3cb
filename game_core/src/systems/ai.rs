use crate::{Ball, Config, GameRng, Paddle, Side};
use hecs::World;

/// Per-frame speed of the computer paddle before jitter
///
/// Interpolates from base to max speed by how far the ball is from the
/// paddle centre, relative to the screen height.
pub fn adaptive_speed(distance: f32, config: &Config) -> f32 {
    config.computer_base_speed
        + (config.computer_max_speed - config.computer_base_speed)
            * (distance.abs() / config.screen_height)
}

/// Move the computer paddle toward the ball
///
/// A random error is added to the speed every frame so the opponent
/// tracks imperfectly. The error can exceed the speed, briefly pushing
/// the paddle away from the ball.
pub fn move_computer_paddle(world: &mut World, config: &Config, rng: &mut GameRng) {
    let ball_y = match world.query::<&Ball>().iter().next() {
        Some((_e, ball)) => ball.pos.y,
        None => return, // No ball in world
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Computer {
            continue;
        }

        let distance = ball_y - (paddle.y + config.paddle_height / 2.0);
        let error = rng.jitter(config.computer_jitter_steps) as f32 * config.computer_jitter_scale;
        let speed = adaptive_speed(distance, config) + error;

        if distance > 0.0 {
            paddle.y += speed;
        } else if distance < 0.0 {
            paddle.y -= speed;
        }

        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}
