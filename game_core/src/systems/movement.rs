use crate::{Ball, Config, FrameInput, Paddle, Side};
use hecs::World;

/// Move ball by one frame of velocity, then cap its speed per axis
pub fn move_ball(world: &mut World, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
        ball.clamp_speed(config.ball_speed_max);
    }
}

/// Snap the player paddle to the pointer, centred on it
pub fn track_pointer(world: &mut World, input: &FrameInput, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Player {
            paddle.y = config.clamp_paddle_y(input.pointer_y - config.paddle_height / 2.0);
        }
    }
}
