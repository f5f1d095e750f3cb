pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod params;
pub mod render;
pub mod resources;
pub mod screen;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::ConfigError;
pub use game::*;
pub use input::*;
pub use params::*;
pub use resources::*;
pub use screen::*;

use hecs::World;
use systems::*;

/// Advance the Pong simulation by one frame
///
/// Callers gate this on pause and on the gameplay screen.
pub fn step(
    world: &mut World,
    config: &Config,
    input: &FrameInput,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // 1. Move ball and cap its speed
    move_ball(world, config);

    // 2. Bounce off top and bottom walls
    bounce_walls(world, config);

    // 3. Move paddles (player follows pointer, computer follows ball)
    track_pointer(world, input, config);
    move_computer_paddle(world, config, rng);

    // 4. Ball vs paddles
    check_paddle_hits(world, config, events);

    // 5. Check scoring (ball left the screen)
    check_scoring(world, config, score, events);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
