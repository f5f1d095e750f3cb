/// Game tuning parameters for Pong
///
/// Distances are in screen pixels, speeds in pixels per frame.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 450.0;
    pub const TARGET_FPS: u32 = 60;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 110.0;
    pub const PLAYER_PADDLE_X: f32 = 50.0; // left edge
    pub const COMPUTER_PADDLE_X: f32 = 725.0; // left edge, also the hit line
    pub const PLAYER_START_OFFSET: f32 = 60.0; // player starts slightly above centre

    // Computer paddle
    pub const COMPUTER_BASE_SPEED: f32 = 4.0;
    pub const COMPUTER_MAX_SPEED: f32 = 8.0;
    pub const COMPUTER_JITTER_STEPS: i32 = 10; // jitter drawn from [-10, 10]
    pub const COMPUTER_JITTER_SCALE: f32 = 0.5; // -> +/-5 pixels

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_INITIAL: f32 = 4.0;
    pub const BALL_SPEED_MAX: f32 = 12.0; // per axis
    pub const BALL_SPEED_INCREASE: f32 = 1.1; // Multiply velocity on paddle hit

    // Score
    pub const WIN_SCORE: u8 = 10;

    // Screens
    pub const LOGO_FRAMES: u32 = 120; // ~2 seconds at 60fps
    pub const REVEAL_FRAMES_PER_LETTER: u32 = 4;
    pub const PAUSE_BLINK_FRAMES: u32 = 30;

    // Physics
    pub const FIXED_DT: f32 = 1.0 / Self::TARGET_FPS as f32;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large catch-up bursts
}
