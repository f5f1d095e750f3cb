use crate::{
    create_ball, create_paddle, step, Ball, Config, Events, FrameInput, GameRng, Paddle, Score,
    Screen, ScreenInput, Side, Transition,
};
use glam::Vec2;
use hecs::World;

/// A whole Pong session: world, score, screen and pause state
pub struct Game {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    pub screen: Screen,
    pub paused: bool,
    pub frame_counter: u32,
}

impl Game {
    pub fn new(config: Config, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }

    pub fn with_rng(config: Config, rng: GameRng) -> Self {
        let mut world = World::new();

        // Player starts a little above centre, computer exactly centred
        let centre = config.screen_height / 2.0;
        create_paddle(
            &mut world,
            Side::Player,
            config.clamp_paddle_y(centre - crate::Params::PLAYER_START_OFFSET),
        );
        create_paddle(
            &mut world,
            Side::Computer,
            config.clamp_paddle_y(centre - config.paddle_height / 2.0),
        );

        let serve = Vec2::splat(config.ball_speed_initial);
        create_ball(&mut world, config.ball_spawn(), serve);

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            screen: Screen::Logo,
            paused: true,
            frame_counter: 0,
        }
    }

    /// Put the match back to its starting state
    ///
    /// Scores cleared, ball served from the centre, paused. Paddles,
    /// screen and frame counter are left alone.
    pub fn reset(&mut self) {
        let spawn = self.config.ball_spawn();
        let serve = Vec2::splat(self.config.ball_speed_initial);
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(spawn, serve);
        }
        self.score = Score::new();
        self.paused = true;
    }

    /// Run one frame: pause toggle, physics, then the screen machine
    pub fn update(&mut self, input: &FrameInput) -> Transition {
        self.events.clear();

        if input.pause_pressed {
            self.paused = !self.paused;
            log::debug!("paused: {}", self.paused);
        }

        if !self.paused && self.screen == Screen::Gameplay {
            step(
                &mut self.world,
                &self.config,
                input,
                &mut self.score,
                &mut self.events,
                &mut self.rng,
            );
        }

        self.frame_counter = self.frame_counter.wrapping_add(1);

        let screen_input = ScreenInput {
            frame_counter: self.frame_counter,
            confirm_pressed: input.confirm_pressed,
            winner: self.winner(),
        };
        let transition = self.screen.update(&screen_input, &self.config);
        match transition {
            Transition::Stay => {}
            Transition::Advance(next) => {
                log::info!("screen {:?} -> {:?}", self.screen, next);
                self.screen = next;
            }
            Transition::Restart(next) => {
                log::info!("restarting match");
                self.reset();
                self.screen = next;
            }
        }
        transition
    }

    pub fn winner(&self) -> Option<Side> {
        self.score.has_winner(self.config.win_score)
    }

    pub fn ball(&self) -> Ball {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .unwrap_or_else(|| Ball::new(self.config.ball_spawn(), Vec2::ZERO))
    }

    pub fn paddle_y(&self, side: Side) -> f32 {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.y)
            .unwrap_or(0.0)
    }

    /// Move the ball, e.g. to set up a scenario
    pub fn place_ball(&mut self, pos: Vec2, vel: Vec2) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    pub fn set_paddle_y(&mut self, side: Side, y: f32) {
        let y = self.config.clamp_paddle_y(y);
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                paddle.y = y;
            }
        }
    }
}
