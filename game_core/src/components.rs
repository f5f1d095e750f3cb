use glam::Vec2;

/// Which paddle an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,   // left, follows the pointer
    Computer, // right, AI controlled
}

/// Paddle component - a vertical bar on one side of the screen
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge (clamped to screen)
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2, // pixels per frame
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Reset ball to the spawn point with a fixed velocity
    pub fn reset(&mut self, spawn: Vec2, vel: Vec2) {
        self.pos = spawn;
        self.vel = vel;
    }

    /// Clamp each velocity axis to `max`, preserving sign
    pub fn clamp_speed(&mut self, max: f32) {
        if self.vel.x.abs() > max {
            self.vel.x = max.copysign(self.vel.x);
        }
        if self.vel.y.abs() > max {
            self.vel.y = max.copysign(self.vel.y);
        }
    }
}
