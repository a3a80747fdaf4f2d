//! Game state and entity types
//!
//! The simulation owns the paddle, the ball and the full block grid for
//! the lifetime of one session; the host only reads geometry out of it.

use glam::Vec2;

use super::aabb::Aabb;
use crate::config::Config;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Ball passed below the paddle; terminal
    Ended,
}

/// The player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Center position
    pub pos: Vec2,
    pub size: Vec2,
    /// Movement speed (pixels/s)
    pub speed: f32,
}

impl Paddle {
    pub fn new(pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self { pos, size, speed }
    }

    /// Displace horizontally by `direction * speed * dt`, then clamp so
    /// the paddle stays fully inside `[0, field_width]`.
    ///
    /// `direction` is -1 (left) or +1 (right); other values just scale.
    pub fn slide(&mut self, direction: f32, dt: f32, field_width: f32) {
        self.pos.x += direction * self.speed * dt;
        let half = self.size.x / 2.0;
        if self.pos.x - half < 0.0 {
            self.pos.x = half;
        }
        if self.pos.x + half > field_width {
            self.pos.x = field_width - half;
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.pos, self.size)
    }
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    /// Velocity (pixels/s, components may be negative)
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Euler step plus side/top wall response.
    ///
    /// No sub-stepping: a fast ball with a large `dt` can tunnel through
    /// thin obstacles. There is also no bottom-wall response; the tick
    /// loop treats crossing the bottom edge as the loss condition.
    pub fn update(&mut self, dt: f32, field_width: f32) {
        self.pos += self.vel * dt;

        if self.left() < 0.0 || self.right() > field_width {
            self.vel.x = -self.vel.x;
        }
        if self.top() < 0.0 {
            self.vel.y = -self.vel.y;
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    /// Bounding box enclosing the circle
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(self.radius * 2.0))
    }
}

/// A block cell. Destroyed blocks stay in the collection and are skipped
/// for collision and drawing; they are never reused within a session.
#[derive(Debug, Clone)]
pub struct Block {
    /// Center position
    pub pos: Vec2,
    pub size: Vec2,
    pub destroyed: bool,
}

impl Block {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            destroyed: false,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.pos, self.size)
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: Config,
    pub phase: GamePhase,
    pub paddle: Paddle,
    pub ball: Ball,
    pub blocks: Vec<Block>,
}

impl GameState {
    /// Create a session: paddle near the bottom, ball at field center,
    /// block grid laid out column by column from the top-left corner.
    pub fn new(config: Config) -> Self {
        let paddle = Paddle::new(
            Vec2::new(
                config.field_width / 2.0,
                config.field_height - config.paddle_margin,
            ),
            Vec2::new(config.paddle_width, config.paddle_height),
            config.paddle_speed,
        );

        let ball = Ball::new(
            Vec2::new(config.field_width / 2.0, config.field_height / 2.0),
            Vec2::new(config.ball_start_vel.0, config.ball_start_vel.1),
            config.ball_radius,
        );

        let block_size = Vec2::new(config.block_width, config.block_height);
        let cell = Vec2::new(
            config.block_width + config.block_gap,
            config.block_height + config.block_gap,
        );
        let mut blocks = Vec::with_capacity((config.block_cols * config.block_rows) as usize);
        for col in 0..config.block_cols {
            for row in 0..config.block_rows {
                let pos = Vec2::new((col + 1) as f32 * cell.x, (row + 1) as f32 * cell.y);
                blocks.push(Block::new(pos, block_size));
            }
        }

        Self {
            config,
            phase: GamePhase::Running,
            paddle,
            ball,
            blocks,
        }
    }
}
