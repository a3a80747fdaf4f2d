//! Brickbreak - a minimal Arkanoid-style block breaker
//!
//! Core modules:
//! - `sim`: simulation (entities, collision resolution, per-frame tick)
//! - `config`: data-driven field and entity tuning

pub mod config;
pub mod sim;

pub use config::Config;

/// Default tuning constants
pub mod consts {
    /// Field dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_SPEED: f32 = 600.0;
    /// Height of the paddle center above the bottom edge
    pub const PADDLE_MARGIN: f32 = 50.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_VEL: (f32, f32) = (-300.0, -300.0);

    /// Block grid defaults
    pub const BLOCK_WIDTH: f32 = 60.0;
    pub const BLOCK_HEIGHT: f32 = 20.0;
    pub const BLOCK_GAP: f32 = 3.0;
    pub const BLOCK_COLS: u32 = 10;
    pub const BLOCK_ROWS: u32 = 5;
}
