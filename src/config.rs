//! Game configuration
//!
//! Field dimensions, entity sizes and speeds, bundled into one structure
//! that the simulation holds from construction. Tests build alternate
//! configs instead of reaching for globals.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tuning for one game session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Play area dimensions (pixels)
    pub field_width: f32,
    pub field_height: f32,

    /// Paddle geometry and movement speed (pixels/s)
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    /// Height of the paddle center above the bottom edge
    pub paddle_margin: f32,

    /// Ball geometry and launch velocity
    pub ball_radius: f32,
    pub ball_start_vel: (f32, f32),

    /// Block grid layout
    pub block_width: f32,
    pub block_height: f32,
    pub block_gap: f32,
    pub block_cols: u32,
    pub block_rows: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_margin: PADDLE_MARGIN,
            ball_radius: BALL_RADIUS,
            ball_start_vel: BALL_START_VEL,
            block_width: BLOCK_WIDTH,
            block_height: BLOCK_HEIGHT,
            block_gap: BLOCK_GAP,
            block_cols: BLOCK_COLS,
            block_rows: BLOCK_ROWS,
        }
    }
}

impl Config {
    /// Load config from a JSON file, falling back to defaults.
    ///
    /// A missing file is normal (first run); a malformed one is logged
    /// and ignored. Neither aborts the game.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring malformed config {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }
}
