//! Pairwise collision resolution
//!
//! Pure functions over entity pairs. Effects are limited to the ball's
//! velocity and, for blocks, the destroyed flag; overlap tests never
//! fail, they just evaluate false.

use super::state::{Ball, Block, Paddle};

/// Paddle/ball response.
///
/// The vertical velocity flips unconditionally (the ball always bounces
/// upward, regardless of approach angle) and the horizontal velocity is
/// steered away from the paddle center: striking the left half sends the
/// ball left, the right half sends it right, magnitude preserved. Arcade
/// steering, not reflection by angle of incidence.
pub fn paddle_ball(paddle: &Paddle, ball: &mut Ball) {
    if !paddle.bounds().intersects(&ball.bounds()) {
        return;
    }

    ball.vel.y = -ball.vel.y;
    if ball.pos.x < paddle.pos.x {
        ball.vel.x = -ball.vel.x.abs();
    } else {
        ball.vel.x = ball.vel.x.abs();
    }
}

/// Block/ball response.
///
/// Destroyed blocks are skipped entirely. On overlap the block is marked
/// destroyed and the vertical velocity flips; the horizontal component is
/// untouched. Each overlapping block in a frame flips the vertical
/// velocity independently, so two simultaneous hits cancel out.
pub fn block_ball(block: &mut Block, ball: &mut Ball) {
    if block.destroyed || !block.bounds().intersects(&ball.bounds()) {
        return;
    }

    block.destroyed = true;
    ball.vel.y = -ball.vel.y;
}
