//! Per-frame simulation step
//!
//! The host measures elapsed time and samples input once per frame; the
//! tick applies paddle movement, ball physics, collision resolution and
//! the terminal check in a fixed order.

use super::collision;
use super::state::{GamePhase, GameState};

/// Input flags for a single frame.
///
/// Both directions may be held at once; both are applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

/// Advance the session by one frame of `dt` seconds.
///
/// Order per frame: paddle movement, ball integration and wall response,
/// paddle/ball resolution, then a scan over every block in collection
/// order. The session ends when the ball's bottom edge passes below the
/// field; `Ended` is terminal and later calls mutate nothing. Destroying
/// every block does not end the session.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase == GamePhase::Ended {
        return;
    }

    let field_width = state.config.field_width;
    if input.left {
        state.paddle.slide(-1.0, dt, field_width);
    }
    if input.right {
        state.paddle.slide(1.0, dt, field_width);
    }

    state.ball.update(dt, field_width);

    collision::paddle_ball(&state.paddle, &mut state.ball);
    for block in &mut state.blocks {
        collision::block_ball(block, &mut state.ball);
    }

    if state.ball.bottom() > state.config.field_height {
        log::info!("Ball out at x={:.1}, session over", state.ball.pos.x);
        state.phase = GamePhase::Ended;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sim::state::Block;
    use glam::Vec2;

    fn default_state() -> GameState {
        GameState::new(Config::default())
    }

    #[test]
    fn test_top_wall_bounce_end_to_end() {
        // Ball at field center heading up-left; one second puts its top
        // edge past 0 before either side wall
        let mut state = default_state();
        assert_eq!(state.ball.vel, Vec2::new(-300.0, -300.0));

        tick(&mut state, &TickInput::default(), 1.0);

        assert_eq!(state.ball.vel, Vec2::new(-300.0, 300.0));
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_block_hit_end_to_end() {
        let mut state = default_state();
        state.blocks.clear();
        state.ball.pos = Vec2::new(400.0, 200.0);
        state.ball.vel = Vec2::new(0.0, -300.0);
        state
            .blocks
            .push(Block::new(state.ball.pos, Vec2::new(60.0, 20.0)));

        // Zero elapsed time isolates the resolution pass
        tick(&mut state, &TickInput::default(), 0.0);
        assert!(state.blocks[0].destroyed);
        assert_eq!(state.ball.vel, Vec2::new(0.0, 300.0));

        // The destroyed block is skipped on the next frame
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.ball.vel, Vec2::new(0.0, 300.0));
    }

    #[test]
    fn test_two_block_overlap_double_negation() {
        // Two blocks overlapping the ball in the same frame each flip the
        // vertical velocity, cancelling out. Observed behavior, kept.
        let mut state = default_state();
        state.blocks.clear();
        state.ball.pos = Vec2::new(400.0, 200.0);
        state.ball.vel = Vec2::new(100.0, -300.0);
        state
            .blocks
            .push(Block::new(Vec2::new(395.0, 200.0), Vec2::new(60.0, 20.0)));
        state
            .blocks
            .push(Block::new(Vec2::new(405.0, 200.0), Vec2::new(60.0, 20.0)));

        tick(&mut state, &TickInput::default(), 0.0);

        assert!(state.blocks.iter().all(|b| b.destroyed));
        assert_eq!(state.ball.vel, Vec2::new(100.0, -300.0));
    }

    #[test]
    fn test_ball_below_field_ends_session() {
        let mut state = default_state();
        let field_height = state.config.field_height;
        state.ball.pos = Vec2::new(400.0, field_height + state.ball.radius + 1.0);

        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.phase, GamePhase::Ended);

        // Terminal: a further frame with input and time mutates nothing
        let ball_pos = state.ball.pos;
        let paddle_pos = state.paddle.pos;
        tick(
            &mut state,
            &TickInput {
                left: true,
                right: false,
            },
            1.0,
        );
        assert_eq!(state.phase, GamePhase::Ended);
        assert_eq!(state.ball.pos, ball_pos);
        assert_eq!(state.paddle.pos, paddle_pos);
    }

    #[test]
    fn test_both_directions_apply() {
        // Near the left edge the leftward move clamps, so applying both
        // directions is distinguishable from applying neither
        let mut state = default_state();
        state.paddle.pos.x = 60.0;

        tick(
            &mut state,
            &TickInput {
                left: true,
                right: true,
            },
            0.1,
        );
        // Left: 60 - 60 clamps to 50; right: 50 + 60 = 110
        assert_eq!(state.paddle.pos.x, 110.0);
    }

    #[test]
    fn test_clearing_all_blocks_keeps_running() {
        let mut state = default_state();
        for block in &mut state.blocks {
            block.destroyed = true;
        }

        tick(&mut state, &TickInput::default(), 0.01);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_paddle_deflection_end_to_end() {
        let mut state = default_state();
        state.blocks.clear();
        // Ball overlapping the left half of the paddle, moving down-right
        state.ball.pos = Vec2::new(state.paddle.pos.x - 20.0, state.paddle.pos.y - 5.0);
        state.ball.vel = Vec2::new(200.0, 300.0);

        tick(&mut state, &TickInput::default(), 0.0);

        assert!(state.ball.vel.x < 0.0);
        assert_eq!(state.ball.vel.y, -300.0);
    }
}
