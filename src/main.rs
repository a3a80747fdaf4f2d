//! Brickbreak entry point
//!
//! Thin ggez host: owns the window, polls the keyboard, measures frame
//! time and submits draw calls for the simulation's geometry. All
//! gameplay lives in `brickbreak::sim`.

use ggez::event::{self, EventHandler};
use ggez::graphics::{Canvas, Color, DrawMode, DrawParam, Mesh, Rect};
use ggez::input::keyboard::KeyCode;
use ggez::{conf, Context, ContextBuilder, GameResult};

use brickbreak::sim::{tick, GamePhase, GameState, TickInput};
use brickbreak::Config;

/// Host-side state: the simulation plus one mesh per entity shape.
///
/// Meshes are built once around the origin and positioned per draw call;
/// the simulation carries no drawable state.
struct HostState {
    game: GameState,
    paddle_mesh: Mesh,
    ball_mesh: Mesh,
    block_mesh: Mesh,
}

impl HostState {
    fn new(ctx: &mut Context, config: Config) -> GameResult<Self> {
        let paddle_mesh = Mesh::new_rectangle(
            ctx,
            DrawMode::fill(),
            Rect::new(
                -config.paddle_width / 2.0,
                -config.paddle_height / 2.0,
                config.paddle_width,
                config.paddle_height,
            ),
            Color::RED,
        )?;
        let ball_mesh = Mesh::new_circle(
            ctx,
            DrawMode::fill(),
            [0.0, 0.0],
            config.ball_radius,
            0.5,
            Color::WHITE,
        )?;
        let block_mesh = Mesh::new_rectangle(
            ctx,
            DrawMode::fill(),
            Rect::new(
                -config.block_width / 2.0,
                -config.block_height / 2.0,
                config.block_width,
                config.block_height,
            ),
            Color::BLUE,
        )?;

        Ok(Self {
            game: GameState::new(config),
            paddle_mesh,
            ball_mesh,
            block_mesh,
        })
    }
}

impl EventHandler for HostState {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let dt = ctx.time.delta().as_secs_f32();
        let input = TickInput {
            left: ctx.keyboard.is_key_pressed(KeyCode::Left),
            right: ctx.keyboard.is_key_pressed(KeyCode::Right),
        };

        tick(&mut self.game, &input, dt);

        if self.game.phase == GamePhase::Ended {
            ctx.request_quit();
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = Canvas::from_frame(ctx, Color::BLACK);

        canvas.draw(
            &self.paddle_mesh,
            DrawParam::default().dest([self.game.paddle.pos.x, self.game.paddle.pos.y]),
        );
        canvas.draw(
            &self.ball_mesh,
            DrawParam::default().dest([self.game.ball.pos.x, self.game.ball.pos.y]),
        );
        for block in self.game.blocks.iter().filter(|b| !b.destroyed) {
            canvas.draw(
                &self.block_mesh,
                DrawParam::default().dest([block.pos.x, block.pos.y]),
            );
        }

        canvas.finish(ctx)
    }
}

fn main() -> GameResult {
    env_logger::init();

    let config = Config::load("brickbreak.json");
    log::info!(
        "Brickbreak starting ({}x{} field, {}x{} blocks)",
        config.field_width,
        config.field_height,
        config.block_cols,
        config.block_rows
    );

    let (mut ctx, event_loop) = ContextBuilder::new("brickbreak", "brickbreak")
        .window_setup(conf::WindowSetup::default().title("Brickbreak"))
        .window_mode(conf::WindowMode::default().dimensions(config.field_width, config.field_height))
        .build()?;

    let state = HostState::new(&mut ctx, config)?;
    event::run(ctx, event_loop, state)
}
