use std::time::Instant;

use log::info;

use crate::{
    frame_pacer::FramePacer,
    game_state::{GameState, Player, BALL_RADIUS, PADDLE_HEIGHT, PADDLE_WIDTH},
    render::{Colour, InputSource, Point, RenderSurface, Shape, ShapeId, ShapeKind},
    rules::TickOutcome,
    Error, GameConfig,
};

pub const TITLE: &str = "Pong";

const LEFT_SCORE_POS: Point = Point::new(-150, 200);
const RIGHT_SCORE_POS: Point = Point::new(150, 200);

/// handles of everything drawn on the surface.
struct Scene {
    left_paddle: ShapeId,
    right_paddle: ShapeId,
    ball: ShapeId,
    left_score: ShapeId,
    right_score: ShapeId,
}

impl Scene {
    fn draw<S: RenderSurface>(surface: &mut S, state: &GameState) -> Result<Self, Error> {
        let paddle = Shape {
            kind: ShapeKind::Rectangle {
                width: PADDLE_WIDTH,
                height: PADDLE_HEIGHT,
            },
            colour: Colour::White,
        };
        let ball = Shape {
            kind: ShapeKind::Circle { radius: BALL_RADIUS },
            colour: Colour::White,
        };
        let scene = Self {
            left_paddle: surface.create_shape(paddle, paddle_pos(state, Player::Left))?,
            right_paddle: surface.create_shape(paddle, paddle_pos(state, Player::Right))?,
            ball: surface.create_shape(ball, Point::new(state.ball.x, state.ball.y))?,
            left_score: surface.create_text(LEFT_SCORE_POS, &state.scores.left.to_string())?,
            right_score: surface.create_text(RIGHT_SCORE_POS, &state.scores.right.to_string())?,
        };
        Ok(scene)
    }

    fn score(&self, player: Player) -> ShapeId {
        match player {
            Player::Left => self.left_score,
            Player::Right => self.right_score,
        }
    }
}

fn paddle_pos(state: &GameState, player: Player) -> Point {
    let paddle = state.paddle(player);
    Point::new(paddle.x, paddle.y)
}

/// owns the game state and drives it one frame at a time against a surface that both draws the
/// game and supplies its input.
pub struct GameLoop<S> {
    surface: S,
    state: GameState,
    scene: Scene,
    pacer: FramePacer,
    show_fps: bool,
}

impl<S: RenderSurface + InputSource> GameLoop<S> {
    pub fn new(surface: S, config: GameConfig) -> Result<Self, Error> {
        Self::with_state(surface, config, GameState::new())
    }

    pub fn with_state(
        mut surface: S,
        config: GameConfig,
        state: GameState,
    ) -> Result<Self, Error> {
        info!("opening game at {} fps", config.fps);
        surface.set_title(TITLE)?;
        let scene = Scene::draw(&mut surface, &state)?;
        surface.refresh()?;
        Ok(Self {
            surface,
            state,
            scene,
            pacer: FramePacer::new(config.fps, Instant::now()),
            show_fps: config.show_fps,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// runs frames until a quit action arrives, then closes the surface.
    pub fn run(&mut self) -> Result<(), Error> {
        info!("game started");
        while self.state.running {
            self.frame()?;
            self.pace()?;
        }
        self.surface.close()?;
        info!(
            "game over, final score {} - {}",
            self.state.scores.left, self.state.scores.right
        );
        Ok(())
    }

    /// handles pending input, advances the state unless paused and redraws.
    pub fn frame(&mut self) -> Result<TickOutcome, Error> {
        while let Some(action) = self.surface.poll_action()? {
            self.state.apply(action);
        }
        if !self.state.running {
            return Ok(TickOutcome::Frozen);
        }
        let outcome = self.state.tick();
        if let TickOutcome::Goal { scorer, score } = outcome {
            self.surface
                .set_text(self.scene.score(scorer), &score.to_string())?;
        }
        self.sync()?;
        self.surface.refresh()?;
        Ok(outcome)
    }

    fn pace(&mut self) -> Result<(), Error> {
        if let Some(fps) = self.pacer.wait() {
            if self.show_fps {
                self.surface.set_title(&format!("{TITLE} ({fps} fps)"))?;
            }
        }
        Ok(())
    }

    fn sync(&mut self) -> Result<(), Error> {
        let state = &self.state;
        self.surface
            .move_shape(self.scene.left_paddle, paddle_pos(state, Player::Left))?;
        self.surface
            .move_shape(self.scene.right_paddle, paddle_pos(state, Player::Right))?;
        self.surface
            .move_shape(self.scene.ball, Point::new(state.ball.x, state.ball.y))?;
        Ok(())
    }
}
