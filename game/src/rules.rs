use log::info;

use crate::game_state::{
    Ball, GameState, HorizontalDirection, Player, VerticalDirection, BALL_BOUNCE_Y, GOAL_DISTANCE,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// nothing moved because the game is paused or no longer running.
    Frozen,
    Moved,
    Goal { scorer: Player, score: u32 },
}

impl GameState {
    /// advances the game by one frame.
    ///
    /// directions are decided from the ball's position at the start of the frame, then the ball
    /// takes one step. the goal check also uses the position at the start of the frame, so the ball
    /// is always drawn at least once beyond the goal line before being served again.
    pub fn tick(&mut self) -> TickOutcome {
        if self.paused || !self.running {
            return TickOutcome::Frozen;
        }
        let Ball { x, y, .. } = self.ball;
        self.ball.dir_x = self.horizontal_direction(x, y);
        self.ball.dir_y = vertical_direction(y, self.ball.dir_y);
        self.ball.advance();
        match self.scorer(x) {
            Some(scorer) => {
                let score = self.scores.increment(scorer);
                info!(
                    "{scorer:?} scored, {} - {}",
                    self.scores.left, self.scores.right
                );
                self.ball = Ball::serve(serve_towards(scorer.opponent()));
                self.left_paddle.reset();
                self.right_paddle.reset();
                TickOutcome::Goal { scorer, score }
            }
            None => TickOutcome::Moved,
        }
    }

    fn horizontal_direction(&self, x: i32, y: i32) -> HorizontalDirection {
        if self.right_paddle.deflects(x, y) {
            HorizontalDirection::Left
        } else if self.left_paddle.deflects(x, y) {
            HorizontalDirection::Right
        } else {
            self.ball.dir_x
        }
    }

    fn scorer(&self, x: i32) -> Option<Player> {
        if x < self.left_paddle.x - GOAL_DISTANCE {
            Some(Player::Right)
        } else if x > self.right_paddle.x + GOAL_DISTANCE {
            Some(Player::Left)
        } else {
            None
        }
    }
}

/// the bounce lines are matched exactly. this only works because the ball moves in whole unit
/// steps from a serve position on the step grid, which `game_state` checks at compile time.
fn vertical_direction(y: i32, current: VerticalDirection) -> VerticalDirection {
    if y == BALL_BOUNCE_Y {
        VerticalDirection::Down
    } else if y == -BALL_BOUNCE_Y {
        VerticalDirection::Up
    } else {
        current
    }
}

fn serve_towards(player: Player) -> HorizontalDirection {
    match player {
        Player::Left => HorizontalDirection::Left,
        Player::Right => HorizontalDirection::Right,
    }
}
