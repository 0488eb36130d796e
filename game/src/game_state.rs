pub const GAME_WIDTH: i32 = 800;
pub const GAME_HEIGHT: i32 = 600;

pub const PADDLE_WIDTH: i32 = 20;
pub const PADDLE_HEIGHT: i32 = 100;
pub const LEFT_PADDLE_X: i32 = -350;
pub const RIGHT_PADDLE_X: i32 = 350;
/// furthest a paddle's centre may travel from the middle of the field.
pub const PADDLE_LIMIT: i32 = 240;
/// distance a paddle jumps per key press.
pub const PADDLE_STEP: i32 = 30;

/// distance the ball travels along each axis per tick.
pub const BALL_STEP: i32 = 1;
pub const BALL_RADIUS: i32 = 1;
/// the ball's vertical direction flips when its y coordinate is exactly this far from the centre.
pub const BALL_BOUNCE_Y: i32 = 285;
pub const BALL_SERVE_X: i32 = 0;
pub const BALL_SERVE_Y: i32 = 270;

/// half extents of the box around a paddle's centre within which the ball is deflected.
pub const COLLISION_HALF_WIDTH: i32 = 20;
pub const COLLISION_HALF_HEIGHT: i32 = 50;
/// how far behind a paddle the ball has to be before it counts as a goal.
pub const GOAL_DISTANCE: i32 = 40;

const _CHECKS: () = {
    assert!(
        BALL_BOUNCE_Y % BALL_STEP == 0 && BALL_SERVE_Y % BALL_STEP == 0,
        "the ball must land exactly on the bounce line, otherwise it would never change vertical direction"
    );
    assert!(
        BALL_SERVE_X % BALL_STEP == 0,
        "the ball must be served from a coordinate reachable by whole steps"
    );
    assert!(
        BALL_BOUNCE_Y < GAME_HEIGHT / 2,
        "the ball would leave the field before bouncing"
    );
    assert!(
        PADDLE_LIMIT % PADDLE_STEP == 0,
        "paddles must be able to reach their limits in whole steps"
    );
    assert!(
        PADDLE_LIMIT + PADDLE_HEIGHT / 2 <= GAME_HEIGHT / 2,
        "a paddle at its limit would stick out of the field"
    );
    assert!(
        BALL_STEP < COLLISION_HALF_WIDTH,
        "the ball would step over a paddle's collision box in a single tick"
    );
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Left,
    Right,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Left => Player::Right,
            Player::Right => Player::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalDirection {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalDirection {
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paddle {
    pub x: i32,
    pub y: i32,
}

impl Paddle {
    pub fn new(x: i32) -> Self {
        Self { x, y: 0 }
    }

    /// returns whether the paddle moved.
    pub fn move_up(&mut self) -> bool {
        if self.y >= PADDLE_LIMIT {
            return false;
        }
        self.y = (self.y + PADDLE_STEP).min(PADDLE_LIMIT);
        true
    }

    /// returns whether the paddle moved.
    pub fn move_down(&mut self) -> bool {
        if self.y <= -PADDLE_LIMIT {
            return false;
        }
        self.y = (self.y - PADDLE_STEP).max(-PADDLE_LIMIT);
        true
    }

    pub fn reset(&mut self) {
        self.y = 0;
    }

    /// whether the point lies strictly inside this paddle's collision box.
    pub fn deflects(&self, x: i32, y: i32) -> bool {
        self.x - COLLISION_HALF_WIDTH < x
            && x < self.x + COLLISION_HALF_WIDTH
            && self.y - COLLISION_HALF_HEIGHT < y
            && y < self.y + COLLISION_HALF_HEIGHT
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ball {
    pub x: i32,
    pub y: i32,
    pub dir_x: HorizontalDirection,
    pub dir_y: VerticalDirection,
}

impl Ball {
    /// a ball at the serve position heading down and toward `dir_x`.
    pub fn serve(dir_x: HorizontalDirection) -> Self {
        Self {
            x: BALL_SERVE_X,
            y: BALL_SERVE_Y,
            dir_x,
            dir_y: VerticalDirection::Down,
        }
    }

    pub fn advance(&mut self) {
        match self.dir_x {
            HorizontalDirection::Left => self.x -= BALL_STEP,
            HorizontalDirection::Right => self.x += BALL_STEP,
        }
        match self.dir_y {
            VerticalDirection::Down => self.y -= BALL_STEP,
            VerticalDirection::Up => self.y += BALL_STEP,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scores {
    pub left: u32,
    pub right: u32,
}

impl Scores {
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::Left => self.left,
            Player::Right => self.right,
        }
    }

    pub(crate) fn increment(&mut self, player: Player) -> u32 {
        let score = match player {
            Player::Left => &mut self.left,
            Player::Right => &mut self.right,
        };
        *score = score.saturating_add(1);
        *score
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
    pub scores: Scores,
    pub running: bool,
    pub paused: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            left_paddle: Paddle::new(LEFT_PADDLE_X),
            right_paddle: Paddle::new(RIGHT_PADDLE_X),
            ball: Ball::serve(HorizontalDirection::Left),
            scores: Scores::default(),
            running: true,
            paused: false,
        }
    }

    pub fn paddle(&self, player: Player) -> &Paddle {
        match player {
            Player::Left => &self.left_paddle,
            Player::Right => &self.right_paddle,
        }
    }

    pub fn paddle_mut(&mut self, player: Player) -> &mut Paddle {
        match player {
            Player::Left => &mut self.left_paddle,
            Player::Right => &mut self.right_paddle,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
