use std::io;

use crate::action::Action;

pub type ShapeId = usize;

/// a position in world coordinates. the origin is the centre of the field and y grows upward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Colour {
    Black,
    White,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle { width: i32, height: i32 },
    Circle { radius: i32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub colour: Colour,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowSettings {
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub background: Colour,
}

/// a retained drawing surface. shapes and text are created once and then moved or rewritten, and
/// nothing is guaranteed to be visible until [`RenderSurface::refresh`] is called.
pub trait RenderSurface {
    fn create_shape(&mut self, shape: Shape, at: Point) -> io::Result<ShapeId>;

    fn move_shape(&mut self, id: ShapeId, to: Point) -> io::Result<()>;

    /// text is centred horizontally on `at`.
    fn create_text(&mut self, at: Point, text: &str) -> io::Result<ShapeId>;

    fn set_text(&mut self, id: ShapeId, text: &str) -> io::Result<()>;

    fn set_title(&mut self, title: &str) -> io::Result<()>;

    fn refresh(&mut self) -> io::Result<()>;

    /// closing an already closed surface does nothing.
    fn close(&mut self) -> io::Result<()>;
}

/// a non-blocking source of player input.
pub trait InputSource {
    /// returns the next pending action, or `None` when no input is waiting.
    fn poll_action(&mut self) -> io::Result<Option<Action>>;
}
