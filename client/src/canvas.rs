use game::render::{Colour, Point, Shape, ShapeKind};

/// world units covered by one terminal cell. cells are roughly twice as tall as they are wide, so
/// this keeps the field's proportions.
pub const CELL_WIDTH: i32 = 10;
pub const CELL_HEIGHT: i32 = 20;

const BALL_SYMBOL: char = 'o';
const PADDLE_SYMBOL: char = '|';

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Item {
    Shape(Shape, Point),
    Text(String, Point),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub symbol: char,
    pub colour: Colour,
}

/// projects world coordinates onto a grid of terminal cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    cols: u16,
    rows: u16,
    background: Colour,
}

impl Canvas {
    /// a canvas covering a field of `width` by `height` world units centred on the origin.
    pub fn new(width: i32, height: i32, background: Colour) -> Self {
        Self {
            cols: (width / CELL_WIDTH) as u16,
            rows: (height / CELL_HEIGHT) as u16,
            background,
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    fn half_width(&self) -> i32 {
        self.cols as i32 * CELL_WIDTH / 2
    }

    fn half_height(&self) -> i32 {
        self.rows as i32 * CELL_HEIGHT / 2
    }

    /// the cell containing `point`, as (column, row), or `None` if it is off the field.
    pub fn cell_of(&self, point: Point) -> Option<(u16, u16)> {
        let col = (point.x + self.half_width()).div_euclid(CELL_WIDTH);
        let row = (self.half_height() - point.y).div_euclid(CELL_HEIGHT);
        self.clip(col, row)
    }

    fn clip(&self, col: i32, row: i32) -> Option<(u16, u16)> {
        if (0..self.cols as i32).contains(&col) && (0..self.rows as i32).contains(&row) {
            Some((col as u16, row as u16))
        } else {
            None
        }
    }

    fn cell_centre(&self, col: u16, row: u16) -> Point {
        Point::new(
            col as i32 * CELL_WIDTH + CELL_WIDTH / 2 - self.half_width(),
            self.half_height() - row as i32 * CELL_HEIGHT - CELL_HEIGHT / 2,
        )
    }

    pub fn blank(&self) -> Cell {
        Cell {
            symbol: ' ',
            colour: self.background,
        }
    }

    /// draws every item, later items on top of earlier ones.
    pub fn rasterize(&self, items: &[Item]) -> Vec<Vec<Cell>> {
        let mut grid = vec![vec![self.blank(); self.cols as usize]; self.rows as usize];
        for item in items {
            match item {
                Item::Shape(shape, at) => self.draw_shape(&mut grid, shape, *at),
                Item::Text(text, at) => self.draw_text(&mut grid, text, *at),
            }
        }
        grid
    }

    fn draw_shape(&self, grid: &mut [Vec<Cell>], shape: &Shape, at: Point) {
        let symbol = match shape.kind {
            ShapeKind::Rectangle { .. } => PADDLE_SYMBOL,
            ShapeKind::Circle { .. } => BALL_SYMBOL,
        };
        let cell = Cell {
            symbol,
            colour: shape.colour,
        };
        // small shapes still take up the cell they are in.
        if let Some((col, row)) = self.cell_of(at) {
            grid[row as usize][col as usize] = cell;
        }
        for row in 0..self.rows {
            for col in 0..self.cols {
                if covers(shape.kind, at, self.cell_centre(col, row)) {
                    grid[row as usize][col as usize] = cell;
                }
            }
        }
    }

    fn draw_text(&self, grid: &mut [Vec<Cell>], text: &str, at: Point) {
        let Some((col, row)) = self.cell_of(at) else {
            return;
        };
        let len = text.chars().count() as i32;
        let start = col as i32 - len / 2;
        for (offset, symbol) in text.chars().enumerate() {
            if let Some((col, row)) = self.clip(start + offset as i32, row as i32) {
                grid[row as usize][col as usize] = Cell {
                    symbol,
                    colour: Colour::White,
                };
            }
        }
    }
}

/// whether a shape centred on `at` covers `point`. extents are half open so that shapes with even
/// sizes cover a whole number of cells.
fn covers(kind: ShapeKind, at: Point, point: Point) -> bool {
    match kind {
        ShapeKind::Rectangle { width, height } => {
            at.x - width / 2 <= point.x
                && point.x < at.x + width / 2
                && at.y - height / 2 <= point.y
                && point.y < at.y + height / 2
        }
        ShapeKind::Circle { radius } => {
            let (dx, dy) = (point.x - at.x, point.y - at.y);
            dx * dx + dy * dy < radius * radius
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PADDLE: Shape = Shape {
        kind: ShapeKind::Rectangle {
            width: 20,
            height: 100,
        },
        colour: Colour::White,
    };
    const BALL: Shape = Shape {
        kind: ShapeKind::Circle { radius: 1 },
        colour: Colour::White,
    };

    fn canvas() -> Canvas {
        Canvas::new(800, 600, Colour::Black)
    }

    fn symbols(grid: &[Vec<Cell>]) -> Vec<String> {
        grid.iter()
            .map(|row| row.iter().map(|cell| cell.symbol).collect())
            .collect()
    }

    #[test]
    fn grid_size_follows_field() {
        let canvas = canvas();
        assert_eq!((canvas.cols(), canvas.rows()), (80, 30));
    }

    #[test]
    fn projects_corners_and_centre() {
        let canvas = canvas();
        assert_eq!(canvas.cell_of(Point::new(-400, 299)), Some((0, 0)));
        assert_eq!(canvas.cell_of(Point::new(399, -299)), Some((79, 29)));
        assert_eq!(canvas.cell_of(Point::new(0, 0)), Some((40, 15)));
        assert_eq!(canvas.cell_of(Point::new(0, 270)), Some((40, 1)));
    }

    #[test]
    fn clips_points_off_the_field() {
        let canvas = canvas();
        assert_eq!(canvas.cell_of(Point::new(-401, 0)), None);
        assert_eq!(canvas.cell_of(Point::new(400, 0)), None);
        assert_eq!(canvas.cell_of(Point::new(0, 301)), None);
        assert_eq!(canvas.cell_of(Point::new(0, -301)), None);
    }

    #[test]
    fn paddle_covers_two_columns_and_five_rows() {
        let canvas = canvas();
        let grid = canvas.rasterize(&[Item::Shape(PADDLE, Point::new(-350, 0))]);
        let covered: Vec<(usize, usize)> = grid
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .filter(|(_, cell)| cell.symbol == PADDLE_SYMBOL)
                    .map(move |(col, _)| (col, row))
            })
            .collect();
        assert_eq!(covered.len(), 10);
        assert!(covered.iter().all(|(col, _)| (4..=5).contains(col)));
        assert!(covered.iter().all(|(_, row)| (13..=17).contains(row)));
    }

    #[test]
    fn paddle_at_limit_stays_on_screen() {
        let canvas = canvas();
        for y in [240, -240] {
            let grid = canvas.rasterize(&[Item::Shape(PADDLE, Point::new(350, y))]);
            let count = symbols(&grid)
                .iter()
                .map(|row| row.matches(PADDLE_SYMBOL).count())
                .sum::<usize>();
            assert_eq!(count, 10, "paddle at {y}");
        }
    }

    #[test]
    fn ball_takes_one_cell() {
        let canvas = canvas();
        let grid = symbols(&canvas.rasterize(&[Item::Shape(BALL, Point::new(0, 270))]));
        assert_eq!(grid[1].find(BALL_SYMBOL), Some(40));
        assert_eq!(grid.concat().matches(BALL_SYMBOL).count(), 1);
    }

    #[test]
    fn text_is_centred() {
        let canvas = canvas();
        let grid = symbols(&canvas.rasterize(&[
            Item::Text("12".to_owned(), Point::new(-150, 200)),
            Item::Text("3".to_owned(), Point::new(150, 200)),
        ]));
        assert_eq!(&grid[5][24..26], "12");
        assert_eq!(&grid[5][55..56], "3");
    }

    #[test]
    fn later_items_draw_on_top() {
        let canvas = canvas();
        let grid = symbols(&canvas.rasterize(&[
            Item::Shape(PADDLE, Point::new(0, 0)),
            Item::Shape(BALL, Point::new(0, 0)),
        ]));
        assert_eq!(grid[15].chars().nth(40), Some(BALL_SYMBOL));
    }
}
