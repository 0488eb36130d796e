use std::{
    io::{self, stdout, Stdout, Write},
    time::Duration,
};

use crossterm::{
    cursor::{self, MoveTo, MoveToNextLine},
    event::{self, Event},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, disable_raw_mode, enable_raw_mode, Clear, ClearType, SetTitle},
};
use game::{
    action::Action,
    render::{Colour, InputSource, Point, RenderSurface, Shape, ShapeId, WindowSettings},
};
use log::{debug, warn};

use crate::{
    canvas::{Canvas, Item},
    key_bindings::KeyBindings,
};

/// a render surface drawing into a terminal with crossterm. the field is framed by a title line
/// and a barrier above and below it.
pub struct TerminalSurface<W: Write> {
    out: W,
    canvas: Canvas,
    items: Vec<Item>,
    title: String,
    bindings: KeyBindings,
    raw_mode: bool,
    closed: bool,
}

impl TerminalSurface<Stdout> {
    /// switches the terminal to raw mode on the alternate screen and draws an empty window.
    pub fn open(settings: WindowSettings, bindings: KeyBindings) -> io::Result<Self> {
        let mut surface = Self::new(stdout(), settings, bindings);
        let (cols, rows) = terminal::size()?;
        let (needed_cols, needed_rows) = surface.size();
        if cols < needed_cols || rows < needed_rows {
            warn!(
                "terminal is {cols}x{rows}, the game needs {needed_cols}x{needed_rows} to be fully visible"
            );
        }
        enable_raw_mode()?;
        surface.raw_mode = true;
        execute!(
            surface.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            Clear(ClearType::All),
            MoveTo(0, 0)
        )?;
        let title = surface.title.clone();
        surface.set_title(&title)?;
        surface.refresh()?;
        Ok(surface)
    }
}

impl<W: Write> TerminalSurface<W> {
    /// a surface writing to `out` that leaves the terminal mode alone.
    pub fn new(out: W, settings: WindowSettings, bindings: KeyBindings) -> Self {
        Self {
            out,
            canvas: Canvas::new(settings.width, settings.height, settings.background),
            items: Vec::new(),
            title: settings.title,
            bindings,
            raw_mode: false,
            closed: false,
        }
    }

    /// columns and rows taken up on screen, including the title line and barriers.
    pub fn size(&self) -> (u16, u16) {
        (self.canvas.cols(), self.canvas.rows() + 3)
    }

    fn item_mut(&mut self, id: ShapeId) -> io::Result<&mut Item> {
        self.items.get_mut(id).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, format!("unknown shape {id}"))
        })
    }

    fn draw_title(&mut self) -> io::Result<()> {
        let width = self.canvas.cols() as usize;
        let title: String = self.title.chars().take(width).collect();
        queue!(
            self.out,
            MoveTo(0, 0),
            Clear(ClearType::CurrentLine),
            Print(format!("{title:^width$}")),
            MoveToNextLine(1)
        )
    }

    fn draw_barrier(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            Print("-".repeat(self.canvas.cols() as usize)),
            MoveToNextLine(1)
        )
    }
}

impl<W: Write> RenderSurface for TerminalSurface<W> {
    fn create_shape(&mut self, shape: Shape, at: Point) -> io::Result<ShapeId> {
        self.items.push(Item::Shape(shape, at));
        Ok(self.items.len() - 1)
    }

    fn move_shape(&mut self, id: ShapeId, to: Point) -> io::Result<()> {
        match self.item_mut(id)? {
            Item::Shape(_, at) | Item::Text(_, at) => *at = to,
        }
        Ok(())
    }

    fn create_text(&mut self, at: Point, text: &str) -> io::Result<ShapeId> {
        self.items.push(Item::Text(text.to_owned(), at));
        Ok(self.items.len() - 1)
    }

    fn set_text(&mut self, id: ShapeId, text: &str) -> io::Result<()> {
        match self.item_mut(id)? {
            Item::Text(current, _) => {
                current.clear();
                current.push_str(text);
                Ok(())
            }
            Item::Shape(..) => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("shape {id} is not text"),
            )),
        }
    }

    fn set_title(&mut self, title: &str) -> io::Result<()> {
        title.clone_into(&mut self.title);
        queue!(self.out, SetTitle(title))
    }

    fn refresh(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        let grid = self.canvas.rasterize(&self.items);
        self.draw_title()?;
        self.draw_barrier()?;
        let background = colour(self.canvas.blank().colour);
        for row in grid {
            queue!(self.out, SetBackgroundColor(background))?;
            let mut current = None;
            for cell in row {
                if current != Some(cell.colour) {
                    queue!(self.out, SetForegroundColor(colour(cell.colour)))?;
                    current = Some(cell.colour);
                }
                queue!(self.out, Print(cell.symbol))?;
            }
            queue!(self.out, ResetColor, MoveToNextLine(1))?;
        }
        self.draw_barrier()?;
        self.out.flush()
    }

    fn close(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        if self.raw_mode {
            self.raw_mode = false;
            disable_raw_mode()?;
            execute!(self.out, terminal::LeaveAlternateScreen, cursor::Show)?;
        }
        debug!("terminal surface closed");
        Ok(())
    }
}

impl<W: Write> InputSource for TerminalSurface<W> {
    fn poll_action(&mut self) -> io::Result<Option<Action>> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key_event) = event::read()? {
                if let Some(action) = self.bindings.action_for(&key_event) {
                    return Ok(Some(action));
                }
            }
        }
        Ok(None)
    }
}

impl<W: Write> Drop for TerminalSurface<W> {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            warn!("failed to restore terminal: {err}");
        }
    }
}

fn colour(colour: Colour) -> Color {
    match colour {
        Colour::Black => Color::Black,
        Colour::White => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use game::render::ShapeKind;

    use super::*;

    fn surface() -> TerminalSurface<Vec<u8>> {
        TerminalSurface::new(
            Vec::new(),
            WindowSettings {
                title: "PONG".to_owned(),
                width: 800,
                height: 600,
                background: Colour::Black,
            },
            KeyBindings::default(),
        )
    }

    fn output(mut surface: TerminalSurface<Vec<u8>>) -> String {
        String::from_utf8(std::mem::take(&mut surface.out)).unwrap()
    }

    #[test]
    fn frames_the_field() {
        assert_eq!(surface().size(), (80, 33));
    }

    #[test]
    fn refresh_draws_title_barriers_and_items() {
        let mut surface = surface();
        surface
            .create_shape(
                Shape {
                    kind: ShapeKind::Circle { radius: 1 },
                    colour: Colour::White,
                },
                Point::new(0, 0),
            )
            .unwrap();
        let score = surface.create_text(Point::new(-150, 200), "0").unwrap();
        surface.set_text(score, "7").unwrap();
        surface.refresh().unwrap();
        let output = output(surface);
        assert!(output.contains("PONG"));
        assert_eq!(output.matches(&"-".repeat(80)).count(), 2);
        assert_eq!(output.matches('o').count(), 1);
        assert!(output.contains('7'));
    }

    #[test]
    fn rejects_unknown_or_mismatched_ids() {
        let mut surface = surface();
        assert!(surface.move_shape(3, Point::new(0, 0)).is_err());
        let ball = surface
            .create_shape(
                Shape {
                    kind: ShapeKind::Circle { radius: 1 },
                    colour: Colour::White,
                },
                Point::new(0, 0),
            )
            .unwrap();
        assert!(surface.set_text(ball, "1").is_err());
        assert!(surface.move_shape(ball, Point::new(10, 10)).is_ok());
    }

    #[test]
    fn close_is_idempotent_and_stops_drawing() {
        let mut surface = surface();
        surface.close().unwrap();
        surface.close().unwrap();
        surface.refresh().unwrap();
        assert!(output(surface).is_empty());
    }

    #[test]
    fn set_title_updates_title_line() {
        let mut surface = surface();
        surface.set_title("Pong (250 fps)").unwrap();
        surface.refresh().unwrap();
        assert!(output(surface).contains("Pong (250 fps)"));
    }
}
