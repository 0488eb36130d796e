use std::{error::Error as StdError, fmt::Display, io, num::NonZeroU32};

pub mod action;
pub mod frame_pacer;
pub mod game_loop;
pub mod game_state;
pub mod render;
pub mod rules;

pub const DEFAULT_FPS: u32 = 250;
pub const MAX_FPS: u32 = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub fps: NonZeroU32,
    /// show the measured frame rate in the window title.
    pub show_fps: bool,
}

impl GameConfig {
    pub fn new(fps: u32, show_fps: bool) -> Result<Self, Error> {
        if fps > MAX_FPS {
            return Err(Error::InvalidFrameRate(fps));
        }
        let fps = NonZeroU32::new(fps).ok_or(Error::InvalidFrameRate(fps))?;
        Ok(Self { fps, show_fps })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fps: NonZeroU32::new(DEFAULT_FPS).unwrap(),
            show_fps: false,
        }
    }
}

#[derive(Debug)]
pub enum Error {
    InvalidFrameRate(u32),
    Io(io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidFrameRate(fps) => {
                write!(f, "invalid frame rate {fps}, expected 1 to {MAX_FPS}")
            }
            Error::Io(err) => Display::fmt(err, f),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::InvalidFrameRate(_) => None,
            Error::Io(source) => Some(source),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}
