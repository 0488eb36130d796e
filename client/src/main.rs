use std::{fs::File, io, path::Path, path::PathBuf, process::ExitCode};

use clap::Parser;
use game::{
    game_loop::{GameLoop, TITLE},
    game_state::{GAME_HEIGHT, GAME_WIDTH},
    render::{Colour, WindowSettings},
    Error, GameConfig, DEFAULT_FPS, MAX_FPS,
};
use key_bindings::KeyBindings;
use log::error;
use terminal::TerminalSurface;

mod canvas;
mod key_bindings;
mod terminal;

/// Two player pong in the terminal.
///
/// The left player moves with 'w' and 's', the right player with the arrow keys. 'p' pauses and
/// 'q' quits.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Target frames per second
    #[arg(
        long,
        default_value_t = DEFAULT_FPS,
        value_parser = clap::value_parser!(u32).range(1..=MAX_FPS as i64),
    )]
    fps: u32,
    /// Show the measured frame rate in the title bar
    #[arg(long)]
    show_fps: bool,
    /// Write log output to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = init_logging(cli.log_file.as_deref()) {
        eprintln!("failed to open log file: {err}");
        return ExitCode::FAILURE;
    }
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// the terminal is in raw mode on the alternate screen while the game runs, so logs only go to
/// stderr when explicitly asked for with `RUST_LOG`.
fn init_logging(log_file: Option<&Path>) -> io::Result<()> {
    let default_filter = if log_file.is_some() { "info" } else { "error" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if let Some(path) = log_file {
        builder.target(env_logger::Target::Pipe(Box::new(File::create(path)?)));
    }
    builder.init();
    Ok(())
}

fn run(cli: &Cli) -> Result<(), Error> {
    let config = GameConfig::new(cli.fps, cli.show_fps)?;
    let surface = TerminalSurface::open(window_settings(), KeyBindings::default())?;
    // the surface restores the terminal when the game is dropped, including on errors.
    let mut game = GameLoop::new(surface, config)?;
    game.run()
}

fn window_settings() -> WindowSettings {
    WindowSettings {
        title: TITLE.to_owned(),
        width: GAME_WIDTH,
        height: GAME_HEIGHT,
        background: Colour::Black,
    }
}
