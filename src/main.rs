mod config;
mod error;
mod frame;
mod game;
mod input;
mod logging;
mod snake;
mod state;
mod term;

use std::process::exit;

use tracing::{error, info};

use crate::config::Config;
use crate::error::Result;
use crate::game::SnakeGame;
use crate::input::Keyboard;
use crate::state::GameState;
use crate::term::TermManager;

pub type TermInt = u16;
/// `(row, col)`, row 0 at the top
pub type Cell = (TermInt, TermInt);

fn main() {
    if let Err(e) = run() {
        error!(error = %e, "exiting with error");
        eprintln!("snake: {}", e);
        exit(1);
    }
}

fn run() -> Result {
    if logging::init()? {
        info!("logging enabled");
    }

    let config = Config::default();
    let mut state = GameState::new(config.clone())?;

    let term = TermManager::new()?;
    term.ensure_fits(config.screen_size())?;

    let mut game = SnakeGame::new(Keyboard, term);

    // The terminal goes back to normal before any error is reported.
    let res = game.renderer_mut().setup().and_then(|_| game.play(&mut state));
    let restored = game.renderer_mut().restore();

    let summary = res?;
    restored?;
    info!(outcome = ?summary.outcome, score = summary.score, "bye");
    Ok(())
}
