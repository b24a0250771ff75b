use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyModifiers};

use crate::error::Result;
use crate::snake::Direction;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Pause,
    Quit,
}

impl Command {
    pub fn direction(self) -> Option<Direction> {
        match self {
            Command::MoveUp => Some(Direction::Up),
            Command::MoveDown => Some(Direction::Down),
            Command::MoveLeft => Some(Direction::Left),
            Command::MoveRight => Some(Direction::Right),
            Command::Pause | Command::Quit => None,
        }
    }

    pub fn from_key_event(ev: &KeyEvent) -> Option<Command> {
        if is_ctrl_c(ev) {
            return Some(Command::Quit);
        }

        match ev.code {
            KeyCode::Char('w') | KeyCode::Up => Some(Command::MoveUp),
            KeyCode::Char('a') | KeyCode::Left => Some(Command::MoveLeft),
            KeyCode::Char('s') | KeyCode::Down => Some(Command::MoveDown),
            KeyCode::Char('d') | KeyCode::Right => Some(Command::MoveRight),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
            KeyCode::Char('p') | KeyCode::Esc => Some(Command::Pause),
            _ => None,
        }
    }
}

/// Source of player commands. `poll` must never block.
pub trait InputSource {
    fn poll(&mut self) -> Result<Option<Command>>;
}

/// Reads the crossterm event queue. Needs the terminal in raw mode.
#[derive(Default)]
pub struct Keyboard;

impl InputSource for Keyboard {
    fn poll(&mut self) -> Result<Option<Command>> {
        let mut keys = vec![];

        while poll(Duration::from_millis(0))? {
            if let Event::Key(ev) = read()? {
                keys.push(ev);
            }
        }

        Ok(pick_command(&keys))
    }
}

/// Collapses everything typed since the last tick into one command: quitting
/// beats everything, then pausing, otherwise the latest key wins. Moves typed
/// in the same tick as a pause toggle are dropped.
pub fn pick_command(keys: &[KeyEvent]) -> Option<Command> {
    let commands: Vec<Command> = keys.iter().filter_map(Command::from_key_event).collect();

    for urgent in [Command::Quit, Command::Pause].iter() {
        if commands.contains(urgent) {
            return Some(*urgent);
        }
    }

    commands.last().copied()
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
