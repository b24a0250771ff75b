use std::io::{stdout, Stdout, Write};

use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style, terminal};
use tracing::debug;

use crate::error::{Result, SnakeError};
use crate::frame::Frame;
use crate::state::{Outcome, Snapshot};
use crate::TermInt;

/// Draws frames somewhere. Each call replaces whatever was shown before.
pub trait Renderer {
    fn render(&mut self, snap: &Snapshot) -> Result;

    fn render_summary(&mut self, width: TermInt, score: u64, outcome: Outcome) -> Result;
}

pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(TermManager { width, height, stdout: stdout() })
    }

    pub fn get_terminal_size(&self) -> (TermInt, TermInt) {
        (self.width, self.height)
    }

    /// Fails unless the terminal has at least `needed` (columns, rows).
    pub fn ensure_fits(&self, needed: (TermInt, TermInt)) -> Result {
        let actual = self.get_terminal_size();
        if actual.0 < needed.0 || actual.1 < needed.1 {
            return Err(SnakeError::TerminalTooSmall { needed, actual });
        }
        Ok(())
    }

    pub fn setup(&mut self) -> Result {
        debug!(width = self.width, height = self.height, "entering raw mode");
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result {
        debug!("restoring terminal");
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Clears the screen and writes the frame from the top-left corner.
    pub fn draw(&mut self, frame: &Frame) -> Result {
        queue!(self.stdout, terminal::Clear(ClearType::All))?;

        for (y, line) in frame.rows().iter().enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, y as TermInt), style::Print(line))?;
        }

        self.stdout.flush()?;
        Ok(())
    }
}

impl Renderer for TermManager {
    fn render(&mut self, snap: &Snapshot) -> Result {
        self.draw(&Frame::compose(snap))
    }

    fn render_summary(&mut self, width: TermInt, score: u64, outcome: Outcome) -> Result {
        self.draw(&Frame::summary(width, score, outcome))
    }
}
