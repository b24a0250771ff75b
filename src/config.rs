use std::time::Duration;

use crate::error::{Result, SnakeError};
use crate::TermInt;

const MIN_BOARD_SIDE: TermInt = 5;

/// Game tuning. Board dimensions include the border ring.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: TermInt,
    pub height: TermInt,
    pub initial_length: TermInt,
    pub initial_delay: Duration,
    /// Subtracted from the tick delay every time food is eaten
    pub delay_step: Duration,
    pub min_delay: Duration,
    pub food_reward: u64,
    /// How long the summary screen stays up after the game ends
    pub game_over_hold: Duration,
    /// Random draws in `spawn_food` before falling back to a full scan
    pub spawn_attempts: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config::with_board(40, 15)
    }
}

impl Config {
    pub fn with_board(width: TermInt, height: TermInt) -> Self {
        Config {
            width,
            height,
            initial_length: 2,
            initial_delay: Duration::from_millis(100),
            delay_step: Duration::from_millis(5),
            min_delay: Duration::from_millis(30),
            food_reward: 10,
            game_over_hold: Duration::from_secs(5),
            spawn_attempts: interior_cells(width, height),
        }
    }

    /// Terminal area needed to draw the board plus its status line, as (columns, rows).
    pub fn screen_size(&self) -> (TermInt, TermInt) {
        (self.width, self.height + 1)
    }

    pub fn validate(&self) -> Result {
        if self.width < MIN_BOARD_SIDE || self.height < MIN_BOARD_SIDE {
            return Err(invalid(format!(
                "board must be at least {0}x{0}, got {1}x{2}",
                MIN_BOARD_SIDE, self.width, self.height
            )));
        }

        if self.initial_length < 2 {
            return Err(invalid(format!(
                "initial snake length must be at least 2, got {}",
                self.initial_length
            )));
        }

        // The tail extends left from the center column and must stay off the border.
        if self.initial_length > self.width / 2 {
            return Err(invalid(format!(
                "a snake of length {} does not fit on a board {} wide",
                self.initial_length, self.width
            )));
        }

        if self.min_delay.as_nanos() == 0 {
            return Err(invalid("minimum delay must be positive".to_string()));
        }

        if self.min_delay > self.initial_delay {
            return Err(invalid(format!(
                "minimum delay {:?} exceeds initial delay {:?}",
                self.min_delay, self.initial_delay
            )));
        }

        Ok(())
    }
}

fn interior_cells(width: TermInt, height: TermInt) -> usize {
    width.saturating_sub(2) as usize * height.saturating_sub(2) as usize
}

fn invalid(msg: String) -> SnakeError {
    SnakeError::InvalidConfig(msg)
}
