use std::cmp::max;
use std::collections::VecDeque;
use std::time::Duration;

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{Result, SnakeError};
use crate::snake::{Direction, Snake};
use crate::{Cell, TermInt};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepResult {
    Continue,
    GameOver,
    /// Food was eaten and no free cell is left to put the next one on
    BoardFull,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Crashed,
    BoardFull,
    Quit,
}

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug)]
pub struct Snapshot<'a> {
    pub width: TermInt,
    pub height: TermInt,
    pub snake: &'a VecDeque<Cell>,
    pub food: Option<Cell>,
    pub score: u64,
    pub delay: Duration,
    pub paused: bool,
}

pub struct GameState<R = ThreadRng> {
    config: Config,
    rng: R,
    snake: Snake,
    food: Option<Cell>,
    score: u64,
    delay: Duration,
    ended: Option<Outcome>,
}

impl GameState<ThreadRng> {
    pub fn new(config: Config) -> Result<Self> {
        GameState::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GameState<R> {
    /// Starts a game with the snake centered and heading right.
    pub fn with_rng(config: Config, rng: R) -> Result<Self> {
        let center = (config.height / 2, config.width / 2);
        let snake = Snake::new(center, config.initial_length, Direction::Right);
        GameState::with_snake(config, rng, snake)
    }

    pub fn with_snake(config: Config, rng: R, snake: Snake) -> Result<Self> {
        config.validate()?;

        if snake.len() == 0 {
            return Err(SnakeError::InvalidConfig("snake has no cells".to_string()));
        }

        let body = snake.body();
        if let Some(cell) = body.iter().enumerate().find(|(i, c)| body.iter().skip(i + 1).any(|o| o == *c)).map(|(_, c)| c) {
            return Err(SnakeError::InvalidConfig(format!("snake covers cell {:?} twice", cell)));
        }

        let delay = config.initial_delay;
        let mut state = GameState { config, rng, snake, food: None, score: 0, delay, ended: None };

        if let Some(cell) = state.snake.body().iter().find(|c| !state.is_interior(**c)) {
            return Err(SnakeError::InvalidConfig(format!("snake cell {:?} is off the playing field", cell)));
        }

        state.food = state.spawn_food();
        if state.food.is_none() {
            return Err(SnakeError::InvalidConfig("no room left for food".to_string()));
        }

        Ok(state)
    }

    pub fn set_direction(&mut self, requested: Direction) {
        self.snake.set_direction(requested);
    }

    /// Advances the game by one tick. Once the game has ended this keeps
    /// returning the final result without touching the state.
    pub fn step(&mut self) -> StepResult {
        match self.ended {
            Some(Outcome::BoardFull) => return StepResult::BoardFull,
            Some(_) => return StepResult::GameOver,
            None => {}
        }

        let new_head = match self.snake.next_head() {
            Some(cell) if self.is_interior(cell) => cell,
            _ => return self.end(Outcome::Crashed),
        };

        // The tail has not moved yet, so running into it still counts.
        if self.snake.contains(&new_head) {
            return self.end(Outcome::Crashed);
        }

        self.snake.push_head(new_head);

        if self.food == Some(new_head) {
            self.score += self.config.food_reward;
            self.delay = max(self.delay.saturating_sub(self.config.delay_step), self.config.min_delay);
            debug!(score = self.score, length = self.snake.len(), delay = ?self.delay, "food eaten");

            self.food = self.spawn_food();
            if self.food.is_none() {
                return self.end(Outcome::BoardFull);
            }
        } else {
            self.snake.pop_tail();
        }

        StepResult::Continue
    }

    /// Picks a free interior cell for the next piece of food. Random draws
    /// first, then a scan of every free cell once the board is crowded.
    /// `None` means the snake covers the whole interior.
    pub fn spawn_food(&mut self) -> Option<Cell> {
        let (max_row, max_col) = (self.config.height - 2, self.config.width - 2);

        for _ in 0..self.config.spawn_attempts {
            let cell = (self.rng.gen_range(1..=max_row), self.rng.gen_range(1..=max_col));
            if !self.snake.contains(&cell) {
                return Some(cell);
            }
        }

        let free: Vec<Cell> = (1..=max_row)
            .flat_map(|row| (1..=max_col).map(move |col| (row, col)))
            .filter(|cell| !self.snake.contains(cell))
            .collect();
        debug!(free = free.len(), "random food placement gave up, scanning free cells");

        free.choose(&mut self.rng).copied()
    }

    pub fn quit(&mut self) {
        if self.ended.is_none() {
            self.ended = Some(Outcome::Quit);
        }
    }

    pub fn snapshot(&self, paused: bool) -> Snapshot<'_> {
        Snapshot {
            width: self.config.width,
            height: self.config.height,
            snake: self.snake.body(),
            food: self.food,
            score: self.score,
            delay: self.delay,
            paused,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.ended
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    ///////////////////////////////////////////////////////////////////////////

    fn is_interior(&self, (row, col): Cell) -> bool {
        row >= 1 && row <= self.config.height - 2 && col >= 1 && col <= self.config.width - 2
    }

    fn end(&mut self, outcome: Outcome) -> StepResult {
        if outcome == Outcome::Crashed {
            warn!(head = ?self.snake.head(), direction = ?self.snake.direction(), score = self.score, "snake crashed");
        }
        self.ended = Some(outcome);

        match outcome {
            Outcome::BoardFull => StepResult::BoardFull,
            _ => StepResult::GameOver,
        }
    }
}
