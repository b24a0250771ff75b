use std::{thread::sleep, time::Duration};

use rand::Rng;
use tracing::{debug, info};

use crate::error::Result;
use crate::input::{Command, InputSource};
use crate::state::{GameState, Outcome, StepResult};
use crate::term::Renderer;

/// How a finished game went.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub outcome: Outcome,
    pub score: u64,
}

/// The driving loop: read input, step, draw, wait. One tick per iteration.
pub struct SnakeGame<I, T> {
    input: I,
    renderer: T,
    paused: bool,
    pause_for: fn(Duration),
}

impl<I: InputSource, T: Renderer> SnakeGame<I, T> {
    pub fn new(input: I, renderer: T) -> Self {
        SnakeGame { input, renderer, paused: false, pause_for: sleep }
    }

    /// Replaces the function used to wait between ticks.
    pub fn with_pacing(mut self, pause_for: fn(Duration)) -> Self {
        self.pause_for = pause_for;
        self
    }

    /// Runs `state` until it ends, then shows the summary screen for the
    /// configured hold time.
    pub fn play<R: Rng>(&mut self, state: &mut GameState<R>) -> Result<Summary> {
        info!(
            width = state.config().width,
            height = state.config().height,
            direction = ?state.direction(),
            food = ?state.food(),
            "game started"
        );
        self.renderer.render(&state.snapshot(self.paused))?;

        loop {
            match self.input.poll()? {
                Some(Command::Quit) => {
                    state.quit();
                    break;
                }
                Some(Command::Pause) => {
                    self.paused = !self.paused;
                    debug!(paused = self.paused, "pause toggled");
                }
                Some(cmd) if !self.paused => {
                    if let Some(dir) = cmd.direction() {
                        state.set_direction(dir);
                    }
                }
                _ => {}
            }

            if !self.paused && state.step() != StepResult::Continue {
                break;
            }

            self.renderer.render(&state.snapshot(self.paused))?;
            (self.pause_for)(state.delay());
        }

        let summary = Summary {
            outcome: state.outcome().unwrap_or(Outcome::Quit),
            score: state.score(),
        };
        info!(outcome = ?summary.outcome, score = summary.score, length = state.snake().len(), "game ended");

        self.renderer.render_summary(state.config().width, summary.score, summary.outcome)?;
        (self.pause_for)(state.config().game_over_hold);

        Ok(summary)
    }

    pub fn renderer_mut(&mut self) -> &mut T {
        &mut self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::SnakeError;
    use crate::snake::{Direction, Snake};
    use crate::state::Snapshot;
    use crate::{Cell, TermInt};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::VecDeque;

    struct Scripted(VecDeque<Option<Command>>);

    impl InputSource for Scripted {
        fn poll(&mut self) -> Result<Option<Command>> {
            Ok(self.0.pop_front().flatten())
        }
    }

    struct Broken;

    impl InputSource for Broken {
        fn poll(&mut self) -> Result<Option<Command>> {
            Err(SnakeError::Io { source: std::io::Error::new(std::io::ErrorKind::Other, "no tty") })
        }
    }

    #[derive(Default)]
    struct Recorder {
        heads: Vec<Cell>,
        paused: Vec<bool>,
        summary: Option<(TermInt, u64, Outcome)>,
    }

    impl Renderer for Recorder {
        fn render(&mut self, snap: &Snapshot) -> Result {
            self.heads.push(snap.snake[0]);
            self.paused.push(snap.paused);
            Ok(())
        }

        fn render_summary(&mut self, width: TermInt, score: u64, outcome: Outcome) -> Result {
            self.summary = Some((width, score, outcome));
            Ok(())
        }
    }

    fn no_wait(_: Duration) {}

    fn game(script: Vec<Option<Command>>) -> SnakeGame<Scripted, Recorder> {
        SnakeGame::new(Scripted(script.into()), Recorder::default()).with_pacing(no_wait)
    }

    fn state(cells: &[Cell], direction: Direction) -> GameState<StdRng> {
        let snake = Snake::from_cells(cells, direction);
        GameState::with_snake(Config::with_board(10, 10), StdRng::seed_from_u64(3), snake).unwrap()
    }

    #[test]
    fn runs_into_the_wall_without_input() {
        let mut state = state(&[(5, 5), (5, 4)], Direction::Right);
        let mut game = game(vec![]);

        let summary = game.play(&mut state).unwrap();
        assert_eq!(summary.outcome, Outcome::Crashed);

        let recorder = &game.renderer;
        // Initial frame, then (5, 6), (5, 7), (5, 8); the fourth step hits column 9.
        assert_eq!(recorder.heads, vec![(5, 5), (5, 6), (5, 7), (5, 8)]);
        assert_eq!(recorder.summary, Some((10, summary.score, Outcome::Crashed)));
    }

    #[test]
    fn quit_stops_before_stepping() {
        let mut state = state(&[(5, 5), (5, 4)], Direction::Right);
        let mut game = game(vec![None, Some(Command::Quit)]);

        let summary = game.play(&mut state).unwrap();
        assert_eq!(summary, Summary { outcome: Outcome::Quit, score: state.score() });
        assert_eq!(state.snake().head(), (5, 6));

        let recorder = &game.renderer;
        assert_eq!(recorder.heads.len(), 2);
        assert_eq!(recorder.summary.map(|s| s.2), Some(Outcome::Quit));
    }

    #[test]
    fn direction_commands_steer() {
        let mut state = state(&[(5, 5), (5, 4)], Direction::Right);
        let mut game = game(vec![Some(Command::MoveUp), Some(Command::MoveDown), None, Some(Command::Quit)]);

        game.play(&mut state).unwrap();

        let recorder = &game.renderer;
        // MoveDown is a reversal of Up and is dropped.
        assert_eq!(recorder.heads, vec![(5, 5), (4, 5), (3, 5), (2, 5)]);
    }

    #[test]
    fn paused_game_does_not_move() {
        let mut state = state(&[(5, 5), (5, 4)], Direction::Right);
        let mut game = game(vec![
            Some(Command::Pause),
            Some(Command::MoveUp),
            None,
            Some(Command::Pause),
            Some(Command::Quit),
        ]);

        game.play(&mut state).unwrap();

        let recorder = &game.renderer;
        assert_eq!(recorder.heads, vec![(5, 5), (5, 5), (5, 5), (5, 5), (5, 6)]);
        assert_eq!(recorder.paused, vec![false, true, true, true, false]);
        assert_eq!(state.direction(), Direction::Right);
    }

    #[test]
    fn input_failure_is_surfaced() {
        let mut state = state(&[(5, 5), (5, 4)], Direction::Right);
        let mut game = SnakeGame::new(Broken, Recorder::default()).with_pacing(no_wait);

        assert!(matches!(game.play(&mut state), Err(SnakeError::Io { .. })));
    }
}
