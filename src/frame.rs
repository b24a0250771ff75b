use crate::state::{Outcome, Snapshot};
use crate::TermInt;

pub const BORDER_CHAR: char = '#';
pub const FOOD_CHAR: char = '*';
pub const SNAKE_HEAD_CHAR: char = 'O';
pub const SNAKE_BODY_CHAR: char = 'o';
pub const EMPTY_CHAR: char = ' ';

/// One full screen of text, top row first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    rows: Vec<String>,
}

impl Frame {
    /// The board with its border, food and snake, followed by the status line.
    pub fn compose(snap: &Snapshot) -> Self {
        let (width, height) = (snap.width as usize, snap.height as usize);
        let mut grid = vec![vec![EMPTY_CHAR; width]; height];

        for (y, row) in grid.iter_mut().enumerate() {
            for (x, ch) in row.iter_mut().enumerate() {
                if y == 0 || y == height - 1 || x == 0 || x == width - 1 {
                    *ch = BORDER_CHAR;
                }
            }
        }

        if let Some((row, col)) = snap.food {
            grid[row as usize][col as usize] = FOOD_CHAR;
        }

        for (i, (row, col)) in snap.snake.iter().enumerate() {
            grid[*row as usize][*col as usize] = if i == 0 { SNAKE_HEAD_CHAR } else { SNAKE_BODY_CHAR };
        }

        let mut rows: Vec<String> = grid.into_iter().map(|row| row.into_iter().collect()).collect();

        let mut status = format!("Score: {} | Speed: {:.3}s", snap.score, snap.delay.as_secs_f64());
        if snap.paused {
            status.push_str(" | PAUSED (Esc to resume)");
        }
        rows.push(status);

        Frame { rows }
    }

    /// The end-of-game summary box, as wide as the board. Text that does not
    /// fit is cut off.
    pub fn summary(width: TermInt, score: u64, outcome: Outcome) -> Self {
        let inner = (width as usize).saturating_sub(2);
        let rule: String = std::iter::repeat(BORDER_CHAR).take(width as usize).collect();
        let headline = match outcome {
            Outcome::Crashed => "GAME OVER",
            Outcome::BoardFull => "YOU WIN",
            Outcome::Quit => "BYE",
        };

        let framed = |text: &str| {
            let text: String = text.chars().take(inner).collect();
            format!("|{text: ^width$}|", text = text, width = inner)
        };

        Frame {
            rows: vec![
                rule.clone(),
                framed(headline),
                framed("Final Score:"),
                framed(&score.to_string()),
                rule,
            ],
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::time::Duration;

    fn snapshot(snake: &VecDeque<(TermInt, TermInt)>, paused: bool) -> Snapshot<'_> {
        Snapshot {
            width: 6,
            height: 5,
            snake,
            food: Some((1, 4)),
            score: 30,
            delay: Duration::from_millis(85),
            paused,
        }
    }

    #[test]
    fn board_has_border_food_and_snake() {
        let snake: VecDeque<_> = vec![(2, 2), (2, 1), (3, 1)].into();
        let frame = Frame::compose(&snapshot(&snake, false));

        assert_eq!(
            frame.rows(),
            &[
                "######".to_string(),
                "#   *#".to_string(),
                "#oO  #".to_string(),
                "#o   #".to_string(),
                "######".to_string(),
                "Score: 30 | Speed: 0.085s".to_string(),
            ]
        );
    }

    #[test]
    fn paused_banner_in_status_line() {
        let snake: VecDeque<_> = vec![(2, 2), (2, 1)].into();
        let frame = Frame::compose(&snapshot(&snake, true));

        assert_eq!(frame.rows().last().unwrap(), "Score: 30 | Speed: 0.085s | PAUSED (Esc to resume)");
    }

    #[test]
    fn summary_centers_score() {
        let frame = Frame::summary(40, 40, Outcome::Crashed);

        assert_eq!(
            frame.rows(),
            &[
                "#".repeat(40),
                format!("|{}GAME OVER{}|", " ".repeat(14), " ".repeat(15)),
                format!("|{}Final Score:{}|", " ".repeat(13), " ".repeat(13)),
                format!("|{}40{}|", " ".repeat(18), " ".repeat(18)),
                "#".repeat(40),
            ]
        );
    }

    #[test]
    fn summary_never_wider_than_board() {
        let frame = Frame::summary(8, 12345678, Outcome::Crashed);

        assert!(frame.rows().iter().all(|row| row.chars().count() == 8));
        assert_eq!(frame.rows()[2], "|Final |");
        assert_eq!(frame.rows()[3], "|123456|");
    }

    #[test]
    fn summary_headline_follows_outcome() {
        assert_eq!(Frame::summary(20, 0, Outcome::BoardFull).rows()[1], "|     YOU WIN      |");
        assert_eq!(Frame::summary(20, 0, Outcome::Quit).rows()[1], "|       BYE        |");
    }
}
