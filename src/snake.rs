use std::collections::VecDeque;

use crate::{Cell, TermInt};
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    /// The neighbouring cell in this direction, or `None` if it would leave
    /// the unsigned coordinate space.
    pub fn offset(self, (row, col): Cell) -> Option<Cell> {
        match self {
            Up => Some((row.checked_sub(1)?, col)),
            Down => Some((row.checked_add(1)?, col)),
            Left => Some((row, col.checked_sub(1)?)),
            Right => Some((row, col.checked_add(1)?)),
        }
    }
}

/// Body cells front to back: the front is the head.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
}

impl Snake {
    /// A straight snake with its head on `head`, trailing away from `direction`.
    pub fn new(head: Cell, size: TermInt, direction: Direction) -> Self {
        let trail = direction.opposite();
        let mut body = VecDeque::with_capacity(size as usize);
        let mut pos = Some(head);

        for _ in 0..size {
            match pos {
                Some(cell) => {
                    body.push_back(cell);
                    pos = trail.offset(cell);
                }
                None => break,
            }
        }

        Snake { body, direction }
    }

    pub fn from_cells(cells: &[Cell], direction: Direction) -> Self {
        Snake { body: cells.iter().copied().collect(), direction }
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.body.contains(cell)
    }

    /// Where the head goes on the next move.
    pub fn next_head(&self) -> Option<Cell> {
        self.direction.offset(self.head())
    }

    pub fn push_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
    }

    pub fn pop_tail(&mut self) -> Option<Cell> {
        self.body.pop_back()
    }

    /// Reversing straight into the neck is ignored.
    pub fn set_direction(&mut self, new_direction: Direction) {
        if new_direction != self.direction.opposite() {
            self.direction = new_direction;
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}
