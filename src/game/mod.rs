//! # Game Module
//!
//! Gameplay-side building blocks: grid geometry, drag-selection tracking,
//! selection-to-word matching, and the session state machine.
//!
//! Everything here consumes abstract positions rather than raw input events;
//! the presentation layer is expected to translate pointer/touch events into
//! calls on [`GameSession`].

pub mod matching;
pub mod selection;
pub mod session;

pub use matching::*;
pub use selection::*;
pub use session::*;

use crate::generation::PlacedWord;
use serde::{Deserialize, Serialize};

/// A 0-indexed (row, column) coordinate in the letter grid.
///
/// # Examples
///
/// ```
/// use sopa::Position;
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.row, 2);
/// assert_eq!(pos.col, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the origin position (0, 0).
    pub fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Returns the unit-step vector from `self` towards `other`, where each
    /// component is the sign of the corresponding delta.
    pub fn step_towards(self, other: Position) -> Position {
        Position::new(
            (other.row - self.row).signum(),
            (other.col - self.col).signum(),
        )
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.row + other.row, self.col + other.col)
    }
}

impl std::ops::Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.row - other.row, self.col - other.col)
    }
}

/// Canonical placement directions.
///
/// Words are only ever written along these four vectors; the other four read
/// orientations are covered by the match engine accepting a selection read
/// backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Left to right along a row
    Right,
    /// Top to bottom along a column
    Down,
    /// Diagonal, one step down and one step right per letter
    DownRight,
    /// Diagonal, one step down and one step left per letter
    DownLeft,
}

impl Direction {
    /// Converts a direction to a per-letter position delta.
    ///
    /// # Examples
    ///
    /// ```
    /// use sopa::{Direction, Position};
    ///
    /// assert_eq!(Direction::DownLeft.delta(), Position::new(1, -1));
    /// ```
    pub fn delta(self) -> Position {
        match self {
            Direction::Right => Position::new(0, 1),
            Direction::Down => Position::new(1, 0),
            Direction::DownRight => Position::new(1, 1),
            Direction::DownLeft => Position::new(1, -1),
        }
    }

    /// Converts a unit delta back to a direction, if it is one of the four
    /// canonical vectors.
    pub fn from_delta(delta: Position) -> Option<Direction> {
        match (delta.row, delta.col) {
            (0, 1) => Some(Direction::Right),
            (1, 0) => Some(Direction::Down),
            (1, 1) => Some(Direction::DownRight),
            (1, -1) => Some(Direction::DownLeft),
            _ => None,
        }
    }

    /// Returns all four canonical directions.
    pub fn all() -> [Direction; 4] {
        [
            Direction::Right,
            Direction::Down,
            Direction::DownRight,
            Direction::DownLeft,
        ]
    }
}

/// Discrete lifecycle events emitted by session operations.
///
/// Consumed by the presentation layer for celebratory effects, scoreboard
/// updates and modal display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A selection matched an unfound word
    WordFound {
        /// The matched word, uppercase
        word: String,
    },
    /// Every placed word has been found; the session is over
    Won {
        /// Final session statistics
        stats: SessionStats,
    },
    /// The player gave up; all words with their found status, unfound
    /// answers revealed
    GaveUp {
        /// Every placed word of the session, in clue-list order
        words: Vec<PlacedWord>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_creation() {
        let pos = Position::new(5, 10);
        assert_eq!(pos.row, 5);
        assert_eq!(pos.col, 10);
    }

    #[test]
    fn test_position_arithmetic() {
        let pos1 = Position::new(5, 10);
        let pos2 = Position::new(3, 2);
        assert_eq!(pos1 + pos2, Position::new(8, 12));
        assert_eq!(pos1 - pos2, Position::new(2, 8));
    }

    #[test]
    fn test_position_step_towards() {
        let start = Position::new(2, 2);
        assert_eq!(start.step_towards(Position::new(2, 6)), Position::new(0, 1));
        assert_eq!(
            start.step_towards(Position::new(5, -1)),
            Position::new(1, -1)
        );
        assert_eq!(start.step_towards(start), Position::new(0, 0));
    }

    #[test]
    fn test_direction_delta_roundtrip() {
        for dir in Direction::all() {
            assert_eq!(Direction::from_delta(dir.delta()), Some(dir));
        }
    }

    #[test]
    fn test_direction_from_invalid_delta() {
        assert_eq!(Direction::from_delta(Position::new(0, -1)), None);
        assert_eq!(Direction::from_delta(Position::new(-1, 0)), None);
        assert_eq!(Direction::from_delta(Position::new(2, 1)), None);
    }
}
