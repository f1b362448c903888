//! # Word Placement
//!
//! Bounded-retry randomized placement of a single word into the grid.
//!
//! Each attempt picks a random canonical direction and origin, rejects lines
//! that leave the grid, and otherwise requires every covered cell to be empty
//! or to already hold the letter the word needs at that offset — which is
//! what lets words cross each other on shared letters. There is no guarantee
//! every word fits; exhausting the budget is an ordinary outcome the caller
//! turns into "word dropped".

use crate::game::{Direction, Position};
use crate::generation::LetterGrid;
use rand::rngs::StdRng;
use rand::Rng;

/// Places single words into a [`LetterGrid`] with a fixed attempt budget.
#[derive(Debug, Clone)]
pub struct WordPlacer {
    /// Attempts per word before reporting failure
    pub max_attempts: u32,
}

impl WordPlacer {
    /// Creates a placer with the given attempt budget.
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }

    /// Attempts to place `word` (uppercase, no whitespace) into the grid.
    ///
    /// On success the letters are written into the grid (idempotent for
    /// cells shared with earlier words) and the covered cells are returned
    /// in start→end order. Returns `None` once the budget is exhausted.
    pub fn try_place(
        &self,
        grid: &mut LetterGrid,
        word: &str,
        rng: &mut StdRng,
    ) -> Option<Vec<Position>> {
        let letters: Vec<char> = word.chars().collect();
        if letters.is_empty() {
            return None;
        }
        let size = grid.size() as i32;
        let directions = Direction::all();

        for _ in 0..self.max_attempts {
            let dir = directions[rng.gen_range(0..directions.len())].delta();
            let origin = Position::new(rng.gen_range(0..size), rng.gen_range(0..size));

            if let Some(cells) = Self::line_if_placeable(grid, &letters, origin, dir) {
                for (&ch, &pos) in letters.iter().zip(cells.iter()) {
                    grid.set_letter(pos, ch);
                }
                return Some(cells);
            }
        }

        None
    }

    /// Returns the cell line for this candidate if it stays in bounds and
    /// collides with nothing incompatible.
    fn line_if_placeable(
        grid: &LetterGrid,
        letters: &[char],
        origin: Position,
        dir: Position,
    ) -> Option<Vec<Position>> {
        let last = letters.len() as i32 - 1;
        let end = Position::new(origin.row + last * dir.row, origin.col + last * dir.col);
        if !grid.in_bounds(end) {
            return None;
        }

        let mut cells = Vec::with_capacity(letters.len());
        let mut pos = origin;
        for &ch in letters {
            match grid.letter(pos) {
                None => {}
                Some(existing) if existing == ch => {}
                Some(_) => return None,
            }
            cells.push(pos);
            pos = pos + dir;
        }
        Some(cells)
    }
}

impl Default for WordPlacer {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAX_ATTEMPTS)
    }
}
