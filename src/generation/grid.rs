//! # Letter Grid
//!
//! The square character matrix a puzzle is played on. Cells start out as an
//! explicit empty sentinel (`None`) so that placement can distinguish "free"
//! from "holds a letter"; after generation every cell holds exactly one
//! uppercase character.

use crate::game::Position;
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A size×size grid of optional letters, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterGrid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl LetterGrid {
    /// Allocates an empty grid. Every cell is the empty sentinel; callers
    /// enforce a positive size through [`GenerationConfig::validate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sopa::{LetterGrid, Position};
    ///
    /// let grid = LetterGrid::new(4);
    /// assert_eq!(grid.size(), 4);
    /// assert!(grid.is_empty_cell(Position::new(0, 0)));
    /// ```
    ///
    /// [`GenerationConfig::validate`]: crate::GenerationConfig::validate
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Grid side length in cells.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether a position lies inside the grid.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.size
            && (pos.col as usize) < self.size
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if self.in_bounds(pos) {
            Some(pos.row as usize * self.size + pos.col as usize)
        } else {
            None
        }
    }

    /// The letter at `pos`, or `None` if the cell is still empty or the
    /// position is out of bounds.
    pub fn letter(&self, pos: Position) -> Option<char> {
        self.index(pos).and_then(|i| self.cells[i])
    }

    /// Writes a letter into a cell. Out-of-bounds writes are ignored;
    /// placement checks bounds before committing.
    pub fn set_letter(&mut self, pos: Position, ch: char) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = Some(ch);
        }
    }

    /// Whether the cell at `pos` is in bounds and still holds the empty
    /// sentinel.
    pub fn is_empty_cell(&self, pos: Position) -> bool {
        self.index(pos)
            .map(|i| self.cells[i].is_none())
            .unwrap_or(false)
    }

    /// Whether every cell holds a letter.
    pub fn is_fully_filled(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Replaces every remaining empty cell with a character drawn uniformly
    /// at random from `alphabet`. Cells written by placement are untouched.
    pub fn fill_empty(&mut self, alphabet: &str, rng: &mut StdRng) {
        let letters: Vec<char> = alphabet.chars().collect();
        debug_assert!(!letters.is_empty());
        for cell in self.cells.iter_mut() {
            if cell.is_none() {
                *cell = Some(letters[rng.gen_range(0..letters.len())]);
            }
        }
    }

    /// Iterates the letters of one row, left to right. Empty cells yield a
    /// placeholder dot; only relevant before the fill pass.
    pub fn row_letters(&self, row: usize) -> impl Iterator<Item = char> + '_ {
        let start = row * self.size;
        self.cells[start..start + self.size]
            .iter()
            .map(|cell| cell.unwrap_or('·'))
    }
}
