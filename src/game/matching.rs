//! # Match Engine
//!
//! Resolves a finalized cell selection against the unfound placed words.
//!
//! The candidate string is read from the grid along the selection, and its
//! reverse is tried as well: placement only ever writes along four canonical
//! directions, so the backward reading is what covers the other four
//! orientations a player may drag in.

use crate::game::Position;
use crate::generation::{ColorTag, LetterGrid, PlacedWord};
use serde::{Deserialize, Serialize};

/// Outcome of evaluating one selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// The selection matched an unfound word
    Found {
        /// Index of the matched word in the placed-word list
        index: usize,
        /// The matched word, uppercase
        word: String,
        /// Points awarded: ten per letter
        score_delta: u32,
    },
    /// The selection matched nothing
    Miss,
}

/// Matches selections against placed words and hands out rotating color
/// tags for found ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEngine {
    palette_len: usize,
    assigned: usize,
}

impl MatchEngine {
    /// Creates an engine cycling color tags through a palette of
    /// `palette_len` entries.
    pub fn new(palette_len: usize) -> Self {
        Self {
            palette_len: palette_len.max(1),
            assigned: 0,
        }
    }

    /// Number of entries in the palette this engine cycles through.
    pub fn palette_len(&self) -> usize {
        self.palette_len
    }

    /// Evaluates a selection against the unfound words.
    ///
    /// Duplicate words are possible in a word list; the first unfound entry
    /// in list order wins. On a match the word is marked found and tagged;
    /// a miss leaves every word untouched. A selection containing a cell
    /// that cannot be read (out of bounds, or empty on a pre-fill grid) is
    /// a miss outright — it must not shorten into a smaller candidate.
    pub fn evaluate(
        &mut self,
        cells: &[Position],
        grid: &LetterGrid,
        words: &mut [PlacedWord],
    ) -> MatchOutcome {
        if cells.is_empty() {
            return MatchOutcome::Miss;
        }

        let mut candidate = String::with_capacity(cells.len());
        for &pos in cells {
            match grid.letter(pos) {
                Some(ch) => candidate.push(ch),
                None => return MatchOutcome::Miss,
            }
        }
        let reversed: String = candidate.chars().rev().collect();

        let hit = words
            .iter_mut()
            .enumerate()
            .find(|(_, w)| !w.found && (w.word == candidate || w.word == reversed));

        match hit {
            Some((index, word)) => {
                word.found = true;
                word.color = Some(ColorTag(self.assigned % self.palette_len));
                self.assigned += 1;

                let score_delta =
                    crate::config::POINTS_PER_LETTER * word.word.chars().count() as u32;
                MatchOutcome::Found {
                    index,
                    word: word.word.clone(),
                    score_delta,
                }
            }
            None => MatchOutcome::Miss,
        }
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(1)
    }
}
