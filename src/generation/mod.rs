//! # Generation Module
//!
//! Puzzle generation: grid allocation and fill, randomized word placement,
//! and the orchestration that turns a word list into a playable [`Puzzle`].
//!
//! Generation is deterministic for a given seed: every random decision draws
//! from the caller-provided [`rand::rngs::StdRng`], typically created through
//! [`utils::create_rng`].

pub mod grid;
pub mod placement;
pub mod puzzle;

pub use grid::*;
pub use placement::*;
pub use puzzle::*;

use crate::game::{Direction, Position};
use crate::{SopaError, SopaResult};
use serde::{Deserialize, Serialize};

/// Configuration for puzzle generation.
///
/// Controls grid dimensions, the placement attempt budget, and the alphabet
/// used to fill cells not covered by a placed word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// Grid side length in cells
    pub size: usize,
    /// Placement attempts per word before the word is dropped
    pub max_attempts: u32,
    /// Uppercase alphabet for filling unused cells
    pub alphabet: String,
}

impl GenerationConfig {
    /// Creates a default generation configuration with the given seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use sopa::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(42);
    /// assert_eq!(config.size, sopa::config::DEFAULT_GRID_SIZE);
    /// assert!(config.max_attempts > 0);
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            size: crate::config::DEFAULT_GRID_SIZE,
            max_attempts: crate::config::DEFAULT_MAX_ATTEMPTS,
            alphabet: crate::config::SPANISH_ALPHABET.to_string(),
        }
    }

    /// Creates a configuration with a custom grid size.
    pub fn with_size(seed: u64, size: usize) -> Self {
        Self {
            size,
            ..Self::new(seed)
        }
    }

    /// Creates a configuration for testing with a small grid.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            seed,
            size: 8,
            max_attempts: 50,
            alphabet: crate::config::SPANISH_ALPHABET.to_string(),
        }
    }

    /// Validates the configuration itself (word lists are validated
    /// separately by the generator).
    pub fn validate(&self) -> SopaResult<()> {
        if self.size == 0 {
            return Err(SopaError::Config("grid size must be positive".to_string()));
        }
        if self.max_attempts == 0 {
            return Err(SopaError::Config(
                "placement attempt budget must be positive".to_string(),
            ));
        }
        if self.alphabet.is_empty() {
            return Err(SopaError::Config("alphabet must not be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

/// One input record of the word list: the word to hide and the clue shown to
/// the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// The word to place in the grid
    pub word: String,
    /// Display clue for the clue list
    pub clue: String,
}

impl WordEntry {
    /// Creates a new word entry.
    pub fn new(word: impl Into<String>, clue: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            clue: clue.into(),
        }
    }

    /// Returns a copy with the word uppercased.
    ///
    /// # Examples
    ///
    /// ```
    /// use sopa::WordEntry;
    ///
    /// let entry = WordEntry::new("jirafa", "Animal de cuello largo");
    /// assert_eq!(entry.normalized().word, "JIRAFA");
    /// ```
    pub fn normalized(&self) -> Self {
        Self {
            word: self.word.to_uppercase(),
            clue: self.clue.clone(),
        }
    }

    /// Validates that the entry satisfies the caller contract: non-empty
    /// alphabetic word with no whitespace, non-empty clue.
    pub fn validate(&self) -> SopaResult<()> {
        if self.word.is_empty() {
            return Err(SopaError::Config("word must not be empty".to_string()));
        }
        if !self.word.chars().all(|ch| ch.is_alphabetic()) {
            return Err(SopaError::Config(format!(
                "word {:?} contains non-alphabetic characters",
                self.word
            )));
        }
        if self.clue.trim().is_empty() {
            return Err(SopaError::Config(format!(
                "clue for word {:?} must not be empty",
                self.word
            )));
        }
        Ok(())
    }
}

/// Marker assigned to a found word, cycling through the host's color palette.
///
/// The engine only tracks the palette index; what the index maps to is a
/// presentation concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTag(pub usize);

/// A word successfully embedded in the grid.
///
/// Owned by the current session and replaced wholesale on reset. The grid
/// letters never change after generation; only `found` and `color` mutate as
/// matches occur.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedWord {
    /// The word, uppercase with no whitespace
    pub word: String,
    /// Display clue
    pub clue: String,
    /// Ordered cell sequence from first to last letter
    pub cells: Vec<Position>,
    /// Whether the player has found this word
    pub found: bool,
    /// Palette marker assigned when the word is found
    pub color: Option<ColorTag>,
}

impl PlacedWord {
    /// Creates an unfound placed word.
    pub fn new(word: String, clue: String, cells: Vec<Position>) -> Self {
        Self {
            word,
            clue,
            cells,
            found: false,
            color: None,
        }
    }

    /// First cell of the placement, or `None` for an empty cell sequence.
    pub fn start(&self) -> Option<Position> {
        self.cells.first().copied()
    }

    /// Last cell of the placement, or `None` for an empty cell sequence.
    pub fn end(&self) -> Option<Position> {
        self.cells.last().copied()
    }

    /// The canonical direction this word was written along.
    ///
    /// Single-letter words have no direction.
    pub fn direction(&self) -> Option<Direction> {
        if self.cells.len() < 2 {
            return None;
        }
        Direction::from_delta(self.cells[1] - self.cells[0])
    }
}

/// Utility functions for generation.
pub mod utils {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Creates a seeded random number generator from the config.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }
}
