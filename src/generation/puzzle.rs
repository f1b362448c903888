//! # Puzzle Generation
//!
//! Orchestrates grid allocation, word placement and the random fill pass.
//!
//! The input word list is shuffled before placement so that no fixed list
//! order gets a systematic advantage once the grid becomes crowded. Words
//! that exhaust their placement budget are dropped from the puzzle: they
//! appear neither in the clue list nor in the win condition, and every
//! displayed total is computed from the placed set rather than the input
//! length.

use crate::game::Position;
use crate::generation::{GenerationConfig, LetterGrid, PlacedWord, WordEntry, WordPlacer};
use crate::{SopaError, SopaResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// A generated puzzle: a fully filled letter grid plus the words that made
/// it in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Puzzle {
    grid: LetterGrid,
    words: Vec<PlacedWord>,
}

impl Puzzle {
    /// Assembles a puzzle from parts. Primarily useful in tests and for
    /// hosts that build fixed boards.
    pub fn new(grid: LetterGrid, words: Vec<PlacedWord>) -> Self {
        Self { grid, words }
    }

    /// Read-only view of the letter grid.
    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    /// The placed words in clue-list order.
    pub fn words(&self) -> &[PlacedWord] {
        &self.words
    }

    /// Splits the puzzle into a shared grid view and a mutable word list,
    /// for callers that need to read letters while marking words found.
    pub(crate) fn grid_and_words_mut(&mut self) -> (&LetterGrid, &mut [PlacedWord]) {
        (&self.grid, &mut self.words)
    }

    /// Number of placed words, i.e. the effective win-condition total.
    pub fn total_words(&self) -> usize {
        self.words.len()
    }

    /// Reads the letter at each cell in order, skipping cells that are out
    /// of bounds (none are, for sequences produced by this crate).
    pub fn read_cells(&self, cells: &[Position]) -> String {
        cells
            .iter()
            .filter_map(|&pos| self.grid.letter(pos))
            .collect()
    }

    /// Renders the grid as lines of space-separated letters.
    pub fn render_grid(&self) -> String {
        let mut out = String::new();
        for row in 0..self.grid.size() {
            for (col, ch) in self.grid.row_letters(row).enumerate() {
                if col > 0 {
                    out.push(' ');
                }
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

/// Generates playable puzzles from a word list.
///
/// # Examples
///
/// ```
/// use sopa::{GenerationConfig, PuzzleGenerator, WordEntry};
/// use sopa::generation::utils;
///
/// let entries = vec![
///     WordEntry::new("GATO", "Felino doméstico"),
///     WordEntry::new("PERRO", "El mejor amigo"),
/// ];
/// let config = GenerationConfig::for_testing(42);
/// let mut rng = utils::create_rng(&config);
///
/// let puzzle = PuzzleGenerator::new().generate(&entries, &config, &mut rng).unwrap();
/// assert!(puzzle.grid().is_fully_filled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PuzzleGenerator;

impl PuzzleGenerator {
    /// Creates a new generator.
    pub fn new() -> Self {
        Self
    }

    /// Generates a puzzle: validate, shuffle, place each word, fill the
    /// leftover cells.
    ///
    /// Fails fast on caller-contract violations (empty word list, zero grid
    /// size, malformed words). Unplaceable words are not errors; they are
    /// dropped and logged.
    pub fn generate(
        &self,
        entries: &[WordEntry],
        config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> SopaResult<Puzzle> {
        config.validate()?;
        if entries.is_empty() {
            return Err(SopaError::Config("word list must not be empty".to_string()));
        }
        for entry in entries {
            entry.validate()?;
        }

        let mut shuffled: Vec<WordEntry> = entries.iter().map(WordEntry::normalized).collect();
        shuffled.shuffle(rng);

        let mut grid = LetterGrid::new(config.size);
        let placer = WordPlacer::new(config.max_attempts);
        let mut placed = Vec::with_capacity(shuffled.len());

        for entry in shuffled {
            match placer.try_place(&mut grid, &entry.word, rng) {
                Some(cells) => {
                    log::debug!("placed {:?} starting at {:?}", entry.word, cells[0]);
                    placed.push(PlacedWord::new(entry.word, entry.clue, cells));
                }
                None => {
                    log::warn!(
                        "dropping {:?}: no valid placement within {} attempts",
                        entry.word,
                        config.max_attempts
                    );
                }
            }
        }

        grid.fill_empty(&config.alphabet, rng);
        debug_assert!(grid.is_fully_filled());

        log::info!(
            "generated {}x{} puzzle with {} of {} words placed",
            config.size,
            config.size,
            placed.len(),
            entries.len()
        );

        Ok(Puzzle::new(grid, placed))
    }
}
