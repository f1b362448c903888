//! # Sopa
//!
//! A word-search ("sopa de letras") puzzle engine.
//!
//! ## Architecture Overview
//!
//! The crate is split into two subsystems:
//!
//! - **Generation**: builds a square letter grid and embeds a word list into
//!   it along four canonical directions, dropping words that cannot be placed
//!   within a bounded attempt budget
//! - **Game**: tracks a drag selection across the grid, resolves it against
//!   the unfound placed words, and drives the session state machine
//!   (playing, won, gave up)
//!
//! Rendering, styling and timer display are left to the host: the engine
//! exposes read-only snapshots (grid, clue list, stats, elapsed time) and
//! returns discrete [`GameEvent`]s from its input operations.
//!
//! All randomness flows through an injected [`rand::rngs::StdRng`], so the
//! same seed always reproduces the same puzzle.

pub mod game;
pub mod generation;

pub use game::{
    Direction, GameEvent, GameSession, MatchEngine, MatchOutcome, Position, SelectionTracker,
    SessionPhase, SessionStats,
};
pub use generation::{
    GenerationConfig, LetterGrid, PlacedWord, Puzzle, PuzzleGenerator, WordEntry, WordPlacer,
};

/// Core error type for the sopa engine.
#[derive(thiserror::Error, Debug)]
pub enum SopaError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Caller-supplied configuration or word list is invalid
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Session is in a state that cannot accept the requested operation
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type used throughout the sopa codebase.
pub type SopaResult<T> = Result<T, SopaError>;

/// Version information for the engine.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine configuration constants.
pub mod config {
    /// Default grid side length in cells
    pub const DEFAULT_GRID_SIZE: usize = 15;

    /// Grid sizes offered by the hosting configuration. The core accepts any
    /// positive size; this set only drives UI choices and benchmarks.
    pub const SUPPORTED_GRID_SIZES: [usize; 3] = [10, 15, 20];

    /// Placement attempts per word before it is dropped from the puzzle
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

    /// Uppercase alphabet used to fill unused cells, including the Spanish Ñ
    pub const SPANISH_ALPHABET: &str = "ABCDEFGHIJKLMNÑOPQRSTUVWXYZ";

    /// Points awarded per letter of a found word
    pub const POINTS_PER_LETTER: u32 = 10;
}
