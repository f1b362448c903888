//! # Game Session
//!
//! Top-level state holder: owns the puzzle, the drag tracker, the match
//! engine, the score/error/clock statistics and the phase machine
//! `Idle → Playing → { Won, GaveUp }`.
//!
//! A session is single-threaded and event-driven: every mutation happens
//! synchronously inside one of the operations below. The only periodic input
//! is [`GameSession::tick`], which terminal phases ignore — the host's timer
//! may keep firing after a win without corrupting anything. Terminal phases
//! return to `Playing` only through [`GameSession::restart`], which rebuilds
//! the puzzle from scratch; the old grid is never resumed.

use crate::game::{GameEvent, MatchEngine, MatchOutcome, Position, SelectionTracker};
use crate::generation::{GenerationConfig, LetterGrid, PlacedWord, Puzzle, PuzzleGenerator, WordEntry};
use crate::SopaResult;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Session lifecycle phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Puzzle generated, clock not yet running
    Idle,
    /// Accepting input, clock ticking
    Playing,
    /// Every placed word found; terminal
    Won,
    /// Player revealed the answers; terminal
    GaveUp,
}

/// Score, error and clock counters for one session.
///
/// `total` is computed from the placed-word set after generation — words
/// dropped during placement never count towards the win condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Points scored so far
    pub score: u32,
    /// Wrong selections so far
    pub errors: u32,
    /// Words found so far
    pub found: usize,
    /// Total placed words
    pub total: usize,
    /// Whole seconds elapsed while the session was playing
    pub elapsed_secs: u64,
}

impl SessionStats {
    fn new(total: usize) -> Self {
        Self {
            score: 0,
            errors: 0,
            found: 0,
            total,
            elapsed_secs: 0,
        }
    }
}

/// One playthrough of one generated puzzle.
///
/// # Examples
///
/// ```
/// use sopa::{GameSession, GenerationConfig, SessionPhase, WordEntry};
/// use sopa::generation::utils;
///
/// let entries = vec![WordEntry::new("GATO", "Felino doméstico")];
/// let config = GenerationConfig::for_testing(42);
/// let mut rng = utils::create_rng(&config);
///
/// let mut session = GameSession::new(&entries, &config, &mut rng).unwrap();
/// assert_eq!(session.phase(), SessionPhase::Idle);
/// session.start();
/// assert_eq!(session.phase(), SessionPhase::Playing);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    puzzle: Puzzle,
    stats: SessionStats,
    phase: SessionPhase,
    tracker: SelectionTracker,
    matcher: MatchEngine,
}

impl GameSession {
    /// Generates a fresh puzzle and wraps it in an idle session.
    pub fn new(
        entries: &[WordEntry],
        config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> SopaResult<Self> {
        let puzzle = PuzzleGenerator::new().generate(entries, config, rng)?;
        Ok(Self::from_puzzle(puzzle))
    }

    /// Wraps a pre-built puzzle in an idle session with a single-color
    /// palette. The seam for hosts with fixed boards and for tests that need
    /// full control over placement.
    pub fn from_puzzle(puzzle: Puzzle) -> Self {
        Self::with_palette(puzzle, 1)
    }

    /// Wraps a pre-built puzzle in an idle session whose found-word color
    /// tags cycle through a palette of `palette_len` entries. The palette
    /// length persists across [`GameSession::restart`].
    pub fn with_palette(puzzle: Puzzle, palette_len: usize) -> Self {
        let stats = SessionStats::new(puzzle.total_words());
        Self {
            puzzle,
            stats,
            phase: SessionPhase::Idle,
            tracker: SelectionTracker::new(),
            matcher: MatchEngine::new(palette_len),
        }
    }

    /// Starts play: `Idle → Playing`, stats zeroed, clock running. Ignored
    /// in any other phase.
    pub fn start(&mut self) {
        if self.phase == SessionPhase::Idle {
            self.stats = SessionStats::new(self.puzzle.total_words());
            self.phase = SessionPhase::Playing;
            log::debug!("session started with {} words", self.stats.total);
        }
    }

    /// Replaces this session with a freshly generated one and starts it.
    ///
    /// Any in-progress gesture and the clock are cleared before the new
    /// puzzle is built, so nothing from the old session leaks into the new
    /// one. This is the only path out of the terminal phases.
    pub fn restart(
        &mut self,
        entries: &[WordEntry],
        config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> SopaResult<()> {
        self.tracker.cancel();
        let puzzle = PuzzleGenerator::new().generate(entries, config, rng)?;
        self.stats = SessionStats::new(puzzle.total_words());
        self.puzzle = puzzle;
        self.matcher = MatchEngine::new(self.matcher.palette_len());
        self.phase = SessionPhase::Playing;
        log::debug!("session restarted with {} words", self.stats.total);
        Ok(())
    }

    /// Current phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Read-only grid snapshot for cell rendering.
    pub fn grid(&self) -> &LetterGrid {
        self.puzzle.grid()
    }

    /// Read-only placed words with found status and clue text, in clue-list
    /// order.
    pub fn words(&self) -> &[PlacedWord] {
        self.puzzle.words()
    }

    /// Statistics snapshot for the scoreboard.
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Whole seconds of play time.
    pub fn elapsed_secs(&self) -> u64 {
        self.stats.elapsed_secs
    }

    /// Elapsed time as `MM:SS` for timer display.
    pub fn formatted_time(&self) -> String {
        let secs = self.stats.elapsed_secs;
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }

    /// Cells currently highlighted by the in-progress gesture.
    pub fn selection(&self) -> &[Position] {
        self.tracker.cells()
    }

    /// One-second clock tick. Counts only while playing; in terminal phases
    /// the timer has been cancelled and stray ticks are no-ops.
    pub fn tick(&mut self) {
        if self.phase == SessionPhase::Playing {
            self.stats.elapsed_secs += 1;
        }
    }

    /// Pointer/touch press on a cell. Starts a gesture; ignored outside
    /// `Playing` or outside the grid.
    pub fn pointer_down(&mut self, pos: Position) {
        if self.phase != SessionPhase::Playing || !self.puzzle.grid().in_bounds(pos) {
            return;
        }
        self.tracker.begin(pos);
    }

    /// Pointer/touch drag onto a cell. Recomputes the highlight; positions
    /// outside the grid keep the last highlight.
    pub fn pointer_move(&mut self, pos: Position) {
        if self.phase != SessionPhase::Playing || !self.puzzle.grid().in_bounds(pos) {
            return;
        }
        self.tracker.extend(pos);
    }

    /// Pointer/touch release: finalizes the selection and resolves it.
    ///
    /// A match marks the word found, awards ten points per letter and emits
    /// [`GameEvent::WordFound`]; finding the last word transitions to `Won`
    /// and additionally emits [`GameEvent::Won`]. A miss increments the
    /// error counter — it never undoes a previous find.
    pub fn pointer_up(&mut self) -> Vec<GameEvent> {
        if self.phase != SessionPhase::Playing {
            self.tracker.cancel();
            return Vec::new();
        }

        let cells = self.tracker.finish();
        if cells.is_empty() {
            return Vec::new();
        }

        let mut events = Vec::new();
        let (grid, words) = self.puzzle.grid_and_words_mut();
        let outcome = self.matcher.evaluate(&cells, grid, words);

        match outcome {
            MatchOutcome::Found {
                word, score_delta, ..
            } => {
                self.stats.score += score_delta;
                self.stats.found += 1;
                log::debug!(
                    "found {:?} ({}/{})",
                    word,
                    self.stats.found,
                    self.stats.total
                );
                events.push(GameEvent::WordFound { word });

                if self.stats.found == self.stats.total {
                    self.phase = SessionPhase::Won;
                    log::info!(
                        "session won: score {} with {} errors in {}",
                        self.stats.score,
                        self.stats.errors,
                        self.formatted_time()
                    );
                    events.push(GameEvent::Won { stats: self.stats });
                }
            }
            MatchOutcome::Miss => {
                self.stats.errors += 1;
            }
        }

        events
    }

    /// Gives up the session: `Playing → GaveUp`, clock stopped, all words
    /// returned with their found status so the host can reveal the unfound
    /// answers. Found words keep their found state.
    pub fn give_up(&mut self) -> Vec<GameEvent> {
        if self.phase != SessionPhase::Playing {
            return Vec::new();
        }
        self.tracker.cancel();
        self.phase = SessionPhase::GaveUp;
        log::info!(
            "session given up with {}/{} words found",
            self.stats.found,
            self.stats.total
        );
        vec![GameEvent::GaveUp {
            words: self.puzzle.words().to_vec(),
        }]
    }

    /// Saves the session state to JSON.
    pub fn save_to_json(&self) -> SopaResult<String> {
        serde_json::to_string_pretty(self).map_err(crate::SopaError::from)
    }

    /// Loads session state from JSON.
    pub fn load_from_json(json: &str) -> SopaResult<Self> {
        serde_json::from_str(json).map_err(crate::SopaError::from)
    }
}
