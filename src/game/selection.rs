//! # Selection Tracking
//!
//! Converts a drag gesture (a sequence of abstract pointer positions) into a
//! validated straight line of cells.
//!
//! The highlight is always recomputed from the original start cell to the
//! latest pointer position. A position that does not form a horizontal,
//! vertical or 45° diagonal line with the start collapses the highlight to
//! the start cell alone — a deliberate UX simplification, not an error, and
//! the last valid line is not carried forward.

use crate::game::Position;
use serde::{Deserialize, Serialize};

/// Stateful tracker for a single drag gesture.
///
/// # Examples
///
/// ```
/// use sopa::{Position, SelectionTracker};
///
/// let mut tracker = SelectionTracker::new();
/// tracker.begin(Position::new(0, 0));
/// tracker.extend(Position::new(0, 2));
/// let cells = tracker.finish();
/// assert_eq!(cells.len(), 3);
/// assert!(!tracker.is_active());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionTracker {
    start: Option<Position>,
    cells: Vec<Position>,
}

impl SelectionTracker {
    /// Creates an idle tracker with no gesture in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is currently in progress.
    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    /// Starts a gesture: selection start and end are both `pos`.
    pub fn begin(&mut self, pos: Position) {
        self.start = Some(pos);
        self.cells = vec![pos];
    }

    /// Extends the gesture to `pos`, recomputing the highlighted line from
    /// the original start. Invalid geometry collapses the highlight to the
    /// start cell. Ignored when no gesture is active.
    pub fn extend(&mut self, pos: Position) -> &[Position] {
        if let Some(start) = self.start {
            self.cells = match line_between(start, pos) {
                Some(line) => line,
                None => vec![start],
            };
        }
        &self.cells
    }

    /// Current highlighted cells.
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Finalizes the gesture, returning the last highlight and clearing all
    /// internal state. A click without a drag yields a single cell.
    pub fn finish(&mut self) -> Vec<Position> {
        self.start = None;
        std::mem::take(&mut self.cells)
    }

    /// Drops any in-progress gesture without producing a selection. Used
    /// when a session is replaced so no stale drag leaks into the next one.
    pub fn cancel(&mut self) {
        self.start = None;
        self.cells.clear();
    }
}

/// The inclusive straight line from `start` to `end`, or `None` when the two
/// positions are not aligned horizontally, vertically or at 45°.
pub fn line_between(start: Position, end: Position) -> Option<Vec<Position>> {
    let delta = end - start;
    if !(delta.row == 0 || delta.col == 0 || delta.row.abs() == delta.col.abs()) {
        return None;
    }

    let step = start.step_towards(end);
    let steps = delta.row.abs().max(delta.col.abs());
    let mut cells = Vec::with_capacity(steps as usize + 1);
    let mut pos = start;
    for _ in 0..=steps {
        cells.push(pos);
        pos = pos + step;
    }
    Some(cells)
}
