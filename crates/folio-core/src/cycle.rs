//! Rotating label state
//!
//! Owns a cursor into a fixed label sequence and advances it one step per
//! tick, wrapping modulo the sequence length.

use std::time::Duration;

use crate::{CoreError, CoreResult};

/// Cadence of the automatic advance.
pub const ROTATION_INTERVAL: Duration = Duration::from_millis(3000);

/// Cursor into a fixed, non-empty sequence of display labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCycle {
    labels: Vec<String>,
    index: usize,
}

impl LabelCycle {
    /// Builds a cycle over `labels`, starting at the first entry.
    ///
    /// An empty sequence is a configuration error; the cursor would have
    /// nothing to point at.
    pub fn new(labels: Vec<String>) -> CoreResult<Self> {
        if labels.is_empty() {
            return Err(CoreError::EmptyLabels);
        }
        Ok(Self { labels, index: 0 })
    }

    /// The currently displayed label.
    pub fn current(&self) -> &str {
        &self.labels[self.index]
    }

    /// Position of the current label in the sequence.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Advances one step, wrapping at the end of the sequence.
    ///
    /// The index is reduced modulo the length on every step, so arbitrarily
    /// many advances never drift out of bounds. A single-label sequence
    /// cycles 0 -> 0 and never visibly changes.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.labels.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(labels: &[&str]) -> LabelCycle {
        LabelCycle::new(labels.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_starts_at_first_label() {
        let c = cycle(&["A", "B", "C"]);
        assert_eq!(c.index(), 0);
        assert_eq!(c.current(), "A");
    }

    #[test]
    fn test_advance_tracks_k_mod_length() {
        let mut c = cycle(&["A", "B", "C"]);
        for k in 1..=10_000usize {
            c.advance();
            assert_eq!(c.index(), k % 3);
        }
    }

    #[test]
    fn test_wraps_at_length_and_length_plus_one() {
        let mut c = cycle(&["A", "B", "C"]);
        for _ in 0..3 {
            c.advance();
        }
        assert_eq!(c.current(), "A");
        c.advance();
        assert_eq!(c.current(), "B");
    }

    #[test]
    fn test_rotation_sequence() {
        let mut c = cycle(&["A", "B", "C"]);
        assert_eq!(c.current(), "A");
        c.advance();
        assert_eq!(c.current(), "B");
        c.advance();
        c.advance();
        assert_eq!(c.current(), "A");
    }

    #[test]
    fn test_single_label_never_changes() {
        let mut c = cycle(&["only"]);
        for _ in 0..10 {
            c.advance();
            assert_eq!(c.index(), 0);
            assert_eq!(c.current(), "only");
        }
    }

    #[test]
    fn test_empty_labels_rejected() {
        assert_eq!(LabelCycle::new(Vec::new()), Err(CoreError::EmptyLabels));
    }
}
