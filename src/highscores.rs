//! High score leaderboards
//!
//! One in-memory table per game, top N kept in descending order. Nothing is
//! persisted; the tables start empty with every process.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::sim::GameKind;

/// Default number of scores kept per game
pub const MAX_HIGH_SCORES: usize = 10;

/// Per-game leaderboards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScores {
    capacity: usize,
    tables: HashMap<GameKind, Vec<u64>>,
}

impl Default for HighScores {
    fn default() -> Self {
        Self::new(MAX_HIGH_SCORES)
    }
}

impl HighScores {
    /// Empty leaderboards holding up to `capacity` scores each
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            tables: HashMap::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Scores for `kind`, best first
    pub fn entries(&self, kind: GameKind) -> &[u64] {
        self.tables.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, kind: GameKind, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        let entries = self.entries(kind);
        if entries.len() < self.capacity {
            return true;
        }
        // Has to beat the lowest entry; ties keep the older score
        entries.last().map(|&lowest| score > lowest).unwrap_or(true)
    }

    /// Rank a score would achieve (1-indexed, None if it doesn't qualify)
    pub fn potential_rank(&self, kind: GameKind, score: u64) -> Option<usize> {
        if !self.qualifies(kind, score) {
            return None;
        }
        let entries = self.entries(kind);
        let rank = entries.iter().position(|&e| score > e);
        Some(rank.unwrap_or(entries.len()) + 1)
    }

    /// Insert a score if it qualifies and return the rank it took (1-indexed)
    pub fn record(&mut self, kind: GameKind, score: u64) -> Option<usize> {
        let rank = self.potential_rank(kind, score)?;
        let entries = self.tables.entry(kind).or_default();
        entries.insert(rank - 1, score);
        entries.truncate(self.capacity);
        Some(rank)
    }

    /// Top score for `kind` (if any)
    pub fn best(&self, kind: GameKind) -> Option<u64> {
        self.entries(kind).first().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.values().all(Vec::is_empty)
    }

    pub fn clear(&mut self) {
        self.tables.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_tables() {
        let scores = HighScores::default();
        assert!(scores.is_empty());
        assert_eq!(scores.capacity(), MAX_HIGH_SCORES);
        assert_eq!(scores.best(GameKind::Snake), None);
        assert!(scores.entries(GameKind::Snake).is_empty());
    }

    #[test]
    fn test_zero_never_qualifies() {
        let mut scores = HighScores::new(3);
        assert!(!scores.qualifies(GameKind::Tetris, 0));
        assert_eq!(scores.record(GameKind::Tetris, 0), None);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_record_keeps_descending_order() {
        let mut scores = HighScores::new(3);
        assert_eq!(scores.record(GameKind::Pang, 200), Some(1));
        assert_eq!(scores.record(GameKind::Pang, 500), Some(1));
        assert_eq!(scores.record(GameKind::Pang, 300), Some(2));
        assert_eq!(scores.entries(GameKind::Pang), &[500, 300, 200]);
        assert_eq!(scores.best(GameKind::Pang), Some(500));
    }

    #[test]
    fn test_full_table_drops_lowest() {
        let mut scores = HighScores::new(3);
        for s in [100, 200, 300] {
            scores.record(GameKind::Invaders, s);
        }
        // Ties with the lowest don't make it in
        assert!(!scores.qualifies(GameKind::Invaders, 100));
        assert_eq!(scores.record(GameKind::Invaders, 50), None);
        assert_eq!(scores.potential_rank(GameKind::Invaders, 250), Some(2));
        assert_eq!(scores.record(GameKind::Invaders, 250), Some(2));
        assert_eq!(scores.entries(GameKind::Invaders), &[300, 250, 200]);
    }

    #[test]
    fn test_ties_rank_after_existing() {
        let mut scores = HighScores::new(5);
        scores.record(GameKind::Snake, 4);
        assert_eq!(scores.record(GameKind::Snake, 4), Some(2));
    }

    #[test]
    fn test_games_are_independent() {
        let mut scores = HighScores::new(2);
        scores.record(GameKind::Arkanoid, 10);
        assert_eq!(scores.best(GameKind::Arkanoid), Some(10));
        assert_eq!(scores.best(GameKind::Floppy), None);
        assert!(!scores.is_empty());

        scores.clear();
        assert!(scores.is_empty());
    }

    proptest! {
        #[test]
        fn test_table_stays_sorted_and_bounded(
            capacity in 1usize..8,
            entries in proptest::collection::vec(0u64..1000, 0..40),
        ) {
            let mut scores = HighScores::new(capacity);
            for s in entries {
                scores.record(GameKind::Asteroids, s);
            }
            let table = scores.entries(GameKind::Asteroids);
            prop_assert!(table.len() <= capacity);
            prop_assert!(table.windows(2).all(|w| w[0] >= w[1]));
            prop_assert!(table.iter().all(|&s| s > 0));
        }
    }
}
