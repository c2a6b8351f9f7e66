//! High score leaderboard
//!
//! Five fixed slots, strictly descending, kept in memory only. A power
//! cycle brings back the default table.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_HIGHSCORES;

/// Number of ranked slots
pub const HIGHSCORE_SLOTS: usize = 5;

/// High score leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScores {
    entries: [u32; HIGHSCORE_SLOTS],
    /// Slot filled by the most recent qualifying submit
    latest: Option<usize>,
}

impl Default for HighScores {
    fn default() -> Self {
        Self::new(DEFAULT_HIGHSCORES)
    }
}

impl HighScores {
    /// Create a leaderboard from a strictly descending table
    pub fn new(entries: [u32; HIGHSCORE_SLOTS]) -> Self {
        debug_assert!(Self::is_strictly_descending(&entries));
        Self {
            entries,
            latest: None,
        }
    }

    pub fn is_strictly_descending(entries: &[u32]) -> bool {
        entries.windows(2).all(|w| w[0] > w[1])
    }

    /// Check if a score would enter the table
    ///
    /// It must beat at least one entry and must not tie any of them.
    pub fn qualifies(&self, score: u32) -> bool {
        self.potential_rank(score).is_some()
    }

    /// Slot index a score would land in (0 = top), None if it doesn't qualify
    pub fn potential_rank(&self, score: u32) -> Option<usize> {
        if self.entries.contains(&score) {
            return None;
        }
        self.entries.iter().position(|&e| e < score)
    }

    /// Insert a finished run's score
    ///
    /// Returns the slot index achieved, or None if the table is unchanged.
    /// Either way the result is remembered as `latest`.
    pub fn submit(&mut self, score: u32) -> Option<usize> {
        let rank = self.potential_rank(score);
        if let Some(i) = rank {
            self.entries.copy_within(i..HIGHSCORE_SLOTS - 1, i + 1);
            self.entries[i] = score;
            log::info!("New highscore {} at rank {}", score, i + 1);
        }
        self.latest = rank;
        rank
    }

    pub fn entries(&self) -> &[u32; HIGHSCORE_SLOTS] {
        &self.entries
    }

    /// Most recently inserted slot, for highlighting
    pub fn latest(&self) -> Option<usize> {
        self.latest
    }

    pub fn top_score(&self) -> u32 {
        self.entries[0]
    }

    pub fn lowest_score(&self) -> u32 {
        self.entries[HIGHSCORE_SLOTS - 1]
    }
}
