//! High score leaderboard system
//!
//! Persisted as a JSON file, tracks the top 10 scores.

use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Player's score
    pub score: u64,
    /// Level reached
    pub level: u32,
    /// Unix timestamp (ms) when achieved
    pub timestamp: u64,
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

/// Current wall-clock time as Unix millis
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

impl HighScores {
    /// Leaderboard file looked up in the working directory
    const STORAGE_FILE: &'static str = "brickfall_highscores.json";

    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Check if score beats the lowest entry
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if it doesn't qualify)
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a new score to the leaderboard (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify
    pub fn add_score(&mut self, score: u64, level: u32, timestamp: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            score,
            level,
            timestamp,
        };

        // Find insertion point (sorted descending by score)
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        // Trim to max size
        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Load high scores from the default file
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::STORAGE_FILE))
    }

    /// Load high scores from `path`, starting fresh when missing or corrupt
    pub fn load_from(path: &Path) -> Self {
        if let Ok(json) = fs::read_to_string(path) {
            if let Ok(scores) = serde_json::from_str::<HighScores>(&json) {
                log::info!("loaded {} high scores", scores.entries.len());
                return scores;
            }
            log::warn!("corrupt high score file at {}, starting fresh", path.display());
        }
        Self::new()
    }

    /// Save high scores to the default file
    pub fn save(&self) {
        self.save_to(Path::new(Self::STORAGE_FILE));
    }

    /// Save high scores to `path`; failures are logged, not fatal
    pub fn save_to(&self, path: &Path) {
        match serde_json::to_string(self) {
            Ok(json) => match fs::write(path, json) {
                Ok(()) => log::info!("high scores saved ({} entries)", self.entries.len()),
                Err(e) => log::warn!("could not save high scores to {}: {e}", path.display()),
            },
            Err(e) => log::warn!("could not serialize high scores: {e}"),
        }
    }
}
