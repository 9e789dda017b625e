//! High score leaderboard
//!
//! Tracks the top 10 finished runs. Persisted as JSON in LocalStorage on
//! wasm32 and in a file on native builds. The session only ever sees the best
//! score as a `u64`.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u64,
    /// Level the run ended on
    pub level: u32,
    /// Unix timestamp (s) when achieved
    pub timestamp: u64,
}

/// High score leaderboard, sorted by descending score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "maze_chase_highscores";

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
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Rank a score would achieve (1-indexed, None if it doesn't qualify)
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a finished run; returns the rank achieved or None
    pub fn add_score(&mut self, score: u64, level: u32, timestamp: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            score,
            level,
            timestamp,
        };

        // Ties go after existing entries
        let rank = match self.entries.iter().position(|e| score > e.score) {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };
        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Best score for the session hand-off, 0 when empty
    pub fn best(&self) -> u64 {
        self.top_score().unwrap_or(0)
    }

    /// Read a leaderboard file; a missing or unreadable file starts fresh
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &str) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("Could not read high scores from {}: {}", path, e);
                }
                log::info!("No high scores found, starting fresh");
                return Self::new();
            }
        };
        match serde_json::from_str::<HighScores>(&json) {
            Ok(mut scores) => {
                scores.entries.sort_by(|a, b| b.score.cmp(&a.score));
                scores.entries.truncate(MAX_HIGH_SCORES);
                log::info!("Loaded {} high scores", scores.entries.len());
                scores
            }
            Err(e) => {
                log::warn!("Ignoring corrupt high score file {}: {}", path, e);
                Self::new()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("High scores saved ({} entries)", self.entries.len());
        Ok(())
    }

    /// Load high scores from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(scores) = serde_json::from_str::<HighScores>(&json) {
                    log::info!("Loaded {} high scores", scores.entries.len());
                    return scores;
                }
            }
        }

        log::info!("No high scores found, starting fresh");
        Self::new()
    }

    /// Save high scores to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("High scores saved ({} entries)", self.entries.len());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_never_qualifies() {
        let scores = HighScores::new();
        assert!(!scores.qualifies(0));
        assert_eq!(scores.best(), 0);
    }

    #[test]
    fn test_add_keeps_descending_order_and_cap() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(500, 1, 0), Some(1));
        assert_eq!(scores.add_score(900, 2, 0), Some(1));
        assert_eq!(scores.add_score(500, 1, 0), Some(3));
        assert_eq!(scores.top_score(), Some(900));

        for i in 0..20 {
            scores.add_score(1000 + i, 3, 0);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.best(), 1019);
        assert!(scores.entries.windows(2).all(|w| w[0].score >= w[1].score));
        // Full board: must beat the lowest
        assert_eq!(scores.potential_rank(1010), None);
        assert_eq!(scores.potential_rank(1011), Some(10));
        assert_eq!(scores.potential_rank(5000), Some(1));
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!("maze_chase_scores_{}.json", std::process::id()));
        let path = path.to_string_lossy().to_string();
        let mut scores = HighScores::new();
        scores.add_score(1230, 2, 1_700_000_000);
        scores.save_to(&path).unwrap();
        assert_eq!(HighScores::load_from(&path), scores);

        std::fs::write(&path, "not json").unwrap();
        assert!(HighScores::load_from(&path).is_empty());
        let _ = std::fs::remove_file(&path);
        assert!(HighScores::load_from(&path).is_empty());
    }
}
