//! Maze Chase - a grid maze arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (maze, motion, adversaries, tick)
//! - `session`: Run/pause/end state machine, score, lives, level
//! - `platform`: Tick pacing and input resolution
//! - `audio`: Event to sound cue mapping
//! - `highscores`: Leaderboard persistence
//! - `settings`: Engine tuning and player preferences

pub mod audio;
pub mod highscores;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use session::{Session, SessionError, SessionMode};
pub use settings::{EngineConfig, Settings};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation cadence in milliseconds (20 Hz)
    pub const TICK_MS: u64 = 50;

    /// Frightened mode duration in ticks (~8 seconds at 50ms per tick)
    pub const FRIGHTENED_TICKS: u32 = 400;

    /// Score awarded per dot
    pub const DOT_POINTS: u64 = 10;
    /// Score awarded per power item
    pub const POWER_ITEM_POINTS: u64 = 50;
    /// Score awarded per adversary captured while frightened
    pub const CAPTURE_POINTS: u64 = 200;

    /// Lives at the start of a session
    pub const STARTING_LIVES: u8 = 3;
    /// First level of a session
    pub const FIRST_LEVEL: u32 = 1;
}

/// Manhattan distance between two grid cells
#[inline]
pub fn manhattan(a: glam::IVec2, b: glam::IVec2) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
