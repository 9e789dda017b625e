//! Game state and core simulation types
//!
//! A `GameState` is an immutable snapshot between ticks. The tick clones it,
//! edits the clone and hands back the new one, so renderers can hold the
//! previous snapshot without locking.

use std::sync::Arc;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::adversary::{ADVERSARY_TABLE, AdversaryName};
use super::maze::Maze;
use super::motion::Direction;

/// Behavioural mode of an adversary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdversaryMode {
    /// Head for the identity's home corner
    #[default]
    Scatter,
    /// Head for the player's next cell
    Pursuit,
    /// Wander randomly, capturable
    Frightened,
}

/// The player agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub cell: IVec2,
    pub facing: Direction,
    /// Last requested turn, taken as soon as it is legal
    pub desired: Direction,
    /// Cosmetic chomp toggle, flipped every tick
    pub mouth_open: bool,
}

impl Player {
    pub fn spawn(cell: IVec2) -> Self {
        Self {
            cell,
            facing: Direction::Right,
            desired: Direction::Right,
            mouth_open: true,
        }
    }
}

/// One of the four adversaries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adversary {
    pub name: AdversaryName,
    pub cell: IVec2,
    pub facing: Direction,
    /// Scatter or pursuit; the frightened override comes from the power-up
    pub mode: AdversaryMode,
}

impl Adversary {
    pub fn spawn(name: AdversaryName, cell: IVec2) -> Self {
        Self {
            name,
            cell,
            facing: Direction::Up,
            mode: AdversaryMode::Scatter,
        }
    }

    /// Mode the decision logic runs in this tick
    pub fn effective_mode(&self, frightened: bool) -> AdversaryMode {
        if frightened {
            AdversaryMode::Frightened
        } else {
            self.mode
        }
    }
}

/// Remaining dots and power items (disjoint, shrink-only within a level)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collectibles {
    pub dots: Vec<IVec2>,
    pub power_items: Vec<IVec2>,
}

impl Collectibles {
    pub fn remaining(&self) -> usize {
        self.dots.len() + self.power_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty() && self.power_items.is_empty()
    }
}

/// Frightened-mode countdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerUp {
    pub ticks_left: u32,
}

impl PowerUp {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.ticks_left > 0
    }

    pub fn refill(&mut self, duration: u32) {
        self.ticks_left = duration;
    }

    /// Count down one tick; returns true when this tick ended the power-up
    pub fn decay(&mut self) -> bool {
        if self.ticks_left == 0 {
            return false;
        }
        self.ticks_left -= 1;
        self.ticks_left == 0
    }

    pub fn clear(&mut self) {
        self.ticks_left = 0;
    }
}

/// Discrete events for scoring, session bookkeeping and audio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    DotEaten { cell: IVec2, points: u64 },
    PowerItemEaten { cell: IVec2, points: u64 },
    AdversaryCaptured { name: AdversaryName, cell: IVec2, points: u64 },
    FrightenedEnded,
    LifeLost,
    LevelComplete,
    /// Session started or restarted
    GameStarted,
    /// A fresh maze is loaded
    LevelStarted { level: u32 },
    GameOver { score: u64, high_score: u64 },
}

impl GameEvent {
    /// Score delta carried by this event
    pub fn points(&self) -> u64 {
        match self {
            GameEvent::DotEaten { points, .. }
            | GameEvent::PowerItemEaten { points, .. }
            | GameEvent::AdversaryCaptured { points, .. } => *points,
            _ => 0,
        }
    }
}

/// Complete simulation snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Active maze (shared, never mutated)
    pub maze: Arc<Maze>,
    pub player: Player,
    /// In `ADVERSARY_TABLE` order
    pub adversaries: [Adversary; 4],
    pub collectibles: Collectibles,
    pub power: PowerUp,
    /// Ticks run on this maze
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh level state: collectibles derived from the maze, agents on spawn
    pub fn new(maze: Arc<Maze>) -> Self {
        let spawns = *maze.spawns();
        let collectibles = maze.collectibles();
        Self {
            player: Player::spawn(spawns.player),
            adversaries: std::array::from_fn(|i| {
                Adversary::spawn(ADVERSARY_TABLE[i].name, spawns.adversaries[i])
            }),
            collectibles,
            power: PowerUp::default(),
            time_ticks: 0,
            maze,
        }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    #[inline]
    pub fn is_frightened(&self) -> bool {
        self.power.is_active()
    }

    /// Mode each adversary is effectively in, frightened override applied
    pub fn adversary_modes(&self) -> [AdversaryMode; 4] {
        let frightened = self.is_frightened();
        std::array::from_fn(|i| self.adversaries[i].effective_mode(frightened))
    }

    /// Return one adversary to its spawn cell, heading and scatter mode
    pub fn reset_adversary(&mut self, index: usize) {
        let spawn = self.maze.spawns().adversaries[index];
        let name = self.adversaries[index].name;
        self.adversaries[index] = Adversary::spawn(name, spawn);
    }

    /// Put the player and every adversary back on their spawn cells
    pub fn reset_agents(&mut self) {
        self.player = Player::spawn(self.maze.spawns().player);
        for i in 0..self.adversaries.len() {
            self.reset_adversary(i);
        }
    }
}
