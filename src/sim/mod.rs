//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One grid cell per tick, fixed cadence
//! - Injected RNG only
//! - Stable iteration order (adversaries in identity order)
//! - No rendering or platform dependencies

pub mod adversary;
pub mod collision;
pub mod layouts;
pub mod maze;
pub mod motion;
pub mod pilot;
pub mod state;
pub mod tick;

pub use adversary::{
    ADVERSARY_TABLE, AdversaryName, AdversaryProfile, Corner, TieBreak, choose_direction,
    choose_direction_with,
};
pub use collision::{adversaries_at, find_adversary_at, find_dot_at, find_power_item_at, is_wall};
pub use layouts::CLASSIC_POOL;
pub use maze::{Cell, Maze, MazeError, MazePool, SpawnPoints};
pub use motion::{Direction, can_move, destination, offset, steer, wrap_column};
pub use state::{Adversary, AdversaryMode, Collectibles, GameEvent, GameState, Player, PowerUp};
pub use tick::{TickInput, TickOutcome, tick};
