//! Adversary identities and per-tick direction choice
//!
//! Each adversary has a fixed identity that decides its layout spawn marker
//! and scatter corner. Direction choice is greedy on Manhattan distance with
//! the no-U-turn rule; frightened adversaries pick uniformly at random from an
//! injected RNG.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::maze::Maze;
use super::motion::{Direction, advance, can_move, destination};
use super::state::{Adversary, AdversaryMode};
use crate::manhattan;

/// Fixed adversary identities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdversaryName {
    Blinky,
    Pinky,
    Inky,
    Clyde,
}

/// Maze corner used as a scatter target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub fn cell(self, maze: &Maze) -> IVec2 {
        let right = maze.max_column();
        let bottom = maze.height() - 1;
        match self {
            Corner::TopLeft => IVec2::new(0, 0),
            Corner::TopRight => IVec2::new(right, 0),
            Corner::BottomLeft => IVec2::new(0, bottom),
            Corner::BottomRight => IVec2::new(right, bottom),
        }
    }
}

/// How a greedy adversary settles candidates that do not beat its heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Keep the current heading unless a candidate strictly improves on the
    /// distance from the current cell
    #[default]
    KeepHeading,
    /// Always take the nearest candidate, first in scan order on ties
    Nearest,
}

/// Per-identity constants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdversaryProfile {
    pub name: AdversaryName,
    /// Spawn marker in maze layouts
    pub marker: char,
    pub scatter_corner: Corner,
}

/// Identity table; array order is the adversary order everywhere
pub const ADVERSARY_TABLE: [AdversaryProfile; 4] = [
    AdversaryProfile {
        name: AdversaryName::Blinky,
        marker: '1',
        scatter_corner: Corner::TopRight,
    },
    AdversaryProfile {
        name: AdversaryName::Pinky,
        marker: '2',
        scatter_corner: Corner::TopLeft,
    },
    AdversaryProfile {
        name: AdversaryName::Inky,
        marker: '3',
        scatter_corner: Corner::BottomRight,
    },
    AdversaryProfile {
        name: AdversaryName::Clyde,
        marker: '4',
        scatter_corner: Corner::BottomLeft,
    },
];

impl AdversaryName {
    pub const ALL: [AdversaryName; 4] = [
        AdversaryName::Blinky,
        AdversaryName::Pinky,
        AdversaryName::Inky,
        AdversaryName::Clyde,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn profile(self) -> &'static AdversaryProfile {
        &ADVERSARY_TABLE[self.index()]
    }

    pub fn scatter_target(self, maze: &Maze) -> IVec2 {
        self.profile().scatter_corner.cell(maze)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AdversaryName::Blinky => "blinky",
            AdversaryName::Pinky => "pinky",
            AdversaryName::Inky => "inky",
            AdversaryName::Clyde => "clyde",
        }
    }
}

/// Legal directions from `cell`, minus the U-turn unless it is the only way out
pub fn candidate_directions(cell: IVec2, facing: Direction, maze: &Maze) -> Vec<Direction> {
    let legal: Vec<Direction> = Direction::ALL
        .into_iter()
        .filter(|&dir| can_move(cell, dir, maze))
        .collect();
    let reverse = facing.opposite();
    let forward: Vec<Direction> = legal.iter().copied().filter(|&d| d != reverse).collect();
    if forward.is_empty() { legal } else { forward }
}

/// Target cell for a mode; frightened has none
pub fn target_cell(
    adversary: &Adversary,
    mode: AdversaryMode,
    player_next: IVec2,
    maze: &Maze,
) -> Option<IVec2> {
    match mode {
        AdversaryMode::Scatter => Some(adversary.name.scatter_target(maze)),
        AdversaryMode::Pursuit => Some(player_next),
        AdversaryMode::Frightened => None,
    }
}

/// Pick this tick's direction for one adversary with the default tie-break
pub fn choose_direction<R: Rng + ?Sized>(
    adversary: &Adversary,
    mode: AdversaryMode,
    player_next: IVec2,
    maze: &Maze,
    rng: &mut R,
) -> Direction {
    choose_direction_with(adversary, mode, player_next, maze, TieBreak::KeepHeading, rng)
}

/// Pick this tick's direction for one adversary
///
/// Greedy modes fold over the candidates starting from the current heading
/// and the current distance; only a strictly shorter distance replaces the
/// accumulator, so the first best candidate wins. If the heading survives
/// the fold but is not itself a candidate (blocked, or a forbidden U-turn),
/// the nearest candidate is taken instead. With no legal move at all the
/// heading is kept and the adversary holds position.
pub fn choose_direction_with<R: Rng + ?Sized>(
    adversary: &Adversary,
    mode: AdversaryMode,
    player_next: IVec2,
    maze: &Maze,
    tie_break: TieBreak,
    rng: &mut R,
) -> Direction {
    let candidates = candidate_directions(adversary.cell, adversary.facing, maze);
    if candidates.is_empty() {
        return adversary.facing;
    }

    let Some(target) = target_cell(adversary, mode, player_next, maze) else {
        return candidates[rng.random_range(0..candidates.len())];
    };

    let cell = adversary.cell;
    let distance = |dir: Direction| manhattan(destination(cell, dir, maze), target);

    let nearest = || {
        candidates
            .iter()
            .copied()
            .min_by_key(|&dir| distance(dir))
            .unwrap_or(adversary.facing)
    };
    if tie_break == TieBreak::Nearest {
        return nearest();
    }

    let (best, _) = candidates.iter().fold(
        (adversary.facing, manhattan(cell, target)),
        |(best, best_dist), &dir| {
            let dist = distance(dir);
            if dist < best_dist {
                (dir, dist)
            } else {
                (best, best_dist)
            }
        },
    );

    if candidates.contains(&best) { best } else { nearest() }
}

/// Decide and move one adversary; returns its next snapshot
pub fn step_adversary<R: Rng + ?Sized>(
    adversary: &Adversary,
    mode: AdversaryMode,
    player_next: IVec2,
    maze: &Maze,
    tie_break: TieBreak,
    rng: &mut R,
) -> Adversary {
    let facing = choose_direction_with(adversary, mode, player_next, maze, tie_break, rng);
    Adversary {
        facing,
        cell: advance(adversary.cell, facing, maze),
        ..adversary.clone()
    }
}
