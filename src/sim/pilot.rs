//! Demo autopilot
//!
//! Plays the player side for attract mode and the headless driver. Each tick
//! it runs a breadth-first search from the player's cell to the nearest
//! collectible, treating every cell next to a threatening adversary as
//! closed. While the power-up is active nothing threatens and adversaries
//! become targets as well. With no safe path it steps to whichever
//! neighbour keeps the most distance from the closest threat.

use std::collections::VecDeque;

use glam::IVec2;

use super::motion::{Direction, can_move, destination};
use super::state::GameState;
use super::tick::TickInput;
use crate::manhattan;

/// Cells within this Manhattan distance of a threat are avoided
pub const DANGER_RADIUS: i32 = 1;

/// Autopilot input for the next tick
pub fn pilot_input(state: &GameState) -> TickInput {
    TickInput {
        direction: plan(state),
    }
}

/// First step of the chosen route, `None` when there is nowhere to go
pub fn plan(state: &GameState) -> Option<Direction> {
    let maze = state.maze();
    let width = maze.width();
    let index = |cell: IVec2| (cell.y * width + cell.x) as usize;
    let cells = (width * maze.height()) as usize;

    let frightened = state.is_frightened();
    let threats: Vec<IVec2> = if frightened {
        Vec::new()
    } else {
        state.adversaries.iter().map(|a| a.cell).collect()
    };
    let unsafe_cell = |cell: IVec2| threats.iter().any(|&t| manhattan(t, cell) <= DANGER_RADIUS);

    let mut targets = vec![false; cells];
    for &cell in state
        .collectibles
        .dots
        .iter()
        .chain(state.collectibles.power_items.iter())
    {
        targets[index(cell)] = true;
    }
    if frightened {
        for adv in &state.adversaries {
            targets[index(adv.cell)] = true;
        }
    }
    if !targets.contains(&true) {
        return None;
    }

    let start = state.player.cell;
    let mut first_step: Vec<Option<Direction>> = vec![None; cells];
    let mut seen = vec![false; cells];
    let mut queue = VecDeque::new();
    seen[index(start)] = true;
    queue.push_back(start);

    while let Some(cell) = queue.pop_front() {
        if cell != start && targets[index(cell)] {
            return first_step[index(cell)];
        }
        for dir in Direction::ALL {
            if !can_move(cell, dir, maze) {
                continue;
            }
            let next = destination(cell, dir, maze);
            if seen[index(next)] || unsafe_cell(next) {
                continue;
            }
            seen[index(next)] = true;
            first_step[index(next)] = if cell == start {
                Some(dir)
            } else {
                first_step[index(cell)]
            };
            queue.push_back(next);
        }
    }

    flee(state, &threats)
}

/// Legal step that maximises the distance to the nearest threat
fn flee(state: &GameState, threats: &[IVec2]) -> Option<Direction> {
    if threats.is_empty() {
        return None;
    }
    let maze = state.maze();
    let cell = state.player.cell;
    Direction::ALL
        .into_iter()
        .filter(|&dir| can_move(cell, dir, maze))
        .max_by_key(|&dir| {
            let next = destination(cell, dir, maze);
            threats
                .iter()
                .map(|&t| manhattan(t, next))
                .min()
                .unwrap_or(i32::MAX)
        })
}
