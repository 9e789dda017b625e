//! Fixed-step simulation tick
//!
//! Pure transition from one snapshot to the next. Per tick, in order:
//! 1. record the player's intent as the desired direction
//! 2. move the player
//! 3. move the adversaries, pursuing the player's *new* cell
//! 4. collect a dot or power item on the player's new cell
//! 5. count the power-up down (a pickup this tick refills it afterwards)
//! 6. resolve adversary contact: capture while frightened, otherwise a life
//! 7. on a lost life, drop this tick's movement and respawn every agent
//! 8. otherwise commit the moves and report an empty board
//! 9. flip the cosmetic chomp toggle

use rand::Rng;

use super::adversary::step_adversary;
use super::collision::{adversaries_at, find_dot_at, find_power_item_at};
use super::motion::{Direction, steer};
use super::state::{Adversary, GameEvent, GameState, Player};
use crate::settings::EngineConfig;

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Currently asserted direction, `None` when nothing is pressed
    pub direction: Option<Direction>,
}

impl TickInput {
    pub fn toward(direction: Direction) -> Self {
        Self {
            direction: Some(direction),
        }
    }
}

/// Next snapshot plus everything that happened on the way
#[derive(Debug, Clone)]
pub struct TickOutcome {
    pub state: GameState,
    pub events: Vec<GameEvent>,
}

impl TickOutcome {
    /// Total score earned this tick
    pub fn points(&self) -> u64 {
        self.events.iter().map(GameEvent::points).sum()
    }

    pub fn life_lost(&self) -> bool {
        self.events.contains(&GameEvent::LifeLost)
    }

    pub fn level_complete(&self) -> bool {
        self.events.contains(&GameEvent::LevelComplete)
    }
}

/// Advance the game by one tick
///
/// `prev` is left untouched; the returned outcome owns the new snapshot.
pub fn tick<R: Rng + ?Sized>(
    prev: &GameState,
    input: &TickInput,
    config: &EngineConfig,
    rng: &mut R,
) -> TickOutcome {
    let maze = prev.maze.clone();
    let mut next = prev.clone();
    let mut events = Vec::new();

    // 1. Intent
    if let Some(direction) = input.direction {
        next.player.desired = direction;
    }

    // 2. Player
    let (facing, player_cell) = steer(
        prev.player.cell,
        prev.player.facing,
        next.player.desired,
        &maze,
    );

    // 3. Adversaries react to where the player is going
    let frightened = prev.is_frightened();
    let moved: Vec<Adversary> = prev
        .adversaries
        .iter()
        .map(|adv| {
            step_adversary(
                adv,
                adv.effective_mode(frightened),
                player_cell,
                &maze,
                config.tie_break,
                rng,
            )
        })
        .collect();
    for (slot, adv) in next.adversaries.iter_mut().zip(moved) {
        *slot = adv;
    }

    // 4. Collectibles
    if let Some(i) = find_dot_at(player_cell, &next.collectibles.dots) {
        let cell = next.collectibles.dots.remove(i);
        events.push(GameEvent::DotEaten {
            cell,
            points: config.dot_points,
        });
    }
    let mut refill = false;
    if let Some(i) = find_power_item_at(player_cell, &next.collectibles.power_items) {
        let cell = next.collectibles.power_items.remove(i);
        events.push(GameEvent::PowerItemEaten {
            cell,
            points: config.power_item_points,
        });
        refill = true;
    }

    // 5. Power-up countdown; a fresh pickup lands after the decrement
    let expired = next.power.decay();
    if refill {
        next.power.refill(config.frightened_ticks);
    } else if expired {
        events.push(GameEvent::FrightenedEnded);
    }

    // 6. Contact with adversaries on the player's new cell
    let mut life_lost = false;
    for i in adversaries_at(player_cell, &next.adversaries) {
        if next.power.is_active() {
            let adv = &next.adversaries[i];
            log::debug!("Captured {} at {}", adv.name.as_str(), player_cell);
            events.push(GameEvent::AdversaryCaptured {
                name: adv.name,
                cell: player_cell,
                points: config.capture_points,
            });
            next.reset_adversary(i);
        } else {
            life_lost = true;
        }
    }

    if life_lost {
        // 7. Respawn everyone; collectible removals stand
        log::debug!("Life lost at {} on tick {}", player_cell, prev.time_ticks);
        events.push(GameEvent::LifeLost);
        next.reset_agents();
        next.power.clear();
    } else {
        // 8. Commit; the caller swaps in the next maze
        next.player = Player {
            cell: player_cell,
            facing,
            ..next.player
        };
        if next.collectibles.is_empty() {
            events.push(GameEvent::LevelComplete);
        }
    }

    // 9. Cosmetic
    next.player.mouth_open = !prev.player.mouth_open;
    next.time_ticks = prev.time_ticks + 1;

    debug_assert!(next.maze.in_bounds(next.player.cell));
    debug_assert!(next.adversaries.iter().all(|a| next.maze.in_bounds(a.cell)));

    TickOutcome {
        state: next,
        events,
    }
}
