//! Directional input resolution
//!
//! Arrow keys and touch swipes both feed one `InputState`. Each tick asks it
//! for a single intent: a held key wins (checked up, down, left, right),
//! otherwise the last recognised swipe, otherwise nothing.

use glam::Vec2;

use crate::sim::{Direction, TickInput};

/// Minimum swipe travel on either axis, in pixels
pub const SWIPE_THRESHOLD_PX: f32 = 20.0;

/// Turns touch positions into swipe directions
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    anchor: Option<Vec2>,
}

impl SwipeTracker {
    pub fn begin(&mut self, pos: Vec2) {
        self.anchor = Some(pos);
    }

    /// Direction of a recognised swipe, re-anchoring at `pos` when one fires
    pub fn moved(&mut self, pos: Vec2) -> Option<Direction> {
        let anchor = self.anchor?;
        let travel = pos - anchor;
        if travel.x.abs() < SWIPE_THRESHOLD_PX && travel.y.abs() < SWIPE_THRESHOLD_PX {
            return None;
        }

        // Screen y grows downward
        let dir = if travel.x.abs() > travel.y.abs() {
            if travel.x < 0.0 {
                Direction::Left
            } else {
                Direction::Right
            }
        } else if travel.y < 0.0 {
            Direction::Up
        } else {
            Direction::Down
        };
        self.anchor = Some(pos);
        Some(dir)
    }

    pub fn end(&mut self) {
        self.anchor = None;
    }
}

/// Held keys plus the last swipe
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Indexed like `Direction::ALL`
    held: [bool; 4],
    swipe: Option<Direction>,
    tracker: SwipeTracker,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arrow key for a DOM `KeyboardEvent.key` value
    pub fn key_direction(key: &str) -> Option<Direction> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Returns true when the key is an arrow key (caller should swallow it)
    pub fn key_down(&mut self, key: &str) -> bool {
        self.set_key(key, true)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.set_key(key, false)
    }

    fn set_key(&mut self, key: &str, down: bool) -> bool {
        let Some(dir) = Self::key_direction(key) else {
            return false;
        };
        if let Some(i) = Direction::ALL.iter().position(|d| *d == dir) {
            self.held[i] = down;
        }
        true
    }

    pub fn touch_start(&mut self, pos: Vec2) {
        self.tracker.begin(pos);
    }

    pub fn touch_move(&mut self, pos: Vec2) {
        if let Some(dir) = self.tracker.moved(pos) {
            log::debug!("Swipe {:?}", dir);
            self.swipe = Some(dir);
        }
    }

    pub fn touch_end(&mut self) {
        self.tracker.end();
    }

    /// Drop all held keys, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.held = [false; 4];
    }

    /// Forget the swipe as well, e.g. on a new game
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Single directional intent for this tick
    pub fn intent(&self) -> Option<Direction> {
        Direction::ALL
            .iter()
            .zip(self.held)
            .find_map(|(dir, held)| held.then_some(*dir))
            .or(self.swipe)
    }

    pub fn tick_input(&self) -> TickInput {
        TickInput {
            direction: self.intent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_precedence_order() {
        let mut input = InputState::new();
        assert_eq!(input.intent(), None);
        assert!(input.key_down("ArrowRight"));
        assert!(input.key_down("ArrowDown"));
        assert_eq!(input.intent(), Some(Direction::Down));
        assert!(input.key_down("ArrowUp"));
        assert_eq!(input.intent(), Some(Direction::Up));
        input.key_up("ArrowUp");
        input.key_up("ArrowDown");
        assert_eq!(input.intent(), Some(Direction::Right));
        assert!(!input.key_down("x"));
    }

    #[test]
    fn test_keyboard_beats_swipe() {
        let mut input = InputState::new();
        input.touch_start(Vec2::new(100.0, 100.0));
        input.touch_move(Vec2::new(60.0, 105.0));
        assert_eq!(input.intent(), Some(Direction::Left));
        input.key_down("ArrowDown");
        assert_eq!(input.tick_input().direction, Some(Direction::Down));
        input.release_all();
        // Swipe persists after the touch ends
        input.touch_end();
        assert_eq!(input.intent(), Some(Direction::Left));
        input.clear();
        assert_eq!(input.intent(), None);
    }

    #[test]
    fn test_swipe_threshold_and_reanchor() {
        let mut tracker = SwipeTracker::default();
        // No anchor yet
        assert_eq!(tracker.moved(Vec2::new(50.0, 50.0)), None);

        tracker.begin(Vec2::new(0.0, 0.0));
        assert_eq!(tracker.moved(Vec2::new(19.0, -19.0)), None);
        assert_eq!(tracker.moved(Vec2::new(5.0, -25.0)), Some(Direction::Up));
        // Re-anchored at (5,-25); small move does nothing
        assert_eq!(tracker.moved(Vec2::new(15.0, -25.0)), None);
        assert_eq!(tracker.moved(Vec2::new(40.0, -20.0)), Some(Direction::Right));
        // Equal travel on both axes counts as vertical
        assert_eq!(tracker.moved(Vec2::new(70.0, 10.0)), Some(Direction::Down));
        tracker.end();
        assert_eq!(tracker.moved(Vec2::new(0.0, 0.0)), None);
    }
}
