//! Collision and occupancy queries
//!
//! Pure lookups by exact grid-cell equality. Every query is total: anything
//! outside the grid is a wall, and a miss is `None` rather than a panic.

use glam::IVec2;

use super::maze::{Cell, Maze};
use super::state::Adversary;

/// True for a wall cell or any coordinate outside the grid
///
/// Out-of-range columns are walls too; crossing a tunnel edge is handled by
/// the motion rules wrapping the column before asking.
#[inline]
pub fn is_wall(at: IVec2, maze: &Maze) -> bool {
    match maze.cell(at) {
        Some(cell) => cell == Cell::Wall,
        None => true,
    }
}

/// Index of the dot on `at`, if any
pub fn find_dot_at(at: IVec2, dots: &[IVec2]) -> Option<usize> {
    dots.iter().position(|&d| d == at)
}

/// Index of the power item on `at`, if any
pub fn find_power_item_at(at: IVec2, power_items: &[IVec2]) -> Option<usize> {
    power_items.iter().position(|&p| p == at)
}

/// Index of the first adversary on `at`, if any
pub fn find_adversary_at(at: IVec2, adversaries: &[Adversary]) -> Option<usize> {
    adversaries.iter().position(|a| a.cell == at)
}

/// Indices of every adversary on `at`, in identity order
pub fn adversaries_at(at: IVec2, adversaries: &[Adversary]) -> Vec<usize> {
    adversaries
        .iter()
        .enumerate()
        .filter(|(_, a)| a.cell == at)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::maze::tests::test_maze;
    use crate::sim::state::GameState;
    use proptest::prelude::*;

    #[test]
    fn test_is_wall_cells() {
        let maze = test_maze();
        assert!(is_wall(IVec2::new(0, 0), &maze));
        assert!(!is_wall(IVec2::new(1, 1), &maze));
        // Open tunnel edge is not a wall
        assert!(!is_wall(IVec2::new(0, 3), &maze));
    }

    #[test]
    fn test_lookups_miss_cleanly() {
        let dots = vec![IVec2::new(2, 1), IVec2::new(3, 1)];
        assert_eq!(find_dot_at(IVec2::new(3, 1), &dots), Some(1));
        assert_eq!(find_dot_at(IVec2::new(9, 9), &dots), None);
        assert_eq!(find_power_item_at(IVec2::new(3, 1), &[]), None);
    }

    #[test]
    fn test_adversary_lookup() {
        let state = GameState::new(test_maze());
        let mut adversaries = state.adversaries.to_vec();
        adversaries[2].cell = adversaries[0].cell;
        let at = adversaries[0].cell;
        assert_eq!(find_adversary_at(at, &adversaries), Some(0));
        assert_eq!(adversaries_at(at, &adversaries), vec![0, 2]);
        assert!(adversaries_at(IVec2::new(-5, -5), &adversaries).is_empty());
    }

    proptest! {
        #[test]
        fn prop_out_of_bounds_is_wall(x in -1000i32..1000, y in -1000i32..1000) {
            let maze = test_maze();
            let outside = x < 0 || y < 0 || x >= maze.width() || y >= maze.height();
            prop_assume!(outside);
            prop_assert!(is_wall(IVec2::new(x, y), &maze));
        }

        #[test]
        fn prop_classic_out_of_bounds_is_wall(x in -64i32..64, y in -64i32..64) {
            let pool = crate::sim::MazePool::classic().unwrap();
            for level in 0..pool.len() as u32 {
                let maze = pool.for_level(level).unwrap();
                if !maze.in_bounds(IVec2::new(x, y)) {
                    prop_assert!(is_wall(IVec2::new(x, y), &maze));
                }
            }
        }
    }
}
