//! Agent motion rules shared by the player and the adversaries
//!
//! A move is one cell in a cardinal direction. The tentative destination is
//! wrapped horizontally first, then checked against the maze; a wall (or
//! anything outside the grid vertically) blocks the move.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::is_wall;
use super::maze::Maze;

/// Cardinal movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Evaluation order for legal-move scans
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step in grid space (rows grow downward)
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Neighbouring cell, unwrapped
#[inline]
pub fn offset(cell: IVec2, dir: Direction) -> IVec2 {
    cell + dir.delta()
}

/// Horizontal tunnel wrap: column -1 becomes the rightmost column, one past
/// the rightmost becomes 0. Rows are left alone.
#[inline]
pub fn wrap_column(cell: IVec2, width: i32) -> IVec2 {
    if cell.x < 0 {
        IVec2::new(width - 1, cell.y)
    } else if cell.x >= width {
        IVec2::new(0, cell.y)
    } else {
        cell
    }
}

/// Wrapped destination of a one-cell move
#[inline]
pub fn destination(cell: IVec2, dir: Direction, maze: &Maze) -> IVec2 {
    wrap_column(offset(cell, dir), maze.width())
}

/// Whether a one-cell move from `cell` is legal
#[inline]
pub fn can_move(cell: IVec2, dir: Direction, maze: &Maze) -> bool {
    !is_wall(destination(cell, dir, maze), maze)
}

/// Advance one cell if legal, otherwise hold position
pub fn advance(cell: IVec2, dir: Direction, maze: &Maze) -> IVec2 {
    if can_move(cell, dir, maze) {
        destination(cell, dir, maze)
    } else {
        cell
    }
}

/// Player turning contract
///
/// Switch to `desired` when that move is legal, otherwise keep `facing`;
/// then advance one cell in the resulting direction if legal. Returns the
/// new facing and cell.
pub fn steer(cell: IVec2, facing: Direction, desired: Direction, maze: &Maze) -> (Direction, IVec2) {
    let facing = if can_move(cell, desired, maze) {
        desired
    } else {
        facing
    };
    (facing, advance(cell, facing, maze))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::maze::tests::test_maze;

    #[test]
    fn test_wrap_left_edge() {
        let maze = test_maze();
        let left_edge = IVec2::new(0, 3);
        assert!(can_move(left_edge, Direction::Left, &maze));
        let wrapped = advance(left_edge, Direction::Left, &maze);
        assert_eq!(wrapped, IVec2::new(maze.max_column(), 3));
        // And back again
        assert_eq!(advance(wrapped, Direction::Right, &maze), left_edge);
    }

    #[test]
    fn test_wrap_column_only_touches_edges() {
        assert_eq!(wrap_column(IVec2::new(-1, 4), 10), IVec2::new(9, 4));
        assert_eq!(wrap_column(IVec2::new(10, 4), 10), IVec2::new(0, 4));
        assert_eq!(wrap_column(IVec2::new(5, -1), 10), IVec2::new(5, -1));
    }

    #[test]
    fn test_walls_block_movement() {
        let maze = test_maze();
        // (1,1) is the top-left power item; wall above and to the left
        let corner = IVec2::new(1, 1);
        assert!(!can_move(corner, Direction::Up, &maze));
        assert!(!can_move(corner, Direction::Left, &maze));
        assert_eq!(advance(corner, Direction::Up, &maze), corner);
        assert_eq!(advance(corner, Direction::Right, &maze), IVec2::new(2, 1));
    }

    #[test]
    fn test_steer_takes_desired_when_legal() {
        let maze = test_maze();
        // Player spawn (3,3): up is wall, left is open
        let (facing, cell) = steer(IVec2::new(3, 3), Direction::Right, Direction::Left, &maze);
        assert_eq!(facing, Direction::Left);
        assert_eq!(cell, IVec2::new(2, 3));
    }

    #[test]
    fn test_steer_keeps_facing_when_desired_blocked() {
        let maze = test_maze();
        let (facing, cell) = steer(IVec2::new(3, 3), Direction::Right, Direction::Up, &maze);
        assert_eq!(facing, Direction::Right);
        assert_eq!(cell, IVec2::new(4, 3));
    }

    #[test]
    fn test_steer_stops_at_wall() {
        let maze = test_maze();
        let (facing, cell) = steer(IVec2::new(1, 1), Direction::Up, Direction::Left, &maze);
        assert_eq!(facing, Direction::Up);
        assert_eq!(cell, IVec2::new(1, 1));
    }

    #[test]
    fn test_opposites() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.delta() + dir.opposite().delta(), IVec2::ZERO);
        }
        assert_eq!(Direction::parse("Left"), Some(Direction::Left));
        assert_eq!(Direction::parse("none"), None);
    }
}
