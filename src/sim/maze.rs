//! Maze model: cell grid, spawn markers and level pool
//!
//! Layouts are ASCII rows:
//! - `#` wall
//! - `.` dot
//! - `o` power item
//! - ` ` open floor
//! - `P` player spawn (open floor)
//! - `1`-`4` adversary spawns, in identity order (open floor)
//!
//! A maze is immutable once parsed. Every level change asks the pool for a
//! fresh instance and re-derives the collectibles from it.

use std::sync::Arc;

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::adversary::ADVERSARY_TABLE;
use super::state::Collectibles;

/// Errors raised while loading maze layouts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("maze pool has no layouts")]
    EmptyPool,
    #[error("maze layout {index} has no rows")]
    EmptyLayout { index: usize },
    #[error("row {row} is {actual} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("unknown cell code {code:?} at column {column}, row {row}")]
    UnknownCell { column: usize, row: usize, code: char },
    #[error("spawn marker {marker:?} is missing")]
    MissingSpawn { marker: char },
    #[error("spawn marker {marker:?} appears more than once")]
    DuplicateSpawn { marker: char },
}

/// Static cell kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Open,
    Wall,
    Dot,
    PowerItem,
}

impl Cell {
    /// Cell kind for a layout code (spawn markers are open floor)
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            '#' => Some(Cell::Wall),
            '.' => Some(Cell::Dot),
            'o' => Some(Cell::PowerItem),
            ' ' | 'P' | '1'..='4' => Some(Cell::Open),
            _ => None,
        }
    }

    pub fn as_code(&self) -> char {
        match self {
            Cell::Open => ' ',
            Cell::Wall => '#',
            Cell::Dot => '.',
            Cell::PowerItem => 'o',
        }
    }
}

/// Player marker in layouts
pub const PLAYER_MARKER: char = 'P';

/// Spawn cells read from the layout markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnPoints {
    pub player: IVec2,
    /// Indexed like `ADVERSARY_TABLE`
    pub adversaries: [IVec2; 4],
}

/// An immutable maze grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: i32,
    height: i32,
    /// Row-major cells
    cells: Vec<Cell>,
    spawns: SpawnPoints,
}

impl Maze {
    /// Parse a rectangular ASCII layout
    pub fn parse(rows: &[&str]) -> Result<Self, MazeError> {
        Self::parse_indexed(0, rows)
    }

    fn parse_indexed(index: usize, rows: &[&str]) -> Result<Self, MazeError> {
        let expected = rows
            .first()
            .map(|r| r.chars().count())
            .filter(|&w| w > 0)
            .ok_or(MazeError::EmptyLayout { index })?;

        let mut cells = Vec::with_capacity(expected * rows.len());
        let mut player: Option<IVec2> = None;
        let mut adversaries: [Option<IVec2>; 4] = [None; 4];

        for (row, line) in rows.iter().enumerate() {
            let actual = line.chars().count();
            if actual != expected {
                return Err(MazeError::RaggedRow {
                    row,
                    expected,
                    actual,
                });
            }
            for (column, code) in line.chars().enumerate() {
                let cell =
                    Cell::from_code(code).ok_or(MazeError::UnknownCell { column, row, code })?;
                let at = IVec2::new(column as i32, row as i32);
                let slot = if code == PLAYER_MARKER {
                    Some(&mut player)
                } else {
                    match ADVERSARY_TABLE.iter().position(|p| p.marker == code) {
                        Some(i) => Some(&mut adversaries[i]),
                        None => None,
                    }
                };
                if let Some(slot) = slot {
                    if slot.replace(at).is_some() {
                        return Err(MazeError::DuplicateSpawn { marker: code });
                    }
                }
                cells.push(cell);
            }
        }

        let player = player.ok_or(MazeError::MissingSpawn {
            marker: PLAYER_MARKER,
        })?;
        let mut adversary_spawns = [IVec2::ZERO; 4];
        for (i, spawn) in adversaries.iter().enumerate() {
            adversary_spawns[i] = spawn.ok_or(MazeError::MissingSpawn {
                marker: ADVERSARY_TABLE[i].marker,
            })?;
        }

        Ok(Self {
            width: expected as i32,
            height: rows.len() as i32,
            cells,
            spawns: SpawnPoints {
                player,
                adversaries: adversary_spawns,
            },
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Rightmost column index
    #[inline]
    pub fn max_column(&self) -> i32 {
        self.width - 1
    }

    pub fn spawns(&self) -> &SpawnPoints {
        &self.spawns
    }

    #[inline]
    pub fn in_bounds(&self, at: IVec2) -> bool {
        at.x >= 0 && at.y >= 0 && at.x < self.width && at.y < self.height
    }

    /// Cell at a coordinate, `None` outside the grid
    pub fn cell(&self, at: IVec2) -> Option<Cell> {
        if !self.in_bounds(at) {
            return None;
        }
        self.cells
            .get((at.y * self.width + at.x) as usize)
            .copied()
    }

    /// Scan every cell once, row-major, into the two collectible sets
    pub fn collectibles(&self) -> Collectibles {
        let mut dots = Vec::new();
        let mut power_items = Vec::new();
        for (i, cell) in self.cells.iter().enumerate() {
            let at = IVec2::new(i as i32 % self.width, i as i32 / self.width);
            match cell {
                Cell::Dot => dots.push(at),
                Cell::PowerItem => power_items.push(at),
                Cell::Open | Cell::Wall => {}
            }
        }
        Collectibles { dots, power_items }
    }

    /// Render back to layout rows (spawn markers become open floor)
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width as usize)
            .map(|row| row.iter().map(Cell::as_code).collect())
            .collect()
    }
}

/// Ordered list of layouts, selected by `level mod len`
#[derive(Debug, Clone, Default)]
pub struct MazePool {
    layouts: Vec<Maze>,
}

impl MazePool {
    /// Parse every layout up front so malformed mazes fail before play
    pub fn from_layouts(layouts: &[&[&str]]) -> Result<Self, MazeError> {
        let layouts = layouts
            .iter()
            .enumerate()
            .map(|(i, rows)| Maze::parse_indexed(i, rows))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { layouts })
    }

    /// The built-in pool
    pub fn classic() -> Result<Self, MazeError> {
        Self::from_layouts(&super::layouts::CLASSIC_POOL)
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// Fresh maze instance for a level
    pub fn for_level(&self, level: u32) -> Result<Arc<Maze>, MazeError> {
        if self.layouts.is_empty() {
            return Err(MazeError::EmptyPool);
        }
        let index = level as usize % self.layouts.len();
        log::info!("Level {} uses maze layout {}", level, index);
        Ok(Arc::new(self.layouts[index].clone()))
    }
}
