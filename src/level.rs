//! Static tile grid and the collision geometry derived from it.

use thiserror::Error;

use crate::config::TILE_SIZE;
use crate::entities::{DrawIntent, Rect};

// ── Tile codes ────────────────────────────────────────────────────────────────

pub const EMPTY: u8 = 0;
pub const DOOR: u8 = 99;
pub const SOLID_TILES: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
pub const DECORATIVE_TILES: [u8; 3] = [11, 12, 13];

pub const BACKGROUND_SPRITE: &str = "bg_sky";

pub const LEVEL_MAP: [[u8; 13]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 99],
    [11, 12, 13, 0, 0, 0, 0, 13, 0, 0, 0, 7, 8],
    [2, 2, 2, 3, 0, 0, 1, 2, 2, 3, 0, 0, 0],
    [5, 5, 5, 6, 0, 0, 4, 5, 5, 6, 0, 0, 0],
    [5, 5, 5, 6, 0, 0, 4, 5, 5, 6, 0, 0, 0],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileKind {
    Empty,
    Solid,
    Decoration,
    Goal,
}

/// Semantic category of a tile code, or `None` for codes the game doesn't know.
pub fn classify(code: u8) -> Option<TileKind> {
    match code {
        EMPTY => Some(TileKind::Empty),
        DOOR => Some(TileKind::Goal),
        c if SOLID_TILES.contains(&c) => Some(TileKind::Solid),
        c if DECORATIVE_TILES.contains(&c) => Some(TileKind::Decoration),
        _ => None,
    }
}

/// Sprite drawn for a tile code. Empty cells have none.
pub fn sprite_name(code: u8) -> Option<&'static str> {
    let name = match code {
        1 => "grass1",
        2 => "grass2",
        3 => "grass3",
        4 => "ground1",
        5 => "ground2",
        6 => "ground3",
        7 => "isle1",
        8 => "isle2",
        9 => "isle3",
        11 => "fence",
        12 => "fence_broken",
        13 => "plant",
        DOOR => "door",
        _ => return None,
    };
    Some(name)
}

// ── Errors ────────────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("level grid has no cells")]
    Empty,
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown tile code {code} at row {row}, column {col}")]
    UnknownTile { code: u8, row: usize, col: usize },
}

// ── Level ─────────────────────────────────────────────────────────────────────

/// Immutable level: the grid plus the solid and goal rectangles derived from
/// it once at construction.
#[derive(Clone, Debug)]
pub struct Level {
    grid: Vec<Vec<u8>>,
    tile_size: f32,
    solids: Vec<Rect>,
    goal: Option<Rect>,
}

impl Level {
    /// Validate `grid` and derive its collision geometry in a single
    /// row-major scan.
    ///
    /// With more than one door the last one in scan order becomes the goal.
    pub fn build(grid: Vec<Vec<u8>>, tile_size: f32) -> Result<Self, LevelError> {
        let cols = grid.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(LevelError::Empty);
        }

        let mut solids = Vec::new();
        let mut goal = None;

        for (r, row) in grid.iter().enumerate() {
            if row.len() != cols {
                return Err(LevelError::Ragged {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            for (c, &code) in row.iter().enumerate() {
                let kind =
                    classify(code).ok_or(LevelError::UnknownTile { code, row: r, col: c })?;
                let rect = Rect::new(
                    c as f32 * tile_size,
                    r as f32 * tile_size,
                    tile_size,
                    tile_size,
                );
                match kind {
                    TileKind::Solid => solids.push(rect),
                    TileKind::Goal => {
                        if goal.is_some() {
                            log::warn!(
                                "extra goal tile at row {r}, column {c} replaces the earlier one"
                            );
                        }
                        goal = Some(rect);
                    }
                    TileKind::Empty | TileKind::Decoration => {}
                }
            }
        }

        Ok(Self {
            grid,
            tile_size,
            solids,
            goal,
        })
    }

    /// The hardcoded level the game ships with.
    pub fn standard() -> Result<Self, LevelError> {
        let grid = LEVEL_MAP.iter().map(|row| row.to_vec()).collect();
        Self::build(grid, TILE_SIZE)
    }

    pub fn solids(&self) -> &[Rect] {
        &self.solids
    }

    pub fn goal(&self) -> Option<Rect> {
        self.goal
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn cols(&self) -> usize {
        self.grid[0].len()
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    pub fn tile(&self, row: usize, col: usize) -> Option<u8> {
        self.grid.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Background fill covering `width` × `height`, then every tile that has
    /// a sprite, in row-major order.
    pub fn draw_intents(&self, width: f32, height: f32) -> Vec<DrawIntent> {
        let mut intents = Vec::new();

        let mut x = 0.0;
        while x < width {
            let mut y = 0.0;
            while y < height {
                intents.push(DrawIntent::new(BACKGROUND_SPRITE, x, y));
                y += self.tile_size;
            }
            x += self.tile_size;
        }

        for (r, row) in self.grid.iter().enumerate() {
            for (c, &code) in row.iter().enumerate() {
                if let Some(name) = sprite_name(code) {
                    intents.push(DrawIntent::new(
                        name,
                        c as f32 * self.tile_size,
                        r as f32 * self.tile_size,
                    ));
                }
            }
        }

        intents
    }
}
