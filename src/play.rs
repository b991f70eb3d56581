// Copyright (C) 2020-2024 Andy Kurnia.

use super::tile::Tile;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    pub const BOTH: [Direction; 2] = [Direction::Across, Direction::Down];

    #[inline(always)]
    pub fn is_down(self) -> bool {
        self == Direction::Down
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    // (row, col) offset to the next cell along the direction.
    #[inline(always)]
    pub fn step(self) -> (i8, i8) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }

    #[inline(always)]
    pub fn perpendicular(self) -> Direction {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Direction::Across => "ACROSS",
            Direction::Down => "DOWN",
        })
    }
}

// is_new is false for tiles that were already on the board and are only
// traversed by the word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TilePlacement {
    pub tile: Tile,
    pub row: i8,
    pub col: i8,
    pub is_new: bool,
}

impl TilePlacement {
    #[inline(always)]
    pub fn new(tile: Tile, row: i8, col: i8, is_new: bool) -> Self {
        Self {
            tile,
            row,
            col,
            is_new,
        }
    }

    #[inline(always)]
    pub fn is_at(&self, row: i8, col: i8) -> bool {
        self.row == row && self.col == col
    }
}

pub fn covers_cell(placements: &[TilePlacement], row: i8, col: i8) -> bool {
    placements.iter().any(|placement| placement.is_at(row, col))
}

// The placements run in play order along one lane and spell the main word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    placements: Vec<TilePlacement>,
    direction: Direction,
    score: i32,
}

impl Move {
    pub fn new(placements: Vec<TilePlacement>, direction: Direction, score: i32) -> Self {
        Self {
            placements,
            direction,
            score,
        }
    }

    #[inline(always)]
    pub fn placements(&self) -> &[TilePlacement] {
        &self.placements
    }

    #[inline(always)]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline(always)]
    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn num_played(&self) -> usize {
        self.placements.iter().filter(|p| p.is_new).count()
    }

    // first cell of the main word
    pub fn start(&self) -> Option<(i8, i8)> {
        self.placements.first().map(|p| (p.row, p.col))
    }

    pub fn placement_at(&self, row: i8, col: i8) -> Option<&TilePlacement> {
        self.placements.iter().find(|p| p.is_at(row, col))
    }

    pub fn tile_at(&self, row: i8, col: i8) -> Option<Tile> {
        self.placement_at(row, col).map(|p| p.tile)
    }

    pub fn letters(&self) -> Vec<u8> {
        self.placements
            .iter()
            .filter_map(|p| p.tile.letter())
            .collect()
    }
}

// the main word, blanks shown as the letter they stand for.
impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for placement in &self.placements {
            f.write_str(placement.tile.label())?;
        }
        Ok(())
    }
}
