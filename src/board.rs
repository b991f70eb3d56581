// Copyright (C) 2020-2024 Andy Kurnia.

use super::board_layout::Premium;
use super::play::{Direction, Move, TilePlacement};
use super::tile::Tile;
use super::{error, game_config, matrix, movegen, play_scorer, trie};

// Letters playable at an empty cell, bit n set for tile n (1 = A).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrossSet {
    bits: u32,
}

impl CrossSet {
    pub const NONE: CrossSet = CrossSet { bits: 0 };
    pub const ALL: CrossSet = CrossSet {
        bits: (1 << 27) - 2,
    };

    pub fn from_letters(letters: &[u8]) -> CrossSet {
        CrossSet {
            bits: letters.iter().fold(0, |bits, &tile| bits | (1 << tile)),
        }
    }

    #[inline(always)]
    pub fn contains(&self, tile: u8) -> bool {
        tile < 32 && self.bits & (1 << tile) != 0
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    #[inline(always)]
    pub fn len(&self) -> u32 {
        self.bits.count_ones()
    }

    pub fn letters(&self) -> Vec<u8> {
        (1..32u8).filter(|&tile| self.contains(tile)).collect()
    }
}

impl Default for CrossSet {
    fn default() -> Self {
        CrossSet::ALL
    }
}

// The tiles immediately before and after a cell along one direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Run {
    pub before: i8,
    pub after: i8,
    pub score: i32, // face value
}

impl Run {
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.before == 0 && self.after == 0
    }
}

#[derive(Clone)]
pub struct Cell {
    row: i8,
    col: i8,
    premium: Premium,
    tile: Option<Tile>,
    // derived, valid after calculate_anchors_and_cross_checks()
    is_anchor: bool,
    runs: [Run; 2],
    cross_sets: [CrossSet; 2],
}

impl Cell {
    fn new(row: i8, col: i8, premium: Premium) -> Cell {
        Cell {
            row,
            col,
            premium,
            tile: None,
            is_anchor: false,
            runs: [Run::default(); 2],
            cross_sets: [CrossSet::ALL; 2],
        }
    }

    fn clear_derived(&mut self) {
        self.is_anchor = false;
        self.runs = [Run::default(); 2];
        self.cross_sets = [CrossSet::ALL; 2];
    }

    #[inline(always)]
    pub fn row(&self) -> i8 {
        self.row
    }

    #[inline(always)]
    pub fn col(&self) -> i8 {
        self.col
    }

    #[inline(always)]
    pub fn premium(&self) -> Premium {
        self.premium
    }

    #[inline(always)]
    pub fn tile(&self) -> Option<Tile> {
        self.tile
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.tile.is_none()
    }

    #[inline(always)]
    pub fn is_anchor(&self) -> bool {
        self.is_anchor
    }

    // tiles touching this cell along the direction.
    #[inline(always)]
    pub fn run(&self, direction: Direction) -> Run {
        self.runs[direction.index()]
    }

    // letters that may go here in a word running along the direction.
    // undefined for occupied cells.
    #[inline(always)]
    pub fn cross_set(&self, direction: Direction) -> Option<CrossSet> {
        if self.tile.is_some() {
            None
        } else {
            Some(self.cross_sets[direction.index()])
        }
    }
}

pub type Layout = Vec<Vec<Option<Tile>>>;

pub struct Board {
    game_config: game_config::GameConfig,
    trie: trie::Trie,
    cells: Box<[Cell]>,
    anchors: Vec<usize>,
    has_tiles: bool,
}

impl Board {
    pub fn new(game_config: game_config::GameConfig, trie: trie::Trie) -> Board {
        let board_layout = game_config.board_layout();
        let dim = board_layout.dim();
        let mut cells = Vec::with_capacity(dim.num_cells());
        for row in 0..dim.rows {
            for col in 0..dim.cols {
                cells.push(Cell::new(row, col, board_layout.premium_at(row, col)));
            }
        }
        let mut board = Board {
            game_config,
            trie,
            cells: cells.into_boxed_slice(),
            anchors: Vec::new(),
            has_tiles: false,
        };
        board.reset();
        board
    }

    #[inline(always)]
    pub fn game_config(&self) -> &game_config::GameConfig {
        &self.game_config
    }

    #[inline(always)]
    pub fn trie(&self) -> &trie::Trie {
        &self.trie
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.game_config.board_layout().dim()
    }

    #[inline(always)]
    fn star(&self) -> usize {
        let board_layout = self.game_config.board_layout();
        self.dim()
            .at_row_col(board_layout.star_row(), board_layout.star_col())
    }

    #[inline(always)]
    pub fn cell(&self, row: i8, col: i8) -> &Cell {
        &self.cells[self.dim().at_row_col(row, col)]
    }

    #[inline(always)]
    pub fn cell_at(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    #[inline(always)]
    pub fn tile_at(&self, row: i8, col: i8) -> Option<Tile> {
        if self.dim().contains(row, col) {
            self.cell(row, col).tile
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn has_tiles(&self) -> bool {
        self.has_tiles
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        !self.has_tiles
    }

    // cell indexes, row-major
    #[inline(always)]
    pub fn anchors(&self) -> &[usize] {
        &self.anchors
    }

    pub fn is_anchor(&self, row: i8, col: i8) -> bool {
        self.cell(row, col).is_anchor
    }

    // back to pristine: no tiles, only the centre is an anchor.
    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.tile = None;
            cell.clear_derived();
        }
        self.has_tiles = false;
        self.anchors.clear();
        let star = self.star();
        self.cells[star].is_anchor = true;
        self.anchors.push(star);
    }

    pub fn layout(&self) -> Layout {
        let dim = self.dim();
        (0..dim.rows)
            .map(|row| (0..dim.cols).map(|col| self.cell(row, col).tile).collect())
            .collect()
    }

    // Replaces everything on the board with the given grid.
    pub fn populate(&mut self, layout: &[Vec<Option<Tile>>]) -> error::Returns<()> {
        let dim = self.dim();
        if layout.len() != dim.rows as usize {
            return_error!(format!(
                "board: need {} rows, found {} rows",
                dim.rows,
                layout.len()
            ));
        }
        for (row_num, row) in layout.iter().enumerate() {
            if row.len() != dim.cols as usize {
                return_error!(format!(
                    "board row {} (0-based): need {} cols, found {} cols",
                    row_num,
                    dim.cols,
                    row.len()
                ));
            }
            for (col_num, tile) in row.iter().enumerate() {
                if matches!(tile, Some(Tile::Blank(None))) {
                    return_error!(format!(
                        "board row {} col {} (0-based): blank has no letter",
                        row_num, col_num
                    ));
                }
            }
        }
        self.reset();
        for (row, row_tiles) in (0..).zip(layout.iter()) {
            for (col, tile) in (0..).zip(row_tiles.iter()) {
                if let Some(tile) = tile {
                    self.place_tile(row, col, *tile)?;
                }
            }
        }
        self.calculate_anchors_and_cross_checks();
        Ok(())
    }

    // Low-level: anchors and cross sets are stale until recalculated.
    pub fn place_tile(&mut self, row: i8, col: i8, tile: Tile) -> error::Returns<()> {
        let dim = self.dim();
        if !dim.contains(row, col) {
            return_error!(format!("row {} col {} is off the board", row, col));
        }
        if tile.letter().is_none() {
            return_error!(format!(
                "row {} col {}: cannot place a blank with no letter",
                row, col
            ));
        }
        let cell = &mut self.cells[dim.at_row_col(row, col)];
        if let Some(existing) = cell.tile {
            return_error!(format!(
                "row {} col {} already has {}, cannot place {}",
                row, col, existing, tile
            ));
        }
        cell.tile = Some(tile);
        cell.clear_derived();
        self.has_tiles = true;
        Ok(())
    }

    // Writes the new tiles of the move. Nothing is written unless every
    // placement agrees with the board.
    pub fn accept_move(&mut self, play: &Move) -> error::Returns<()> {
        let dim = self.dim();
        let placements = play.placements();
        for (i, placement) in placements.iter().enumerate() {
            let (row, col) = (placement.row, placement.col);
            if !dim.contains(row, col) {
                return_error!(format!("row {} col {} is off the board", row, col));
            }
            if placements[..i].iter().any(|other| other.is_at(row, col)) {
                return_error!(format!("row {} col {} appears twice in the move", row, col));
            }
            match (placement.is_new, self.cell(row, col).tile) {
                (true, Some(existing)) => {
                    return_error!(format!(
                        "row {} col {} already has {}, cannot place {}",
                        row, col, existing, placement.tile
                    ));
                }
                (true, None) => {
                    if placement.tile.letter().is_none() {
                        return_error!(format!(
                            "row {} col {}: cannot place a blank with no letter",
                            row, col
                        ));
                    }
                }
                (false, Some(existing)) => {
                    if existing.letter() != placement.tile.letter() {
                        return_error!(format!(
                            "row {} col {} has {}, move expects {}",
                            row, col, existing, placement.tile
                        ));
                    }
                }
                (false, None) => {
                    return_error!(format!(
                        "row {} col {} is empty, move expects {}",
                        row, col, placement.tile
                    ));
                }
            }
        }
        for placement in placements {
            if placement.is_new {
                self.place_tile(placement.row, placement.col, placement.tile)?;
            }
        }
        self.calculate_anchors_and_cross_checks();
        Ok(())
    }

    fn has_neighbour(&self, row: i8, col: i8) -> bool {
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .iter()
            .any(|&(dr, dc)| self.tile_at(row + dr, col + dc).is_some())
    }

    // the letters before and after (row, col) along the direction.
    pub fn run_letters(&self, row: i8, col: i8, direction: Direction) -> (Vec<u8>, Vec<u8>) {
        let (dr, dc) = direction.step();
        let mut before = Vec::new();
        let (mut r, mut c) = (row - dr, col - dc);
        while let Some(tile) = self.tile_at(r, c) {
            before.extend(tile.letter());
            r -= dr;
            c -= dc;
        }
        before.reverse();
        let mut after = Vec::new();
        let (mut r, mut c) = (row + dr, col + dc);
        while let Some(tile) = self.tile_at(r, c) {
            after.extend(tile.letter());
            r += dr;
            c += dc;
        }
        (before, after)
    }

    fn run_score(&self, row: i8, col: i8, direction: Direction, run_before: i8, run_after: i8) -> i32 {
        let (dr, dc) = direction.step();
        (-run_before..=run_after)
            .filter(|&k| k != 0)
            .filter_map(|k| self.tile_at(row + k * dr, col + k * dc))
            .map(|tile| tile.points())
            .sum()
    }

    // Placed tiles before the cell, in lane order, as not-new placements.
    pub fn prefix_placements(&self, row: i8, col: i8, direction: Direction) -> Vec<TilePlacement> {
        let (dr, dc) = direction.step();
        let run = self.cell(row, col).run(direction);
        (1..=run.before)
            .rev()
            .filter_map(|k| {
                let (r, c) = (row - k * dr, col - k * dc);
                self.tile_at(r, c)
                    .map(|tile| TilePlacement::new(tile, r, c, false))
            })
            .collect()
    }

    pub fn calculate_anchors_and_cross_checks(&mut self) {
        self.anchors.clear();
        for cell in self.cells.iter_mut() {
            cell.clear_derived();
        }
        self.has_tiles = self.cells.iter().any(|cell| cell.tile.is_some());
        if !self.has_tiles {
            let star = self.star();
            self.cells[star].is_anchor = true;
            self.anchors.push(star);
            return;
        }

        for idx in 0..self.cells.len() {
            let (row, col) = (self.cells[idx].row, self.cells[idx].col);
            if self.cells[idx].tile.is_some() || !self.has_neighbour(row, col) {
                continue;
            }
            let mut runs = [Run::default(); 2];
            let mut cross_sets = [CrossSet::ALL; 2];
            for direction in Direction::BOTH {
                let (before, after) = self.run_letters(row, col, direction);
                let run_before = before.len() as i8;
                let run_after = after.len() as i8;
                runs[direction.index()] = Run {
                    before: run_before,
                    after: run_after,
                    score: self.run_score(row, col, direction, run_before, run_after),
                };
                // tiles along this direction constrain words played the other way.
                cross_sets[direction.perpendicular().index()] =
                    CrossSet::from_letters(&self.trie.valid_letters(&before, &after));
            }
            let cell = &mut self.cells[idx];
            cell.is_anchor = true;
            cell.runs = runs;
            cell.cross_sets = cross_sets;
            self.anchors.push(idx);
        }

        if self.anchors.is_empty() {
            // only a full board gets here
            tracing::warn!("tiles on board but no anchors, falling back to centre");
            let star = self.star();
            self.cells[star].is_anchor = true;
            self.anchors.push(star);
        }
        tracing::debug!(num_anchors = self.anchors.len(), "anchors calculated");
    }

    pub fn score(&self, placements: &[TilePlacement], direction: Direction) -> i32 {
        play_scorer::score(self, placements, direction)
    }

    // Best moves for the hand, highest score first, at most max_moves of them.
    pub fn get_moves(&self, hand: &[Tile]) -> Vec<Move> {
        movegen::gen_moves(self, hand, self.game_config.max_moves())
    }
}
