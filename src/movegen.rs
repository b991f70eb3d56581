// Copyright (C) 2020-2024 Andy Kurnia.

use super::board::Board;
use super::play::{Direction, Move, TilePlacement};
use super::tile::Tile;
use super::{alphabet, matrix, play_scorer};

// index 0 counts blanks, 1..=26 count letters.
type RackTally = [u8; 27];

fn rack_tally_of(hand: &[Tile]) -> RackTally {
    let mut rack_tally = [0u8; 27];
    for tile in hand {
        let idx = match *tile {
            Tile::Letter(letter) => letter as usize,
            Tile::Blank(_) => alphabet::BLANK as usize,
        };
        if let Some(count) = rack_tally.get_mut(idx) {
            *count = count.saturating_add(1);
        }
    }
    rack_tally
}

struct Env<'a> {
    board: &'a Board,
    strider: matrix::Strider,
    direction: Direction,
    lane: i8,
    anchor: i8,
    placements: Vec<TilePlacement>,
    moves: &'a mut Vec<Move>,
}

impl Env<'_> {
    #[inline(always)]
    fn row_col(&self, idx: i8) -> (i8, i8) {
        match self.direction {
            Direction::Across => (self.lane, idx),
            Direction::Down => (idx, self.lane),
        }
    }

    #[inline(always)]
    fn can_record(&self, p: usize, num_played: usize, covers_anchor: bool) -> bool {
        covers_anchor
            && num_played > 0
            && self.placements.len() >= 2
            && self.board.trie().accepts(p)
    }

    fn record(&mut self) {
        let score = play_scorer::score(self.board, &self.placements, self.direction);
        self.moves
            .push(Move::new(self.placements.clone(), self.direction, score));
    }
}

// The word so far ends just before idx and spells the path to p.
fn extend(
    env: &mut Env,
    idx: i8,
    p: usize,
    rack_tally: RackTally,
    num_played: usize,
    covers_anchor: bool,
) {
    let board = env.board;
    let trie = board.trie();
    if idx >= env.strider.len() {
        if env.can_record(p, num_played, covers_anchor) {
            env.record();
        }
        return;
    }
    let cell = board.cell_at(env.strider.at(idx));
    let (row, col) = env.row_col(idx);
    let covers_anchor_here = covers_anchor || idx == env.anchor;
    match cell.tile() {
        Some(tile) => {
            // the word must run through tiles already on the board.
            let Some(q) = tile.letter().and_then(|letter| trie.child(p, letter)) else {
                return;
            };
            env.placements
                .push(TilePlacement::new(tile, row, col, false));
            extend(env, idx + 1, q, rack_tally, num_played, covers_anchor_here);
            env.placements.pop();
        }
        None => {
            // an empty cell ends the word here.
            if env.can_record(p, num_played, covers_anchor) {
                env.record();
            }
            let Some(cross_set) = cell.cross_set(env.direction) else {
                return;
            };
            for (letter, q) in trie.children(p) {
                if !cross_set.contains(letter) {
                    continue;
                }
                let mut rack_tally = rack_tally;
                let tile = if rack_tally[letter as usize] > 0 {
                    rack_tally[letter as usize] -= 1;
                    Tile::Letter(letter)
                } else if rack_tally[alphabet::BLANK as usize] > 0 {
                    rack_tally[alphabet::BLANK as usize] -= 1;
                    Tile::Blank(Some(letter))
                } else {
                    continue;
                };
                env.placements.push(TilePlacement::new(tile, row, col, true));
                extend(env, idx + 1, q, rack_tally, num_played + 1, covers_anchor_here);
                env.placements.pop();
            }
        }
    }
}

fn gen_at_anchor(
    board: &Board,
    row: i8,
    col: i8,
    direction: Direction,
    rack_tally: RackTally,
    moves: &mut Vec<Move>,
) {
    let (lane, anchor) = match direction {
        Direction::Across => (row, col),
        Direction::Down => (col, row),
    };
    let strider = board.dim().lane(direction.is_down(), lane);
    let trie = board.trie();
    let mut env = Env {
        board,
        strider,
        direction,
        lane,
        anchor,
        placements: Vec::with_capacity(strider.len() as usize),
        moves,
    };

    let prefix = board.prefix_placements(row, col, direction);
    if !prefix.is_empty() {
        // the word must start where the tiles before the anchor start.
        let letters = prefix
            .iter()
            .filter_map(|placement| placement.tile.letter())
            .collect::<Vec<_>>();
        if let Some(p) = trie.seek(trie.root(), &letters) {
            env.placements.extend_from_slice(&prefix);
            extend(&mut env, anchor, p, rack_tally, 0, false);
        }
        return;
    }

    // no prefix: the word may start at the anchor or at any free cell
    // before it, up to the previous anchor.
    let mut start = anchor;
    loop {
        extend(&mut env, start, trie.root(), rack_tally, 0, false);
        if start == 0 {
            break;
        }
        let before = board.cell_at(strider.at(start - 1));
        if before.tile().is_some() || before.is_anchor() {
            break;
        }
        start -= 1;
    }
}

// Every legal move with the main word along the direction that covers the
// anchor at (row, col) and starts no earlier than the previous anchor.
pub fn words_at_anchor(
    board: &Board,
    row: i8,
    col: i8,
    direction: Direction,
    hand: &[Tile],
) -> Vec<Move> {
    let mut moves = Vec::new();
    if board.dim().contains(row, col) && board.cell(row, col).tile().is_none() {
        gen_at_anchor(board, row, col, direction, rack_tally_of(hand), &mut moves);
    }
    moves
}

// Moves sorted by descending score, equal scores in generation order.
pub fn gen_moves(board: &Board, hand: &[Tile], max_moves: usize) -> Vec<Move> {
    let t0 = std::time::Instant::now();
    let rack_tally = rack_tally_of(hand);
    let dim = board.dim();
    let mut moves = Vec::new();
    for &idx in board.anchors() {
        if board.cell_at(idx).tile().is_some() {
            continue;
        }
        let (row, col) = dim.row_col_of(idx);
        for direction in Direction::BOTH {
            gen_at_anchor(board, row, col, direction, rack_tally, &mut moves);
        }
    }
    let num_found = moves.len();
    moves.sort_by(|a, b| b.score().cmp(&a.score()));
    moves.truncate(max_moves);
    tracing::debug!(
        num_anchors = board.anchors().len(),
        num_found,
        num_kept = moves.len(),
        elapsed = ?t0.elapsed(),
        "moves generated"
    );
    moves
}
