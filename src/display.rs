// Copyright (C) 2020-2024 Andy Kurnia.

use super::board::Board;
use super::board_layout::{BoardLayout, Premium};
use super::play::Move;

#[inline(always)]
pub fn empty_label(board_layout: &BoardLayout, row: i8, col: i8) -> &'static str {
    if row == board_layout.star_row() && col == board_layout.star_col() {
        return "*";
    }
    match board_layout.premium_at(row, col) {
        Premium::TripleWord => "=",
        Premium::DoubleWord => "-",
        Premium::TripleLetter => "\"",
        Premium::DoubleLetter => "'",
        Premium::None => " ",
    }
}

// board tiles first, then the overlay, then the premium glyph.
#[inline(always)]
pub fn cell_label(board: &Board, play: Option<&Move>, row: i8, col: i8) -> &'static str {
    board
        .tile_at(row, col)
        .or_else(|| play.and_then(|play| play.tile_at(row, col)))
        .map(|tile| tile.board_label())
        .unwrap_or_else(|| empty_label(board.game_config().board_layout(), row, col))
}

fn push_col_labels(s: &mut String, cols: i8) {
    s.push_str("  ");
    for c in 0..cols {
        s.push(' ');
        s.push(((c as u8) + b'A') as char);
    }
    s.push('\n');
}

fn push_border(s: &mut String, cols: i8) {
    s.push_str("  +");
    for _ in 1..cols {
        s.push_str("--");
    }
    s.push_str("-+\n");
}

pub fn fmt_board(board: &Board, play: Option<&Move>) -> String {
    let dim = board.dim();
    let mut s = String::new();
    push_col_labels(&mut s, dim.cols);
    push_border(&mut s, dim.cols);
    for r in 0..dim.rows {
        s.push_str(&format!("{:2}|", r + 1));
        for c in 0..dim.cols {
            if c > 0 {
                s.push(' ');
            }
            s.push_str(cell_label(board, play, r, c));
        }
        s.push_str(&format!("|{}\n", r + 1));
    }
    push_border(&mut s, dim.cols);
    push_col_labels(&mut s, dim.cols);
    s
}

pub fn print_board(board: &Board, play: Option<&Move>) {
    print!("{}", fmt_board(board, play));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::play::{Direction, TilePlacement};
    use crate::tile::Tile;
    use crate::{game_config, trie};

    #[test]
    fn glyphs_tiles_and_overlay() {
        let mut board = Board::new(
            game_config::make_common_english_game_config(),
            trie::Trie::new(),
        );
        let s = fmt_board(&board, None);
        let lines = s.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 19);
        assert_eq!(lines[0], "   A B C D E F G H I J K L M N O");
        assert_eq!(lines[2], " 1|=     '       =       '     =|1");
        assert_eq!(lines[9], " 8|=     '       *       '     =|8");

        board.place_tile(7, 7, Tile::Blank(Some(1))).unwrap();
        let play = Move::new(
            vec![
                TilePlacement::new(Tile::Blank(Some(1)), 7, 7, false),
                TilePlacement::new(Tile::Letter(20), 7, 8, true),
            ],
            Direction::Across,
            1,
        );
        let s = fmt_board(&board, Some(&play));
        assert_eq!(s.lines().nth(9), Some(" 8|=     '       a T     '     =|8"));
    }
}
