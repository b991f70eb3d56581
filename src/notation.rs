// Copyright (C) 2020-2024 Andy Kurnia.

use super::board::Layout;
use super::play::{Direction, Move};
use super::tile::Tile;
use super::{alphabet, error, matrix};

// Letters in either case, '?' for a blank. Whitespace is ignored.
pub fn parse_rack(s: &str) -> error::Returns<Vec<Tile>> {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(Tile::from_char)
        .collect()
}

// '.', '_' or ' ' is an empty cell, uppercase is a tile, lowercase is a
// blank designated as that letter.
pub fn parse_board_cell(c: char) -> error::Returns<Option<Tile>> {
    match c {
        '.' | '_' | ' ' => Ok(None),
        'A'..='Z' => Ok(Some(Tile::from_char(c)?)),
        'a'..='z' => match alphabet::ENGLISH_ALPHABET.tile_of(c) {
            Some(letter) => Ok(Some(Tile::blank().designate(letter)?)),
            None => {
                return_error!(format!("invalid board character {:?}", c));
            }
        },
        _ => {
            return_error!(format!("invalid board character {:?}", c));
        }
    }
}

pub fn parse_board_rows<S: AsRef<str>>(rows: &[S], dim: matrix::Dim) -> error::Returns<Layout> {
    if rows.len() != dim.rows as usize {
        return_error!(format!(
            "board: need {} rows, found {} rows",
            dim.rows,
            rows.len()
        ));
    }
    let mut layout = Vec::with_capacity(rows.len());
    for (row_num, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        // trailing empties may be trimmed by editors.
        let mut cells = Vec::with_capacity(dim.cols as usize);
        for c in row.chars() {
            cells.push(parse_board_cell(c)?);
        }
        if cells.len() > dim.cols as usize {
            return_error!(format!(
                "board row {} (0-based): need {} cols, found {} cols",
                row_num,
                dim.cols,
                cells.len()
            ));
        }
        cells.resize(dim.cols as usize, None);
        layout.push(cells);
    }
    Ok(layout)
}

// Parses a whole board text, one line per row.
pub fn parse_board(text: &str, dim: matrix::Dim) -> error::Returns<Layout> {
    let mut rows = text.lines().collect::<Vec<_>>();
    while rows.len() > dim.rows as usize && rows.last().is_some_and(|row| row.trim().is_empty()) {
        rows.pop();
    }
    parse_board_rows(&rows, dim)
}

pub fn fmt_board_rows(layout: &Layout) -> Vec<String> {
    layout
        .iter()
        .map(|row| {
            row.iter()
                .map(|tile| tile.map_or(".", |tile| tile.board_label()))
                .collect()
        })
        .collect()
}

#[inline(always)]
fn col_label(col: i8) -> char {
    (b'A' + col as u8) as char
}

// 8H is across from row 8 col H, H8 is down.
pub fn fmt_position(row: i8, col: i8, direction: Direction) -> String {
    match direction {
        Direction::Across => format!("{}{}", row + 1, col_label(col)),
        Direction::Down => format!("{}{}", col_label(col), row + 1),
    }
}

// Either "8H" (across) or "H8" (down), column letter in either case.
pub fn parse_position(s: &str, dim: matrix::Dim) -> error::Returns<(i8, i8, Direction)> {
    let s = s.trim();
    let (direction, col_char, row_str) = match s.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => (Direction::Down, c, &s[1..]),
        Some(c) if c.is_ascii_digit() => match s.chars().last() {
            Some(last) if last.is_ascii_alphabetic() => {
                (Direction::Across, last, &s[..s.len() - 1])
            }
            _ => {
                return_error!(format!("invalid position {:?}", s));
            }
        },
        _ => {
            return_error!(format!("invalid position {:?}", s));
        }
    };
    let col = (col_char.to_ascii_uppercase() as u8).wrapping_sub(b'A') as i8;
    let row = match row_str.parse::<i8>() {
        Ok(row) => row - 1,
        Err(_) => {
            return_error!(format!("invalid position {:?}", s));
        }
    };
    if !dim.contains(row, col) {
        return_error!(format!("position {:?} is off the board", s));
    }
    Ok((row, col, direction))
}

// tiles already on the board are in parentheses, blanks are lowercase.
pub fn fmt_word(play: &Move) -> String {
    let mut s = String::new();
    let mut inside = false;
    for placement in play.placements() {
        if !placement.is_new && !inside {
            s.push('(');
            inside = true;
        } else if placement.is_new && inside {
            s.push(')');
            inside = false;
        }
        s.push_str(placement.tile.board_label());
    }
    if inside {
        s.push(')');
    }
    s
}

pub fn fmt_move(play: &Move) -> String {
    let (row, col) = play.start().unwrap_or((0, 0));
    format!(
        "{} {} {}",
        fmt_position(row, col, play.direction()),
        fmt_word(play),
        play.score()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::play::TilePlacement;

    const DIM: matrix::Dim = matrix::Dim { rows: 15, cols: 15 };

    #[test]
    fn rack_text() {
        let rack = parse_rack("ca t?").unwrap();
        assert_eq!(
            rack,
            vec![
                Tile::Letter(3),
                Tile::Letter(1),
                Tile::Letter(20),
                Tile::blank()
            ]
        );
        assert!(parse_rack("CA7").is_err());
        assert!(parse_rack("").unwrap().is_empty());
    }

    #[test]
    fn board_text_round_trips() {
        let mut rows = vec![String::from("..............."); 15];
        rows[7] = String::from("......CAt......");
        let layout = parse_board_rows(&rows, DIM).unwrap();
        assert_eq!(layout[7][6], Some(Tile::Letter(3)));
        assert_eq!(layout[7][8], Some(Tile::Blank(Some(20))));
        assert_eq!(layout[0][0], None);
        assert_eq!(fmt_board_rows(&layout), rows);
    }

    #[test]
    fn short_rows_are_padded() {
        let text = ".\n".repeat(7) + "_______AT\n" + &".\n".repeat(7) + "\n\n";
        let layout = parse_board(&text, DIM).unwrap();
        assert_eq!(layout.len(), 15);
        assert!(layout.iter().all(|row| row.len() == 15));
        assert_eq!(layout[7][7], Some(Tile::Letter(1)));
    }

    #[test]
    fn bad_board_text() {
        let rows = vec!["."; 14];
        assert!(parse_board_rows(&rows, DIM).is_err());
        let mut rows = vec![String::from("."); 15];
        rows[3] = String::from("................");
        assert!(parse_board_rows(&rows, DIM).is_err());
        rows[3] = String::from("...?...");
        assert!(parse_board_rows(&rows, DIM).is_err());
    }

    #[test]
    fn positions_parse_both_ways() {
        assert_eq!(parse_position("8H", DIM).unwrap(), (7, 7, Direction::Across));
        assert_eq!(parse_position("h8", DIM).unwrap(), (7, 7, Direction::Down));
        assert_eq!(parse_position("15O", DIM).unwrap(), (14, 14, Direction::Across));
        assert!(parse_position("16A", DIM).is_err());
        assert!(parse_position("8Z", DIM).is_err());
        assert!(parse_position("88", DIM).is_err());
        assert!(parse_position("", DIM).is_err());
        for (row, col, direction) in [(0, 0, Direction::Down), (11, 3, Direction::Across)] {
            let s = fmt_position(row, col, direction);
            assert_eq!(parse_position(&s, DIM).unwrap(), (row, col, direction));
        }
    }

    #[test]
    fn move_notation() {
        let play = Move::new(
            vec![
                TilePlacement::new(Tile::Letter(3), 7, 6, true),
                TilePlacement::new(Tile::Letter(1), 7, 7, false),
                TilePlacement::new(Tile::Blank(Some(20)), 7, 8, true),
            ],
            Direction::Across,
            4,
        );
        assert_eq!(fmt_move(&play), "8G C(A)t 4");
        assert_eq!(fmt_position(0, 14, Direction::Down), "O1");
        let down = Move::new(
            vec![
                TilePlacement::new(Tile::Letter(1), 6, 7, false),
                TilePlacement::new(Tile::Letter(20), 7, 7, false),
                TilePlacement::new(Tile::Letter(5), 8, 7, true),
            ],
            Direction::Down,
            3,
        );
        assert_eq!(fmt_move(&down), "H7 (AT)E 3");
    }
}
