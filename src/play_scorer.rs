// Copyright (C) 2020-2024 Andy Kurnia.

use super::board::Board;
use super::board_layout::Premium;
use super::error;
use super::play::{Direction, Move, TilePlacement};
use super::tile::Tile;

// Scores placements against the board's derived state. Premiums count only
// under new tiles, each perpendicular word is scored once on its own.
pub fn score(board: &Board, placements: &[TilePlacement], direction: Direction) -> i32 {
    let dim = board.dim();
    let mut main_score = 0;
    let mut word_multiplier = 1;
    let mut perpendicular_score = 0;
    let mut num_played = 0;
    for placement in placements {
        let face_value = placement.tile.points();
        if !placement.is_new || !dim.contains(placement.row, placement.col) {
            main_score += face_value;
            continue;
        }
        num_played += 1;
        let cell = board.cell(placement.row, placement.col);
        let premium = cell.premium();
        let tile_score = face_value * premium.letter_multiplier();
        main_score += tile_score;
        word_multiplier *= premium.word_multiplier();
        let run = cell.run(direction.perpendicular());
        if !run.is_empty() {
            perpendicular_score += (tile_score + run.score) * premium.word_multiplier();
        }
    }
    main_score * word_multiplier
        + perpendicular_score
        + board.game_config().num_played_bonus(num_played)
}

// the tile at (row, col) once the play is on the board.
fn tile_with_play(board: &Board, play: &Move, row: i8, col: i8) -> Option<Tile> {
    board
        .tile_at(row, col)
        .or_else(|| play.placement_at(row, col).map(|placement| placement.tile))
}

fn fmt_letters(tiles: &[Tile]) -> String {
    tiles.iter().map(|tile| tile.label()).collect()
}

// Re-validates a move from scratch by walking the board, without the
// cached cross sets, and returns its score.
pub fn check_play(board: &Board, play: &Move) -> error::Returns<i32> {
    let dim = board.dim();
    let placements = play.placements();
    let direction = play.direction();
    let (dr, dc) = direction.step();
    let Some(first) = placements.first() else {
        return_error!("move has no placements".into());
    };
    if placements.len() < 2 {
        return_error!(format!("word {} is too short", play));
    }
    for (k, placement) in (0..).zip(placements.iter()) {
        let (row, col) = (first.row + k * dr, first.col + k * dc);
        if !placement.is_at(row, col) {
            return_error!(format!(
                "placement {} at row {} col {} is not in line, expected row {} col {}",
                placement.tile, placement.row, placement.col, row, col
            ));
        }
        if !dim.contains(row, col) {
            return_error!(format!("row {} col {} is off the board", row, col));
        }
        let Some(letter) = placement.tile.letter() else {
            return_error!(format!("row {} col {}: blank has no letter", row, col));
        };
        match (placement.is_new, board.tile_at(row, col)) {
            (true, Some(existing)) => {
                return_error!(format!(
                    "row {} col {} already has {}",
                    row, col, existing
                ));
            }
            (false, None) => {
                return_error!(format!("row {} col {} is empty", row, col));
            }
            (false, Some(existing)) if existing.letter() != Some(letter) => {
                return_error!(format!(
                    "row {} col {} has {}, not {}",
                    row, col, existing, placement.tile
                ));
            }
            _ => {}
        }
    }
    let num_played = play.num_played();
    if num_played == 0 {
        return_error!(format!("word {} places no tiles", play));
    }

    let last = &placements[placements.len() - 1];
    if board.tile_at(first.row - dr, first.col - dc).is_some()
        || board.tile_at(last.row + dr, last.col + dc).is_some()
    {
        return_error!(format!("word {} does not span its whole run", play));
    }

    let trie = board.trie();
    if !trie.contains(&play.letters()) {
        return_error!(format!("{} is not a word", play));
    }

    if board.has_tiles() {
        if !placements
            .iter()
            .any(|placement| !placement.is_new || board.is_anchor(placement.row, placement.col))
        {
            return_error!(format!("word {} is not connected to the board", play));
        }
    } else {
        let board_layout = board.game_config().board_layout();
        if play
            .placement_at(board_layout.star_row(), board_layout.star_col())
            .is_none()
        {
            return_error!(format!("first word {} does not cover the star", play));
        }
    }

    let premium_at = |placement: &TilePlacement| {
        if placement.is_new {
            board.cell(placement.row, placement.col).premium()
        } else {
            Premium::None
        }
    };

    let mut recounted_score = 0;
    {
        let mut word_multiplier = 1;
        let mut word_score = 0;
        for placement in placements {
            let premium = premium_at(placement);
            word_multiplier *= premium.word_multiplier();
            word_score += placement.tile.points() * premium.letter_multiplier();
        }
        recounted_score += word_score * word_multiplier;
    }

    let (pr, pc) = direction.perpendicular().step();
    for placement in placements.iter().filter(|placement| placement.is_new) {
        let (mut row, mut col) = (placement.row, placement.col);
        while board.tile_at(row - pr, col - pc).is_some() {
            row -= pr;
            col -= pc;
        }
        let mut word = Vec::new();
        let mut word_score = 0;
        let premium = premium_at(placement);
        while let Some(tile) = tile_with_play(board, play, row, col) {
            if placement.is_at(row, col) {
                word_score += tile.points() * premium.letter_multiplier();
            } else if board.tile_at(row, col).is_some() {
                word_score += tile.points();
            } else {
                // another tile of the play, so this cell belongs to the main lane.
                break;
            }
            word.push(tile);
            row += pr;
            col += pc;
        }
        if word.len() < 2 {
            continue;
        }
        let letters = word.iter().filter_map(|tile| tile.letter()).collect::<Vec<_>>();
        if !trie.contains(&letters) {
            return_error!(format!(
                "{} forms {}, which is not a word",
                play,
                fmt_letters(&word)
            ));
        }
        recounted_score += word_score * premium.word_multiplier();
    }

    Ok(recounted_score + board.game_config().num_played_bonus(num_played))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{alphabet, board_layout, game_config, matrix, trie};

    fn tile(c: char) -> Tile {
        Tile::from_char(c).unwrap()
    }

    fn trie_of(words: &[&str]) -> trie::Trie {
        let mut trie = trie::Trie::new();
        for word in words {
            trie.add(&alphabet::ENGLISH_ALPHABET.parse_word(word).unwrap())
                .unwrap();
        }
        trie
    }

    fn standard_board(words: &[&str]) -> Board {
        Board::new(game_config::make_common_english_game_config(), trie_of(words))
    }

    fn plain_board(words: &[&str]) -> Board {
        let layout = board_layout::BoardLayout::plain(matrix::Dim { rows: 15, cols: 15 }).unwrap();
        Board::new(
            game_config::make_common_english_game_config().with_board_layout(layout),
            trie_of(words),
        )
    }

    fn across(row: i8, col: i8, word: &str) -> Vec<TilePlacement> {
        (col..)
            .zip(word.chars())
            .map(|(col, c)| TilePlacement::new(tile(c), row, col, true))
            .collect()
    }

    #[test]
    fn single_tile_on_the_star() {
        let board = standard_board(&[]);
        let placements = [TilePlacement::new(tile('A'), 7, 7, true)];
        assert_eq!(score(&board, &placements, Direction::Across), 2);
    }

    #[test]
    fn seven_new_tiles_earn_the_bonus() {
        let board = plain_board(&[]);
        let mut placements = across(3, 2, "AAAAAAA");
        assert_eq!(score(&board, &placements, Direction::Across), 57);
        placements[3].is_new = false;
        assert_eq!(score(&board, &placements, Direction::Across), 7);
    }

    #[test]
    fn premiums_only_under_new_tiles() {
        let board = standard_board(&[]);
        // (0,3) is a double letter.
        let mut placements = across(0, 3, "KAK");
        assert_eq!(score(&board, &placements, Direction::Across), 16);
        placements[0].is_new = false;
        assert_eq!(score(&board, &placements, Direction::Across), 11);
        // (0,7) is a triple word.
        let mut placements = across(0, 7, "KAK");
        assert_eq!(score(&board, &placements, Direction::Across), 33);
        placements[0].is_new = false;
        assert_eq!(score(&board, &placements, Direction::Across), 11);
    }

    #[test]
    fn blank_scores_nothing_but_still_multiplies() {
        let board = standard_board(&[]);
        let placements = [
            TilePlacement::new(Tile::Blank(Some(11)), 0, 7, true),
            TilePlacement::new(tile('A'), 0, 8, true),
            TilePlacement::new(tile('K'), 0, 9, true),
        ];
        assert_eq!(score(&board, &placements, Direction::Across), 18);
    }

    #[test]
    fn perpendicular_words_are_added_once() {
        let mut board = plain_board(&["AT", "TEA", "EAT"]);
        let mut layout = vec![vec![None; 15]; 15];
        layout[7][7] = Some(tile('A'));
        layout[8][7] = Some(tile('T'));
        board.populate(&layout).unwrap();
        let tea = across(6, 6, "TEA");
        // TEA 3, EAT 3
        assert_eq!(score(&board, &tea, Direction::Across), 6);
        let play = Move::new(tea, Direction::Across, 6);
        assert_eq!(check_play(&board, &play).unwrap(), 6);
    }

    #[test]
    fn perpendicular_word_takes_the_cell_premium() {
        let mut board = standard_board(&["AT", "TEA", "EAT", "HEAT", "HE"]);
        let mut layout = vec![vec![None; 15]; 15];
        layout[7][7] = Some(tile('A'));
        layout[8][7] = Some(tile('T'));
        board.populate(&layout).unwrap();
        // (6,6) and (6,8) are double letters, (6,7) is plain.
        let tea = across(6, 6, "TEA");
        // TEA (2 + 1 + 2), EAT (1 + 1 + 1)
        assert_eq!(score(&board, &tea, Direction::Across), 8);
        let play = Move::new(tea, Direction::Across, 8);
        assert_eq!(check_play(&board, &play).unwrap(), 8);
    }

    #[test]
    fn perpendicular_word_takes_only_its_own_word_multiplier() {
        // (score, check_play) for AT across at (row, col) with one tile already down.
        fn at_across(existing: (usize, usize, char), row: i8, col: i8) -> (i32, i32) {
            let mut board = standard_board(&["AT", "TA"]);
            let mut layout = vec![vec![None; 15]; 15];
            layout[existing.0][existing.1] = Some(tile(existing.2));
            board.populate(&layout).unwrap();
            let placements = across(row, col, "AT");
            let points = score(&board, &placements, Direction::Across);
            let play = Move::new(placements, Direction::Across, points);
            (points, check_play(&board, &play).unwrap())
        }
        // A on the triple word at (0,0) over T: AT across 2 x 3, AT down 2 x 3.
        assert_eq!(at_across((1, 0, 'T'), 0, 0), (12, 12));
        // A on the double word at (1,1) over T: AT across 2 x 2, AT down 2 x 2.
        assert_eq!(at_across((2, 1, 'T'), 1, 1), (8, 8));
        // T on plain (1,2) over A: AT across 2 x 2, TA down 2 with no doubling.
        assert_eq!(at_across((2, 2, 'A'), 1, 1), (6, 6));
    }

    #[test]
    fn check_play_rejects_broken_moves() {
        let mut board = standard_board(&["AT", "CAT", "TA"]);
        let mut layout = vec![vec![None; 15]; 15];
        layout[7][7] = Some(tile('A'));
        layout[7][8] = Some(tile('T'));
        board.populate(&layout).unwrap();

        let cat = Move::new(
            vec![
                TilePlacement::new(tile('C'), 7, 6, true),
                TilePlacement::new(tile('A'), 7, 7, false),
                TilePlacement::new(tile('T'), 7, 8, false),
            ],
            Direction::Across,
            5,
        );
        assert_eq!(check_play(&board, &cat).unwrap(), 5);

        // skips the T already on the board
        let ca = Move::new(
            vec![
                TilePlacement::new(tile('C'), 7, 6, true),
                TilePlacement::new(tile('A'), 7, 7, false),
            ],
            Direction::Across,
            4,
        );
        assert!(check_play(&board, &ca).is_err());

        // not connected
        let far = Move::new(across(0, 0, "AT"), Direction::Across, 0);
        assert!(check_play(&board, &far).is_err());

        // forms AA down
        let at = Move::new(across(6, 7, "AT"), Direction::Across, 0);
        assert!(check_play(&board, &at).is_err());

        // gap in the line
        let gap = Move::new(
            vec![
                TilePlacement::new(tile('A'), 9, 0, true),
                TilePlacement::new(tile('T'), 9, 2, true),
            ],
            Direction::Across,
            0,
        );
        assert!(check_play(&board, &gap).is_err());
    }

    #[test]
    fn first_play_must_cover_the_star() {
        let board = standard_board(&["AT"]);
        let on_star = Move::new(across(7, 7, "AT"), Direction::Across, 4);
        assert_eq!(check_play(&board, &on_star).unwrap(), 4);
        let off_star = Move::new(across(7, 8, "AT"), Direction::Across, 2);
        assert!(check_play(&board, &off_star).is_err());
    }
}
