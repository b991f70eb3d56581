// Copyright (C) 2020-2024 Andy Kurnia.

use super::{alphabet, board_layout};

pub struct GameConfig {
    alphabet: &'static alphabet::Alphabet,
    board_layout: board_layout::BoardLayout,
    rack_size: i8,
    bingo_bonus: i32,
    max_moves: usize,
}

impl GameConfig {
    #[inline(always)]
    pub fn alphabet(&self) -> &'static alphabet::Alphabet {
        self.alphabet
    }

    #[inline(always)]
    pub fn board_layout(&self) -> &board_layout::BoardLayout {
        &self.board_layout
    }

    #[inline(always)]
    pub fn rack_size(&self) -> i8 {
        self.rack_size
    }

    // number of moves get_moves() keeps
    #[inline(always)]
    pub fn max_moves(&self) -> usize {
        self.max_moves
    }

    #[inline(always)]
    pub fn num_played_bonus(&self, num_played: usize) -> i32 {
        if num_played == self.rack_size as usize {
            self.bingo_bonus
        } else {
            0
        }
    }

    pub fn with_board_layout(mut self, board_layout: board_layout::BoardLayout) -> Self {
        self.board_layout = board_layout;
        self
    }

    pub fn with_max_moves(mut self, max_moves: usize) -> Self {
        self.max_moves = max_moves;
        self
    }
}

pub fn make_common_english_game_config() -> GameConfig {
    GameConfig {
        alphabet: &alphabet::ENGLISH_ALPHABET,
        board_layout: board_layout::make_standard_board_layout(),
        rack_size: 7,
        bingo_bonus: 50,
        max_moves: 10,
    }
}
