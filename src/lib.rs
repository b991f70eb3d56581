// Copyright (C) 2020-2024 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod alphabet;
pub mod bag;
pub mod board;
pub mod board_layout;
pub mod display;
pub mod game_config;
pub mod lexicon;
pub mod matrix;
pub mod movegen;
pub mod notation;
pub mod play;
pub mod play_scorer;
pub mod tile;
pub mod trie;
