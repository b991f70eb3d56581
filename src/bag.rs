// Copyright (C) 2020-2024 Andy Kurnia.

use super::play::Move;
use super::tile::Tile;
use super::{alphabet, error};
use rand::prelude::*;

// The full tile supply. Tiles are drawn from the end.
#[derive(Clone)]
pub struct Bag(pub Vec<Tile>);

impl Bag {
    pub fn new(alphabet: &alphabet::Alphabet) -> Bag {
        let mut bag = Vec::with_capacity(alphabet.num_tiles());
        for tile in 0..alphabet.len() {
            let t = if tile == alphabet::BLANK {
                Tile::blank()
            } else {
                Tile::Letter(tile)
            };
            for _ in 0..alphabet.freq(tile) {
                bag.push(t);
            }
        }
        Bag(bag)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }

    pub fn pop(&mut self) -> Option<Tile> {
        self.0.pop()
    }

    pub fn replenish(&mut self, rack: &mut Vec<Tile>, rack_size: usize) {
        while rack.len() < rack_size {
            match self.pop() {
                Some(tile) => rack.push(tile),
                None => break,
            }
        }
    }

    // each tile goes back at a random position, the rest keep their order.
    pub fn put_back<R: Rng + ?Sized>(&mut self, rng: &mut R, tiles: &[Tile]) {
        self.0.reserve(tiles.len());
        for &tile in tiles {
            let tile = if tile.is_blank() { Tile::blank() } else { tile };
            let idx = rng.random_range(0..=self.0.len());
            self.0.insert(idx, tile);
        }
    }
}

// Removes the tiles a move places from the rack. Designated blanks are
// taken from the rack's blanks. The rack is untouched on error.
pub fn take_played(rack: &mut Vec<Tile>, play: &Move) -> error::Returns<()> {
    let mut remaining = rack.clone();
    for placement in play.placements().iter().filter(|p| p.is_new) {
        let wanted = if placement.tile.is_blank() {
            Tile::blank()
        } else {
            placement.tile
        };
        match remaining.iter().position(|&tile| tile == wanted) {
            Some(idx) => {
                remaining.remove(idx);
            }
            None => {
                return_error!(format!("rack does not have {}", wanted));
            }
        }
    }
    *rack = remaining;
    Ok(())
}
