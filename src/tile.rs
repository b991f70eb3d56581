// Copyright (C) 2020-2024 Andy Kurnia.

use super::{alphabet, error};

// A physical tile. Letters are catalog numbers (1 = A).
// A blank starts undesignated and may be designated exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Letter(u8),
    Blank(Option<u8>),
}

impl Tile {
    pub fn from_char(c: char) -> error::Returns<Tile> {
        match alphabet::ENGLISH_ALPHABET.tile_of(c) {
            Some(alphabet::BLANK) => Ok(Tile::Blank(None)),
            Some(tile) => Ok(Tile::Letter(tile)),
            None => {
                return_error!(format!("invalid tile {:?}", c));
            }
        }
    }

    #[inline(always)]
    pub fn blank() -> Tile {
        Tile::Blank(None)
    }

    // the one-way Unset -> Assigned transition.
    pub fn designate(self, letter: u8) -> error::Returns<Tile> {
        if !alphabet::ENGLISH_ALPHABET.is_letter(letter) {
            return_error!(format!("cannot designate blank as tile {}", letter));
        }
        match self {
            Tile::Blank(None) => Ok(Tile::Blank(Some(letter))),
            Tile::Blank(Some(already)) => {
                return_error!(format!(
                    "blank has already been designated as {}",
                    alphabet::ENGLISH_ALPHABET.label(already).unwrap_or("#")
                ));
            }
            Tile::Letter(_) => {
                return_error!("only a blank can be designated".into());
            }
        }
    }

    // the letter this tile matches, None for an undesignated blank.
    #[inline(always)]
    pub fn letter(&self) -> Option<u8> {
        match *self {
            Tile::Letter(tile) => Some(tile),
            Tile::Blank(designated) => designated,
        }
    }

    #[inline(always)]
    pub fn is_blank(&self) -> bool {
        matches!(self, Tile::Blank(_))
    }

    #[inline(always)]
    pub fn points(&self) -> i32 {
        match *self {
            Tile::Letter(tile) => alphabet::ENGLISH_ALPHABET.score(tile) as i32,
            Tile::Blank(_) => 0,
        }
    }

    // uppercase letter, or '?' for an undesignated blank.
    pub fn label(&self) -> &'static str {
        self.letter()
            .and_then(|tile| alphabet::ENGLISH_ALPHABET.label(tile))
            .unwrap_or("?")
    }

    // like label(), but designated blanks are lowercase.
    pub fn board_label(&self) -> &'static str {
        match *self {
            Tile::Letter(tile) => alphabet::ENGLISH_ALPHABET.label(tile).unwrap_or("?"),
            Tile::Blank(Some(tile)) => alphabet::ENGLISH_ALPHABET.blank_label(tile).unwrap_or("?"),
            Tile::Blank(None) => "?",
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board_label())
    }
}

pub fn fmt_tiles(tiles: &[Tile]) -> String {
    tiles.iter().map(|tile| tile.board_label()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_points_come_from_catalog() {
        assert_eq!(Tile::from_char('Z').unwrap().points(), 10);
        assert_eq!(Tile::from_char('e').unwrap().points(), 1);
        assert!(Tile::from_char('#').is_err());
    }

    #[test]
    fn blank_is_designated_once() {
        let blank = Tile::from_char('?').unwrap();
        assert_eq!(blank, Tile::blank());
        assert_eq!(blank.letter(), None);
        let as_q = blank.designate(17).unwrap();
        assert_eq!(as_q.letter(), Some(17));
        assert_eq!(as_q.points(), 0);
        assert_eq!(as_q.label(), "Q");
        assert_eq!(as_q.board_label(), "q");
        assert!(as_q.designate(1).is_err());
        assert!(Tile::Letter(1).designate(2).is_err());
        assert!(Tile::blank().designate(0).is_err());
    }

    #[test]
    fn tiles_format_as_rack() {
        let tiles = [
            Tile::Letter(3),
            Tile::blank(),
            Tile::Blank(Some(20)),
        ];
        assert_eq!(fmt_tiles(&tiles), "C?t");
    }
}
