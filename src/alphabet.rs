// Copyright (C) 2020-2024 Andy Kurnia.

// Tile numbering: 0 is the blank, 1 is A, ..., 26 is Z.
// The trie, cross sets and rack tallies all use this numbering.

pub struct TileInfo {
    label: &'static str,
    blank_label: &'static str,
    freq: u8,
    score: i8,
}

pub struct StaticAlphabet {
    tiles: &'static [TileInfo],
}

pub enum Alphabet {
    Static(StaticAlphabet),
}

pub const BLANK: u8 = 0;

impl Alphabet {
    #[inline(always)]
    fn tiles(&self) -> &'static [TileInfo] {
        match self {
            Alphabet::Static(x) => x.tiles,
        }
    }

    // includes the blank
    #[inline(always)]
    pub fn len(&self) -> u8 {
        self.tiles().len() as u8
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn num_letters(&self) -> u8 {
        self.len() - 1
    }

    #[inline(always)]
    pub fn is_letter(&self, tile: u8) -> bool {
        tile != BLANK && tile < self.len()
    }

    #[inline(always)]
    pub fn label(&self, tile: u8) -> Option<&'static str> {
        self.tiles().get(tile as usize).map(|x| x.label)
    }

    #[inline(always)]
    pub fn blank_label(&self, tile: u8) -> Option<&'static str> {
        if tile == BLANK {
            return None;
        }
        self.tiles().get(tile as usize).map(|x| x.blank_label)
    }

    // face value, the blank is always worth nothing
    #[inline(always)]
    pub fn score(&self, tile: u8) -> i8 {
        self.tiles().get(tile as usize).map_or(0, |x| x.score)
    }

    #[inline(always)]
    pub fn freq(&self, tile: u8) -> u8 {
        self.tiles().get(tile as usize).map_or(0, |x| x.freq)
    }

    pub fn num_tiles(&self) -> usize {
        self.tiles().iter().map(|x| x.freq as usize).sum()
    }

    // accepts either case, '?' is the blank.
    pub fn tile_of(&self, c: char) -> Option<u8> {
        if c == '?' {
            return Some(BLANK);
        }
        let upper = c.to_ascii_uppercase();
        (1..self.len()).find(|&tile| {
            let mut chars = self.tiles()[tile as usize].label.chars();
            chars.next() == Some(upper) && chars.next().is_none()
        })
    }

    // letters only, no blank.
    pub fn parse_word(&self, s: &str) -> Option<Vec<u8>> {
        let mut v = Vec::with_capacity(s.len());
        for c in s.chars() {
            match self.tile_of(c) {
                Some(tile) if tile != BLANK => v.push(tile),
                _ => return None,
            }
        }
        Some(v)
    }

    pub fn fmt_word(&self, word: &[u8]) -> String {
        word.iter()
            .map(|&tile| self.label(tile).unwrap_or("#"))
            .collect()
    }
}

pub static ENGLISH_ALPHABET: Alphabet = Alphabet::Static(StaticAlphabet {
    tiles: &[
        TileInfo {
            label: "?",
            blank_label: "?",
            freq: 2,
            score: 0,
        },
        TileInfo {
            label: "A",
            blank_label: "a",
            freq: 9,
            score: 1,
        },
        TileInfo {
            label: "B",
            blank_label: "b",
            freq: 2,
            score: 3,
        },
        TileInfo {
            label: "C",
            blank_label: "c",
            freq: 2,
            score: 3,
        },
        TileInfo {
            label: "D",
            blank_label: "d",
            freq: 4,
            score: 2,
        },
        TileInfo {
            label: "E",
            blank_label: "e",
            freq: 12,
            score: 1,
        },
        TileInfo {
            label: "F",
            blank_label: "f",
            freq: 2,
            score: 4,
        },
        TileInfo {
            label: "G",
            blank_label: "g",
            freq: 3,
            score: 2,
        },
        TileInfo {
            label: "H",
            blank_label: "h",
            freq: 2,
            score: 4,
        },
        TileInfo {
            label: "I",
            blank_label: "i",
            freq: 9,
            score: 1,
        },
        TileInfo {
            label: "J",
            blank_label: "j",
            freq: 1,
            score: 8,
        },
        TileInfo {
            label: "K",
            blank_label: "k",
            freq: 1,
            score: 5,
        },
        TileInfo {
            label: "L",
            blank_label: "l",
            freq: 4,
            score: 1,
        },
        TileInfo {
            label: "M",
            blank_label: "m",
            freq: 2,
            score: 3,
        },
        TileInfo {
            label: "N",
            blank_label: "n",
            freq: 6,
            score: 1,
        },
        TileInfo {
            label: "O",
            blank_label: "o",
            freq: 8,
            score: 1,
        },
        TileInfo {
            label: "P",
            blank_label: "p",
            freq: 2,
            score: 3,
        },
        TileInfo {
            label: "Q",
            blank_label: "q",
            freq: 1,
            score: 10,
        },
        TileInfo {
            label: "R",
            blank_label: "r",
            freq: 6,
            score: 1,
        },
        TileInfo {
            label: "S",
            blank_label: "s",
            freq: 4,
            score: 1,
        },
        TileInfo {
            label: "T",
            blank_label: "t",
            freq: 6,
            score: 1,
        },
        TileInfo {
            label: "U",
            blank_label: "u",
            freq: 4,
            score: 1,
        },
        TileInfo {
            label: "V",
            blank_label: "v",
            freq: 2,
            score: 4,
        },
        TileInfo {
            label: "W",
            blank_label: "w",
            freq: 2,
            score: 4,
        },
        TileInfo {
            label: "X",
            blank_label: "x",
            freq: 1,
            score: 8,
        },
        TileInfo {
            label: "Y",
            blank_label: "y",
            freq: 2,
            score: 4,
        },
        TileInfo {
            label: "Z",
            blank_label: "z",
            freq: 1,
            score: 10,
        },
    ],
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_a_hundred_tiles() {
        assert_eq!(ENGLISH_ALPHABET.len(), 27);
        assert_eq!(ENGLISH_ALPHABET.num_tiles(), 100);
        assert_eq!(ENGLISH_ALPHABET.score(BLANK), 0);
        assert_eq!(ENGLISH_ALPHABET.freq(BLANK), 2);
    }

    #[test]
    fn letters_map_to_catalog_entries() {
        let k = ENGLISH_ALPHABET.tile_of('K').unwrap();
        assert_eq!(k, 11);
        assert_eq!(ENGLISH_ALPHABET.score(k), 5);
        assert_eq!(ENGLISH_ALPHABET.tile_of('q'), Some(17));
        assert_eq!(ENGLISH_ALPHABET.tile_of('?'), Some(BLANK));
        assert_eq!(ENGLISH_ALPHABET.tile_of('1'), None);
        assert_eq!(ENGLISH_ALPHABET.blank_label(k), Some("k"));
    }

    #[test]
    fn parse_word_rejects_foreign_characters() {
        assert_eq!(ENGLISH_ALPHABET.parse_word("cat"), Some(vec![3, 1, 20]));
        assert_eq!(ENGLISH_ALPHABET.parse_word("CAN'T"), None);
        assert_eq!(ENGLISH_ALPHABET.parse_word("C?T"), None);
        assert_eq!(ENGLISH_ALPHABET.fmt_word(&[3, 1, 20]), "CAT");
    }
}
