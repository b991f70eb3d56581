// Copyright (C) 2020-2024 Andy Kurnia.

use super::{alphabet, error};

// Child tile of a node whose path spells a complete word.
pub const EOW: u8 = 0;

const ROOT: usize = 0;

struct Node {
    tile: u8,
    children: Vec<u32>, // insertion order
}

// Prefix tree over tile numbers. Built once, read-only afterwards.
pub struct Trie {
    nodes: Vec<Node>,
    num_words: usize,
    num_letters: u8,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub fn new() -> Trie {
        Trie {
            nodes: vec![Node {
                tile: EOW,
                children: Vec::new(),
            }],
            num_words: 0,
            num_letters: alphabet::ENGLISH_ALPHABET.num_letters(),
        }
    }

    pub fn from_words<'a, I: IntoIterator<Item = &'a [u8]>>(words: I) -> error::Returns<Trie> {
        let mut trie = Trie::new();
        for word in words {
            trie.add(word)?;
        }
        Ok(trie)
    }

    #[inline(always)]
    pub fn root(&self) -> usize {
        ROOT
    }

    // number of distinct words
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.num_words
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.num_words == 0
    }

    #[inline(always)]
    pub fn tile(&self, p: usize) -> u8 {
        self.nodes[p].tile
    }

    #[inline(always)]
    pub fn child(&self, p: usize, tile: u8) -> Option<usize> {
        self.nodes[p]
            .children
            .iter()
            .map(|&q| q as usize)
            .find(|&q| self.nodes[q].tile == tile)
    }

    // true if the path to p is a complete word.
    #[inline(always)]
    pub fn accepts(&self, p: usize) -> bool {
        self.child(p, EOW).is_some()
    }

    // letter children in insertion order, the end-of-word marker is skipped.
    pub fn children(&self, p: usize) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.nodes[p].children.iter().filter_map(move |&q| {
            let tile = self.nodes[q as usize].tile;
            (tile != EOW).then_some((tile, q as usize))
        })
    }

    pub fn seek(&self, mut p: usize, tiles: &[u8]) -> Option<usize> {
        for &tile in tiles {
            p = self.child(p, tile)?;
        }
        Some(p)
    }

    fn add_child(&mut self, p: usize, tile: u8) -> usize {
        if let Some(q) = self.child(p, tile) {
            return q;
        }
        let q = self.nodes.len();
        self.nodes.push(Node {
            tile,
            children: Vec::new(),
        });
        self.nodes[p].children.push(q as u32);
        q
    }

    // returns false if the word was already there.
    pub fn add(&mut self, word: &[u8]) -> error::Returns<bool> {
        if word.is_empty() {
            return_error!("cannot add an empty word".into());
        }
        if let Some(&bad) = word
            .iter()
            .find(|&&tile| tile == EOW || tile > self.num_letters)
        {
            return_error!(format!("invalid tile {} in word {:?}", bad, word));
        }
        let mut p = ROOT;
        for &tile in word {
            p = self.add_child(p, tile);
        }
        if self.accepts(p) {
            return Ok(false);
        }
        self.add_child(p, EOW);
        self.num_words += 1;
        Ok(true)
    }

    pub fn contains(&self, word: &[u8]) -> bool {
        !word.is_empty() && self.contains_suffix(ROOT, word)
    }

    // descending by exactly these tiles from p reaches a complete word.
    pub fn contains_suffix(&self, p: usize, suffix: &[u8]) -> bool {
        self.seek(p, suffix).is_some_and(|q| self.accepts(q))
    }

    // Letters x such that prefix + x + suffix is a word, in trie order.
    // With no prefix and no suffix nothing constrains the cell, every letter is valid.
    pub fn valid_letters(&self, prefix: &[u8], suffix: &[u8]) -> Vec<u8> {
        if prefix.is_empty() && suffix.is_empty() {
            return (1..=self.num_letters).collect();
        }
        let Some(p) = self.seek(ROOT, prefix) else {
            return Vec::new();
        };
        self.children(p)
            .filter(|&(_, q)| {
                if suffix.is_empty() {
                    self.accepts(q)
                } else {
                    self.contains_suffix(q, suffix)
                }
            })
            .map(|(tile, _)| tile)
            .collect()
    }

    // every stored word, in insertion order of the branches.
    pub fn all_words(&self) -> Vec<Vec<u8>> {
        struct Env<'a> {
            trie: &'a Trie,
            word: Vec<u8>,
            words: Vec<Vec<u8>>,
        }
        fn iter(env: &mut Env, p: usize) {
            for &q in &env.trie.nodes[p].children {
                let tile = env.trie.nodes[q as usize].tile;
                if tile == EOW {
                    env.words.push(env.word.clone());
                } else {
                    env.word.push(tile);
                    iter(env, q as usize);
                    env.word.pop();
                }
            }
        }
        let mut env = Env {
            trie: self,
            word: Vec::new(),
            words: Vec::with_capacity(self.num_words),
        };
        iter(&mut env, ROOT);
        env.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(s: &str) -> Vec<u8> {
        alphabet::ENGLISH_ALPHABET.parse_word(s).unwrap()
    }

    fn trie_of(words: &[&str]) -> Trie {
        let mut trie = Trie::new();
        for word in words {
            trie.add(&w(word)).unwrap();
        }
        trie
    }

    fn letters(s: &str) -> Vec<u8> {
        w(s)
    }

    #[test]
    fn added_words_are_enumerated() {
        let trie = trie_of(&["HELLO", "WORLD", "HELP", "HE"]);
        assert_eq!(trie.len(), 4);
        let all = trie.all_words();
        assert_eq!(all.len(), 4);
        for word in ["HELLO", "WORLD", "HELP", "HE"] {
            assert!(all.contains(&w(word)), "{}", word);
            assert!(trie.contains(&w(word)));
        }
        assert!(!trie.contains(&w("HEL")));
        assert!(!trie.contains(&w("WORLDS")));
    }

    #[test]
    fn enumeration_follows_insertion_order() {
        let trie = trie_of(&["AT", "AN", "B"]);
        assert_eq!(trie.all_words(), vec![w("AT"), w("AN"), w("B")]);
        let trie = trie_of(&["ABC", "ABD", "A"]);
        assert_eq!(trie.all_words(), vec![w("ABC"), w("ABD"), w("A")]);
    }

    #[test]
    fn repeated_insertion_is_idempotent() {
        let mut trie = Trie::new();
        assert!(trie.add(&w("CAT")).unwrap());
        let nodes = trie.nodes.len();
        assert!(!trie.add(&w("CAT")).unwrap());
        assert_eq!(trie.nodes.len(), nodes);
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.all_words(), vec![w("CAT")]);
    }

    #[test]
    fn malformed_words_leave_trie_untouched() {
        let mut trie = trie_of(&["CAT"]);
        let nodes = trie.nodes.len();
        assert!(trie.add(&[3, 27, 20]).is_err());
        assert!(trie.add(&[3, EOW]).is_err());
        assert!(trie.add(&[]).is_err());
        assert_eq!(trie.nodes.len(), nodes);
        assert_eq!(trie.all_words(), vec![w("CAT")]);
    }

    #[test]
    fn contains_suffix_from_inner_node() {
        let trie = trie_of(&["ABC"]);
        let a = trie.child(trie.root(), 1).unwrap();
        assert!(trie.contains_suffix(a, &letters("BC")));
        assert!(!trie.contains_suffix(a, &letters("BD")));
        assert!(!trie.contains_suffix(a, &letters("BCE")));
        assert!(!trie.contains_suffix(a, &letters("B")));
    }

    #[test]
    fn unconstrained_cell_allows_every_letter() {
        let trie = trie_of(&["CAT"]);
        assert_eq!(trie.valid_letters(&[], &[]), (1..=26).collect::<Vec<u8>>());
    }

    #[test]
    fn valid_letters_between_prefix_and_suffix() {
        let trie = trie_of(&[
            "HEAVY", "HEAVEN", "HELLO", "HELP", "HEN", "GIVEN", "VALUE", "VALVE",
        ]);
        assert_eq!(trie.valid_letters(&letters("HEAV"), &[]), letters("Y"));
        assert_eq!(trie.valid_letters(&letters("HE"), &letters("LO")), letters("L"));
        assert_eq!(trie.valid_letters(&[], &letters("EN")), letters("H"));
        assert_eq!(trie.valid_letters(&letters("VAL"), &letters("E")), letters("UV"));
        assert!(trie.valid_letters(&letters("XYZ"), &[]).is_empty());
        assert!(trie.valid_letters(&letters("HEA"), &letters("Q")).is_empty());
    }

    #[test]
    fn valid_letters_need_a_complete_word() {
        let mut trie = trie_of(&["HEAVY", "HEAVEN"]);
        assert_eq!(trie.valid_letters(&letters("HEAV"), &[]), letters("Y"));
        trie.add(&w("HEAVE")).unwrap();
        assert_eq!(trie.valid_letters(&letters("HEAV"), &[]), letters("YE"));
    }
}
