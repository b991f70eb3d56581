// Copyright (C) 2020-2024 Andy Kurnia.

use super::{alphabet, error, trie};

pub static BUNDLED_WORDS: &str = include_str!("../data/words.txt");

// One word per line, either case. Blank lines are ignored, lines with
// anything outside A-Z are skipped (and logged).
pub fn read_english_words(giant_string: &str) -> Vec<Vec<u8>> {
    let alphabet = &alphabet::ENGLISH_ALPHABET;
    let mut words = Vec::new();
    let mut num_skipped = 0usize;
    for (line_num, line) in giant_string.lines().enumerate() {
        let s = line.trim();
        if s.is_empty() {
            continue;
        }
        match alphabet.parse_word(s) {
            Some(word) => words.push(word),
            None => {
                num_skipped += 1;
                tracing::warn!(line = line_num + 1, word = s, "skipping malformed word");
            }
        }
    }
    if num_skipped > 0 {
        tracing::warn!(num_skipped, "some words were skipped");
    }
    words
}

pub fn build_trie(giant_string: &str) -> error::Returns<trie::Trie> {
    let t0 = std::time::Instant::now();
    let words = read_english_words(giant_string);
    let trie = trie::Trie::from_words(words.iter().map(|word| &word[..]))?;
    tracing::info!(
        num_words = trie.len(),
        elapsed = ?t0.elapsed(),
        "dictionary loaded"
    );
    Ok(trie)
}

// None means the word list compiled into the binary.
pub fn load_trie(path: Option<&str>) -> error::Returns<trie::Trie> {
    match path {
        Some(path) => {
            let giant_string = match std::fs::read_to_string(path) {
                Ok(s) => s,
                Err(err) => {
                    return_error!(format!("cannot read word list {:?}: {}", path, err));
                }
            };
            build_trie(&giant_string)
        }
        None => build_trie(BUNDLED_WORDS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_skips_blank_and_malformed_lines() {
        let words = read_english_words("cat\n\n  DOG  \nCAN'T\nhello world\nZoo\n");
        let alphabet = &alphabet::ENGLISH_ALPHABET;
        let labels = words
            .iter()
            .map(|word| alphabet.fmt_word(word))
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["CAT", "DOG", "ZOO"]);
    }

    #[test]
    fn bundled_list_loads() {
        let trie = build_trie(BUNDLED_WORDS).unwrap();
        assert!(trie.len() > 1000);
        let alphabet = &alphabet::ENGLISH_ALPHABET;
        for word in ["CAT", "CATS", "HEAT", "CHEAT", "SCATTER", "QUIZ"] {
            assert!(trie.contains(&alphabet.parse_word(word).unwrap()), "{}", word);
        }
    }
}
