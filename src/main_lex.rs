// Copyright (C) 2020-2024 Andy Kurnia.

use tilewise::{alphabet, error, lexicon, return_error, trie};

fn parse_letters(s: &str) -> error::Returns<Vec<u8>> {
    match alphabet::ENGLISH_ALPHABET.parse_word(s) {
        Some(word) => Ok(word),
        None => {
            return_error!(format!("invalid letters {:?}", s));
        }
    }
}

fn print_words(trie: &trie::Trie) {
    let alphabet = &alphabet::ENGLISH_ALPHABET;
    for word in trie.all_words() {
        println!("{}", alphabet.fmt_word(&word));
    }
}

// args: <words.txt | -> check WORD...
//       <words.txt | -> letters PREFIX SUFFIX
//       <words.txt | -> dump
fn main() -> error::Returns<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = std::env::args().collect::<Vec<_>>();
    if args.len() < 3 {
        println!(
            "args:\n  {0} WORDS check WORD...\n  {0} WORDS letters PREFIX SUFFIX\n  {0} WORDS dump\nWORDS is a word list file, or - for the bundled list",
            args[0]
        );
        return Ok(());
    }
    let trie = lexicon::load_trie(Some(args[1].as_str()).filter(|s| *s != "-"))?;
    let alphabet = &alphabet::ENGLISH_ALPHABET;
    match args[2].as_str() {
        "check" => {
            let mut num_invalid = 0;
            for word in &args[3..] {
                let valid = alphabet
                    .parse_word(word)
                    .is_some_and(|letters| trie.contains(&letters));
                if !valid {
                    num_invalid += 1;
                }
                println!("{} {}", word.to_uppercase(), if valid { "valid" } else { "invalid" });
            }
            if num_invalid > 0 {
                return_error!(format!("{} invalid words", num_invalid));
            }
        }
        "letters" => {
            let prefix = parse_letters(args.get(3).map_or("", String::as_str))?;
            let suffix = parse_letters(args.get(4).map_or("", String::as_str))?;
            let letters = trie.valid_letters(&prefix, &suffix);
            println!(
                "{}_{}: {}",
                alphabet.fmt_word(&prefix),
                alphabet.fmt_word(&suffix),
                alphabet.fmt_word(&letters)
            );
        }
        "dump" => {
            print_words(&trie);
            println!("{} words", trie.len());
        }
        _ => {
            return_error!(format!("invalid command {:?}", args[2]));
        }
    }
    Ok(())
}
