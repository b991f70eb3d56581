// Copyright (C) 2020-2024 Andy Kurnia.

use rand::prelude::*;
use tilewise::{
    bag, board, display, error, game_config, lexicon, notation, play_scorer, return_error, tile,
};

// Draws racks from a seeded bag and keeps playing the top move, checking
// every generated move against the independent scorer.
// args: [seed] [num_rounds] [words.txt]
fn main() -> error::Returns<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = std::env::args().collect::<Vec<_>>();
    let seed = match args.get(1) {
        Some(s) => s.parse::<u64>()?,
        None => 0,
    };
    let num_rounds = match args.get(2) {
        Some(s) => s.parse::<u64>()?,
        None => 1,
    };
    let trie = lexicon::load_trie(args.get(3).map(String::as_str))?;
    let game_config = game_config::make_common_english_game_config().with_max_moves(usize::MAX);
    let rack_size = game_config.rack_size() as usize;
    let mut board = board::Board::new(game_config, trie);

    let mut num_checked = 0usize;
    let mut num_bad = 0usize;
    for round in 0..num_rounds {
        println!("\nround {} (seed {})", round + 1, seed.wrapping_add(round));
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(seed.wrapping_add(round));
        let mut bag = bag::Bag::new(board.game_config().alphabet());
        bag.shuffle(&mut rng);
        board.reset();

        let mut rack = Vec::<tile::Tile>::with_capacity(rack_size);
        let mut zero_turns = 0;
        let mut total_score = 0;
        loop {
            bag.replenish(&mut rack, rack_size);
            if rack.is_empty() {
                println!("rack is empty");
                break;
            }
            let moves = board.get_moves(&rack);
            if !moves.windows(2).all(|w| w[0].score() >= w[1].score()) {
                num_bad += 1;
                println!("moves are not sorted");
            }
            for play in moves.iter() {
                num_checked += 1;
                match play_scorer::check_play(&board, play) {
                    Ok(recounted_score) if recounted_score == play.score() => {}
                    Ok(recounted_score) => {
                        num_bad += 1;
                        println!(
                            "{} scores {}, recounted {}",
                            notation::fmt_move(play),
                            play.score(),
                            recounted_score
                        );
                    }
                    Err(err) => {
                        num_bad += 1;
                        println!("{} is invalid: {}", notation::fmt_move(play), err);
                    }
                }
            }

            println!("rack: {} ({} moves)", tile::fmt_tiles(&rack), moves.len());
            let Some(best) = moves.first() else {
                zero_turns += 1;
                if zero_turns >= 3 || bag.len() < rack_size {
                    println!("no moves, stopping");
                    break;
                }
                println!("no moves, exchanging");
                let old_rack = std::mem::take(&mut rack);
                bag.replenish(&mut rack, rack_size);
                bag.put_back(&mut rng, &old_rack);
                continue;
            };
            zero_turns = 0;
            total_score += best.score();
            println!("play: {}", notation::fmt_move(best));
            board.accept_move(best)?;
            bag::take_played(&mut rack, best)?;
        }
        display::print_board(&board, None);
        println!("total score {}, {} tiles left in bag", total_score, bag.len());
    }

    println!("checked {} moves, {} problems", num_checked, num_bad);
    if num_bad > 0 {
        return_error!(format!("{} problems found", num_bad));
    }
    Ok(())
}
