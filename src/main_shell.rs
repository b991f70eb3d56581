// Copyright (C) 2020-2024 Andy Kurnia.

use tilewise::{
    bag, board, board_layout, display, error, game_config, lexicon, notation, play, return_error,
    tile,
};

static HELP: &str = "\
commands:
  board                 show the board
  rack [TILES]          show or set the rack, ? is a blank
  set POS TILE          put a tile at POS (8H), lowercase for a blank
  load FILE             replace the board with a text file, one line per row
  gen                   list the best moves for the rack
  show N                show move N on the board
  accept N              play move N and take its tiles off the rack
  reset                 clear the board
  source FILE           run commands from a file
  exit";

struct Shell {
    board: board::Board,
    rack: Vec<tile::Tile>,
    moves: Vec<play::Move>,
}

impl Shell {
    fn nth_move(&self, arg: Option<&String>) -> error::Returns<&play::Move> {
        let Some(arg) = arg else {
            return_error!("need a move number".into());
        };
        match arg.parse::<usize>() {
            Ok(n) if n >= 1 && n <= self.moves.len() => Ok(&self.moves[n - 1]),
            _ => {
                return_error!(format!(
                    "invalid move number {:?}, gen lists {} moves",
                    arg,
                    self.moves.len()
                ));
            }
        }
    }

    fn print_moves(&self) {
        println!("found {} moves", self.moves.len());
        for (i, play) in self.moves.iter().enumerate() {
            println!("{:2}: {}", i + 1, notation::fmt_move(play));
        }
    }

    // false to exit
    fn run(&mut self, strings: &[String]) -> error::Returns<bool> {
        match strings[0].as_str() {
            "help" => {
                println!("{}", HELP);
            }
            "exit" => {
                return Ok(false);
            }
            "board" => {
                display::print_board(&self.board, None);
            }
            "rack" => {
                if let Some(s) = strings.get(1) {
                    self.rack = notation::parse_rack(s)?;
                    self.moves.clear();
                }
                println!("rack: {}", tile::fmt_tiles(&self.rack));
            }
            "set" => {
                if strings.len() < 3 {
                    return_error!("need a position and a tile".into());
                }
                let (row, col, _) = notation::parse_position(&strings[1], self.board.dim())?;
                let mut chars = strings[2].chars();
                let (Some(c), None) = (chars.next(), chars.next()) else {
                    return_error!(format!("invalid tile {:?}", strings[2]));
                };
                let Some(tile) = notation::parse_board_cell(c)? else {
                    return_error!(format!("invalid tile {:?}", strings[2]));
                };
                self.board.place_tile(row, col, tile)?;
                self.board.calculate_anchors_and_cross_checks();
                self.moves.clear();
                display::print_board(&self.board, None);
            }
            "load" => {
                let Some(filename) = strings.get(1) else {
                    return_error!("need a file name".into());
                };
                let text = std::fs::read_to_string(filename)?;
                let layout = notation::parse_board(&text, self.board.dim())?;
                self.board.populate(&layout)?;
                self.moves.clear();
                display::print_board(&self.board, None);
            }
            "gen" => {
                let t0 = std::time::Instant::now();
                self.moves = self.board.get_moves(&self.rack);
                tracing::info!(elapsed = ?t0.elapsed(), "generated");
                self.print_moves();
            }
            "show" => {
                let play = self.nth_move(strings.get(1))?;
                println!("{}", notation::fmt_move(play));
                display::print_board(&self.board, Some(play));
            }
            "accept" => {
                let play = self.nth_move(strings.get(1))?.clone();
                self.board.accept_move(&play)?;
                if let Err(err) = bag::take_played(&mut self.rack, &play) {
                    println!("rack: {}", err);
                }
                self.moves.clear();
                println!("played {}", notation::fmt_move(&play));
                display::print_board(&self.board, None);
                println!("rack: {}", tile::fmt_tiles(&self.rack));
            }
            "reset" => {
                self.board.reset();
                self.moves.clear();
            }
            _ => {
                println!("invalid input, help for help");
            }
        }
        Ok(true)
    }
}

// args: [words.txt] [layout.csv]
fn main() -> error::Returns<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = std::env::args().collect::<Vec<_>>();
    let trie = lexicon::load_trie(args.get(1).map(String::as_str).filter(|s| *s != "-"))?;
    let mut game_config = game_config::make_common_english_game_config();
    if let Some(filename) = args.get(2) {
        let layout = board_layout::BoardLayout::from_csv(std::fs::File::open(filename)?)?;
        game_config = game_config.with_board_layout(layout);
    }
    let mut shell = Shell {
        board: board::Board::new(game_config, trie),
        rack: Vec::new(),
        moves: Vec::new(),
    };

    let mut rl = rustyline::DefaultEditor::new()?;
    let mut cmd_stack = Vec::<(String, Option<(String, usize)>)>::new();
    loop {
        if let Some((line, source)) = cmd_stack.pop() {
            if let Some((filename, line_num)) = source {
                println!("{}:{}> {}", filename, line_num, line);
            }
            let strings = match shell_words::split(&line) {
                Ok(strings) => strings,
                Err(err) => {
                    println!("bad quoting: {}", err);
                    continue;
                }
            };
            if strings.is_empty() {
                continue;
            }
            if strings[0] == "source" {
                let Some(filename) = strings.get(1) else {
                    println!("need a file name");
                    continue;
                };
                match std::fs::read_to_string(filename) {
                    Ok(whole_file) => {
                        let v = cmd_stack.len();
                        for (line_num, line) in whole_file.lines().enumerate() {
                            cmd_stack.push((line.to_string(), Some((filename.clone(), line_num + 1))));
                        }
                        cmd_stack[v..].reverse();
                    }
                    Err(err) => {
                        println!("cannot open file: {}", err);
                    }
                }
                continue;
            }
            match shell.run(&strings) {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) => {
                    println!("error: {}", err);
                }
            }
        } else {
            match rl.readline(">> ") {
                Ok(line) => {
                    let _ = rl.add_history_entry(line.as_str());
                    cmd_stack.push((line, None));
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
    }

    Ok(())
}
