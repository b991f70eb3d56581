// Copyright (C) 2020-2024 Andy Kurnia.

use tilewise::{board, board_layout, display, error, game_config, lexicon, notation};

// rack: letters, ? for a blank.
// board: one string per row. '.' for empty, A for A, a for blank-as-A.
// count: maximum number of moves returned (default 10).
// layout: optional csv file of premiums, implies the board size.
// words: optional word list file, one word per line.
// (equal scores keep generation order.)
#[derive(serde::Deserialize)]
struct Question {
    rack: String,
    board: Vec<String>,
    #[serde(rename = "count")]
    max_moves: Option<usize>,
    layout: Option<String>,
    words: Option<String>,
}

static SAMPLE_QUESTION: &str = r#"
  {
    "rack": "TSS",
    "board": [
      "...............",
      "...............",
      "...............",
      "...............",
      "...............",
      "...............",
      "...............",
      ".......CA.TER..",
      "...............",
      "...............",
      "...............",
      "...............",
      "...............",
      "...............",
      "..............."
    ],
    "count": 5
  }
"#;

// args: [question.json | -]. no args answers a sample question.
fn main() -> error::Returns<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let data = match std::env::args().nth(1) {
        None => SAMPLE_QUESTION.to_string(),
        Some(path) if path == "-" => std::io::read_to_string(std::io::stdin())?,
        Some(path) => std::fs::read_to_string(path)?,
    };
    let question = serde_json::from_str::<Question>(&data)?;

    let mut game_config = game_config::make_common_english_game_config();
    if let Some(filename) = &question.layout {
        let layout = board_layout::BoardLayout::from_csv(std::fs::File::open(filename)?)?;
        game_config = game_config.with_board_layout(layout);
    }
    if let Some(max_moves) = question.max_moves {
        game_config = game_config.with_max_moves(max_moves);
    }
    let trie = lexicon::load_trie(question.words.as_deref())?;
    let rack = notation::parse_rack(&question.rack)?;
    let mut board = board::Board::new(game_config, trie);
    let layout = notation::parse_board_rows(&question.board, board.dim())?;
    board.populate(&layout)?;
    display::print_board(&board, None);

    let moves = board.get_moves(&rack);
    println!("found {} moves", moves.len());
    for play in moves.iter() {
        println!("{}", notation::fmt_move(play));
    }

    let mut result = Vec::<serde_json::Value>::with_capacity(moves.len());
    for play in moves.iter() {
        let (row, col) = play.start().unwrap_or((0, 0));
        // row and col are 0-based.
        // blank: the tile is a blank standing for letter.
        // new: false for tiles already on the board.
        let placements = play
            .placements()
            .iter()
            .map(|placement| {
                serde_json::json!({
                    "row": placement.row,
                    "col": placement.col,
                    "letter": placement.tile.label(),
                    "blank": placement.tile.is_blank(),
                    "new": placement.is_new })
            })
            .collect::<Vec<_>>();
        result.push(serde_json::json!({
            "position": notation::fmt_position(row, col, play.direction()),
            "down": play.direction().is_down(),
            "row": row,
            "col": col,
            "word": notation::fmt_word(play),
            "score": play.score(),
            "placements": placements }));
    }
    let ret = serde_json::to_value(result)?;
    println!("{}", serde_json::to_string_pretty(&ret)?);

    Ok(())
}
