// Copyright (C) 2020-2024 Andy Kurnia.

use super::{error, matrix};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Premium {
    #[default]
    None,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Multipliers {
    pub word_multiplier: i8,
    pub letter_multiplier: i8,
}

// indexed by Premium discriminant
static MULTIPLIERS: [Multipliers; 5] = [
    Multipliers {
        word_multiplier: 1,
        letter_multiplier: 1,
    },
    Multipliers {
        word_multiplier: 1,
        letter_multiplier: 2,
    },
    Multipliers {
        word_multiplier: 1,
        letter_multiplier: 3,
    },
    Multipliers {
        word_multiplier: 2,
        letter_multiplier: 1,
    },
    Multipliers {
        word_multiplier: 3,
        letter_multiplier: 1,
    },
];

impl Premium {
    #[inline(always)]
    pub fn multipliers(self) -> Multipliers {
        MULTIPLIERS[self as usize]
    }

    #[inline(always)]
    pub fn word_multiplier(self) -> i32 {
        self.multipliers().word_multiplier as i32
    }

    #[inline(always)]
    pub fn letter_multiplier(self) -> i32 {
        self.multipliers().letter_multiplier as i32
    }

    pub fn label(self) -> &'static str {
        match self {
            Premium::None => "",
            Premium::DoubleLetter => "DL",
            Premium::TripleLetter => "TL",
            Premium::DoubleWord => "DW",
            Premium::TripleWord => "TW",
        }
    }

    pub fn from_label(s: &str) -> Option<Premium> {
        match s.trim() {
            "" => Some(Premium::None),
            "DL" => Some(Premium::DoubleLetter),
            "TL" => Some(Premium::TripleLetter),
            "DW" => Some(Premium::DoubleWord),
            "TW" => Some(Premium::TripleWord),
            _ => None,
        }
    }
}

pub struct BoardLayout {
    premiums: Box<[Premium]>,
    dim: matrix::Dim,
    star_row: i8,
    star_col: i8,
}

// positions are i8 and lane bases i16, keep lanes short.
const MAX_LANE_LEN: i8 = 32;

impl BoardLayout {
    // the star goes in the middle.
    pub fn new(dim: matrix::Dim, premiums: Box<[Premium]>) -> error::Returns<BoardLayout> {
        if dim.rows <= 0 || dim.cols <= 0 || dim.rows > MAX_LANE_LEN || dim.cols > MAX_LANE_LEN {
            return_error!(format!(
                "invalid board dimensions {}x{}",
                dim.rows, dim.cols
            ));
        }
        if premiums.len() != dim.num_cells() {
            return_error!(format!(
                "board {}x{} needs {} premiums, found {}",
                dim.rows,
                dim.cols,
                dim.num_cells(),
                premiums.len()
            ));
        }
        Ok(BoardLayout {
            premiums,
            dim,
            star_row: dim.rows / 2,
            star_col: dim.cols / 2,
        })
    }

    // one record per row, one field per column, fields are TW/DW/TL/DL or blank.
    pub fn from_csv<R: std::io::Read>(reader: R) -> error::Returns<BoardLayout> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut premiums = Vec::new();
        let mut rows = 0i8;
        let mut cols = 0i8;
        for result in csv_reader.records() {
            let record = result?;
            if rows == 0 {
                cols = record.len() as i8;
            }
            for (col, field) in record.iter().enumerate() {
                match Premium::from_label(field) {
                    Some(premium) => premiums.push(premium),
                    None => {
                        return_error!(format!(
                            "layout row {} col {} (0-based): invalid premium {:?}",
                            rows, col, field
                        ));
                    }
                }
            }
            rows = rows.saturating_add(1);
        }
        BoardLayout::new(matrix::Dim { rows, cols }, premiums.into_boxed_slice())
    }

    pub fn plain(dim: matrix::Dim) -> error::Returns<BoardLayout> {
        BoardLayout::new(dim, vec![Premium::None; dim.num_cells()].into_boxed_slice())
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.dim
    }

    #[inline(always)]
    pub fn star_row(&self) -> i8 {
        self.star_row
    }

    #[inline(always)]
    pub fn star_col(&self) -> i8 {
        self.star_col
    }

    #[inline(always)]
    pub fn premiums(&self) -> &[Premium] {
        &self.premiums
    }

    #[inline(always)]
    pub fn premium_at(&self, row: i8, col: i8) -> Premium {
        self.premiums[self.dim.at_row_col(row, col)]
    }

    pub fn to_csv(&self) -> String {
        let mut s = String::new();
        for row in 0..self.dim.rows {
            for col in 0..self.dim.cols {
                if col > 0 {
                    s.push(',');
                }
                s.push_str(self.premium_at(row, col).label());
            }
            s.push('\n');
        }
        s
    }
}

const TW: Premium = Premium::TripleWord;
const DW: Premium = Premium::DoubleWord;
const TL: Premium = Premium::TripleLetter;
const DL: Premium = Premium::DoubleLetter;
const FV: Premium = Premium::None;

static STANDARD_PREMIUMS: [Premium; 225] = [
    TW, FV, FV, DL, FV, FV, FV, TW, FV, FV, FV, DL, FV, FV, TW, //
    FV, DW, FV, FV, FV, TL, FV, FV, FV, TL, FV, FV, FV, DW, FV, //
    FV, FV, DW, FV, FV, FV, DL, FV, DL, FV, FV, FV, DW, FV, FV, //
    DL, FV, FV, DW, FV, FV, FV, DL, FV, FV, FV, DW, FV, FV, DL, //
    FV, FV, FV, FV, DW, FV, FV, FV, FV, FV, DW, FV, FV, FV, FV, //
    FV, TL, FV, FV, FV, TL, FV, FV, FV, TL, FV, FV, FV, TL, FV, //
    FV, FV, DL, FV, FV, FV, DL, FV, DL, FV, FV, FV, DL, FV, FV, //
    TW, FV, FV, DL, FV, FV, FV, DW, FV, FV, FV, DL, FV, FV, TW, //
    FV, FV, DL, FV, FV, FV, DL, FV, DL, FV, FV, FV, DL, FV, FV, //
    FV, TL, FV, FV, FV, TL, FV, FV, FV, TL, FV, FV, FV, TL, FV, //
    FV, FV, FV, FV, DW, FV, FV, FV, FV, FV, DW, FV, FV, FV, FV, //
    DL, FV, FV, DW, FV, FV, FV, DL, FV, FV, FV, DW, FV, FV, DL, //
    FV, FV, DW, FV, FV, FV, DL, FV, DL, FV, FV, FV, DW, FV, FV, //
    FV, DW, FV, FV, FV, TL, FV, FV, FV, TL, FV, FV, FV, DW, FV, //
    TW, FV, FV, DL, FV, FV, FV, TW, FV, FV, FV, DL, FV, FV, TW, //
];

pub fn make_standard_board_layout() -> BoardLayout {
    BoardLayout {
        premiums: Box::new(STANDARD_PREMIUMS),
        dim: matrix::Dim { rows: 15, cols: 15 },
        star_row: 7,
        star_col: 7,
    }
}
