use crate::letter::Letter;
use crate::position::Position;
use crate::Error;
use lazy_static::lazy_static;
use std::fmt;
use std::fs::read_to_string;
use std::str::FromStr;

const N: usize = 15;
const Q: usize = 1 + N / 2;

const DEFAULT_QUARTER_BOARD: [&str; Q] = [
    "TW -- -- DL -- -- -- TW",
    "-- DW -- -- -- TL -- --",
    "-- -- DW -- -- -- DL --",
    "DL -- -- DW -- -- -- DL",
    "-- -- -- -- DW -- -- --",
    "-- TL -- -- -- TL -- --",
    "-- -- DL -- -- -- DL --",
    "TW -- -- DL -- -- -- ST",
];

/// Points for `A` .. `Z`.
const DEFAULT_POINTS: [i64; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

lazy_static! {
    static ref DEFAULT_SCORE_MAP: ScoreMap = ScoreMap::expand_quarter_board(&DEFAULT_QUARTER_BOARD);
}

/// The bonus of a single board cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    Normal,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
    /// The cell the first turn must cover. Scores as a double word.
    Star,
}

use CellKind::{DoubleLetter, DoubleWord, Normal, Star, TripleLetter, TripleWord};

impl CellKind {
    pub fn letter_multiplier(self) -> i64 {
        match self {
            DoubleLetter => 2,
            TripleLetter => 3,
            _ => 1,
        }
    }

    pub fn word_multiplier(self) -> i64 {
        match self {
            DoubleWord | Star => 2,
            TripleWord => 3,
            _ => 1,
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Normal => "--",
            DoubleLetter => "DL",
            TripleLetter => "TL",
            DoubleWord => "DW",
            TripleWord => "TW",
            Star => "ST",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for CellKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "--" => Ok(Normal),
            "DL" => Ok(DoubleLetter),
            "TL" => Ok(TripleLetter),
            "DW" => Ok(DoubleWord),
            "TW" => Ok(TripleWord),
            "ST" => Ok(Star),
            _ => Err(Error::GridParseError(String::from(s))),
        }
    }
}

/// The bonus layout of the board and the points of each letter.
///
/// The layout also fixes the board size: a [`Grid`](crate::Grid) searched with a
/// `ScoreMap` must have the same number of rows and columns.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreMap {
    rows: usize,
    cols: usize,
    cells: Vec<CellKind>,
    points: [i64; 26],
    star: Option<Position>,
}

impl Default for ScoreMap {
    /// The standard 15x15 layout with the standard english letter points.
    fn default() -> Self {
        DEFAULT_SCORE_MAP.clone()
    }
}

impl fmt::Display for ScoreMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl ScoreMap {
    /// Create a symmetrical layout by mirroring a quarter board
    /// horizontally and vertically
    fn expand_quarter_board(qb: &[&str; Q]) -> ScoreMap {
        let mut cells = vec![Normal; N * N];
        for (i, row) in qb.iter().enumerate() {
            for (j, token) in row.split(' ').enumerate() {
                // the quarter board is a constant, all its tokens are valid
                let val = token.parse().unwrap_or(Normal);
                cells[i * N + j] = val;
                cells[(N - i - 1) * N + j] = val;
                cells[i * N + (N - j - 1)] = val;
                cells[(N - i - 1) * N + (N - j - 1)] = val;
            }
        }
        ScoreMap {
            rows: N,
            cols: N,
            cells,
            points: DEFAULT_POINTS,
            star: Some(Position::new(N / 2, N / 2)),
        }
    }

    /// Create a `ScoreMap` from a layout and a points table.
    ///
    /// Each `layout` line is a row of cells separated by spaces: `--` (no bonus), `DL`, `TL`
    /// (double/triple letter), `DW`, `TW` (double/triple word) or `ST` (start). All rows
    /// must have the same length. Each `points` line is a letter followed by its points.
    /// Blank lines are skipped.
    /// ## Errors
    /// - If a layout cell can not be parsed, or the rows differ in length.
    /// - If the layout has more than one star.
    /// - If the points table does not list exactly 26 different letters.
    /// ## Examples
    /// ```
    /// # use wordboard_solver::{ScoreMap, Error};
    /// let layout = &["TW -- DL", "-- ST --", "DL -- TW"];
    /// let points: Vec<String> = (b'A'..=b'Z').map(|c| format!("{} 1", c as char)).collect();
    /// let map = ScoreMap::from_strings(layout, &points)?;
    /// assert_eq!(map.rows(), 3);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_strings<S: AsRef<str>, T: AsRef<str>>(layout: &[S], points: &[T]) -> Result<ScoreMap, Error> {
        let mut cells = Vec::new();
        let mut cols = None;
        let mut rows = 0;
        for line in layout.iter().map(AsRef::as_ref).filter(|l| !l.trim().is_empty()) {
            let row = line
                .split_whitespace()
                .map(str::parse)
                .collect::<Result<Vec<CellKind>, Error>>()?;
            let expected = *cols.get_or_insert(row.len());
            if row.len() != expected {
                return Err(Error::InvalidRowLength {
                    row: rows,
                    expected,
                    found: row.len(),
                });
            }
            cells.extend(row);
            rows += 1;
        }
        let cols = cols.unwrap_or(0);
        let mut stars = cells.iter().enumerate().filter(|&(_, &cell)| cell == Star);
        let star = stars
            .next()
            .map(|(i, _)| Position::new(i / cols, i % cols));
        if stars.next().is_some() {
            return Err(Error::MultipleStars);
        }
        Ok(ScoreMap {
            rows,
            cols,
            cells,
            points: parse_points(points)?,
            star,
        })
    }

    /// Read the layout and points tables from files, see [`from_strings`](ScoreMap::from_strings).
    /// ## Errors
    /// If a file can not be read or parsed.
    pub fn from_files(layout_path: &str, points_path: &str) -> Result<ScoreMap, Error> {
        let read = |path: &str| {
            read_to_string(path).map_err(|source| Error::ReadError {
                path: String::from(path),
                source,
            })
        };
        let layout = read(layout_path)?;
        let points = read(points_path)?;
        let layout: Vec<&str> = layout.lines().collect();
        let points: Vec<&str> = points.lines().collect();
        let map = ScoreMap::from_strings(&layout, &points)?;
        log::info!("Loaded scoreboard: {} rows by {} cols", map.rows, map.cols);
        Ok(map)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The start cell, if the layout has one.
    pub fn star(&self) -> Option<Position> {
        self.star
    }

    /// The bonus of the cell at `pos`.
    /// ## Panics
    /// If `pos` is outside the layout.
    pub fn cell(&self, pos: Position) -> CellKind {
        assert!(pos.row < self.rows && pos.col < self.cols, "{} outside layout", pos);
        self.cells[pos.row * self.cols + pos.col]
    }

    pub fn letter_multiplier(&self, pos: Position) -> i64 {
        self.cell(pos).letter_multiplier()
    }

    pub fn word_multiplier(&self, pos: Position) -> i64 {
        self.cell(pos).word_multiplier()
    }

    /// Points for `letter`. A letter played from a wildcard is worth nothing.
    pub fn letter_value(&self, letter: Letter) -> i64 {
        if letter.is_wildcard() {
            0
        } else {
            self.points[letter.index()]
        }
    }

    /// Get the layout as strings, one per row.
    pub fn to_strings(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols.max(1))
            .map(|row| {
                row.iter()
                    .map(CellKind::to_string)
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect()
    }
}

fn parse_points<T: AsRef<str>>(lines: &[T]) -> Result<[i64; 26], Error> {
    let mut points = [0; 26];
    let mut seen = [false; 26];
    for line in lines.iter().map(AsRef::as_ref).filter(|l| !l.trim().is_empty()) {
        let invalid = || Error::PointsParseError(String::from(line));
        let elements: Vec<&str> = line.split_whitespace().collect();
        if elements.len() != 2 {
            return Err(invalid());
        }
        let mut chars = elements[0].chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(ch), None) if ch.is_ascii_alphabetic() => Letter::new(ch),
            _ => return Err(invalid()),
        };
        let value: i64 = elements[1].parse().map_err(|_| invalid())?;
        points[letter.index()] = value;
        seen[letter.index()] = true;
    }
    let count = seen.iter().filter(|&&s| s).count();
    if count != 26 {
        return Err(Error::InvalidLetterCount(count));
    }
    Ok(points)
}
