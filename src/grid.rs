use crate::letter::{spell, Letter};
use crate::position::{Direction, Position, Range, Shape};
use crate::turn::Turn;
use crate::Error;
use std::convert::TryFrom;
use std::fmt;
use std::fs::read_to_string;

/// The letters on a rectangular board of `rows` x `cols` cells.
///
/// A `Grid` is only read during a search. Turns are tried on copies made with
/// [`apply`](Grid::apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Letter>>,
}

/// Display the board in the persisted format: one line per row, cells separated by a
/// space, `-` for an empty cell, lowercase for a letter played from a wildcard.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = self
            .cells
            .chunks(self.cols.max(1))
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or('-', |letter| letter.serialize()).to_string())
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect::<Vec<String>>()
            .join("\n");
        write!(f, "{}", repr)
    }
}

impl Grid {
    /// Create a new empty board.
    pub fn new(rows: usize, cols: usize) -> Grid {
        Grid {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Parse board state from a list of strings.
    ///
    /// Each row holds `cols` whitespace separated tokens: `-` for an empty cell, an
    /// uppercase letter for a regular tile and a lowercase letter for a tile played from
    /// a wildcard. Blank lines are skipped.
    /// ## Errors
    /// If the number of rows or columns differs from `rows`/`cols`, or a token is invalid.
    /// ## Examples
    /// ```
    /// use wordboard_solver::{Grid, Position};
    /// let grid = Grid::from_strings(&["- - -", "D o G", "- - -"], 3, 3)?;
    /// assert_eq!(grid.get(Position::new(1, 1)).map(|l| l.is_wildcard()), Some(true));
    /// # Ok::<(), wordboard_solver::Error>(())
    /// ```
    pub fn from_strings<S: AsRef<str>>(lines: &[S], rows: usize, cols: usize) -> Result<Grid, Error> {
        let mut cells = Vec::with_capacity(rows * cols);
        let mut found = 0;
        for line in lines.iter().map(AsRef::as_ref).filter(|l| !l.trim().is_empty()) {
            let row = line
                .split_whitespace()
                .map(parse_cell)
                .collect::<Result<Vec<_>, Error>>()?;
            if row.len() != cols {
                return Err(Error::InvalidRowLength {
                    row: found,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend(row);
            found += 1;
        }
        if found != rows {
            return Err(Error::InvalidRowCount {
                expected: rows,
                found,
            });
        }
        Ok(Grid { rows, cols, cells })
    }

    /// Read board state from `path`, see [`from_strings`](Grid::from_strings).
    /// ## Errors
    /// If the file can not be read or parsed.
    pub fn from_file(path: &str, rows: usize, cols: usize) -> Result<Grid, Error> {
        let text = read_to_string(path).map_err(|source| Error::ReadError {
            path: String::from(path),
            source,
        })?;
        let lines: Vec<&str> = text.lines().collect();
        let grid = Grid::from_strings(&lines, rows, cols)?;
        log::info!("Loaded board {} ({} rows by {} cols)", path, rows, cols);
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Return the letter at `pos`.
    /// ## Panics
    /// If `pos` is outside the board; check with [`is_in_bounds`](Grid::is_in_bounds).
    pub fn get(&self, pos: Position) -> Option<Letter> {
        assert!(self.is_in_bounds(pos), "{} outside board", pos);
        self.cells[pos.row * self.cols + pos.col]
    }

    /// Return the letter at `pos`, or None if the cell is empty or outside the board.
    pub fn get_checked(&self, pos: Position) -> Option<Letter> {
        if self.is_in_bounds(pos) {
            self.get(pos)
        } else {
            None
        }
    }

    /// Check if cell at `pos` holds a letter.
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.get_checked(pos).is_some()
    }

    /// Return the neighbour of `pos` in `direction`, if it is on the board.
    pub fn neighbor(&self, pos: Position, direction: Direction) -> Option<Position> {
        pos.step(direction).filter(|&p| self.is_in_bounds(p))
    }

    /// True if no cell holds a letter.
    pub fn is_empty_board(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Iterate all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }

    /// True if any of the four neighbours of `pos` holds a letter.
    pub fn has_filled_neighbor(&self, pos: Position) -> bool {
        Direction::ALL
            .iter()
            .filter_map(|&direction| self.neighbor(pos, direction))
            .any(|p| self.is_occupied(p))
    }

    /// Return all empty cells next to a letter, in row-major order.
    /// On a non-empty board every turn must start on one of these.
    pub fn anchor_cells(&self) -> Vec<Position> {
        self.positions()
            .filter(|&pos| !self.is_occupied(pos) && self.has_filled_neighbor(pos))
            .collect()
    }

    /// Walk from the neighbour of `pos` in `direction` until an empty cell or the edge.
    /// Returns the letters passed, in reading order (left to right, top to bottom)
    /// whatever the walking direction.
    pub fn run_until_empty(&self, pos: Position, direction: Direction) -> Vec<Letter> {
        let mut letters = Vec::new();
        let mut cur = pos;
        while let Some(next) = self.neighbor(cur, direction) {
            match self.get(next) {
                Some(letter) => letters.push(letter),
                None => break,
            }
            cur = next;
        }
        if direction.is_backward() {
            letters.reverse();
        }
        letters
    }

    /// Return the first empty cell strictly beyond `pos` in `direction`,
    /// or None if the edge comes first.
    pub fn next_empty(&self, pos: Position, direction: Direction) -> Option<Position> {
        let mut cur = pos;
        loop {
            cur = self.neighbor(cur, direction)?;
            if !self.is_occupied(cur) {
                return Some(cur);
            }
        }
    }

    /// Return the last cell of the contiguous letters next to `pos` in `direction`,
    /// or `pos` itself if its neighbour is empty.
    pub fn last_filled(&self, pos: Position, direction: Direction) -> Position {
        let mut cur = pos;
        while let Some(next) = self.neighbor(cur, direction) {
            if !self.is_occupied(next) {
                break;
            }
            cur = next;
        }
        cur
    }

    /// Return the word and its range formed along `shape` if `letter` is placed at the
    /// empty cell `pos`, using the letters on the board only.
    pub fn word_through(&self, pos: Position, letter: Letter, shape: Shape) -> (String, Range) {
        let start = self.last_filled(pos, shape.start_direction());
        let end = self.last_filled(pos, shape.end_direction());
        let prefix = self.run_until_empty(pos, shape.start_direction());
        let suffix = self.run_until_empty(pos, shape.end_direction());
        let mut word = spell(&prefix);
        word.push(letter.ch());
        word.push_str(&spell(&suffix));
        (word, Range::new(start, end))
    }

    /// Return the letters of row (`Horizontal`) or column (`Vertical`) `index`.
    pub fn line(&self, shape: Shape, index: usize) -> Vec<Option<Letter>> {
        match shape {
            Shape::Horizontal => (0..self.cols)
                .map(|col| self.get(Position::new(index, col)))
                .collect(),
            Shape::Vertical => (0..self.rows)
                .map(|row| self.get(Position::new(row, index)))
                .collect(),
        }
    }

    /// Return a copy of the board with the placements of `turn` written in.
    /// ## Errors
    /// - [`TileReplaceError`](Error::TileReplaceError) if a target cell is occupied.
    /// - [`ShapeMismatch`](Error::ShapeMismatch) if a target cell is outside the board.
    pub fn apply(&self, turn: &Turn) -> Result<Grid, Error> {
        let mut grid = self.clone();
        for placement in turn.placements() {
            let pos = placement.position;
            if !self.is_in_bounds(pos) {
                return Err(Error::ShapeMismatch {
                    shape: turn.shape(),
                    start: pos,
                    end: pos,
                });
            }
            if self.is_occupied(pos) {
                return Err(Error::TileReplaceError {
                    row: pos.row,
                    col: pos.col,
                });
            }
            grid.cells[pos.row * self.cols + pos.col] = Some(placement.letter);
        }
        Ok(grid)
    }
}

fn parse_cell(token: &str) -> Result<Option<Letter>, Error> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some('-'), None) => Ok(None),
        (Some(ch), None) => Letter::try_from(ch)
            .map(Some)
            .map_err(|_| Error::InvalidToken(String::from(token))),
        _ => Err(Error::InvalidToken(String::from(token))),
    }
}
