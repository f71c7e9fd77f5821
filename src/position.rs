//! Coordinates on the board and the directions and line shapes between them.
use crate::Error;
use std::fmt;

/// A cell position on the board. Ordered row-major: by `row`, then by `col`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    /// Move one cell in `direction`.
    /// Returns `None` when stepping left of column 0 or above row 0; the far edges
    /// depend on the board size and are checked by [`Grid`](crate::Grid).
    pub fn step(self, direction: Direction) -> Option<Position> {
        self.step_by(direction, 1)
    }

    /// Move `n` cells in `direction`.
    pub fn step_by(self, direction: Direction, n: usize) -> Option<Position> {
        let Position { row, col } = self;
        match direction {
            Direction::Left => col.checked_sub(n).map(|col| Position { row, col }),
            Direction::Right => col.checked_add(n).map(|col| Position { row, col }),
            Direction::Up => row.checked_sub(n).map(|row| Position { row, col }),
            Direction::Down => row.checked_add(n).map(|row| Position { row, col }),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}]", self.row, self.col)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// The four neighbour directions.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn reverse(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// True if the letters met while walking in this direction come in reverse reading order.
    pub fn is_backward(self) -> bool {
        matches!(self, Direction::Left | Direction::Up)
    }
}

/// The orientation of the line a turn is laid on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    Horizontal,
    Vertical,
}

impl Shape {
    /// Both shapes, horizontal first.
    pub const BOTH: [Shape; 2] = [Shape::Horizontal, Shape::Vertical];

    /// Direction towards the start of a word: left or up.
    pub fn start_direction(self) -> Direction {
        match self {
            Shape::Horizontal => Direction::Left,
            Shape::Vertical => Direction::Up,
        }
    }

    /// Direction towards the end of a word: right or down.
    pub fn end_direction(self) -> Direction {
        match self {
            Shape::Horizontal => Direction::Right,
            Shape::Vertical => Direction::Down,
        }
    }

    pub fn opposite(self) -> Shape {
        match self {
            Shape::Horizontal => Shape::Vertical,
            Shape::Vertical => Shape::Horizontal,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Shape::Horizontal => write!(f, "horizontal"),
            Shape::Vertical => write!(f, "vertical"),
        }
    }
}

/// An inclusive straight line of cells from `start` to `end`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Range {
        Range { start, end }
    }

    /// A range covering a single cell.
    pub fn single(pos: Position) -> Range {
        Range::new(pos, pos)
    }

    /// Return the positions from `start` to `end` in reading order.
    /// ## Errors
    /// [`ShapeMismatch`](Error::ShapeMismatch) if `start` and `end` are not on one
    /// row (horizontal) or one column (vertical), or `end` comes before `start`.
    pub fn cells(&self, shape: Shape) -> Result<Vec<Position>, Error> {
        let (start, end) = (self.start, self.end);
        match shape {
            Shape::Horizontal if start.row == end.row && start.col <= end.col => {
                let cols = start.col..=end.col;
                Ok(cols.map(|col| Position::new(start.row, col)).collect())
            }
            Shape::Vertical if start.col == end.col && start.row <= end.row => {
                let rows = start.row..=end.row;
                Ok(rows.map(|row| Position::new(row, start.col)).collect())
            }
            _ => Err(Error::ShapeMismatch { shape, start, end }),
        }
    }

    /// Number of cells in the range, if it is a line of `shape`.
    pub fn len(&self, shape: Shape) -> Result<usize, Error> {
        self.cells(shape).map(|cells| cells.len())
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_row_major() {
        let mut positions = vec![
            Position::new(1, 0),
            Position::new(0, 5),
            Position::new(0, 1),
        ];
        positions.sort();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 1),
                Position::new(0, 5),
                Position::new(1, 0)
            ]
        );
    }

    #[test]
    fn test_step() {
        let pos = Position::new(0, 3);
        assert_eq!(pos.step(Direction::Up), None);
        assert_eq!(pos.step(Direction::Left), Some(Position::new(0, 2)));
        assert_eq!(pos.step_by(Direction::Down, 4), Some(Position::new(4, 3)));
        assert_eq!(pos.step_by(Direction::Left, 4), None);
    }

    #[test]
    fn test_shape_directions() {
        assert_eq!(Shape::Horizontal.start_direction(), Direction::Left);
        assert_eq!(Shape::Vertical.end_direction(), Direction::Down);
        assert_eq!(Shape::Vertical.opposite(), Shape::Horizontal);
        assert_eq!(Direction::Up.reverse(), Direction::Down);
    }

    #[test]
    fn test_range_cells() -> Result<(), Error> {
        let range = Range::new(Position::new(5, 5), Position::new(5, 8));
        assert_eq!(range.len(Shape::Horizontal)?, 4);
        assert_eq!(range.cells(Shape::Horizontal)?[3], Position::new(5, 8));
        assert!(range.cells(Shape::Vertical).is_err());
        let single = Range::single(Position::new(2, 2));
        assert_eq!(single.len(Shape::Vertical)?, 1);
        Ok(())
    }
}
