use crate::position::{Position, Shape};
use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading a board, layout, points or word file
    #[error("File \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error (de)serializing a bincoded word index
    #[cfg(all(feature = "serde", feature = "bincode"))]
    #[error("Word index {0} could not be (de)serialized")]
    WordIndexSerializeError(String),

    /// Error parsing board state: wrong number of rows
    #[error("Invalid number of rows {found} (expect {expected})")]
    InvalidRowCount { expected: usize, found: usize },

    /// Error parsing board state or layout: wrong number of cells in a row
    #[error("Invalid row {row}: length {found}, expect {expected}")]
    InvalidRowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Token in a board state can not be parsed as a letter or an empty cell
    #[error("Invalid board token '{0}'")]
    InvalidToken(String),

    /// Error parsing bonus cell
    #[error("Invalid layout bonus cell: \"{0}\"")]
    GridParseError(String),

    /// A line of the points table is not `<letter> <points>`
    #[error("Invalid line for points: \"{0}\"")]
    PointsParseError(String),

    /// The points table must assign points to exactly 26 letters
    #[error("Expected 26 letters, got {0}")]
    InvalidLetterCount(usize),

    /// The layout has more than one star cell
    #[error("Layout has more than one star cell")]
    MultipleStars,

    /// A word in the word list is not made of letters `A..Z`
    #[error("Invalid word \"{0}\"")]
    InvalidWord(String),

    /// The rack can not be parsed
    #[error("Invalid rack \"{0}\"")]
    InvalidRack(String),

    /// A persisted turn or scored turn can not be parsed
    #[error("Invalid turn \"{0}\"")]
    InvalidTurn(String),

    /// The board and the score map have different dimensions
    #[error("Board is {rows}x{cols}, layout is {layout_rows}x{layout_cols}")]
    SizeMismatch {
        rows: usize,
        cols: usize,
        layout_rows: usize,
        layout_cols: usize,
    },

    /// Positions that should form a single line of the given shape do not
    #[error("Cells from {start} to {end} do not form a {shape} line")]
    ShapeMismatch {
        shape: Shape,
        start: Position,
        end: Position,
    },

    /// A turn that forms no word of two or more letters reached the scorer
    #[error("Turn at {0} forms no word of two or more letters")]
    ScoringInvariant(Position),

    /// Attempt to replace a tile already on the board
    #[error("Attempt to replace tile at row:{row}, col:{col}")]
    TileReplaceError { row: usize, col: usize },
}

impl Error {
    /// Returns true for errors caused by malformed input: files, racks and persisted turns.
    pub fn is_config_error(&self) -> bool {
        !matches!(
            self,
            Error::ShapeMismatch { .. } | Error::ScoringInvariant(_) | Error::TileReplaceError { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors() {
        assert!(Error::InvalidRack(String::from("1")).is_config_error());
        assert!(Error::MultipleStars.is_config_error());
        assert!(Error::InvalidTurn(String::from("7,7")).is_config_error());
        assert!(!Error::ScoringInvariant(Position::new(0, 0)).is_config_error());
        assert!(!Error::TileReplaceError { row: 1, col: 2 }.is_config_error());
        let err = Error::InvalidRowLength {
            row: 3,
            expected: 15,
            found: 14,
        };
        assert_eq!(err.to_string(), "Invalid row 3: length 14, expect 15");
    }
}
