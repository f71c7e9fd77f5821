//! A turn finder for Scrabble-like word games.
//! <br>
//! Given a board, a rack of letters and a word list, this crate finds every legal turn,
//! scores it against the bonus layout of the board and returns the turns ranked by score.
//! Wildcards in the rack are tried as every letter. With the `rayon` feature (on by
//! default) the wildcard assignments are searched in parallel.
//!
//! # How to use `wordboard_solver`
//! Load the board layout and letter points into a [`ScoreMap`], or use the standard
//! 15x15 layout from [`ScoreMap::default`]. Build a [`WordIndex`] from a word list, with
//! one word per line. Load the letters on the board into a [`Grid`] of the same size
//! as the layout, and parse the rack of the player into a [`Rack`]: letters, with `*`
//! for a wildcard.
//!
//! # Basic usage
//! ```
//! use wordboard_solver::{search, Grid, Rack, ScoreMap, WordIndex};
//!
//! let score_map = ScoreMap::default();
//! let index = WordIndex::from_words(&["rust", "rest", "rusts"])?;
//! let board = Grid::from_strings(
//!     &[
//!         "- - - - - - - - - - - - - - -",
//!         "- - - - - - - - - - - - - - -",
//!         "- - - - - - - - - - - - - - -",
//!         "- - - - - - - - - - - - - - -",
//!         "- - - - - - - - - - - - - - -",
//!         "- - - - - - - - - - - - - - -",
//!         "- - - - - - - - - - - - - - -",
//!         "- - - - - - - R U S T - - - -",
//!         "- - - - - - - - - - - - - - -",
//!         "- - - - - - - - - - - - - - -",
//!         "- - - - - - - - - - - - - - -",
//!         "- - - - - - - - - - - - - - -",
//!         "- - - - - - - - - - - - - - -",
//!         "- - - - - - - - - - - - - - -",
//!         "- - - - - - - - - - - - - - -",
//!     ],
//!     score_map.rows(),
//!     score_map.cols(),
//! )?;
//! let rack: Rack = "ES*".parse()?;
//! let turns = search(&board, &rack, &index, &score_map)?;
//! for (turn, score) in &turns {
//!     println!("{} {}", score, turn);
//! }
//! let (best, _) = &turns[0];
//! println!("{}", board.apply(best)?);
//! # Ok::<(), wordboard_solver::Error>(())
//! ```
//!
//! # About implementation
//! A search starts with one letter on a cell next to the letters on the board (or on
//! the star of an empty board) and grows it along a row or a column, one letter at a
//! time, for as long as the letters on the line are part of a word in the index. Every
//! letter laid must also make a word across the line. The candidates are then checked
//! against the whole board, deduplicated and scored.
mod config;
mod dedup;
mod error;
mod golden;
mod grid;
mod letter;
mod letterset;
mod position;
mod rack;
mod scoremap;
mod scorer;
mod search;
mod solver;
mod turn;
mod validator;
mod wordindex;

pub use config::SearchConfig;
pub use dedup::dedup;
pub use error::Error;
pub use golden::{compare_scored, deserialize_scored, read_scored, Comparison};
pub use grid::Grid;
pub use letter::{Letter, Letters, DIM};
pub use position::{Direction, Position, Range, Shape};
pub use rack::{DistinctChoices, Rack, WildcardAssignments, MAX_WILDCARDS};
pub use scoremap::{CellKind, ScoreMap};
pub use scorer::{score, score_with_config};
pub use search::Search;
pub use solver::{find_candidates, search, search_with_config, serialize_scored, Scored};
pub use turn::{Placement, Turn};
pub use validator::{is_legal, is_valid_board};
pub use wordindex::{WordEntry, WordIndex};
