use crate::config::SearchConfig;
use crate::dedup::dedup;
use crate::grid::Grid;
use crate::letter::{spell, Letters};
use crate::rack::Rack;
use crate::scoremap::ScoreMap;
use crate::scorer::{check_size, score_with_config};
use crate::search::Search;
use crate::turn::Turn;
use crate::validator::is_legal;
use crate::wordindex::WordIndex;
use crate::Error;
#[cfg(feature = "flame_it")]
use flamer::flame;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::time::Instant;

/// A turn with its score.
pub type Scored = (Turn, i64);

/// Find every legal turn for `rack` on `board`, best first.
/// ## Errors
/// If `board` and `score_map` differ in size, or an internal check fails.
/// ## Examples
/// ```
/// use wordboard_solver::{search, Grid, Rack, ScoreMap, WordIndex};
/// let board = Grid::new(15, 15);
/// let index = WordIndex::from_words(&["cat", "at", "ca"])?;
/// let rack: Rack = "CAT".parse()?;
/// let turns = search(&board, &rack, &index, &ScoreMap::default())?;
/// let (best, score) = &turns[0];
/// assert_eq!(best.len(), 3);
/// assert_eq!(*score, 10);
/// # Ok::<(), wordboard_solver::Error>(())
/// ```
pub fn search(
    board: &Grid,
    rack: &Rack,
    dictionary: &WordIndex,
    score_map: &ScoreMap,
) -> Result<Vec<Scored>, Error> {
    search_with_config(board, rack, dictionary, score_map, &SearchConfig::default())
}

/// Find every legal turn for `rack` on `board`, best first, see [`search`].
///
/// Candidates are checked against the whole board if `config.validate` is set, then
/// duplicates are removed. Turns with equal scores keep the order they were found in.
#[cfg_attr(feature = "flame_it", flame)]
pub fn search_with_config(
    board: &Grid,
    rack: &Rack,
    dictionary: &WordIndex,
    score_map: &ScoreMap,
    config: &SearchConfig,
) -> Result<Vec<Scored>, Error> {
    check_size(board, score_map)?;
    let now = Instant::now();
    let turns = find_candidates(board, rack, dictionary, score_map)?;
    log::info!("Generated {} candidate turns.", turns.len());

    let turns = if config.validate {
        let legal = filter_legal(turns, board, dictionary);
        log::info!("Validation resulted in {} turns.", legal.len());
        legal
    } else {
        turns
    };
    let turns = dedup(turns);
    log::info!("Deduping resulted in {} turns.", turns.len());

    let mut scored = turns
        .into_iter()
        .map(|turn| {
            let points = score_with_config(board, &turn, score_map, config)?;
            Ok((turn, points))
        })
        .collect::<Result<Vec<Scored>, Error>>()?;
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    log::info!("Search for {} took {:?}", rack, now.elapsed());
    Ok(scored)
}

/// Grow the candidate turns for every way to resolve the wildcards of `rack`.
/// Candidates are given in wildcard assignment order, unchecked and with duplicates.
pub fn find_candidates(
    board: &Grid,
    rack: &Rack,
    dictionary: &WordIndex,
    score_map: &ScoreMap,
) -> Result<Vec<Turn>, Error> {
    let search = Search::new(board, dictionary, score_map.star());
    let assignments: Vec<Letters> = rack.assignments().collect();
    let find = |assignment: &Letters| -> Result<Vec<Turn>, Error> {
        let turns = search.find_turns(rack.with_assignment(assignment))?;
        log::debug!(
            "{} candidates with wildcards [{}]",
            turns.len(),
            spell(assignment.iter())
        );
        Ok(turns)
    };
    #[cfg(feature = "rayon")]
    let found = assignments
        .par_iter()
        .map(find)
        .collect::<Result<Vec<Vec<Turn>>, Error>>()?;
    #[cfg(not(feature = "rayon"))]
    let found = assignments
        .iter()
        .map(find)
        .collect::<Result<Vec<Vec<Turn>>, Error>>()?;
    Ok(found.into_iter().flatten().collect())
}

#[cfg(feature = "rayon")]
fn filter_legal(turns: Vec<Turn>, board: &Grid, dictionary: &WordIndex) -> Vec<Turn> {
    turns
        .into_par_iter()
        .filter(|turn| is_legal(turn, board, dictionary))
        .collect()
}

#[cfg(not(feature = "rayon"))]
fn filter_legal(turns: Vec<Turn>, board: &Grid, dictionary: &WordIndex) -> Vec<Turn> {
    turns
        .into_iter()
        .filter(|turn| is_legal(turn, board, dictionary))
        .collect()
}

/// Persisted form of a scored turn: `score||placements`.
/// ## Examples
/// ```
/// use wordboard_solver::{serialize_scored, Letter, Placement, Position, Range, Shape, Turn};
/// let pos = Position::new(5, 8);
/// let turn = Turn::new(Placement::new(pos, Letter::new('S')), Range::single(pos), Shape::Horizontal);
/// assert_eq!(serialize_scored(&(turn, 9)), "9||5,8S");
/// ```
pub fn serialize_scored(scored: &Scored) -> String {
    format!("{}||{}", scored.1, scored.0.serialize())
}
