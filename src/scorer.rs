use crate::config::SearchConfig;
use crate::grid::Grid;
use crate::letter::Letter;
use crate::position::{Direction, Position};
use crate::scoremap::ScoreMap;
use crate::turn::Turn;
use crate::Error;

/// A letter of a scored word. `is_new` is set for letters laid in the turn.
#[derive(Debug, Clone, Copy)]
struct ScoredLetter {
    position: Position,
    letter: Letter,
    is_new: bool,
}

/// Score `turn` laid on `grid`, with the default [`SearchConfig`].
/// See [`score_with_config`].
pub fn score(grid: &Grid, turn: &Turn, score_map: &ScoreMap) -> Result<i64, Error> {
    score_with_config(grid, turn, score_map, &SearchConfig::default())
}

/// Score `turn` laid on `grid`.
///
/// The turn scores its main word, along its shape, and every word it forms across
/// the main word. Words of a single letter do not count. Letter and word bonuses only
/// apply to cells covered in this turn. Using a full rack adds the bingo bonus once.
/// ## Errors
/// - [`SizeMismatch`](Error::SizeMismatch) if `grid` and `score_map` differ in size.
/// - [`ScoringInvariant`](Error::ScoringInvariant) if the turn forms no word of two or
///   more letters.
pub fn score_with_config(
    grid: &Grid,
    turn: &Turn,
    score_map: &ScoreMap,
    config: &SearchConfig,
) -> Result<i64, Error> {
    check_size(grid, score_map)?;
    let first = turn
        .placements()
        .next()
        .ok_or_else(|| Error::ScoringInvariant(turn.range().start))?;
    let shape = turn.shape();
    let mut words = Vec::with_capacity(turn.len() + 1);
    words.push(word_at(
        grid,
        Some(turn),
        first.position,
        first.letter,
        shape.start_direction(),
        shape.end_direction(),
    ));
    let cross = shape.opposite();
    for placement in turn.placements() {
        words.push(word_at(
            grid,
            None,
            placement.position,
            placement.letter,
            cross.start_direction(),
            cross.end_direction(),
        ));
    }
    let mut total = 0;
    let mut counted = 0;
    for word in words.iter().filter(|word| word.len() > 1) {
        total += word_score(score_map, word);
        counted += 1;
    }
    if counted == 0 {
        return Err(Error::ScoringInvariant(first.position));
    }
    if turn.len() == config.rack_capacity {
        total += config.bingo_bonus;
    }
    Ok(total)
}

pub(crate) fn check_size(grid: &Grid, score_map: &ScoreMap) -> Result<(), Error> {
    if grid.rows() != score_map.rows() || grid.cols() != score_map.cols() {
        return Err(Error::SizeMismatch {
            rows: grid.rows(),
            cols: grid.cols(),
            layout_rows: score_map.rows(),
            layout_cols: score_map.cols(),
        });
    }
    Ok(())
}

/// The word through `pos`, holding the new `letter`, read from `start` to `end`.
/// Letters of `turn` are included only if it is given.
fn word_at(
    grid: &Grid,
    turn: Option<&Turn>,
    pos: Position,
    letter: Letter,
    start: Direction,
    end: Direction,
) -> Vec<ScoredLetter> {
    let mut word = walk(grid, turn, pos, start);
    word.reverse();
    word.push(ScoredLetter {
        position: pos,
        letter,
        is_new: true,
    });
    word.extend(walk(grid, turn, pos, end));
    word
}

/// Letters next to `pos` in `direction` up to the first empty cell, nearest first.
fn walk(grid: &Grid, turn: Option<&Turn>, pos: Position, direction: Direction) -> Vec<ScoredLetter> {
    let mut letters = Vec::new();
    let mut cur = pos;
    while let Some(next) = grid.neighbor(cur, direction) {
        let scored = match (grid.get(next), turn.and_then(|t| t.letter_at(next))) {
            (Some(letter), _) => ScoredLetter {
                position: next,
                letter,
                is_new: false,
            },
            (None, Some(letter)) => ScoredLetter {
                position: next,
                letter,
                is_new: true,
            },
            (None, None) => break,
        };
        letters.push(scored);
        cur = next;
    }
    letters
}

fn word_score(score_map: &ScoreMap, word: &[ScoredLetter]) -> i64 {
    let mut points = 0;
    let mut word_multiplier = 1;
    for scored in word {
        let value = score_map.letter_value(scored.letter);
        if scored.is_new {
            points += value * score_map.letter_multiplier(scored.position);
            word_multiplier *= score_map.word_multiplier(scored.position);
        } else {
            points += value;
        }
    }
    points * word_multiplier
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::{Range, Shape};
    use crate::turn::Placement;

    type Result<T> = std::result::Result<T, Error>;

    fn horizontal(row: usize, col: usize, word: &str) -> Turn {
        let placements: Vec<Placement> = word
            .chars()
            .enumerate()
            .map(|(i, ch)| {
                let letter = if ch.is_ascii_lowercase() {
                    Letter::wildcard(ch)
                } else {
                    Letter::new(ch)
                };
                Placement::new(Position::new(row, col + i), letter)
            })
            .collect();
        let range = Range::new(Position::new(row, col), Position::new(row, col + word.len() - 1));
        Turn::from_placements(placements, range, Shape::Horizontal)
    }

    #[test]
    fn test_first_turn_on_star() -> Result<()> {
        let grid = Grid::new(15, 15);
        let map = ScoreMap::default();
        // C3 A1 T1, star doubles the word
        assert_eq!(score(&grid, &horizontal(7, 7, "CAT"), &map)?, 10);
        // the wildcard A scores nothing
        assert_eq!(score(&grid, &horizontal(7, 7, "CaT"), &map)?, 8);
        Ok(())
    }

    #[test]
    fn test_bonus_only_on_new_cells() -> Result<()> {
        let mut rows = vec!["- - - - - - - - - - - - - - -"; 15];
        rows[7] = "- - - - - - - C A T - - - - -";
        let grid = Grid::from_strings(&rows, 15, 15)?;
        let map = ScoreMap::default();
        // S at (7,10): CATS, no bonus at (7,10), the star under C is not new
        let pos = Position::new(7, 10);
        let turn = Turn::new(Placement::new(pos, Letter::new('S')), Range::single(pos), Shape::Horizontal);
        assert_eq!(score(&grid, &turn, &map)?, 6);
        // the same turn found across the line scores the same
        let turn = Turn::new(Placement::new(pos, Letter::new('S')), Range::single(pos), Shape::Vertical);
        assert_eq!(score(&grid, &turn, &map)?, 6);
        Ok(())
    }

    #[test]
    fn test_cross_words() -> Result<()> {
        let mut rows = vec!["- - - - - - - - - - - - - - -"; 15];
        rows[7] = "- - - - - - - - A X - - - - -";
        let grid = Grid::from_strings(&rows, 15, 15)?;
        let map = ScoreMap::default();
        // O at (6,8) and X at (6,9): OX plus the words OA and XX across
        // (6,8) is a double letter
        let turn = horizontal(6, 8, "OX");
        let (ox, oa, xx) = (2 + 8, 2 + 1, 8 + 8);
        assert_eq!(score(&grid, &turn, &map)?, ox + oa + xx);
        Ok(())
    }

    #[test]
    fn test_bingo() -> Result<()> {
        let grid = Grid::new(15, 15);
        let map = ScoreMap::default();
        let turn = horizontal(7, 4, "ABCDEFG");
        let base = score_with_config(&grid, &turn, &map, &SearchConfig::default().with_bingo_bonus(0))?;
        assert_eq!(score(&grid, &turn, &map)?, base + 50);
        let short = horizontal(7, 4, "ABCDEF");
        let config = SearchConfig::default().with_rack_capacity(6);
        let base = score_with_config(&grid, &short, &map, &config.with_bingo_bonus(0))?;
        assert_eq!(score_with_config(&grid, &short, &map, &config)?, base + 50);
        Ok(())
    }

    #[test]
    fn test_scoring_is_pure() -> Result<()> {
        let grid = Grid::new(15, 15);
        let copy = grid.clone();
        let map = ScoreMap::default();
        let turn = horizontal(7, 6, "QUIZ");
        let first = score(&grid, &turn, &map)?;
        assert_eq!(score(&grid, &turn, &map)?, first);
        assert_eq!(grid, copy);
        Ok(())
    }

    #[test]
    fn test_no_word_is_an_error() -> Result<()> {
        let grid = Grid::new(15, 15);
        let map = ScoreMap::default();
        let pos = Position::new(3, 3);
        let turn = Turn::new(Placement::new(pos, Letter::new('A')), Range::single(pos), Shape::Horizontal);
        assert!(matches!(
            score(&grid, &turn, &map),
            Err(Error::ScoringInvariant(p)) if p == pos
        ));
        assert!(matches!(
            score(&Grid::new(3, 3), &turn, &map),
            Err(Error::SizeMismatch { rows: 3, .. })
        ));
        Ok(())
    }
}
