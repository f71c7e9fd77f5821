use crate::solver::Scored;
use crate::turn::Turn;
use crate::Error;
use std::collections::{HashMap, HashSet};
use std::fs::read_to_string;

/// Parse one line in the form written by [`serialize_scored`](crate::serialize_scored).
/// ## Errors
/// `InvalidTurn` if the line is not `score||placements`.
/// ## Examples
/// ```
/// use wordboard_solver::{deserialize_scored, serialize_scored};
/// let scored = deserialize_scored("9||5,8S")?;
/// assert_eq!(scored.1, 9);
/// assert_eq!(serialize_scored(&scored), "9||5,8S");
/// # Ok::<(), wordboard_solver::Error>(())
/// ```
pub fn deserialize_scored(line: &str) -> Result<Scored, Error> {
    let invalid = || Error::InvalidTurn(String::from(line));
    let (points, placements) = line.trim().split_once("||").ok_or_else(invalid)?;
    let points = points.parse::<i64>().map_err(|_| invalid())?;
    let turn = placements.parse::<Turn>()?;
    Ok((turn, points))
}

/// Read a file of scored turns, one per line. Blank lines are skipped.
pub fn read_scored(path: &str) -> Result<Vec<Scored>, Error> {
    let text = read_to_string(path).map_err(|source| Error::ReadError {
        path: String::from(path),
        source,
    })?;
    let scored = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(deserialize_scored)
        .collect::<Result<Vec<Scored>, Error>>()?;
    log::info!("Read {} scored turns from {}", scored.len(), path);
    Ok(scored)
}

/// Differences between a search result and the expected result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comparison {
    /// Turns in both, as `(turn, actual, expected)`, in expected order.
    pub incorrect_scores: Vec<(Turn, i64, i64)>,
    /// Turns found but not expected, in actual order.
    pub extra: Vec<Turn>,
    /// Turns expected but not found, in expected order.
    pub missing: Vec<Turn>,
}

impl Comparison {
    pub fn is_match(&self) -> bool {
        self.incorrect_scores.is_empty() && self.extra.is_empty() && self.missing.is_empty()
    }
}

/// Compare `actual` turns with `expected` ones. Turns are matched on their placements;
/// order is ignored.
pub fn compare_scored(actual: &[Scored], expected: &[Scored]) -> Comparison {
    let found: HashMap<&Turn, i64> = actual.iter().map(|(turn, points)| (turn, *points)).collect();
    let wanted: HashSet<&Turn> = expected.iter().map(|(turn, _)| turn).collect();
    let mut comparison = Comparison::default();
    for (turn, points) in expected {
        match found.get(turn) {
            Some(&got) if got != *points => {
                comparison.incorrect_scores.push((turn.clone(), got, *points))
            }
            Some(_) => {}
            None => comparison.missing.push(turn.clone()),
        }
    }
    comparison.extra = actual
        .iter()
        .filter(|(turn, _)| !wanted.contains(turn))
        .map(|(turn, _)| turn.clone())
        .collect();
    comparison
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{search, serialize_scored, Grid, Rack, ScoreMap, WordIndex};

    type Result<T> = std::result::Result<T, Error>;

    fn cat_turns() -> Result<Vec<Scored>> {
        let board = Grid::new(15, 15);
        let index = WordIndex::from_words(&["cat", "at", "ca"])?;
        let rack: Rack = "C*T".parse()?;
        search(&board, &rack, &index, &ScoreMap::default())
    }

    #[test]
    fn test_persisted_form_reads_back() -> Result<()> {
        let turns = cat_turns()?;
        assert!(!turns.is_empty());
        let lines: Vec<String> = turns.iter().map(serialize_scored).collect();
        let read = lines
            .iter()
            .map(|line| deserialize_scored(line))
            .collect::<Result<Vec<Scored>>>()?;
        assert_eq!(read, turns);
        assert!(compare_scored(&turns, &read).is_match());
        Ok(())
    }

    #[test]
    fn test_bad_lines() {
        for bad in &["", "10", "10|7,7C", "x||7,7C", "10||", "10||7,7C||1"] {
            assert!(
                matches!(deserialize_scored(bad), Err(Error::InvalidTurn(_))),
                "{:?} parsed",
                bad
            );
        }
    }

    #[test]
    fn test_compare() -> Result<()> {
        let expected = vec![
            deserialize_scored("10||7,7C|7,8A|7,9T")?,
            deserialize_scored("8||7,7C|7,8A")?,
            deserialize_scored("4||7,7A|7,8T")?,
        ];
        let actual = vec![
            deserialize_scored("4||7,7A|7,8T")?,
            deserialize_scored("9||7,9T|7,8A|7,7C")?,
            deserialize_scored("10||5,7C|6,7A|7,7T")?,
        ];
        let comparison = compare_scored(&actual, &expected);
        assert!(!comparison.is_match());
        assert_eq!(comparison.incorrect_scores, vec![(expected[0].0.clone(), 9, 10)]);
        assert_eq!(comparison.missing, vec![expected[1].0.clone()]);
        assert_eq!(comparison.extra, vec![actual[2].0.clone()]);

        let empty = compare_scored(&[], &expected);
        assert_eq!(empty.missing.len(), 3);
        assert!(empty.extra.is_empty());
        Ok(())
    }
}
