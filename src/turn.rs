use crate::letter::Letter;
use crate::position::{Position, Range, Shape};
use crate::Error;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// One tile laid in a turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub position: Position,
    pub letter: Letter,
}

impl Placement {
    pub fn new(position: Position, letter: Letter) -> Placement {
        Placement { position, letter }
    }

    /// Persisted form `row,col` followed by the letter, lowercase for a wildcard.
    pub fn serialize(&self) -> String {
        format!(
            "{},{}{}",
            self.position.row,
            self.position.col,
            self.letter.serialize()
        )
    }
}

impl FromStr for Placement {
    type Err = Error;

    /// Parse the persisted form, see [`serialize`](Placement::serialize).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidTurn(String::from(s));
        let (row, rest) = s.split_once(',').ok_or_else(invalid)?;
        let ch = rest.chars().last().ok_or_else(invalid)?;
        let col = &rest[..rest.len() - ch.len_utf8()];
        let row = row.trim().parse::<usize>().map_err(|_| invalid())?;
        let col = col.parse::<usize>().map_err(|_| invalid())?;
        let letter = Letter::deserialize(ch).ok_or_else(invalid)?;
        Ok(Placement::new(Position::new(row, col), letter))
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.position, self.letter)
    }
}

/// A candidate turn: the tiles placed so far, keyed by position, plus the line they lie on.
///
/// `range` covers the placed tiles and any board letters between or next to them that
/// belong to the same word. `shape` is the orientation the turn was grown in.
///
/// Two turns are equal when they place the same letters on the same cells; `range` and
/// `shape` take no part in equality or hashing.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn {
    placements: BTreeMap<Position, Letter>,
    range: Range,
    shape: Shape,
}

impl PartialEq for Turn {
    fn eq(&self, other: &Self) -> bool {
        self.placements == other.placements
    }
}

impl Eq for Turn {}

impl Hash for Turn {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.placements.hash(state);
    }
}

impl Turn {
    /// Start a turn with its first placement.
    pub fn new(placement: Placement, range: Range, shape: Shape) -> Turn {
        let mut placements = BTreeMap::new();
        placements.insert(placement.position, placement.letter);
        Turn {
            placements,
            range,
            shape,
        }
    }

    /// Build a turn from a list of placements. A later placement on the same position
    /// replaces an earlier one.
    pub fn from_placements<I: IntoIterator<Item = Placement>>(
        placements: I,
        range: Range,
        shape: Shape,
    ) -> Turn {
        Turn {
            placements: placements
                .into_iter()
                .map(|p| (p.position, p.letter))
                .collect(),
            range,
            shape,
        }
    }

    pub fn range(&self) -> Range {
        self.range
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of tiles placed.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Iterate the placements in row-major order.
    pub fn placements(&self) -> impl Iterator<Item = Placement> + '_ {
        self.placements
            .iter()
            .map(|(&position, &letter)| Placement::new(position, letter))
    }

    /// Return the letter placed at `pos` in this turn.
    pub fn letter_at(&self, pos: Position) -> Option<Letter> {
        self.placements.get(&pos).copied()
    }

    /// Return a copy with `placement` added and the range start moved to `start`.
    pub(crate) fn extended_at_start(&self, placement: Placement, start: Position) -> Turn {
        let mut turn = self.clone();
        turn.placements.insert(placement.position, placement.letter);
        turn.range = Range::new(start, self.range.end);
        turn
    }

    /// Return a copy with `placement` added and the range end moved to `end`.
    pub(crate) fn extended_at_end(&self, placement: Placement, end: Position) -> Turn {
        let mut turn = self.clone();
        turn.placements.insert(placement.position, placement.letter);
        turn.range = Range::new(self.range.start, end);
        turn
    }

    /// Persisted form: the serialized placements in row-major order, joined by `|`.
    /// ## Examples
    /// ```
    /// use wordboard_solver::{Letter, Placement, Position, Range, Shape, Turn};
    /// let a = Placement::new(Position::new(7, 8), Letter::wildcard('a'));
    /// let c = Placement::new(Position::new(7, 7), Letter::new('C'));
    /// let turn = Turn::from_placements(vec![a, c], Range::new(c.position, a.position), Shape::Horizontal);
    /// assert_eq!(turn.serialize(), "7,7C|7,8a");
    /// ```
    pub fn serialize(&self) -> String {
        self.placements()
            .map(|p| p.serialize())
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl FromStr for Turn {
    type Err = Error;

    /// Parse the persisted form, see [`serialize`](Turn::serialize).
    ///
    /// The board is not known here, so the range spans the placed tiles only. A turn
    /// with all tiles in one column is vertical, any other turn horizontal.
    /// ## Errors
    /// If a placement can not be parsed, the turn is empty or two tiles share a cell.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let placements = s
            .trim()
            .split('|')
            .map(str::parse)
            .collect::<Result<Vec<Placement>, Error>>()?;
        let (first, last) = match (placements.iter().min(), placements.iter().max()) {
            (Some(first), Some(last)) => (first.position, last.position),
            _ => return Err(Error::InvalidTurn(String::from(s))),
        };
        let shape = if first.row != last.row && first.col == last.col {
            Shape::Vertical
        } else {
            Shape::Horizontal
        };
        let n = placements.len();
        let turn = Turn::from_placements(placements, Range::new(first, last), shape);
        if turn.len() != n {
            return Err(Error::InvalidTurn(String::from(s)));
        }
        Ok(turn)
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let placements = self
            .placements()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{} {} {{{}}}", self.shape, self.range, placements)
    }
}
