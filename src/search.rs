use crate::grid::Grid;
use crate::letter::{Letter, Letters};
use crate::position::{Position, Range, Shape};
use crate::rack::DistinctChoices;
use crate::turn::{Placement, Turn};
use crate::wordindex::WordIndex;
use crate::Error;
#[cfg(feature = "flame_it")]
use flamer::flame;

/// Grows candidate turns on a board, one letter at a time.
///
/// A turn starts with a single letter on an anchor cell (or on the star of an empty
/// board). From there it is extended along one line, before its first letter or after
/// its last, for as long as the letters read along the line are part of a word.
/// Every letter placed must form a valid word across the line, read on the board.
///
/// The candidates are not checked against the rest of the board and may contain
/// duplicates.
#[derive(Debug, Clone, Copy)]
pub struct Search<'a> {
    grid: &'a Grid,
    index: &'a WordIndex,
    star: Option<Position>,
}

impl<'a> Search<'a> {
    /// Search `grid` with the words in `index`. `star` is the cell the first turn on an
    /// empty board must cover.
    pub fn new(grid: &'a Grid, index: &'a WordIndex, star: Option<Position>) -> Search<'a> {
        Search { grid, index, star }
    }

    /// The cells a turn may start on.
    pub fn start_positions(&self) -> Vec<Position> {
        if self.grid.is_empty_board() {
            self.star
                .filter(|&pos| self.grid.is_in_bounds(pos))
                .into_iter()
                .collect()
        } else {
            self.grid.anchor_cells()
        }
    }

    /// Return all candidate turns that can be laid with `letters`.
    /// ## Errors
    /// Only if a turn is grown off its line, which indicates a bug.
    #[cfg_attr(feature = "flame_it", flame)]
    pub fn find_turns(&self, letters: Letters) -> Result<Vec<Turn>, Error> {
        let positions = self.start_positions();
        let mut turns = Vec::new();
        for (letter, rest) in DistinctChoices::new(letters) {
            for &pos in &positions {
                let horizontal = self.grid.word_through(pos, letter, Shape::Horizontal);
                let vertical = self.grid.word_through(pos, letter, Shape::Vertical);
                for &shape in &Shape::BOTH {
                    let ((word, range), (cross, _)) = match shape {
                        Shape::Horizontal => (&horizontal, &vertical),
                        Shape::Vertical => (&vertical, &horizontal),
                    };
                    if cross.len() > 1 && !self.index.is_word(cross) {
                        continue;
                    }
                    let entry = self.index.classify(word);
                    let turn = Turn::new(Placement::new(pos, letter), *range, shape);
                    // a lone tile must form a word of two or more letters
                    if entry.is_word() && (word.len() > 1 || cross.len() > 1) {
                        turns.push(turn.clone());
                    }
                    if entry.is_substring() {
                        self.expand(rest.clone(), &turn, &mut turns)?;
                    }
                }
            }
        }
        Ok(turns)
    }

    /// Extend `turn` with one more of `letters`, at either end of its line.
    fn expand(&self, letters: Letters, turn: &Turn, turns: &mut Vec<Turn>) -> Result<(), Error> {
        if letters.is_empty() {
            return Ok(());
        }
        let shape = turn.shape();
        let range = turn.range();

        let start_dir = shape.start_direction();
        if let Some(pos) = self.grid.next_empty(range.start, start_dir) {
            let existing = match pos.step(start_dir.reverse()) {
                Some(next) => self.form_word(turn, Range::new(next, range.end))?,
                None => String::new(),
            };
            let prefix = self.grid.run_until_empty(pos, start_dir);
            let start = pos.step_by(start_dir, prefix.len()).unwrap_or(pos);
            for (letter, rest) in DistinctChoices::new(letters.clone()) {
                if !self.is_valid_cross(pos, letter, shape) {
                    continue;
                }
                let mut word: String = prefix.iter().map(Letter::ch).collect();
                word.push(letter.ch());
                word.push_str(&existing);
                let entry = self.index.classify(&word);
                let next = turn.extended_at_start(Placement::new(pos, letter), start);
                if entry.is_word() {
                    turns.push(next.clone());
                }
                if entry.is_substring() {
                    self.expand(rest, &next, turns)?;
                }
            }
        }

        let end_dir = shape.end_direction();
        if let Some(pos) = self.grid.next_empty(range.end, end_dir) {
            let existing = match pos.step(end_dir.reverse()) {
                Some(prev) => self.form_word(turn, Range::new(range.start, prev))?,
                None => String::new(),
            };
            let suffix = self.grid.run_until_empty(pos, end_dir);
            let end = pos.step_by(end_dir, suffix.len()).unwrap_or(pos);
            for (letter, rest) in DistinctChoices::new(letters) {
                if !self.is_valid_cross(pos, letter, shape) {
                    continue;
                }
                let mut word = existing.clone();
                word.push(letter.ch());
                word.extend(suffix.iter().map(Letter::ch));
                let entry = self.index.classify(&word);
                let next = turn.extended_at_end(Placement::new(pos, letter), end);
                if entry.is_word() {
                    turns.push(next.clone());
                }
                if entry.is_substring() {
                    self.expand(rest, &next, turns)?;
                }
            }
        }
        Ok(())
    }

    /// True if `letter` at `pos` forms no word across `shape`, or a valid one.
    fn is_valid_cross(&self, pos: Position, letter: Letter, shape: Shape) -> bool {
        let (cross, _) = self.grid.word_through(pos, letter, shape.opposite());
        cross.len() <= 1 || self.index.is_word(&cross)
    }

    /// Read the letters in `range`, from the board or else from the turn.
    fn form_word(&self, turn: &Turn, range: Range) -> Result<String, Error> {
        let cells = range.cells(turn.shape())?;
        Ok(cells
            .into_iter()
            .filter_map(|pos| self.grid.get_checked(pos).or_else(|| turn.letter_at(pos)))
            .map(|letter| letter.ch())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Result<T> = std::result::Result<T, Error>;

    fn serialized(turns: &[Turn]) -> Vec<String> {
        let mut v: Vec<String> = turns.iter().map(Turn::serialize).collect();
        v.sort();
        v.dedup();
        v
    }

    fn letters(s: &str) -> Letters {
        s.chars().map(Letter::new).collect()
    }

    #[test]
    fn test_empty_board() -> Result<()> {
        let grid = Grid::new(15, 15);
        let index = WordIndex::from_words(&["cat", "at", "ca"])?;
        let search = Search::new(&grid, &index, Some(Position::new(7, 7)));
        assert_eq!(search.start_positions(), vec![Position::new(7, 7)]);
        let turns = search.find_turns(letters("ACT"))?;
        let found = serialized(&turns);
        assert!(found.contains(&String::from("7,7C|7,8A|7,9T")));
        assert!(found.contains(&String::from("7,5C|7,6A|7,7T")));
        assert!(found.contains(&String::from("5,7C|6,7A|7,7T")));
        assert!(found.contains(&String::from("7,7A|7,8T")));
        // every turn covers the star
        assert!(turns.iter().all(|t| t.letter_at(Position::new(7, 7)).is_some()));
        // no single letter turns: no single letter words
        assert!(turns.iter().all(|t| t.len() > 1));
        Ok(())
    }

    #[test]
    fn test_single_letter_word_alone() -> Result<()> {
        let grid = Grid::new(15, 15);
        let index = WordIndex::from_words(&["a", "at"])?;
        let search = Search::new(&grid, &index, Some(Position::new(7, 7)));
        let turns = search.find_turns(letters("AT"))?;
        assert!(!turns.is_empty());
        assert!(turns.iter().all(|t| t.len() == 2));
        let found = serialized(&turns);
        assert!(!found.contains(&String::from("7,7A")));
        assert!(found.contains(&String::from("7,7A|7,8T")));
        assert!(found.contains(&String::from("6,7A|7,7T")));
        Ok(())
    }

    #[test]
    fn test_empty_board_without_star() -> Result<()> {
        let grid = Grid::new(5, 5);
        let index = WordIndex::from_words(&["at"])?;
        let search = Search::new(&grid, &index, None);
        assert!(search.find_turns(letters("AT"))?.is_empty());
        Ok(())
    }

    #[test]
    fn test_extend_existing_word() -> Result<()> {
        let mut rows = vec!["- - - - - - - - - -"; 10];
        rows[5] = "- - - - - D O G - -";
        let grid = Grid::from_strings(&rows, 10, 10)?;
        let index = WordIndex::from_words(&["dog", "dogs"])?;
        let search = Search::new(&grid, &index, None);
        let turns = search.find_turns(letters("S"))?;
        assert_eq!(serialized(&turns), vec![String::from("5,8S")]);
        let turn = &turns[0];
        assert_eq!(turn.shape(), Shape::Horizontal);
        assert_eq!(turn.range(), Range::new(Position::new(5, 5), Position::new(5, 8)));

        let index = WordIndex::from_words(&["dog"])?;
        let search = Search::new(&grid, &index, None);
        assert!(search.find_turns(letters("S"))?.is_empty());
        Ok(())
    }

    #[test]
    fn test_cross_word_rejected() -> Result<()> {
        let mut rows = vec!["- - - - - - - - - -"; 10];
        rows[5] = "- - - - - D O G - -";
        rows[4] = "- - - - - - - - X -";
        let grid = Grid::from_strings(&rows, 10, 10)?;
        // XS is not a word, so DOGS can not be made at (5,8)
        let index = WordIndex::from_words(&["dog", "dogs"])?;
        let search = Search::new(&grid, &index, None);
        assert!(search
            .find_turns(letters("S"))?
            .iter()
            .all(|t| t.letter_at(Position::new(5, 8)).is_none()));
        let index = WordIndex::from_words(&["dog", "dogs", "xs"])?;
        let search = Search::new(&grid, &index, None);
        assert!(serialized(&search.find_turns(letters("S"))?).contains(&String::from("5,8S")));
        Ok(())
    }

    #[test]
    fn test_jump_over_board_letters() -> Result<()> {
        let rows = ["- - - - - -", "- - A T - -", "- - - - - -"];
        let grid = Grid::from_strings(&rows, 3, 6)?;
        let index = WordIndex::from_words(&["cats", "cat", "at"])?;
        let search = Search::new(&grid, &index, None);
        let found = serialized(&search.find_turns(letters("CS"))?);
        assert!(found.contains(&String::from("1,1C")));
        assert!(found.contains(&String::from("1,1C|1,4S")));
        Ok(())
    }

    #[test]
    fn test_rack_is_consumed() -> Result<()> {
        let grid = Grid::new(5, 5);
        let index = WordIndex::from_words(&["aa", "aaa", "aaaa"])?;
        let search = Search::new(&grid, &index, Some(Position::new(2, 2)));
        let turns = search.find_turns(letters("AA"))?;
        assert!(!turns.is_empty());
        assert!(turns.iter().all(|t| t.len() == 2));
        Ok(())
    }
}
