use crate::grid::Grid;
use crate::letter::spell;
use crate::position::Shape;
use crate::turn::Turn;
use crate::wordindex::WordIndex;

/// Check the board after `turn` is laid on `grid`.
///
/// The whole board is checked, not only the cells the turn touches: every letter must
/// have a neighbour, and every run of two or more letters in a row or a column must be
/// a word. A turn that can not be laid at all is not legal.
pub fn is_legal(turn: &Turn, grid: &Grid, index: &WordIndex) -> bool {
    match grid.apply(turn) {
        Ok(board) => is_valid_board(&board, index),
        Err(_) => false,
    }
}

/// Check a board state, see [`is_legal`].
pub fn is_valid_board(grid: &Grid, index: &WordIndex) -> bool {
    let connected = grid
        .positions()
        .filter(|&pos| grid.is_occupied(pos))
        .all(|pos| grid.has_filled_neighbor(pos));
    if !connected {
        return false;
    }
    let rows = (0..grid.rows()).map(|i| grid.line(Shape::Horizontal, i));
    let cols = (0..grid.cols()).map(|i| grid.line(Shape::Vertical, i));
    rows.chain(cols).all(|line| {
        line.split(Option::is_none)
            .filter(|run| run.len() > 1)
            .all(|run| index.is_word(&spell(run.iter().flatten())))
    })
}
