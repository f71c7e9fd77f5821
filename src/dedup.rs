use crate::turn::Turn;
use std::collections::HashSet;

/// Remove turns that place the same letters on the same cells as an earlier turn.
/// The first of each group is kept, in input order.
pub fn dedup(turns: Vec<Turn>) -> Vec<Turn> {
    let mut seen = HashSet::with_capacity(turns.len());
    turns
        .into_iter()
        .filter(|turn| seen.insert(turn.clone()))
        .collect()
}
