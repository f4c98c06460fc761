//! Random-move opponent.

use crate::board::Board;
use rand::Rng;
use rand::seq::IteratorRandom;
use tracing::debug;

/// Picks a uniformly random empty cell, or `None` on a full board.
///
/// Move selection is synchronous and pure in the rng; any thinking
/// delay belongs to the session driver, not here.
pub fn pick_move<R: Rng>(board: &Board, rng: &mut R) -> Option<usize> {
    let index = board.empty_indices().choose(rng);
    debug!(?index, "opponent picked a cell");
    index
}
