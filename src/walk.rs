use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::board::Board;
use crate::location::ALL_DIRECTIONS;
use crate::notation::Replay;

/// Drive the board with `moves` uniformly random directions.
///
/// Blocked moves count towards `moves`; the walk does not stop once the board
/// is solved.
pub fn random_walk<R: Rng + ?Sized>(board: &mut Board, rng: &mut R, moves: usize) -> Replay {
    let directions: Vec<_> = (0..moves)
        .filter_map(|_| ALL_DIRECTIONS.choose(&mut *rng).copied())
        .collect();
    let replay = board.apply(&directions);
    debug!(
        "random walk: {} moves, {} pushes, {} blocked",
        replay.moved(),
        replay.pushes(),
        replay.blocked()
    );
    replay
}
