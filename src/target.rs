//! Target-mode tracking: directed search around a confirmed hit.
//!
//! After a hit on a ship that is still afloat, the computer stops hunting and
//! probes outward from the hit cell along one axis at a time until the ship
//! is found end to end.

use alloc::vec::Vec;

use crate::board::Board;
use crate::common::Observation;
use crate::config::BOARD_SIZE;

/// Search axis while pursuing a damaged ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    /// The other axis.
    pub fn flipped(self) -> Self {
        match self {
            Axis::Vertical => Axis::Horizontal,
            Axis::Horizontal => Axis::Vertical,
        }
    }

    /// Signed (row, col) steps for the two directions of this axis:
    /// north/south, or east/west.
    pub fn steps(self) -> [(isize, isize); 2] {
        match self {
            Axis::Vertical => [(-1, 0), (1, 0)],
            Axis::Horizontal => [(0, 1), (0, -1)],
        }
    }
}

/// The computer's attack-mode state.
///
/// `Targeting` alone carries the pursuit data: the anchor hit, the axis being
/// searched, and every hit recorded while pursuing (used to re-anchor on a
/// surviving damaged ship after a sink).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttackMode {
    Hunting,
    Targeting {
        origin: (usize, usize),
        axis: Axis,
        hits: Vec<(usize, usize)>,
    },
}

/// Probe outward from `origin` along `step`, up to `range - 1` cells.
///
/// The first `Unknown` cell is the next shot. Known-hit cells are transparent
/// (they confirm the ship continues that way); an `Empty` or `Destroyed` cell
/// or the board edge ends the direction with nothing to shoot.
pub fn probe(
    board: &Board,
    origin: (usize, usize),
    step: (isize, isize),
    range: usize,
) -> Option<(usize, usize)> {
    for i in 1..range {
        let row = origin.0 as isize + step.0 * i as isize;
        let col = origin.1 as isize + step.1 * i as isize;
        if row < 0 || col < 0 || row >= BOARD_SIZE as isize || col >= BOARD_SIZE as isize {
            return None;
        }
        match board.observation(row as usize, col as usize) {
            Ok(Observation::Unknown) => return Some((row as usize, col as usize)),
            Ok(Observation::Hit) => {}
            _ => return None,
        }
    }
    None
}

/// Next cell to shoot while pursuing from `origin`, with the axis that
/// produced it.
///
/// The current axis is searched in both directions before flipping; the
/// returned axis persists for later turns, so an exhausted vertical search is
/// not retried every round. `None` only after both axes are exhausted.
pub fn next_target(
    board: &Board,
    origin: (usize, usize),
    axis: Axis,
    range: usize,
) -> Option<((usize, usize), Axis)> {
    for current in [axis, axis.flipped()] {
        for step in current.steps() {
            if let Some(cell) = probe(board, origin, step, range) {
                return Some((cell, current));
            }
        }
    }
    None
}
