//! Hunt-mode logic for the computer opponent.
//!
//! With no live hit to follow up, the computer works from candidate windows:
//! every run of untouched cells long enough to hold the longest surviving
//! ship. The cell covered by the most windows is the most probable ship
//! location.

use alloc::vec::Vec;

use crate::board::Board;
use crate::common::Observation;
use crate::config::BOARD_SIZE;
use crate::ship::Orientation;

/// A run of `len` untouched cells starting at (row, col) along `orientation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    row: usize,
    col: usize,
    orientation: Orientation,
    len: usize,
}

impl Window {
    /// Window length in cells.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` for the degenerate zero-length window.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Cells covered by the window, in run order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (row, col, orientation) = (self.row, self.col, self.orientation);
        (0..self.len).map(move |i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }

    /// True if the window covers (row, col).
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells().any(|cell| cell == (row, col))
    }
}

/// Collect every candidate window of `len` cells on `board`.
///
/// Both orientations are scanned; a run qualifies only if every cell is still
/// `Unknown`. Known-hit cells of unsunk ships disqualify a run too: only
/// genuinely untouched cells count.
pub fn scan_windows(board: &Board, len: usize) -> Vec<Window> {
    let mut windows = Vec::new();
    for orientation in [Orientation::Vertical, Orientation::Horizontal] {
        let (max_row, max_col) = match orientation {
            Orientation::Vertical => (BOARD_SIZE - len, BOARD_SIZE - 1),
            Orientation::Horizontal => (BOARD_SIZE - 1, BOARD_SIZE - len),
        };
        for row in 0..=max_row {
            for col in 0..=max_col {
                let window = Window {
                    row,
                    col,
                    orientation,
                    len,
                };
                let untouched = window
                    .cells()
                    .all(|(r, c)| matches!(board.observation(r, c), Ok(Observation::Unknown)));
                if untouched {
                    windows.push(window);
                }
            }
        }
    }
    windows
}

/// Remove every window covering (row, col). Applied when a hunt-mode shot
/// misses: those windows can no longer hold a ship of the hunted length.
pub fn drop_windows_through(windows: &mut Vec<Window>, row: usize, col: usize) {
    windows.retain(|window| !window.contains(row, col));
}

/// Pick the untouched cell covered by the most windows.
///
/// A cell reaching the theoretical maximum of `2 × len` (fully covered on
/// both axes) is returned immediately. Otherwise the highest count wins, with
/// ties broken by scan order — callers must not rely on which of several
/// equally-covered cells comes back. Returns `None` on an empty window set.
pub fn most_overlapped_cell(windows: &[Window], board: &Board) -> Option<(usize, usize)> {
    let len = windows.first()?.len();
    let max_count = 2 * len;

    let mut counts = [[0usize; BOARD_SIZE]; BOARD_SIZE];
    for window in windows {
        for (r, c) in window.cells() {
            counts[r][c] += 1;
        }
    }

    let mut best: Option<((usize, usize), usize)> = None;
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            let count = counts[r][c];
            if count == 0 {
                continue;
            }
            // windows may be stale around cells hit since the last rescan
            if !matches!(board.observation(r, c), Ok(Observation::Unknown)) {
                continue;
            }
            if count == max_count {
                return Some((r, c));
            }
            if best.map_or(true, |(_, top)| count > top) {
                best = Some(((r, c), count));
            }
        }
    }
    best.map(|(cell, _)| cell)
}
