//! Round resolution: the player's shot, the computer's reply, win detection.

use alloc::vec;
use alloc::vec::Vec;
use log::{debug, info};

use crate::ai::{self, Window};
use crate::board::Board;
use crate::common::{AttackResult, BoardError, Observation, RoundOutcome};
use crate::target::{self, AttackMode, Axis};

/// A cell whose observation changed during a round, for display refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellUpdate {
    pub row: usize,
    pub col: usize,
    pub observation: Observation,
}

/// Everything the front end needs to show after one round.
#[derive(Debug, Clone)]
pub struct RoundReport {
    pub outcome: RoundOutcome,
    /// Result of the player's shot.
    pub player_shot: AttackResult,
    /// Computer-board cells to recolor after the player's shot.
    pub enemy_updates: Vec<CellUpdate>,
    /// The computer's shot and its result; `None` when the player already won.
    pub computer_shot: Option<((usize, usize), AttackResult)>,
    /// Player-board cells to recolor after the computer's shot.
    pub own_updates: Vec<CellUpdate>,
    pub player_ships_remaining: usize,
    pub computer_ships_remaining: usize,
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    PlayerWon,
    ComputerWon,
}

/// Core game state: both boards plus the computer's attack state.
///
/// All mutation happens inside [`GameEngine::attack`]; one call resolves one
/// full round synchronously.
pub struct GameEngine {
    player_board: Board,
    computer_board: Board,
    mode: AttackMode,
    windows: Vec<Window>,
}

impl GameEngine {
    /// Start a game over two boards with their fleets placed.
    pub fn new(player_board: Board, computer_board: Board) -> Self {
        let windows = ai::scan_windows(&player_board, player_board.longest_surviving_length());
        GameEngine {
            player_board,
            computer_board,
            mode: AttackMode::Hunting,
            windows,
        }
    }

    /// The player's own board, attacked by the computer.
    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    /// The computer's board, attacked by the player.
    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.computer_board.all_sunk() {
            GameStatus::PlayerWon
        } else if self.player_board.all_sunk() {
            GameStatus::ComputerWon
        } else {
            GameStatus::InProgress
        }
    }

    /// Resolve one full round starting from the player's shot at (row, col).
    ///
    /// The cell must be unattacked; a resolved or out-of-bounds cell is
    /// rejected without touching any state. If the player's shot empties the
    /// computer's fleet the computer's turn is skipped.
    pub fn attack(&mut self, row: usize, col: usize) -> Result<RoundReport, BoardError> {
        let player_shot = self.computer_board.attack(row, col)?;
        let enemy_updates = updates_for(&self.computer_board, (row, col), player_shot);
        if let AttackResult::Sunk(name) = player_shot {
            info!("player sank the computer's {}", name);
        }

        if self.computer_board.all_sunk() {
            info!("computer fleet destroyed: player wins");
            return Ok(RoundReport {
                outcome: RoundOutcome::PlayerWins,
                player_shot,
                enemy_updates,
                computer_shot: None,
                own_updates: Vec::new(),
                player_ships_remaining: self.player_board.ships_remaining(),
                computer_ships_remaining: 0,
            });
        }

        let (cell, result) = self.computers_turn()?;
        let own_updates = updates_for(&self.player_board, cell, result);

        let outcome = if self.player_board.all_sunk() {
            info!("player fleet destroyed: computer wins");
            RoundOutcome::ComputerWins
        } else {
            RoundOutcome::Continue
        };
        Ok(RoundReport {
            outcome,
            player_shot,
            enemy_updates,
            computer_shot: Some((cell, result)),
            own_updates,
            player_ships_remaining: self.player_board.ships_remaining(),
            computer_ships_remaining: self.computer_board.ships_remaining(),
        })
    }

    /// Pick and resolve the computer's shot against the player's board.
    fn computers_turn(&mut self) -> Result<((usize, usize), AttackResult), BoardError> {
        let range = self.player_board.longest_surviving_length();
        let cell = match &mut self.mode {
            AttackMode::Targeting { origin, axis, .. } => {
                match target::next_target(&self.player_board, *origin, *axis, range) {
                    Some((cell, chosen)) => {
                        *axis = chosen;
                        debug!("computer targeting {:?} from {:?}", cell, origin);
                        cell
                    }
                    None => {
                        // both axes exhausted around this anchor; resume hunting
                        self.mode = AttackMode::Hunting;
                        self.windows = ai::scan_windows(&self.player_board, range);
                        self.hunt_cell()
                    }
                }
            }
            AttackMode::Hunting => self.hunt_cell(),
        };

        let result = self.player_board.attack(cell.0, cell.1)?;
        match result {
            AttackResult::Miss => {
                if matches!(self.mode, AttackMode::Hunting) {
                    ai::drop_windows_through(&mut self.windows, cell.0, cell.1);
                }
            }
            AttackResult::Hit => self.record_computer_hit(cell, false),
            AttackResult::Sunk(name) => {
                info!("computer sank the player's {}", name);
                self.record_computer_hit(cell, true);
            }
        }
        Ok((cell, result))
    }

    fn hunt_cell(&self) -> (usize, usize) {
        let cell = ai::most_overlapped_cell(&self.windows, &self.player_board)
            .expect("no candidate windows while player ships survive");
        debug!("computer hunting {:?}", cell);
        cell
    }

    /// Fold a computer hit into the pursuit state; on a sink, re-anchor on a
    /// recorded hit whose ship still floats or fall back to hunting.
    fn record_computer_hit(&mut self, cell: (usize, usize), sank: bool) {
        match &mut self.mode {
            AttackMode::Targeting { hits, .. } => hits.push(cell),
            AttackMode::Hunting => {
                self.mode = AttackMode::Targeting {
                    origin: cell,
                    axis: Axis::Vertical,
                    hits: vec![cell],
                };
            }
        }
        if !sank {
            return;
        }

        let hits = match core::mem::replace(&mut self.mode, AttackMode::Hunting) {
            AttackMode::Targeting { hits, .. } => hits,
            AttackMode::Hunting => Vec::new(),
        };
        let next_origin = hits.iter().copied().find(|&(r, c)| {
            self.player_board
                .ship_at(r, c)
                .is_some_and(|ship| ship.health() > 0)
        });
        match next_origin {
            Some(origin) => {
                debug!("computer re-anchoring on damaged ship at {:?}", origin);
                self.mode = AttackMode::Targeting {
                    origin,
                    axis: Axis::Vertical,
                    hits,
                };
            }
            None => {
                // sinking changed the longest surviving length
                self.windows = ai::scan_windows(
                    &self.player_board,
                    self.player_board.longest_surviving_length(),
                );
            }
        }
    }
}

fn updates_for(board: &Board, cell: (usize, usize), result: AttackResult) -> Vec<CellUpdate> {
    let (row, col) = cell;
    match result {
        AttackResult::Miss => vec![CellUpdate {
            row,
            col,
            observation: Observation::Empty,
        }],
        AttackResult::Hit => vec![CellUpdate {
            row,
            col,
            observation: Observation::Hit,
        }],
        AttackResult::Sunk(name) => board
            .ship_by_name(name)
            .map(|ship| {
                ship.cells()
                    .map(|(r, c)| CellUpdate {
                        row: r,
                        col: c,
                        observation: Observation::Destroyed,
                    })
                    .collect()
            })
            .unwrap_or_default(),
    }
}
