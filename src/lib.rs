#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod bitboard;
mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
mod ship;
mod target;

pub use ai::{drop_windows_through, most_overlapped_cell, scan_windows, Window};
pub use bitboard::{BitBoard, BitBoardError};
pub use board::Board;
pub use common::{AttackResult, BoardError, Observation, RoundOutcome};
pub use config::{ship_index, BOARD_SIZE, MIN_SHIP_LENGTH, NUM_SHIPS, SHIPS, TOTAL_SHIP_CELLS};
pub use game::{CellUpdate, GameEngine, GameStatus, RoundReport};
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use ship::{Orientation, Ship, ShipType};
pub use target::{next_target, probe, AttackMode, Axis};
