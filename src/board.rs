//! One side's board: ship registry plus attacker-knowledge masks.
//!
//! The grid does not store a ship reference per cell; a hit cell is resolved
//! to its ship by scanning the registry's occupancy masks.

use core::fmt;
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{AttackResult, BoardError, Observation};
use crate::config::{BOARD_SIZE, MIN_SHIP_LENGTH, NUM_SHIPS, SHIPS};
use crate::ship::{Orientation, Ship};

type BB = BitBoard<u128, BOARD_SIZE>;
type FleetShip = Ship<u128, BOARD_SIZE>;

/// Board state: ship placements and the opponent's observations of them.
#[derive(Clone, Copy)]
pub struct Board {
    ships: [Option<FleetShip>; NUM_SHIPS],
    ship_map: BB,
    hits: BB,
    misses: BB,
    destroyed: BB,
}

impl Board {
    /// Create an empty board (no ships placed, nothing attacked).
    pub fn new() -> Self {
        Board {
            ships: [None; NUM_SHIPS],
            ship_map: BB::new(),
            hits: BB::new(),
            misses: BB::new(),
            destroyed: BB::new(),
        }
    }

    /// Place a single fleet ship by index at (row, col) and orientation.
    pub fn place(
        &mut self,
        ship_index: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        if ship_index >= NUM_SHIPS {
            return Err(BoardError::InvalidIndex);
        }
        if self.ships[ship_index].is_some() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let ship = FleetShip::new(SHIPS[ship_index], orientation, row, col)?;
        if self.ship_map.intersects(&ship.mask()) {
            return Err(BoardError::ShipOverlaps);
        }
        self.ship_map |= ship.mask();
        self.ships[ship_index] = Some(ship);
        Ok(())
    }

    /// Returns a random non-overlapping (row, col, Orientation) for `ship_index`.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        ship_index: usize,
    ) -> Result<(usize, usize, Orientation), BoardError> {
        if ship_index >= NUM_SHIPS {
            return Err(BoardError::InvalidIndex);
        }
        let def = SHIPS[ship_index];
        let mut attempts = 0;
        while attempts < 100 {
            attempts += 1;
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let max_r = if orient == Orientation::Vertical {
                BOARD_SIZE - def.length()
            } else {
                BOARD_SIZE - 1
            };
            let max_c = if orient == Orientation::Horizontal {
                BOARD_SIZE - def.length()
            } else {
                BOARD_SIZE - 1
            };
            let r = rng.random_range(0..=max_r);
            let c = rng.random_range(0..=max_c);
            let ship = FleetShip::new(def, orient, r, c)?;
            if !self.ship_map.intersects(&ship.mask()) {
                return Ok((r, c, orient));
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Randomly place every fleet ship.
    pub fn place_all_random<R: Rng>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for i in 0..NUM_SHIPS {
            let (r, c, orient) = self.random_placement(rng, i)?;
            self.place(i, r, c, orient)?;
        }
        Ok(())
    }

    /// Resolve an attack at (row, col): mark the cell, damage the occupying
    /// ship, and on its last segment mark the whole ship destroyed.
    pub fn attack(&mut self, row: usize, col: usize) -> Result<AttackResult, BoardError> {
        if self.hits.get(row, col)? || self.misses.get(row, col)? {
            return Err(BoardError::AlreadyAttacked);
        }
        if !self.ship_map.get(row, col)? {
            self.misses.set(row, col)?;
            return Ok(AttackResult::Miss);
        }
        self.hits.set(row, col)?;
        let mut result = Err(BoardError::UnknownShipHit);
        let mut sunk_mask = None;
        for slot in self.ships.iter_mut() {
            if let Some(ship) = slot {
                if ship.register_hit(row, col) {
                    if ship.is_sunk() {
                        sunk_mask = Some(ship.mask());
                        result = Ok(AttackResult::Sunk(ship.ship_type().name()));
                    } else {
                        result = Ok(AttackResult::Hit);
                    }
                    break;
                }
            }
        }
        if let Some(mask) = sunk_mask {
            self.destroyed |= mask;
        }
        result
    }

    /// What the attacker knows about (row, col).
    pub fn observation(&self, row: usize, col: usize) -> Result<Observation, BoardError> {
        if self.destroyed.get(row, col)? {
            Ok(Observation::Destroyed)
        } else if self.hits.get(row, col)? {
            Ok(Observation::Hit)
        } else if self.misses.get(row, col)? {
            Ok(Observation::Empty)
        } else {
            Ok(Observation::Unknown)
        }
    }

    /// Ship occupying (row, col), sunk or not.
    pub fn ship_at(&self, row: usize, col: usize) -> Option<&FleetShip> {
        self.ships
            .iter()
            .flatten()
            .find(|ship| ship.contains(row, col))
    }

    /// Placed ship with the given name.
    pub fn ship_by_name(&self, name: &str) -> Option<&FleetShip> {
        self.ships
            .iter()
            .flatten()
            .find(|ship| ship.ship_type().name() == name)
    }

    /// Placed ships that still have health.
    pub fn surviving(&self) -> impl Iterator<Item = &FleetShip> {
        self.ships.iter().flatten().filter(|ship| !ship.is_sunk())
    }

    /// Number of ships still afloat.
    pub fn ships_remaining(&self) -> usize {
        self.surviving().count()
    }

    /// Returns `true` when no placed ship survives.
    pub fn all_sunk(&self) -> bool {
        self.ships_remaining() == 0
    }

    /// Length of the longest surviving ship, floored at the minimum ship
    /// length so the hunt range never degenerates.
    pub fn longest_surviving_length(&self) -> usize {
        self.surviving()
            .map(|ship| ship.ship_type().length())
            .max()
            .unwrap_or(MIN_SHIP_LENGTH)
            .max(MIN_SHIP_LENGTH)
    }

    /// Board occupancy mask of all ships.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    /// Cells the opponent has hit.
    pub fn hits(&self) -> BB {
        self.hits
    }

    /// Cells the opponent has missed on.
    pub fn misses(&self) -> BB {
        self.misses
    }

    /// Hit cells belonging to sunk ships.
    pub fn destroyed(&self) -> BB {
        self.destroyed
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  hits: {:?},\n  misses: {:?},\n  destroyed: {:?},\n  ships: {:?}\n}}",
            self.ship_map, self.hits, self.misses, self.destroyed, self.ships
        )
    }
}
