use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 6;
/// Shortest ship in the fleet; the hunt range never drops below this.
pub const MIN_SHIP_LENGTH: usize = 2;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser1", 3),
    ShipType::new("Cruiser2", 3),
    ShipType::new("Destroyer1", 2),
    ShipType::new("Destroyer2", 2),
    ShipType::new("Destroyer3", 2),
];
pub const TOTAL_SHIP_CELLS: usize = 16;

/// Index of a fleet ship by name.
pub fn ship_index(name: &str) -> Option<usize> {
    SHIPS.iter().position(|s| s.name() == name)
}
