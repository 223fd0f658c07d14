use battleships::{
    ship_index, AttackResult, Board, BoardError, Observation, Orientation, MIN_SHIP_LENGTH,
    NUM_SHIPS, SHIPS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_attack_hit_then_miss() {
    // Battleship (length 4) horizontal at row 3, columns 2..=5
    let mut board = Board::new();
    board.place(0, 3, 2, Orientation::Horizontal).unwrap();

    assert_eq!(board.attack(3, 2).unwrap(), AttackResult::Hit);
    assert_eq!(board.observation(3, 2).unwrap(), Observation::Hit);
    assert_eq!(board.ship_at(3, 2).unwrap().health(), 3);

    assert_eq!(board.attack(3, 6).unwrap(), AttackResult::Miss);
    assert_eq!(board.observation(3, 6).unwrap(), Observation::Empty);
}

#[test]
fn test_sinking_marks_every_cell_destroyed() {
    let mut board = Board::new();
    board.place(0, 3, 2, Orientation::Horizontal).unwrap();

    for c in 2..5 {
        assert_eq!(board.attack(3, c).unwrap(), AttackResult::Hit);
    }
    assert_eq!(board.attack(3, 5).unwrap(), AttackResult::Sunk("Battleship"));
    for c in 2..6 {
        assert_eq!(board.observation(3, c).unwrap(), Observation::Destroyed);
    }
    assert_eq!(board.ships_remaining(), 0);
    assert!(board.surviving().next().is_none());
}

#[test]
fn test_repeated_attack_rejected() {
    let mut board = Board::new();
    board.place(3, 0, 0, Orientation::Horizontal).unwrap();

    board.attack(0, 0).unwrap();
    assert_eq!(board.attack(0, 0).unwrap_err(), BoardError::AlreadyAttacked);
    board.attack(9, 9).unwrap();
    assert_eq!(board.attack(9, 9).unwrap_err(), BoardError::AlreadyAttacked);
}

#[test]
fn test_out_of_bounds_attack_rejected() {
    let mut board = Board::new();
    assert!(matches!(board.attack(10, 0), Err(BoardError::BitBoard(_))));
}

#[test]
fn test_placement_validation() {
    let mut board = Board::new();
    board.place(0, 0, 0, Orientation::Horizontal).unwrap();

    assert_eq!(
        board.place(0, 5, 5, Orientation::Horizontal).unwrap_err(),
        BoardError::ShipAlreadyPlaced
    );
    assert_eq!(
        board.place(1, 0, 2, Orientation::Vertical).unwrap_err(),
        BoardError::ShipOverlaps
    );
    assert_eq!(
        board.place(1, 0, 8, Orientation::Horizontal).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(
        board.place(NUM_SHIPS, 0, 0, Orientation::Horizontal).unwrap_err(),
        BoardError::InvalidIndex
    );
}

#[test]
fn test_random_fleet_places_all_cells() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(42);
    board.place_all_random(&mut rng).unwrap();

    let expected: usize = SHIPS.iter().map(|s| s.length()).sum();
    assert_eq!(board.ship_map().count_ones(), expected);
    assert_eq!(board.ships_remaining(), NUM_SHIPS);
}

#[test]
fn test_longest_surviving_length_tracks_sinks() {
    let mut board = Board::new();
    board.place(0, 0, 0, Orientation::Horizontal).unwrap(); // length 4
    board.place(3, 2, 0, Orientation::Horizontal).unwrap(); // length 2
    assert_eq!(board.longest_surviving_length(), 4);

    for c in 0..4 {
        board.attack(0, c).unwrap();
    }
    // only the destroyer remains
    assert_eq!(board.longest_surviving_length(), 2);

    for c in 0..2 {
        board.attack(2, c).unwrap();
    }
    // nothing afloat: floored at the minimum ship length
    assert_eq!(board.longest_surviving_length(), MIN_SHIP_LENGTH);
    assert!(board.all_sunk());
}

#[test]
fn test_fleet_roster_lookup() {
    assert_eq!(ship_index("Battleship"), Some(0));
    assert_eq!(ship_index("Destroyer3"), Some(NUM_SHIPS - 1));
    assert_eq!(ship_index("Dreadnought"), None);
}
