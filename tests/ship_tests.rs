use battleships::{BoardError, Orientation, Ship, ShipType};

#[test]
fn test_new_and_mask() -> Result<(), BoardError> {
    const N: usize = 5;
    let def = ShipType::new("Test", 3);
    let ship = Ship::<u32, N>::new(def, Orientation::Horizontal, 2, 1)?;
    for c in 1..4 {
        assert!(ship.contains(2, c));
    }
    assert!(!ship.contains(2, 4));
    assert_eq!(ship.mask().count_ones(), 3);
    Ok(())
}

#[test]
fn test_out_of_bounds_placement_rejected() {
    let def = ShipType::new("Test", 4);
    assert_eq!(
        Ship::<u32, 5>::new(def, Orientation::Horizontal, 0, 3).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(
        Ship::<u32, 5>::new(def, Orientation::Vertical, 2, 0).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
}

#[test]
fn test_cells_iterate_in_order() -> Result<(), BoardError> {
    let def = ShipType::new("Test", 4);
    let ship = Ship::<u32, 5>::new(def, Orientation::Vertical, 0, 0)?;
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    Ok(())
}

#[test]
fn test_hits_drain_health() -> Result<(), BoardError> {
    let def = ShipType::new("Test", 2);
    let mut ship = Ship::<u32, 4>::new(def, Orientation::Horizontal, 1, 1)?;
    assert_eq!(ship.health(), 2);
    assert!(!ship.is_sunk());

    assert!(ship.register_hit(1, 1));
    assert_eq!(ship.health(), 1);

    // re-hitting the same cell does not drain further
    assert!(ship.register_hit(1, 1));
    assert_eq!(ship.health(), 1);

    assert!(ship.register_hit(1, 2));
    assert_eq!(ship.health(), 0);
    assert!(ship.is_sunk());

    // miss
    assert!(!ship.register_hit(0, 0));
    Ok(())
}
