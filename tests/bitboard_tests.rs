use battleships::{BitBoard, BitBoardError};

#[test]
fn test_try_new_sizes() {
    // Success for a board that fits
    assert!(BitBoard::<u64, 8>::try_new().is_ok());

    // Failure when the board is too large
    let err = BitBoard::<u8, 3>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { .. })));
}

#[test]
fn test_get_set_and_bounds() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());
    assert!(!bb.get(0, 0).unwrap());
    assert_eq!(bb.count_ones(), 1);

    assert!(matches!(
        bb.get(4, 0),
        Err(BitBoardError::IndexOutOfBounds { .. })
    ));
    assert!(matches!(
        bb.set(0, 4),
        Err(BitBoardError::IndexOutOfBounds { .. })
    ));
}

#[test]
fn test_from_iter_and_iter_order() {
    let bb = BitBoard::<u16, 4>::from_iter([(3, 3), (0, 1)]).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (3, 3)]);
}

#[test]
fn test_union_and_intersection() {
    let a = BitBoard::<u16, 4>::from_iter([(0, 0), (1, 1)]).unwrap();
    let b = BitBoard::<u16, 4>::from_iter([(1, 1), (2, 2)]).unwrap();
    assert!(a.intersects(&b));
    assert_eq!((a | b).count_ones(), 3);
    assert_eq!((a & b).count_ones(), 1);

    let c = BitBoard::<u16, 4>::from_iter([(3, 0)]).unwrap();
    assert!(!a.intersects(&c));
}
