use battleships::{coord_to_string, parse_coord};

#[test]
fn test_parse_valid_coords() {
    assert_eq!(parse_coord("A1").unwrap(), (0, 0));
    assert_eq!(parse_coord("j10").unwrap(), (9, 9));
    assert_eq!(parse_coord("C7").unwrap(), (6, 2));
}

#[test]
fn test_parse_rejects_garbage() {
    assert!(parse_coord("").is_err());
    assert!(parse_coord("A").is_err());
    assert!(parse_coord("K5").is_err());
    assert!(parse_coord("A0").is_err());
    assert!(parse_coord("A11").is_err());
    assert!(parse_coord("5A").is_err());
}

#[test]
fn test_coord_round_trip() {
    assert_eq!(coord_to_string(0, 0), "A1");
    assert_eq!(coord_to_string(9, 9), "J10");
    let (r, c) = parse_coord(&coord_to_string(4, 7)).unwrap();
    assert_eq!((r, c), (4, 7));
}
