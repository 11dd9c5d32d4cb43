use flotilla::{cell_index, coord_at, in_bounds, Coord, Facing, GameError, ShipKind, SHIP_KINDS};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_kind_table() {
    assert_eq!(ShipKind::Carrier.size(), 5);
    assert_eq!(ShipKind::Battleship.size(), 4);
    assert_eq!(ShipKind::Destroyer.size(), 3);
    assert_eq!(ShipKind::Submarine.size(), 3);
    assert_eq!(ShipKind::PatrolBoat.size(), 2);
    assert_eq!(ShipKind::Carrier.name(), "Carrier");
    assert_eq!(ShipKind::PatrolBoat.name(), "Patrol Boat");

    let total: usize = SHIP_KINDS.iter().map(|k| k.size()).sum();
    assert_eq!(total, flotilla::TOTAL_SHIP_CELLS);
}

#[test]
fn test_facing_offsets() {
    assert_eq!(Facing::North.offset(), (0, -1));
    assert_eq!(Facing::East.offset(), (1, 0));
    assert_eq!(Facing::South.offset(), (0, 1));
    assert_eq!(Facing::West.offset(), (-1, 0));
}

#[test]
fn test_facing_rotation_cycle() {
    let mut facing = Facing::North;
    for want in [Facing::East, Facing::South, Facing::West, Facing::North] {
        facing = facing.clockwise();
        assert_eq!(facing, want);
    }
    // counter-clockwise walks the same cycle backwards
    for want in [Facing::West, Facing::South, Facing::East, Facing::North] {
        facing = facing.counter_clockwise();
        assert_eq!(facing, want);
    }
}

#[test]
fn test_facing_random_is_valid() {
    let mut rng = SmallRng::seed_from_u64(9);
    for _ in 0..32 {
        let facing = Facing::random(&mut rng);
        assert!(Facing::ALL.contains(&facing));
    }
}

#[test]
fn test_index_coord_roundtrip() {
    for index in 0..flotilla::CELL_COUNT as u32 {
        let coord = coord_at(index);
        assert!(in_bounds(coord));
        assert_eq!(cell_index(coord).unwrap(), index);
    }
    assert_eq!(cell_index(Coord::new(0, 0)).unwrap(), 0);
    assert_eq!(cell_index(Coord::new(9, 0)).unwrap(), 9);
    assert_eq!(cell_index(Coord::new(0, 1)).unwrap(), 10);
    assert_eq!(cell_index(Coord::new(9, 9)).unwrap(), 99);
}

#[test]
fn test_out_of_bounds_rejected() {
    for coord in [
        Coord::new(-1, 0),
        Coord::new(0, -1),
        Coord::new(10, 0),
        Coord::new(0, 10),
        Coord::new(-3, 12),
    ] {
        assert!(!in_bounds(coord));
        assert_eq!(cell_index(coord).unwrap_err(), GameError::OutOfBounds);
    }
}

#[test]
fn test_coord_offset_and_display() {
    let coord = Coord::new(3, 4);
    assert_eq!(coord.offset(1, 0), Coord::new(4, 4));
    assert_eq!(coord.offset(0, -5), Coord::new(3, -1));
    assert_eq!(format!("{}", coord), "(3, 4)");
}
