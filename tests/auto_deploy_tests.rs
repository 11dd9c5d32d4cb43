use flotilla::{
    auto_deploy, in_bounds, Board, Coord, Event, EventQueue, Facing, ShipKind, NUM_SHIPS,
    TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn deployed_board(seed: u64) -> Board {
    let mut board = Board::new();
    let mut events = EventQueue::new();
    let mut rng = SmallRng::seed_from_u64(seed);
    auto_deploy(&mut board, &mut rng, &mut events).unwrap();
    board
}

#[test]
fn test_auto_deploy_places_whole_fleet() {
    let mut board = Board::new();
    let mut events = EventQueue::new();
    let mut rng = SmallRng::seed_from_u64(42);
    auto_deploy(&mut board, &mut rng, &mut events).unwrap();

    assert!(board.is_fleet_deployed());
    assert_eq!(
        board.occupied_cells().len(),
        TOTAL_SHIP_CELLS,
        "ships must not overlap"
    );
    for ship in board.ships() {
        assert_eq!(ship.positions().len(), ship.size());
        for &coord in ship.positions() {
            assert!(in_bounds(coord));
        }
    }

    let toggles = events
        .drain()
        .filter(|e| matches!(e, Event::DeploymentChanged { deployed: true, .. }))
        .count();
    assert_eq!(toggles, NUM_SHIPS);
}

#[test]
fn test_auto_deploy_is_deterministic() {
    let first = deployed_board(7);
    let second = deployed_board(7);
    for (a, b) in first.ships().iter().zip(second.ships()) {
        assert_eq!(a.positions().to_vec(), b.positions().to_vec());
        assert_eq!(a.facing(), b.facing());
    }
}

#[test]
fn test_auto_deploy_fills_around_manual_placement() {
    let mut board = Board::new();
    let mut events = EventQueue::new();
    board
        .deploy_ship(ShipKind::Carrier, Coord::new(2, 2), Facing::South, &mut events)
        .unwrap();

    let mut rng = SmallRng::seed_from_u64(11);
    auto_deploy(&mut board, &mut rng, &mut events).unwrap();

    // the manual placement survives untouched
    let carrier: Vec<Coord> = (2..7).map(|row| Coord::new(2, row)).collect();
    assert_eq!(board.ship(ShipKind::Carrier).positions().to_vec(), carrier);
    assert!(board.is_fleet_deployed());
    assert_eq!(board.occupied_cells().len(), TOTAL_SHIP_CELLS);
}

#[test]
fn test_auto_deploy_many_seeds() {
    for seed in 0..50 {
        let board = deployed_board(seed);
        assert!(board.is_fleet_deployed(), "seed {} left ships ashore", seed);
        assert_eq!(board.occupied_cells().len(), TOTAL_SHIP_CELLS);
    }
}

#[test]
fn test_auto_deploy_skips_deployed_ships() {
    let mut board = Board::new();
    let mut events = EventQueue::new();
    let mut rng = SmallRng::seed_from_u64(3);
    auto_deploy(&mut board, &mut rng, &mut events).unwrap();
    let before: Vec<Vec<Coord>> = board
        .ships()
        .iter()
        .map(|s| s.positions().to_vec())
        .collect();

    // a second pass over a deployed fleet changes nothing
    auto_deploy(&mut board, &mut rng, &mut events).unwrap();
    let after: Vec<Vec<Coord>> = board
        .ships()
        .iter()
        .map(|s| s.positions().to_vec())
        .collect();
    assert_eq!(before, after);
}
