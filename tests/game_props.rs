use std::collections::HashSet;

use flotilla::{
    auto_deploy, in_bounds, Board, CandidatePool, Coord, Event, EventQueue, Game, GameError, Side,
    BOARD_SIZE, NUM_SHIPS, TOTAL_SHIP_CELLS,
};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn deployed_board(seed: u64) -> Board {
    let mut board = Board::new();
    let mut events = EventQueue::new();
    let mut rng = SmallRng::seed_from_u64(seed);
    auto_deploy(&mut board, &mut rng, &mut events).unwrap();
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_auto_deploy_always_completes(seed in any::<u64>()) {
        let board = deployed_board(seed);
        prop_assert!(board.is_fleet_deployed());
        prop_assert_eq!(board.occupied_cells().len(), TOTAL_SHIP_CELLS);
        for ship in board.ships() {
            prop_assert_eq!(ship.positions().len(), ship.size());
            for &coord in ship.positions() {
                prop_assert!(in_bounds(coord));
            }
        }
    }

    #[test]
    fn prop_auto_deploy_deterministic(seed in any::<u64>()) {
        let first = deployed_board(seed);
        let second = deployed_board(seed);
        for (a, b) in first.ships().iter().zip(second.ships()) {
            prop_assert_eq!(a.positions().to_vec(), b.positions().to_vec());
        }
    }

    #[test]
    fn prop_attacks_never_double_count(seed in any::<u64>(), shots in 1..150usize) {
        let mut board = deployed_board(seed);
        let mut events = EventQueue::new();
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x9e37_79b9);
        let mut attacked = HashSet::new();

        for _ in 0..shots {
            let coord = Coord::new(
                rng.random_range(0..BOARD_SIZE as i32),
                rng.random_range(0..BOARD_SIZE as i32),
            );
            let result = board.resolve_attack(coord, &mut events);
            if attacked.contains(&coord) {
                prop_assert_eq!(result.unwrap_err(), GameError::AlreadyAttacked);
            } else {
                prop_assert!(result.is_ok());
                attacked.insert(coord);
            }
        }

        // damage tallies with the distinct ship cells that were struck
        let struck = attacked.iter().filter(|&&c| board.ship_at(c).is_some()).count();
        let damage: usize = board
            .ships()
            .iter()
            .map(|s| s.size() - s.hit_points())
            .sum();
        prop_assert_eq!(damage, struck);
        prop_assert_eq!(board.occupied_cells().len(), TOTAL_SHIP_CELLS);
    }

    #[test]
    fn prop_auto_battle_terminates(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = Game::new();
        game.player_mut(Side::User).auto_deploy(&mut rng).unwrap();
        game.player_mut(Side::Enemy).auto_deploy(&mut rng).unwrap();
        game.start_battle(&mut rng);

        let mut side = Side::User;
        let mut turns = 0;
        let winner = loop {
            turns += 1;
            prop_assert!(turns <= 200, "game took too many turns");
            game.auto_attack(side, &mut rng).unwrap();
            if let Some(winner) = game.victor() {
                break winner;
            }
            side = side.opponent();
        };

        let loser = winner.opponent();
        prop_assert!(game.player(loser).board().all_sunk());
        prop_assert!(!game.player(winner).board().all_sunk());

        let sunk: Vec<_> = game
            .drain_events(loser)
            .filter(|e| matches!(e, Event::ShipSunk { .. }))
            .collect();
        prop_assert_eq!(sunk.len(), NUM_SHIPS);
    }

    #[test]
    fn prop_pool_never_yields_stale_or_duplicate(
        ops in proptest::collection::vec((0u32..100, any::<bool>()), 1..200)
    ) {
        let mut pool = CandidatePool::new();
        let mut live = HashSet::new();
        for (index, insert) in ops {
            if insert {
                pool.push_back(index);
                live.insert(index);
            } else {
                pool.remove(index);
                live.remove(&index);
            }
        }
        prop_assert_eq!(pool.len(), live.len());

        let mut seen = HashSet::new();
        while let Some(index) = pool.pop_front() {
            prop_assert!(live.contains(&index));
            prop_assert!(seen.insert(index));
        }
        prop_assert_eq!(seen.len(), live.len());
    }
}
