use fleetgrid::ai::{get_end_coordinates, is_occupied, place_ship, randomly_place_ship};
use fleetgrid::{
    generate_fleet_grid, make_computer_move, make_empty_grid, validate_fleet_grid, FleetGrid,
    GridError, Orientation, Roster, Rules, ShipId, TargetCell, TargetGrid,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn roster(ids: &str, sizes: &str) -> Roster {
    Roster::parse(ids, sizes, &Rules::STANDARD).unwrap()
}

#[test]
fn place_ship_and_occupancy() {
    let rules = Rules::STANDARD;
    let mut grid = make_empty_grid(3, &rules).unwrap();
    place_ship(0, 0, 1, 0, &mut grid, ShipId::new('d').unwrap()).unwrap();
    assert_eq!(grid, FleetGrid::from_rows(&["d..", "d..", "..."], &rules).unwrap());
    place_ship(0, 1, 0, 2, &mut grid, ShipId::new('z').unwrap()).unwrap();
    assert_eq!(grid, FleetGrid::from_rows(&["dzz", "d..", "..."], &rules).unwrap());

    let empty = make_empty_grid(3, &rules).unwrap();
    assert!(!is_occupied(1, 1, 2, 2, &empty).unwrap());
    let one = FleetGrid::from_rows(&["...", ".a.", "..."], &rules).unwrap();
    assert!(is_occupied(1, 1, 2, 2, &one).unwrap());
    assert!(is_occupied(1, 3, 1, 1, &one).is_err());
}

#[test]
fn end_coordinates_follow_orientation() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..20 {
        let (orient, r, c) = get_end_coordinates(&mut rng, 2, 3, 4);
        match orient {
            Orientation::Horizontal => assert_eq!((r, c), (2, 6)),
            Orientation::Vertical => assert_eq!((r, c), (5, 3)),
        }
    }
}

#[test]
fn random_attempt_never_overlaps() {
    let rules = Rules::STANDARD;
    let mut rng = SmallRng::seed_from_u64(3);
    let mut grid = FleetGrid::from_rows(&["aaaa", "....", "....", "...."], &rules).unwrap();
    let b = roster("b", "3").ships()[0];
    for _ in 0..50 {
        let before = grid.clone();
        if randomly_place_ship(&mut rng, &mut grid, b) {
            assert_eq!(grid.count(|c| c.ship() == Some(b.id)), 3);
            assert_eq!(grid.count(|c| c.ship() == Some(ShipId::new('a').unwrap())), 4);
            grid = before;
        } else {
            assert_eq!(grid, before);
        }
    }
}

#[test]
fn generated_fleet_is_valid_and_reproducible() {
    let rules = Rules::STANDARD;
    let roster = Roster::standard();
    let mut rng1 = SmallRng::seed_from_u64(42);
    let mut rng2 = SmallRng::seed_from_u64(42);
    let g1 = generate_fleet_grid(&mut rng1, 10, &roster, &rules).unwrap();
    let g2 = generate_fleet_grid(&mut rng2, 10, &roster, &rules).unwrap();
    assert!(validate_fleet_grid(&g1, &roster));
    assert_eq!(g1, g2);
}

#[test]
fn oversized_roster_fails_fast() {
    let rules = Rules::STANDARD;
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        generate_fleet_grid(&mut rng, 3, &roster("a b", "4 1"), &rules).unwrap_err(),
        GridError::UnplaceableFleet { ship: 'a', attempts: 0 }
    );
    assert_eq!(
        generate_fleet_grid(&mut rng, 3, &roster("a b c d", "3 3 3 1"), &rules).unwrap_err(),
        GridError::UnplaceableFleet { ship: 'd', attempts: 0 }
    );
}

#[test]
fn dense_rosters_fill_the_grid() {
    let rules = Rules::STANDARD;
    for (size, ids, sizes) in [(3, "a b c d", "3 3 2 1"), (4, "a b c d e", "4 4 4 2 2")] {
        let roster = roster(ids, sizes);
        assert!(roster.fits(size));
        for seed in 0..200 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let grid = generate_fleet_grid(&mut rng, size, &roster, &rules).unwrap();
            assert!(validate_fleet_grid(&grid, &roster), "seed {seed}");
            assert_eq!(grid.count(|c| c.is_empty()), size * size - roster.total_cells());
        }
    }
}

#[test]
fn restart_budget_is_enforced() {
    let rules = Rules {
        max_fleet_restarts: 0,
        ..Rules::STANDARD
    };
    let roster = roster("a b c d e", "4 4 4 2 2");
    let failures = (0..200)
        .filter(|&seed| {
            let mut rng = SmallRng::seed_from_u64(seed);
            generate_fleet_grid(&mut rng, 4, &roster, &rules).is_err()
        })
        .count();
    assert!(failures > 0);
}

#[test]
fn placement_budget_is_enforced() {
    let rules = Rules {
        max_placement_attempts: 0,
        ..Rules::STANDARD
    };
    let mut rng = SmallRng::seed_from_u64(1);
    // last ship is placed first
    assert_eq!(
        generate_fleet_grid(&mut rng, 2, &roster("a b", "2 2"), &rules).unwrap_err(),
        GridError::UnplaceableFleet { ship: 'b', attempts: 0 }
    );
}

#[test]
fn computer_move_picks_unknown_cell() {
    let rules = Rules::STANDARD;
    let mut rng = SmallRng::seed_from_u64(9);
    let target = TargetGrid::from_rows(&["XMX", "M-M", "XXM"], &rules).unwrap();
    assert_eq!(make_computer_move(&mut rng, &target, &rules).unwrap(), (1, 1));

    let no_draws = Rules {
        max_move_attempts: 0,
        ..rules
    };
    assert_eq!(make_computer_move(&mut rng, &target, &no_draws).unwrap(), (1, 1));
}

#[test]
fn computer_move_on_revealed_grid() {
    let rules = Rules::STANDARD;
    let mut rng = SmallRng::seed_from_u64(9);
    let target = TargetGrid::from_rows(&["XM", "MX"], &rules).unwrap();
    assert_eq!(
        make_computer_move(&mut rng, &target, &rules).unwrap_err(),
        GridError::NoMovesRemain
    );
}

#[test]
fn computer_moves_cover_grid_without_repeats() {
    let rules = Rules::STANDARD;
    let mut rng = SmallRng::seed_from_u64(5);
    let mut target = fleetgrid::make_target_grid(4, &rules).unwrap();
    for _ in 0..16 {
        let (r, c) = make_computer_move(&mut rng, &target, &rules).unwrap();
        assert_eq!(target.get(r, c).unwrap(), TargetCell::Unknown);
        target.set(r, c, TargetCell::Miss).unwrap();
    }
    assert_eq!(
        make_computer_move(&mut rng, &target, &rules).unwrap_err(),
        GridError::NoMovesRemain
    );
}
