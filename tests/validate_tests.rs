use fleetgrid::{
    has_ship, validate_character_count, validate_fleet_grid, validate_ship_positions, FleetGrid,
    GridError, Roster, Rules, ShipId,
};

fn fleet(rows: &[&str]) -> FleetGrid {
    FleetGrid::from_rows(rows, &Rules::STANDARD).unwrap()
}

fn id(c: char) -> ShipId {
    ShipId::new(c).unwrap()
}

fn roster(ids: &str, sizes: &str) -> Roster {
    Roster::parse(ids, sizes, &Rules::STANDARD).unwrap()
}

#[test]
fn has_ship_horizontal_run() {
    let grid = fleet(&[".b.", ".b.", "aaa"]);
    assert!(has_ship(&grid, 2, 0, id('a'), 3).unwrap());
}

#[test]
fn has_ship_rejects_overlong_run() {
    let grid = fleet(&[".b.", ".b.", "aba"]);
    assert!(!has_ship(&grid, 0, 1, id('b'), 2).unwrap());
}

#[test]
fn has_ship_vertical_run() {
    let grid = fleet(&[".b.", ".b.", "aaa"]);
    assert!(has_ship(&grid, 0, 1, id('b'), 2).unwrap());
    // only one segment from the anchor down
    assert!(!has_ship(&grid, 1, 1, id('b'), 2).unwrap());
}

#[test]
fn has_ship_ignores_cells_before_anchor() {
    let grid = fleet(&["aaa", "...", "..."]);
    assert!(has_ship(&grid, 0, 1, id('a'), 2).unwrap());
    assert!(has_ship(&grid, 0, 2, id('a'), 1).unwrap());
    assert!(!has_ship(&grid, 0, 0, id('a'), 2).unwrap());

    let column = fleet(&[".c.", ".C.", ".c."]);
    assert!(has_ship(&column, 1, 1, id('c'), 2).unwrap());
}

#[test]
fn has_ship_stops_at_grid_edge() {
    let grid = fleet(&["..a", "..a", "..."]);
    assert!(!has_ship(&grid, 0, 2, id('a'), 3).unwrap());
    assert!(has_ship(&grid, 0, 2, id('a'), 2).unwrap());
}

#[test]
fn has_ship_vertical_wins_when_horizontal_wrong_length() {
    // rightward run of 'a' is 2 long, downward run is exactly 3
    let grid = fleet(&["aa.", "a..", "a.."]);
    assert!(has_ship(&grid, 0, 0, id('a'), 3).unwrap());
}

#[test]
fn has_ship_counts_hit_segments() {
    let grid = fleet(&[".B.", ".b.", "aAa"]);
    assert!(has_ship(&grid, 2, 0, id('a'), 3).unwrap());
    assert!(has_ship(&grid, 0, 1, id('b'), 2).unwrap());
}

#[test]
fn has_ship_out_of_bounds_anchor() {
    let grid = fleet(&[".b.", ".b.", "aaa"]);
    assert_eq!(
        has_ship(&grid, 3, 0, id('a'), 3).unwrap_err(),
        GridError::OutOfBounds { row: 3, col: 0, size: 3 }
    );
}

#[test]
fn character_count() {
    let grid = fleet(&[".b.", ".b.", "aaa"]);
    assert!(validate_character_count(&grid, &roster("a b", "3 2")));
    assert!(!validate_character_count(&grid, &roster("a b", "2 2")));
    // ship not on the roster leaves too few empty cells
    let grid = fleet(&[".bz", ".b.", "aaa"]);
    assert!(!validate_character_count(&grid, &roster("a b", "3 2")));
}

#[test]
fn ship_positions() {
    let r = roster("a b", "3 2");
    assert!(validate_ship_positions(&fleet(&[".b.", ".b.", "aaa"]), &r));
    assert!(!validate_ship_positions(&fleet(&["..b", "...", "aaa"]), &r));
}

#[test]
fn diagonal_and_bent_ships_fail() {
    let r = roster("a", "2");
    assert!(!validate_fleet_grid(&fleet(&["a..", ".a.", "..."]), &r));
    let r = roster("a", "3");
    let bent = fleet(&["aa.", "a..", "..."]);
    assert!(validate_character_count(&bent, &r));
    assert!(!validate_ship_positions(&bent, &r));
}

#[test]
fn split_ship_fails_positions_on_its_own() {
    // first run of 'a' has the declared length, but a stray segment remains
    let grid = fleet(&["aa..", "....", "...a", "...."]);
    let r = roster("a", "2");
    assert!(has_ship(&grid, 0, 0, id('a'), 2).unwrap());
    assert!(!validate_ship_positions(&grid, &r));
    assert!(!validate_fleet_grid(&grid, &r));
}

#[test]
fn split_ship_with_correct_count_fails() {
    let grid = fleet(&["a.a", "...", "..."]);
    let r = roster("a", "2");
    assert!(validate_character_count(&grid, &r));
    assert!(!validate_ship_positions(&grid, &r));
}

#[test]
fn missing_ship_fails() {
    let grid = fleet(&["...", "...", "aaa"]);
    assert!(!validate_ship_positions(&grid, &roster("a b", "3 2")));
}

#[test]
fn fleet_grid_both_checks() {
    let grid = fleet(&[".b.", ".b.", "aaa"]);
    assert!(validate_fleet_grid(&grid, &roster("a b", "3 2")));
    assert!(!validate_fleet_grid(&grid, &roster("a c", "2 2")));
}
