use std::io::Cursor;

use fleetgrid::{read_ship_data, GridError, Roster, RosterIssue, Rules, ShipId};

#[test]
fn parse_two_lines() {
    let roster = Roster::parse("a b", "3 2", &Rules::STANDARD).unwrap();
    assert_eq!(
        roster.ids(),
        vec![ShipId::new('a').unwrap(), ShipId::new('b').unwrap()]
    );
    assert_eq!(roster.sizes(), vec![3, 2]);
    assert_eq!(roster.total_cells(), 5);
    assert_eq!(roster.index_of(ShipId::new('b').unwrap()), Some(1));
}

#[test]
fn read_from_reader() {
    let input = Cursor::new("a b c\n5 4 3\n");
    let roster = read_ship_data(input, &Rules::STANDARD).unwrap();
    assert_eq!(roster.len(), 3);
    assert_eq!(roster.sizes(), vec![5, 4, 3]);
}

#[test]
fn read_needs_two_lines() {
    let err = read_ship_data(Cursor::new("a b\n"), &Rules::STANDARD).unwrap_err();
    assert_eq!(
        err.downcast_ref::<GridError>(),
        Some(&GridError::MalformedRoster(RosterIssue::MissingLine))
    );
}

#[test]
fn malformed_rosters() {
    let rules = Rules::STANDARD;
    let issue = |ids: &str, sizes: &str| match Roster::parse(ids, sizes, &rules) {
        Err(GridError::MalformedRoster(issue)) => issue,
        other => panic!("expected malformed roster, got {:?}", other),
    };

    assert_eq!(issue("a b", "3"), RosterIssue::LengthMismatch { ships: 2, sizes: 1 });
    assert_eq!(issue("", ""), RosterIssue::Empty);
    assert_eq!(issue("a a", "3 2"), RosterIssue::DuplicateShip('a'));
    assert_eq!(issue("ab", "3"), RosterIssue::InvalidShipId("ab".into()));
    assert_eq!(issue("A", "3"), RosterIssue::InvalidShipId("A".into()));
    assert_eq!(issue("x", "3"), RosterIssue::InvalidShipId("x".into()));
    assert_eq!(issue(".", "3"), RosterIssue::InvalidShipId(".".into()));
    assert_eq!(issue("a", "0"), RosterIssue::SizeOutOfRange { ship: 'a', size: 0 });
    assert_eq!(issue("a", "11"), RosterIssue::SizeOutOfRange { ship: 'a', size: 11 });
    assert_eq!(issue("a", "three"), RosterIssue::BadSize("three".into()));
}

#[test]
fn standard_roster() {
    let roster = Roster::standard();
    assert_eq!(roster.sizes(), vec![5, 4, 3, 3, 2]);
    assert!(roster.fits(10));
    assert!(!roster.fits(4));
}
