//! Game rules: cell alphabet, size limits and retry budgets.

/// Smallest ship size a roster may declare.
pub const MIN_SHIP_SIZE: usize = 1;
/// Largest ship size a roster may declare.
pub const MAX_SHIP_SIZE: usize = 10;
/// Largest side length of a square grid.
pub const MAX_GRID_SIZE: usize = 10;

/// Target-grid default marker.
pub const UNKNOWN: char = '-';
/// Fleet-grid background marker.
pub const EMPTY: char = '.';
/// Target-grid marker for a shot that struck a ship.
pub const HIT: char = 'X';
/// Target-grid marker for a shot that struck water.
pub const MISS: char = 'M';

/// Grid size used by the binaries when none is given.
pub const DEFAULT_GRID_SIZE: usize = 10;
pub const NUM_DEFAULT_SHIPS: usize = 5;
/// Roster used by the binaries when no roster file is given.
pub const DEFAULT_SHIPS: [(char, usize); NUM_DEFAULT_SHIPS] = [
    ('c', 5),
    ('b', 4),
    ('r', 3),
    ('s', 3),
    ('d', 2),
];

/// Characters reserved for non-ship cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    pub unknown: char,
    pub empty: char,
    pub hit: char,
    pub miss: char,
}

impl Alphabet {
    pub const STANDARD: Alphabet = Alphabet {
        unknown: UNKNOWN,
        empty: EMPTY,
        hit: HIT,
        miss: MISS,
    };

    /// Returns `true` if `c`, or its ASCII case partner, is one of the markers.
    /// Such a character cannot identify a ship since its hit form would be
    /// ambiguous.
    pub fn is_reserved(&self, c: char) -> bool {
        let markers = [self.unknown, self.empty, self.hit, self.miss];
        markers.iter().any(|&m| {
            m == c || m == c.to_ascii_uppercase() || m == c.to_ascii_lowercase()
        })
    }
}

/// The fixed ruleset a game is played under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub min_ship_size: usize,
    pub max_ship_size: usize,
    pub max_grid_size: usize,
    pub alphabet: Alphabet,
    /// Random placement attempts allowed per ship before giving up.
    pub max_placement_attempts: usize,
    /// Times the fleet generator may clear the grid and start over after a
    /// ship runs out of room.
    pub max_fleet_restarts: usize,
    /// Random draws allowed before the move generator scans for a free cell.
    pub max_move_attempts: usize,
}

impl Rules {
    pub const STANDARD: Rules = Rules {
        min_ship_size: MIN_SHIP_SIZE,
        max_ship_size: MAX_SHIP_SIZE,
        max_grid_size: MAX_GRID_SIZE,
        alphabet: Alphabet::STANDARD,
        max_placement_attempts: 10_000,
        max_fleet_restarts: 1_000,
        max_move_attempts: 1_000,
    };
}

impl Default for Rules {
    fn default() -> Self {
        Rules::STANDARD
    }
}
