//! Common types: grid errors, shot results and player identifiers.

use alloc::string::String;
use core::fmt;

use crate::ship::ShipId;

/// Identifies one of the two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// The other side.
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::One => write!(f, "player one"),
            PlayerId::Two => write!(f, "player two"),
        }
    }
}

/// Outcome of a shot against a fleet grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot landed on an empty cell.
    Miss,
    /// Shot struck a ship that is still afloat.
    Hit(ShipId),
    /// Shot struck the last intact cell of a ship.
    Sunk { ship: ShipId, size: usize },
}

impl fmt::Display for ShotResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotResult::Miss => write!(f, "Miss."),
            ShotResult::Hit(_) => write!(f, "Hit!"),
            ShotResult::Sunk { ship, size } => {
                write!(f, "The size {} {} ship has been sunk!", size, ship)
            }
        }
    }
}

/// Reasons a roster is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterIssue {
    /// Identifier and size lists differ in length.
    LengthMismatch { ships: usize, sizes: usize },
    /// The roster declares no ships.
    Empty,
    /// The same identifier appears twice.
    DuplicateShip(char),
    /// Identifier is not a usable ship character.
    InvalidShipId(String),
    /// Declared size lies outside the allowed range.
    SizeOutOfRange { ship: char, size: usize },
    /// A size token is not a non-negative integer.
    BadSize(String),
    /// Input ended before both roster lines were read.
    MissingLine,
}

impl fmt::Display for RosterIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterIssue::LengthMismatch { ships, sizes } => {
                write!(f, "{} ship identifiers but {} sizes", ships, sizes)
            }
            RosterIssue::Empty => write!(f, "no ships declared"),
            RosterIssue::DuplicateShip(c) => write!(f, "ship '{}' declared twice", c),
            RosterIssue::InvalidShipId(s) => write!(f, "'{}' is not a valid ship identifier", s),
            RosterIssue::SizeOutOfRange { ship, size } => {
                write!(f, "ship '{}' has out-of-range size {}", ship, size)
            }
            RosterIssue::BadSize(s) => write!(f, "'{}' is not a ship size", s),
            RosterIssue::MissingLine => write!(f, "expected two lines of ship data"),
        }
    }
}

/// Errors returned by grid, roster and game operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Roster failed validation.
    MalformedRoster(RosterIssue),
    /// Row or column index lies outside the grid.
    OutOfBounds { row: usize, col: usize, size: usize },
    /// Random placement ran out of attempts for a ship.
    UnplaceableFleet { ship: char, attempts: usize },
    /// Every target cell has already been fired at.
    NoMovesRemain,
    /// Cell cannot take a shot: empty, already hit, or already resolved.
    InvalidTarget { row: usize, col: usize },
    /// Grid size is zero or exceeds the ruleset maximum.
    InvalidGridSize { size: usize, max: usize },
    /// Fleet and target grids differ in size.
    GridSizeMismatch { fleet: usize, target: usize },
    /// A fleet cell belongs to a ship not on the roster.
    UnknownShip(char),
    /// Grid text holds a character not allowed in that kind of grid.
    InvalidCell { row: usize, col: usize, ch: char },
    /// Grid text row length differs from the number of rows.
    RaggedGrid { row: usize, len: usize, size: usize },
    /// A fleet handed to the engine is not a legal layout.
    InvalidFleet(PlayerId),
    /// The game already has a winner.
    GameOver,
    /// Hit counters were built for a roster of a different length.
    HitCounterMismatch { counters: usize, ships: usize },
}

impl From<RosterIssue> for GridError {
    fn from(issue: RosterIssue) -> Self {
        GridError::MalformedRoster(issue)
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::MalformedRoster(issue) => write!(f, "Malformed roster: {}", issue),
            GridError::OutOfBounds { row, col, size } => {
                write!(f, "Cell ({}, {}) is outside the {}x{} grid", row, col, size, size)
            }
            GridError::UnplaceableFleet { ship, attempts } => {
                write!(f, "Could not place ship '{}' after {} attempts", ship, attempts)
            }
            GridError::NoMovesRemain => write!(f, "No unknown cells remain to fire at"),
            GridError::InvalidTarget { row, col } => {
                write!(f, "Cell ({}, {}) cannot be fired at", row, col)
            }
            GridError::InvalidGridSize { size, max } => {
                write!(f, "Grid size {} is outside 1..={}", size, max)
            }
            GridError::GridSizeMismatch { fleet, target } => {
                write!(f, "Fleet grid is {} wide but target grid is {}", fleet, target)
            }
            GridError::UnknownShip(c) => write!(f, "Ship '{}' is not on the roster", c),
            GridError::InvalidCell { row, col, ch } => {
                write!(f, "Unexpected '{}' at ({}, {})", ch, row, col)
            }
            GridError::RaggedGrid { row, len, size } => {
                write!(f, "Row {} has {} cells, expected {}", row, len, size)
            }
            GridError::InvalidFleet(p) => write!(f, "Fleet of {} is not a legal layout", p),
            GridError::GameOver => write!(f, "The game is already over"),
            GridError::HitCounterMismatch { counters, ships } => write!(
                f,
                "{} hit counters do not match a roster of {} ships",
                counters, ships
            ),
        }
    }
}

impl core::error::Error for GridError {}
