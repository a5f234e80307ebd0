//! Ship identifiers, roster entries and orientation.

use core::fmt;
use rand::Rng;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Pick either orientation with equal probability.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Cell `i` steps along this orientation from (`row`, `col`).
    pub fn step(self, row: usize, col: usize, i: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        }
    }
}

/// A ship identifier: one ASCII graphic character, stored in its intact
/// (lower-case) form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(char);

impl ShipId {
    /// Build an identifier from either its intact or its hit character.
    /// Returns `None` for characters that are not ASCII graphic.
    pub fn new(c: char) -> Option<Self> {
        if c.is_ascii_graphic() {
            Some(ShipId(c.to_ascii_lowercase()))
        } else {
            None
        }
    }

    /// Character for an intact cell of this ship.
    pub fn intact(self) -> char {
        self.0
    }

    /// Character for a hit cell of this ship.
    pub fn hit(self) -> char {
        self.0.to_ascii_uppercase()
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One roster entry: identifier and declared size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipSpec {
    pub id: ShipId,
    pub size: usize,
}

impl ShipSpec {
    pub const fn new(id: ShipId, size: usize) -> Self {
        Self { id, size }
    }
}
