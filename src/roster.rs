//! Ship roster: the identifiers and sizes a game is played with.

use alloc::string::ToString;
use alloc::vec::Vec;

use crate::common::{GridError, RosterIssue};
use crate::config::{Rules, DEFAULT_SHIPS};
use crate::ship::{ShipId, ShipSpec};

/// Ordered list of ships. Roster order is the order of hit counters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    ships: Vec<ShipSpec>,
}

impl Roster {
    /// Build a roster from parallel identifier and size lists.
    pub fn new(ids: &[char], sizes: &[usize], rules: &Rules) -> Result<Self, GridError> {
        if ids.len() != sizes.len() {
            return Err(RosterIssue::LengthMismatch {
                ships: ids.len(),
                sizes: sizes.len(),
            }
            .into());
        }
        if ids.is_empty() {
            return Err(RosterIssue::Empty.into());
        }
        let mut ships: Vec<ShipSpec> = Vec::with_capacity(ids.len());
        for (&c, &size) in ids.iter().zip(sizes) {
            let id = match ShipId::new(c) {
                Some(id) if !c.is_ascii_uppercase() && !rules.alphabet.is_reserved(c) => id,
                _ => return Err(RosterIssue::InvalidShipId(c.to_string()).into()),
            };
            if ships.iter().any(|s| s.id == id) {
                return Err(RosterIssue::DuplicateShip(c).into());
            }
            if size < rules.min_ship_size || size > rules.max_ship_size {
                return Err(RosterIssue::SizeOutOfRange { ship: c, size }.into());
            }
            ships.push(ShipSpec::new(id, size));
        }
        Ok(Roster { ships })
    }

    /// Parse the two roster lines: identifiers, then sizes, each
    /// whitespace-separated.
    pub fn parse(ship_line: &str, size_line: &str, rules: &Rules) -> Result<Self, GridError> {
        let mut ids = Vec::new();
        for token in ship_line.split_whitespace() {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => ids.push(c),
                _ => return Err(RosterIssue::InvalidShipId(token.to_string()).into()),
            }
        }
        let sizes = size_line
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<usize>()
                    .map_err(|_| GridError::from(RosterIssue::BadSize(token.to_string())))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Roster::new(&ids, &sizes, rules)
    }

    /// The five-ship roster used when no roster file is supplied.
    pub fn standard() -> Self {
        let ships = DEFAULT_SHIPS
            .iter()
            .filter_map(|&(c, size)| ShipId::new(c).map(|id| ShipSpec::new(id, size)))
            .collect();
        Roster { ships }
    }

    pub fn ships(&self) -> &[ShipSpec] {
        &self.ships
    }

    pub fn ids(&self) -> Vec<ShipId> {
        self.ships.iter().map(|s| s.id).collect()
    }

    pub fn sizes(&self) -> Vec<usize> {
        self.ships.iter().map(|s| s.size).collect()
    }

    /// Roster position of the ship with identifier `id`.
    pub fn index_of(&self, id: ShipId) -> Option<usize> {
        self.ships.iter().position(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Sum of all declared ship sizes.
    pub fn total_cells(&self) -> usize {
        self.ships.iter().map(|s| s.size).sum()
    }

    /// Returns `true` if the ships could cover no more than a
    /// `grid_size`×`grid_size` grid.
    pub fn fits(&self, grid_size: usize) -> bool {
        self.total_cells() <= grid_size * grid_size
            && self.ships.iter().all(|s| s.size <= grid_size)
    }
}

/// Read a roster from two lines of text: ship identifiers, then sizes.
#[cfg(feature = "std")]
pub fn read_ship_data<R: std::io::BufRead>(mut reader: R, rules: &Rules) -> anyhow::Result<Roster> {
    use anyhow::Context;

    let mut ship_line = std::string::String::new();
    let mut size_line = std::string::String::new();
    let n1 = reader
        .read_line(&mut ship_line)
        .context("reading ship identifiers")?;
    let n2 = reader.read_line(&mut size_line).context("reading ship sizes")?;
    if n1 == 0 || n2 == 0 {
        return Err(GridError::from(RosterIssue::MissingLine).into());
    }
    Ok(Roster::parse(&ship_line, &size_line, rules)?)
}
