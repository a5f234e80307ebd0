//! Fleet grid validation: ship runs, character counts and ship positions.

use crate::common::GridError;
use crate::grid::{Cell, FleetGrid};
use crate::roster::Roster;
use crate::ship::{Orientation, ShipId};

fn belongs(grid: &FleetGrid, row: usize, col: usize, ship: ShipId) -> bool {
    grid.get(row, col).ok().and_then(Cell::ship) == Some(ship)
}

/// Exactly `size` cells of `ship` from (`row`, `col`) along `orientation`,
/// with the run ending there.
fn has_run(
    grid: &FleetGrid,
    row: usize,
    col: usize,
    ship: ShipId,
    size: usize,
    orientation: Orientation,
) -> bool {
    if size == 0 {
        return false;
    }
    for i in 0..size {
        let (r, c) = orientation.step(row, col, i);
        if !belongs(grid, r, c, ship) {
            return false;
        }
    }
    let (r, c) = orientation.step(row, col, size);
    !belongs(grid, r, c, ship)
}

/// Returns `true` if exactly `size` consecutive cells of `ship` start at
/// (`row`, `col`) going right along the row, or going down the column.
///
/// Hit and intact segments both count. Cells before the anchor are not
/// looked at, but a run that continues past `size` cells fails.
pub fn has_ship(
    grid: &FleetGrid,
    row: usize,
    col: usize,
    ship: ShipId,
    size: usize,
) -> Result<bool, GridError> {
    grid.get(row, col)?;
    Ok(has_run(grid, row, col, ship, size, Orientation::Horizontal)
        || has_run(grid, row, col, ship, size, Orientation::Vertical))
}

/// Returns `true` if every ship occupies exactly its declared number of
/// cells and every other cell is empty.
pub fn validate_character_count(grid: &FleetGrid, roster: &Roster) -> bool {
    for spec in roster.ships() {
        if grid.count(|c| c.ship() == Some(spec.id)) != spec.size {
            return false;
        }
    }
    let area = grid.size() * grid.size();
    match area.checked_sub(roster.total_cells()) {
        Some(expected) => grid.count(|c| c.is_empty()) == expected,
        None => false,
    }
}

/// Returns `true` if every ship lies in one straight, unbroken run.
///
/// Each ship is anchored at its first cell in row-major order. A ship whose
/// cells are split across several runs fails even if the anchored run has
/// the declared length.
pub fn validate_ship_positions(grid: &FleetGrid, roster: &Roster) -> bool {
    roster.ships().iter().all(|spec| {
        let anchor = grid
            .iter()
            .find(|(_, cell)| cell.ship() == Some(spec.id))
            .map(|(pos, _)| pos);
        let Some((row, col)) = anchor else {
            return false;
        };
        has_ship(grid, row, col, spec.id, spec.size).unwrap_or(false)
            && grid.count(|c| c.ship() == Some(spec.id)) == spec.size
    })
}

/// Returns `true` if `grid` is a legal, fully populated layout for `roster`.
pub fn validate_fleet_grid(grid: &FleetGrid, roster: &Roster) -> bool {
    validate_character_count(grid, roster) && validate_ship_positions(grid, roster)
}
