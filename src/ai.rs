// Random fleet placement and random targeting for computer-controlled players.
// Both use bounded rejection sampling so a crowded grid yields an error
// instead of a hang.

use alloc::vec::Vec;
use rand::Rng;

use crate::{
    common::GridError,
    config::Rules,
    grid::{is_valid_cell, make_empty_grid, Cell, FleetGrid, TargetCell, TargetGrid},
    roster::Roster,
    ship::{Orientation, ShipId, ShipSpec},
};

/// Pick a random orientation and return it with the far end of a ship of
/// `ship_size` anchored at (`start_row`, `start_col`). The end may lie
/// outside the grid.
pub fn get_end_coordinates<R: Rng + ?Sized>(
    rng: &mut R,
    start_row: usize,
    start_col: usize,
    ship_size: usize,
) -> (Orientation, usize, usize) {
    let orientation = Orientation::random(rng);
    let (end_row, end_col) = orientation.step(start_row, start_col, ship_size.saturating_sub(1));
    (orientation, end_row, end_col)
}

fn check_corners(
    grid: &FleetGrid,
    row1: usize,
    col1: usize,
    row2: usize,
    col2: usize,
) -> Result<(), GridError> {
    for (row, col) in [(row1, col1), (row2, col2)] {
        if !grid.is_valid_cell(row, col) {
            return Err(GridError::OutOfBounds {
                row,
                col,
                size: grid.size(),
            });
        }
    }
    Ok(())
}

/// Every cell between (`row1`, `col1`) and (`row2`, `col2`) inclusive. For
/// two ends of a ship this is the straight line between them.
fn span(row1: usize, col1: usize, row2: usize, col2: usize) -> impl Iterator<Item = (usize, usize)> {
    let rows = row1.min(row2)..=row1.max(row2);
    let cols = col1.min(col2)..=col1.max(col2);
    rows.flat_map(move |r| cols.clone().map(move |c| (r, c)))
}

/// Returns `true` if any cell between the two ends is not empty.
pub fn is_occupied(
    row1: usize,
    col1: usize,
    row2: usize,
    col2: usize,
    grid: &FleetGrid,
) -> Result<bool, GridError> {
    check_corners(grid, row1, col1, row2, col2)?;
    for (r, c) in span(row1, col1, row2, col2) {
        if !grid.get(r, c)?.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Fill the cells between the two ends with intact segments of `ship`.
pub fn place_ship(
    row1: usize,
    col1: usize,
    row2: usize,
    col2: usize,
    grid: &mut FleetGrid,
    ship: ShipId,
) -> Result<(), GridError> {
    check_corners(grid, row1, col1, row2, col2)?;
    for (r, c) in span(row1, col1, row2, col2) {
        grid.set(r, c, Cell::Ship(ship))?;
    }
    Ok(())
}

/// Make one random attempt at placing `ship`. Returns `true` if it was
/// placed.
pub fn randomly_place_ship<R: Rng + ?Sized>(rng: &mut R, grid: &mut FleetGrid, ship: ShipSpec) -> bool {
    let size = grid.size();
    let start_row = rng.random_range(0..size);
    let start_col = rng.random_range(0..size);
    let (orientation, end_row, end_col) = get_end_coordinates(rng, start_row, start_col, ship.size);

    if !is_valid_cell(end_row, end_col, size) {
        return false;
    }
    match is_occupied(start_row, start_col, end_row, end_col, grid) {
        Ok(false) => {
            if place_ship(start_row, start_col, end_row, end_col, grid, ship.id).is_err() {
                return false;
            }
            log::debug!(
                "placed ship '{}' at ({}, {}) {:?}",
                ship.id,
                start_row,
                start_col,
                orientation
            );
            true
        }
        _ => false,
    }
}

/// Returns `true` if a ship of `ship_size` fits somewhere on `grid` without
/// overlapping another ship.
fn has_room(grid: &FleetGrid, ship_size: usize) -> bool {
    let size = grid.size();
    let reach = ship_size.saturating_sub(1);
    (0..size).any(|row| {
        (0..size).any(|col| {
            [Orientation::Horizontal, Orientation::Vertical]
                .into_iter()
                .any(|orientation| {
                    let (end_row, end_col) = orientation.step(row, col, reach);
                    is_valid_cell(end_row, end_col, size)
                        && matches!(is_occupied(row, col, end_row, end_col, grid), Ok(false))
                })
        })
    })
}

/// One pass over the roster, last ship first. On failure returns the ship
/// that could not be placed and the draws spent on it.
fn place_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    grid: &mut FleetGrid,
    roster: &Roster,
    rules: &Rules,
) -> Result<(), (ShipSpec, usize)> {
    for &spec in roster.ships().iter().rev() {
        if !has_room(grid, spec.size) {
            return Err((spec, 0));
        }
        let mut attempts = 0;
        loop {
            if attempts == rules.max_placement_attempts {
                return Err((spec, attempts));
            }
            attempts += 1;
            if randomly_place_ship(rng, grid, spec) {
                break;
            }
        }
    }
    Ok(())
}

/// Build a `grid_size`×`grid_size` fleet grid with every roster ship placed
/// at a random position and orientation.
///
/// Ships are placed last to first. Each ship gets
/// `rules.max_placement_attempts` tries. When a ship has no room left or runs
/// out of tries the grid is cleared and the whole fleet placed again, up to
/// `rules.max_fleet_restarts` times, before `UnplaceableFleet` is returned.
pub fn generate_fleet_grid<R: Rng + ?Sized>(
    rng: &mut R,
    grid_size: usize,
    roster: &Roster,
    rules: &Rules,
) -> Result<FleetGrid, GridError> {
    let empty = make_empty_grid(grid_size, rules)?;
    if !roster.fits(grid_size) {
        let ship = roster
            .ships()
            .iter()
            .find(|s| s.size > grid_size)
            .or_else(|| roster.ships().last())
            .map(|s| s.id.intact())
            .unwrap_or(' ');
        return Err(GridError::UnplaceableFleet { ship, attempts: 0 });
    }

    let mut restarts = 0;
    loop {
        let mut grid = empty.clone();
        match place_fleet(rng, &mut grid, roster, rules) {
            Ok(()) => return Ok(grid),
            Err((spec, attempts)) if restarts == rules.max_fleet_restarts => {
                return Err(GridError::UnplaceableFleet {
                    ship: spec.id.intact(),
                    attempts,
                });
            }
            Err((spec, _)) => {
                restarts += 1;
                log::debug!("ship '{}' has no room, restarting fleet ({})", spec.id, restarts);
            }
        }
    }
}

/// Choose an unknown cell of `target` uniformly at random.
///
/// Draws up to `rules.max_move_attempts` random cells, then falls back to
/// picking among the remaining unknown cells directly.
pub fn make_computer_move<R: Rng + ?Sized>(
    rng: &mut R,
    target: &TargetGrid,
    rules: &Rules,
) -> Result<(usize, usize), GridError> {
    if target.count(|c| *c == TargetCell::Unknown) == 0 {
        return Err(GridError::NoMovesRemain);
    }
    let size = target.size();
    for _ in 0..rules.max_move_attempts {
        let row = rng.random_range(0..size);
        let col = rng.random_range(0..size);
        if !target.is_not(row, col, &TargetCell::Unknown)? {
            return Ok((row, col));
        }
    }

    log::warn!(
        "no unknown cell after {} draws; choosing from remaining cells",
        rules.max_move_attempts
    );
    let open: Vec<(usize, usize)> = target
        .iter()
        .filter(|(_, c)| *c == TargetCell::Unknown)
        .map(|(pos, _)| pos)
        .collect();
    Ok(open[rng.random_range(0..open.len())])
}
