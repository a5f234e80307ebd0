//! Shot resolution and turn bookkeeping: hit counters, grid updates, win
//! detection and the two-sided game engine.

use alloc::vec::Vec;

use crate::{
    common::{GridError, PlayerId, ShotResult},
    config::Rules,
    grid::{make_target_grid, Cell, FleetGrid, TargetCell, TargetGrid},
    roster::Roster,
    validate::validate_fleet_grid,
};

/// Hits taken by each ship, in roster order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitCounter {
    hits: Vec<usize>,
}

impl HitCounter {
    /// All counters at zero.
    pub fn new(roster: &Roster) -> Self {
        Self {
            hits: alloc::vec![0; roster.len()],
        }
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.hits
    }

    pub fn get(&self, index: usize) -> Option<usize> {
        self.hits.get(index).copied()
    }

    /// Returns `true` when ship `index` has taken as many hits as its size.
    pub fn is_sunk(&self, index: usize, roster: &Roster) -> bool {
        match (self.hits.get(index), roster.ships().get(index)) {
            (Some(&h), Some(spec)) => h == spec.size,
            _ => false,
        }
    }
}

/// Record a hit on the ship at (`row`, `col`) of `fleet`.
///
/// The cell is marked hit and the owning ship's counter incremented. An empty
/// or already-hit cell is rejected with `InvalidTarget` and leaves both the
/// grid and the counters untouched.
pub fn update_fleet_grid(
    row: usize,
    col: usize,
    fleet: &mut FleetGrid,
    roster: &Roster,
    hits: &mut HitCounter,
) -> Result<ShotResult, GridError> {
    let id = match fleet.get(row, col)? {
        Cell::Ship(id) => id,
        Cell::Empty | Cell::ShipHit(_) => return Err(GridError::InvalidTarget { row, col }),
    };
    if hits.hits.len() != roster.len() {
        return Err(GridError::HitCounterMismatch {
            counters: hits.hits.len(),
            ships: roster.len(),
        });
    }
    let index = roster
        .index_of(id)
        .ok_or(GridError::UnknownShip(id.intact()))?;
    let size = roster.ships()[index].size;
    let count = hits
        .hits
        .get_mut(index)
        .ok_or(GridError::UnknownShip(id.intact()))?;
    if *count >= size {
        return Err(GridError::InvalidTarget { row, col });
    }
    *count += 1;
    let sunk = *count == size;
    fleet.set(row, col, Cell::ShipHit(id))?;

    if sunk {
        let result = ShotResult::Sunk { ship: id, size };
        log::debug!("{}", result);
        Ok(result)
    } else {
        Ok(ShotResult::Hit(id))
    }
}

/// Mark (`row`, `col`) of `target` as a hit or miss depending on `fleet`.
pub fn update_target_grid(
    row: usize,
    col: usize,
    target: &mut TargetGrid,
    fleet: &FleetGrid,
) -> Result<TargetCell, GridError> {
    if target.size() != fleet.size() {
        return Err(GridError::GridSizeMismatch {
            fleet: fleet.size(),
            target: target.size(),
        });
    }
    if target.get(row, col)? != TargetCell::Unknown {
        return Err(GridError::InvalidTarget { row, col });
    }
    let mark = if fleet.get(row, col)?.is_empty() {
        TargetCell::Miss
    } else {
        TargetCell::Hit
    };
    target.set(row, col, mark)?;
    Ok(mark)
}

/// Returns `true` when every ship has taken exactly as many hits as its size.
pub fn is_win(sizes: &[usize], hits: &[usize]) -> bool {
    sizes == hits
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(PlayerId),
}

/// One player's grids: the fleet they hide, their view of the opponent, and
/// the hits their own ships have taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Side {
    pub fleet: FleetGrid,
    pub target: TargetGrid,
    pub hits: HitCounter,
}

/// Two-player game played over a shared roster.
#[derive(Debug, Clone)]
pub struct GameEngine {
    roster: Roster,
    sides: [Side; 2],
    turns: usize,
    status: GameStatus,
}

impl GameEngine {
    /// Start a game. Both fleets must be legal, untouched layouts of `roster`
    /// and the same size.
    pub fn new(
        roster: Roster,
        rules: &Rules,
        fleet_one: FleetGrid,
        fleet_two: FleetGrid,
    ) -> Result<Self, GridError> {
        if fleet_one.size() != fleet_two.size() {
            return Err(GridError::GridSizeMismatch {
                fleet: fleet_one.size(),
                target: fleet_two.size(),
            });
        }
        for (fleet, player) in [(&fleet_one, PlayerId::One), (&fleet_two, PlayerId::Two)] {
            let untouched = fleet.count(|c| matches!(c, Cell::ShipHit(_))) == 0;
            if !untouched || !validate_fleet_grid(fleet, &roster) {
                return Err(GridError::InvalidFleet(player));
            }
        }
        let size = fleet_one.size();
        let side = |fleet: FleetGrid| -> Result<Side, GridError> {
            Ok(Side {
                fleet,
                target: make_target_grid(size, rules)?,
                hits: HitCounter::new(&roster),
            })
        };
        let sides = [side(fleet_one)?, side(fleet_two)?];
        Ok(Self {
            roster,
            sides,
            turns: 0,
            status: GameStatus::InProgress,
        })
    }

    fn slot(player: PlayerId) -> usize {
        match player {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn side(&self, player: PlayerId) -> &Side {
        &self.sides[Self::slot(player)]
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn grid_size(&self) -> usize {
        self.sides[0].fleet.size()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of shots fired so far by both players.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// `attacker` fires at (`row`, `col`) of the opponent's fleet.
    pub fn fire(&mut self, attacker: PlayerId, row: usize, col: usize) -> Result<ShotResult, GridError> {
        if self.status != GameStatus::InProgress {
            return Err(GridError::GameOver);
        }
        let (first, second) = self.sides.split_at_mut(1);
        let (att, def) = match attacker {
            PlayerId::One => (&mut first[0], &mut second[0]),
            PlayerId::Two => (&mut second[0], &mut first[0]),
        };

        let mark = update_target_grid(row, col, &mut att.target, &def.fleet)?;
        let result = match mark {
            TargetCell::Hit => update_fleet_grid(row, col, &mut def.fleet, &self.roster, &mut def.hits)?,
            _ => ShotResult::Miss,
        };
        self.turns += 1;
        log::debug!("{} fires at ({}, {}): {:?}", attacker, row, col, result);

        if is_win(&self.roster.sizes(), def.hits.as_slice()) {
            log::info!("{} wins after {} shots", attacker, self.turns);
            self.status = GameStatus::Won(attacker);
        }
        Ok(result)
    }
}
