#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};

use anyhow::bail;
use rand::rngs::SmallRng;

use crate::{
    ai,
    common::{GridError, ShotResult},
    config::Rules,
    game::Side,
    grid::{make_empty_grid, FleetGrid, TargetCell},
    player::Player,
    roster::Roster,
    ship::Orientation,
    ui::{column_label, print_grid, print_player_view},
};

/// Human player reading placements and targets from `input`, one per line.
pub struct CliPlayer<I> {
    input: I,
}

impl CliPlayer<io::StdinLock<'static>> {
    /// Player reading from standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<I: BufRead> CliPlayer<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }

    fn prompt(&mut self, text: &str) -> anyhow::Result<String> {
        std::print!("{}", text);
        io::stdout().flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed");
        }
        Ok(line.trim().to_string())
    }
}

/// Format a cell as `A1`-style text.
pub fn coord_to_string(row: usize, col: usize) -> String {
    std::format!("{}{}", column_label(col), row + 1)
}

/// Parse `A1`-style text into (row, col) within a `grid_size` grid.
pub fn parse_coord(input: &str, grid_size: usize) -> Option<(usize, usize)> {
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 || row > grid_size || col >= grid_size {
        return None;
    }
    Some((row - 1, col))
}

/// Parse `A1 H` / `A1 V`. Orientation defaults to horizontal when omitted.
fn parse_placement(input: &str, grid_size: usize) -> Option<(usize, usize, Orientation)> {
    let mut parts = input.split_whitespace();
    let (row, col) = parse_coord(parts.next()?, grid_size)?;
    let orientation = match parts.next().map(|p| p.to_ascii_uppercase()) {
        None => Orientation::Horizontal,
        Some(p) if p == "H" => Orientation::Horizontal,
        Some(p) if p == "V" => Orientation::Vertical,
        Some(_) => return None,
    };
    Some((row, col, orientation))
}

impl<I: BufRead> Player for CliPlayer<I> {
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        grid_size: usize,
        roster: &Roster,
        rules: &Rules,
    ) -> anyhow::Result<FleetGrid> {
        let mut grid = make_empty_grid(grid_size, rules)?;
        std::println!("Place your ships (e.g. A5 H). Press enter for random placement.");
        for &spec in roster.ships() {
            loop {
                print_grid(&grid);
                let line = self.prompt(&std::format!("Place ship '{}' (size {}): ", spec.id, spec.size))?;
                if line.is_empty() {
                    let placed = (0..rules.max_placement_attempts)
                        .any(|_| ai::randomly_place_ship(rng, &mut grid, spec));
                    if !placed {
                        return Err(GridError::UnplaceableFleet {
                            ship: spec.id.intact(),
                            attempts: rules.max_placement_attempts,
                        }
                        .into());
                    }
                    break;
                }
                let Some((row, col, orientation)) = parse_placement(&line, grid_size) else {
                    std::println!("Invalid input");
                    continue;
                };
                let (end_row, end_col) = orientation.step(row, col, spec.size - 1);
                match ai::is_occupied(row, col, end_row, end_col, &grid) {
                    Ok(false) => {
                        ai::place_ship(row, col, end_row, end_col, &mut grid, spec.id)?;
                        break;
                    }
                    Ok(true) => std::println!("Error: overlaps another ship"),
                    Err(e) => std::println!("Error: {}", e),
                }
            }
        }
        Ok(grid)
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        side: &Side,
        rules: &Rules,
    ) -> anyhow::Result<(usize, usize)> {
        print_player_view(side);
        let size = side.target.size();
        let (sr, sc) = ai::make_computer_move(rng, &side.target, rules)?;
        loop {
            let line = self.prompt(&std::format!("Enter target [{}]: ", coord_to_string(sr, sc)))?;
            if line.is_empty() {
                return Ok((sr, sc));
            }
            match parse_coord(&line, size) {
                Some((r, c)) => {
                    if side.target.get(r, c)? == TargetCell::Unknown {
                        return Ok((r, c));
                    }
                    std::println!("Already fired at {}", line);
                }
                None => std::println!("Invalid coordinate"),
            }
        }
    }

    fn handle_shot_result(&mut self, coord: (usize, usize), result: ShotResult) {
        std::println!("{}: {}", coord_to_string(coord.0, coord.1), result);
    }

    fn handle_opponent_shot(&mut self, coord: (usize, usize), result: ShotResult) {
        std::println!("Opponent fires at {}: {}", coord_to_string(coord.0, coord.1), result);
    }
}
