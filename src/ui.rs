#![cfg(feature = "std")]

use crate::{
    config::Alphabet,
    game::Side,
    grid::{Grid, GridCell},
};

/// Column label for `col`: `A`, `B`, ...
pub fn column_label(col: usize) -> char {
    (b'A' + col as u8) as char
}

/// Print `grid` with column letters across the top and row numbers down the
/// side.
pub fn print_grid<C: GridCell>(grid: &Grid<C>) {
    std::print!("   ");
    for c in 0..grid.size() {
        std::print!(" {}", column_label(c));
    }
    std::println!();
    for (r, row) in grid.rows().enumerate() {
        std::print!("{:2} ", r + 1);
        for cell in row {
            std::print!(" {}", cell.to_char(&Alphabet::STANDARD));
        }
        std::println!();
    }
}

/// Display the target grid (top) and the player's own fleet (bottom).
pub fn print_player_view(side: &Side) {
    std::println!("Opponent board:");
    print_grid(&side.target);
    std::println!("\nYour board:");
    print_grid(&side.fleet);
}
