//! Commonly used types and utilities for ease of import.

pub use crate::{
    generate_fleet_grid, is_win, make_computer_move, play_game, update_fleet_grid, update_target_grid,
    validate_fleet_grid, AiPlayer, Cell, FleetGrid, GameEngine, GameStatus, GridError, Player,
    PlayerId, Roster, Rules, ShipId, ShotResult, TargetCell, TargetGrid,
};

#[cfg(feature = "std")]
pub use crate::{read_ship_data, ui::print_player_view, CliPlayer};
