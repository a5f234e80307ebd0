#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod ai;
mod common;
mod config;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
mod roster;
mod ship;
#[cfg(feature = "std")]
pub mod ui;
pub mod validate;

pub use ai::{generate_fleet_grid, make_computer_move};
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with, level_from_env, LOG_ENV};
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use roster::*;
pub use ship::*;
pub use validate::*;
