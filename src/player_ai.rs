use rand::rngs::SmallRng;

use crate::{
    ai,
    config::Rules,
    game::Side,
    grid::FleetGrid,
    player::Player,
    roster::Roster,
};

/// Computer player: random fleet placement and uniformly random targeting.
#[derive(Debug, Default)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        grid_size: usize,
        roster: &Roster,
        rules: &Rules,
    ) -> anyhow::Result<FleetGrid> {
        Ok(ai::generate_fleet_grid(rng, grid_size, roster, rules)?)
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        side: &Side,
        rules: &Rules,
    ) -> anyhow::Result<(usize, usize)> {
        Ok(ai::make_computer_move(rng, &side.target, rules)?)
    }
}
