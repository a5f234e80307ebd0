use rand::rngs::SmallRng;

use crate::{
    common::{PlayerId, ShotResult},
    config::Rules,
    game::{GameEngine, GameStatus, Side},
    grid::FleetGrid,
    roster::Roster,
};

/// Interface implemented by different player types.
pub trait Player {
    /// Lay out a fleet for `roster` on a `grid_size`×`grid_size` grid.
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        grid_size: usize,
        roster: &Roster,
        rules: &Rules,
    ) -> anyhow::Result<FleetGrid>;

    /// Choose the next cell to fire at, given this player's own side of the
    /// game.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        side: &Side,
        rules: &Rules,
    ) -> anyhow::Result<(usize, usize)>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _coord: (usize, usize), _result: ShotResult) {}

    /// Inform the player of an opponent shot against its fleet.
    fn handle_opponent_shot(&mut self, _coord: (usize, usize), _result: ShotResult) {}
}

fn take_turn(
    engine: &mut GameEngine,
    attacker: PlayerId,
    shooter: &mut dyn Player,
    defender: &mut dyn Player,
    rng: &mut SmallRng,
    rules: &Rules,
) -> anyhow::Result<()> {
    let coord = shooter.select_target(rng, engine.side(attacker), rules)?;
    let result = engine.fire(attacker, coord.0, coord.1)?;
    shooter.handle_shot_result(coord, result);
    defender.handle_opponent_shot(coord, result);
    Ok(())
}

/// Alternate shots between `one` and `two`, player one first, until one of
/// them sinks the other's fleet. Returns the winner.
pub fn play_game(
    engine: &mut GameEngine,
    one: &mut dyn Player,
    two: &mut dyn Player,
    rng: &mut SmallRng,
    rules: &Rules,
) -> anyhow::Result<PlayerId> {
    let mut attacker = PlayerId::One;
    loop {
        if let GameStatus::Won(winner) = engine.status() {
            return Ok(winner);
        }
        match attacker {
            PlayerId::One => take_turn(engine, attacker, one, two, rng, rules)?,
            PlayerId::Two => take_turn(engine, attacker, two, one, rng, rules)?,
        }
        attacker = attacker.opponent();
    }
}
