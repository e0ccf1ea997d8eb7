use log::debug;

use super::*;

/// Decides one command per controlled chip. Sees only the current turn.
#[derive(Default)]
pub struct Strategy;

impl Strategy {
    pub fn new() -> Self {
        Strategy
    }
}

impl Strategy {
    pub fn play(&mut self, world: &World) -> Vec<Command> {
        debug!(
            "{} own chips, {} droplets, {} opponent chips",
            world.my_chips().count(),
            world.droplets().count(),
            world.opponent_chips().count()
        );

        vec![Command::wait(); world.controlled_chip_count]
    }
}
