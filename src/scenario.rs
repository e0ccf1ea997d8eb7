//! Random tables and the judge's side of the wire, for local runs and tests.

use std::fmt::Write;

use rand::Rng;

use super::vec2::Vec2;
use super::world::{Entity, World, NEUTRAL_OWNER, TABLE_HEIGHT, TABLE_WIDTH};

const MAX_PLAYERS: i32 = 5;
const MAX_CHIPS_PER_PLAYER: usize = 5;
const MAX_DROPLETS: usize = 30;

fn random_entity<R: Rng + ?Sized>(rng: &mut R, id: i32, owner: i32, radius: f32) -> Entity {
    // Keep the whole disc on the table.
    let pos = Vec2::new(
        rng.gen_range(radius..=TABLE_WIDTH - radius),
        rng.gen_range(radius..=TABLE_HEIGHT - radius),
    );
    let speed = Vec2::new(rng.gen_range(-5. ..=5.), rng.gen_range(-5. ..=5.));

    Entity::new(id, owner, radius, pos, speed)
}

pub fn random_world<R: Rng + ?Sized>(rng: &mut R, player_id: i32) -> World {
    let players = rng
        .gen_range(2..=MAX_PLAYERS)
        .max(player_id.min(MAX_PLAYERS - 1) + 1);
    let mut entities = Vec::new();

    for owner in 0..players {
        for _ in 0..rng.gen_range(1..=MAX_CHIPS_PER_PLAYER) {
            let radius = rng.gen_range(8. ..=30.);
            let id = entities.len() as i32;
            entities.push(random_entity(rng, id, owner, radius));
        }
    }

    for _ in 0..rng.gen_range(0..=MAX_DROPLETS) {
        let radius = rng.gen_range(1. ..=6.);
        let id = entities.len() as i32;
        entities.push(random_entity(rng, id, NEUTRAL_OWNER, radius));
    }

    let mut world = World {
        player_id,
        controlled_chip_count: 0,
        entities,
    };
    world.controlled_chip_count = world.my_chips().count();
    world
}

pub fn encode_header(player_id: i32) -> String {
    format!("{player_id}\n")
}

/// One frame exactly as the judge sends it.
pub fn encode_turn(world: &World) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", world.controlled_chip_count);
    let _ = writeln!(out, "{}", world.entities.len());
    for e in &world.entities {
        let _ = writeln!(
            out,
            "{} {} {} {} {} {} {}",
            e.id, e.owner, e.radius, e.pos.x, e.pos.y, e.speed.x, e.speed.y
        );
    }
    out
}
