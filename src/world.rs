use super::vec2::Vec2;

pub const TABLE_WIDTH: f32 = 799.;
pub const TABLE_HEIGHT: f32 = 514.;

/// Owner value of neutral oil droplets.
pub const NEUTRAL_OWNER: i32 = -1;

/// A chip or droplet as reported for the current turn.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: i32,
    pub owner: i32,
    pub radius: f32,
    pub pos: Vec2,
    pub speed: Vec2,
}

impl Entity {
    pub fn new(id: i32, owner: i32, radius: f32, pos: Vec2, speed: Vec2) -> Self {
        Entity {
            id,
            owner,
            radius,
            pos,
            speed,
        }
    }

    pub fn is_droplet(&self) -> bool {
        self.owner == NEUTRAL_OWNER
    }
}

/// Snapshot of one turn. Rebuilt from scratch every turn.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct World {
    pub player_id: i32,
    pub controlled_chip_count: usize,
    /// In the order the judge sent them.
    pub entities: Vec<Entity>,
}

impl World {
    pub fn my_chips(&self) -> impl Iterator<Item = &Entity> {
        let me = self.player_id;
        self.entities
            .iter()
            .filter(move |e| !e.is_droplet() && e.owner == me)
    }

    pub fn droplets(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.is_droplet())
    }

    pub fn opponent_chips(&self) -> impl Iterator<Item = &Entity> {
        let me = self.player_id;
        self.entities
            .iter()
            .filter(move |e| !e.is_droplet() && e.owner != me)
    }

    /// Nearest point on the table.
    pub fn clamp_to_table(pos: Vec2) -> Vec2 {
        pos.clamp(Vec2::ZERO, Vec2::new(TABLE_WIDTH, TABLE_HEIGHT))
    }

    pub fn in_bounds(pos: Vec2) -> bool {
        (0. ..=TABLE_WIDTH).contains(&pos.x) && (0. ..=TABLE_HEIGHT).contains(&pos.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> World {
        World {
            player_id: 1,
            controlled_chip_count: 2,
            entities: vec![
                Entity::new(0, 1, 10., Vec2::new(10., 10.), Vec2::ZERO),
                Entity::new(1, 0, 12., Vec2::new(50., 50.), Vec2::new(1., 0.)),
                Entity::new(2, -1, 3., Vec2::new(90., 20.), Vec2::ZERO),
                Entity::new(3, 1, 8., Vec2::new(300., 400.), Vec2::ZERO),
                Entity::new(4, 2, 15., Vec2::new(700., 500.), Vec2::ZERO),
            ],
        }
    }

    #[test]
    fn splits_entities_by_owner() {
        let w = world();
        let mine = w.my_chips().map(|e| e.id).collect::<Vec<_>>();
        let droplets = w.droplets().map(|e| e.id).collect::<Vec<_>>();
        let opponents = w.opponent_chips().map(|e| e.id).collect::<Vec<_>>();
        assert_eq!(mine, vec![0, 3]);
        assert_eq!(droplets, vec![2]);
        assert_eq!(opponents, vec![1, 4]);
    }

    #[test]
    fn neutral_player_id_owns_no_droplets() {
        let w = World {
            player_id: NEUTRAL_OWNER,
            ..world()
        };
        assert_eq!(w.my_chips().count(), 0);
        assert_eq!(w.opponent_chips().count(), 4);
    }

    #[test]
    fn table_bounds() {
        assert!(World::in_bounds(Vec2::new(0., 0.)));
        assert!(World::in_bounds(Vec2::new(TABLE_WIDTH, TABLE_HEIGHT)));
        assert!(!World::in_bounds(Vec2::new(800., 10.)));
        assert!(!World::in_bounds(Vec2::new(10., -0.1)));
        assert_eq!(
            World::clamp_to_table(Vec2::new(1000., -3.)),
            Vec2::new(TABLE_WIDTH, 0.)
        );
    }
}
