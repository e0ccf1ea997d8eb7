use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

use super::error::ProtocolError;
use super::vec2::Vec2;
use super::world::{Entity, World};

/// Reads the judge's frames as a stream of whitespace-separated tokens.
///
/// Line breaks carry no meaning: a record may be split over several lines
/// or several records may share one.
pub struct TurnReader<R> {
    reader: R,
    line: String,
    pending: VecDeque<String>,
}

impl<R: BufRead> TurnReader<R> {
    pub fn new(reader: R) -> Self {
        TurnReader {
            reader,
            line: String::new(),
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<Option<String>, ProtocolError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(self.line.split_ascii_whitespace().map(str::to_owned));
        }
    }

    fn field<T: FromStr>(&mut self, field: &'static str) -> Result<T, ProtocolError> {
        let token = self
            .next_token()?
            .ok_or(ProtocolError::Truncated { field })?;
        token
            .parse()
            .map_err(|_| ProtocolError::Malformed { field, token })
    }

    /// Start-up line. Accepted as is, even outside 0..=4.
    pub fn read_player_id(&mut self) -> Result<i32, ProtocolError> {
        self.field("playerId")
    }

    fn read_entity(&mut self) -> Result<Entity, ProtocolError> {
        let id: i32 = self.field("id")?;
        let owner: i32 = self.field("player")?;
        let radius: f32 = self.field("radius")?;
        let x: f32 = self.field("x")?;
        let y: f32 = self.field("y")?;
        let vx: f32 = self.field("vx")?;
        let vy: f32 = self.field("vy")?;

        Ok(Entity::new(id, owner, radius, Vec2::new(x, y), Vec2::new(vx, vy)))
    }

    /// Reads one turn. `Ok(None)` when the input ends cleanly between turns.
    pub fn next_turn(&mut self, player_id: i32) -> Result<Option<World>, ProtocolError> {
        let controlled_chip_count: usize = match self.next_token()? {
            None => return Ok(None),
            Some(token) => token.parse().map_err(|_| ProtocolError::Malformed {
                field: "playerChipCount",
                token,
            })?,
        };

        let entity_count: usize = self.field("entityCount")?;
        // Count comes from the judge; grow as records actually arrive.
        let mut entities = Vec::new();
        for _ in 0..entity_count {
            entities.push(self.read_entity()?);
        }

        Ok(Some(World {
            player_id,
            controlled_chip_count,
            entities,
        }))
    }

    pub fn turns(&mut self, player_id: i32) -> Turns<'_, R> {
        Turns {
            reader: self,
            player_id,
            done: false,
        }
    }
}

/// Lazy sequence of turns. Ends at end of input or after the first error.
pub struct Turns<'a, R> {
    reader: &'a mut TurnReader<R>,
    player_id: i32,
    done: bool,
}

impl<R: BufRead> Iterator for Turns<'_, R> {
    type Item = Result<World, ProtocolError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let turn = self.reader.next_turn(self.player_id).transpose();
        if !matches!(turn, Some(Ok(_))) {
            self.done = true;
        }
        turn
    }
}
