use std::io::{BufRead, Write};

use log::{debug, info, warn};

use super::*;

/// Plays until the judge closes the input. Returns the number of turns played.
///
/// Each turn writes exactly `controlled_chip_count` lines and flushes, since
/// the judge blocks on them before sending the next frame.
pub fn run<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    strategy: &mut Strategy,
) -> Result<usize, ProtocolError> {
    let mut reader = TurnReader::new(input);
    let player_id = reader.read_player_id()?;
    info!("playing as player {player_id}");

    let mut turns = 0;
    for world in reader.turns(player_id) {
        let world = world?;
        debug!("turn {}: {} entities", turns + 1, world.entities.len());
        let commands = fit_to_chips(strategy.play(&world), world.controlled_chip_count);

        for command in &commands {
            writeln!(output, "{command}")?;
        }
        output.flush()?;
        turns += 1;
    }

    info!("input closed after {turns} turns");
    Ok(turns)
}

fn fit_to_chips(mut commands: Vec<Command>, chips: usize) -> Vec<Command> {
    if commands.len() != chips {
        warn!(
            "strategy gave {} commands for {} chips, adjusting with WAIT",
            commands.len(),
            chips
        );
        commands.resize(chips, Command::wait());
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_and_truncates() {
        let propel = Command::from(Action::Propel {
            target: Vec2::new(1., 2.),
        });

        let padded = fit_to_chips(vec![propel.clone()], 3);
        assert_eq!(padded, vec![propel.clone(), Command::wait(), Command::wait()]);

        let cut = fit_to_chips(vec![propel.clone(); 4], 2);
        assert_eq!(cut, vec![propel; 2]);
    }
}
