use std::io::{self, Cursor, Write};

use chipbot::{run, scenario, ProtocolError, Strategy};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn play(input: &str) -> (Result<usize, ProtocolError>, String) {
    let mut output = Vec::new();
    let result = run(Cursor::new(input), &mut output, &mut Strategy::new());
    (result, String::from_utf8(output).unwrap())
}

fn is_command(line: &str) -> bool {
    if line == "WAIT" {
        return true;
    }
    let parts = line.split(' ').collect::<Vec<_>>();
    parts.len() == 2 && parts.iter().all(|p| p.parse::<f32>().is_ok())
}

#[test]
fn one_turn_three_chips() {
    let (result, output) =
        play("0\n3\n2\n1 0 1.0 100.0 200.0 0.0 0.0\n2 -1 2.0 150.0 250.0 -1.0 0.5\n");
    assert_eq!(result.unwrap(), 1);
    assert_eq!(output, "WAIT\nWAIT\nWAIT\n");
}

#[test]
fn no_entities() {
    let (result, output) = play("4\n2\n0\n");
    assert_eq!(result.unwrap(), 1);
    assert_eq!(output, "WAIT\nWAIT\n");
}

#[test]
fn no_chips_no_output() {
    let (result, output) = play("1\n0\n1\n3 -1 2 10 10 0 0\n");
    assert_eq!(result.unwrap(), 1);
    assert!(output.is_empty());
}

#[test]
fn empty_game_after_player_id() {
    let (result, output) = play("3\n");
    assert_eq!(result.unwrap(), 0);
    assert!(output.is_empty());
}

#[test]
fn out_of_range_player_id_is_accepted() {
    let (result, output) = play("9\n1\n0\n");
    assert_eq!(result.unwrap(), 1);
    assert_eq!(output, "WAIT\n");
}

#[test]
fn truncated_turn_writes_nothing_for_it() {
    let (result, output) = play("0\n1\n0\n2\n1\n7 0 3.5 10.0\n");
    assert!(matches!(result, Err(ProtocolError::Truncated { field: "y" })));
    assert_eq!(output, "WAIT\n");
}

#[test]
fn missing_player_id() {
    let (result, output) = play("");
    assert!(matches!(
        result,
        Err(ProtocolError::Truncated { field: "playerId" })
    ));
    assert!(output.is_empty());
}

#[test]
fn random_games_answer_every_chip() {
    let mut rng = StdRng::seed_from_u64(2024);

    for player_id in 0..5 {
        let worlds = (0..20)
            .map(|_| scenario::random_world(&mut rng, player_id))
            .collect::<Vec<_>>();

        let mut input = scenario::encode_header(player_id);
        for w in &worlds {
            input.push_str(&scenario::encode_turn(w));
        }

        let (result, output) = play(&input);
        assert_eq!(result.unwrap(), worlds.len());

        let lines = output.lines().collect::<Vec<_>>();
        let expected: usize = worlds.iter().map(|w| w.controlled_chip_count).sum();
        assert_eq!(lines.len(), expected);
        assert!(lines.iter().all(|l| is_command(l)));

        // Same input, same output.
        let (_, again) = play(&input);
        assert_eq!(again, output);
    }
}

/// Records how many bytes were written at each flush.
#[derive(Default)]
struct FlushLog {
    written: Vec<u8>,
    flushed_at: Vec<usize>,
}

impl Write for FlushLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushed_at.push(self.written.len());
        Ok(())
    }
}

struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::ErrorKind::BrokenPipe.into())
    }
}

#[test]
fn flushes_after_every_turn() {
    let mut log = FlushLog::default();
    let turns = run(
        Cursor::new("0\n2\n0\n0\n0\n1\n0\n"),
        &mut log,
        &mut Strategy::new(),
    )
    .unwrap();

    assert_eq!(turns, 3);
    // "WAIT\n" is five bytes.
    assert_eq!(log.flushed_at, vec![10, 10, 15]);
}

#[test]
fn write_failure_is_io_error() {
    let result = run(Cursor::new("0\n1\n0\n"), ClosedPipe, &mut Strategy::new());
    assert!(matches!(result, Err(ProtocolError::Io(_))));
}

#[test]
fn invalid_utf8_is_io_error() {
    let input: &[u8] = b"0\n\xff\xfe\n";
    let mut output = Vec::new();
    let result = run(Cursor::new(input), &mut output, &mut Strategy::new());
    assert!(matches!(result, Err(ProtocolError::Io(_))));
    assert!(output.is_empty());
}
