extern crate chipbot;

use std::io::Cursor;
use std::path::PathBuf;

use anyhow::Context;
use chipbot::{
    scenario, Action, Command, Entity, Strategy, TurnReader, Vec2, World, TABLE_HEIGHT,
    TABLE_WIDTH,
};
use clap::Parser;

use flo_canvas::*;
use flo_draw::*;

use futures::executor;
use futures::prelude::*;

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Desktop view of Poker Chip Race tables.
#[derive(Parser, Debug)]
struct Args {
    /// Recorded judge input to step through. Random tables when omitted.
    #[arg(long)]
    replay: Option<PathBuf>,

    /// Player id used for random tables.
    #[arg(long, default_value_t = 0)]
    player: i32,
}

enum Source {
    Replay { frames: Vec<World>, current: usize },
    Random { rng: StdRng, player_id: i32, world: World },
}

impl Source {
    fn load(args: &Args) -> anyhow::Result<Self> {
        let Some(path) = &args.replay else {
            let mut rng = StdRng::from_entropy();
            let world = scenario::random_world(&mut rng, args.player);
            return Ok(Source::Random {
                rng,
                player_id: args.player,
                world,
            });
        };

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut reader = TurnReader::new(Cursor::new(text));
        let player_id = reader.read_player_id()?;

        let mut frames = Vec::new();
        for turn in reader.turns(player_id) {
            match turn {
                Ok(world) => frames.push(world),
                Err(e) => {
                    warn!("replay cut short after {} turns: {e}", frames.len());
                    break;
                }
            }
        }
        anyhow::ensure!(!frames.is_empty(), "{} holds no turns", path.display());
        info!("loaded {} turns for player {player_id}", frames.len());

        Ok(Source::Replay { frames, current: 0 })
    }

    fn world(&self) -> &World {
        match self {
            Source::Replay { frames, current } => &frames[*current],
            Source::Random { world, .. } => world,
        }
    }

    fn advance(&mut self) {
        match self {
            Source::Replay { frames, current } => *current = (*current + 1) % frames.len(),
            Source::Random {
                rng,
                player_id,
                world,
            } => *world = scenario::random_world(rng, *player_id),
        }
    }
}

fn to_canvas(pos: Vec2) -> (f32, f32) {
    (pos.x, TABLE_HEIGHT - pos.y)
}

fn draw_table(gc: &mut CanvasGraphicsContext) {
    gc.new_path();
    gc.rect(0., 0., TABLE_WIDTH, TABLE_HEIGHT);
    gc.fill_color(Color::Rgba(0.1, 0.4, 0.2, 1.0));
    gc.fill();
    gc.line_width(2.0);
    gc.stroke_color(Color::Rgba(0.0, 0.0, 0.0, 1.0));
    gc.stroke();
}

fn entity_color(world: &World, e: &Entity) -> Color {
    if e.is_droplet() {
        Color::Rgba(0.8, 0.8, 0.8, 1.)
    } else if e.owner == world.player_id {
        Color::Rgba(0.2, 0.4, 1., 1.)
    } else {
        Color::Rgba(1., 0.2, 0.2, 1.)
    }
}

fn draw_entities(gc: &mut CanvasGraphicsContext, world: &World) {
    for e in &world.entities {
        let (x, y) = to_canvas(e.pos);
        gc.new_path();
        gc.circle(x, y, e.radius);
        gc.fill_color(entity_color(world, e));
        gc.fill();
        gc.line_width(1.0);
        gc.stroke_color(Color::Rgba(0.0, 0.0, 0.0, 1.0));
        gc.stroke();
    }
}

// Velocity is per turn; stretch it so slow entities still show a tail.
const SPEED_SCALE: f32 = 10.;

fn draw_speeds(gc: &mut CanvasGraphicsContext, world: &World) {
    for e in world.entities.iter().filter(|e| e.speed.len() > 0.) {
        let (x1, y1) = to_canvas(e.pos);
        let (x2, y2) = to_canvas(e.pos + e.speed * SPEED_SCALE);
        gc.new_path();
        gc.move_to(x1, y1);
        gc.line_to(x2, y2);
        gc.line_width(1.0);
        gc.stroke_color(Color::Rgba(1.0, 1.0, 0.0, 0.8));
        gc.stroke();
    }
}

fn draw_commands(gc: &mut CanvasGraphicsContext, world: &World, commands: &[Command]) {
    for (chip, command) in world.my_chips().zip(commands) {
        let (x, y) = to_canvas(chip.pos);
        gc.new_path();
        match command.action {
            Action::Wait => gc.circle(x, y, chip.radius + 4.),
            Action::Propel { target } => {
                let (tx, ty) = to_canvas(World::clamp_to_table(target));
                gc.move_to(x, y);
                gc.line_to(tx, ty);
            }
        }
        gc.line_width(1.0);
        gc.stroke_color(Color::Rgba(1.0, 1.0, 1.0, 0.7));
        gc.stroke();
    }
}

struct App {
    source: Source,
    strategy: Strategy,
    canvas: Canvas,

    show_speeds: bool,
    show_commands: bool,
}

impl App {
    fn new(canvas: Canvas, source: Source) -> Self {
        App {
            source,
            strategy: Strategy::new(),
            canvas,
            show_speeds: false,
            show_commands: false,
        }
    }

    fn redraw(&mut self) {
        let world = self.source.world();
        let commands = self.strategy.play(world);

        let show_speeds = self.show_speeds;
        let show_commands = self.show_commands;

        self.canvas.draw(|gc| {
            gc.clear_all_layers();
            gc.canvas_height(TABLE_HEIGHT + 40.);
            gc.center_region(-20., -20., TABLE_WIDTH + 20., TABLE_HEIGHT + 20.);

            draw_table(gc);
            draw_entities(gc, world);

            if show_speeds {
                draw_speeds(gc, world);
            }

            if show_commands {
                draw_commands(gc, world, &commands);
            }
        });
    }

    fn next_frame(&mut self) {
        self.source.advance();
        self.redraw();
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let source = Source::load(&args)?;

    with_2d_graphics(move || {
        executor::block_on(async move {
            let (canvas, mut events) = create_canvas_window_with_events("Poker Chip Race");

            let mut app = App::new(canvas, source);

            app.redraw();

            while let Some(event) = events.next().await {
                match event {
                    DrawEvent::KeyDown(_, Some(Key::KeySpace)) => {
                        app.next_frame();
                    }
                    DrawEvent::KeyDown(_, Some(Key::KeyEscape)) => {
                        std::process::exit(0);
                    }
                    DrawEvent::KeyDown(_, Some(Key::Key1)) => {
                        app.show_speeds = !app.show_speeds;
                        app.redraw();
                    }
                    DrawEvent::KeyDown(_, Some(Key::Key2)) => {
                        app.show_commands = !app.show_commands;
                        app.redraw();
                    }
                    _ => {}
                }
            }
        });
    });

    Ok(())
}
