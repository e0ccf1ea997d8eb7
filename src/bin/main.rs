extern crate chipbot;

use std::io;

use anyhow::Context;
use chipbot::{bot, strategy::Strategy};
use log::error;

fn main() {
    // stdout belongs to the judge; logs go to stderr.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = play() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn play() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut strategy = Strategy::new();

    bot::run(stdin.lock(), stdout.lock(), &mut strategy).context("Bot stopped")?;
    Ok(())
}
