use std::path::Path;
extern crate rustsourcebundler;
use rustsourcebundler::Bundler;

// Contest IDE takes one file: inline the library into the bot binary.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut bundler: Bundler =
        Bundler::new(Path::new("src/bin/main.rs"), Path::new("src/bin/merged.rs"));
    bundler.crate_name("chipbot");
    bundler.run();
    Ok(())
}
