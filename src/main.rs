mod data;
mod format;
mod prompt;
mod session;
mod stats;

use std::io;
use std::path::Path;

use anyhow::Result;

use format::FormatOptions;

fn main() -> Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    // City CSVs are read from the working directory, as the published
    // datasets ship alongside the tool.
    session::run(&mut input, &mut out, Path::new("."), &FormatOptions::default())
}
