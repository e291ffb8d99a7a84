mod reader;
mod stats;

use anyhow::{Context, Result};
use argh::FromArgs;
use env_logger::Env;
use log::debug;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use stats::Stats;

#[derive(FromArgs, Debug)]
/// Prints mean, median, variance and standard deviation of the numbers in a file
struct Args {
    /// file with one number per line, any further arguments are ignored
    #[argh(positional)]
    files: Vec<PathBuf>,
}

fn report<W: Write>(out: &mut W, stats: &Stats) -> io::Result<()> {
    for (label, value) in stats.rounded().iter() {
        writeln!(out, "{}: {}", label, value)?;
    }
    Ok(())
}

/// Reading failures are printed to `out` and are not an error of the run.
fn run<W: Write>(out: &mut W, path: Option<&Path>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => {
            writeln!(out, "Usage: numstats data.txt")?;
            return Ok(());
        }
    };

    let numbers = match reader::read_numbers(path) {
        Ok(numbers) => numbers,
        Err(e) => {
            writeln!(out, "Error reading file: {}", e)?;
            return Ok(());
        }
    };

    let stats = Stats::compute(&numbers);
    debug!("{:?}", stats);
    report(out, &stats).context("unable to write report")
}

fn main() -> Result<()> {
    env_logger::init_from_env(Env::default().filter_or("LOG_LEVEL", "warn"));
    let args: Args = argh::from_env();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&mut out, args.files.first().map(PathBuf::as_path))?;
    out.flush().context("unable to flush stdout")
}
