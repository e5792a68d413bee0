//! Renumber `assets/data/School.csv` into `assets/data/School_fixed.csv`.
//!
//! Takes no arguments. The summary goes to stdout; log lines and errors
//! go to stderr.

use school_renumber::{Config, run};
use std::io::{self, Write};
use std::process;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::new("info"))
        .with_writer(io::stderr)
        .init();

    let config = Config::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run(&config, &mut out) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
    if let Err(e) = out.flush() {
        eprintln!("Error writing summary: {e}");
        process::exit(1);
    }
}
