use std::io;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use train_finder::cli;
use train_finder::query::{FinderConfig, TripFinder};

fn main() -> ExitCode {
    // Logs go to stderr so stdout only carries prompts and results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let finder = TripFinder::from_config(FinderConfig::default());

    let stdin = io::stdin();
    let stdout = io::stdout();
    match cli::run(&mut stdin.lock(), &mut stdout.lock(), &finder) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Terminal I/O failed: {e}");
            ExitCode::FAILURE
        }
    }
}
