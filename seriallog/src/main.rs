use std::path::PathBuf;

use clap::Parser;
use seriallog::{
    SerializedLogger, Severity,
    demo::{self, DEFAULT_LOG_FILE, DemoConfig},
};

/// Logs a sequential run, then five workers concurrently, through one shared logger.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Log file, appended to if it exists.
    #[arg(default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    let logger = SerializedLogger::new(&cli.log_file, Severity::Debug);
    demo::run(
        &logger,
        &cli.log_file.display().to_string(),
        &DemoConfig::default(),
    );
}
