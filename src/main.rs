use std::fs::OpenOptions;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use simplelog::{ConfigBuilder, WriteLogger};
use voltage::core::config::{self, CliOverrides};
use voltage::tui;

#[derive(Parser)]
#[command(name = "voltage", about = "Greets you with a random proverb in your language")]
struct Args {
    /// Rc file location (default: ~/config/.voltagerc)
    #[arg(long)]
    rc_file: Option<PathBuf>,

    /// Where the default rc file is downloaded from when none exists
    #[arg(long)]
    default_url: Option<String>,

    /// Diagnostic log, appended to on every run
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Seconds the error screen stays up before exiting
    #[arg(long)]
    error_delay: Option<u64>,

    /// Log debug detail
    #[arg(short, long)]
    verbose: bool,
}

impl From<Args> for CliOverrides {
    fn from(args: Args) -> Self {
        Self {
            rc_file: args.rc_file,
            default_url: args.default_url,
            log_file: args.log_file,
            error_delay_secs: args.error_delay,
            verbose: args.verbose,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = CliOverrides::from(Args::parse());
    dotenvy::dotenv().ok();
    let settings = config::resolve(&cli, |key| std::env::var(key).ok());

    // Append-only file logger; no terminal output while the TUI is up
    let log_file = match OpenOptions::new()
        .create(true)
        .append(true)
        .open(&settings.log_file)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!(
                "error opening log file {}: {e}",
                settings.log_file.display()
            );
            return ExitCode::from(1);
        }
    };
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let _ = WriteLogger::init(settings.log_level, log_config, log_file);

    info!("Voltage starting up with settings: {:?}", settings);

    match tui::run(settings) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            error!("Terminal error: {e}");
            eprintln!("error occurred: {e}");
            ExitCode::from(1)
        }
    }
}
