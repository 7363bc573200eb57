use std::fs::OpenOptions;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cmd::Commands;
use crate::error::AppError;

/// Workspace dashboard in the terminal.
/// Runs the interactive UI when no subcommand is given.
#[derive(Parser)]
#[command(name = "sd", version, about = "Smart Dashboard: workspace task overview")]
pub struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// More log output (repeat for more).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Less log output (repeat for less).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where log lines go.
#[derive(Clone, Copy)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    /// The terminal UI owns the screen and no log file is configured.
    Off,
}

fn level_for(verbose: u8, quiet: u8) -> &'static str {
    if quiet >= 2 {
        "error"
    } else if quiet == 1 {
        "warn"
    } else if verbose >= 3 {
        "trace"
    } else if verbose == 2 {
        "debug"
    } else if verbose == 1 {
        "info"
    } else {
        "warn"
    }
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the flag level.
pub fn init_tracing(verbose: u8, quiet: u8, target: LogTarget<'_>) -> Result<(), AppError> {
    let env_filter = match target {
        LogTarget::Off => EnvFilter::new("off"),
        _ => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level_for(verbose, quiet)))
            .map_err(|e| AppError::Logging(format!("invalid RUST_LOG / log filter: {e}")))?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true);

    let init_result = match target {
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        LogTarget::Stderr | LogTarget::Off => builder
            .with_ansi(std::io::stderr().is_terminal())
            .with_writer(std::io::stderr)
            .try_init(),
    };

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_levels() {
        assert_eq!(level_for(0, 0), "warn");
        assert_eq!(level_for(1, 0), "info");
        assert_eq!(level_for(3, 0), "trace");
        assert_eq!(level_for(3, 2), "error");
    }

    #[test]
    fn bare_invocation_has_no_subcommand() {
        let cli = Cli::try_parse_from(["sd"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["sd", "stats", "-vv", "--config", "sd.toml"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config.as_deref(), Some(Path::new("sd.toml")));
    }
}
