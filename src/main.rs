use clap::Parser;
use tracing::debug;

use smart_dashboard::cli::{init_tracing, Cli, LogTarget};
use smart_dashboard::cmd::*;
use smart_dashboard::config::Config;
use smart_dashboard::db::Database;
use smart_dashboard::error::AppError;

fn run(cli: Cli) -> Result<(), AppError> {
    let config = Config::load(cli.config.as_deref())?;
    let command = cli.command.unwrap_or(Commands::Ui);

    let target = match (&command, config.log_file.as_deref()) {
        (Commands::Ui, Some(path)) => LogTarget::File(path),
        (Commands::Ui, None) => LogTarget::Off,
        _ => LogTarget::Stderr,
    };
    init_tracing(cli.verbose, cli.quiet, target)?;
    debug!(?config, "configuration loaded");

    let db = Database::sample();

    match command {
        Commands::Ui => cmd_ui(config),
        Commands::List {
            search,
            status,
            priority,
            sort,
            page,
            json,
        } => cmd_list(&db, &config, search, status, priority, sort, page, json),
        Commands::Stats { json } => cmd_stats(&db, json),
        Commands::Completions { shell } => {
            cmd_completions(shell);
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
