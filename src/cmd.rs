//! Command implementations for the CLI interface.
//!
//! `ui` runs the interactive screens. `list` and `stats` run the same
//! derivation pipeline headlessly and print the result as text or JSON.

use std::io;

use clap::{CommandFactory, Subcommand};
use clap_complete::{generate, Shell};
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::Cli;
use crate::config::Config;
use crate::db::{print_table, Database};
use crate::error::AppError;
use crate::fields::{FieldFilter, Priority, SortKey, Status};
use crate::pipeline::{derive_view, DashboardView, Metrics, ViewState};
use crate::tui::run::run_tui;

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive login screen and dashboard (default).
    Ui,

    /// Print one page of the task table.
    List {
        /// Case-insensitive substring of the task name.
        #[arg(long, default_value = "")]
        search: String,
        /// Only tasks with this status.
        #[arg(long, value_enum)]
        status: Option<Status>,
        /// Only tasks with this priority.
        #[arg(long, value_enum)]
        priority: Option<Priority>,
        /// Sort field (defaults to the configured sort).
        #[arg(long, value_enum)]
        sort: Option<SortKey>,
        /// 1-based page number.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
        page: u64,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Print whole-dataset counts by status.
    Stats {
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Launch the terminal user interface.
pub fn cmd_ui(config: Config) -> Result<(), AppError> {
    info!(page_size = config.page_size, "starting terminal UI");
    run_tui(config)?;
    Ok(())
}

/// JSON shape of `list --json`.
#[derive(Serialize)]
struct ListOutput<'a> {
    #[serde(flatten)]
    view: DashboardView<'a>,
    page_size: usize,
}

/// Build the view state a `list` invocation describes.
pub fn list_state(
    search: String,
    status: Option<Status>,
    priority: Option<Priority>,
    sort: SortKey,
    page: usize,
) -> ViewState {
    let state = ViewState::default()
        .with_search(search)
        .with_status(FieldFilter::from(status))
        .with_priority(FieldFilter::from(priority))
        .with_sort(sort);
    ViewState { page, ..state }
}

/// Print one page of the filtered, sorted task list.
#[allow(clippy::too_many_arguments)]
pub fn cmd_list(
    db: &Database,
    config: &Config,
    search: String,
    status: Option<Status>,
    priority: Option<Priority>,
    sort: Option<SortKey>,
    page: u64,
    json: bool,
) -> Result<(), AppError> {
    let page = usize::try_from(page).unwrap_or(usize::MAX);
    let state = list_state(search, status, priority, sort.unwrap_or(config.default_sort), page);
    debug!(?state, "list");
    let view = derive_view(db.tasks(), &state, config.page_size);

    if json {
        let out = ListOutput {
            view,
            page_size: config.page_size,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print_table(&view.rows);
    if view.has_pagination() {
        println!();
        println!(
            "Page {} of {} ({} matching)",
            view.page, view.total_pages, view.matched
        );
    }
    Ok(())
}

/// Print task counts by status over the whole dataset.
pub fn cmd_stats(db: &Database, json: bool) -> Result<(), AppError> {
    let metrics = Metrics::compute(db.tasks());
    if json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
        return Ok(());
    }
    for card in metrics.cards() {
        println!("{:<12} {}", card.title, card.value);
    }
    Ok(())
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_state_keeps_requested_page() {
        let state = list_state("ui".to_string(), None, Some(Priority::High), SortKey::Priority, 2);
        assert_eq!(state.page, 2);
        assert_eq!(state.search, "ui");
        assert_eq!(state.status, FieldFilter::All);
        assert_eq!(state.priority, FieldFilter::Only(Priority::High));
        assert_eq!(state.sort_by, SortKey::Priority);
    }

    #[test]
    fn list_json_shape() {
        let db = Database::sample();
        let state = list_state(String::new(), None, None, SortKey::Name, 2);
        let out = ListOutput {
            view: derive_view(db.tasks(), &state, 3),
            page_size: 3,
        };
        let value = serde_json::to_value(&out).unwrap();
        assert_eq!(value["total_pages"], 2);
        assert_eq!(value["matched"], 4);
        assert_eq!(value["rows"][0]["name"], "UI Design");
        assert_eq!(value["rows"][0]["status"], "Completed");
    }
}
