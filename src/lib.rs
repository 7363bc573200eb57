//! # SD - Smart Dashboard
//!
//! A terminal workspace dashboard: a pre-filled login screen leading to a
//! dashboard with summary cards and a filterable, sortable, paginated task
//! table over a fixed in-memory dataset.
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the login screen and dashboard
//! sd
//!
//! # Print the second page of tasks, sorted by priority
//! sd list --sort priority --page 2
//!
//! # Completed tasks as JSON
//! sd list --status completed --json
//!
//! # Counts by status
//! sd stats
//! ```
//!
//! ## Pipeline
//!
//! The table is derived on every render by [`pipeline::derive_view`]:
//! filter by name/status/priority, sort ascending by one field, then slice
//! the requested page. Summary counts ([`pipeline::Metrics`]) always cover
//! the whole dataset.

pub mod cli;
pub mod cmd;
pub mod config;
pub mod db;
pub mod error;
pub mod fields;
pub mod pipeline;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod dashboard;
    pub mod enums;
    pub mod input;
    pub mod login;
    pub mod run;
    pub mod utils;
    pub mod widgets;
}
