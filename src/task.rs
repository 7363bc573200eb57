//! Task data structure.
//!
//! A `Task` is a single row of the dashboard table. Tasks are created once
//! from the built-in dataset and never mutated afterwards.

use serde::Serialize;

use crate::fields::{Priority, Status};

/// A unit of work shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: u64,
    pub name: String,
    pub status: Status,
    pub priority: Priority,
}

impl Task {
    pub fn new(id: u64, name: &str, status: Status, priority: Priority) -> Self {
        Task {
            id,
            name: name.to_string(),
            status,
            priority,
        }
    }
}
