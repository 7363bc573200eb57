//! The in-memory task store and plain-text table printing.
//!
//! The store is seeded from a fixed dataset when it is created and exposes
//! read-only access for the rest of the process lifetime.

use crate::fields::{Priority, Status};
use crate::task::Task;

/// Read-only collection of tasks.
#[derive(Debug, Clone)]
pub struct Database {
    tasks: Vec<Task>,
}

impl Database {
    /// The built-in workspace dataset.
    pub fn sample() -> Self {
        Database {
            tasks: vec![
                Task::new(1, "UI Design", Status::Completed, Priority::High),
                Task::new(2, "Dashboard Development", Status::InProgress, Priority::Medium),
                Task::new(3, "Bug Fixing", Status::Pending, Priority::Low),
                Task::new(4, "Responsive Design", Status::Completed, Priority::Medium),
            ],
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Get a task by ID.
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Print tasks as a fixed-width text table.
pub fn print_table(tasks: &[&Task]) {
    println!("{:<4} {:<28} {:<12} {}", "ID", "Task name", "Status", "Priority");
    if tasks.is_empty() {
        println!("No tasks match your criteria");
        return;
    }
    for t in tasks {
        println!(
            "{:<4} {:<28} {:<12} {}",
            t.id,
            truncate(&t.name, 28),
            t.status.label(),
            t.priority.label()
        );
    }
}

/// Truncate a string to a maximum width, adding ellipsis if needed.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out = String::new();
        for (i, ch) in s.chars().enumerate() {
            if i + 1 >= width {
                out.push('…');
                break;
            }
            out.push(ch);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_four_unique_tasks() {
        let db = Database::sample();
        assert_eq!(db.len(), 4);
        assert!(!db.is_empty());
        assert_eq!(db.get(3).map(|t| t.name.as_str()), Some("Bug Fixing"));
        assert!(db.get(5).is_none());
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate("Dashboard Development", 10), "Dashboard…");
        assert_eq!(truncate("UI Design", 10), "UI Design");
    }
}
