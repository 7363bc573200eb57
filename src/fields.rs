//! Enumerations and field types for dashboard tasks.
//!
//! This module defines the closed sets a task is categorised by (status and
//! priority), the filter selection wrapped around them, and the sort keys the
//! table exposes.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Task completion status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq, Hash)]
pub enum Status {
    #[serde(rename = "Completed")]
    Completed,
    #[serde(rename = "In progress")]
    InProgress,
    #[serde(rename = "Pending")]
    Pending,
}

impl Status {
    /// Every status, in the order the status dropdown lists them.
    pub const ALL: [Status; 3] = [Status::Completed, Status::InProgress, Status::Pending];

    /// Display label, also the value the table shows in its badge.
    pub fn label(self) -> &'static str {
        match self {
            Status::Completed => "Completed",
            Status::InProgress => "In progress",
            Status::Pending => "Pending",
        }
    }

    /// Badge tint for this status.
    pub fn tint(self) -> Tint {
        match self {
            Status::Completed => Tint::Green,
            Status::InProgress => Tint::Yellow,
            Status::Pending => Tint::Red,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Priority classification for task importance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Every priority, in the order the priority dropdown lists them.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Semantic colour category shared by stat cards and status badges.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tint {
    Blue,
    Green,
    Yellow,
    Red,
}

/// Fields that can order the task table.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Name,
    Priority,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Priority => "priority",
        }
    }
}

/// A value a dropdown can cycle through.
pub trait Choice: Copy + PartialEq + 'static {
    const OPTIONS: &'static [Self];

    fn label(self) -> &'static str;
}

impl Choice for Status {
    const OPTIONS: &'static [Self] = &Status::ALL;

    fn label(self) -> &'static str {
        Status::label(self)
    }
}

impl Choice for Priority {
    const OPTIONS: &'static [Self] = &Priority::ALL;

    fn label(self) -> &'static str {
        Priority::label(self)
    }
}

/// Selection made in a filter dropdown: no restriction, or one exact value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldFilter<T> {
    #[default]
    All,
    Only(T),
}

impl<T: Choice> FieldFilter<T> {
    /// True when `value` passes this filter.
    pub fn matches(&self, value: T) -> bool {
        match self {
            FieldFilter::All => true,
            FieldFilter::Only(wanted) => *wanted == value,
        }
    }

    /// The option after this one in dropdown order, wrapping back to `All`.
    pub fn next(self) -> Self {
        match self {
            FieldFilter::All => T::OPTIONS.first().map_or(FieldFilter::All, |v| FieldFilter::Only(*v)),
            FieldFilter::Only(current) => {
                let idx = T::OPTIONS.iter().position(|v| *v == current);
                match idx.and_then(|i| T::OPTIONS.get(i + 1)) {
                    Some(v) => FieldFilter::Only(*v),
                    None => FieldFilter::All,
                }
            }
        }
    }

    /// The option before this one in dropdown order, wrapping to the last value.
    pub fn previous(self) -> Self {
        match self {
            FieldFilter::All => T::OPTIONS.last().map_or(FieldFilter::All, |v| FieldFilter::Only(*v)),
            FieldFilter::Only(current) => match T::OPTIONS.iter().position(|v| *v == current) {
                Some(0) | None => FieldFilter::All,
                Some(i) => FieldFilter::Only(T::OPTIONS[i - 1]),
            },
        }
    }

    /// Dropdown text, using `all_label` for the unrestricted option.
    pub fn label(&self, all_label: &'static str) -> &'static str {
        match self {
            FieldFilter::All => all_label,
            FieldFilter::Only(v) => v.label(),
        }
    }
}

impl<T> From<Option<T>> for FieldFilter<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => FieldFilter::Only(v),
            None => FieldFilter::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_filter_cycles_in_dropdown_order() {
        let mut f = FieldFilter::<Status>::All;
        let mut seen = Vec::new();
        for _ in 0..4 {
            f = f.next();
            seen.push(f);
        }
        assert_eq!(
            seen,
            vec![
                FieldFilter::Only(Status::Completed),
                FieldFilter::Only(Status::InProgress),
                FieldFilter::Only(Status::Pending),
                FieldFilter::All,
            ]
        );
    }

    #[test]
    fn previous_undoes_next() {
        for start in [
            FieldFilter::All,
            FieldFilter::Only(Priority::High),
            FieldFilter::Only(Priority::Medium),
            FieldFilter::Only(Priority::Low),
        ] {
            assert_eq!(start.next().previous(), start);
        }
    }

    #[test]
    fn all_matches_everything() {
        let f = FieldFilter::<Priority>::All;
        assert!(Priority::ALL.iter().all(|p| f.matches(*p)));
        assert!(!FieldFilter::Only(Priority::Low).matches(Priority::High));
    }

    #[test]
    fn labels_match_dropdown_text() {
        assert_eq!(FieldFilter::<Status>::All.label("All statuses"), "All statuses");
        assert_eq!(FieldFilter::Only(Status::InProgress).label("All statuses"), "In progress");
    }

    #[test]
    fn status_tints() {
        assert_eq!(Status::Completed.tint(), Tint::Green);
        assert_eq!(Status::InProgress.tint(), Tint::Yellow);
        assert_eq!(Status::Pending.tint(), Tint::Red);
    }

    #[test]
    fn status_serialises_as_label() {
        let json = serde_json::to_string(&Status::InProgress).unwrap();
        assert_eq!(json, "\"In progress\"");
    }
}
