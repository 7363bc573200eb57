//! The dashboard derivation pipeline: filter → sort → paginate.
//!
//! Every function here is pure. The dashboard keeps a [`ViewState`] record,
//! replaces it on each input event and re-derives the visible rows from the
//! full task list on every render.

use std::cmp::Ordering;

use feruca::{Collator, Locale, Tailoring};
use serde::Serialize;
use tracing::trace;

use crate::fields::{FieldFilter, Priority, SortKey, Status, Tint};
use crate::task::Task;

/// Rows per page when the configuration does not override it.
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Search, filter, sort and page selection of the dashboard table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub search: String,
    pub status: FieldFilter<Status>,
    pub priority: FieldFilter<Priority>,
    pub sort_by: SortKey,
    /// 1-based.
    pub page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            search: String::new(),
            status: FieldFilter::All,
            priority: FieldFilter::All,
            sort_by: SortKey::Name,
            page: 1,
        }
    }
}

impl ViewState {
    /// Replace the search text. Returns to the first page.
    pub fn with_search(self, search: impl Into<String>) -> Self {
        ViewState {
            search: search.into(),
            page: 1,
            ..self
        }
    }

    /// Replace the status filter. Returns to the first page.
    pub fn with_status(self, status: FieldFilter<Status>) -> Self {
        ViewState {
            status,
            page: 1,
            ..self
        }
    }

    /// Replace the priority filter. Returns to the first page.
    pub fn with_priority(self, priority: FieldFilter<Priority>) -> Self {
        ViewState {
            priority,
            page: 1,
            ..self
        }
    }

    /// Change the sort key. The current page is kept.
    pub fn with_sort(self, sort_by: SortKey) -> Self {
        ViewState { sort_by, ..self }
    }

    /// Step back one page, never below the first.
    pub fn previous_page(self) -> Self {
        let page = self.page.saturating_sub(1).max(1);
        ViewState { page, ..self }
    }

    /// Step forward one page, never past `total_pages`.
    pub fn next_page(self, total_pages: usize) -> Self {
        let page = (self.page + 1).min(total_pages.max(1));
        ViewState { page, ..self }
    }
}

/// Keep tasks whose name contains `search` (case-insensitive) and whose status
/// and priority pass their filters. Input order is preserved.
pub fn filter_tasks<'a>(
    tasks: &'a [Task],
    search: &str,
    status: FieldFilter<Status>,
    priority: FieldFilter<Priority>,
) -> Vec<&'a Task> {
    let needle = search.to_lowercase();
    let kept: Vec<&Task> = tasks
        .iter()
        .filter(|t| {
            t.name.to_lowercase().contains(&needle) && status.matches(t.status) && priority.matches(t.priority)
        })
        .collect();
    trace!(search, ?status, ?priority, kept = kept.len(), "filtered tasks");
    kept
}

/// A root-locale collator. Punctuation and symbols are non-ignorable and sort
/// before letters; accents and case only break ties between equal base
/// letters, lowercase first.
fn collator() -> Collator {
    Collator::new(Tailoring::Cldr(Locale::Root), false, true)
}

/// Compare two strings with the root-locale collation order.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    collator().collate(a, b)
}

fn sort_field(task: &Task, key: SortKey) -> &str {
    match key {
        SortKey::Name => &task.name,
        // Priorities order by their label, so High < Low < Medium.
        SortKey::Priority => task.priority.label(),
    }
}

/// Order tasks ascending by the text of `key`. Stable: equal keys keep their
/// filtered order.
pub fn sort_tasks(mut tasks: Vec<&Task>, key: SortKey) -> Vec<&Task> {
    let mut collator = collator();
    tasks.sort_by(|a, b| collator.collate(sort_field(a, key), sort_field(b, key)));
    tasks
}

/// Number of pages needed for `len` items; zero when there are no items.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// The `page`-th slice (1-based) of `items`, clipped to its bounds.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.max(1).saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Everything the table and pagination controls need for one render.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView<'a> {
    pub rows: Vec<&'a Task>,
    pub page: usize,
    pub total_pages: usize,
    /// Tasks left after filtering, across all pages.
    pub matched: usize,
}

impl DashboardView<'_> {
    /// Pagination controls are shown only with more than one page.
    pub fn has_pagination(&self) -> bool {
        self.total_pages > 1
    }

    pub fn can_go_previous(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Run the whole pipeline for `state`.
pub fn derive_view<'a>(tasks: &'a [Task], state: &ViewState, page_size: usize) -> DashboardView<'a> {
    let filtered = filter_tasks(tasks, &state.search, state.status, state.priority);
    let sorted = sort_tasks(filtered, state.sort_by);
    let total_pages = total_pages(sorted.len(), page_size);
    let rows = paginate(&sorted, state.page, page_size).to_vec();
    DashboardView {
        rows,
        page: state.page,
        total_pages,
        matched: sorted.len(),
    }
}

/// Whole-dataset counts, independent of any filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub pending: usize,
}

/// One summary card on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: usize,
    pub tint: Tint,
}

impl Metrics {
    pub fn compute(tasks: &[Task]) -> Self {
        let count = |s: Status| tasks.iter().filter(|t| t.status == s).count();
        Metrics {
            total: tasks.len(),
            completed: count(Status::Completed),
            in_progress: count(Status::InProgress),
            pending: count(Status::Pending),
        }
    }

    /// The four cards in display order.
    pub fn cards(&self) -> [StatCard; 4] {
        [
            StatCard { title: "Total items", value: self.total, tint: Tint::Blue },
            StatCard { title: "Completed", value: self.completed, tint: Tint::Green },
            StatCard { title: "In progress", value: self.in_progress, tint: Tint::Yellow },
            StatCard { title: "Pending", value: self.pending, tint: Tint::Red },
        ]
    }
}
