//! Dashboard screen: stat cards, filter bar, task table and pagination.
//!
//! The screen owns a [`ViewState`] and replaces it on every input event. Rows
//! are never cached; each render runs the pipeline over the full dataset.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use tracing::debug;

use crate::db::Database;
use crate::fields::SortKey;
use crate::pipeline::{derive_view, DashboardView, Metrics, ViewState};
use crate::tui::{
    colors::{HEADER_GRAY, MUTED, SLATE},
    enums::DashboardFocus,
    input::InputField,
    widgets::{status_badge, SelectBox, StatCardWidget},
};

/// What a key press on the dashboard asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardOutcome {
    Stay,
    ShowHelp,
    Quit,
}

pub struct DashboardScreen {
    db: Database,
    metrics: Metrics,
    state: ViewState,
    search: InputField,
    focus: DashboardFocus,
    page_size: usize,
    status_message: String,
}

impl DashboardScreen {
    pub fn new(db: Database, page_size: usize, default_sort: SortKey) -> Self {
        let metrics = Metrics::compute(db.tasks());
        DashboardScreen {
            db,
            metrics,
            state: ViewState::default().with_sort(default_sort),
            search: InputField::new(),
            focus: DashboardFocus::Table,
            page_size,
            status_message: String::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn focus(&self) -> DashboardFocus {
        self.focus
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// The rows and page bounds for the current state.
    pub fn view(&self) -> DashboardView<'_> {
        derive_view(self.db.tasks(), &self.state, self.page_size)
    }

    fn update(&mut self, change: impl FnOnce(ViewState) -> ViewState) {
        let state = std::mem::take(&mut self.state);
        self.state = change(state);
        debug!(state = ?self.state, "dashboard state changed");
    }

    fn set_sort(&mut self, key: SortKey) {
        self.update(|s| s.with_sort(key));
        self.status_message = format!("Sorted by {}", key.label());
    }

    fn go_previous(&mut self) {
        let view = self.view();
        if !view.has_pagination() {
            return;
        }
        self.update(ViewState::previous_page);
        self.status_message = format!("Page {} of {}", self.state.page, self.view().total_pages);
    }

    fn go_next(&mut self) {
        let total = self.view().total_pages;
        if total <= 1 {
            return;
        }
        self.update(|s| s.next_page(total));
        self.status_message = format!("Page {} of {}", self.state.page, total);
    }

    fn report_matches(&mut self) {
        let matched = self.view().matched;
        self.status_message = format!("Showing {} of {} tasks", matched, self.db.len());
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DashboardOutcome {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return DashboardOutcome::Quit;
        }
        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return DashboardOutcome::Stay;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                return DashboardOutcome::Stay;
            }
            KeyCode::PageUp => {
                self.go_previous();
                return DashboardOutcome::Stay;
            }
            KeyCode::PageDown => {
                self.go_next();
                return DashboardOutcome::Stay;
            }
            _ => {}
        }

        if self.focus == DashboardFocus::Search {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.focus = DashboardFocus::Table,
                code => {
                    if self.search.handle_key(code) {
                        let text = self.search.value().to_string();
                        self.update(|s| s.with_search(text));
                        self.report_matches();
                    }
                }
            }
            return DashboardOutcome::Stay;
        }

        match (self.focus, key.code) {
            (DashboardFocus::StatusFilter, KeyCode::Left | KeyCode::Up) => {
                self.update(|s| {
                    let status = s.status.previous();
                    s.with_status(status)
                });
                self.report_matches();
            }
            (DashboardFocus::StatusFilter, KeyCode::Right | KeyCode::Down) => {
                self.update(|s| {
                    let status = s.status.next();
                    s.with_status(status)
                });
                self.report_matches();
            }
            (DashboardFocus::PriorityFilter, KeyCode::Left | KeyCode::Up) => {
                self.update(|s| {
                    let priority = s.priority.previous();
                    s.with_priority(priority)
                });
                self.report_matches();
            }
            (DashboardFocus::PriorityFilter, KeyCode::Right | KeyCode::Down) => {
                self.update(|s| {
                    let priority = s.priority.next();
                    s.with_priority(priority)
                });
                self.report_matches();
            }
            (DashboardFocus::Table, KeyCode::Left) | (_, KeyCode::Char('[')) => self.go_previous(),
            (DashboardFocus::Table, KeyCode::Right) | (_, KeyCode::Char(']')) => self.go_next(),
            (_, KeyCode::Char('n')) => self.set_sort(SortKey::Name),
            (_, KeyCode::Char('p')) => self.set_sort(SortKey::Priority),
            (_, KeyCode::Char('/')) => self.focus = DashboardFocus::Search,
            (_, KeyCode::Char('?')) => return DashboardOutcome::ShowHelp,
            (DashboardFocus::Table, KeyCode::Esc) | (_, KeyCode::Char('q')) => return DashboardOutcome::Quit,
            (_, KeyCode::Esc) => self.focus = DashboardFocus::Table,
            _ => {}
        }
        DashboardOutcome::Stay
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let view = self.view();
        let pagination_height = if view.has_pagination() { 1 } else { 0 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Length(4), // stat cards
                Constraint::Length(3), // filters
                Constraint::Min(4),    // table
                Constraint::Length(pagination_height),
            ])
            .split(area);

        self.render_header(f, chunks[0]);
        self.render_cards(f, chunks[1]);
        self.render_filters(f, chunks[2]);
        self.render_table(f, chunks[3], &view);
        if view.has_pagination() {
            self.render_pagination(f, chunks[4], &view);
        }
    }

    fn render_header(&self, f: &mut Frame<'_>, area: Rect) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let title = Paragraph::new(Span::styled(
            "Workspace Overview",
            Style::default().add_modifier(Modifier::BOLD),
        ));
        f.render_widget(title, inner);

        let user = Paragraph::new(Line::from(vec![
            Span::styled("Admin User ", Style::default().fg(MUTED)),
            Span::styled(" A ", Style::default().bg(SLATE).fg(Color::White).add_modifier(Modifier::BOLD)),
        ]))
        .alignment(Alignment::Right);
        f.render_widget(user, inner);
    }

    fn render_cards(&self, f: &mut Frame<'_>, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);
        for (card, column) in self.metrics.cards().iter().zip(columns.iter()) {
            StatCardWidget { card }.render(f, *column);
        }
    }

    fn render_filters(&self, f: &mut Frame<'_>, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Percentage(30),
                Constraint::Percentage(30),
            ])
            .split(area);

        let search_focused = self.focus == DashboardFocus::Search;
        let search_text = if self.search.value().is_empty() {
            Span::styled("Search by task name", Style::default().fg(MUTED))
        } else {
            Span::raw(self.search.value().to_string())
        };
        let search_border = if search_focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        f.render_widget(
            Paragraph::new(search_text).block(
                Block::default()
                    .title("Search")
                    .borders(Borders::ALL)
                    .border_style(search_border),
            ),
            columns[0],
        );
        if search_focused {
            let x = columns[0].x + 1 + (self.search.cursor() as u16).min(columns[0].width.saturating_sub(3));
            f.set_cursor_position((x, columns[0].y + 1));
        }

        SelectBox {
            title: "Status",
            value: self.state.status.label("All statuses"),
            focused: self.focus == DashboardFocus::StatusFilter,
        }
        .render(f, columns[1]);
        SelectBox {
            title: "Priority",
            value: self.state.priority.label("All priorities"),
            focused: self.focus == DashboardFocus::PriorityFilter,
        }
        .render(f, columns[2]);
    }

    fn render_table(&self, f: &mut Frame<'_>, area: Rect, view: &DashboardView<'_>) {
        let header = Row::new(vec![
            Cell::from("Task name [n]"),
            Cell::from("Current status"),
            Cell::from("Priority level [p]"),
        ])
        .style(
            Style::default()
                .bg(HEADER_GRAY)
                .fg(Color::Rgb(55, 65, 81))
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = view
            .rows
            .iter()
            .map(|task| {
                Row::new(vec![
                    Cell::from(task.name.clone()),
                    Cell::from(Line::from(status_badge(task.status))),
                    Cell::from(task.priority.label()),
                ])
            })
            .collect();

        let widths = [
            Constraint::Min(24),
            Constraint::Length(16),
            Constraint::Length(18),
        ];

        let border_style = if self.focus == DashboardFocus::Table {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!("Tasks ({}/{})", view.matched, self.db.len()));
        let inner = block.inner(area);

        let table = Table::new(rows, widths).header(header).block(block);
        f.render_widget(table, area);

        if view.rows.is_empty() && inner.height > 1 {
            let message_area = Rect {
                y: inner.y + 1,
                height: 1,
                ..inner
            };
            f.render_widget(
                Paragraph::new(Span::styled("No tasks match your criteria", Style::default().fg(MUTED)))
                    .alignment(Alignment::Center),
                message_area,
            );
        }
    }

    fn render_pagination(&self, f: &mut Frame<'_>, area: Rect, view: &DashboardView<'_>) {
        let control = |label: &'static str, enabled: bool| {
            if enabled {
                Span::styled(label, Style::default().add_modifier(Modifier::BOLD))
            } else {
                Span::styled(label, Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM))
            }
        };
        let line = Line::from(vec![
            Span::styled(
                format!("Page {} of {}  ", view.page, view.total_pages),
                Style::default().fg(MUTED),
            ),
            control("[ Previous ]", view.can_go_previous()),
            Span::raw(" "),
            control("[ Next ]", view.can_go_next()),
        ]);
        f.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
    }
}
