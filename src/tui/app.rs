//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which owns the current screen,
//! routes key events to it, and renders the status bar and help overlay.
//! The dashboard is created when the login form is submitted and dropped when
//! the application exits, so its search, filter and page state always start
//! from defaults.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use tracing::info;

use crate::config::Config;
use crate::db::Database;
use crate::tui::{
    colors::SLATE,
    dashboard::{DashboardOutcome, DashboardScreen},
    enums::AppState,
    login::{LoginOutcome, LoginScreen},
    utils::centered_rect,
};

/// Application state for the terminal user interface.
pub struct App {
    state: AppState,
    config: Config,
    login: LoginScreen,
    dashboard: Option<DashboardScreen>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let login = LoginScreen::new(&config.login);
        App {
            state: AppState::Login,
            config,
            login,
            dashboard: None,
        }
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn dashboard(&self) -> Option<&DashboardScreen> {
        self.dashboard.as_ref()
    }

    fn open_dashboard(&mut self) {
        self.dashboard = Some(DashboardScreen::new(
            Database::sample(),
            self.config.page_size,
            self.config.default_sort,
        ));
        self.state = AppState::Dashboard;
        info!("dashboard opened");
    }

    /// Route one key press to the current screen.
    ///
    /// Returns true if the application should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self.state {
            AppState::Login => match self.login.handle_key(key) {
                LoginOutcome::Stay => false,
                LoginOutcome::Submitted => {
                    self.open_dashboard();
                    false
                }
                LoginOutcome::Quit => true,
            },
            AppState::Dashboard => {
                let Some(dashboard) = self.dashboard.as_mut() else {
                    self.state = AppState::Login;
                    return false;
                };
                match dashboard.handle_key(key) {
                    DashboardOutcome::Stay => false,
                    DashboardOutcome::ShowHelp => {
                        self.state = AppState::Help;
                        false
                    }
                    DashboardOutcome::Quit => true,
                }
            }
            AppState::Help => {
                self.state = AppState::Dashboard;
                false
            }
        }
    }

    /// Poll for one key event and handle it.
    ///
    /// Returns true if the application should quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    return Ok(false);
                }
                return Ok(self.handle_key(key));
            }
        }
        Ok(false)
    }

    fn render_help(&self, f: &mut Frame<'_>, area: Rect) {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let help_text = vec![
            Line::from(Span::styled("Dashboard Help", bold)),
            Line::from(""),
            Line::from(Span::styled("Filters:", bold)),
            Line::from("  Tab / Shift+Tab   Move between search, status, priority and table"),
            Line::from("  /                 Jump to search"),
            Line::from("  ←/→ on a select   Change status or priority filter"),
            Line::from("  Esc/Enter         Leave search"),
            Line::from(""),
            Line::from(Span::styled("Table:", bold)),
            Line::from("  n                 Sort by task name"),
            Line::from("  p                 Sort by priority level"),
            Line::from("  ← [ PgUp          Previous page"),
            Line::from("  → ] PgDn          Next page"),
            Line::from(""),
            Line::from("  ?                 Show this help"),
            Line::from("  q/Esc/Ctrl+C      Quit"),
        ];

        let area = centered_rect(70, 70, area);
        f.render_widget(Clear, area);
        let paragraph = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Help - Press any key to return"),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }

    fn render_status_bar(&self, f: &mut Frame<'_>, area: Rect) {
        let status_text = match self.state {
            AppState::Login => "Enter: log in | Tab: next field | Esc: quit".to_string(),
            AppState::Help => "Help".to_string(),
            AppState::Dashboard => match &self.dashboard {
                Some(d) if !d.status_message().is_empty() => d.status_message().to_string(),
                Some(d) => format!("Tasks: {} | Press '?' for help", d.view().matched),
                None => String::new(),
            },
        };
        let status = Paragraph::new(status_text).style(Style::default().bg(SLATE).fg(Color::White));
        f.render_widget(status, area);
    }

    /// Main render function that dispatches to the current screen.
    pub fn render(&self, f: &mut Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(f.area());

        match self.state {
            AppState::Login => self.login.render(f, chunks[0]),
            AppState::Dashboard => {
                if let Some(d) = &self.dashboard {
                    d.render(f, chunks[0]);
                }
            }
            AppState::Help => {
                if let Some(d) = &self.dashboard {
                    d.render(f, chunks[0]);
                }
                self.render_help(f, chunks[0]);
            }
        }

        self.render_status_bar(f, chunks[1]);
    }

    /// Main event loop for the TUI application.
    ///
    /// Handles rendering and input processing until the user exits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}
