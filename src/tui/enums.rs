//! Enumerations for TUI state management.

/// Which screen the application shows.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AppState {
    Login,
    Dashboard,
    Help,
}

/// Focusable controls on the login screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoginFocus {
    Email,
    Password,
    Submit,
}

impl LoginFocus {
    pub fn next(self) -> Self {
        match self {
            LoginFocus::Email => LoginFocus::Password,
            LoginFocus::Password => LoginFocus::Submit,
            LoginFocus::Submit => LoginFocus::Email,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            LoginFocus::Email => LoginFocus::Submit,
            LoginFocus::Password => LoginFocus::Email,
            LoginFocus::Submit => LoginFocus::Password,
        }
    }
}

/// Focusable controls on the dashboard.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DashboardFocus {
    Search,
    StatusFilter,
    PriorityFilter,
    Table,
}

impl DashboardFocus {
    pub fn next(self) -> Self {
        match self {
            DashboardFocus::Search => DashboardFocus::StatusFilter,
            DashboardFocus::StatusFilter => DashboardFocus::PriorityFilter,
            DashboardFocus::PriorityFilter => DashboardFocus::Table,
            DashboardFocus::Table => DashboardFocus::Search,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            DashboardFocus::Search => DashboardFocus::Table,
            DashboardFocus::StatusFilter => DashboardFocus::Search,
            DashboardFocus::PriorityFilter => DashboardFocus::StatusFilter,
            DashboardFocus::Table => DashboardFocus::PriorityFilter,
        }
    }
}
