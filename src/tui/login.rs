//! Login screen.
//!
//! The form is pre-filled and never validated: submitting always opens the
//! dashboard. It is a preview gate, not an authentication boundary.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tracing::info;

use crate::config::LoginConfig;
use crate::tui::{
    colors::{MUTED, SLATE},
    enums::LoginFocus,
    input::InputField,
    utils::centered_fixed,
};

/// What a key press on the login screen asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Stay,
    Submitted,
    Quit,
}

pub struct LoginScreen {
    email: InputField,
    password: InputField,
    focus: LoginFocus,
}

impl LoginScreen {
    pub fn new(prefill: &LoginConfig) -> Self {
        LoginScreen {
            email: InputField::with_value(&prefill.email),
            password: InputField::with_value(&prefill.password),
            focus: LoginFocus::Email,
        }
    }

    pub fn email(&self) -> &str {
        self.email.value()
    }

    pub fn focus(&self) -> LoginFocus {
        self.focus
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> LoginOutcome {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return LoginOutcome::Quit;
        }
        match key.code {
            KeyCode::Esc => LoginOutcome::Quit,
            KeyCode::Enter => {
                info!(email = %self.email.value(), "login submitted");
                LoginOutcome::Submitted
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                LoginOutcome::Stay
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.previous();
                LoginOutcome::Stay
            }
            code => {
                match self.focus {
                    LoginFocus::Email => {
                        self.email.handle_key(code);
                    }
                    LoginFocus::Password => {
                        self.password.handle_key(code);
                    }
                    LoginFocus::Submit => {
                        if code == KeyCode::Char(' ') {
                            info!(email = %self.email.value(), "login submitted");
                            return LoginOutcome::Submitted;
                        }
                    }
                }
                LoginOutcome::Stay
            }
        }
    }

    fn field_block(&self, title: &'static str, field: LoginFocus) -> Block<'static> {
        let style = if self.focus == field {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(MUTED)
        };
        Block::default().title(title).borders(Borders::ALL).border_style(style)
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let card = centered_fixed(52, 20, area);
        f.render_widget(Clear, card);
        let outer = Block::default().borders(Borders::ALL);
        let inner = outer.inner(card);
        f.render_widget(outer, card);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // logo
                Constraint::Length(1), // title
                Constraint::Length(1), // subtitle
                Constraint::Length(1),
                Constraint::Length(3), // email
                Constraint::Length(3), // password
                Constraint::Length(1),
                Constraint::Length(1), // button
                Constraint::Length(1),
                Constraint::Length(1), // footer
                Constraint::Min(0),
            ])
            .split(inner);

        let logo = Paragraph::new(Span::styled(
            " SD ",
            Style::default().bg(SLATE).fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        f.render_widget(logo, chunks[0]);

        f.render_widget(
            Paragraph::new(Span::styled("Smart Dashboard", Style::default().add_modifier(Modifier::BOLD)))
                .alignment(Alignment::Center),
            chunks[1],
        );
        f.render_widget(
            Paragraph::new(Span::styled("Secure access to your workspace", Style::default().fg(MUTED)))
                .alignment(Alignment::Center),
            chunks[2],
        );

        f.render_widget(
            Paragraph::new(self.email.value().to_string()).block(self.field_block("Email", LoginFocus::Email)),
            chunks[4],
        );
        f.render_widget(
            Paragraph::new(self.password.masked()).block(self.field_block("Password", LoginFocus::Password)),
            chunks[5],
        );

        let button_style = if self.focus == LoginFocus::Submit {
            Style::default().bg(Color::Cyan).fg(Color::Black).add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(SLATE).fg(Color::White).add_modifier(Modifier::BOLD)
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled("  Login to Dashboard  ", button_style)))
                .alignment(Alignment::Center),
            chunks[7],
        );

        f.render_widget(
            Paragraph::new(Span::styled("This is a preview environment", Style::default().fg(MUTED)))
                .alignment(Alignment::Center),
            chunks[9],
        );

        let cursor = match self.focus {
            LoginFocus::Email => Some((chunks[4], self.email.cursor())),
            LoginFocus::Password => Some((chunks[5], self.password.cursor())),
            LoginFocus::Submit => None,
        };
        if let Some((field_area, col)) = cursor {
            let x = field_area.x + 1 + (col as u16).min(field_area.width.saturating_sub(3));
            f.set_cursor_position((x, field_area.y + 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn enter_always_submits() {
        let mut screen = LoginScreen::new(&LoginConfig::default());
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), LoginOutcome::Submitted);

        let mut blank = LoginScreen::new(&LoginConfig {
            email: String::new(),
            password: String::new(),
        });
        assert_eq!(blank.handle_key(key(KeyCode::Enter)), LoginOutcome::Submitted);
    }

    #[test]
    fn tab_cycles_focus_and_typing_edits_focused_field() {
        let mut screen = LoginScreen::new(&LoginConfig::default());
        assert_eq!(screen.focus(), LoginFocus::Email);
        screen.handle_key(key(KeyCode::Backspace));
        assert_eq!(screen.email(), "admin@gmail.co");
        screen.handle_key(key(KeyCode::Tab));
        screen.handle_key(key(KeyCode::Tab));
        assert_eq!(screen.focus(), LoginFocus::Submit);
        assert_eq!(screen.handle_key(key(KeyCode::Char(' '))), LoginOutcome::Submitted);
    }

    #[test]
    fn escape_quits() {
        let mut screen = LoginScreen::new(&LoginConfig::default());
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), LoginOutcome::Quit);
    }
}
