//! Small presentational widgets: stat cards, status badges and select boxes.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::fields::Status;
use crate::pipeline::StatCard;
use crate::tui::colors::{tint_style, MUTED};

/// Renders one summary card: a muted title over a large tinted value.
pub struct StatCardWidget<'a> {
    pub card: &'a StatCard,
}

impl StatCardWidget<'_> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(self.card.title, Style::default().fg(MUTED))),
            Line::from(Span::styled(
                format!(" {} ", self.card.value),
                tint_style(self.card.tint),
            )),
        ];
        let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}

/// Styled label for a task status.
pub fn status_badge(status: Status) -> Span<'static> {
    Span::styled(format!(" {} ", status.label()), tint_style(status.tint()))
}

/// A dropdown rendered as a bordered box showing the current option.
pub struct SelectBox<'a> {
    pub title: &'a str,
    pub value: &'a str,
    pub focused: bool,
}

impl SelectBox<'_> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let text = if self.focused {
            format!("◀ {} ▶", self.value)
        } else {
            self.value.to_string()
        };
        let paragraph = Paragraph::new(text).alignment(Alignment::Left).block(
            Block::default()
                .title(self.title)
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        f.render_widget(paragraph, area);
    }
}
