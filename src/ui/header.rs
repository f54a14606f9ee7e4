use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_WARN};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// What the header needs to know about the controller.
pub struct HeaderState<'a> {
    pub user: Option<&'a str>,
    pub saving: bool,
    pub loading_stock: bool,
}

pub struct Header;

impl Header {
    pub fn widget(state: &HeaderState<'_>) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let busy_style = Style::default().fg(STATUS_WARN);

        let user = state.user.unwrap_or("(no user)");
        let mut spans = vec![
            Span::styled("  NIROCHECK", title_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("User: {}", user), text_style),
        ];
        if state.saving {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled("Saving...", busy_style));
        }
        if state.loading_stock {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled("Loading stock...", busy_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
