use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const MAIN_HINTS: &str =
    " ↑↓: Item │ ←→: User │ i/+: In │ o/-: Out │ s: Save │ c: Clear │ w: Stock │ r: Refresh │ q: Quit";
const PROMPT_HINTS: &str = " Type plate │ Enter: Confirm │ Esc: Cancel";
const CONFIRM_HINTS: &str = " Enter/y: Confirm │ Esc/n: Cancel";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterMode {
    Main,
    PlatePrompt,
    Confirm,
}

pub struct Footer;

impl Footer {
    pub fn widget(mode: FooterMode, area: Rect) -> Paragraph<'static> {
        let hints = match mode {
            FooterMode::Main => MAIN_HINTS,
            FooterMode::PlatePrompt => PROMPT_HINTS,
            FooterMode::Confirm => CONFIRM_HINTS,
        };
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
