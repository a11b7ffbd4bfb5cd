use crate::ui::app::Focus;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    show_hints: bool,
}

impl Footer {
    pub fn new(show_hints: bool) -> Self {
        Self { show_hints }
    }

    pub fn widget(&self, area: Rect, focus: Focus) -> Paragraph<'static> {
        let hints = if self.show_hints { hints_for(focus) } else { "" };
        let version = format!("v{} ", VERSION);

        // Char count, not bytes: the separators are multi-byte.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
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

fn hints_for(focus: Focus) -> &'static str {
    match focus {
        Focus::Name => " Type name │ Enter: Add │ Tab: Next │ Esc: Quit",
        Focus::Quantity => " +/-: Quantity │ Enter: Add │ Tab: Next │ Esc: Quit",
        Focus::AddButton => " Enter: Add │ Tab: Next │ Esc: Quit",
        Focus::List => " ↑/↓: Move │ Space: Check │ +/-: Quantity │ d: Delete │ Tab: Next │ q: Quit",
    }
}
