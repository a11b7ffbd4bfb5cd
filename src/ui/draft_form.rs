//! Entry form: name input, quantity stepper and the add button.

use crate::list::Draft;
use crate::ui::app::Focus;
use crate::ui::layout::form_regions;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT,
};
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const STEPPER_GAP: &str = "    ";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StepperControl {
    Increment,
    Decrement,
}

pub fn render_draft_form(frame: &mut Frame<'_>, area: Rect, draft: &Draft, focus: Focus) {
    let (name_area, quantity_area, button_area) = form_regions(area);

    let name_block = field_block("Item Name", focus == Focus::Name);
    let name_inner = name_block.inner(name_area);
    let (offset, cursor) = name_viewport(&draft.name, name_inner.width);
    frame.render_widget(
        Paragraph::new(draft.name.as_str())
            .style(Style::default().fg(HEADER_TEXT))
            .scroll((0, offset))
            .block(name_block),
        name_area,
    );
    if focus == Focus::Name && name_inner.width > 0 && name_inner.height > 0 {
        frame.set_cursor_position(Position::new(name_inner.x + cursor, name_inner.y));
    }

    frame.render_widget(
        Paragraph::new(stepper_line(draft, focus == Focus::Quantity))
            .block(field_block("Quantity", focus == Focus::Quantity)),
        quantity_area,
    );

    frame.render_widget(
        add_button(!draft.name.is_empty(), focus == Focus::AddButton),
        button_area,
    );
}

/// Horizontal scroll and cursor column for the name field. The tail of the
/// name stays visible with the cursor one cell past it.
pub fn name_viewport(name: &str, field_width: u16) -> (u16, u16) {
    let typed = u16::try_from(Line::from(name).width()).unwrap_or(u16::MAX);
    let last_cell = field_width.saturating_sub(1);
    let offset = typed.saturating_sub(last_cell);
    (offset, (typed - offset).min(last_cell))
}

/// Which stepper button sits at `column` (relative to the field's inner area).
pub fn stepper_control_at(draft: &Draft, column: u16) -> Option<StepperControl> {
    let label = quantity_label(draft).len();
    let increment = label + STEPPER_GAP.len();
    let decrement = increment + 4;
    let column = column as usize;
    if (increment..increment + 3).contains(&column) {
        Some(StepperControl::Increment)
    } else if (decrement..decrement + 3).contains(&column) {
        Some(StepperControl::Decrement)
    } else {
        None
    }
}

pub fn field_block(title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .title(Span::styled(title, Style::default().fg(MUTED_TEXT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn stepper_line(draft: &Draft, focused: bool) -> Line<'static> {
    let control_style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_TEXT)
    };
    Line::from(vec![
        Span::styled(quantity_label(draft), Style::default().fg(HEADER_TEXT)),
        Span::raw(STEPPER_GAP),
        Span::styled("[+]", control_style),
        Span::raw(" "),
        Span::styled("[-]", control_style),
    ])
}

fn quantity_label(draft: &Draft) -> String {
    format!("Quantity: {}", draft.quantity)
}

fn add_button(enabled: bool, focused: bool) -> Paragraph<'static> {
    let mut style = Style::default().fg(if enabled { ACCENT } else { MUTED_TEXT });
    if focused {
        style = style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
    }
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Paragraph::new(Line::from(Span::styled("Add Item", style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::Quantity;

    #[test]
    fn stepper_shows_quantity_and_controls() {
        let draft = Draft::new("", Quantity::new(4).unwrap());
        let text: String = stepper_line(&draft, false)
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        assert_eq!(text, "Quantity: 4    [+] [-]");
    }

    #[test]
    fn stepper_buttons_follow_label_width() {
        let draft = Draft::new("", Quantity::new(4).unwrap());
        assert_eq!(stepper_control_at(&draft, 15), Some(StepperControl::Increment));
        assert_eq!(stepper_control_at(&draft, 17), Some(StepperControl::Increment));
        assert_eq!(stepper_control_at(&draft, 18), None);
        assert_eq!(stepper_control_at(&draft, 19), Some(StepperControl::Decrement));
        assert_eq!(stepper_control_at(&draft, 2), None);

        let draft = Draft::new("", Quantity::new(120).unwrap());
        assert_eq!(stepper_control_at(&draft, 17), Some(StepperControl::Increment));
        assert_eq!(stepper_control_at(&draft, 21), Some(StepperControl::Decrement));
    }

    #[test]
    fn short_name_does_not_scroll() {
        assert_eq!(name_viewport("", 20), (0, 0));
        assert_eq!(name_viewport("Milk", 20), (0, 4));
    }

    #[test]
    fn cursor_counts_display_columns() {
        assert_eq!(name_viewport("牛乳", 20), (0, 4));
        assert_eq!(name_viewport("牛乳牛乳牛乳", 8), (5, 7));
    }

    #[test]
    fn long_name_scrolls_to_tail() {
        let name = format!("{}TAILEND", "a".repeat(60));
        assert_eq!(name_viewport(&name, 38), (30, 37));
    }

    #[test]
    fn huge_name_saturates_instead_of_wrapping() {
        let name = "x".repeat(70_000);
        assert_eq!(name_viewport(&name, 38), (u16::MAX - 37, 37));
    }

    #[test]
    fn zero_width_field_is_harmless() {
        assert_eq!(name_viewport("Milk", 0), (4, 0));
    }
}
