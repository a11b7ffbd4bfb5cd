//! Scrolling list of item rows.
//!
//! Rows are laid out right-aligned: whatever the name width, the quantity,
//! the stepper and `[Delete]` end on the row's last column. Mouse hit-testing
//! in [`row_control_at`] relies on that.

use crate::list::{ShoppingItem, ShoppingList};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, DELETE_TEXT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

const EMPTY_HINT: &str = "Nothing here yet. Type a name above and press Enter.";
const CHECKBOX_WIDTH: usize = 4;
const CONTROLS: &str = "[+] [-]  ";
const DELETE_LABEL: &str = "[Delete]";
const ELLIPSIS: &str = "…";

/// Clickable parts of a row.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RowControl {
    Checkbox,
    Increment,
    Decrement,
    Delete,
}

pub fn list_block(focused: bool) -> Block<'static> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .title(Span::styled("Items", Style::default().fg(MUTED_TEXT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

pub fn render_item_list(
    frame: &mut Frame<'_>,
    area: Rect,
    items: &ShoppingList,
    selection: usize,
    focused: bool,
) {
    let block = list_block(focused);

    if items.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            EMPTY_HINT,
            Style::default().fg(MUTED_TEXT),
        )))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let inner = block.inner(area);
    let width = inner.width as usize;
    let rows: Vec<ListItem> = items
        .items()
        .iter()
        .map(|item| ListItem::new(row_line(item, width)))
        .collect();

    let mut list = List::new(rows).block(block);
    if focused {
        list = list.highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));
    }

    // Selected is set even without focus so the viewport follows the cursor.
    let offset = list_offset(selection, items.len(), inner.height as usize);
    let mut state = ListState::default()
        .with_offset(offset)
        .with_selected(Some(selection));
    frame.render_stateful_widget(list, area, &mut state);
}

/// First visible row when `height` rows fit and the cursor must stay in view.
pub fn list_offset(selection: usize, len: usize, height: usize) -> usize {
    if height == 0 || len == 0 {
        return 0;
    }
    let selection = selection.min(len - 1);
    (selection + 1).saturating_sub(height)
}

/// `[x] Name ........ Qty: 3 [+] [-]  [Delete]`, padded to `width` display
/// columns. A name that does not fit is cut and ends in `…`.
pub fn row_line(item: &ShoppingItem, width: usize) -> Line<'static> {
    let checkbox = if item.is_checked() { "[x] " } else { "[ ] " };
    let quantity = quantity_label(item);

    let mut name_style = Style::default().fg(HEADER_TEXT);
    if item.is_checked() {
        name_style = name_style
            .fg(MUTED_TEXT)
            .add_modifier(Modifier::CROSSED_OUT);
    }

    let fixed = fixed_width(item);
    let budget = width.saturating_sub(fixed + 1);
    let name = truncate_to_width(item.name(), budget);
    let padding = width
        .saturating_sub(fixed)
        .saturating_sub(Span::raw(name.as_str()).width())
        .max(1);

    Line::from(vec![
        Span::styled(checkbox, Style::default().fg(ACCENT)),
        Span::styled(name, name_style),
        Span::raw(" ".repeat(padding)),
        Span::styled(quantity, Style::default().fg(HEADER_TEXT)),
        Span::styled(CONTROLS, Style::default().fg(MUTED_TEXT)),
        Span::styled(DELETE_LABEL, Style::default().fg(DELETE_TEXT)),
    ])
}

/// Which control sits at `column` (relative to the row start) of a row
/// rendered by [`row_line`] at `width`.
pub fn row_control_at(item: &ShoppingItem, column: u16, width: u16) -> Option<RowControl> {
    let column = column as usize;
    let width = width as usize;
    if column >= width {
        return None;
    }
    if column < CHECKBOX_WIDTH - 1 {
        return Some(RowControl::Checkbox);
    }
    // Narrower rows overflow and get clipped, so the right-hand controls
    // are not where the arithmetic below expects them.
    if width < fixed_width(item) + 1 {
        return None;
    }

    let delete_start = width - DELETE_LABEL.len();
    let decrement_start = delete_start - 5;
    let increment_start = decrement_start - 4;
    if column >= delete_start {
        Some(RowControl::Delete)
    } else if (decrement_start..decrement_start + 3).contains(&column) {
        Some(RowControl::Decrement)
    } else if (increment_start..increment_start + 3).contains(&column) {
        Some(RowControl::Increment)
    } else {
        None
    }
}

fn quantity_label(item: &ShoppingItem) -> String {
    format!("Qty: {} ", item.quantity())
}

fn fixed_width(item: &ShoppingItem) -> usize {
    CHECKBOX_WIDTH + quantity_label(item).len() + CONTROLS.len() + DELETE_LABEL.len()
}

/// Cuts `text` to at most `max` display columns, marking the cut with `…`.
fn truncate_to_width(text: &str, max: usize) -> String {
    let full = Span::raw(text);
    if full.width() <= max {
        return text.to_string();
    }
    let Some(room) = max.checked_sub(1) else {
        return String::new();
    };

    let mut out = String::new();
    let mut used = 0;
    for grapheme in full.styled_graphemes(Style::default()) {
        let grapheme_width = Span::raw(grapheme.symbol).width();
        if used + grapheme_width > room {
            break;
        }
        used += grapheme_width;
        out.push_str(grapheme.symbol);
    }
    out.push_str(ELLIPSIS);
    out
}
