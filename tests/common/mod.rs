//! Shared test helpers.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use shoplist::list::{Draft, Quantity, ShoppingItem, ShoppingList};
use shoplist::ui::app::App;
use shoplist::ui::input::handle_mouse;
use shoplist::ui::render::draw;
use shoplist::ui::shopping::ShoppingState;

pub fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

pub fn qty(value: u32) -> Quantity {
    Quantity::new(value).expect("non-zero quantity")
}

/// State with the given (name, quantity, checked) rows and an empty draft.
pub fn state_with(rows: &[(&str, u32, bool)]) -> ShoppingState {
    let items: ShoppingList = rows
        .iter()
        .map(|(name, quantity, checked)| {
            ShoppingItem::new(*name, qty(*quantity)).with_checked(*checked)
        })
        .collect();
    ShoppingState {
        items,
        draft: Draft::default(),
    }
}

/// (name, quantity, checked) for every row, in order.
pub fn rows(state: &ShoppingState) -> Vec<(String, u32, bool)> {
    state
        .items
        .items()
        .iter()
        .map(|item| (item.name().to_string(), item.quantity().get(), item.is_checked()))
        .collect()
}

/// Renders one frame and returns the screen as text lines.
pub fn render_lines(app: &App, width: u16, height: u16) -> Vec<String> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}

/// Column of the first `needle` in a rendered line.
pub fn column_of(line: &str, needle: &str) -> u16 {
    let byte = line
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not in {line:?}"));
    line[..byte].chars().count() as u16
}

/// Left click on an 80x24 screen.
pub fn click(app: &mut App, column: u16, row: u16) {
    click_with(app, MouseButton::Left, column, row);
}

pub fn click_with(app: &mut App, button: MouseButton, column: u16, row: u16) {
    let mouse = MouseEvent {
        kind: MouseEventKind::Down(button),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    };
    handle_mouse(app, mouse, Rect::new(0, 0, 80, 24));
}
