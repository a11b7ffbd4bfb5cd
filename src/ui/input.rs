use crate::ui::app::{App, Focus};
use crate::ui::draft_form::{field_block, stepper_control_at, StepperControl};
use crate::ui::item_list::{list_block, list_offset, row_control_at, RowControl};
use crate::ui::layout::{body_regions, form_regions, layout_regions};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab => {
            app.focus_previous();
            return;
        }
        _ => {}
    }

    match app.focus() {
        Focus::Name => handle_name_key(app, key),
        Focus::Quantity => handle_quantity_key(app, key),
        Focus::AddButton => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                app.add_item();
            }
        }
        Focus::List => handle_list_key(app, key),
    }
}

/// Bracketed paste. Only the name field accepts text.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.focus() != Focus::Name {
        return;
    }
    let cleaned: String = text.chars().filter(|ch| !ch.is_control()).collect();
    if !cleaned.is_empty() {
        app.type_text(&cleaned);
    }
}

/// Left clicks on the screen laid out in `area`. Clicking a field focuses it;
/// clicking a row selects it and runs the control under the pointer.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, area: Rect) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let click = Position::new(mouse.column, mouse.row);
    let (_, body, _) = layout_regions(area);
    let (form, list) = body_regions(body);
    let (name, quantity, button) = form_regions(form);

    if name.contains(click) {
        app.set_focus(Focus::Name);
    } else if quantity.contains(click) {
        app.set_focus(Focus::Quantity);
        let inner = field_block("", false).inner(quantity);
        if !inner.contains(click) {
            return;
        }
        match stepper_control_at(&app.state().draft, click.x - inner.x) {
            Some(StepperControl::Increment) => app.increment_draft(),
            Some(StepperControl::Decrement) => app.decrement_draft(),
            None => {}
        }
    } else if button.contains(click) {
        app.set_focus(Focus::AddButton);
        app.add_item();
    } else if list.contains(click) {
        app.set_focus(Focus::List);
        click_row(app, list_block(true).inner(list), click);
    }
}

fn click_row(app: &mut App, inner: Rect, click: Position) {
    if !inner.contains(click) {
        return;
    }
    let len = app.state().items.len();
    let offset = list_offset(app.selection(), len, inner.height as usize);
    let position = offset + (click.y - inner.y) as usize;
    let Some(item) = app.state().items.get(position) else {
        return;
    };
    let control = row_control_at(item, click.x - inner.x, inner.width);

    app.select(position);
    match control {
        Some(RowControl::Checkbox) => app.toggle_selected(),
        Some(RowControl::Increment) => app.increment_selected(),
        Some(RowControl::Decrement) => app.decrement_selected(),
        Some(RowControl::Delete) => app.remove_selected(),
        None => {}
    }
}

fn handle_name_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.add_item();
        }
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(ch) if !has_command_modifier(key) => {
            let mut buffer = [0u8; 4];
            app.type_text(ch.encode_utf8(&mut buffer));
        }
        _ => {}
    }
}

fn handle_quantity_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('+') | KeyCode::Up | KeyCode::Right => app.increment_draft(),
        KeyCode::Char('-') | KeyCode::Down | KeyCode::Left => app.decrement_draft(),
        KeyCode::Enter => {
            app.add_item();
        }
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),
        KeyCode::Char('+') | KeyCode::Right => app.increment_selected(),
        KeyCode::Char('-') | KeyCode::Left => app.decrement_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.remove_selected(),
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::new();
        let mut key = press(KeyCode::Char('x'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(app.state().draft.name.is_empty());
    }

    #[test]
    fn shifted_chars_are_typed() {
        let mut app = App::new();
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('M'), KeyModifiers::SHIFT));
        assert_eq!(app.state().draft.name, "M");
    }

    #[test]
    fn alt_chars_are_not_typed() {
        let mut app = App::new();
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('m'), KeyModifiers::ALT));
        assert!(app.state().draft.name.is_empty());
    }

    #[test]
    fn paste_drops_control_chars() {
        let mut app = App::new();
        handle_paste(&mut app, "Oat\nmilk\t");
        assert_eq!(app.state().draft.name, "Oatmilk");
    }

    #[test]
    fn paste_outside_name_is_ignored() {
        let mut app = App::new();
        app.set_focus(Focus::List);
        handle_paste(&mut app, "Bread");
        assert!(app.state().draft.name.is_empty());
    }
}
