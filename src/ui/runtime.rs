use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse, handle_paste};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use ratatui::layout::Rect;
use std::io;
use std::sync::mpsc::RecvTimeoutError;

pub fn run(config: &Config) -> io::Result<()> {
    let tick_rate = config.ui.tick_rate();
    let mut app = App::new();
    app.set_show_hints(config.ui.show_hints);
    app.subscribe(|state| {
        tracing::debug!(
            items = state.items.len(),
            checked = state.items.checked_count(),
            draft_len = state.draft.name.chars().count(),
            draft_quantity = state.draft.quantity.get(),
            "snapshot replaced"
        );
    });

    let (mut terminal, guard) = setup_terminal(config.ui.mouse)?;
    let events = EventHandler::new(tick_rate);
    tracing::info!(
        tick_ms = tick_rate.as_millis() as u64,
        mouse = config.ui.mouse,
        "screen opened"
    );

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => handle_paste(&mut app, &text),
            Ok(AppEvent::Mouse(mouse)) => {
                let size = terminal.size()?;
                handle_mouse(&mut app, mouse, Rect::new(0, 0, size.width, size.height));
            }
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "resize");
                terminal.clear()?;
            }
            Ok(AppEvent::Tick) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                tracing::warn!("event source closed");
                break;
            }
        }
    }

    drop(guard);
    tracing::info!(items = app.state().items.len(), "screen closed");
    Ok(())
}
