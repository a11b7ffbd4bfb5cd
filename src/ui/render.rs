use crate::ui::app::{App, Focus};
use crate::ui::draft_form::render_draft_form;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::item_list::render_item_list;
use crate::ui::layout::{body_regions, layout_regions};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.state();

    frame.render_widget(Header::new().widget(&state.items), header);

    frame.render_widget(Clear, body);
    let (form, list) = body_regions(body);
    render_draft_form(frame, form, &state.draft, app.focus());
    render_item_list(
        frame,
        list,
        &state.items,
        app.selection(),
        app.focus() == Focus::List,
    );

    let footer_widget = Footer::new(app.show_hints());
    frame.render_widget(footer_widget.widget(footer, app.focus()), footer);
}
