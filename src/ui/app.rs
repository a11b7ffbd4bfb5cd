use crate::list::ShoppingItem;
use crate::ui::mvi::SubscriptionId;
use crate::ui::shopping::{ListStore, ShoppingIntent, ShoppingState};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum Focus {
    #[default]
    Name,
    Quantity,
    AddButton,
    List,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Name => Focus::Quantity,
            Focus::Quantity => Focus::AddButton,
            Focus::AddButton => Focus::List,
            Focus::List => Focus::Name,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Name => Focus::List,
            Focus::Quantity => Focus::Name,
            Focus::AddButton => Focus::Quantity,
            Focus::List => Focus::AddButton,
        }
    }
}

/// Screen state: the list store plus what only the view cares about.
///
/// Row actions never take a position from outside. They read the cursor and
/// check it against the current snapshot at the moment the key arrives.
pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Row cursor in the item list. Clamped after every dispatch.
    selection: usize,
    store: ListStore,
    show_hints: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::with_state(ShoppingState::default())
    }

    pub fn with_state(state: ShoppingState) -> Self {
        Self {
            should_quit: false,
            focus: Focus::default(),
            selection: 0,
            store: ListStore::new(state),
            show_hints: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn state(&self) -> &ShoppingState {
        self.store.state()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn show_hints(&self) -> bool {
        self.show_hints
    }

    pub fn set_show_hints(&mut self, show: bool) {
        self.show_hints = show;
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    /// Cursor position if it points at an item in the current snapshot.
    pub fn selected_position(&self) -> Option<usize> {
        (self.selection < self.state().items.len()).then_some(self.selection)
    }

    pub fn selected_item(&self) -> Option<&ShoppingItem> {
        self.state().items.get(self.selection)
    }

    pub fn move_selection(&mut self, direction: i32) {
        let len = self.state().items.len();
        if len == 0 {
            self.selection = 0;
            return;
        }

        let current = self.selection.min(len - 1);
        self.selection = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    /// Puts the cursor on `position`, clamped to the current snapshot.
    pub fn select(&mut self, position: usize) {
        self.selection = position.min(self.state().items.len().saturating_sub(1));
    }

    pub fn select_first(&mut self) {
        self.selection = 0;
    }

    pub fn select_last(&mut self) {
        self.selection = self.state().items.len().saturating_sub(1);
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ShoppingState) + 'static) -> SubscriptionId {
        self.store.subscribe(listener)
    }

    /// Forwards an intent to the store. Returns `true` if the snapshot changed.
    pub fn dispatch(&mut self, intent: ShoppingIntent) -> bool {
        tracing::trace!(?intent, "dispatch");
        let changed = self.store.dispatch(intent);
        self.clamp_selection();
        changed
    }

    // ========================================================================
    // Draft form
    // ========================================================================

    pub fn type_text(&mut self, text: &str) {
        self.dispatch(ShoppingIntent::AppendToDraftName {
            text: text.to_string(),
        });
    }

    pub fn backspace(&mut self) {
        self.dispatch(ShoppingIntent::PopDraftNameChar);
    }

    pub fn increment_draft(&mut self) {
        self.dispatch(ShoppingIntent::IncrementDraftQuantity);
    }

    pub fn decrement_draft(&mut self) {
        self.dispatch(ShoppingIntent::DecrementDraftQuantity);
    }

    /// Commits the draft. Returns `false` when the name is empty.
    pub fn add_item(&mut self) -> bool {
        let added = self.dispatch(ShoppingIntent::AddItem);
        if added {
            let items = &self.state().items;
            if let Some(item) = items.items().last() {
                tracing::info!(
                    name = item.name(),
                    quantity = item.quantity().get(),
                    total = items.len(),
                    "item added"
                );
            }
        } else {
            tracing::debug!("add ignored: empty name");
        }
        added
    }

    // ========================================================================
    // Row actions
    // ========================================================================

    pub fn toggle_selected(&mut self) {
        let Some(position) = self.selected_position() else {
            return;
        };
        let checked = self.state().items.items()[position].is_checked();
        self.dispatch(ShoppingIntent::SetChecked {
            position,
            checked: !checked,
        });
    }

    pub fn increment_selected(&mut self) {
        if let Some(position) = self.selected_position() {
            self.dispatch(ShoppingIntent::IncrementQuantity { position });
        }
    }

    pub fn decrement_selected(&mut self) {
        if let Some(position) = self.selected_position() {
            self.dispatch(ShoppingIntent::DecrementQuantity { position });
        }
    }

    pub fn remove_selected(&mut self) {
        let Some(position) = self.selected_position() else {
            return;
        };
        if self.dispatch(ShoppingIntent::RemoveAt { position }) {
            tracing::info!(position, remaining = self.state().items.len(), "item removed");
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.state().items.len();
        if self.selection >= len {
            self.selection = len.saturating_sub(1);
        }
    }
}
