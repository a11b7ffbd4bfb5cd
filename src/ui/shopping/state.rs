use crate::list::{Draft, ShoppingList};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShoppingState {
    pub items: ShoppingList,
    /// Entry form contents, reset to ("", 1) after a successful add.
    pub draft: Draft,
}

impl UiState for ShoppingState {}
