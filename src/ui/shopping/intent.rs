use crate::list::Quantity;
use crate::ui::mvi::Intent;

/// Positions index the snapshot that was on screen when the intent was built.
#[derive(Debug, Clone, PartialEq)]
pub enum ShoppingIntent {
    SetDraftName { name: String },
    AppendToDraftName { text: String },
    PopDraftNameChar,
    IncrementDraftQuantity,
    /// No-op when the draft quantity is already 1.
    DecrementDraftQuantity,
    /// Commit the draft. No-op when the draft name is empty.
    AddItem,
    SetQuantity { position: usize, quantity: Quantity },
    IncrementQuantity { position: usize },
    /// No-op when the item quantity is already 1.
    DecrementQuantity { position: usize },
    SetChecked { position: usize, checked: bool },
    RemoveAt { position: usize },
}

impl Intent for ShoppingIntent {}
