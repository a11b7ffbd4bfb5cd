use crate::list::{AddOutcome, Draft, Quantity, ShoppingList};
use crate::ui::mvi::Reducer;
use crate::ui::shopping::intent::ShoppingIntent;
use crate::ui::shopping::state::ShoppingState;

pub struct ShoppingReducer;

impl Reducer for ShoppingReducer {
    type State = ShoppingState;
    type Intent = ShoppingIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let ShoppingState { items, draft } = state;
        match intent {
            ShoppingIntent::SetDraftName { name } => ShoppingState {
                draft: draft.with_name(name),
                items,
            },
            ShoppingIntent::AppendToDraftName { text } => ShoppingState {
                draft: draft.push_str(&text),
                items,
            },
            ShoppingIntent::PopDraftNameChar => ShoppingState {
                draft: draft.pop_char(),
                items,
            },
            ShoppingIntent::IncrementDraftQuantity => ShoppingState {
                draft: draft.increment_quantity(),
                items,
            },
            ShoppingIntent::DecrementDraftQuantity => ShoppingState {
                draft: draft.decrement_quantity(),
                items,
            },
            ShoppingIntent::AddItem => match items.add_item(&draft.name, draft.quantity) {
                AddOutcome::Appended(items) => ShoppingState {
                    items,
                    draft: Draft::default(),
                },
                AddOutcome::EmptyName => ShoppingState { items, draft },
            },
            ShoppingIntent::SetQuantity { position, quantity } => ShoppingState {
                items: items.set_quantity(position, quantity),
                draft,
            },
            ShoppingIntent::IncrementQuantity { position } => {
                let raised = items
                    .get(position)
                    .map(|item| item.quantity().increment());
                ShoppingState {
                    items: replace_quantity(items, position, raised),
                    draft,
                }
            }
            ShoppingIntent::DecrementQuantity { position } => {
                let lowered = items
                    .get(position)
                    .and_then(|item| item.quantity().decrement());
                ShoppingState {
                    items: replace_quantity(items, position, lowered),
                    draft,
                }
            }
            ShoppingIntent::SetChecked { position, checked } => ShoppingState {
                items: items.set_checked(position, checked),
                draft,
            },
            ShoppingIntent::RemoveAt { position } => ShoppingState {
                items: items.remove_at(position),
                draft,
            },
        }
    }
}

fn replace_quantity(
    items: ShoppingList,
    position: usize,
    quantity: Option<Quantity>,
) -> ShoppingList {
    match quantity {
        Some(quantity) => items.set_quantity(position, quantity),
        None => items,
    }
}
