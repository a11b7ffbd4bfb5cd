mod intent;
mod reducer;
mod state;

pub use intent::ShoppingIntent;
pub use reducer::ShoppingReducer;
pub use state::ShoppingState;

use crate::ui::mvi::Store;

/// The screen's list store: current list plus draft.
pub type ListStore = Store<ShoppingReducer>;
