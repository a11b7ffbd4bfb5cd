//! Model-View-Intent (MVI) primitives for the list screen.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of everything the screen renders
//! - **Intent**: a user action
//! - **Reducer**: pure `(State, Intent) -> State`
//! - **Store**: holds the current snapshot and notifies subscribers when a
//!   dispatch replaces it

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::{Store, SubscriptionId};
