//! Base trait for intents.

/// Marker trait for intent objects.
///
/// An intent describes one user action (a key press on a row, a character
/// typed into the draft) and is handed to a reducer to produce the next state.
pub trait Intent: std::fmt::Debug + Send + 'static {}
