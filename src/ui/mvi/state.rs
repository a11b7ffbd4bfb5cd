//! Base trait for UI state.

/// Marker trait for state snapshots.
///
/// States are replaced wholesale on every transition (`Clone`), carry all
/// data needed to render (`Default` is the freshly opened screen), and are
/// compared with `PartialEq` so a no-op intent can be detected.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
