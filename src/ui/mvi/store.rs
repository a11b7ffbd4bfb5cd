//! Single-writer state container.

use super::reducer::Reducer;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener<S> = Box<dyn FnMut(&S)>;

/// Owns the current snapshot for one reducer.
///
/// `dispatch` runs the reducer and swaps in the result in one step, so no
/// reader ever sees a half-applied update. Subscribers run after the swap,
/// and only when the snapshot actually changed.
pub struct Store<R: Reducer> {
    state: R::State,
    listeners: Vec<(SubscriptionId, Listener<R::State>)>,
    next_id: u64,
}

impl<R: Reducer> Store<R> {
    pub fn new(state: R::State) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Applies `intent`. Returns `true` if the snapshot was replaced.
    pub fn dispatch(&mut self, intent: R::Intent) -> bool {
        let next = R::reduce(self.state.clone(), intent);
        if next == self.state {
            return false;
        }
        self.state = next;
        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
        true
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&R::State) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}
