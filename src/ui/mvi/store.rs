//! Serialized state container for one screen.

use std::marker::PhantomData;
use std::sync::Arc;

use tokio::sync::watch;

use super::reducer::Reducer;

/// Holds the current snapshot and applies reducer transitions one at a time.
///
/// Every mutation goes through [`Store::dispatch`], which runs the reducer
/// under the channel's write lock, so concurrent tasks never interleave a
/// read-modify-write. Subscribers are only notified when the snapshot
/// actually changed.
pub struct Store<R: Reducer> {
    state: Arc<watch::Sender<R::State>>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            _reducer: PhantomData,
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        let (state, _) = watch::channel(initial);
        Self {
            state: Arc::new(state),
            _reducer: PhantomData,
        }
    }

    /// Apply one action. Returns whether the snapshot changed.
    pub fn dispatch(&self, intent: R::Intent) -> bool {
        self.state.send_if_modified(|state| {
            let next = R::reduce(state.clone(), intent);
            if next == *state {
                return false;
            }
            *state = next;
            true
        })
    }

    /// Point-in-time copy of the current snapshot.
    pub fn state(&self) -> R::State {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.state.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mvi::{Intent, UiState};

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Counter(u32);
    impl UiState for Counter {}

    enum Step {
        Add(u32),
        Keep,
    }
    impl Intent for Step {}

    struct CounterReducer;
    impl Reducer for CounterReducer {
        type State = Counter;
        type Intent = Step;

        fn reduce(state: Counter, intent: Step) -> Counter {
            match intent {
                Step::Add(n) => Counter(state.0 + n),
                Step::Keep => state,
            }
        }
    }

    #[test]
    fn test_dispatch_reports_change() {
        let store = Store::<CounterReducer>::default();
        assert!(store.dispatch(Step::Add(2)));
        assert!(!store.dispatch(Step::Keep));
        assert_eq!(store.state(), Counter(2));
    }

    #[tokio::test]
    async fn test_subscribers_skip_no_op_updates() {
        let store = Store::<CounterReducer>::default();
        let mut rx = store.subscribe();
        store.dispatch(Step::Keep);
        assert!(!rx.has_changed().unwrap());
        store.clone().dispatch(Step::Add(1));
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), Counter(1));
    }
}
