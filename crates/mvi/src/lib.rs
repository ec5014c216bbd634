//! Model-View-Intent primitives.
//!
//! A component owns a [`UiState`] value, receives [`Intent`]s from input
//! handling, and computes the next state with a pure [`Reducer`]. Rendering
//! reads the state and never mutates it.

/// Marker for state values driven by a reducer.
pub trait UiState: Clone + Default {}

/// Marker for user or system intents fed into a reducer.
pub trait Intent {}

/// Pure state transition function.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Holds the current state of one reducer-driven component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store<S> {
    state: S,
}

impl<S: UiState> Store<S> {
    pub fn new(state: S) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Run `intent` through `R` and replace the held state.
    pub fn dispatch<R>(&mut self, intent: R::Intent) -> &S
    where
        R: Reducer<State = S>,
    {
        let current = std::mem::take(&mut self.state);
        self.state = R::reduce(current, intent);
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Counter(u32);

    impl UiState for Counter {}

    enum CounterIntent {
        Bump,
        Reset,
    }

    impl Intent for CounterIntent {}

    struct CounterReducer;

    impl Reducer for CounterReducer {
        type State = Counter;
        type Intent = CounterIntent;

        fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
            match intent {
                CounterIntent::Bump => Counter(state.0 + 1),
                CounterIntent::Reset => Counter::default(),
            }
        }
    }

    #[test]
    fn dispatch_replaces_state() {
        let mut store = Store::new(Counter(1));
        store.dispatch::<CounterReducer>(CounterIntent::Bump);
        assert_eq!(store.state(), &Counter(2));
        store.dispatch::<CounterReducer>(CounterIntent::Reset);
        assert_eq!(store.state(), &Counter(0));
    }
}
