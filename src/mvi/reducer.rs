//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> (State, Option<Effect>)
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// One-shot output emitted next to the new state.
    ///
    /// Reducers without side output use [`std::convert::Infallible`].
    type Effect;

    /// Process an intent and return the new state plus an optional effect.
    ///
    /// This should be a pure function with no side effects; the caller
    /// decides what to do with the returned effect.
    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Option<Self::Effect>);
}
