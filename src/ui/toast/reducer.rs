//! Reducer for the toast overlay.

use std::convert::Infallible;

use crate::mvi::Reducer;

use super::intent::ToastIntent;
use super::state::ToastState;

/// Timed visibility: a toast appears on `Show` and disappears on the first
/// `Tick` at or after its deadline. A newer toast replaces an older one and
/// restarts the timer, so overlapping notifications never stack.
pub struct ToastReducer;

impl Reducer for ToastReducer {
    type State = ToastState;
    type Intent = ToastIntent;
    type Effect = Infallible;

    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Option<Infallible>) {
        let next = match intent {
            ToastIntent::Show {
                notification,
                expires_at,
            } => ToastState::Visible {
                notification,
                expires_at,
            },
            ToastIntent::Tick { now } => match state {
                ToastState::Visible { expires_at, .. } if now >= expires_at => ToastState::Hidden,
                other => other,
            },
            ToastIntent::Dismiss => ToastState::Hidden,
        };
        (next, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Notification;
    use std::time::{Duration, Instant};

    #[test]
    fn tick_on_hidden_is_noop() {
        let (state, _) = ToastReducer::reduce(
            ToastState::Hidden,
            ToastIntent::Tick {
                now: Instant::now(),
            },
        );
        assert_eq!(state, ToastState::Hidden);
    }

    #[test]
    fn tick_before_deadline_keeps_toast() {
        let start = Instant::now();
        let (state, _) = ToastReducer::reduce(
            ToastState::Hidden,
            ToastIntent::Show {
                notification: Notification::info("Scientific layout"),
                expires_at: start + Duration::from_millis(2500),
            },
        );
        let (state, _) = ToastReducer::reduce(
            state,
            ToastIntent::Tick {
                now: start + Duration::from_millis(2499),
            },
        );
        assert!(state.is_visible());
    }
}
