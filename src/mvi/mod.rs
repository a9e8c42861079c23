//! Model-View-Intent (MVI) architecture primitives.
//!
//! The calculator engine and the toast overlay are both built on these
//! traits: every key press becomes an intent, a reducer turns
//! `(state, intent)` into the next state, and the view renders that state.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑          │                   │
//!    │          └──→ Effect ──→ Toast
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Effect**: Optional one-shot output of a transition (e.g. a notification)

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
