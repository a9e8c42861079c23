//! Intents for the toast overlay.

use std::time::Instant;

use crate::engine::Notification;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ToastIntent {
    /// Show a notification until `expires_at`, replacing any visible toast.
    Show {
        notification: Notification,
        expires_at: Instant,
    },
    /// Clock tick. Hides the toast once its deadline has passed.
    Tick { now: Instant },
    Dismiss,
}

impl Intent for ToastIntent {}
