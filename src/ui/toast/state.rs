//! State for the toast overlay.

use std::time::Instant;

use crate::engine::Notification;
use crate::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ToastState {
    #[default]
    Hidden,
    Visible {
        notification: Notification,
        expires_at: Instant,
    },
}

impl UiState for ToastState {}

impl ToastState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn notification(&self) -> Option<&Notification> {
        match self {
            Self::Visible { notification, .. } => Some(notification),
            Self::Hidden => None,
        }
    }
}
