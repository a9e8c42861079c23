use crate::config::{Config, KeypadLayout};
use crate::engine::{CalcIntent, CalculatorReducer, CalculatorState, Notification};
use crate::mvi::Reducer;
use crate::ui::keypad::Keypad;
use crate::ui::layout::{keypad_rect, toast_rect};
use crate::ui::toast::{ToastIntent, ToastReducer, ToastState};
use ratatui::layout::{Position, Rect};
use std::time::{Duration, Instant};

/// Generic MVI dispatch: takes current state, runs reducer, stores result
/// and yields the reducer's effect.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {{
        let (state, effect) = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
        $self.$field = state;
        effect
    }};
}

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    layout: KeypadLayout,
    keypad: Keypad,
    /// Calculator engine state (MVI pattern).
    calculator: CalculatorState,
    /// Toast overlay state (MVI pattern).
    toast: ToastState,
    toast_duration: Duration,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let layout = config.display.layout;
        Self {
            should_quit: false,
            size: None,
            layout,
            keypad: Keypad::for_layout(layout),
            calculator: CalculatorState::default(),
            toast: ToastState::default(),
            toast_duration: config.notifications.duration(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn calculator(&self) -> &CalculatorState {
        &self.calculator
    }

    pub fn toast(&self) -> &ToastState {
        &self.toast
    }

    pub fn layout(&self) -> KeypadLayout {
        self.layout
    }

    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Run one key press through the engine and surface its notification.
    pub fn dispatch(&mut self, intent: CalcIntent) {
        self.dispatch_at(intent, Instant::now());
    }

    pub fn dispatch_at(&mut self, intent: CalcIntent, now: Instant) {
        tracing::debug!(?intent, "calculator intent");
        let notification = dispatch_mvi!(self, calculator, CalculatorReducer, intent);
        if let Some(notification) = notification {
            tracing::warn!(message = %notification.message, ?intent, "calculation failed");
            self.notify_at(notification, now);
        }
    }

    pub fn notify_at(&mut self, notification: Notification, now: Instant) {
        let expires_at = now + self.toast_duration;
        // Toast reducer has no effect output.
        let _ = dispatch_mvi!(
            self,
            toast,
            ToastReducer,
            ToastIntent::Show {
                notification,
                expires_at,
            }
        );
    }

    pub fn on_tick(&mut self, now: Instant) {
        let _ = dispatch_mvi!(self, toast, ToastReducer, ToastIntent::Tick { now });
    }

    pub fn dismiss_toast(&mut self) {
        let _ = dispatch_mvi!(self, toast, ToastReducer, ToastIntent::Dismiss);
    }

    /// Switch between the basic and scientific keypads.
    ///
    /// Calculator state is kept; only the available keys change.
    pub fn toggle_layout(&mut self, now: Instant) {
        self.layout = self.layout.toggled();
        self.keypad = Keypad::for_layout(self.layout);
        tracing::info!(layout = self.layout.display_name(), "keypad layout changed");
        let message = format!("{} layout", self.layout.display_name());
        self.notify_at(Notification::info(message), now);
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Where the visible toast sits inside `area`, if any.
    pub fn toast_area(&self, area: Rect) -> Option<Rect> {
        let notification = self.toast.notification()?;
        let width = u16::try_from(notification.message.chars().count()).unwrap_or(u16::MAX);
        Some(toast_rect(area, width))
    }

    /// Left click at terminal cell (`column`, `row`).
    ///
    /// A click on the toast dismisses it; otherwise the keypad button under
    /// the cursor is pressed. Returns true when the click hit either.
    pub fn on_click(&mut self, column: u16, row: u16) -> bool {
        let Some((cols, rows)) = self.size else {
            return false;
        };
        let screen = Rect::new(0, 0, cols, rows);
        if let Some(toast) = self.toast_area(screen) {
            if toast.contains(Position::new(column, row)) {
                self.dismiss_toast();
                return true;
            }
        }

        let area = keypad_rect(screen);
        match self.keypad.button_at(area, column, row) {
            Some(button) => {
                self.dispatch(button.intent);
                true
            }
            None => false,
        }
    }
}
