//! Single-slot status messaging.

use std::time::{Duration, Instant};

/// Message classes shown in the status slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageClass {
    Info,
    Success,
    Error,
}

/// One status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub class: MessageClass,
    pub text: String,
}

/// The single UI slot status messages are shown in.
///
/// Non-success messages auto-dismiss after the configured timeout;
/// success messages persist until something replaces or clears them.
pub struct StatusSlot {
    timeout: Duration,
    current: Option<(StatusMessage, Option<Instant>)>,
}

impl StatusSlot {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            current: None,
        }
    }

    /// Show a message, replacing whatever was in the slot.
    pub fn show(&mut self, class: MessageClass, text: impl Into<String>) {
        let deadline = match class {
            MessageClass::Success => None,
            _ => Some(Instant::now() + self.timeout),
        };
        self.current = Some((
            StatusMessage {
                class,
                text: text.into(),
            },
            deadline,
        ));
    }

    /// The currently visible message, if it has not expired.
    pub fn current(&self) -> Option<&StatusMessage> {
        let (msg, deadline) = self.current.as_ref()?;
        if let Some(deadline) = deadline {
            if Instant::now() >= *deadline {
                return None;
            }
        }
        Some(msg)
    }

    /// Empty the slot.
    pub fn clear(&mut self) {
        self.current = None;
    }
}
