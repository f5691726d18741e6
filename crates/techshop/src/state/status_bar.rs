//! Status Bar State

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Kind of status message (determines icon and color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Operation completed
    Success,
    /// Operation refused (e.g. checkout with an empty cart)
    Warning,
    /// Informational message
    Info,
}

impl StatusKind {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Warning => "⚠️",
            Self::Info => "ℹ️",
        }
    }
}

/// A single status message with metadata
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub timestamp: DateTime<Local>,
    pub kind: StatusKind,
    pub message: String,
    /// The action that triggered this message
    pub source_action: String,
}

impl StatusMessage {
    pub fn new(
        kind: StatusKind,
        message: impl Into<String>,
        source_action: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Local::now(),
            kind,
            message: message.into(),
            source_action: source_action.into(),
        }
    }
}

/// Status bar state - bounded history of messages
#[derive(Debug, Clone)]
pub struct StatusBarState {
    /// Message history (newest at back)
    pub messages: VecDeque<StatusMessage>,
    pub max_history: usize,
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self {
            messages: VecDeque::new(),
            max_history: 100,
        }
    }
}

impl StatusBarState {
    pub fn latest(&self) -> Option<&StatusMessage> {
        self.messages.back()
    }

    /// Push a new message, trimming the oldest if over the limit
    pub fn push(&mut self, message: StatusMessage) {
        self.messages.push_back(message);
        if self.messages.len() > self.max_history {
            self.messages.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_is_bounded() {
        let mut state = StatusBarState {
            max_history: 2,
            ..Default::default()
        };
        for i in 0..3 {
            state.push(StatusMessage::new(StatusKind::Info, format!("msg {i}"), "test"));
        }
        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.messages.front().unwrap().message, "msg 1");
        assert_eq!(state.latest().unwrap().message, "msg 2");
    }
}
