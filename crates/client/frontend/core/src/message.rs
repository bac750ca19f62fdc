//! Shared message log primitives for CLI and future UIs.
use std::collections::VecDeque;

use game_core::{Narration, Turn};

/// Severity level for UI messages.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// Snapshot of a single message entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    pub turn: Option<Turn>,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, turn: Option<Turn>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            turn,
            level,
        }
    }
}

/// Circular buffer of messages displayed to the player.
///
/// Narration is pulled incrementally: the log remembers how many narration
/// lines it has already copied, so [`MessageLog::sync`] can be called after
/// every step without duplicating entries.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
    cursor: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
            cursor: 0,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn push_text(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, None, MessageLevel::Info));
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, None, MessageLevel::Error));
    }

    /// Copies narration lines added since the previous sync. Returns how many.
    pub fn sync(&mut self, narration: &Narration) -> usize {
        let fresh = narration.since(self.cursor);
        for line in fresh {
            self.push(MessageEntry::new(
                line.text.clone(),
                Some(line.turn),
                MessageLevel::Info,
            ));
        }
        self.cursor = narration.len();
        fresh.len()
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
