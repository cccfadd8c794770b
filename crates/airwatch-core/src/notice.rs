//! User-visible notices
//!
//! The equivalent of a mobile alert dialog: short messages the view
//! renders after an operation succeeds or fails. Bounded so a flaky
//! backend cannot grow memory without limit.

use std::collections::VecDeque;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// One message destined for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// FIFO of notices with a fixed capacity; oldest entries are dropped
#[derive(Debug)]
pub struct NoticeQueue {
    notices: VecDeque<Notice>,
    max_size: usize,
}

impl NoticeQueue {
    pub fn new(max_size: usize) -> Self {
        Self {
            notices: VecDeque::with_capacity(max_size),
            max_size,
        }
    }

    pub fn push(&mut self, notice: Notice) {
        if self.notices.len() >= self.max_size {
            self.notices.pop_front();
        }
        self.notices.push_back(notice);
    }

    /// Most recent notice, the one a dialog-style view would show
    pub fn latest(&self) -> Option<&Notice> {
        self.notices.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
