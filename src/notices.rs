//! Outbound queue of transient notices ("toasts").
//!
//! Business logic pushes; the view layer drains and shows them. Nothing is
//! retained after a drain.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::config::NOTICE_QUEUE_CAPACITY;
use crate::models::NoticeVariant;

/// A user-visible acknowledgement or advisory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }
}

/// Bounded FIFO. When full, the oldest notice is dropped.
#[derive(Debug, Clone)]
pub struct NoticeQueue {
    buffer: VecDeque<Notice>,
    capacity: usize,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::with_capacity(NOTICE_QUEUE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, notice: Notice) {
        if self.buffer.len() >= self.capacity {
            if let Some(dropped) = self.buffer.pop_front() {
                tracing::warn!(title = %dropped.title, "Notice queue full, dropping oldest");
            }
        }
        tracing::debug!(title = %notice.title, variant = %notice.variant, "Notice queued");
        self.buffer.push_back(notice);
    }

    /// Removes and returns every queued notice, oldest first.
    pub fn drain(&mut self) -> Vec<Notice> {
        self.buffer.drain(..).collect()
    }

    pub fn peek(&self) -> impl Iterator<Item = &Notice> {
        self.buffer.iter()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for NoticeQueue {
    fn default() -> Self {
        Self::new()
    }
}
