//! Notification boundary.
//!
//! Gateway logic MUST NOT know how notifications are presented.
//! All user-facing messages flow through [`Notification`] and
//! [`NotifySink`]; the embedding presentation layer decides rendering.

use std::{cell::RefCell, fmt};

///
/// NotifyKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[remain::sorted]
pub enum NotifyKind {
    Error,
    Success,
}

impl fmt::Display for NotifyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Error => "error",
            Self::Success => "success",
        };
        write!(f, "{label}")
    }
}

///
/// Notification
///
/// One user-facing event emitted by a mutation.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notification {
    pub kind: NotifyKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotifyKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotifyKind::Error,
            message: message.into(),
        }
    }
}

///
/// NotifySink
///

pub trait NotifySink {
    fn notify(&self, notification: Notification);
}

///
/// NullSink
/// Discards every notification.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl NotifySink for NullSink {
    fn notify(&self, _notification: Notification) {}
}

///
/// MemorySink
///
/// Records notifications in order. Used by tests and by embedders that
/// drain messages into their own toast queue.
///

#[derive(Debug, Default)]
pub struct MemorySink {
    seen: RefCell<Vec<Notification>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain everything recorded so far.
    #[must_use]
    pub fn take(&self) -> Vec<Notification> {
        self.seen.take()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.borrow().is_empty()
    }

    /// Most recent notification, cloned out.
    #[must_use]
    pub fn last(&self) -> Option<Notification> {
        self.seen.borrow().last().cloned()
    }
}

impl NotifySink for MemorySink {
    fn notify(&self, notification: Notification) {
        self.seen.borrow_mut().push(notification);
    }
}
