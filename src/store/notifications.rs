//! User-facing notification feed.
//!
//! The store never renders anything itself; it pushes one-line messages onto
//! a broadcast channel that UI consumers (the CLI, tests) subscribe to. Raw
//! error bodies and stack traces never pass through here — only the
//! normalized display message.

use std::fmt;

use tokio::sync::broadcast;

/// Buffered notifications per subscriber before the oldest are dropped.
const CHANNEL_CAPACITY: usize = 64;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Warning,
}

impl NotificationKind {
    /// Returns a short display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// Broadcast sender for notifications. Cheap to clone; pushing with no
/// subscriber attached is a silent no-op.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: broadcast::Sender<Notification>,
}

impl Notifier {
    /// Creates a notifier with the default buffer capacity.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Subscribes to all notifications pushed after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    /// Pushes a notification to all current subscribers.
    pub fn notify(&self, kind: NotificationKind, message: impl Into<String>) {
        let notification = Notification {
            kind,
            message: message.into(),
        };
        // A send error only means nobody is listening right now.
        let _ = self.tx.send(notification);
    }

    /// Shorthand for a success message.
    pub fn success(&self, message: impl Into<String>) {
        self.notify(NotificationKind::Success, message);
    }

    /// Shorthand for an error message.
    pub fn error(&self, message: impl Into<String>) {
        self.notify(NotificationKind::Error, message);
    }

    /// Shorthand for a warning message.
    pub fn warning(&self, message: impl Into<String>) {
        self.notify(NotificationKind::Warning, message);
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
