//! User-facing notices.
//!
//! Operations that would pop a message box in a desktop shell instead queue
//! a [`Report`] on the session. The frontend drains the queue each frame and
//! shows the messages however it likes; the session never blocks on
//! acknowledgement.

/// Severity of a queued message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub severity: Severity,
    pub message: String,
}

impl Report {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}
