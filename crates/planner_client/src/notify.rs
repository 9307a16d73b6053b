//! Notification capability injected into the form controller.

use tracing::{error, info};

use crate::error::{SubmissionError, SUBMISSION_FAILED_TITLE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(severity: Severity, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, title, message)
    }

    /// The one notification users see for any failed submission.
    pub fn submission_failed(err: &SubmissionError) -> Self {
        Self::error(SUBMISSION_FAILED_TITLE, err.user_message())
    }
}

pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, notification: Notification) {
        (**self).notify(notification);
    }
}

/// Sends notifications to the log. The CLI wraps it to also print them.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, notification: Notification) {
        match notification.severity {
            Severity::Info => info!(title = %notification.title, "{}", notification.message),
            Severity::Error => error!(title = %notification.title, "{}", notification.message),
        }
    }
}

#[cfg(test)]
#[path = "tests/notify_tests.rs"]
mod tests;
