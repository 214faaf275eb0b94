//! User-facing acknowledgments
//!
//! Some actions end in a message the user must dismiss before continuing.
//! The host decides how to show it.

use tracing::info;

pub trait Notifier: Send + Sync {
    /// Show `message` and return once the user has seen it
    fn acknowledge(&self, message: &str);
}

/// Notifier that only records acknowledgments in the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn acknowledge(&self, message: &str) {
        info!(acknowledgment = message, "User acknowledgment");
    }
}
