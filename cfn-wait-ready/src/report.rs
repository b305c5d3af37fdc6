//! Reporting seam between the waiter and whatever presents its progress

use crate::types::Severity;
use chrono::{DateTime, Utc};

/// Receives every user-facing message produced during a wait.
///
/// The waiter only decides severity and content. Implementations own all
/// formatting, and stamp the current time when `timestamp` is `None`.
pub trait Reporter: Send + Sync {
    fn report(&self, severity: Severity, lines: &[String], timestamp: Option<DateTime<Utc>>);

    fn info(&self, line: &str) {
        self.report(Severity::Info, &[line.to_string()], None);
    }

    fn success(&self, line: &str) {
        self.report(Severity::Success, &[line.to_string()], None);
    }
}
