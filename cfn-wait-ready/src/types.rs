//! Data types shared by the waiter, the CloudFormation adapter and reporters

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Interval between two reads of the stack event history.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// The parts of a DescribeStacks result the waiter needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackDescriptor {
    pub stack_name: String,
    pub status: Option<String>,
}

/// One entry of a stack's event history
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeEvent {
    pub event_id: Option<String>,
    pub logical_resource_id: Option<String>,
    pub resource_status: Option<String>,
    pub reason: Option<String>,
    pub resource_type: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl ChangeEvent {
    /// Whether this event describes the stack itself rather than a resource inside it.
    pub fn is_for_stack(&self, stack_name: &str) -> bool {
        self.logical_resource_id.as_deref() == Some(stack_name)
    }

    /// Status of the event, or a placeholder when CloudFormation omitted it
    pub fn status_or_unknown(&self) -> &str {
        self.resource_status.as_deref().unwrap_or("Unknown Status")
    }

    /// The two lines printed for this event: status with optional reason,
    /// then logical id with resource type.
    pub fn report_lines(&self) -> Vec<String> {
        let reason_suffix = match self.reason.as_deref() {
            Some(reason) if !reason.is_empty() => format!(" ({reason})"),
            _ => String::new(),
        };
        let logical_resource_id = self
            .logical_resource_id
            .as_deref()
            .unwrap_or("Unknown Logical ID");
        let resource_type = self.resource_type.as_deref().unwrap_or("Unknown Type");

        vec![
            format!("{}{}", self.status_or_unknown(), reason_suffix),
            format!("{logical_resource_id} ({resource_type})"),
        ]
    }
}

/// Severity tag attached to every report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// How a successful wait ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The stack did not exist when the wait started.
    DoesNotExist,
    /// The stack disappeared while its events were being polled.
    Deleted,
    /// The stack reached a status that accepts a new create or update.
    Ready { status: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitOptions {
    pub poll_interval: Duration,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}
