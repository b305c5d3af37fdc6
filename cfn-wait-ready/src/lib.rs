//! This crate provides the core logic for waiting on an AWS CloudFormation stack:
//! - Stack status classification
//! - Event-driven polling of the stack event history
//! - CloudFormation client adapter and the reporting seam used for output
//!

mod aws;
pub mod commands;
mod error;
mod report;
mod status;
mod types;

// Re-exports for a small, focused public API
pub use aws::cloudformation_client::AwsCloudFormationClient;
pub use aws::{AwsError, AwsResult, StackEventSource};
pub use commands::{CloudFormationWaitService, PollCursor, StackReadinessWaiter};
pub use error::{WaitReadyError, WaitReadyResult};
pub use report::Reporter;
pub use status::{is_ready_for_update, severity_for_status};
pub use tokio_util::sync::CancellationToken;
pub use types::{
    ChangeEvent, Severity, StackDescriptor, WaitOptions, WaitOutcome, DEFAULT_POLL_INTERVAL,
};
