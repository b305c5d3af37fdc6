//! Error types for stack readiness waits.

use crate::aws::AwsError;
use thiserror::Error;

/// Errors that terminate a wait.
///
/// A stack that does not exist is never an error here: the waiter turns
/// [`AwsError::StackNotFound`] into a successful outcome before it gets this far.
#[derive(Error, Debug)]
pub enum WaitReadyError {
    /// The CloudFormation API call failed for a reason other than a missing stack.
    #[error(transparent)]
    Aws(#[from] AwsError),

    /// DescribeStacks returned the stack without a status.
    #[error("StackStatus is undefined for stack '{stack_name}'")]
    MissingStackStatus { stack_name: String },

    /// The caller cancelled the wait.
    #[error("Wait for stack readiness was cancelled")]
    Cancelled,
}

impl WaitReadyError {
    pub fn missing_stack_status(stack_name: impl Into<String>) -> Self {
        Self::MissingStackStatus {
            stack_name: stack_name.into(),
        }
    }
}

pub type WaitReadyResult<T> = Result<T, WaitReadyError>;
