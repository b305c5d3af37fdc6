//! AWS SDK integration: the stack event source seam and its CloudFormation client.

pub(crate) mod cloudformation_client;

use crate::types::{ChangeEvent, StackDescriptor};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AwsError {
    #[error("Stack not found: {0}")]
    StackNotFound(String),
    #[error("AWS configuration error: {0}")]
    ConfigError(String),
    #[error("CloudFormation error: {0}")]
    CloudFormationError(String),
}

pub type AwsResult<T> = Result<T, AwsError>;

/// Read access to a stack's description and event history
///
/// Both calls report a stack that does not exist as [`AwsError::StackNotFound`].
#[async_trait]
pub trait StackEventSource: Send + Sync {
    /// Describe the stack, or `None` when the response lists no stack.
    async fn describe_stack(&self, stack_name: &str) -> AwsResult<Option<StackDescriptor>>;

    /// One page of the stack's events, newest first.
    async fn describe_stack_events(&self, stack_name: &str) -> AwsResult<Vec<ChangeEvent>>;
}
