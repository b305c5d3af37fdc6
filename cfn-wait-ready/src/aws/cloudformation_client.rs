//! AWS CloudFormation client wrapper for stack and stack event reads

use crate::aws::{AwsError, AwsResult, StackEventSource};
use crate::types::{ChangeEvent, StackDescriptor};
use async_trait::async_trait;
use aws_sdk_cloudformation::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_cloudformation::primitives::DateTime as SmithyDateTime;
use aws_sdk_cloudformation::types::{Stack, StackEvent};
use aws_sdk_cloudformation::Client as CloudFormationClient;
use chrono::{DateTime, Utc};

/// Error code CloudFormation returns for a stack name that does not exist
const STACK_NOT_FOUND_CODE: &str = "ValidationError";

pub struct AwsCloudFormationClient {
    client: CloudFormationClient,
}

impl AwsCloudFormationClient {
    pub fn new(client: CloudFormationClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StackEventSource for AwsCloudFormationClient {
    async fn describe_stack(&self, stack_name: &str) -> AwsResult<Option<StackDescriptor>> {
        let response = self
            .client
            .describe_stacks()
            .stack_name(stack_name)
            .send()
            .await
            .map_err(|e| map_sdk_error(stack_name, "describe stacks", e))?;

        Ok(response.stacks().first().map(to_stack_descriptor))
    }

    async fn describe_stack_events(&self, stack_name: &str) -> AwsResult<Vec<ChangeEvent>> {
        let response = self
            .client
            .describe_stack_events()
            .stack_name(stack_name)
            .send()
            .await
            .map_err(|e| map_sdk_error(stack_name, "describe stack events", e))?;

        Ok(response.stack_events().iter().map(to_change_event).collect())
    }
}

fn map_sdk_error<E, R>(stack_name: &str, operation: &str, error: SdkError<E, R>) -> AwsError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    if error.code() == Some(STACK_NOT_FOUND_CODE) {
        log::debug!(
            "Treating {} error for stack '{}' as missing stack: {}",
            STACK_NOT_FOUND_CODE,
            stack_name,
            error.message().unwrap_or_default()
        );
        return AwsError::StackNotFound(stack_name.to_string());
    }
    AwsError::CloudFormationError(format!(
        "Failed to {operation} for stack '{stack_name}': {}",
        DisplayErrorContext(&error)
    ))
}

fn to_stack_descriptor(stack: &Stack) -> StackDescriptor {
    StackDescriptor {
        stack_name: stack.stack_name().unwrap_or_default().to_string(),
        status: stack.stack_status().map(|s| s.as_str().to_string()),
    }
}

fn to_change_event(event: &StackEvent) -> ChangeEvent {
    ChangeEvent {
        event_id: event.event_id().map(str::to_string),
        logical_resource_id: event.logical_resource_id().map(str::to_string),
        resource_status: event.resource_status().map(|s| s.as_str().to_string()),
        reason: event.resource_status_reason().map(str::to_string),
        resource_type: event.resource_type().map(str::to_string),
        timestamp: event.timestamp().and_then(to_chrono),
    }
}

/// Convert an SDK timestamp, dropping values chrono cannot represent
fn to_chrono(value: &SmithyDateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(value.secs(), value.subsec_nanos())
}
