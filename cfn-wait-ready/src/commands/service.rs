//! CloudFormation Wait Service Layer
//!
//! This module provides the service interface used by the CLI. The service holds the
//! CloudFormation client and runs the readiness wait against it.

use crate::aws::cloudformation_client::AwsCloudFormationClient;
use crate::aws::AwsError;
use crate::commands::wait::StackReadinessWaiter;
use crate::error::WaitReadyResult;
use crate::report::Reporter;
use crate::types::{WaitOptions, WaitOutcome};
use aws_config::Region;
use aws_sdk_cloudformation::Client as CloudFormationClient;
use tokio_util::sync::CancellationToken;

/// Main service struct that holds the CloudFormation client
pub struct CloudFormationWaitService {
    client: AwsCloudFormationClient,
    options: WaitOptions,
}

impl CloudFormationWaitService {
    /// Create a new service instance for `region`
    ///
    /// Credentials come from the default AWS credential provider chain.
    ///
    /// # Errors
    ///
    /// Returns an error if the region is empty.
    pub async fn new(region: impl Into<String>) -> WaitReadyResult<Self> {
        let region = region.into();
        if region.trim().is_empty() {
            return Err(AwsError::ConfigError("region must not be empty".to_string()).into());
        }
        log::debug!("Loading AWS configuration for region {}", region);

        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(region))
            .load()
            .await;

        Ok(Self {
            client: AwsCloudFormationClient::new(CloudFormationClient::new(&config)),
            options: WaitOptions::default(),
        })
    }

    pub fn with_options(mut self, options: WaitOptions) -> Self {
        self.options = options;
        self
    }

    /// Wait for `stack_name` to be ready for an update or create.
    pub async fn wait(
        &self,
        stack_name: &str,
        reporter: &dyn Reporter,
        cancel: &CancellationToken,
    ) -> WaitReadyResult<WaitOutcome> {
        StackReadinessWaiter::new(&self.client, reporter)
            .with_options(self.options.clone())
            .wait_for_ready(stack_name, cancel)
            .await
    }
}
