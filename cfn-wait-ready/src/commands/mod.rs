//! Commands module - service layer for CloudFormation wait operations

pub(crate) mod service;
mod wait;

pub use service::CloudFormationWaitService;
pub use wait::{PollCursor, StackReadinessWaiter};
