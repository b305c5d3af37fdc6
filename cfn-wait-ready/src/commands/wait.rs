//! Event-driven wait for a stack to become ready for an update or create

use crate::aws::{AwsError, StackEventSource};
use crate::error::{WaitReadyError, WaitReadyResult};
use crate::report::Reporter;
use crate::status::{is_ready_for_update, severity_for_status};
use crate::types::{ChangeEvent, WaitOptions, WaitOutcome};
use std::future::Future;
use tokio_util::sync::CancellationToken;

const STACK_DOES_NOT_EXIST: &str = "Stack does not exist. Safe to create.";
const STACK_NO_LONGER_EXISTS: &str = "Stack no longer exists (e.g. was deleted). Safe to create.";
const STACK_READY: &str = "Stack is ready for update.";

/// Position in a stack's event history plus the last status seen for the stack itself
///
/// Lives for a single wait. Events for nested resources move the cursor but
/// never the status.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PollCursor {
    latest_event_id: Option<String>,
    latest_status: Option<String>,
}

impl PollCursor {
    pub fn latest_event_id(&self) -> Option<&str> {
        self.latest_event_id.as_deref()
    }

    pub fn latest_status(&self) -> Option<&str> {
        self.latest_status.as_deref()
    }

    /// Keep the events of a newest-first page that are newer than the cursor,
    /// returned oldest first.
    ///
    /// When the cursor is unset or has aged out of the page, the whole page is new.
    pub fn take_new_events(&self, mut page: Vec<ChangeEvent>) -> Vec<ChangeEvent> {
        if let Some(latest_event_id) = self.latest_event_id.as_deref() {
            if let Some(index) = page
                .iter()
                .position(|event| event.event_id.as_deref() == Some(latest_event_id))
            {
                page.truncate(index);
            }
        }
        page.reverse();
        page
    }

    /// Record that `event` has been processed.
    pub fn advance(&mut self, event: &ChangeEvent, stack_name: &str) {
        if event.is_for_stack(stack_name) {
            if let Some(status) = &event.resource_status {
                self.latest_status = Some(status.clone());
            }
        }
        if let Some(event_id) = &event.event_id {
            self.latest_event_id = Some(event_id.clone());
        }
    }

    /// The stack's latest status, if it accepts a new create or update
    pub fn ready_status(&self) -> Option<&str> {
        self.latest_status()
            .filter(|status| is_ready_for_update(status))
    }
}

/// Polls a stack until it reaches a status that accepts a new create or update.
///
/// The wait has no timeout of its own. Callers bound it through the
/// [`CancellationToken`] passed to [`StackReadinessWaiter::wait_for_ready`].
pub struct StackReadinessWaiter<'a> {
    source: &'a dyn StackEventSource,
    reporter: &'a dyn Reporter,
    options: WaitOptions,
}

impl<'a> StackReadinessWaiter<'a> {
    pub fn new(source: &'a dyn StackEventSource, reporter: &'a dyn Reporter) -> Self {
        Self {
            source,
            reporter,
            options: WaitOptions::default(),
        }
    }

    pub fn with_options(mut self, options: WaitOptions) -> Self {
        self.options = options;
        self
    }

    /// Wait until `stack_name` is safe to create or update.
    ///
    /// A stack that does not exist, before or during the wait, counts as ready.
    /// Any other CloudFormation error ends the wait.
    pub async fn wait_for_ready(
        &self,
        stack_name: &str,
        cancel: &CancellationToken,
    ) -> WaitReadyResult<WaitOutcome> {
        let stack = match cancellable(cancel, self.source.describe_stack(stack_name)).await? {
            Ok(Some(stack)) => stack,
            Ok(None) | Err(AwsError::StackNotFound(_)) => {
                self.reporter.success(STACK_DOES_NOT_EXIST);
                return Ok(WaitOutcome::DoesNotExist);
            }
            Err(e) => return Err(e.into()),
        };

        let status = stack
            .status
            .filter(|status| !status.is_empty())
            .ok_or_else(|| WaitReadyError::missing_stack_status(stack_name))?;

        if is_ready_for_update(&status) {
            self.reporter.success(STACK_READY);
            return Ok(WaitOutcome::Ready { status });
        }
        log::debug!("Stack '{}' is {}, polling its events", stack_name, status);

        let mut cursor = PollCursor::default();
        loop {
            let page =
                match cancellable(cancel, self.source.describe_stack_events(stack_name)).await? {
                    Ok(page) => page,
                    Err(AwsError::StackNotFound(_)) => {
                        self.reporter.success(STACK_NO_LONGER_EXISTS);
                        return Ok(WaitOutcome::Deleted);
                    }
                    Err(e) => return Err(e.into()),
                };

            let events = cursor.take_new_events(page);
            log::debug!("Processing {} new events for stack '{}'", events.len(), stack_name);
            for event in &events {
                self.report_event(event);
                cursor.advance(event, stack_name);
            }
            log::trace!(
                "Cursor at {:?}, latest stack status {:?}",
                cursor.latest_event_id(),
                cursor.latest_status()
            );

            if let Some(status) = cursor.ready_status() {
                self.reporter.success(STACK_READY);
                return Ok(WaitOutcome::Ready {
                    status: status.to_string(),
                });
            }

            self.reporter.info(&format!(
                "Stack not yet ready. Waiting {} seconds...",
                self.options.poll_interval.as_secs()
            ));
            cancellable(cancel, tokio::time::sleep(self.options.poll_interval)).await?;
        }
    }

    fn report_event(&self, event: &ChangeEvent) {
        self.reporter.report(
            severity_for_status(event.status_or_unknown()),
            &event.report_lines(),
            event.timestamp,
        );
    }
}

/// Run `future` unless `cancel` fires first.
async fn cancellable<F: Future>(
    cancel: &CancellationToken,
    future: F,
) -> WaitReadyResult<F::Output> {
    tokio::select! {
        biased;
        () = cancel.cancelled() => Err(WaitReadyError::Cancelled),
        output = future => Ok(output),
    }
}
