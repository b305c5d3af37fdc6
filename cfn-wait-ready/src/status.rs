//! CloudFormation status classification

use crate::types::Severity;

const FAILED_SUFFIX: &str = "_FAILED";
const ROLLBACK_COMPLETE_SUFFIX: &str = "_ROLLBACK_COMPLETE";
const COMPLETE_SUFFIX: &str = "_COMPLETE";

/// Whether a stack in `status` can accept a new create or update.
///
/// Terminal statuses end in `_FAILED`, `_ROLLBACK_COMPLETE` or `_COMPLETE`.
/// Everything else, including the empty string, is treated as in progress.
pub fn is_ready_for_update(status: &str) -> bool {
    status.ends_with(FAILED_SUFFIX)
        || status.ends_with(ROLLBACK_COMPLETE_SUFFIX)
        || status.ends_with(COMPLETE_SUFFIX)
}

/// Severity used when reporting a resource event with this status.
pub fn severity_for_status(status: &str) -> Severity {
    if status.ends_with(FAILED_SUFFIX) {
        Severity::Error
    } else if status.ends_with(COMPLETE_SUFFIX) {
        Severity::Success
    } else {
        Severity::Info
    }
}
