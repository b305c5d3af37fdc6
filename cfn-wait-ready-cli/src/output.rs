//! Terminal presentation of wait progress: colored, timestamped banners

use cfn_wait_ready::{Reporter, Severity};
use chrono::{DateTime, SecondsFormat, Utc};
use colored::Colorize;

/// Writes every report to stdout as a timestamp banner colored by severity.
pub struct TerminalReporter;

impl Reporter for TerminalReporter {
    fn report(&self, severity: Severity, lines: &[String], timestamp: Option<DateTime<Utc>>) {
        let timestamp = timestamp.unwrap_or_else(Utc::now);
        for line in format_banner(lines, timestamp) {
            let line = match severity {
                Severity::Success => line.green(),
                Severity::Error => line.red(),
                Severity::Info => line.blue(),
            };
            println!("{line}");
        }
    }
}

/// Lay out `lines` behind a timestamp gutter.
///
/// A single line is bracketed with `[`; several lines are joined by a
/// `⎡ | ⎣` bracket with continuation lines aligned under the first.
pub(crate) fn format_banner(lines: &[String], timestamp: DateTime<Utc>) -> Vec<String> {
    let Some((first, rest)) = lines.split_first() else {
        return Vec::new();
    };

    let prefix = format!(
        "| {} ",
        timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    );
    let padding = " ".repeat(prefix.chars().count() - 1);
    let opening = if rest.is_empty() { '[' } else { '⎡' };

    let mut banner = Vec::with_capacity(lines.len());
    banner.push(format!("{prefix}{opening} {first}"));
    if let Some((last, middle)) = rest.split_last() {
        for line in middle {
            banner.push(format!("|{padding}| {line}"));
        }
        banner.push(format!("|{padding}⎣ {last}"));
    }
    banner
}
