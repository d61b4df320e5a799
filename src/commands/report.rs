//! Solution reporting
//!
//! Prints the solution line, relays it to the notification endpoint and saves it
//! to disk when asked.

use super::save::{SaveError, save_solution};
use crate::api::{Notify, NotifyError};
use crate::config::NotifyPolicy;
use crate::core::{PuzzleRecord, ResolvedDate};
use crate::output::{notification_for, print_notification_guidance, print_saved, solution_line};
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to send the solution notification")]
    Notify(#[source] NotifyError),
    #[error(transparent)]
    Save(#[from] SaveError),
    #[error("Failed to write to output")]
    Output(#[from] io::Error),
}

/// Options for a report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Directory to save the solution file in, when saving was requested
    pub save_dir: Option<PathBuf>,
    pub notify_policy: NotifyPolicy,
}

/// What happened to the notification
#[derive(Debug)]
pub enum NotificationOutcome {
    Sent,
    /// No endpoint configured
    Skipped,
    /// Best-effort delivery failed and the run carried on
    Failed(NotifyError),
}

/// Result of a report
#[derive(Debug)]
pub struct ReportOutcome {
    pub line: String,
    pub notification: NotificationOutcome,
    pub saved_to: Option<PathBuf>,
}

/// Report a fetched solution
///
/// # Errors
///
/// Returns an error if:
/// - Writing to `out` fails
/// - The notification fails while `options.notify_policy.strict` is set
/// - Saving was requested and the file cannot be written
pub fn report<W: Write>(
    out: &mut W,
    date: &ResolvedDate,
    record: &PuzzleRecord,
    notifier: Option<&dyn Notify>,
    options: &ReportOptions,
) -> Result<ReportOutcome, ReportError> {
    let line = solution_line(date, record);
    writeln!(out, "{line}")?;

    let notification = match notifier {
        Some(notifier) => match notifier.send(&notification_for(date, record)) {
            Ok(()) => NotificationOutcome::Sent,
            Err(error) if options.notify_policy.strict => return Err(ReportError::Notify(error)),
            Err(error) => {
                tracing::warn!(?error, "failed to send notification, continuing");
                NotificationOutcome::Failed(error)
            }
        },
        None => {
            print_notification_guidance(out)?;
            NotificationOutcome::Skipped
        }
    };

    let saved_to = match &options.save_dir {
        Some(dir) => {
            let path = save_solution(out, dir, date, &line)?;
            print_saved(out, &path)?;
            Some(path)
        }
        None => None,
    };

    Ok(ReportOutcome {
        line,
        notification,
        saved_to,
    })
}
