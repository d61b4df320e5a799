//! One complete run: fetch the day's puzzle and report it

use super::report::{ReportError, ReportOptions, ReportOutcome, report};
use crate::api::{FetchError, Notify, PuzzleSource};
use crate::core::ResolvedDate;
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DailyError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Fetch the solution for `date` and report it
///
/// # Errors
///
/// Returns an error if the puzzle cannot be fetched or the report fails.
pub fn run_daily<W: Write>(
    out: &mut W,
    source: &dyn PuzzleSource,
    notifier: Option<&dyn Notify>,
    date: &ResolvedDate,
    options: &ReportOptions,
) -> Result<ReportOutcome, DailyError> {
    let record = source.fetch(date)?;
    tracing::info!(date = %date, id = ?record.id, "fetched puzzle");

    Ok(report(out, date, &record, notifier, options)?)
}
