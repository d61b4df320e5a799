//! Puzzle download
//!
//! One GET per run against `<base>svc/wordle/v2/<YYYY-MM-DD>.json`. Anything but a
//! 200 is terminal; there are no retries.

use crate::core::{DataFormatError, PuzzleRecord, ResolvedDate};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("There was a {status} error when getting the data from the Wordle API: {body}")]
    Upstream { status: u16, body: String },
    #[error("Failed to reach the Wordle API at {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error(transparent)]
    DataFormat(#[from] DataFormatError),
    #[error("Cannot build a puzzle URL for {0}")]
    InvalidUrl(String),
}

/// Anything that can produce the puzzle for a date
pub trait PuzzleSource {
    /// Fetch the puzzle for `date`
    ///
    /// # Errors
    /// Returns `FetchError` if the puzzle cannot be obtained or decoded.
    fn fetch(&self, date: &ResolvedDate) -> Result<PuzzleRecord, FetchError>;
}

/// Fetches puzzles from the Wordle web service
pub struct SolutionFetcher {
    api_base: Url,
    http_client: Client,
}

impl SolutionFetcher {
    #[must_use]
    pub const fn new(api_base: Url, http_client: Client) -> Self {
        Self {
            api_base,
            http_client,
        }
    }

    /// The URL a date's puzzle is served from
    ///
    /// # Errors
    /// Returns `FetchError::InvalidUrl` if the base cannot have a path joined to it.
    pub fn puzzle_url(&self, date: &ResolvedDate) -> Result<Url, FetchError> {
        puzzle_url(&self.api_base, date)
    }
}

impl PuzzleSource for SolutionFetcher {
    fn fetch(&self, date: &ResolvedDate) -> Result<PuzzleRecord, FetchError> {
        let url = self.puzzle_url(date)?;
        tracing::debug!(%url, "fetching puzzle");

        let transport = |source: reqwest::Error| FetchError::Transport {
            url: url.to_string(),
            source,
        };
        let response = self
            .http_client
            .get(url.clone())
            .send()
            .map_err(transport)?;
        let status = response.status();
        let body = match response.text() {
            Ok(body) => body,
            // The status alone is enough to report a failed response
            Err(error) if status != StatusCode::OK => {
                tracing::debug!(?error, %status, "failed to read error response body");
                String::new()
            }
            Err(error) => return Err(transport(error)),
        };
        tracing::debug!(%status, bytes = body.len(), "puzzle response");

        let record = decode_response(status, &body)?;
        warn_on_print_date_mismatch(date, &record);
        Ok(record)
    }
}

/// Join the date's path onto the service base
///
/// # Errors
/// Returns `FetchError::InvalidUrl` if the join fails.
pub fn puzzle_url(api_base: &Url, date: &ResolvedDate) -> Result<Url, FetchError> {
    api_base
        .join(&format!("svc/wordle/v2/{}.json", date.iso()))
        .map_err(|_| FetchError::InvalidUrl(api_base.to_string()))
}

/// Turn a status and body into a puzzle
///
/// Only exactly 200 counts as success. Every other status is reported the same
/// way, whether it means an unreleased date or an outage.
///
/// # Errors
/// Returns `FetchError::Upstream` for non-200 statuses and `FetchError::DataFormat`
/// if a 200 body does not hold a puzzle.
pub fn decode_response(status: StatusCode, body: &str) -> Result<PuzzleRecord, FetchError> {
    if status != StatusCode::OK {
        return Err(FetchError::Upstream {
            status: status.as_u16(),
            body: body.trim().to_string(),
        });
    }
    Ok(PuzzleRecord::from_json(body)?)
}

fn warn_on_print_date_mismatch(date: &ResolvedDate, record: &PuzzleRecord) {
    let requested = date.iso();
    if let Some(print_date) = record.print_date.as_deref() {
        if print_date != requested {
            tracing::warn!(%requested, %print_date, "puzzle print date differs from requested date");
        }
    }
}
