//! HTTP access to the puzzle service and the notification endpoint
//!
//! Both directions share one blocking client carrying the crate user agent and the
//! configured timeout.

pub mod fetcher;
pub mod notifier;

pub use fetcher::{FetchError, PuzzleSource, SolutionFetcher};
pub use notifier::{Notification, Notify, NotifyError, NtfyNotifier};

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT as USER_AGENT_HEADER_KEY};
use std::time::Duration;

pub const USER_AGENT: &str = concat!(
    "wordle_daily/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/example/wordle_daily)"
);

/// Build the client used for every request in a run
///
/// # Errors
/// Returns the underlying `reqwest::Error` if the TLS backend cannot be initialised.
pub fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    let mut default_headers = HeaderMap::new();
    default_headers.insert(USER_AGENT_HEADER_KEY, HeaderValue::from_static(USER_AGENT));
    Client::builder()
        .default_headers(default_headers)
        .timeout(timeout)
        .build()
}
