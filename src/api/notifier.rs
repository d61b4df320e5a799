//! Push notifications through ntfy
//!
//! See <https://docs.ntfy.sh/publish/> for the header conventions used here.

use reqwest::blocking::Client;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Failed to send notification to {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Notification endpoint {url} answered with status {status}")]
    Rejected { url: String, status: u16 },
}

/// A single push message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub tags: String,
    pub body: String,
}

/// Delivery of a notification to some endpoint
pub trait Notify {
    /// Deliver one notification
    ///
    /// # Errors
    /// Returns `NotifyError` if the message was not accepted.
    fn send(&self, notification: &Notification) -> Result<(), NotifyError>;
}

/// Posts notifications to an ntfy topic URL
pub struct NtfyNotifier {
    url: Url,
    http_client: Client,
}

impl NtfyNotifier {
    #[must_use]
    pub const fn new(url: Url, http_client: Client) -> Self {
        Self { url, http_client }
    }
}

impl Notify for NtfyNotifier {
    fn send(&self, notification: &Notification) -> Result<(), NotifyError> {
        tracing::debug!(url = %self.url, title = %notification.title, "posting notification");

        let response = self
            .http_client
            .post(self.url.clone())
            .header("Title", notification.title.as_str())
            .header("Tags", notification.tags.as_str())
            .body(notification.body.clone().into_bytes())
            .send()
            .map_err(|source| NotifyError::Transport {
                url: self.url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Rejected {
                url: self.url.to_string(),
                status: status.as_u16(),
            });
        }

        tracing::debug!(%status, "notification accepted");
        Ok(())
    }
}
