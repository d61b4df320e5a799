//! Runtime configuration
//!
//! Built once from the environment (after `.env` is loaded) and then overridden by
//! command line flags. Everything downstream receives it as a plain value.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Environment variable holding the ntfy topic URL
pub const NTFY_URL_VAR: &str = "NTFY_URL";
/// Environment variable overriding the puzzle service base URL
pub const API_BASE_VAR: &str = "WORDLE_API_BASE";
/// Environment variable overriding the solutions directory
pub const SOLUTIONS_DIR_VAR: &str = "WORDLE_SOLUTIONS_DIR";
/// Environment variable making a missing `NTFY_URL` fatal
pub const REQUIRE_NTFY_VAR: &str = "WORDLE_REQUIRE_NTFY";
/// Environment variable making notification failures fatal
pub const STRICT_NTFY_VAR: &str = "WORDLE_STRICT_NTFY";

/// Public host of the puzzle service
pub const DEFAULT_API_BASE: &str = "https://www.nytimes.com/";
/// Directory solution files are written to
pub const DEFAULT_SOLUTIONS_DIR: &str = "solutions";
/// Generous, the service can be slow
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: '{value}'")]
    InvalidUrl {
        var: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("{var} cannot be used as a base URL: '{value}'")]
    UnusableBase { var: &'static str, value: String },
    #[error("{var} must be one of 1/0, true/false, yes/no, on/off, got '{value}'")]
    InvalidToggle { var: &'static str, value: String },
    #[error(
        "NTFY_URL is not set but notifications are required. Set it to the URL of your ntfy topic (https://docs.ntfy.sh)"
    )]
    MissingNotifyTarget,
}

/// How notification problems affect the run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotifyPolicy {
    /// A missing notification URL is a configuration error
    pub required: bool,
    /// A failed POST fails the whole run
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base: Url,
    pub timeout: Duration,
    pub notify_url: Option<Url>,
    pub notify_policy: NotifyPolicy,
    pub solutions_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL"),
            timeout: DEFAULT_TIMEOUT,
            notify_url: None,
            notify_policy: NotifyPolicy::default(),
            solutions_dir: PathBuf::from(DEFAULT_SOLUTIONS_DIR),
        }
    }
}

impl Config {
    /// Build a configuration from the process environment
    ///
    /// # Errors
    /// See [`Config::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    /// Returns `ConfigError` if a URL or toggle variable has an unusable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get(API_BASE_VAR) {
            config.api_base = parse_base_url(API_BASE_VAR, &value)?;
        }
        if let Some(value) = get(NTFY_URL_VAR) {
            config.notify_url = Some(parse_url(NTFY_URL_VAR, &value)?);
        }
        if let Some(value) = get(SOLUTIONS_DIR_VAR) {
            config.solutions_dir = PathBuf::from(value);
        }
        if let Some(value) = get(REQUIRE_NTFY_VAR) {
            config.notify_policy.required = parse_toggle(REQUIRE_NTFY_VAR, &value)?;
        }
        if let Some(value) = get(STRICT_NTFY_VAR) {
            config.notify_policy.strict = parse_toggle(STRICT_NTFY_VAR, &value)?;
        }

        Ok(config)
    }

    /// Replace the puzzle service base URL
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidUrl` if `value` is not a URL and
    /// `ConfigError::UnusableBase` if no path can be joined onto it.
    pub fn set_api_base(&mut self, value: &str) -> Result<(), ConfigError> {
        self.api_base = parse_base_url("--api-base", value)?;
        Ok(())
    }

    /// The notification URL, if notifications should be attempted
    ///
    /// # Errors
    /// Returns `ConfigError::MissingNotifyTarget` when no URL is configured and the
    /// policy requires one.
    pub fn notification_target(&self) -> Result<Option<&Url>, ConfigError> {
        match (&self.notify_url, self.notify_policy.required) {
            (None, true) => Err(ConfigError::MissingNotifyTarget),
            (url, _) => Ok(url.as_ref()),
        }
    }
}

fn parse_url(var: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value.trim()).map_err(|source| ConfigError::InvalidUrl {
        var,
        value: value.to_string(),
        source,
    })
}

/// Parse a base URL so that relative paths join underneath it
fn parse_base_url(var: &'static str, value: &str) -> Result<Url, ConfigError> {
    let mut url = parse_url(var, value)?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::UnusableBase {
            var,
            value: value.to_string(),
        });
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn parse_toggle(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidToggle {
            var,
            value: value.to_string(),
        }),
    }
}
