//! Support for library configuration options

use std::env::VarError;
use std::str::FromStr;

use once_cell::sync::Lazy;
use url::Url;

use crate::error::ConfigError;

/// Where the remote collection lives, unless told otherwise
pub static DEFAULT_API_URL: Lazy<Url> = Lazy::new(|| {
    Url::parse("http://localhost:3000/events").unwrap(/* this cannot panic since this is a valid hard-coded URL */)
});

/// Environment variable that overrides [`DEFAULT_API_URL`]
pub const API_URL_VAR: &str = "EVENTLIST_API";
/// Environment variable that selects the [`FailurePolicy`]
pub const FAILURE_POLICY_VAR: &str = "EVENTLIST_FAILURE_POLICY";


/// What the coordinator does with its local state after a remote call failed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Apply the local change anyway.
    ///
    /// A failed delete still removes the row, a failed edit still shows the edited values,
    /// a failed add still clears and hides the input form.
    /// The local list may then diverge from the remote collection until the next refresh.
    Mirror,
    /// Leave the local state untouched, so that the user can see nothing happened and try again
    Abort,
}

impl Default for FailurePolicy {
    fn default() -> Self {
        FailurePolicy::Mirror
    }
}

impl FromStr for FailurePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mirror" => Ok(FailurePolicy::Mirror),
            "abort" => Ok(FailurePolicy::Abort),
            other => Err(ConfigError::UnknownFailurePolicy(other.to_string())),
        }
    }
}


/// Everything needed to wire a coordinator to a remote collection
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    base_url: Url,
    failure_policy: FailurePolicy,
}

impl Config {
    /// Create a config for the collection at `url`, with the default failure policy
    pub fn new<S: AsRef<str>>(url: S) -> Result<Self, ConfigError> {
        let base_url = Url::parse(url.as_ref())?;
        Self::from_url(base_url)
    }

    /// Create a config for an already parsed URL
    pub fn from_url(base_url: Url) -> Result<Self, ConfigError> {
        match base_url.scheme() {
            "http" | "https" => (),
            other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
        Ok(Self { base_url, failure_policy: FailurePolicy::default() })
    }

    /// Read the config from the `EVENTLIST_API` and `EVENTLIST_FAILURE_POLICY` environment variables.
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match env_var(API_URL_VAR)? {
            Some(url) => Self::new(url)?,
            None => Self::default(),
        };
        if let Some(policy) = env_var(FAILURE_POLICY_VAR)? {
            config.failure_policy = policy.parse()?;
        }
        log::debug!("Using config {:?}", config);
        Ok(config)
    }

    pub fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    pub fn base_url(&self) -> &Url { &self.base_url }
    pub fn failure_policy(&self) -> FailurePolicy { self.failure_policy }
}

impl Default for Config {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_URL.clone(), failure_policy: FailurePolicy::default() }
    }
}

/// Returns the value of an environment variable, or `None` in case it is not set
fn env_var(name: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(name.to_string())),
    }
}
