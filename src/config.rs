//! Runtime configuration loaded from environment variables.
//!
//! Only secrets and deployment-specific values live here; extraction
//! behaviour is tuned through [`Options`](crate::Options).

use std::time::Duration;

use tracing::debug;

use crate::error::{Error, Result};
use crate::fetch::DEFAULT_USER_AGENT;
use crate::translation::DEFAULT_CONCURRENCY;

pub const API_KEY_VAR: &str = "GOOGLE_TRANSLATE_API_KEY";
pub const FALLBACK_API_KEY_VAR: &str = "GOOGLE_API_KEY";
pub const ENDPOINT_VAR: &str = "GOOGLE_TRANSLATE_ENDPOINT";
pub const FETCH_TIMEOUT_VAR: &str = "DHIVEHI_FETCH_TIMEOUT_SECS";
pub const TRANSLATE_TIMEOUT_VAR: &str = "DHIVEHI_TRANSLATE_TIMEOUT_SECS";
pub const CONCURRENCY_VAR: &str = "DHIVEHI_TRANSLATE_CONCURRENCY";
pub const USER_AGENT_VAR: &str = "DHIVEHI_USER_AGENT";

/// Default page fetch timeout.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Default per-call translation timeout.
pub const DEFAULT_TRANSLATE_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Translation service
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
    pub translate_timeout: Duration,
    pub concurrency: usize,

    // Fetching
    pub fetch_timeout: Duration,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: None,
            translate_timeout: DEFAULT_TRANSLATE_TIMEOUT,
            concurrency: DEFAULT_CONCURRENCY,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Unset and blank variables
    /// keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let config = Self {
            api_key: get(API_KEY_VAR).or_else(|| get(FALLBACK_API_KEY_VAR)),
            endpoint: get(ENDPOINT_VAR),
            translate_timeout: parse_secs(TRANSLATE_TIMEOUT_VAR, get(TRANSLATE_TIMEOUT_VAR))?
                .unwrap_or(defaults.translate_timeout),
            concurrency: parse_number(CONCURRENCY_VAR, get(CONCURRENCY_VAR))?
                .unwrap_or(defaults.concurrency),
            fetch_timeout: parse_secs(FETCH_TIMEOUT_VAR, get(FETCH_TIMEOUT_VAR))?
                .unwrap_or(defaults.fetch_timeout),
            user_agent: get(USER_AGENT_VAR).unwrap_or(defaults.user_agent),
        };

        debug!(
            api_key = config.api_key.is_some(),
            endpoint = config.endpoint.as_deref().unwrap_or("<default>"),
            concurrency = config.concurrency,
            "configuration loaded"
        );
        Ok(config)
    }

    /// The API key, or a configuration error naming the variable to set.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| Error::Config(format!("{API_KEY_VAR} is not set")))
    }
}

fn parse_number(name: &str, value: Option<String>) -> Result<Option<usize>> {
    value
        .map(|v| match v.parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(Error::Config(format!("{name} must be a positive integer, got {v:?}"))),
        })
        .transpose()
}

fn parse_secs(name: &str, value: Option<String>) -> Result<Option<Duration>> {
    Ok(parse_number(name, value)?.map(|n| Duration::from_secs(n as u64)))
}
