//! Environment-driven configuration
//!
//! Every knob has a default so a bare `tld-referral update` works; the
//! `IANA_*` variables (or a `.env` file loaded by [`crate::init`]) override them.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::config_error;
use crate::error::Result;
use crate::types::UpdateConfig;

pub const DEFAULT_IANA_URL: &str = "https://www.iana.org/domains/root/db";
pub const DEFAULT_WHOIS_SERVER: &str = "whois.iana.org";
pub const DEFAULT_WHOIS_PORT: u16 = 43;
pub const DEFAULT_DB_PATH: &str = "iana-domains-db.json";

pub const ENV_IANA_URL: &str = "IANA_URL";
pub const ENV_WHOIS_SERVER: &str = "IANA_WHOIS_SERVER";
pub const ENV_WHOIS_PORT: &str = "IANA_WHOIS_PORT";
pub const ENV_DB_PATH: &str = "IANA_DB_PATH";
pub const ENV_TIMEOUT_SECS: &str = "IANA_TIMEOUT_SECS";
pub const ENV_CONCURRENCY: &str = "IANA_CONCURRENCY";
pub const ENV_QUIET: &str = "IANA_QUIET";

impl UpdateConfig {
    /// Build a configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = non_empty(lookup(ENV_IANA_URL)) {
            config.iana_url = url;
        }
        if let Some(server) = non_empty(lookup(ENV_WHOIS_SERVER)) {
            config.whois_server = server;
        }
        if let Some(port) = non_empty(lookup(ENV_WHOIS_PORT)) {
            config.whois_port = parse_value(ENV_WHOIS_PORT, &port)?;
        }
        if let Some(path) = non_empty(lookup(ENV_DB_PATH)) {
            config.destination = PathBuf::from(path);
        }
        if let Some(secs) = non_empty(lookup(ENV_TIMEOUT_SECS)) {
            let secs: u64 = parse_value(ENV_TIMEOUT_SECS, &secs)?;
            if secs == 0 {
                return Err(config_error!("{} must be greater than zero", ENV_TIMEOUT_SECS));
            }
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(concurrency) = non_empty(lookup(ENV_CONCURRENCY)) {
            let concurrency: usize = parse_value(ENV_CONCURRENCY, &concurrency)?;
            if concurrency == 0 {
                return Err(config_error!("{} must be at least 1", ENV_CONCURRENCY));
            }
            config.concurrency = concurrency;
        }
        if let Some(quiet) = non_empty(lookup(ENV_QUIET)) {
            config.quiet = parse_bool(&quiet)
                .ok_or_else(|| config_error!("{} is not a boolean: {}", ENV_QUIET, quiet))?;
        }

        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.parse()
        .map_err(|_| config_error!("invalid value for {}: {}", key, raw))
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
