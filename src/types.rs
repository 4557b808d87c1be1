//! Core types and structures for tld-referral

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Outcome of resolving one extension's referral server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "source", content = "server")]
pub enum Resolution {
    /// Parsed from the `refer:` line of the IANA WHOIS answer.
    Dynamic(String),
    /// Taken from the manual override table.
    Manual(String),
    /// No referral known.
    Unresolved,
}

impl Resolution {
    /// The referral server, if any.
    pub fn server(&self) -> Option<&str> {
        match self {
            Resolution::Dynamic(server) | Resolution::Manual(server) => Some(server),
            Resolution::Unresolved => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, Resolution::Unresolved)
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::Dynamic(server) => write!(f, "{} (refer)", server),
            Resolution::Manual(server) => write!(f, "{} (manual)", server),
            Resolution::Unresolved => write!(f, "unresolved"),
        }
    }
}

/// Result of extracting an extension from one fragment of the root zone page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Match(String),
    NoMatch,
}

/// What `ReferralStore::apply` did with a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// New extension, persisted.
    Inserted,
    /// Known extension with a different server, persisted.
    Updated,
    /// Same server already stored, nothing written.
    Unchanged,
    /// Unresolved, nothing written and existing data kept.
    Skipped,
}

impl ApplyOutcome {
    pub fn wrote(&self) -> bool {
        matches!(self, ApplyOutcome::Inserted | ApplyOutcome::Updated)
    }
}

impl std::fmt::Display for ApplyOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplyOutcome::Inserted => write!(f, "inserted"),
            ApplyOutcome::Updated => write!(f, "updated"),
            ApplyOutcome::Unchanged => write!(f, "unchanged"),
            ApplyOutcome::Skipped => write!(f, "skipped"),
        }
    }
}

/// Configuration for an update pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateConfig {
    /// IANA root zone database page
    pub iana_url: String,
    /// WHOIS server asked for `refer:` lines
    pub whois_server: String,
    pub whois_port: u16,
    /// Location of the persisted database
    pub destination: PathBuf,
    /// Applies to the page fetch and to each WHOIS phase
    pub timeout: Duration,
    /// Extensions resolved at the same time (1 = strictly sequential)
    pub concurrency: usize,
    pub quiet: bool,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            iana_url: crate::config::DEFAULT_IANA_URL.to_string(),
            whois_server: crate::config::DEFAULT_WHOIS_SERVER.to_string(),
            whois_port: crate::config::DEFAULT_WHOIS_PORT,
            destination: PathBuf::from(crate::config::DEFAULT_DB_PATH),
            timeout: Duration::from_secs(10),
            concurrency: 1,
            quiet: false,
        }
    }
}

/// Progress of a running update pass
#[derive(Debug, Clone)]
pub struct UpdateProgress {
    pub extension: String,
    pub resolution: Resolution,
    pub outcome: ApplyOutcome,
    /// Extensions processed so far, this one included
    pub processed: u64,
}

/// Summary of a finished update pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateReport {
    pub extensions_seen: u64,
    pub dynamic: u64,
    pub manual: u64,
    pub unresolved: u64,
    pub inserted: u64,
    pub updated: u64,
    pub unchanged: u64,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl UpdateReport {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            extensions_seen: 0,
            dynamic: 0,
            manual: 0,
            unresolved: 0,
            inserted: 0,
            updated: 0,
            unchanged: 0,
            started_at,
            finished_at: started_at,
        }
    }

    /// Account for one processed extension
    pub fn record(&mut self, resolution: &Resolution, outcome: ApplyOutcome) {
        self.extensions_seen += 1;
        match resolution {
            Resolution::Dynamic(_) => self.dynamic += 1,
            Resolution::Manual(_) => self.manual += 1,
            Resolution::Unresolved => self.unresolved += 1,
        }
        match outcome {
            ApplyOutcome::Inserted => self.inserted += 1,
            ApplyOutcome::Updated => self.updated += 1,
            ApplyOutcome::Unchanged => self.unchanged += 1,
            ApplyOutcome::Skipped => {}
        }
    }

    /// Writes this pass caused on the store
    pub fn writes(&self) -> u64 {
        self.inserted + self.updated
    }

    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

/// Lock-free counters for WHOIS lookups
#[derive(Debug, Default)]
pub struct UpdateMetrics {
    whois_queries: AtomicU64,
    whois_failures: AtomicU64,
    total_query_time_ms: AtomicU64,
}

impl UpdateMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_query(&self, elapsed: Duration, failed: bool) {
        self.whois_queries.fetch_add(1, Ordering::Relaxed);
        self.total_query_time_ms
            .fetch_add(elapsed.as_millis() as u64, Ordering::Relaxed);
        if failed {
            self.whois_failures.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            whois_queries: self.whois_queries.load(Ordering::Relaxed),
            whois_failures: self.whois_failures.load(Ordering::Relaxed),
            total_query_time_ms: self.total_query_time_ms.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of [`UpdateMetrics`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub whois_queries: u64,
    pub whois_failures: u64,
    pub total_query_time_ms: u64,
}

impl MetricsSnapshot {
    pub fn avg_query_time_ms(&self) -> f64 {
        if self.whois_queries == 0 {
            0.0
        } else {
            self.total_query_time_ms as f64 / self.whois_queries as f64
        }
    }
}
