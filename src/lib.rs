//! tld-referral - which WHOIS server answers for each domain extension
//!
//! Builds and incrementally maintains a database mapping every extension on
//! the IANA root zone to its referral WHOIS server.

pub mod config;
pub mod error;
pub mod iana;
pub mod store;
pub mod types;
pub mod updater;

// Re-export commonly used types
pub use error::{ReferralError, Result};
pub use types::{
    ApplyOutcome, Extraction, MetricsSnapshot, Resolution, UpdateConfig, UpdateMetrics,
    UpdateProgress, UpdateReport,
};

// Re-export main functionality
pub use iana::{ReferralResolver, RegistryScanner};
pub use store::ReferralStore;
pub use updater::ReferralUpdater;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
