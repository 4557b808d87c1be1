//! IANA root zone knowledge: which WHOIS server answers for which extension.
//!
//! The scanner lists extensions from the root zone page, the resolver asks
//! IANA's WHOIS service for each one's `refer:` server and falls back to the
//! manual table.

pub mod overrides;
pub mod resolver;
pub mod scanner;
pub mod whois;

pub use overrides::{manual_entries, manual_referral};
pub use resolver::ReferralResolver;
pub use scanner::{Extensions, HttpPageFetcher, RegistryScanner};
pub use whois::TcpWhoisClient;

use crate::error::Result;
use async_trait::async_trait;

/// Fetches a page body as text
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String>;
}

/// One WHOIS request/response exchange
#[async_trait]
pub trait WhoisTransport: Send + Sync {
    /// Send `query` to `server:port` and return the full response text
    async fn query(&self, server: &str, port: u16, query: &str) -> Result<String>;
}
