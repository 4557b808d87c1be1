//! Referral resolution for a single extension

use std::sync::{Arc, LazyLock};
use std::time::Instant;

use regex::Regex;

use super::overrides::manual_referral;
use super::WhoisTransport;
use crate::types::{Resolution, UpdateMetrics};

static REFER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"refer:\s+([a-zA-Z0-9._-]+)\r?\n").expect("refer pattern is valid")
});

/// Extract the server named by the first `refer:` line of an IANA answer.
///
/// The token is returned exactly as sent.
pub fn parse_refer(response: &str) -> Option<String> {
    if !response.contains("refer") {
        return None;
    }
    REFER_LINE
        .captures(response)
        .map(|captures| captures[1].to_string())
}

/// The probe name sent to IANA for an extension
pub fn probe_query(extension: &str) -> String {
    format!("hello.{}", extension)
}

/// Asks IANA for an extension's referral, falling back to the manual table
#[derive(Clone)]
pub struct ReferralResolver {
    transport: Arc<dyn WhoisTransport>,
    server: String,
    port: u16,
    metrics: Arc<UpdateMetrics>,
}

impl ReferralResolver {
    pub fn new(transport: Arc<dyn WhoisTransport>, server: impl Into<String>, port: u16) -> Self {
        Self {
            transport,
            server: server.into(),
            port,
            metrics: Arc::new(UpdateMetrics::new()),
        }
    }

    pub fn metrics(&self) -> Arc<UpdateMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Resolve the referral server for `extension`.
    ///
    /// Never fails: transport errors and unparseable answers fall through to
    /// the manual table, then to [`Resolution::Unresolved`].
    pub async fn resolve(&self, extension: &str) -> Resolution {
        if let Some(server) = self.dynamic_referral(extension).await {
            return Resolution::Dynamic(server);
        }

        match manual_referral(extension) {
            Some(server) => {
                tracing::debug!(extension = %extension, server = %server, "Using manual referral");
                Resolution::Manual(server.to_string())
            }
            None => {
                tracing::debug!(extension = %extension, "No referral known");
                Resolution::Unresolved
            }
        }
    }

    async fn dynamic_referral(&self, extension: &str) -> Option<String> {
        let start = Instant::now();
        let response = self
            .transport
            .query(&self.server, self.port, &probe_query(extension))
            .await;

        match response {
            Ok(body) => {
                self.metrics.record_query(start.elapsed(), false);
                let referral = parse_refer(&body);
                if referral.is_none() {
                    tracing::debug!(
                        extension = %extension,
                        bytes = body.len(),
                        "IANA answer has no refer line"
                    );
                }
                referral
            }
            Err(e) => {
                self.metrics.record_query(start.elapsed(), true);
                tracing::warn!(
                    extension = %extension,
                    server = %self.server,
                    error = %e,
                    "IANA WHOIS query failed"
                );
                None
            }
        }
    }
}
