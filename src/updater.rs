//! Update pass: root zone page → referral lookups → store

use std::sync::Arc;

use chrono::Utc;
use futures::stream::{self, StreamExt};

use crate::error::Result;
use crate::iana::{
    HttpPageFetcher, PageFetcher, ReferralResolver, RegistryScanner, TcpWhoisClient, WhoisTransport,
};
use crate::store::ReferralStore;
use crate::types::{MetricsSnapshot, UpdateConfig, UpdateProgress, UpdateReport};

/// Runs update passes against a shared [`ReferralStore`]
pub struct ReferralUpdater {
    scanner: RegistryScanner,
    resolver: ReferralResolver,
    store: Arc<ReferralStore>,
    concurrency: usize,
}

impl ReferralUpdater {
    /// Updater talking to the real IANA page and WHOIS service
    pub fn new(config: &UpdateConfig, store: Arc<ReferralStore>) -> Self {
        Self::with_transports(
            config,
            store,
            Arc::new(HttpPageFetcher::new(config.timeout)),
            Arc::new(TcpWhoisClient::new(config.timeout)),
        )
    }

    /// Updater with injected page and WHOIS transports
    pub fn with_transports(
        config: &UpdateConfig,
        store: Arc<ReferralStore>,
        fetcher: Arc<dyn PageFetcher>,
        whois: Arc<dyn WhoisTransport>,
    ) -> Self {
        Self {
            scanner: RegistryScanner::new(fetcher, config.iana_url.clone()),
            resolver: ReferralResolver::new(whois, config.whois_server.clone(), config.whois_port),
            store,
            concurrency: config.concurrency.max(1),
        }
    }

    pub fn metrics_snapshot(&self) -> MetricsSnapshot {
        self.resolver.metrics().snapshot()
    }

    /// Run one full pass.
    ///
    /// Resolutions may run concurrently but are applied to the store one at a
    /// time from this loop. A page fetch failure or a store write failure
    /// ends the pass; per-extension WHOIS failures do not.
    pub async fn run<F>(&self, on_progress: F) -> Result<UpdateReport>
    where
        F: Fn(&UpdateProgress),
    {
        let mut report = UpdateReport::new(Utc::now());
        let extensions = self.scanner.scan().await?;

        let resolver = &self.resolver;
        let mut resolutions = stream::iter(extensions)
            .map(|extension| async move {
                let resolution = resolver.resolve(&extension).await;
                (extension, resolution)
            })
            .buffer_unordered(self.concurrency);

        while let Some((extension, resolution)) = resolutions.next().await {
            let outcome = self.store.apply(&extension, &resolution)?;
            report.record(&resolution, outcome);

            tracing::debug!(
                extension = %extension,
                resolution = %resolution,
                outcome = %outcome,
                "Extension processed"
            );
            if outcome.wrote() {
                tracing::debug!(
                    extension = %extension,
                    path = %self.store.path().display(),
                    "Referral database persisted"
                );
            }

            on_progress(&UpdateProgress {
                extension,
                resolution,
                outcome,
                processed: report.extensions_seen,
            });
        }

        report.finished_at = Utc::now();

        if report.extensions_seen == 0 {
            tracing::warn!(
                url = %self.scanner.url(),
                "No extensions found on the root zone page; its layout may have changed"
            );
        }

        let metrics = self.metrics_snapshot();
        tracing::info!(
            extensions = report.extensions_seen,
            dynamic = report.dynamic,
            manual = report.manual,
            unresolved = report.unresolved,
            writes = report.writes(),
            whois_failures = metrics.whois_failures,
            duration_ms = report.duration().num_milliseconds(),
            "Referral update completed"
        );

        Ok(report)
    }
}
