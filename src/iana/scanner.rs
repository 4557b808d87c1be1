//! Root zone page scanner
//!
//! The IANA root zone database page lists every delegated extension as
//! `<span class="domain tld"><a href="/domains/root/db/com.html">.com</a></span>`.
//! The page is split on the span marker and each fragment is matched for the
//! detail link. Fragments without one are skipped.

use std::sync::{Arc, LazyLock};
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;

use super::PageFetcher;
use crate::error::{ReferralError, Result};
use crate::types::Extraction;

/// Marker preceding each listed zone
pub const ZONE_MARKER: &str = r#"<span class="domain tld">"#;

/// Path prefix of a zone detail link
pub const ZONE_LINK_PREFIX: &str = "/domains/root/db/";

static ZONE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"/domains/root/db/([^/"<>\s]+?)\.html"#).expect("zone link pattern is valid")
});

/// Extract the extension from one page fragment.
///
/// The capture is lowercased so store keys are uniform.
pub fn extract_extension(fragment: &str) -> Extraction {
    if !fragment.contains(ZONE_LINK_PREFIX) {
        return Extraction::NoMatch;
    }

    match ZONE_LINK.captures(fragment) {
        Some(captures) => {
            let extension = captures[1].trim().to_lowercase();
            if extension.is_empty() {
                Extraction::NoMatch
            } else {
                Extraction::Match(extension)
            }
        }
        None => Extraction::NoMatch,
    }
}

/// Lazy, single-use sequence of extensions found in a page body
#[derive(Debug)]
pub struct Extensions {
    body: String,
    cursor: usize,
    finished: bool,
}

impl Extensions {
    pub fn new(body: String) -> Self {
        Self {
            body,
            cursor: 0,
            finished: false,
        }
    }

    /// Next fragment between two markers (or page ends)
    fn next_fragment(&mut self) -> Option<&str> {
        if self.finished {
            return None;
        }

        let start = self.cursor;
        match self.body[start..].find(ZONE_MARKER) {
            Some(offset) => {
                self.cursor = start + offset + ZONE_MARKER.len();
                Some(&self.body[start..start + offset])
            }
            None => {
                self.finished = true;
                self.cursor = self.body.len();
                Some(&self.body[start..])
            }
        }
    }
}

impl Iterator for Extensions {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let fragment = self.next_fragment()?;
            if let Extraction::Match(extension) = extract_extension(fragment) {
                return Some(extension);
            }
        }
    }
}

/// Plain reqwest GET
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpPageFetcher {
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("tld-referral/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to create HTTP client: {}. Using default.", e);
                Client::new()
            });

        Self { client, timeout }
    }

    fn map_error(&self, operation: &str, err: reqwest::Error) -> ReferralError {
        if err.is_timeout() {
            ReferralError::timeout(operation, self.timeout.as_secs())
        } else {
            ReferralError::from(err)
        }
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_error("IANA page fetch", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReferralError::network(
                format!("IANA page returned {}", status),
                Some(status.as_u16()),
                Some(url.to_string()),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| self.map_error("IANA page read", e))
    }
}

/// Lists the extensions published on the root zone page
#[derive(Clone)]
pub struct RegistryScanner {
    fetcher: Arc<dyn PageFetcher>,
    url: String,
}

impl RegistryScanner {
    pub fn new(fetcher: Arc<dyn PageFetcher>, url: impl Into<String>) -> Self {
        Self {
            fetcher,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the page and return its extensions.
    ///
    /// A fetch failure is returned as is; a page without any recognizable
    /// zone yields an empty sequence.
    pub async fn scan(&self) -> Result<Extensions> {
        tracing::debug!(url = %self.url, "Fetching root zone page");
        let body = self.fetcher.fetch_text(&self.url).await?;
        tracing::debug!(url = %self.url, bytes = body.len(), "Root zone page fetched");
        Ok(Extensions::new(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    const PAGE: &str = r#"<html><body><table id="tld-table">
<tr><td><span class="domain tld"><a href="/domains/root/db/aaa.html">.aaa</a></span></td><td>generic</td></tr>
<tr><td><span class="domain tld"><a href="/domains/root/db/com.html">.com</a></span></td><td>generic</td></tr>
<tr><td><span class="domain tld"><a href="/domains/root/db/xn--h2brj9c.html">.भारत</a></span></td><td>country-code</td></tr>
<tr><td><span class="domain tld">.broken</span></td></tr>
</table></body></html>"#;

    struct StaticPage(&'static str);

    #[async_trait]
    impl PageFetcher for StaticPage {
        async fn fetch_text(&self, _url: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingPage;

    #[async_trait]
    impl PageFetcher for FailingPage {
        async fn fetch_text(&self, url: &str) -> Result<String> {
            Err(ReferralError::network("connection reset", None, Some(url.to_string())))
        }
    }

    #[test]
    fn test_extract_match() {
        let fragment = r#"<a href="/domains/root/db/io.html">.io</a></span></td>"#;
        assert_eq!(extract_extension(fragment), Extraction::Match("io".to_string()));
    }

    #[test]
    fn test_extract_lowercases() {
        let fragment = r#"<a href="/domains/root/db/COM.html">.COM</a>"#;
        assert_eq!(extract_extension(fragment), Extraction::Match("com".to_string()));
    }

    #[test]
    fn test_extract_no_match() {
        assert_eq!(extract_extension("<html><head>"), Extraction::NoMatch);
        assert_eq!(extract_extension(r#"<a href="/domains/root/db/">x</a>"#), Extraction::NoMatch);
        assert_eq!(extract_extension(r#"<a href="/domains/root/db/.html">x</a>"#), Extraction::NoMatch);
    }

    #[test]
    fn test_extensions_from_page() {
        let extensions: Vec<String> = Extensions::new(PAGE.to_string()).collect();
        assert_eq!(extensions, vec!["aaa", "com", "xn--h2brj9c"]);
    }

    #[test]
    fn test_unrecognized_page_yields_nothing() {
        let mut extensions = Extensions::new("<html>maintenance</html>".to_string());
        assert_eq!(extensions.next(), None);
        assert_eq!(extensions.next(), None);
    }

    #[test]
    fn test_scan_with_fetcher() {
        let scanner = RegistryScanner::new(Arc::new(StaticPage(PAGE)), "https://iana.test/db");
        let extensions = tokio_test::block_on(scanner.scan()).unwrap();
        assert_eq!(extensions.count(), 3);
    }

    #[tokio::test]
    async fn test_scan_propagates_fetch_failure() {
        let scanner = RegistryScanner::new(Arc::new(FailingPage), "https://iana.test/db");
        let err = scanner.scan().await.unwrap_err();
        assert!(err.is_transport());
    }

    /// Serve one connection: read the request head, then write `response`
    /// and keep the socket open for `hold`.
    async fn serve_once(response: &'static [u8], hold: Duration) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            read_request_head(&mut socket).await;
            socket.write_all(response).await.unwrap();
            tokio::time::sleep(hold).await;
        });

        format!("http://{}/domains/root/db", addr)
    }

    async fn read_request_head(socket: &mut TcpStream) {
        let mut head = Vec::new();
        let mut byte = [0u8; 1];
        while socket.read(&mut byte).await.unwrap() == 1 {
            head.push(byte[0]);
            if head.ends_with(b"\r\n\r\n") {
                break;
            }
        }
    }

    #[tokio::test]
    async fn test_http_fetch_success() {
        let url = serve_once(
            b"HTTP/1.1 200 OK\r\nContent-Length: 4\r\nConnection: close\r\n\r\nzone",
            Duration::ZERO,
        )
        .await;

        let fetcher = HttpPageFetcher::new(Duration::from_secs(5));
        assert_eq!(fetcher.fetch_text(&url).await.unwrap(), "zone");
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let url = serve_once(
            b"HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            Duration::ZERO,
        )
        .await;

        let fetcher = HttpPageFetcher::new(Duration::from_secs(5));
        let err = fetcher.fetch_text(&url).await.unwrap_err();

        assert!(err.is_transport());
        match err {
            ReferralError::Network { status_code, url: failed_url, .. } => {
                assert_eq!(status_code, Some(503));
                assert_eq!(failed_url.as_deref(), Some(url.as_str()));
            }
            other => panic!("expected a network error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_http_body_timeout_reports_configured_limit() {
        // Headers promise more body than is ever sent.
        let url = serve_once(
            b"HTTP/1.1 200 OK\r\nContent-Length: 1000\r\n\r\n<html>",
            Duration::from_secs(10),
        )
        .await;

        let fetcher = HttpPageFetcher::new(Duration::from_secs(1));
        let err = fetcher.fetch_text(&url).await.unwrap_err();

        match err {
            ReferralError::Timeout { timeout_secs, .. } => assert_eq!(timeout_secs, 1),
            other => panic!("expected a timeout, got {:?}", other),
        }
    }
}
