//! WHOIS over TCP (RFC 3912)

use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

use super::WhoisTransport;
use crate::error::{ReferralError, Result};

/// One connection per query, response read until the server closes
#[derive(Debug, Clone)]
pub struct TcpWhoisClient {
    timeout: Duration,
}

impl TcpWhoisClient {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for TcpWhoisClient {
    fn default() -> Self {
        Self::new(Duration::from_secs(10))
    }
}

#[async_trait]
impl WhoisTransport for TcpWhoisClient {
    async fn query(&self, server: &str, port: u16, query: &str) -> Result<String> {
        let addr = format!("{}:{}", server, port);
        let secs = self.timeout.as_secs();

        let mut stream = timeout(self.timeout, TcpStream::connect(&addr))
            .await
            .map_err(|_| ReferralError::timeout("WHOIS connect", secs))?
            .map_err(|e| ReferralError::network(format!("WHOIS connect failed: {}", e), None, Some(addr.clone())))?;

        timeout(self.timeout, stream.write_all(format!("{}\r\n", query).as_bytes()))
            .await
            .map_err(|_| ReferralError::timeout("WHOIS write", secs))?
            .map_err(|e| ReferralError::network(format!("WHOIS write failed: {}", e), None, Some(addr.clone())))?;

        let mut buf = Vec::new();
        timeout(self.timeout, stream.read_to_end(&mut buf))
            .await
            .map_err(|_| ReferralError::timeout("WHOIS read", secs))?
            .map_err(|e| ReferralError::network(format!("WHOIS read failed: {}", e), None, Some(addr)))?;

        Ok(String::from_utf8_lossy(&buf).to_string())
    }
}
