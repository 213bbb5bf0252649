//! # Rates Client
//!
//! HTTP transport that retrieves the daily exchange rate bulletin.

use async_trait::async_trait;
use reqwest::Client;

use rates_types::{BulletinTransport, FetchError};

/// Daily central bank exchange rate fixing, plain-text format.
pub const BULLETIN_URL: &str = "https://www.cnb.cz/en/financial-markets/foreign-exchange-market/central-bank-exchange-rate-fixing/central-bank-exchange-rate-fixing/daily.txt";

/// Bulletin transport over HTTP(S).
///
/// Issues a single GET per fetch. There is no retry and no client-side
/// timeout; callers that need either wrap this transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    url: String,
    proxy_base: Option<String>,
    http: Client,
}

impl HttpTransport {
    /// Creates a transport for the published bulletin URL.
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    /// Creates a transport reusing an existing `reqwest` client.
    pub fn with_client(http: Client) -> Self {
        Self {
            url: BULLETIN_URL.to_string(),
            proxy_base: None,
            http,
        }
    }

    /// Overrides the bulletin URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Routes requests through a prefixing proxy, `{proxy}/{url}`.
    pub fn with_proxy(mut self, proxy_base: impl Into<String>) -> Self {
        let proxy_base = proxy_base.into().trim_end_matches('/').to_string();
        self.proxy_base = (!proxy_base.is_empty()).then_some(proxy_base);
        self
    }

    /// The URL actually requested.
    pub fn request_url(&self) -> String {
        match &self.proxy_base {
            Some(proxy) => format!("{}/{}", proxy, self.url),
            None => self.url.clone(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BulletinTransport for HttpTransport {
    async fn fetch_text(&self) -> Result<String, FetchError> {
        let url = self.request_url();
        tracing::debug!(%url, "fetching bulletin");

        let resp = self.http.get(&url).send().await.map_err(|e| {
            tracing::warn!(%url, error = %e, "bulletin request failed");
            FetchError::Transport(e.to_string())
        })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "bulletin request rejected");
            return Err(FetchError::Network {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(|e| {
            tracing::warn!(%url, error = %e, "failed to read bulletin body");
            FetchError::Transport(e.to_string())
        })?;
        tracing::debug!(bytes = body.len(), "bulletin received");
        Ok(body)
    }
}
