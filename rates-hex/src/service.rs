//! Rates Application Service
//!
//! Composes the transport port with the bulletin parser.
//! Contains NO infrastructure logic - pure orchestration.

use rates_types::{Bulletin, BulletinTransport, Conversion, ExchangeRate, FetchError};

/// Application service for exchange rate operations.
///
/// Generic over `T: BulletinTransport` - the adapter is injected at compile time.
/// The service keeps no state between calls: every fetch yields a fresh,
/// independent set of records, so it can be shared freely across tasks.
pub struct RatesService<T: BulletinTransport> {
    transport: T,
}

impl<T: BulletinTransport> RatesService<T> {
    /// Creates a new rates service with the given transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns a reference to the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Fetching
    // ─────────────────────────────────────────────────────────────────────────────

    /// Fetches and parses the current bulletin.
    ///
    /// Transport failures are returned unchanged; on failure no records are
    /// produced.
    pub async fn fetch_rates(&self) -> Result<Vec<ExchangeRate>, FetchError> {
        self.fetch_bulletin().await.map(|bulletin| bulletin.rates)
    }

    /// Fetches the current bulletin, keeping its header and skipped lines.
    pub async fn fetch_bulletin(&self) -> Result<Bulletin, FetchError> {
        let text = self.transport.fetch_text().await?;
        let bulletin = Bulletin::parse(&text);

        tracing::info!(
            rates = bulletin.len(),
            skipped = bulletin.skipped.len(),
            sequence = bulletin.header.as_ref().and_then(|h| h.sequence),
            "bulletin parsed"
        );
        Ok(bulletin)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────────────────────────

    /// Converts a base-currency amount with the given record.
    pub fn convert(&self, amount: f64, rate: &ExchangeRate) -> f64 {
        rates_types::convert(amount, rate)
    }

    /// Same as [`RatesService::convert`], packaged for display.
    pub fn conversion(&self, amount: f64, rate: &ExchangeRate) -> Conversion {
        Conversion::new(amount, rate)
    }
}
