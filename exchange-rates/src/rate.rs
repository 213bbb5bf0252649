//! The rate record: one data line of a bulletin.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Invariant violations of a rate record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RateError {
    #[error("field '{0}' cannot be empty")]
    EmptyField(&'static str),

    #[error("amount must be a positive integer, got '{0}'")]
    InvalidAmount(String),

    #[error("rate must be a finite positive number, got {0}")]
    InvalidRate(f64),
}

// ─────────────────────────────────────────────────────────────────────────────
// Quoted Amount
// ─────────────────────────────────────────────────────────────────────────────

/// The number of currency units a rate is quoted per.
///
/// Bulletins are parsed permissively: an amount column that is not an integer
/// does not fail the parse, it is kept as `Malformed` with the raw text. Any
/// integer, including zero and negatives, is kept as `Units`; the sign is
/// checked by [`ExchangeRate::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuotedAmount {
    Units(i64),
    Malformed(String),
}

impl QuotedAmount {
    /// Reads an amount column. Never fails.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<i64>() {
            Ok(units) => QuotedAmount::Units(units),
            Err(_) => QuotedAmount::Malformed(raw.to_string()),
        }
    }

    pub fn units(&self) -> Option<i64> {
        match self {
            QuotedAmount::Units(units) => Some(*units),
            QuotedAmount::Malformed(_) => None,
        }
    }

    /// Numeric value for arithmetic; `NaN` when malformed.
    pub fn as_f64(&self) -> f64 {
        match self {
            QuotedAmount::Units(units) => *units as f64,
            QuotedAmount::Malformed(_) => f64::NAN,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, QuotedAmount::Malformed(_))
    }
}

impl From<u32> for QuotedAmount {
    fn from(units: u32) -> Self {
        QuotedAmount::Units(i64::from(units))
    }
}

impl fmt::Display for QuotedAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuotedAmount::Units(units) => write!(f, "{}", units),
            QuotedAmount::Malformed(raw) => write!(f, "{}", raw),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Exchange Rate
// ─────────────────────────────────────────────────────────────────────────────

/// One published rate: `amount` units of `currency` cost `rate` in the base
/// currency.
///
/// Values are immutable once built. [`ExchangeRate::new`] enforces the record
/// invariants; records produced by the bulletin parser may carry degraded
/// fields and can be checked with [`ExchangeRate::validate`].
///
/// Deserialization goes through the same permissive path as parsing, so a
/// degraded record survives a serialize/deserialize round trip unchanged.
/// Deserialized records are not validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    country: String,
    currency: String,
    amount: QuotedAmount,
    code: String,
    rate: f64,
}

impl ExchangeRate {
    /// Creates a rate record, rejecting values that break the invariants.
    pub fn new(
        country: impl Into<String>,
        currency: impl Into<String>,
        amount: u32,
        code: impl Into<String>,
        rate: f64,
    ) -> Result<Self, RateError> {
        let record = Self::unchecked(
            country.into().trim().to_string(),
            currency.into().trim().to_string(),
            QuotedAmount::Units(i64::from(amount)),
            code.into().trim().to_string(),
            rate,
        );
        record.validate()?;
        Ok(record)
    }

    pub(crate) fn unchecked(
        country: String,
        currency: String,
        amount: QuotedAmount,
        code: String,
        rate: f64,
    ) -> Self {
        Self {
            country,
            currency,
            amount,
            code,
            rate,
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn amount(&self) -> &QuotedAmount {
        &self.amount
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Base-currency cost of a single unit of this currency.
    pub fn unit_rate(&self) -> f64 {
        self.rate / self.amount.as_f64()
    }

    /// Converts a base-currency amount into this currency.
    pub fn convert(&self, base_amount: f64) -> f64 {
        crate::convert(base_amount, self)
    }

    /// Checks the record invariants.
    pub fn validate(&self) -> Result<(), RateError> {
        if self.country.trim().is_empty() {
            return Err(RateError::EmptyField("country"));
        }
        if self.currency.trim().is_empty() {
            return Err(RateError::EmptyField("currency"));
        }
        if self.code.trim().is_empty() {
            return Err(RateError::EmptyField("code"));
        }
        match self.amount {
            QuotedAmount::Units(units) if units > 0 => {}
            _ => return Err(RateError::InvalidAmount(self.amount.to_string())),
        }
        if !self.rate.is_finite() || self.rate <= 0.0 {
            return Err(RateError::InvalidRate(self.rate));
        }
        Ok(())
    }

    pub fn is_well_formed(&self) -> bool {
        self.validate().is_ok()
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) = {}",
            self.amount, self.code, self.currency, self.rate
        )
    }
}
