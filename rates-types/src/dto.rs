//! Data Transfer Objects (DTOs) handed to the presentation layer.

use serde::{Deserialize, Serialize};

use exchange_rates::{ExchangeRate, QuotedAmount};

// ─────────────────────────────────────────────────────────────────────────────
// Rate DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Flat view of one rate record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateView {
    pub country: String,
    pub currency: String,
    pub amount: QuotedAmount,
    pub code: String,
    pub rate: f64,
}

impl From<&ExchangeRate> for RateView {
    fn from(rate: &ExchangeRate) -> Self {
        Self {
            country: rate.country().to_string(),
            currency: rate.currency().to_string(),
            amount: rate.amount().clone(),
            code: rate.code().to_string(),
            rate: rate.rate(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Result of converting a base-currency amount with one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    /// Amount in the base currency
    pub base_amount: f64,
    /// Target currency code
    pub code: String,
    /// Quoted unit of the rate used
    pub amount: QuotedAmount,
    /// Rate used for the conversion
    pub rate: f64,
    /// Amount in the target currency
    pub converted: f64,
}

impl Conversion {
    pub fn new(base_amount: f64, rate: &ExchangeRate) -> Self {
        Self {
            base_amount,
            code: rate.code().to_string(),
            amount: rate.amount().clone(),
            rate: rate.rate(),
            converted: exchange_rates::convert(base_amount, rate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_from_rate() {
        let rate = ExchangeRate::new("EMU", "euro", 1, "EUR", 25.27).unwrap();
        let conversion = Conversion::new(100.0, &rate);
        assert_eq!(conversion.code, "EUR");
        assert_eq!(conversion.rate, 25.27);
        assert!((conversion.converted - 3.9572).abs() < 1e-4);
    }

    #[test]
    fn test_rate_view_serializes_flat() {
        let rate = ExchangeRate::new("Japan", "yen", 100, "JPY", 15.776).unwrap();
        let json = serde_json::to_value(RateView::from(&rate)).unwrap();
        assert_eq!(json["country"], "Japan");
        assert_eq!(json["amount"], 100);
        assert_eq!(json["rate"], 15.776);
    }
}
