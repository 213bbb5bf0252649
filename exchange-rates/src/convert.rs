//! Base-currency to foreign-currency conversion.

use crate::rate::ExchangeRate;

/// Converts `base_amount` of the base currency into the currency of `rate`.
///
/// Computed as `base_amount / rate * amount`. No guarding is done: a zero or
/// `NaN` rate, a malformed quoted amount, or a `NaN` input yields a non-finite
/// result instead of an error.
pub fn convert(base_amount: f64, rate: &ExchangeRate) -> f64 {
    (base_amount / rate.rate()) * rate.amount().as_f64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_rates;

    fn euro() -> ExchangeRate {
        ExchangeRate::new("EMU", "euro", 1, "EUR", 25.270).unwrap()
    }

    #[test]
    fn test_convert_euro() {
        let converted = convert(100.0, &euro());
        assert!((converted - 3.957261574990).abs() < 1e-9);
        assert_eq!(format!("{:.2}", converted), "3.96");
    }

    #[test]
    fn test_convert_per_hundred_units() {
        let yen = ExchangeRate::new("Japan", "yen", 100, "JPY", 15.776).unwrap();
        let converted = convert(15.776, &yen);
        assert!((converted - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_convert_zero() {
        assert_eq!(convert(0.0, &euro()), 0.0);
    }

    #[test]
    fn test_method_matches_function() {
        let rate = euro();
        assert_eq!(rate.convert(42.0), convert(42.0, &rate));
    }

    #[test]
    fn test_nan_input_propagates() {
        assert!(convert(f64::NAN, &euro()).is_nan());
    }

    #[test]
    fn test_degraded_records_propagate() {
        let rates = parse_rates("h\nc\nAustralia|dollar|invalid|AUD|15.484\nEMU|euro|1|EUR|0");
        assert!(convert(100.0, &rates[0]).is_nan());
        assert!(!convert(100.0, &rates[1]).is_finite());
    }

    #[test]
    fn test_does_not_mutate_rate() {
        let rate = euro();
        let before = rate.clone();
        let _ = convert(10.0, &rate);
        assert_eq!(rate, before);
    }
}
