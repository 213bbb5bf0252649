//! Exchange Rate Bulletin Library
//!
//! Turns the plain-text daily exchange rate fixing into typed records and
//! converts base-currency amounts with them. Nothing in this crate performs
//! IO; fetching the bulletin is the job of a transport adapter.
//!
//! # Example
//! ```
//! use exchange_rates::{convert, parse_rates};
//!
//! let text = "17 Jan 2025 #12\n\
//!             Country|Currency|Amount|Code|Rate\n\
//!             EMU|euro|1|EUR|25.270";
//!
//! let rates = parse_rates(text);
//! assert_eq!(rates[0].code(), "EUR");
//!
//! let euros = convert(100.0, &rates[0]);
//! assert!((euros - 3.957).abs() < 0.001);
//! ```

mod bulletin;
mod convert;
mod rate;

pub use bulletin::{Bulletin, BulletinHeader, SkippedLine, find_rate, parse_rates};
pub use convert::convert;
pub use rate::{ExchangeRate, QuotedAmount, RateError};
