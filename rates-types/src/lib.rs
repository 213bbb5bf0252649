//! # Rates Types
//!
//! Error types, port traits and DTOs for the exchange rate service.
//! This crate has ZERO external IO dependencies - only data structures
//! and trait definitions.
//!
//! ## Architecture
//!
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for presentation boundaries
//! - `error/` - Fetch error taxonomy
//!
//! The record type itself and the pure parser/converter live in the
//! `exchange-rates` crate and are re-exported here.

pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use dto::{Conversion, RateView};
pub use error::FetchError;
pub use exchange_rates::{
    Bulletin, BulletinHeader, ExchangeRate, QuotedAmount, RateError, SkippedLine, convert,
    find_rate, parse_rates,
};
pub use ports::BulletinTransport;
