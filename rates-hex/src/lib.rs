//! # Rates Hex
//!
//! Application service layer for the exchange rate bulletin.
//!
//! The service is generic over `T: BulletinTransport`, allowing the HTTP
//! transport to be swapped for fixtures or mocks.

pub mod service;


pub use service::RatesService;
