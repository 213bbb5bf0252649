//! Bulletin transport port.
//!
//! This trait defines how raw bulletin text is retrieved.
//! Implementations can be HTTP clients, fixtures, mock providers, etc.

use std::sync::Arc;

use crate::FetchError;

/// Port trait for retrieving raw bulletin text.
#[async_trait::async_trait]
pub trait BulletinTransport: Send + Sync {
    /// Fetches the whole bulletin as text.
    async fn fetch_text(&self) -> Result<String, FetchError>;
}

#[async_trait::async_trait]
impl<T: BulletinTransport + ?Sized> BulletinTransport for Arc<T> {
    async fn fetch_text(&self) -> Result<String, FetchError> {
        (**self).fetch_text().await
    }
}

#[async_trait::async_trait]
impl<T: BulletinTransport + ?Sized> BulletinTransport for &T {
    async fn fetch_text(&self) -> Result<String, FetchError> {
        (**self).fetch_text().await
    }
}
