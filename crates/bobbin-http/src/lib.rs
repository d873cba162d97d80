//! Fetching remote resources for Bobbin
//!
//! The sync engine only sees the [`Fetcher`] contract: one GET per URL, the
//! body treated as opaque bytes, and failures split into protocol-level
//! ([`FetchResult::HttpError`]) and transport-level
//! ([`FetchResult::NetworkError`]) outcomes.

pub mod client;
pub mod error;
pub mod fetcher;

pub use client::{HttpFetcher, HttpFetcherConfig};
pub use error::{Error, Result};
pub use fetcher::{FetchResult, Fetcher};
