//! Shared test utilities for the Bobbin workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`fetcher`]: scripted and gated [`Fetcher`](bobbin_http::Fetcher) doubles
//! - [`project`]: [`TestProject`] temporary project directory

pub mod fetcher;
pub mod project;

pub use fetcher::{GatedFetcher, ScriptedFetcher};
pub use project::TestProject;
