//! [`Fetcher`] doubles for engine and CLI tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bobbin_http::{FetchResult, Fetcher};
use tokio::sync::{Notify, Semaphore};

/// Answers from a fixed table and records every URL it was asked for.
///
/// URLs missing from the table fail with a network error, so a test never
/// reaches the real network by accident.
///
/// # Example
///
/// ```rust
/// use bobbin_test_utils::ScriptedFetcher;
///
/// let fetcher = ScriptedFetcher::new()
///     .with_body("https://example.com/a.txt", "hello")
///     .with_status("https://example.com/b.txt", 404, "Not Found");
/// assert!(fetcher.calls().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct ScriptedFetcher {
    responses: Mutex<HashMap<String, FetchResult>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, url: impl Into<String>, result: FetchResult) -> Self {
        self.set(url, result);
        self
    }

    pub fn with_body(self, url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.with(url, FetchResult::Success(body.into()))
    }

    pub fn with_status(self, url: impl Into<String>, code: u16, reason: &str) -> Self {
        self.with(url, FetchResult::HttpError(format!("HTTP/1.1 {code} {reason}")))
    }

    /// Replace the answer for `url`, e.g. to simulate a document edit between runs.
    pub fn set(&self, url: impl Into<String>, result: FetchResult) {
        self.responses.lock().unwrap().insert(url.into(), result);
    }

    /// URLs fetched so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Fetcher for ScriptedFetcher {
    async fn fetch(&self, url: &str) -> FetchResult {
        self.calls.lock().unwrap().push(url.to_string());
        self.responses
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or_else(|| FetchResult::NetworkError("Cannot resolve destination host".into()))
    }
}

/// Wraps a fetcher and holds every fetch until the test releases it.
///
/// Used to keep a run in flight while asserting on concurrent behaviour.
#[derive(Debug)]
pub struct GatedFetcher<F> {
    inner: F,
    entered: Notify,
    gate: Semaphore,
}

impl<F: Fetcher> GatedFetcher<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            entered: Notify::new(),
            gate: Semaphore::new(0),
        }
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }

    /// Resolves once a fetch is waiting at the gate.
    pub async fn wait_until_fetching(&self) {
        self.entered.notified().await;
    }

    /// Let `count` more fetches through.
    pub fn release(&self, count: usize) {
        self.gate.add_permits(count);
    }
}

#[async_trait]
impl<F: Fetcher> Fetcher for GatedFetcher<F> {
    async fn fetch(&self, url: &str) -> FetchResult {
        self.entered.notify_one();
        if let Ok(permit) = self.gate.acquire().await {
            permit.forget();
        }
        self.inner.fetch(url).await
    }
}
