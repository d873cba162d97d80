//! SyncEngine implementation
//!
//! The SyncEngine walks the entry list in order, fetching one entry at a
//! time, and writes content only when its checksum moved.

use std::sync::atomic::{AtomicBool, Ordering};

use bobbin_http::{FetchResult, Fetcher};
use chrono::Local;
use tracing::{debug, info, warn};

use crate::entry::SyncEntry;
use crate::hasher::{ContentHasher, Md5Hasher};
use crate::link;
use crate::persist::{Persister, WriteOutcome};

use super::report::{EntryError, EntryOutcome, ReportLine, RunReport};

/// Marker Google serves on its sign-in page when a document is not shared.
const ACCESS_SENTINEL: &str = "google-site-verification";

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub report: RunReport,
    /// Every input entry, in input order, with its post-run state
    pub entries: Vec<SyncEntry>,
}

/// Engine for synchronizing remote content into destination files
///
/// Collaborators are injected: a [`Fetcher`] for network access, a
/// [`Persister`] for writes and a [`ContentHasher`] for change detection.
/// At most one run is active per engine; see [`SyncEngine::run`].
pub struct SyncEngine<F, P, H = Md5Hasher> {
    fetcher: F,
    persister: P,
    hasher: H,
    running: AtomicBool,
}

impl<F: Fetcher, P: Persister> SyncEngine<F, P> {
    /// Create a SyncEngine using MD5 content checksums
    pub fn new(fetcher: F, persister: P) -> Self {
        Self::with_hasher(fetcher, persister, Md5Hasher)
    }
}

impl<F: Fetcher, P: Persister, H: ContentHasher> SyncEngine<F, P, H> {
    pub fn with_hasher(fetcher: F, persister: P, hasher: H) -> Self {
        Self {
            fetcher,
            persister,
            hasher,
            running: AtomicBool::new(false),
        }
    }

    /// Whether a run is currently in progress
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn persister(&self) -> &P {
        &self.persister
    }

    /// Synchronize every entry, in order, one at a time
    ///
    /// Returns `None` without doing anything when another run on this
    /// engine has not finished yet. Otherwise returns the report and the
    /// updated copies of all entries; the input slice is never modified.
    ///
    /// A failure on one entry is recorded in the report and never stops
    /// the remaining entries from being processed.
    pub async fn run(&self, entries: &[SyncEntry]) -> Option<RunOutcome> {
        let Some(_guard) = RunGuard::acquire(&self.running) else {
            debug!("Refresh already in progress, ignoring request");
            return None;
        };

        let started_at = Local::now();
        let mut lines = Vec::with_capacity(entries.len());
        let mut updated = Vec::with_capacity(entries.len());

        for entry in entries {
            let mut next = entry.clone();
            let outcome = self.sync_entry(&mut next).await;
            lines.push(ReportLine::new(entry, outcome));
            updated.push(next);
        }

        let report = RunReport::new(started_at, lines);
        info!(
            updated = report.updated_count(),
            unchanged = report.unchanged_count(),
            failed = report.failed_count(),
            "Refresh finished"
        );

        Some(RunOutcome {
            report,
            entries: updated,
        })
    }

    async fn sync_entry(&self, entry: &mut SyncEntry) -> EntryOutcome {
        if !entry.enabled {
            debug!(entry = %entry.name, "Skipping disabled entry");
            return EntryOutcome::Disabled;
        }
        if !entry.has_url() {
            return EntryOutcome::Failed(EntryError::MissingUrl);
        }
        if !entry.has_destination() {
            return EntryOutcome::Failed(EntryError::MissingDestination);
        }

        let url = match link::normalize(&entry.source_url) {
            Ok(url) => url,
            Err(e) => {
                warn!(entry = %entry.name, error = %e, "Malformed document URL");
                return EntryOutcome::Failed(e.into());
            }
        };
        entry.source_url.clone_from(&url);

        let bytes = match self.fetcher.fetch(&url).await {
            FetchResult::Success(bytes) => bytes,
            FetchResult::HttpError(message) => {
                warn!(url = %url, error = %message, "Couldn't retrieve file");
                return EntryOutcome::Failed(EntryError::Http(message));
            }
            FetchResult::NetworkError(message) => {
                warn!(url = %url, error = %message, "Couldn't retrieve file");
                return EntryOutcome::Failed(EntryError::Network(message));
            }
        };

        if String::from_utf8_lossy(&bytes).contains(ACCESS_SENTINEL) {
            warn!(url = %url, "Document does not have public link sharing enabled");
            return EntryOutcome::Failed(EntryError::AccessRestricted);
        }

        let checksum = self.hasher.checksum(&bytes);
        if entry.has_destination_asset && checksum == entry.last_content_hash {
            debug!(entry = %entry.name, "Content unchanged");
            return EntryOutcome::Unchanged;
        }

        match self.persister.persist(&entry.destination_path, &bytes) {
            WriteOutcome::Written => {
                entry.last_content_hash = checksum;
                entry.has_destination_asset = true;
                info!(entry = %entry.name, path = %entry.destination_path, "Updated");
                EntryOutcome::Updated {
                    path: entry.destination_path.clone(),
                }
            }
            WriteOutcome::Failure(reason) => {
                warn!(path = %entry.destination_path, error = %reason, "Couldn't write file");
                EntryOutcome::Failed(EntryError::Persistence {
                    path: entry.destination_path.clone(),
                    reason,
                })
            }
        }
    }
}

/// Holds the engine's running flag for the duration of one run.
struct RunGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> RunGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
