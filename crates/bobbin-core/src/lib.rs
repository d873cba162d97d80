//! Fetch-and-sync engine for Bobbin
//!
//! Given an ordered list of sync entries (a URL, a project-relative
//! destination and the checksum of the last written content), a run:
//!
//! - **normalizes** document-sharing links into direct-export links
//! - **fetches** each URL through an injected [`Fetcher`]
//! - **compares** a content checksum against the stored one
//! - **persists** changed content through an injected [`Persister`]
//! - **reports** one human-readable line per entry
//!
//! # Architecture
//!
//! ```text
//!                   bobbin-cli
//!                       |
//!                  bobbin-core
//!                       |
//!            +----------+----------+
//!            |                     |
//!        bobbin-fs            bobbin-http
//! ```
//!
//! The engine owns no ambient state apart from its single-run guard.
//! Callers own the entry list and the trigger (manual or [`AutoRefresh`]).

pub mod config;
pub mod entry;
pub mod error;
pub mod hasher;
pub mod link;
pub mod persist;
pub mod schedule;
pub mod sync;

pub use bobbin_http::{FetchResult, Fetcher};
pub use config::{Settings, SettingsStore, SortColumn};
pub use entry::{FileType, SyncEntry};
pub use error::{Error, Result};
pub use hasher::{ContentHasher, Md5Hasher};
pub use link::{MalformedUrl, denormalize, normalize};
pub use persist::{FsPersister, Persister, WriteOutcome};
pub use schedule::AutoRefresh;
pub use sync::{EntryError, EntryOutcome, ErrorKind, ReportLine, RunOutcome, RunReport, SyncEngine};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_entry_not_found_displays_correctly() {
        let error = Error::EntryNotFound {
            query: "Dialogue".into(),
        };

        let display = format!("{}", error);
        assert!(
            display.contains("Dialogue"),
            "Error display should contain the entry, got: {}",
            display
        );
    }
}
