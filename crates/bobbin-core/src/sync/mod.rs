//! Running a refresh over sync entries
//!
//! - **engine**: the sequential fetch / compare / write loop
//! - **report**: per-entry outcomes and the human-readable run log

mod engine;
mod report;

pub use engine::{RunOutcome, SyncEngine};
pub use report::{EntryError, EntryOutcome, ErrorKind, ReportLine, RunReport};
