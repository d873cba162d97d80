//! Run report types
//!
//! A [`RunReport`] is built once per engine run and handed back whole. Its
//! text form is what operators read:
//!
//! ```text
//! Bobbin started refresh at 14:02:11, log is below:
//! - Dialogue: UPDATED Assets/dialogue.txt
//! - Stats: UNCHANGED
//! - [ERROR] Credits: HTTP/1.1 404 Not Found
//! ```

use chrono::{DateTime, Local};

use crate::entry::SyncEntry;
use crate::link::MalformedUrl;

/// Broad category of an [`EntryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// URL or destination missing
    Configuration,
    MalformedUrl,
    /// HTTP status or transport failure
    Fetch,
    /// The response was a sign-in page instead of the document
    AccessRestricted,
    Persistence,
}

/// Why a single entry could not be synchronized.
///
/// Every variant is local to its entry; the run carries on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    #[error("no URL defined, nothing to download")]
    MissingUrl,

    #[error("no asset file path defined, nowhere to save")]
    MissingDestination,

    #[error(transparent)]
    MalformedUrl(#[from] MalformedUrl),

    #[error("{0}")]
    Http(String),

    #[error("{0}")]
    Network(String),

    #[error(
        "This Google Docs share link does not have 'VIEW' access; make sure you enable link sharing."
    )]
    AccessRestricted,

    #[error("failed to write {path}: {reason}")]
    Persistence { path: String, reason: String },
}

impl EntryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingUrl | Self::MissingDestination => ErrorKind::Configuration,
            Self::MalformedUrl(_) => ErrorKind::MalformedUrl,
            Self::Http(_) | Self::Network(_) => ErrorKind::Fetch,
            Self::AccessRestricted => ErrorKind::AccessRestricted,
            Self::Persistence { .. } => ErrorKind::Persistence,
        }
    }
}

/// What happened to one entry during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    Disabled,
    Updated { path: String },
    Unchanged,
    Failed(EntryError),
}

impl EntryOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn error(&self) -> Option<&EntryError> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// One line of the report, tied to the entry it describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub entry_id: u32,
    pub entry_name: String,
    pub outcome: EntryOutcome,
}

impl ReportLine {
    pub fn new(entry: &SyncEntry, outcome: EntryOutcome) -> Self {
        Self {
            entry_id: entry.id,
            entry_name: entry.name.clone(),
            outcome,
        }
    }
}

impl std::fmt::Display for ReportLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = &self.entry_name;
        match &self.outcome {
            EntryOutcome::Disabled => write!(f, "- {name}: DISABLED"),
            EntryOutcome::Updated { path } => write!(f, "- {name}: UPDATED {path}"),
            EntryOutcome::Unchanged => write!(f, "- {name}: UNCHANGED"),
            EntryOutcome::Failed(error) => write!(f, "- [ERROR] {name}: {error}"),
        }
    }
}

/// Outcome log of one run: a start time and one line per entry, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    started_at: DateTime<Local>,
    lines: Vec<ReportLine>,
}

impl RunReport {
    pub(crate) fn new(started_at: DateTime<Local>, lines: Vec<ReportLine>) -> Self {
        Self { started_at, lines }
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    /// Header line naming the run start time.
    pub fn header(&self) -> String {
        format!(
            "Bobbin started refresh at {}, log is below:",
            self.started_at.format("%H:%M:%S")
        )
    }

    pub fn updated_count(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Updated { .. }))
    }

    pub fn unchanged_count(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Unchanged))
    }

    pub fn disabled_count(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Disabled))
    }

    pub fn failed_count(&self) -> usize {
        self.count(EntryOutcome::is_failure)
    }

    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }

    fn count(&self, predicate: impl Fn(&EntryOutcome) -> bool) -> usize {
        self.lines.iter().filter(|line| predicate(&line.outcome)).count()
    }
}

impl std::fmt::Display for RunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.header())?;
        for line in &self.lines {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn line(name: &str, outcome: EntryOutcome) -> ReportLine {
        ReportLine::new(&SyncEntry::new(1, name), outcome)
    }

    #[test]
    fn renders_each_outcome() {
        assert_eq!(line("A", EntryOutcome::Disabled).to_string(), "- A: DISABLED");
        assert_eq!(line("A", EntryOutcome::Unchanged).to_string(), "- A: UNCHANGED");
        assert_eq!(
            line(
                "Dialogue",
                EntryOutcome::Updated {
                    path: "Assets/dialogue.txt".into()
                }
            )
            .to_string(),
            "- Dialogue: UPDATED Assets/dialogue.txt"
        );
        assert_eq!(
            line("B", EntryOutcome::Failed(EntryError::MissingUrl)).to_string(),
            "- [ERROR] B: no URL defined, nothing to download"
        );
        assert_eq!(
            line(
                "C",
                EntryOutcome::Failed(EntryError::Http("HTTP/1.1 404 Not Found".into()))
            )
            .to_string(),
            "- [ERROR] C: HTTP/1.1 404 Not Found"
        );
    }

    #[test]
    fn text_starts_with_header_and_keeps_order() {
        let started = Local.with_ymd_and_hms(2026, 10, 16, 14, 2, 11).unwrap();
        let report = RunReport::new(
            started,
            vec![
                line("First", EntryOutcome::Unchanged),
                line("Second", EntryOutcome::Disabled),
            ],
        );

        assert_eq!(
            report.to_string(),
            "Bobbin started refresh at 14:02:11, log is below:\n- First: UNCHANGED\n- Second: DISABLED"
        );
        assert_eq!(report.unchanged_count(), 1);
        assert_eq!(report.disabled_count(), 1);
        assert!(!report.has_failures());
    }

    #[test]
    fn error_kinds_follow_taxonomy() {
        assert_eq!(EntryError::MissingDestination.kind(), ErrorKind::Configuration);
        assert_eq!(EntryError::Network("down".into()).kind(), ErrorKind::Fetch);
        assert_eq!(EntryError::AccessRestricted.kind(), ErrorKind::AccessRestricted);
        assert_eq!(
            EntryError::Persistence {
                path: "a".into(),
                reason: "b".into()
            }
            .kind(),
            ErrorKind::Persistence
        );
    }
}
