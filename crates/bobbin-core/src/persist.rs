//! Writing fetched content to its destination.

use bobbin_fs::{NormalizedPath, io};
use tracing::debug;

/// Result of persisting one entry's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// Nothing usable was written; the reason ends up in the run report
    Failure(String),
}

impl WriteOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written)
    }
}

/// Stores fetched bytes at a destination path.
///
/// Implementations create missing parent directories and surface every
/// failure as [`WriteOutcome::Failure`] instead of panicking.
pub trait Persister: Send + Sync {
    fn persist(&self, path: &str, bytes: &[u8]) -> WriteOutcome;
}

impl<P: Persister + ?Sized> Persister for &P {
    fn persist(&self, path: &str, bytes: &[u8]) -> WriteOutcome {
        (**self).persist(path, bytes)
    }
}

impl<P: Persister + ?Sized> Persister for Box<P> {
    fn persist(&self, path: &str, bytes: &[u8]) -> WriteOutcome {
        (**self).persist(path, bytes)
    }
}

/// Writes destinations below a project root with atomic, locked writes.
#[derive(Debug, Clone)]
pub struct FsPersister {
    root: NormalizedPath,
}

impl FsPersister {
    pub fn new(root: impl Into<NormalizedPath>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Absolute location of a project-relative destination.
    pub fn resolve(&self, path: &str) -> bobbin_fs::Result<NormalizedPath> {
        self.root.resolve_within(path)
    }
}

impl Persister for FsPersister {
    fn persist(&self, path: &str, bytes: &[u8]) -> WriteOutcome {
        let target = match self.resolve(path) {
            Ok(target) => target,
            Err(e) => return WriteOutcome::Failure(e.to_string()),
        };

        match io::write_atomic(&target, bytes) {
            Ok(()) => {
                debug!(path = %target, bytes = bytes.len(), "Persisted content");
                WriteOutcome::Written
            }
            Err(e) => WriteOutcome::Failure(e.to_string()),
        }
    }
}
