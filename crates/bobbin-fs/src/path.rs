//! Project-relative path handling
//!
//! Destination paths are written by operators on any platform (for example
//! `Assets\Text\dialogue.txt`), stored in settings files, and resolved
//! against a project root only when bytes are written.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// A path normalized to use forward slashes internally.
///
/// Converts to the platform-native form only at I/O boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Backslashes become forward slashes and repeated separators collapse.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let raw = path.as_ref().to_string_lossy().replace('\\', "/");
        let absolute = raw.starts_with('/');
        let joined = raw
            .split('/')
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .collect::<Vec<_>>()
            .join("/");
        let inner = match (absolute, joined.is_empty()) {
            (true, _) => format!("/{joined}"),
            (false, true) => ".".to_string(),
            (false, false) => joined,
        };
        Self { inner }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        if self.inner == "." {
            return Self::new(segment);
        }
        Self::new(format!("{}/{}", self.inner, segment))
    }

    /// Resolve a project-relative path below this root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutsideRoot`] when `relative` is absolute, carries a
    /// drive prefix, or climbs above the root with `..`.
    pub fn resolve_within(&self, relative: &str) -> Result<Self> {
        let candidate = Self::new(relative);
        if candidate.is_absolute() || candidate.escapes_root() {
            return Err(Error::OutsideRoot {
                path: relative.to_string(),
            });
        }
        Ok(self.join(candidate.as_str()))
    }

    /// True for `/...` paths and Windows drive paths such as `C:/...`.
    pub fn is_absolute(&self) -> bool {
        let bytes = self.inner.as_bytes();
        self.inner.starts_with('/')
            || (bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':')
    }

    /// True when walking the segments in order ever climbs above the start.
    pub fn escapes_root(&self) -> bool {
        let mut depth: i64 = 0;
        for segment in self.inner.split('/') {
            match segment {
                ".." => depth -= 1,
                "" | "." => {}
                _ => depth += 1,
            }
            if depth < 0 {
                return true;
            }
        }
        false
    }

    /// Get the parent directory.
    pub fn parent(&self) -> Option<Self> {
        match self.inner.rfind('/') {
            Some(0) if self.inner.len() > 1 => Some(Self {
                inner: "/".to_string(),
            }),
            Some(idx) if idx > 0 => Some(Self {
                inner: self.inner[..idx].to_string(),
            }),
            _ => None,
        }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        match self.inner.rsplit('/').next() {
            Some("") | Some(".") | None => None,
            Some(name) => Some(name),
        }
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 { None } else { Some(&name[idx + 1..]) }
        })
    }

    /// Check if this path exists on the filesystem.
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Assets/dialogue.txt", "Assets/dialogue.txt")]
    #[case("Assets\\Text\\dialogue.txt", "Assets/Text/dialogue.txt")]
    #[case("Assets//Text/./a.csv", "Assets/Text/a.csv")]
    #[case("/abs/path/", "/abs/path")]
    #[case("", ".")]
    fn normalizes_separators(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(NormalizedPath::new(input).as_str(), expected);
    }

    #[test]
    fn resolve_within_joins_relative_paths() {
        let root = NormalizedPath::new("/project");
        let resolved = root.resolve_within("Assets\\dialogue.txt").unwrap();
        assert_eq!(resolved.as_str(), "/project/Assets/dialogue.txt");
    }

    #[rstest]
    #[case("/etc/passwd")]
    #[case("C:\\Windows\\win.ini")]
    #[case("../outside.txt")]
    #[case("Assets/../../outside.txt")]
    fn resolve_within_rejects_escapes(#[case] relative: &str) {
        let root = NormalizedPath::new("/project");
        assert!(matches!(
            root.resolve_within(relative),
            Err(Error::OutsideRoot { .. })
        ));
    }

    #[test]
    fn inner_parent_segments_stay_inside() {
        let root = NormalizedPath::new("/project");
        assert!(root.resolve_within("Assets/Old/../New/a.txt").is_ok());
    }

    #[test]
    fn parent_and_file_name() {
        let path = NormalizedPath::new("Assets/Text/dialogue.txt");
        assert_eq!(path.parent().unwrap().as_str(), "Assets/Text");
        assert_eq!(path.file_name(), Some("dialogue.txt"));
        assert_eq!(path.extension(), Some("txt"));
        assert_eq!(NormalizedPath::new("/a").parent().unwrap().as_str(), "/");
        assert!(NormalizedPath::new("file").parent().is_none());
    }

    #[test]
    fn hidden_file_has_no_extension() {
        assert_eq!(NormalizedPath::new("dir/.hidden").extension(), None);
    }
}
