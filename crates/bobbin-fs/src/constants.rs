//! Well-known Bobbin paths inside a project.

use std::path::Path;

/// Standard project-relative locations used by Bobbin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BobbinPath {
    /// The `.bobbin` directory (configuration root)
    ConfigDir,
    /// The settings file holding sync entries and refresh options
    SettingsFile,
}

impl BobbinPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigDir => ".bobbin",
            Self::SettingsFile => ".bobbin/settings.toml",
        }
    }
}

impl AsRef<Path> for BobbinPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for BobbinPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for BobbinPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
