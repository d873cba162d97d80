//! [`TestProject`] temporary project directory.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary project root with helpers for arranging and asserting files.
///
/// # Example
///
/// ```rust
/// use bobbin_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.write("Assets/dialogue.txt", "old");
/// project.assert_file_contains("Assets/dialogue.txt", "old");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of a project-relative file.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Default settings file location.
    pub fn settings_path(&self) -> PathBuf {
        self.path(".bobbin/settings.toml")
    }

    /// Write `content` at `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: impl AsRef<[u8]>) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }

    pub fn read(&self, relative: &str) -> String {
        let full_path = self.path(relative);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, relative: &str) {
        let full_path = self.path(relative);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, relative: &str) {
        let full_path = self.path(relative);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, relative: &str, content: &str) {
        let file_content = self.read(relative);
        assert!(
            file_content.contains(content),
            "File {relative} does not contain expected content.\nExpected: {content}\nActual: {file_content}"
        );
    }
}
