//! Project root detection
//!
//! Commands work from anywhere below a project: the root is the nearest
//! ancestor holding `.bobbin/settings.toml`, the way git finds `.git`.

use std::path::{Path, PathBuf};

use bobbin_fs::BobbinPath;
use tracing::debug;

/// Where a command should operate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectContext {
    /// A settings file was found at or above the starting directory
    Found { root: PathBuf },

    /// No settings file anywhere up the tree
    NotAProject { cwd: PathBuf },
}

impl ProjectContext {
    /// Root to use: the detected project, or the starting directory.
    pub fn root(&self) -> &Path {
        match self {
            ProjectContext::Found { root } => root,
            ProjectContext::NotAProject { cwd } => cwd,
        }
    }

    pub fn is_project(&self) -> bool {
        matches!(self, ProjectContext::Found { .. })
    }
}

/// Walk up from `cwd` looking for a settings file.
pub fn detect_context(cwd: &Path) -> ProjectContext {
    let found = cwd
        .ancestors()
        .find(|dir| dir.join(BobbinPath::SettingsFile.as_str()).is_file());

    match found {
        Some(root) => ProjectContext::Found {
            root: root.to_path_buf(),
        },
        None => ProjectContext::NotAProject {
            cwd: cwd.to_path_buf(),
        },
    }
}

/// Project root from an explicit `--project` flag or by detection from the current directory.
pub fn resolve_root(explicit: Option<&Path>) -> std::io::Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir()?;
    let context = detect_context(&cwd);
    if !context.is_project() {
        debug!(cwd = %cwd.display(), "No settings file found, using current directory");
    }
    Ok(context.root().to_path_buf())
}
