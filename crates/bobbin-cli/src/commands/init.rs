//! Init command implementation
//!
//! Creates the settings file for a new project.

use std::path::Path;

use bobbin_core::{Settings, SettingsStore};
use colored::Colorize;

use crate::error::Result;

/// Run the init command
///
/// Writes default settings unless the project already has a settings file.
pub fn run_init(root: &Path) -> Result<()> {
    let store = SettingsStore::for_project(root);

    if store.exists() {
        println!(
            "{} Already initialized: {}",
            "OK".green().bold(),
            store.path().as_str().cyan()
        );
        return Ok(());
    }

    store.save(&Settings::default())?;
    println!(
        "{} Created {}",
        "OK".green().bold(),
        store.path().as_str().cyan()
    );
    println!("Run {} to add an entry.", "bobbin add --url <URL>".cyan());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_settings_file() {
        let temp_dir = TempDir::new().unwrap();

        run_init(temp_dir.path()).unwrap();

        assert!(temp_dir.path().join(".bobbin/settings.toml").is_file());
    }

    #[test]
    fn test_init_keeps_existing_settings() {
        let temp_dir = TempDir::new().unwrap();
        let store = SettingsStore::for_project(temp_dir.path());
        let mut settings = Settings::default();
        settings.add_entry();
        store.save(&settings).unwrap();

        run_init(temp_dir.path()).unwrap();

        assert_eq!(store.load().unwrap().entries.len(), 1);
    }
}
