//! Entry management commands
//!
//! Every command here loads the settings, changes one thing and saves.
//! Entries are addressed by id or by name (see [`Settings::lookup`]).

use std::path::Path;

use bobbin_core::{FileType, Settings, SettingsStore, SyncEntry};
use colored::Colorize;

use crate::error::{CliError, Result};

/// Fields for a new entry; anything unset stays unconfigured.
#[derive(Debug, Default, Clone)]
pub struct NewEntry {
    pub name: Option<String>,
    pub url: Option<String>,
    pub dest: Option<String>,
    pub file_type: FileType,
    pub disabled: bool,
}

/// Load settings, apply `edit` to the entry matching `query`, save.
fn edit_entry<T>(
    root: &Path,
    query: &str,
    edit: impl FnOnce(&mut SyncEntry) -> T,
) -> Result<(SyncEntry, T)> {
    let store = SettingsStore::for_project(root);
    let mut settings = store.load()?;
    let id = settings.lookup(query)?;
    let entry = settings
        .entry_mut(id)
        .ok_or_else(|| CliError::user(format!("Entry '{query}' disappeared")))?;
    let result = edit(entry);
    let snapshot = entry.clone();
    store.save(&settings)?;
    Ok((snapshot, result))
}

/// Run the add command
///
/// Returns the id of the new entry.
pub fn run_add(root: &Path, new: NewEntry) -> Result<u32> {
    let store = SettingsStore::for_project(root);
    let mut settings = store.load()?;

    let entry = settings.add_entry();
    if let Some(name) = new.name {
        entry.name = name;
    }
    if let Some(url) = new.url {
        entry.source_url = url;
    }
    if let Some(dest) = new.dest {
        entry.destination_path = dest;
    }
    entry.file_type = new.file_type;
    entry.enabled = !new.disabled;

    let id = entry.id;
    let name = entry.name.clone();
    let unconfigured = !entry.has_url() || !entry.has_destination();
    store.save(&settings)?;

    println!("{} Added entry {} ({})", "OK".green().bold(), id, name.cyan());
    if unconfigured {
        println!(
            "   {} set a URL and a destination before the next run",
            "note:".yellow()
        );
    }
    Ok(id)
}

/// Run the remove command
pub fn run_remove(root: &Path, queries: &[String]) -> Result<()> {
    let store = SettingsStore::for_project(root);
    let mut settings = store.load()?;

    let ids = queries
        .iter()
        .map(|q| settings.lookup(q))
        .collect::<bobbin_core::Result<Vec<u32>>>()?;
    let removed = settings.remove_entries(&ids);
    store.save(&settings)?;

    for entry in &removed {
        println!("{} Removed {} ({})", "-".red(), entry.id, entry.name.cyan());
    }
    Ok(())
}

/// Run the move command
///
/// `position` starts at 1; positions past the end move the entry last.
pub fn run_move(root: &Path, query: &str, position: usize) -> Result<()> {
    let Some(index) = position.checked_sub(1) else {
        return Err(CliError::user("Positions start at 1"));
    };
    let store = SettingsStore::for_project(root);
    let mut settings = store.load()?;

    let id = settings.lookup(query)?;
    let landed = settings.move_entry(id, index)?;
    store.save(&settings)?;

    let name = settings.entry(id).map(|e| e.name.clone()).unwrap_or_default();
    println!("{} {} is now at position {}", "OK".green().bold(), name.cyan(), landed + 1);
    Ok(())
}

/// Run the enable and disable commands
pub fn run_set_enabled(root: &Path, query: &str, enabled: bool) -> Result<()> {
    let (entry, _) = edit_entry(root, query, |e| e.enabled = enabled)?;
    let state = if enabled {
        "enabled".green()
    } else {
        "disabled".yellow()
    };
    println!("{} {} {}", "OK".green().bold(), entry.name.cyan(), state);
    Ok(())
}

/// Run the rename command
pub fn run_rename(root: &Path, query: &str, name: &str) -> Result<()> {
    let (entry, old) = edit_entry(root, query, |e| std::mem::replace(&mut e.name, name.to_string()))?;
    println!("{} {} -> {}", "OK".green().bold(), old, entry.name.cyan());
    Ok(())
}

/// Run the set-url command
pub fn run_set_url(root: &Path, query: &str, url: &str) -> Result<()> {
    let (entry, _) = edit_entry(root, query, |e| e.source_url = url.to_string())?;
    println!("{} {} <{}>", "OK".green().bold(), entry.name.cyan(), entry.source_url);
    Ok(())
}

/// Run the set-type command
pub fn run_set_type(root: &Path, query: &str, file_type: FileType) -> Result<()> {
    let (entry, _) = edit_entry(root, query, |e| e.file_type = file_type)?;
    println!("{} {} is {}", "OK".green().bold(), entry.name.cyan(), entry.file_type);
    Ok(())
}

/// Run the set-dest command
///
/// Without `path` the destination becomes `<name>.<extension>`. Returns
/// whether the entry now has a URL worth fetching.
pub fn run_set_dest(root: &Path, query: &str, path: Option<&str>) -> Result<bool> {
    let (entry, _) = edit_entry(root, query, |e| {
        let dest = path.map_or_else(|| e.default_file_name(), str::to_string);
        e.set_destination(dest);
    })?;
    println!(
        "{} {} -> {}",
        "OK".green().bold(),
        entry.name.cyan(),
        entry.destination_path
    );
    Ok(entry.enabled && entry.has_url())
}

/// Run the clear-dest command
pub fn run_clear_dest(root: &Path, query: &str) -> Result<()> {
    let (entry, _) = edit_entry(root, query, SyncEntry::clear_destination)?;
    println!("{} {} has no destination", "OK".green().bold(), entry.name.cyan());
    Ok(())
}

/// Entry by id or name, for read-only commands.
pub fn find_entry(settings: &Settings, query: &str) -> Result<SyncEntry> {
    let id = settings.lookup(query)?;
    settings
        .entry(id)
        .cloned()
        .ok_or_else(|| CliError::user(format!("Entry '{query}' not found")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn load(root: &Path) -> Settings {
        SettingsStore::for_project(root).load().unwrap()
    }

    fn add_named(root: &Path, name: &str) -> u32 {
        run_add(
            root,
            NewEntry {
                name: Some(name.into()),
                ..NewEntry::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn test_add_default_entry() {
        let temp_dir = TempDir::new().unwrap();

        let id = run_add(temp_dir.path(), NewEntry::default()).unwrap();

        let settings = load(temp_dir.path());
        let entry = settings.entry(id).unwrap();
        assert_eq!(entry.name, "Item 1");
        assert!(entry.enabled);
        assert_eq!(entry.source_url, "");
    }

    #[test]
    fn test_add_configured_entry() {
        let temp_dir = TempDir::new().unwrap();

        let id = run_add(
            temp_dir.path(),
            NewEntry {
                name: Some("Stats".into()),
                url: Some("https://example.com/stats.csv".into()),
                dest: Some("Assets/stats.csv".into()),
                file_type: FileType::Csv,
                disabled: true,
            },
        )
        .unwrap();

        let entry = load(temp_dir.path()).entry(id).cloned().unwrap();
        assert_eq!(entry.source_url, "https://example.com/stats.csv");
        assert_eq!(entry.destination_path, "Assets/stats.csv");
        assert_eq!(entry.file_type, FileType::Csv);
        assert!(!entry.enabled);
    }

    #[test]
    fn test_remove_by_name_and_id() {
        let temp_dir = TempDir::new().unwrap();
        add_named(temp_dir.path(), "A");
        add_named(temp_dir.path(), "B");
        add_named(temp_dir.path(), "C");

        run_remove(temp_dir.path(), &["A".into(), "3".into()]).unwrap();

        let names: Vec<String> = load(temp_dir.path())
            .entries
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["B"]);
    }

    #[test]
    fn test_remove_unknown_entry_changes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        add_named(temp_dir.path(), "A");

        let result = run_remove(temp_dir.path(), &["A".into(), "Missing".into()]);

        assert!(matches!(
            result,
            Err(CliError::Core(bobbin_core::Error::EntryNotFound { .. }))
        ));
        assert_eq!(load(temp_dir.path()).entries.len(), 1);
    }

    #[test]
    fn test_move_changes_run_order() {
        let temp_dir = TempDir::new().unwrap();
        add_named(temp_dir.path(), "A");
        add_named(temp_dir.path(), "B");
        add_named(temp_dir.path(), "C");
        let names = |root: &Path| -> Vec<String> {
            load(root).entries.into_iter().map(|e| e.name).collect()
        };

        run_move(temp_dir.path(), "C", 1).unwrap();
        assert_eq!(names(temp_dir.path()), vec!["C", "A", "B"]);

        run_move(temp_dir.path(), "1", 99).unwrap();
        assert_eq!(names(temp_dir.path()), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_move_rejects_position_zero() {
        let temp_dir = TempDir::new().unwrap();
        add_named(temp_dir.path(), "A");
        add_named(temp_dir.path(), "B");

        let result = run_move(temp_dir.path(), "B", 0);

        assert!(matches!(result, Err(CliError::User { .. })));
        let first = load(temp_dir.path()).entries.remove(0);
        assert_eq!(first.name, "A");
    }

    #[test]
    fn test_disable_and_enable() {
        let temp_dir = TempDir::new().unwrap();
        let id = add_named(temp_dir.path(), "Dialogue");

        run_set_enabled(temp_dir.path(), "Dialogue", false).unwrap();
        assert!(!load(temp_dir.path()).entry(id).unwrap().enabled);

        run_set_enabled(temp_dir.path(), &id.to_string(), true).unwrap();
        assert!(load(temp_dir.path()).entry(id).unwrap().enabled);
    }

    #[test]
    fn test_rename() {
        let temp_dir = TempDir::new().unwrap();
        let id = add_named(temp_dir.path(), "Old");

        run_rename(temp_dir.path(), "Old", "New").unwrap();

        assert_eq!(load(temp_dir.path()).entry(id).unwrap().name, "New");
    }

    #[test]
    fn test_set_url_and_type() {
        let temp_dir = TempDir::new().unwrap();
        let id = add_named(temp_dir.path(), "Data");

        run_set_url(temp_dir.path(), "Data", "https://example.com/data.json").unwrap();
        run_set_type(temp_dir.path(), "Data", FileType::Json).unwrap();

        let settings = load(temp_dir.path());
        let entry = settings.entry(id).unwrap();
        assert_eq!(entry.source_url, "https://example.com/data.json");
        assert_eq!(entry.file_type, FileType::Json);
    }

    #[test]
    fn test_set_dest_defaults_to_name_and_extension() {
        let temp_dir = TempDir::new().unwrap();
        let id = run_add(
            temp_dir.path(),
            NewEntry {
                name: Some("Stats".into()),
                file_type: FileType::Csv,
                ..NewEntry::default()
            },
        )
        .unwrap();

        let fetchable = run_set_dest(temp_dir.path(), "Stats", None).unwrap();

        assert!(!fetchable);
        assert_eq!(
            load(temp_dir.path()).entry(id).unwrap().destination_path,
            "Stats.csv"
        );
    }

    #[test]
    fn test_set_dest_resets_tracked_state() {
        let temp_dir = TempDir::new().unwrap();
        let store = SettingsStore::for_project(temp_dir.path());
        let mut settings = Settings::default();
        let entry = settings.add_entry();
        entry.source_url = "https://example.com/a.txt".into();
        entry.destination_path = "Assets/old.txt".into();
        entry.last_content_hash = "abc".into();
        entry.has_destination_asset = true;
        store.save(&settings).unwrap();

        let fetchable = run_set_dest(temp_dir.path(), "1", Some("Assets/new.txt")).unwrap();

        assert!(fetchable);
        let entry = load(temp_dir.path()).entries.remove(0);
        assert_eq!(entry.destination_path, "Assets/new.txt");
        assert_eq!(entry.last_content_hash, "");
        assert!(!entry.has_destination_asset);
    }

    #[test]
    fn test_clear_dest() {
        let temp_dir = TempDir::new().unwrap();
        let store = SettingsStore::for_project(temp_dir.path());
        let mut settings = Settings::default();
        let entry = settings.add_entry();
        entry.destination_path = "Assets/a.txt".into();
        entry.has_destination_asset = true;
        store.save(&settings).unwrap();

        run_clear_dest(temp_dir.path(), "Item 1").unwrap();

        let entry = load(temp_dir.path()).entries.remove(0);
        assert_eq!(entry.destination_path, "");
        assert!(!entry.has_destination_asset);
    }
}
