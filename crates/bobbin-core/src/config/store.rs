//! Loading and saving settings for a project directory.

use bobbin_fs::{BobbinPath, ConfigStore, NormalizedPath};
use tracing::debug;

use super::settings::Settings;
use crate::Result;
use crate::persist::FsPersister;

/// Settings file location plus the project root destinations resolve against.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    root: NormalizedPath,
    path: NormalizedPath,
    config: ConfigStore,
}

impl SettingsStore {
    /// Use the default settings file, `<root>/.bobbin/settings.toml`.
    pub fn for_project(root: impl Into<NormalizedPath>) -> Self {
        let root = root.into();
        let path = root.join(BobbinPath::SettingsFile.as_str());
        Self::at(root, path)
    }

    /// Use an explicit settings file; `.toml`, `.json` and `.yaml` are accepted.
    pub fn at(root: impl Into<NormalizedPath>, path: impl Into<NormalizedPath>) -> Self {
        Self {
            root: root.into(),
            path: path.into(),
            config: ConfigStore::new(),
        }
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load settings; a missing file yields defaults.
    pub fn load(&self) -> Result<Settings> {
        let settings = self.config.load_or_default(&self.path)?;
        debug!(path = %self.path, "Loaded settings");
        Ok(settings)
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        self.config.save(&self.path, settings)?;
        debug!(path = %self.path, entries = settings.entries.len(), "Saved settings");
        Ok(())
    }

    /// A persister writing below this project's root.
    pub fn persister(&self) -> FsPersister {
        FsPersister::new(self.root.clone())
    }

    /// Mark entries whose destination file has disappeared as needing a write.
    ///
    /// Returns the ids of the entries that changed.
    pub fn reconcile_destinations(&self, settings: &mut Settings) -> Vec<u32> {
        let mut changed = Vec::new();
        for entry in settings.entries.iter_mut().filter(|e| e.has_destination_asset) {
            let present = entry.has_destination()
                && self
                    .root
                    .resolve_within(&entry.destination_path)
                    .map(|p| p.is_file())
                    .unwrap_or(false);
            if !present {
                entry.has_destination_asset = false;
                changed.push(entry.id);
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::SyncEntry;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn default_location_is_under_dot_bobbin() {
        let store = SettingsStore::for_project("/project");
        assert_eq!(store.path().as_str(), "/project/.bobbin/settings.toml");
    }

    #[test]
    fn save_then_load_roundtrips() {
        let temp = TempDir::new().unwrap();
        let store = SettingsStore::for_project(temp.path());

        let mut settings = Settings::default();
        settings.auto_refresh = true;
        settings.set_refresh_interval(120.0).unwrap();
        settings
            .add_entry()
            .source_url
            .push_str("https://example.com/data.json");

        store.save(&settings).unwrap();
        assert!(store.exists());
        assert_eq!(store.load().unwrap(), settings);
    }

    #[test]
    fn reconcile_flags_missing_destinations() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("Assets")).unwrap();
        std::fs::write(temp.path().join("Assets/present.txt"), "x").unwrap();
        let store = SettingsStore::for_project(temp.path());

        let mut settings = Settings::default();
        let mut present = SyncEntry::new(1, "present").with_destination("Assets/present.txt");
        present.has_destination_asset = true;
        let mut gone = SyncEntry::new(2, "gone").with_destination("Assets/gone.txt");
        gone.has_destination_asset = true;
        settings.push_entry(present);
        settings.push_entry(gone);

        let changed = store.reconcile_destinations(&mut settings);

        assert_eq!(changed, vec![2]);
        assert!(settings.entry(1).unwrap().has_destination_asset);
        assert!(!settings.entry(2).unwrap().has_destination_asset);
    }
}
