//! Settings and the entry store
//!
//! Everything the operator configures lives in one settings file,
//! `.bobbin/settings.toml` by default:
//!
//! ```toml
//! auto_refresh = true
//! refresh_interval = 60.0
//!
//! [[entries]]
//! id = 1
//! name = "Dialogue"
//! source_url = "https://docs.google.com/document/d/<id>/edit"
//! destination_path = "Assets/dialogue.txt"
//! file_type = "text"
//! ```
//!
//! # Example
//!
//! ```ignore
//! use bobbin_core::config::SettingsStore;
//!
//! let store = SettingsStore::for_project("/path/to/project");
//! let mut settings = store.load()?;
//! settings.add_entry().source_url = "https://example.com/data.json".into();
//! store.save(&settings)?;
//! ```

mod settings;
mod store;

pub use settings::{
    DEFAULT_REFRESH_INTERVAL, MAX_REFRESH_INTERVAL, MIN_REFRESH_INTERVAL, Settings, SortColumn,
};
pub use store::SettingsStore;
