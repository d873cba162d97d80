//! Sync entries: one configured URL → destination mapping each.

use serde::{Deserialize, Serialize};

/// Source URLs and destination paths shorter than this are treated as unset.
pub const MIN_FIELD_LEN: usize = 5;

/// Advisory content type of an entry.
///
/// Only used to suggest a destination file name; fetched bytes are never
/// checked against it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    #[default]
    Text,
    Csv,
    Json,
    Xml,
    Jpg,
    Png,
    Binary,
}

impl FileType {
    /// File extension used for suggested destinations.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Jpg => "jpg",
            Self::Png => "png",
            Self::Binary => "bytes",
        }
    }

    pub const ALL: [FileType; 7] = [
        Self::Text,
        Self::Csv,
        Self::Json,
        Self::Xml,
        Self::Jpg,
        Self::Png,
        Self::Binary,
    ];
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Jpg => "jpg",
            Self::Png => "png",
            Self::Binary => "binary",
        };
        f.pad(name)
    }
}

impl std::str::FromStr for FileType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            "jpg" | "jpeg" => Ok(Self::Jpg),
            "png" => Ok(Self::Png),
            "binary" | "bytes" => Ok(Self::Binary),
            other => Err(format!(
                "unknown file type '{other}' (expected text, csv, json, xml, jpg, png or binary)"
            )),
        }
    }
}

fn default_enabled() -> bool {
    true
}

/// One configured fetch target with its tracked content state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncEntry {
    /// Stable identity across runs, unique within a settings file
    pub id: u32,
    /// Free-form label; not required to be unique
    pub name: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub source_url: String,
    /// Project-relative path the content is written to
    #[serde(default)]
    pub destination_path: String,
    /// Checksum of the last content actually written, empty before the first write
    #[serde(default)]
    pub last_content_hash: String,
    #[serde(default)]
    pub file_type: FileType,
    /// Whether the destination currently exists
    #[serde(default)]
    pub has_destination_asset: bool,
}

impl SyncEntry {
    /// A new, enabled, unconfigured entry.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            enabled: true,
            source_url: String::new(),
            destination_path: String::new(),
            last_content_hash: String::new(),
            file_type: FileType::default(),
            has_destination_asset: false,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    pub fn with_destination(mut self, path: impl Into<String>) -> Self {
        self.destination_path = path.into();
        self
    }

    pub fn with_file_type(mut self, file_type: FileType) -> Self {
        self.file_type = file_type;
        self
    }

    pub fn has_url(&self) -> bool {
        self.source_url.chars().count() >= MIN_FIELD_LEN
    }

    pub fn has_destination(&self) -> bool {
        self.destination_path.chars().count() >= MIN_FIELD_LEN
    }

    /// Suggested destination file name, `<name>.<extension>`.
    pub fn default_file_name(&self) -> String {
        format!("{}.{}", self.name, self.file_type.extension())
    }

    /// Forget the destination: the next run treats the content as new.
    pub fn clear_destination(&mut self) {
        self.destination_path.clear();
        self.last_content_hash.clear();
        self.has_destination_asset = false;
    }

    /// Point the entry at a new destination and force the next write.
    pub fn set_destination(&mut self, path: impl Into<String>) {
        self.destination_path = path.into();
        self.last_content_hash.clear();
        self.has_destination_asset = false;
    }
}
