//! Persisted settings: refresh options and the ordered entry list.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::entry::SyncEntry;
use crate::{Error, Result};

pub const DEFAULT_REFRESH_INTERVAL: f64 = 60.0;
pub const MIN_REFRESH_INTERVAL: f64 = 5.0;
pub const MAX_REFRESH_INTERVAL: f64 = 999.0;

fn default_interval() -> f64 {
    DEFAULT_REFRESH_INTERVAL
}

/// Column used to order entries for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Enabled,
    Name,
    Url,
    FileType,
    Destination,
}

impl std::str::FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "enabled" => Ok(Self::Enabled),
            "name" => Ok(Self::Name),
            "url" => Ok(Self::Url),
            "type" | "file-type" => Ok(Self::FileType),
            "destination" | "path" => Ok(Self::Destination),
            other => Err(format!("unknown sort column '{other}'")),
        }
    }
}

/// Refresh options plus the entries to synchronize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Run automatically every `refresh_interval` seconds
    #[serde(default)]
    pub auto_refresh: bool,

    /// Seconds between automatic runs
    #[serde(default = "default_interval")]
    pub refresh_interval: f64,

    #[serde(default)]
    pub entries: Vec<SyncEntry>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_refresh: false,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            entries: Vec::new(),
        }
    }
}

impl Settings {
    /// Set the auto-refresh interval, clamped to the supported range.
    ///
    /// # Errors
    ///
    /// Rejects NaN and infinite values.
    pub fn set_refresh_interval(&mut self, seconds: f64) -> Result<f64> {
        if !seconds.is_finite() {
            return Err(Error::InvalidSetting {
                key: "refresh_interval".into(),
                message: format!("{seconds} is not a number of seconds"),
            });
        }
        self.refresh_interval = seconds.clamp(MIN_REFRESH_INTERVAL, MAX_REFRESH_INTERVAL);
        Ok(self.refresh_interval)
    }

    /// The interval actually used, even if the file holds an out-of-range value.
    pub fn effective_interval(&self) -> f64 {
        if self.refresh_interval.is_finite() {
            self.refresh_interval
                .clamp(MIN_REFRESH_INTERVAL, MAX_REFRESH_INTERVAL)
        } else {
            DEFAULT_REFRESH_INTERVAL
        }
    }

    /// Next free entry id.
    ///
    /// One past the highest id, or the lowest unused id once the highest
    /// is `u32::MAX`.
    pub fn next_id(&self) -> u32 {
        match self.entries.iter().map(|e| e.id).max() {
            None => 1,
            Some(max) => max.checked_add(1).unwrap_or_else(|| self.lowest_free_id()),
        }
    }

    fn lowest_free_id(&self) -> u32 {
        let mut used: Vec<u32> = self.entries.iter().map(|e| e.id).collect();
        used.sort_unstable();
        let mut candidate = 1u32;
        for id in used {
            if id == candidate {
                candidate = candidate.saturating_add(1);
            } else if id > candidate {
                break;
            }
        }
        candidate
    }

    /// Append a new, unconfigured entry named `Item <id>`.
    pub fn add_entry(&mut self) -> &mut SyncEntry {
        let id = self.next_id();
        self.push_entry(SyncEntry::new(id, format!("Item {id}")))
    }

    /// Append `entry`, reassigning its id if it collides with an existing one.
    pub fn push_entry(&mut self, mut entry: SyncEntry) -> &mut SyncEntry {
        if self.entry(entry.id).is_some() || entry.id == 0 {
            entry.id = self.next_id();
        }
        self.entries.push(entry);
        let last = self.entries.len() - 1;
        &mut self.entries[last]
    }

    /// Remove the entries with the given ids, returning them in list order.
    pub fn remove_entries(&mut self, ids: &[u32]) -> Vec<SyncEntry> {
        let (removed, kept): (Vec<SyncEntry>, Vec<SyncEntry>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|e| ids.contains(&e.id));
        self.entries = kept;
        removed
    }

    /// Move the entry with `id` to `index`, shifting the others.
    ///
    /// Indexes past the end move the entry to the end. Returns the index
    /// the entry landed at.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntryNotFound`] when no entry has `id`.
    pub fn move_entry(&mut self, id: u32, index: usize) -> Result<usize> {
        let from = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| Error::EntryNotFound {
                query: id.to_string(),
            })?;
        let entry = self.entries.remove(from);
        let to = index.min(self.entries.len());
        self.entries.insert(to, entry);
        Ok(to)
    }

    pub fn entry(&self, id: u32) -> Option<&SyncEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn entry_mut(&mut self, id: u32) -> Option<&mut SyncEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    /// Resolve an operator-supplied reference: a numeric id first, then
    /// the first entry with that exact name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntryNotFound`] when nothing matches.
    pub fn lookup(&self, query: &str) -> Result<u32> {
        if let Ok(id) = query.parse::<u32>()
            && self.entry(id).is_some()
        {
            return Ok(id);
        }
        self.entries
            .iter()
            .find(|e| e.name == query)
            .map(|e| e.id)
            .ok_or_else(|| Error::EntryNotFound {
                query: query.to_string(),
            })
    }

    /// Fold the entries returned by a run back into the store.
    ///
    /// `started` holds the entries as they were handed to the run and
    /// `updated` the entries it returned. Matches by id and copies only the
    /// fields a run may change. An entry whose URL, destination or hash was
    /// edited while the run was in flight keeps the edit and is skipped, as
    /// are entries removed in the meantime. Returns the skipped ids.
    pub fn apply_run(&mut self, started: &[SyncEntry], updated: &[SyncEntry]) -> Vec<u32> {
        let mut skipped = Vec::new();
        for (before, fresh) in started.iter().zip(updated) {
            let Some(entry) = self.entry_mut(fresh.id) else {
                continue;
            };
            let edited = before.id != fresh.id
                || entry.source_url != before.source_url
                || entry.destination_path != before.destination_path
                || entry.last_content_hash != before.last_content_hash;
            if edited {
                skipped.push(fresh.id);
                continue;
            }
            entry.source_url.clone_from(&fresh.source_url);
            entry.last_content_hash.clone_from(&fresh.last_content_hash);
            entry.has_destination_asset = fresh.has_destination_asset;
        }
        skipped
    }

    /// Entries whose name contains `query`, ignoring case. An empty query matches all.
    pub fn search(&self, query: &str) -> Vec<&SyncEntry> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Entries ordered by `column`. Ties keep their list order.
    pub fn sorted(&self, column: SortColumn, ascending: bool) -> Vec<&SyncEntry> {
        let mut sorted: Vec<&SyncEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| {
            let ordering = compare(a, b, column);
            if ascending { ordering } else { ordering.reverse() }
        });
        sorted
    }
}

fn compare(a: &SyncEntry, b: &SyncEntry, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Enabled => a.enabled.cmp(&b.enabled),
        SortColumn::Name => a.name.cmp(&b.name),
        SortColumn::Url => a.source_url.cmp(&b.source_url),
        SortColumn::FileType => a.file_type.cmp(&b.file_type),
        SortColumn::Destination => a.destination_path.cmp(&b.destination_path),
    }
}
