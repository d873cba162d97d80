//! List and open commands

use std::path::Path;

use bobbin_core::{SettingsStore, SortColumn, SyncEntry, denormalize};
use colored::Colorize;

use crate::commands::entry::find_entry;
use crate::error::Result;

/// Run the list command
pub fn run_list(
    root: &Path,
    sort: Option<SortColumn>,
    descending: bool,
    search: Option<&str>,
    json: bool,
) -> Result<()> {
    let settings = SettingsStore::for_project(root).load()?;
    let entries = select(&settings, sort, descending, search);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("{}", "No entries.".dimmed());
        println!("Run {} to add one.", "bobbin add --url <URL>".cyan());
        return Ok(());
    }

    println!(
        "{:>4}  {:<3} {:<20} {:<6} {:<28} {}",
        "ID".bold(),
        "ON".bold(),
        "NAME".bold(),
        "TYPE".bold(),
        "DESTINATION".bold(),
        "URL".bold()
    );
    for entry in &entries {
        let on = if entry.enabled {
            "yes".green()
        } else {
            "no".yellow()
        };
        let dest = if entry.destination_path.is_empty() {
            "(none)".dimmed()
        } else if entry.has_destination_asset {
            entry.destination_path.normal()
        } else {
            entry.destination_path.as_str().dimmed()
        };
        println!(
            "{:>4}  {:<3} {:<20} {:<6} {:<28} {}",
            entry.id,
            on,
            entry.name.cyan(),
            entry.file_type,
            dest,
            display_url(&entry.source_url)
        );
    }

    println!();
    println!("{} {} entries", "Total:".dimmed(), entries.len());
    Ok(())
}

/// Run the open command
///
/// Prints the viewer link for the entry's URL so it can be opened in a browser.
pub fn run_open(root: &Path, query: &str) -> Result<()> {
    let settings = SettingsStore::for_project(root).load()?;
    let entry = find_entry(&settings, query)?;
    println!("{}", display_url(&entry.source_url));
    Ok(())
}

/// Viewer form of a stored URL; malformed export links are shown as stored.
fn display_url(url: &str) -> String {
    denormalize(url).unwrap_or_else(|_| url.to_string())
}

fn select<'a>(
    settings: &'a bobbin_core::Settings,
    sort: Option<SortColumn>,
    descending: bool,
    search: Option<&str>,
) -> Vec<&'a SyncEntry> {
    let ordered = match sort {
        Some(column) => settings.sorted(column, !descending),
        None => settings.entries.iter().collect(),
    };
    let needle = search.map(str::to_lowercase).unwrap_or_default();
    ordered
        .into_iter()
        .filter(|e| e.name.to_lowercase().contains(&needle))
        .collect()
}
