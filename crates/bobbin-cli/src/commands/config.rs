//! Refresh settings command

use std::path::Path;

use bobbin_core::SettingsStore;
use colored::Colorize;

use crate::error::Result;

/// Run the config command
///
/// With no options, shows the current refresh settings.
pub fn run_config(root: &Path, auto_refresh: Option<bool>, interval: Option<f64>) -> Result<()> {
    let store = SettingsStore::for_project(root);
    let mut settings = store.load()?;

    if auto_refresh.is_some() || interval.is_some() {
        if let Some(enabled) = auto_refresh {
            settings.auto_refresh = enabled;
        }
        if let Some(seconds) = interval {
            let applied = settings.set_refresh_interval(seconds)?;
            if applied != seconds {
                println!(
                    "{} interval clamped to {} seconds",
                    "warning:".yellow().bold(),
                    applied
                );
            }
        }
        store.save(&settings)?;
    }

    println!("{}", "Refresh Settings".bold());
    println!();
    println!("  {:<14} {}", "Settings:".dimmed(), store.path());
    println!("  {:<14} {}", "Auto refresh:".dimmed(), settings.auto_refresh);
    println!(
        "  {:<14} {} seconds",
        "Interval:".dimmed(),
        settings.effective_interval()
    );
    println!("  {:<14} {}", "Entries:".dimmed(), settings.entries.len());
    Ok(())
}
