//! Run and watch command implementations
//!
//! Both load the settings, hand the entries to a [`SyncEngine`] and merge
//! the returned entries back into the settings file by id.

use std::path::Path;
use std::time::{Duration, Instant};

use bobbin_core::{
    AutoRefresh, EntryOutcome, Fetcher, FsPersister, ReportLine, RunReport, SettingsStore,
    SyncEngine,
};
use bobbin_http::HttpFetcher;
use colored::Colorize;
use tracing::debug;

use crate::error::Result;

/// How often `watch` wakes up to check whether a run is due
const WATCH_TICK: Duration = Duration::from_secs(1);

/// Engine writing below `store`'s project root over real HTTP.
pub fn http_engine(store: &SettingsStore) -> Result<SyncEngine<HttpFetcher, FsPersister>> {
    Ok(SyncEngine::new(HttpFetcher::new()?, store.persister()))
}

/// Run the run command
pub async fn run_refresh(root: &Path) -> Result<()> {
    let store = SettingsStore::for_project(root);
    let engine = http_engine(&store)?;
    if let Some(report) = refresh(&store, &engine).await? {
        print_report(&report);
    }
    Ok(())
}

/// Run the watch command
///
/// Refreshes immediately, then every interval until interrupted or until
/// `max_runs` runs have completed. Without an explicit `interval`, runs
/// only happen while `auto_refresh` is on in the settings.
pub async fn run_watch(root: &Path, interval: Option<f64>, max_runs: Option<usize>) -> Result<()> {
    let store = SettingsStore::for_project(root);
    let engine = http_engine(&store)?;
    watch(&store, &engine, interval, max_runs).await
}

/// One run over every entry in `store`, saving the results.
///
/// Returns `None` when `engine` was already busy.
pub async fn refresh<F: Fetcher>(
    store: &SettingsStore,
    engine: &SyncEngine<F, FsPersister>,
) -> Result<Option<RunReport>> {
    let mut settings = store.load()?;
    let stale = store.reconcile_destinations(&mut settings);
    if !stale.is_empty() {
        debug!(entries = ?stale, "Destination files missing, forcing rewrite");
    }

    let Some(outcome) = engine.run(&settings.entries).await else {
        return Ok(None);
    };

    // Merge into a fresh load so edits saved during the run survive.
    let mut latest = store.load()?;
    let edited = latest.apply_run(&settings.entries, &outcome.entries);
    if !edited.is_empty() {
        debug!(entries = ?edited, "Entries edited during the run, keeping the edits");
    }
    store.save(&latest)?;

    Ok(Some(outcome.report))
}

pub async fn watch<F: Fetcher>(
    store: &SettingsStore,
    engine: &SyncEngine<F, FsPersister>,
    interval: Option<f64>,
    max_runs: Option<usize>,
) -> Result<()> {
    let mut settings = store.load()?;
    if let Some(seconds) = interval {
        settings.set_refresh_interval(seconds)?;
    }
    let mut schedule = AutoRefresh::from_settings(&settings);

    println!(
        "{} Refreshing every {} seconds. Press Ctrl-C to stop.",
        "=>".blue().bold(),
        schedule.interval().as_secs_f64()
    );
    if interval.is_none() && !settings.auto_refresh {
        println!(
            "   {} auto refresh is off; waiting for `bobbin config --auto-refresh true`",
            "note:".yellow()
        );
    }

    let mut completed = 0;
    loop {
        let now = Instant::now();
        if !schedule.is_due(now) {
            debug!("{}", schedule.countdown(now));
        } else if interval.is_none() && !store.load()?.auto_refresh {
            debug!("Auto refresh is off, skipping run");
        } else if schedule.poll(now) {
            if let Some(report) = refresh(store, engine).await? {
                print_report(&report);
                completed += 1;
            }
            if max_runs.is_some_and(|max| completed >= max) {
                return Ok(());
            }
            if interval.is_none() {
                schedule.set_interval(AutoRefresh::from_settings(&store.load()?).interval());
            }
        }
        tokio::time::sleep(WATCH_TICK).await;
    }
}

/// Print a run report, one colored line per entry.
pub fn print_report(report: &RunReport) {
    println!("{}", report.header().bold());
    for line in report.lines() {
        println!("{}", paint(line));
    }
}

fn paint(line: &ReportLine) -> colored::ColoredString {
    let text = line.to_string();
    match line.outcome {
        EntryOutcome::Updated { .. } => text.green(),
        EntryOutcome::Unchanged => text.normal(),
        EntryOutcome::Disabled => text.dimmed(),
        EntryOutcome::Failed(_) => text.red(),
    }
}
