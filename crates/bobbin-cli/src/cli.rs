//! CLI argument parsing using clap derive

use std::path::PathBuf;

use bobbin_core::{FileType, SortColumn};
use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Bobbin - Keep project files in sync with documents on the web
#[derive(Parser, Debug)]
#[command(name = "bobbin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root (defaults to the nearest directory holding .bobbin/settings.toml)
    #[arg(short = 'C', long, global = true, env = "BOBBIN_PROJECT")]
    pub project: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Create .bobbin/settings.toml in the project root
    Init,

    /// Fetch every entry now and write whatever changed
    ///
    /// Prints one report line per entry. Failures are reported and the
    /// remaining entries are still processed.
    Run,

    /// Refresh periodically until interrupted
    ///
    /// Without --interval, runs happen only while auto refresh is on
    /// (see `bobbin config --auto-refresh`).
    ///
    /// Examples:
    ///   bobbin watch                 # Use the interval from settings
    ///   bobbin watch --interval 30   # Refresh every 30 seconds
    Watch {
        /// Seconds between runs (clamped to 5..=999); runs even with auto refresh off
        #[arg(short, long)]
        interval: Option<f64>,

        /// Stop after this many runs
        #[arg(long)]
        runs: Option<usize>,
    },

    /// Add a new entry
    ///
    /// Examples:
    ///   bobbin add --name Dialogue --url https://docs.google.com/document/d/<id>/edit
    ///   bobbin add --name Stats --type csv --dest Assets/stats.csv
    Add {
        /// Entry name (defaults to "Item <id>")
        #[arg(short, long)]
        name: Option<String>,

        /// Source URL
        #[arg(short, long)]
        url: Option<String>,

        /// Project-relative destination path
        #[arg(short, long)]
        dest: Option<String>,

        /// File type, used for the default destination name
        #[arg(short = 't', long = "type", default_value = "text")]
        file_type: FileType,

        /// Add the entry disabled
        #[arg(long)]
        disabled: bool,
    },

    /// Remove entries by id or name
    Remove {
        /// Entry ids or names
        #[arg(required = true)]
        entries: Vec<String>,
    },

    /// List configured entries
    List {
        /// Column to sort by (enabled, name, url, type, destination)
        #[arg(short, long)]
        sort: Option<SortColumn>,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Only show entries whose name contains this text
        #[arg(long)]
        search: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Move an entry to another position in the run order
    ///
    /// Examples:
    ///   bobbin move Dialogue 1    # Fetch Dialogue first
    ///   bobbin move 4 99          # Positions past the end move to the end
    Move {
        /// Entry id or name
        entry: String,

        /// New position, starting at 1
        position: usize,
    },

    /// Enable an entry
    Enable {
        /// Entry id or name
        entry: String,
    },

    /// Disable an entry; disabled entries are never fetched
    Disable {
        /// Entry id or name
        entry: String,
    },

    /// Rename an entry
    Rename {
        /// Entry id or name
        entry: String,

        /// New name
        name: String,
    },

    /// Set an entry's source URL
    SetUrl {
        /// Entry id or name
        entry: String,

        /// Source URL
        url: String,
    },

    /// Set an entry's file type
    SetType {
        /// Entry id or name
        entry: String,

        /// File type (text, csv, json, xml, jpg, png, binary)
        file_type: FileType,
    },

    /// Set an entry's destination and fetch it
    ///
    /// Without a path the destination is `<name>.<extension>` in the
    /// project root. When the entry has a URL a run starts right away.
    SetDest {
        /// Entry id or name
        entry: String,

        /// Project-relative destination path
        path: Option<String>,

        /// Don't start a run afterwards
        #[arg(long)]
        no_run: bool,
    },

    /// Forget an entry's destination; the next write starts fresh
    ClearDest {
        /// Entry id or name
        entry: String,
    },

    /// Print the viewer link for an entry's URL
    Open {
        /// Entry id or name
        entry: String,
    },

    /// Show or change refresh settings
    Config {
        /// Turn periodic refresh on or off
        #[arg(long)]
        auto_refresh: Option<bool>,

        /// Seconds between periodic runs (clamped to 5..=999)
        #[arg(long)]
        interval: Option<f64>,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   bobbin completions bash > ~/.local/share/bash-completion/completions/bobbin
    ///   bobbin completions zsh > ~/.zfunc/_bobbin
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}
