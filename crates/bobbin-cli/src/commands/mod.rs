//! Command implementations for bobbin-cli

pub mod config;
pub mod entry;
pub mod init;
pub mod list;
pub mod sync;

pub use config::run_config;
pub use entry::{
    NewEntry, run_add, run_clear_dest, run_move, run_remove, run_rename, run_set_dest,
    run_set_enabled, run_set_type, run_set_url,
};
pub use init::run_init;
pub use list::{run_list, run_open};
pub use sync::{run_refresh, run_watch};
