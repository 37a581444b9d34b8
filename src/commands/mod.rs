//! CLI command handlers.

mod config;
mod downloads;
mod providers;
mod search;

pub use config::run_config_command;
pub use downloads::{
    run_add_command, run_batch_command, run_cancel_command, run_downloads_command,
    run_organize_command,
};
pub use providers::{run_providers_command, run_status_command};
pub use search::run_search_command;
