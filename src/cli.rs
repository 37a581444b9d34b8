//! CLI argument definitions using clap derive macros.

use clap::{Parser, Subcommand};

use abclient::DEFAULT_BASE_URL;

/// Command-line client for the audiobook download manager.
///
/// Talks to the backend REST API: search indexers, queue and watch
/// downloads, and manage provider and server configuration.
#[derive(Parser, Debug)]
#[command(name = "abclient")]
#[command(author, version, about)]
pub struct Args {
    /// Base URL of the backend API
    #[arg(long, env = "ABCLIENT_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub api_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..=600), global = true)]
    pub timeout_secs: u64,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search indexers for audiobooks
    Search(SearchArgs),
    /// List downloads, optionally watching until all complete
    Downloads(DownloadsArgs),
    /// Queue a single download
    Add(AddArgs),
    /// Queue a batch of downloads from a JSON file
    Batch(BatchArgs),
    /// Cancel a download and remove it from the list
    Cancel {
        /// Download id
        id: String,
    },
    /// Trigger library organization for a completed download
    Organize {
        /// Download id
        id: String,
    },
    /// Show or change server configuration
    Config(ConfigArgs),
    /// List and test search providers
    Providers(ProvidersArgs),
    /// Probe the qBittorrent connection
    Status,
}

#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Restrict the search to one provider type
    #[arg(long)]
    pub provider: Option<String>,

    /// Group results by series
    #[arg(long)]
    pub group: bool,

    /// Only results in this category
    #[arg(long)]
    pub category: Option<String>,

    /// Only results in this language
    #[arg(long)]
    pub language: Option<String>,

    /// Only results with at least this many seeders
    #[arg(long)]
    pub min_seeders: Option<i64>,

    /// Only freeleech results
    #[arg(long)]
    pub freeleech_only: bool,
}

#[derive(clap::Args, Debug)]
pub struct DownloadsArgs {
    /// Only downloads in this state
    #[arg(long, value_parser = ["active", "completed", "failed"])]
    pub status: Option<String>,

    /// Keep polling and render progress until no active download remains
    #[arg(long)]
    pub watch: bool,
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Book title
    #[arg(long)]
    pub title: String,

    /// Book author
    #[arg(long)]
    pub author: String,

    /// Series name
    #[arg(long)]
    pub series: Option<String>,

    /// Position within the series
    #[arg(long)]
    pub series_number: Option<String>,

    /// Indexer category
    #[arg(long, default_value = "Audiobooks")]
    pub category: String,

    /// Torrent file URL (this or --magnet is required)
    #[arg(long, required_unless_present = "magnet")]
    pub torrent_url: Option<String>,

    /// Magnet link (this or --torrent-url is required)
    #[arg(long)]
    pub magnet: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct BatchArgs {
    /// Path to a JSON array of download requests
    pub file: std::path::PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct ConfigArgs {
    /// Configuration key; omit to print the whole configuration
    pub key: Option<String>,

    /// New value for the key
    #[arg(long, requires = "key")]
    pub set: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct ProvidersArgs {
    /// Test connectivity of one provider type instead of listing
    #[arg(long)]
    pub test: Option<String>,
}
