//! CLI entry point for the abclient tool.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use abclient::{ApiClient, ClientConfig, DownloadStore, NotificationKind, Notifier};

mod cli;
mod commands;

use cli::{Args, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (warn)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");

    let config = ClientConfig::new(&args.api_url)?
        .with_timeout(Duration::from_secs(args.timeout_secs));
    let client = ApiClient::new(config);

    let notifier = Notifier::new();
    let printer = spawn_notification_printer(&notifier, args.quiet);
    let store = DownloadStore::new(client.clone(), notifier);

    let outcome = match &args.command {
        Command::Search(search_args) => commands::run_search_command(&client, search_args).await,
        Command::Downloads(downloads_args) => {
            commands::run_downloads_command(&store, downloads_args).await
        }
        Command::Add(add_args) => commands::run_add_command(&store, add_args).await,
        Command::Batch(batch_args) => commands::run_batch_command(&store, batch_args).await,
        Command::Cancel { id } => commands::run_cancel_command(&client, id).await,
        Command::Organize { id } => commands::run_organize_command(&client, id).await,
        Command::Config(config_args) => commands::run_config_command(&client, config_args).await,
        Command::Providers(providers_args) => {
            commands::run_providers_command(&client, providers_args).await
        }
        Command::Status => commands::run_status_command(&client).await,
    };

    // Dropping the store drops the only notification sender; the printer
    // drains the buffered messages and its recv loop ends on the closed
    // channel, so no output is lost to a race at exit.
    drop(store);
    let _ = printer.await;

    outcome
}

/// Prints store notifications as they arrive, toast-style, one per line.
fn spawn_notification_printer(notifier: &Notifier, quiet: bool) -> tokio::task::JoinHandle<()> {
    let mut rx = notifier.subscribe();
    tokio::spawn(async move {
        while let Ok(notification) = rx.recv().await {
            if quiet && notification.kind != NotificationKind::Error {
                continue;
            }
            match notification.kind {
                NotificationKind::Error => eprintln!("error: {}", notification.message),
                _ => println!("{}", notification.message),
            }
        }
    })
}
