//! Download command handlers: list, watch, add, batch, cancel, organize.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use tracing::debug;

use abclient::model::CreateDownloadRequest;
use abclient::{ApiClient, Download, DownloadStore};

use crate::cli::{AddArgs, BatchArgs, DownloadsArgs};

const WATCH_REDRAW_INTERVAL: Duration = Duration::from_millis(500);

pub async fn run_downloads_command(store: &DownloadStore, args: &DownloadsArgs) -> Result<()> {
    store.fetch_downloads().await;
    if let Some(error) = store.last_error() {
        anyhow::bail!(error);
    }

    if args.watch {
        return watch(store).await;
    }

    let downloads = match args.status.as_deref() {
        Some("active") => store.active_downloads(),
        Some("completed") => store.completed_downloads(),
        Some("failed") => store.failed_downloads(),
        _ => store.downloads(),
    };
    if downloads.is_empty() {
        println!("No downloads.");
        return Ok(());
    }
    for download in &downloads {
        print_download(download);
    }
    Ok(())
}

/// Polls the server and renders a progress bar per active download until no
/// active download remains. The loop ends when the store's polling handle
/// clears itself.
async fn watch(store: &DownloadStore) -> Result<()> {
    if store.active_downloads().is_empty() {
        println!("No active downloads to watch.");
        return Ok(());
    }

    store.start_polling();
    let multi = MultiProgress::new();
    let style = ProgressStyle::with_template("{prefix:<40!} {bar:30} {pos:>3}% {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    let mut bars: HashMap<String, ProgressBar> = HashMap::new();

    loop {
        for download in store.downloads() {
            if download.status.is_active() {
                let bar = bars.entry(download.id.clone()).or_insert_with(|| {
                    let bar = multi.add(ProgressBar::new(100));
                    bar.set_style(style.clone());
                    bar.set_prefix(download.title.clone());
                    bar
                });
                bar.set_position(u64::from(download.progress));
                bar.set_message(download.status.to_string());
            } else if let Some(bar) = bars.remove(&download.id) {
                bar.set_position(u64::from(download.progress));
                bar.finish_with_message(download.status.to_string());
            }
        }
        if !store.is_polling() {
            break;
        }
        tokio::time::sleep(WATCH_REDRAW_INTERVAL).await;
    }

    for bar in bars.into_values() {
        bar.finish_and_clear();
    }
    debug!("watch loop finished");
    println!(
        "All downloads settled: {} completed, {} failed.",
        store.completed_downloads().len(),
        store.failed_downloads().len()
    );
    Ok(())
}

pub async fn run_add_command(store: &DownloadStore, args: &AddArgs) -> Result<()> {
    let request = CreateDownloadRequest {
        title: args.title.clone(),
        author: args.author.clone(),
        series: args.series.clone(),
        series_number: args.series_number.clone(),
        category: args.category.clone(),
        torrent_url: args.torrent_url.clone(),
        magnet_link: args.magnet.clone(),
    };
    match store.create_download(request).await {
        Some(download) => {
            print_download(&download);
            Ok(())
        }
        None => anyhow::bail!("failed to queue download"),
    }
}

pub async fn run_batch_command(store: &DownloadStore, args: &BatchArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("cannot read {}", args.file.display()))?;
    let requests: Vec<CreateDownloadRequest> = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a JSON array of download requests", args.file.display()))?;
    if requests.is_empty() {
        println!("Nothing to queue: {} is empty.", args.file.display());
        return Ok(());
    }

    let Some(response) = store.create_batch(requests).await else {
        anyhow::bail!("batch request failed");
    };

    println!(
        "Queued {} download(s), {} failed.",
        response.successful.len(),
        response.failed.len()
    );
    for failure in &response.failed {
        println!(
            "  [{}] {}: {}",
            failure.index, failure.request.title, failure.error
        );
    }
    if response.successful.is_empty() {
        anyhow::bail!("no download in the batch was accepted");
    }
    Ok(())
}

/// One-shot cancel goes straight to the client so a refused cancellation
/// fails the process instead of only emitting a notification.
pub async fn run_cancel_command(client: &ApiClient, id: &str) -> Result<()> {
    client.cancel_download(id).await?;
    println!("Download cancelled");
    Ok(())
}

pub async fn run_organize_command(client: &ApiClient, id: &str) -> Result<()> {
    client.organize_download(id).await?;
    println!("Organizing download...");
    Ok(())
}

fn print_download(download: &Download) {
    let detail = match (&download.error_message, &download.organized_path) {
        (Some(error), _) => format!(" ({error})"),
        (None, Some(path)) => format!(" -> {path}"),
        (None, None) => String::new(),
    };
    println!(
        "{}  {:<10} {:>3}%  {} by {}{detail}",
        download.id, download.status, download.progress, download.title, download.author
    );
}
