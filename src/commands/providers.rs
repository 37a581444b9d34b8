//! Provider and status command handlers.

use anyhow::Result;

use abclient::ApiClient;

use crate::cli::ProvidersArgs;

pub async fn run_providers_command(client: &ApiClient, args: &ProvidersArgs) -> Result<()> {
    if let Some(provider_type) = args.test.as_deref() {
        let outcome = client.test_provider(provider_type).await?;
        println!(
            "{provider_type}: {} ({})",
            if outcome.success { "ok" } else { "failed" },
            outcome.message
        );
        if !outcome.success {
            anyhow::bail!("provider test failed");
        }
        return Ok(());
    }

    let providers = client.list_providers().await?;
    if providers.is_empty() {
        println!("No providers configured.");
        return Ok(());
    }
    for provider in &providers {
        println!(
            "{:<12} {:<8} {}",
            provider.provider_type,
            if provider.enabled { "enabled" } else { "disabled" },
            provider.display_name
        );
    }
    Ok(())
}

pub async fn run_status_command(client: &ApiClient) -> Result<()> {
    let outcome = client.test_qbittorrent().await?;
    println!(
        "qBittorrent: {} ({})",
        if outcome.success { "ok" } else { "failed" },
        outcome.message
    );
    if !outcome.success {
        anyhow::bail!("qBittorrent connection test failed");
    }
    Ok(())
}
