//! Search command handler: query providers, filter, print flat or grouped.

use anyhow::Result;

use abclient::model::{SearchFilters, SearchResult};
use abclient::{ApiClient, SeriesGroup, group_by_series};

use crate::cli::SearchArgs;

pub async fn run_search_command(client: &ApiClient, args: &SearchArgs) -> Result<()> {
    let results = client
        .search(&args.query, args.provider.as_deref())
        .await?;

    let filters = SearchFilters {
        category: args.category.clone(),
        language: args.language.clone(),
        min_seeders: args.min_seeders,
        freeleech_only: args.freeleech_only,
    };
    let results: Vec<SearchResult> = results
        .into_iter()
        .filter(|r| filters.matches(r))
        .collect();

    if results.is_empty() {
        println!("No results for \"{}\".", args.query);
        return Ok(());
    }

    if args.group {
        for group in group_by_series(results) {
            print_group(&group);
        }
    } else {
        for result in &results {
            print_result(result, "");
        }
    }
    Ok(())
}

fn print_group(group: &SeriesGroup) {
    println!("{} ({})", group.series_name, group.books.len());
    for book in &group.books {
        print_result(book, "  ");
    }
}

fn print_result(result: &SearchResult, indent: &str) {
    let number = result
        .series
        .first()
        .and_then(|s| s.number.as_deref())
        .map(|n| format!(" #{n}"))
        .unwrap_or_default();
    println!(
        "{indent}{}{number} by {} [{}] {} seeders, {}",
        result.title, result.author, result.provider, result.seeders, result.size
    );
}
