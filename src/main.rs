use std::process;
use std::time::Duration;

#[macro_use]
mod log;

use client::AssetClient;
use cli::{parse_args, Cli, Commands};
use log::LogSink;
use models::PageResponse;
use viewer::{sorted_by_host, ViewState};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        error!("{e}");
        process::exit(1);
    }
}

async fn run() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = parse_args();
    let client = AssetClient::new(&args.api_url, args.timeout_secs.map(Duration::from_secs))?;

    match args.command {
        Commands::View { ref filter, grid, scroll_threshold } => {
            // The TUI owns the terminal, so logs go to a file or nowhere.
            let sink = match args.log_file.as_deref() {
                Some(path) => LogSink::File(path),
                None => LogSink::Discard,
            };
            log::init_tracing(sink)?;
            tracing::info!(api = %client.base_url(), page_size = args.page_size, grid, "starting viewer");

            let state = ViewState::new(filter.clone(), args.page_size, grid);
            tui::run(state, client, scroll_threshold).await?;
        }

        Commands::List { ref filter, page } => {
            let sink = match args.log_file.as_deref() {
                Some(path) => LogSink::File(path),
                None => LogSink::Stderr,
            };
            log::init_tracing(sink)?;
            print_page(&args, &client, filter, page).await?;
        }
    }

    Ok(())
}

/// Fetch a single page and print it, one asset per line.
async fn print_page(
    args: &Cli,
    client: &AssetClient,
    filter: &str,
    page: u32,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let query = models::PageQuery::for_page(filter, page, args.page_size);
    info!("Fetching {}", client.assets_url(&query));

    let response = client.fetch_page(&query).await?;
    if response.assets.is_empty() {
        info!("No results found.");
        return Ok(());
    }

    let (lines, summary) = page_listing(&response, page);
    for line in lines {
        println!("{line}");
    }
    success!("{summary}");
    Ok(())
}

/// One line per asset sorted by host, plus the "Page P of N" summary.
fn page_listing(response: &PageResponse, page: u32) -> (Vec<String>, String) {
    let lines = sorted_by_host(&response.assets)
        .into_iter()
        .map(|asset| {
            format!(
                "{:<6} {:<32} {:<16} [{}] [{}] {}",
                asset.id,
                asset.host,
                asset.owner,
                asset.ip_list(),
                asset.port_list(),
                asset.comment,
            )
        })
        .collect();
    (lines, format!("Page {} of {}", page, response.effective_total_pages()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::Asset;

    #[test]
    fn test_page_listing_sorted_with_summary() {
        let response = PageResponse {
            assets: vec![
                Asset::new(2, "web-01").with_ip("10.0.0.2").with_port(443),
                Asset::new(1, "Mail").with_owner("ops"),
                Asset::new(3, "db-01").with_ip("10.0.0.3").with_ip("10.0.0.4").with_port(5432),
            ],
            total_pages: 4,
            ..Default::default()
        };

        let (lines, summary) = page_listing(&response, 2);
        assert_eq!(summary, "Page 2 of 4");
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("3 "));
        assert!(lines[0].contains("[10.0.0.3, 10.0.0.4] [5432]"));
        assert!(lines[1].contains("Mail"));
        assert!(lines[1].contains("ops"));
        assert!(lines[2].contains("web-01"));
    }

    #[test]
    fn test_page_listing_zero_total_pages() {
        let response = PageResponse { assets: vec![Asset::new(1, "a")], ..Default::default() };
        assert_eq!(page_listing(&response, 1).1, "Page 1 of 1");
    }
}
