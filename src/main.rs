pub mod browser;
pub mod config;
pub mod constants;
pub mod content;
pub mod dates;
pub mod errors;
pub mod extract;
pub mod logging;
pub mod matcher;
pub mod search;
pub mod sites;
pub mod urls;

use std::process;

use clap::Parser;
use dotenv::dotenv;
use tracing::{info, warn};

use crate::browser::browser::open_in_chrome;
use crate::config::config::{Args, Config};
use crate::content::content::{build_search_content, read_event_file};
use crate::dates::dates::CalendarDate;
use crate::errors::errors::AppError;
use crate::extract::extract::extract_date;
use crate::logging::logging::configure_logging;
use crate::matcher::matcher::DateProbes;
use crate::search::search::{site_query, SearchClient, SearchResponse};
use crate::sites::sites::load_sites;
use crate::urls::urls::normalize_and_dedupe;

/// Links of results whose title or snippet mention `date`.
fn matching_links(probes: &DateProbes, response: &SearchResponse) -> Vec<String> {
    response
        .organic
        .iter()
        .filter(|result| probes.matches(&result.match_text()))
        .map(|result| result.link.clone())
        .collect()
}

async fn search_site(
    client: &SearchClient,
    site: &str,
    content: &str,
    date: &CalendarDate,
    probes: &DateProbes,
    open: bool,
) {
    let response = match client.search(&site_query(site, content)).await {
        Ok(response) => response,
        Err(why) => {
            eprintln!("--- site:{} (request failed: {}) ---", site, why);
            return;
        }
    };

    let urls = normalize_and_dedupe(site, &matching_links(probes, &response));
    if urls.is_empty() {
        info!("no results on {} mention {}", site, date);
        return;
    }

    println!("--- site:{} (date {} matches) ---", site, date);
    for url in urls {
        println!("{}", url);
        if open {
            open_in_chrome(&url);
        }
    }
}

async fn run(config: Config) -> Result<(), AppError> {
    let text = read_event_file(&config.file)?;
    let content = build_search_content(&text).ok_or_else(|| AppError::EmptyInput(config.file.clone()))?;
    let date = extract_date(&text, &config.file)?;

    match date.to_naive_date() {
        Some(day) => info!("event date {} ({})", date, day.format("%A")),
        None => warn!("event date {} is not a real calendar day", date),
    }

    let sites = load_sites(&config.sites_file)?;
    let client = SearchClient::new(config.api_key);
    let probes = DateProbes::new(&date);

    for site in &sites {
        search_site(&client, site, &content, &date, &probes, config.open).await;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    configure_logging();

    let args = Args::parse();
    let result = match Config::from_args(args) {
        Ok(config) => run(config).await,
        Err(err) => Err(err),
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
