mod config;
mod report;

use clap::Parser;
use config::{Config, Site};
use dotenv::dotenv;
use futures::{stream, StreamExt};
use salary_scraper::{scrape_keywords, SearchSource};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Job boards to query, all of them when omitted
    #[clap(long, value_enum)]
    site: Vec<Site>,

    /// Search for these keywords instead of the default programming languages
    #[clap(long)]
    keyword: Vec<String>,
}

const DEFAULT_SEARCH_QUERIES: [&str; 10] = [
    "Python",
    "Java",
    "JavaScript",
    "PHP",
    "C#",
    "Swift",
    "Objective-C",
    "Ruby",
    "Scala",
    "Go",
];

const ALL_SITES: [Site; 2] = [Site::Headhunter, Site::Superjob];

/// Drop repeated values, keeping the first occurrence
fn unique<T: PartialEq>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut unique = Vec::new();
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}

/// Every client is built up front so missing credentials stop the run
/// before the first request goes out
fn build_sources(
    sites: &[Site],
    config: &Config,
) -> Result<Vec<Box<dyn SearchSource>>, config::Error> {
    sites.iter().map(|site| config.source(*site)).collect()
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();

    let mut sites = unique(args.site);
    if sites.is_empty() {
        sites.extend(ALL_SITES);
    }
    let mut keywords = unique(args.keyword);
    if keywords.is_empty() {
        keywords.extend(DEFAULT_SEARCH_QUERIES.into_iter().map(String::from));
    }

    let sources = match build_sources(&sites, &Config::from_env()) {
        Ok(sources) => sources,
        Err(e) => {
            log::error!("Failed to start: {}", e);
            std::process::exit(1);
        }
    };

    let keywords = &keywords;
    stream::iter(sources)
        .for_each(|source| async move {
            log::info!("Scraping {} keywords from {}", keywords.len(), source.title());
            let table = scrape_keywords(source.as_ref(), keywords).await;
            println!("{}", report::render_table(source.title(), &table));
        })
        .await;
}
