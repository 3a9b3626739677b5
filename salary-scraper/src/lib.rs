pub mod api;
pub mod headhunter;
pub(crate) mod request;
pub mod salary;
pub mod stats;
pub mod superjob;

pub use api::{Error, Result, SearchSource};
pub use headhunter::HeadHunter;
pub use salary::{predict_salary, Listing, SalaryBounds};
pub use stats::{Aggregator, KeywordStats, StatsTable};
pub use superjob::SuperJob;

/// Scrape every keyword from `source`, one after the other.
///
/// A keyword whose requests fail is logged and reported with whatever was
/// collected before the failure, the remaining keywords are scraped as usual.
pub async fn scrape_keywords<S>(source: &S, keywords: &[String]) -> StatsTable
where
    S: SearchSource + ?Sized,
{
    let mut table = StatsTable::new();
    for keyword in keywords {
        let mut aggregator = Aggregator::new();
        if let Err(e) = source.scrape_keyword(keyword, &mut aggregator).await {
            log::error!(
                "failed to scrape {} for keyword: {}, keeping {} processed vacancies, error: {}",
                source.title(),
                keyword,
                aggregator.processed(),
                e
            );
        }
        let stats = aggregator.finish();
        log::info!(
            "{}: {} found, {} processed, average salary {} for keyword: {}",
            source.title(),
            stats.found,
            stats.processed,
            stats.average_salary,
            keyword
        );
        table.insert(keyword.as_str(), stats);
    }
    table
}
