pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, REFERER},
    Client,
};
use tokio::time::sleep;

use crate::api::{Result, SearchSource};
use crate::request::get_json;
use crate::stats::Aggregator;
use types::{SearchQuery, SearchResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.hh.ru";
/// hh.ru refuses requests without a browser-like user agent
pub const DEFAULT_USER_AGENT: &str = "Opera/9.80 (Windows NT 6.0) Presto/2.12.388 Version/12.14";
const REFERER_URL: &str = "https://hh.ru/search/vacancy";
/// Moscow
const AREA: u32 = 1;
const PERIOD_DAYS: u32 = 30;
const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// Vacancy search of hh.ru
///
/// The first request of a keyword only reports how many pages there are and how
/// many vacancies were found, every page is then requested on its own.
pub struct HeadHunter {
    client: Client,
    base_url: String,
    delay: Duration,
}

impl HeadHunter {
    pub fn new(user_agent: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(REFERER, HeaderValue::from_static(REFERER_URL));
        let client = Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;
        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_owned(),
            delay: DEFAULT_DELAY,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Pause inserted between two consecutive requests
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn search_url(&self) -> String {
        format!("{}/vacancies", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl SearchSource for HeadHunter {
    fn title(&self) -> &str {
        "HeadHunter Moscow"
    }

    async fn scrape_keyword(&self, keyword: &str, aggregator: &mut Aggregator) -> Result<()> {
        let url = self.search_url();
        log::debug!("requesting vacancy summary from hh, search: {}", keyword);
        let query = SearchQuery::summary(keyword, AREA, PERIOD_DAYS);
        let summary: SearchResponse = get_json(&self.client, &url, &query).await?;
        aggregator.set_found(summary.found);
        log::debug!(
            "hh reports {} vacancies on {} pages, search: {}",
            summary.found,
            summary.pages,
            keyword
        );

        for page in 0..summary.pages {
            sleep(self.delay).await;
            log::debug!("requesting vacancies from hh, page: {}, search: {}", page, keyword);
            let query = SearchQuery::page(keyword, AREA, page);
            let resp: SearchResponse = get_json(&self.client, &url, &query).await?;
            aggregator.record_listings(&resp.items);
        }
        Ok(())
    }
}
