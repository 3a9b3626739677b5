pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
};
use tokio::time::sleep;

use crate::api::{Result, SearchSource};
use crate::request::get_json;
use crate::stats::Aggregator;
use types::{SearchQuery, SearchResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.superjob.ru";
const API_KEY_HEADER: &str = "x-api-app-id";
/// Moscow
const TOWN: u32 = 4;
/// "Development, programming"
const CATALOGUE: u32 = 48;
/// Largest page size the API accepts
const DEFAULT_BATCH_SIZE: u64 = 100;
const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// Vacancy search of superjob.ru
///
/// The API doesn't report a page count, so it's estimated from the `total` of each
/// page. Paging stops early once a page comes back empty.
pub struct SuperJob {
    client: Client,
    base_url: String,
    batch_size: u64,
    delay: Duration,
}

impl SuperJob {
    pub fn new(api_key: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, HeaderValue::from_str(api_key)?);
        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_owned(),
            batch_size: DEFAULT_BATCH_SIZE,
            delay: DEFAULT_DELAY,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Number of vacancies requested per page, at least one
    pub fn with_batch_size(mut self, batch_size: u64) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Pause inserted between two consecutive requests
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn search_url(&self) -> String {
        format!("{}/2.0/vacancies/", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl SearchSource for SuperJob {
    fn title(&self) -> &str {
        "SuperJob Moscow"
    }

    async fn scrape_keyword(&self, keyword: &str, aggregator: &mut Aggregator) -> Result<()> {
        let url = self.search_url();
        let mut page = 0;
        let mut pages = 1;
        while page < pages {
            if page > 0 {
                sleep(self.delay).await;
            }
            log::debug!(
                "requesting vacancies from superjob, page: {}, search: {}",
                page,
                keyword
            );
            let query = SearchQuery {
                keyword,
                town: TOWN,
                catalogues: CATALOGUE,
                count: self.batch_size,
                page,
            };
            let resp: SearchResponse = get_json(&self.client, &url, &query).await?;
            // the result set may change while paging, the last total wins
            aggregator.set_found(resp.total);
            if resp.objects.is_empty() {
                log::debug!("empty page {}, search: {}", page, keyword);
                break;
            }
            aggregator.record_listings(&resp.objects);
            pages = resp.total / self.batch_size + 1;
            page += 1;
        }
        Ok(())
    }
}
