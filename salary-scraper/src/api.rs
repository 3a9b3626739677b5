use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::stats::Aggregator;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Request to '{0}' not successful, status code: {1}")]
    RequestNotOk(String, StatusCode),
    #[error("Invalid header value: '{0}'")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

/// A job board that can be searched for vacancies by keyword
#[async_trait]
pub trait SearchSource: Send + Sync {
    /// Caption of the table the results are reported under
    fn title(&self) -> &str;

    /// Page through every vacancy for `keyword`, feeding the aggregator as pages arrive.
    /// On error, whatever was recorded before the failing request stays in `aggregator`.
    async fn scrape_keyword(&self, keyword: &str, aggregator: &mut Aggregator) -> Result<()>;
}
