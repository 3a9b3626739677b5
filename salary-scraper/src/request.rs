use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};

use crate::api::{Error, Result};

/// GET `url` with `query` and decode the json body, any non-2xx status is an error
pub(crate) async fn get_json<T, Q>(client: &Client, url: &str, query: &Q) -> Result<T>
where
    T: DeserializeOwned,
    Q: Serialize + ?Sized,
{
    let resp = client.get(url).query(query).send().await?;
    let status = resp.status();
    if !status.is_success() {
        let error_body = resp.text().await;
        log::error!(
            "request to {} failed with {}, error resp body: {:?}",
            url,
            status,
            error_body,
        );
        return Err(Error::RequestNotOk(url.to_owned(), status));
    }
    Ok(resp.json().await?)
}
