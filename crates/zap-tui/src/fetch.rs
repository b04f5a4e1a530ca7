//! Playlist document fetch.  Invoked once per playlist selection; the App
//! tags each request with a generation so a result arriving after the user
//! navigated away is discarded, never applied to a stale view.

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

pub async fn fetch_playlist(url: &str, timeout: Duration) -> Result<String, FetchError> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.text().await?)
}
