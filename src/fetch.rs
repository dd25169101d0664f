//! Bundle Fetcher — retrieves a bundled script or source-map document over
//! HTTP. Failure here is always scoped to the one file being fetched; the
//! caller decides what to do with the absence of a result.

use crate::error::HookError;

/// A fetched document: its URL (for relative resolution downstream) and
/// UTF-8 text.
#[derive(Debug, Clone)]
pub struct FetchedFile {
    pub url: String,
    pub text: String,
}

/// Fetches a single URL. Any non-2xx status, network error, or non-UTF-8
/// body fails the operation for that URL.
pub async fn fetch(client: &reqwest::Client, url: &str) -> Result<FetchedFile, HookError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| HookError::FetchFailed {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    if !response.status().is_success() {
        return Err(HookError::FetchFailed {
            url: url.to_string(),
            message: format!("http status {}", response.status()),
        });
    }

    let text = response.text().await.map_err(|e| HookError::FetchFailed {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    Ok(FetchedFile {
        url: url.to_string(),
        text,
    })
}
