//! Playground upload.
//!
//! POST the snippet bytes to the share endpoint; the service answers with a
//! snippet id, which we turn into a browsable URL.

use crate::config::ShareConfig;
use crate::error::ShareError;

pub async fn share(snippet: &[u8], cfg: &ShareConfig) -> Result<String, ShareError> {
    let client = reqwest::Client::new();
    let resp = client
        .post(&cfg.url)
        .header(reqwest::header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(snippet.to_vec())
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ShareError::Status { status });
    }

    let id = resp.text().await?;
    let id = id.trim();
    if id.is_empty() {
        return Err(ShareError::EmptyId);
    }
    tracing::debug!(id, "snippet uploaded");
    Ok(format!("{}{}", cfg.base, id))
}
