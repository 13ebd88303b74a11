use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use thiserror::Error;

// The listing server rejects clients without a browser User-Agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to load page {url}: status {status}")]
    BadStatus { url: String, status: u16 },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Request policy for one fetch. The defaults match the original behavior:
/// no timeout and no retries. Both are opt-in hardening.
#[derive(Debug, Clone, Default)]
pub struct FetchConfig {
    pub timeout: Option<Duration>,
    pub retries: u32,
}

/// Issues one GET per attempt and returns the body on a 200 response.
/// Any other status is a hard failure; redirects are followed.
pub fn fetch_html(url: &str, config: &FetchConfig) -> Result<String, FetchError> {
    let client = Client::builder()
        // None disables the client's built-in 30s default
        .timeout(config.timeout)
        .build()?;

    let mut attempt = 0;
    loop {
        match fetch_once(&client, url) {
            Ok(body) => return Ok(body),
            Err(err) if attempt < config.retries => {
                attempt += 1;
                log::warn!("retrying {url} (attempt {attempt}): {err}");
            }
            Err(err) => return Err(err),
        }
    }
}

fn fetch_once(client: &Client, url: &str) -> Result<String, FetchError> {
    let resp = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()?;

    if resp.status() != StatusCode::OK {
        return Err(FetchError::BadStatus {
            url: url.to_string(),
            status: resp.status().as_u16(),
        });
    }
    Ok(resp.text()?)
}
