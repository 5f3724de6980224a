use crate::error::Result;
use crate::normalize::CanonicalUrl;
use crate::result::FetchedPage;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::debug;

/// Whole-request budget (connect + full response), in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Performs the single bounded GET of a check.
///
/// One client, reused across checks. No retries: a page that does not
/// answer inside the budget is a failed check, full stop.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .user_agent(concat!(
                "Pagewatch/",
                env!("CARGO_PKG_VERSION"),
                " (https://github.com/mverek/pagewatch)"
            ))
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs((timeout_secs / 2).max(1)))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// One GET against a canonical URL. Non-success statuses are raised,
    /// so a 4xx/5xx answer comes back as `FetchError::Http` rather than a
    /// page carrying that status; transport problems come back as
    /// `FetchError::Network`.
    pub async fn fetch(&self, url: &CanonicalUrl) -> Result<FetchedPage> {
        debug!("Fetching {}", url);

        let start = Instant::now();
        let response = self.client.get(url.as_str()).send().await?;
        let response = response.error_for_status()?;

        let status_code = response.status().as_u16();
        let body = response.text().await?;
        debug!("Fetched {} ({}) in {:?}", url, status_code, start.elapsed());

        Ok(FetchedPage { status_code, body })
    }
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new()
    }
}
