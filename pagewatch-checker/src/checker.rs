use crate::extract::parse_page;
use crate::fetcher::PageFetcher;
use crate::normalize::CanonicalUrl;
use crate::result::CheckResult;
use tracing::warn;

/// Fetch-then-extract pipeline: the one operation the surrounding CRUD
/// layer calls.
pub struct PageChecker {
    fetcher: PageFetcher,
}

impl PageChecker {
    pub fn new() -> Self {
        Self {
            fetcher: PageFetcher::new(),
        }
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self {
            fetcher: PageFetcher::with_timeout(timeout_secs),
        }
    }

    /// One fetch-and-extract pass over a page.
    ///
    /// Every fetch failure collapses to `None` here; callers surface a
    /// generic "check failed" notice and cannot tell a timeout from a 404.
    /// Two calls against the same URL are two independent fetches and may
    /// disagree if the page changed in between.
    pub async fn check_page(&self, url: &CanonicalUrl) -> Option<CheckResult> {
        match self.fetcher.fetch(url).await {
            Ok(page) => Some(parse_page(&page.body, page.status_code)),
            Err(err) => {
                warn!("Check failed for {}: {}", url, err);
                None
            }
        }
    }
}

impl Default for PageChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn check_extracts_fields_from_a_live_page() {
        let mock_server = MockServer::start().await;

        let html = r#"<html><head>
            <title>Home</title>
        </head><body><p>No heading here</p></body></html>"#;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/html")
                    .set_body_string(html),
            )
            .mount(&mock_server)
            .await;

        let url = normalize(&mock_server.uri()).unwrap();
        let result = PageChecker::new().check_page(&url).await.unwrap();

        assert_eq!(result.status_code, 200);
        assert_eq!(result.title.as_deref(), Some("Home"));
        assert_eq!(result.h1, None);
        assert_eq!(result.description, None);
    }

    #[tokio::test]
    async fn error_status_collapses_to_none() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let url = normalize(&mock_server.uri()).unwrap();
        assert!(PageChecker::new().check_page(&url).await.is_none());
    }

    #[tokio::test]
    async fn unreachable_host_collapses_to_none() {
        let url = normalize("http://127.0.0.1:1").unwrap();
        assert!(PageChecker::new().check_page(&url).await.is_none());
    }

    #[tokio::test]
    async fn two_checks_fetch_independently() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<html><h1>Same page</h1></html>"),
            )
            .expect(2)
            .mount(&mock_server)
            .await;

        let url = normalize(&mock_server.uri()).unwrap();
        let checker = PageChecker::new();

        let first = checker.check_page(&url).await.unwrap();
        let second = checker.check_page(&url).await.unwrap();
        assert_eq!(first, second);
    }
}
