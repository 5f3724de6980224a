use serde::{Deserialize, Serialize};

/// SEO fields extracted from one fetch of a page.
///
/// `h1` and `title` are capped at 255 characters; `description` is stored
/// at full length. The asymmetry matches the storage schema and is kept
/// on purpose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub status_code: u16,
    pub h1: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl CheckResult {
    pub fn empty(status_code: u16) -> Self {
        Self {
            status_code,
            h1: None,
            title: None,
            description: None,
        }
    }
}

/// A successfully retrieved response body plus its status.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status_code: u16,
    pub body: String,
}
