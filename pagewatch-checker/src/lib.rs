pub mod checker;
pub mod error;
pub mod extract;
pub mod fetcher;
pub mod normalize;
pub mod result;

pub use checker::PageChecker;
pub use error::{FetchError, ValidationError};
pub use extract::parse_page;
pub use fetcher::PageFetcher;
pub use normalize::{CanonicalUrl, normalize, validate};
pub use result::CheckResult;
