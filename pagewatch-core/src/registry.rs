use crate::data::{CheckRecord, Database, UrlRecord};
use pagewatch_checker::{PageChecker, ValidationError, normalize, validate};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("no URL with id {0}")]
    UnknownUrl(i64),
}

/// Whether `register_url` created a new record or matched an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    Created(UrlRecord),
    Existing(UrlRecord),
}

impl RegisterOutcome {
    pub fn record(&self) -> &UrlRecord {
        match self {
            RegisterOutcome::Created(record) | RegisterOutcome::Existing(record) => record,
        }
    }
}

/// Validate and canonicalize raw form input, then register it.
///
/// Two submissions that reduce to the same `scheme://authority` land on
/// one record; the second comes back as `Existing`.
pub fn register_url(db: &Database, raw: Option<&str>) -> Result<RegisterOutcome, RegistryError> {
    let raw = validate(raw)?;
    let canonical = normalize(raw)?;

    if let Some(existing) = db.get_url_by_name(canonical.as_str())? {
        info!("URL {} already registered as id {}", canonical, existing.id);
        return Ok(RegisterOutcome::Existing(existing));
    }

    let url_id = db.insert_url(canonical.as_str())?;
    let record = db
        .get_url_by_id(url_id)?
        .ok_or(RegistryError::UnknownUrl(url_id))?;
    info!("Registered {} as id {}", canonical, url_id);

    Ok(RegisterOutcome::Created(record))
}

/// Run one check against a registered page and store the outcome.
///
/// `Ok(None)` means the fetch failed; nothing is stored and the failure
/// kind is deliberately not reported. Unknown ids are an error, matching
/// the "URL not found" path of the surrounding layer.
pub async fn run_check(
    db: &Database,
    checker: &PageChecker,
    url_id: i64,
) -> Result<Option<CheckRecord>, RegistryError> {
    let url = db
        .get_url_by_id(url_id)?
        .ok_or(RegistryError::UnknownUrl(url_id))?;

    // Stored names are canonical already; normalize is idempotent.
    let canonical = normalize(&url.name)?;

    let Some(result) = checker.check_page(&canonical).await else {
        return Ok(None);
    };

    let check_id = db.insert_check(url_id, &result)?;
    let record = db
        .get_check(check_id)?
        .ok_or(RegistryError::UnknownUrl(url_id))?;
    info!(
        "Stored check {} for {} (status {})",
        check_id, url.name, record.status_code
    );

    Ok(Some(record))
}
