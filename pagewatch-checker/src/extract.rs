use crate::result::CheckResult;
use scraper::{Html, Selector};

/// Storage width of the `h1` and `title` columns. The description column
/// is TEXT and is not capped.
const FIELD_MAX_LEN: usize = 255;

/// Extract the SEO field set from a response body.
///
/// The parser is lenient: broken, partial, or non-HTML input never fails,
/// it just yields `None` fields. Arbitrary third-party pages are the
/// input here, so that totality is a hard requirement.
pub fn parse_page(html: &str, status_code: u16) -> CheckResult {
    let document = Html::parse_document(html);

    CheckResult {
        status_code,
        h1: first_element_text(&document, "h1"),
        title: first_element_text(&document, "title"),
        description: meta_description(&document),
    }
}

/// Text of the first element matching `selector`, trimmed and capped at
/// FIELD_MAX_LEN characters. Empty-after-trim counts as absent.
fn first_element_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).unwrap();
    let element = document.select(&selector).next()?;

    let text = element.text().collect::<String>();
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    Some(text.chars().take(FIELD_MAX_LEN).collect())
}

/// `content` of the first `<meta name="description">`, trimmed. Unlike the
/// element fields this is never truncated.
fn meta_description(document: &Html) -> Option<String> {
    let selector = Selector::parse(r#"meta[name="description"]"#).unwrap();
    let element = document.select(&selector).next()?;

    let content = element.value().attr("content")?.trim();
    if content.is_empty() {
        return None;
    }

    Some(content.to_string())
}
