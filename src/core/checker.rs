use crate::domain::model::PresenceReport;
use crate::utils::error::{GradeError, Result};
use scraper::{Html, Selector};
use std::collections::BTreeMap;

/// Checks an HTML document for the presence of elements matching each selector.
///
/// The document is decoded leniently (invalid UTF-8 is replaced, malformed
/// markup is recovered from, browser-style). Selectors are evaluated in
/// lexicographic order; duplicates collapse into a single report entry. A
/// selector that fails to parse fails the whole check with
/// [`GradeError::SelectorError`].
pub fn check_document(document: &[u8], selectors: &[String]) -> Result<PresenceReport> {
    let html = String::from_utf8_lossy(document);
    let dom = Html::parse_document(&html);

    let mut ordered: Vec<&str> = selectors.iter().map(String::as_str).collect();
    ordered.sort_unstable();

    let mut entries = BTreeMap::new();
    for selector in ordered {
        let parsed = Selector::parse(selector).map_err(|e| GradeError::SelectorError {
            selector: selector.to_string(),
            reason: e.to_string(),
        })?;
        let present = dom.select(&parsed).next().is_some();
        entries.insert(selector.to_string(), present);
    }

    Ok(PresenceReport { entries })
}
