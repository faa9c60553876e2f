use crate::error::ExtractError;
use scraper::{Html, Selector};

/// Parsed HTML document that can answer repeated selector queries.
///
/// Parsing is lenient: malformed or empty markup yields a document that simply
/// produces zero matches.
pub struct Extractor {
    document: Html,
}

impl Extractor {
    pub fn new(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Text content of every element matching `selector`, in document order,
    /// with leading and trailing whitespace trimmed. Interior whitespace is
    /// left untouched.
    pub fn texts(&self, selector: &str) -> Result<Vec<String>, ExtractError> {
        let selector = parse_selector(selector)?;
        Ok(self
            .document
            .select(&selector)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .collect())
    }

    /// Value of `attribute` for every matching element, in document order.
    ///
    /// Elements without the attribute, or with an empty value, contribute
    /// nothing, so the result may be shorter than the match count. Callers
    /// relying on positional alignment should select on `[attribute]` instead.
    pub fn attributes(
        &self,
        selector: &str,
        attribute: &str,
    ) -> Result<Vec<String>, ExtractError> {
        let selector = parse_selector(selector)?;
        Ok(self
            .document
            .select(&selector)
            .filter_map(|el| el.value().attr(attribute))
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect())
    }
}

/// One-shot form of [`Extractor::texts`].
pub fn extract_text(html: &str, selector: &str) -> Result<Vec<String>, ExtractError> {
    Extractor::new(html).texts(selector)
}

/// One-shot form of [`Extractor::attributes`].
pub fn extract_attribute(
    html: &str,
    selector: &str,
    attribute: &str,
) -> Result<Vec<String>, ExtractError> {
    Extractor::new(html).attributes(selector, attribute)
}

fn parse_selector(selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError::InvalidSelector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}
