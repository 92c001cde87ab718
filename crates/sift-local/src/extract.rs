use sift_core::{Error, ExtractedResult, Result};

// Selector contract against the upstream result page. If the upstream
// markup changes, this module is the only place that needs to follow.
const CARD_SELECTOR: &str = ".result";
const TITLE_SELECTOR: &str = ".result__title";
const SNIPPET_SELECTOR: &str = ".result__snippet";
const URL_SELECTOR: &str = ".result__url";

fn norm_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn selector(css: &str) -> Result<html_scraper::Selector> {
    html_scraper::Selector::parse(css).map_err(|e| Error::Parse(e.to_string()))
}

fn first_text(el: &html_scraper::ElementRef, sel: &html_scraper::Selector) -> String {
    // Missing sub-fields come back empty, never as an error.
    el.select(sel)
        .next()
        .map(|m| norm_ws(&m.text().collect::<Vec<_>>().join(" ")))
        .unwrap_or_default()
}

/// Pull every result card out of the upstream HTML, in document order.
///
/// Zero cards is a valid outcome (an empty or unrelated page), not a
/// failure.
pub fn extract_results(html: &str) -> Result<Vec<ExtractedResult>> {
    let doc = html_scraper::Html::parse_document(html);
    let card = selector(CARD_SELECTOR)?;
    let title = selector(TITLE_SELECTOR)?;
    let snippet = selector(SNIPPET_SELECTOR)?;
    let url = selector(URL_SELECTOR)?;

    let mut out = Vec::new();
    for el in doc.select(&card) {
        out.push(ExtractedResult {
            title: first_text(&el, &title),
            snippet: first_text(&el, &snippet),
            url: first_text(&el, &url),
        });
    }
    Ok(out)
}
