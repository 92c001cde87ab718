use sift_core::{ExtractedResult, ScoredResult};

// Ordered deprioritization lists. Position matters: earlier keywords
// produce smaller penalties, and within a list the first match wins.
const PRIMARY_KEYWORDS: &[&str] = &[
    "stackoverflow",
    "stack overflow",
    "reddit",
    "stack exchange",
    "stackexchange",
];

const SECONDARY_KEYWORDS: &[&str] = &[
    "ai",
    "artificial",
    "intelligence",
    "chatgpt",
    "chat gpt",
    "claude",
    "grok",
    "times",
];

/// First-match-wins scan of one keyword list: a title hit at index `i`
/// scores `i + 3`, a snippet hit `i + 2`, no hit 0. Inputs must be
/// lowercased by the caller; the lists are lowercase already.
fn list_score(title_lc: &str, snippet_lc: &str, keywords: &[&str]) -> u32 {
    for (i, kw) in keywords.iter().enumerate() {
        if title_lc.contains(kw) {
            return i as u32 + 3;
        }
        if snippet_lc.contains(kw) {
            return i as u32 + 2;
        }
    }
    0
}

/// Deprioritization score for one result. The two list contributions
/// combine by max, so a strong forum-site hit is never masked by a
/// weaker AI-term hit scanned afterwards.
pub fn score(result: &ExtractedResult) -> u32 {
    let title_lc = result.title.to_lowercase();
    let snippet_lc = result.snippet.to_lowercase();
    list_score(&title_lc, &snippet_lc, PRIMARY_KEYWORDS)
        .max(list_score(&title_lc, &snippet_lc, SECONDARY_KEYWORDS))
}

/// Score every extracted result and stable-sort ascending by ranking.
/// Unpenalized results (ranking 0) surface first; ties keep their
/// extraction order.
pub fn rank_results(extracted: Vec<ExtractedResult>) -> Vec<ScoredResult> {
    let mut out: Vec<ScoredResult> = extracted
        .into_iter()
        .map(|r| {
            let ranking = score(&r);
            ScoredResult {
                title: r.title,
                snippet: r.snippet,
                url: r.url,
                ranking,
            }
        })
        .collect();
    // Vec::sort_by_key is stable.
    out.sort_by_key(|r| r.ranking);
    out
}
