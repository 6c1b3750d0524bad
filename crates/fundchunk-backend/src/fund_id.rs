//! Fund identifier auto-detection
//!
//! When the caller supplies neither a mapping key nor a fund name, the
//! first pages of the document are scanned for fund-name-shaped strings to
//! drive the metadata lookup. Best effort only; the first plausible
//! candidate wins.

use crate::types::RawPage;
use once_cell::sync::Lazy;
use regex::Regex;

/// How many leading pages to scan.
const PAGES_TO_SCAN: usize = 3;

static NAME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"([A-Z][a-zA-Z\s]+(?:Fund|Holdings|Capital|Partners|Investment|Management)[\s\w]*)")
            .unwrap(),
        Regex::new(r"([A-Z][a-zA-Z\s]+(?:Ltd|LLC|Inc|Corp|LP|Limited))").unwrap(),
        Regex::new(r"Fund Name[:\s]+([A-Za-z\s]+)").unwrap(),
        Regex::new(r"Company[:\s]+([A-Za-z\s]+)").unwrap(),
    ]
});

/// Scan the first pages for a fund-name candidate.
///
/// Patterns are tried in order over each page's text; the first capture
/// wins. Returns `None` when nothing fund-shaped is found.
#[must_use = "the detected identifier is returned but not used"]
pub fn detect_fund_identifier(pages: &[RawPage]) -> Option<String> {
    for page in pages.iter().take(PAGES_TO_SCAN) {
        let text: String = page
            .blocks
            .iter()
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        for pattern in NAME_PATTERNS.iter() {
            if let Some(captures) = pattern.captures(&text) {
                if let Some(candidate) = captures.get(1) {
                    let identifier = candidate.as_str().split_whitespace().collect::<Vec<_>>().join(" ");
                    if identifier.len() >= 4 {
                        log::info!("detected fund identifier: {identifier}");
                        return Some(identifier);
                    }
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawBlock;

    fn page_with(number: u32, text: &str) -> RawPage {
        RawPage {
            number,
            blocks: vec![RawBlock::text_only(text)],
        }
    }

    #[test]
    fn test_detects_fund_suffix_name() {
        let pages = vec![page_with(
            1,
            "CONFIDENTIAL\nAlpine Global Macro Fund\nOffering Memorandum",
        )];
        let detected = detect_fund_identifier(&pages).unwrap();
        assert!(detected.contains("Alpine Global Macro Fund"));
    }

    #[test]
    fn test_detects_entity_suffix_name() {
        let pages = vec![page_with(1, "Issued by Meridian Advisors Ltd in 2024")];
        let detected = detect_fund_identifier(&pages).unwrap();
        assert!(detected.contains("Meridian Advisors Ltd"));
    }

    #[test]
    fn test_detects_labelled_fund_name() {
        let pages = vec![page_with(2, "Fund Name: Cobalt Credit Opportunities")];
        let detected = detect_fund_identifier(&pages).unwrap();
        assert!(detected.contains("Cobalt Credit Opportunities"));
    }

    #[test]
    fn test_scans_only_leading_pages() {
        let pages = vec![
            page_with(1, "No names on this page at all."),
            page_with(2, "Nor on this one."),
            page_with(3, "Still nothing of note."),
            page_with(4, "Hidden Summit Capital Partners appears too late."),
        ];
        assert!(detect_fund_identifier(&pages).is_none());
    }

    #[test]
    fn test_no_candidate_returns_none() {
        let pages = vec![page_with(1, "generic text without any entities")];
        assert!(detect_fund_identifier(&pages).is_none());
    }
}
