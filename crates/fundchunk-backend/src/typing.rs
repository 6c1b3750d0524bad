//! Element typing and heading-level heuristics
//!
//! An ordered rule table, evaluated top to bottom with the first match
//! winning, assigns each cleaned block an element type. The precedence is
//! explicit so it can be tested rule by rule:
//!
//! 1. digits-only blocks are page numbers (dropped or kept as labels,
//!    caller's choice);
//! 2. very short blocks are labels;
//! 3. formatting evidence (bold + large font), all-caps short text or a
//!    heading pattern makes a heading;
//! 4. list markers make a list item;
//! 5. several numeric tokens with tab/column spacing make table data;
//! 6. short blocks opening with a footnote marker are footnotes;
//! 7. remaining blocks fall through by length: paragraph, text block,
//!    label.

use crate::types::FontHints;
use fundchunk_core::ElementType;
use once_cell::sync::Lazy;
use regex::Regex;

static PAGE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d+\s*$").unwrap());

static HEADING_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // TEXT SET ENTIRELY IN CAPITALS
        Regex::new(r"^[A-Z][A-Z\s&/\-:]{9,}$").unwrap(),
        // 1. Numbered Title
        Regex::new(r"^\d+\.\s*[A-Z]").unwrap(),
        Regex::new(r"(?i)^Chapter\s+\d+").unwrap(),
        Regex::new(r"(?i)^Section\s+[A-Z\d]").unwrap(),
        // Capitalized phrase ending in a title-indicator noun
        Regex::new(r"^[A-Z][a-z]+.*\s(Statement|Report|Overview|Summary|Analysis)$").unwrap(),
    ]
});

static TITLE_INDICATORS: [&str; 26] = [
    "STATEMENT",
    "REPORT",
    "OVERVIEW",
    "SUMMARY",
    "ANALYSIS",
    "PERFORMANCE",
    "PORTFOLIO",
    "HOLDINGS",
    "RESULTS",
    "INCOME",
    "BALANCE",
    "CASH FLOW",
    "DISCLOSURE",
    "DISCLOSURES",
    "GOVERNANCE",
    "AUDIT",
    "COMPLIANCE",
    "STRATEGY",
    "FACTORS",
    "INFORMATION",
    "EXPENSES",
    "FEES",
    "TERMS",
    "CONTENTS",
    "OBJECTIVE",
    "RISKS",
];

static LIST_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\s*[-•▪▫◦‣⁃]\s+").unwrap(),
        Regex::new(r"^\s*\d+\.\s+").unwrap(),
        Regex::new(r"^\s*\([a-zA-Z0-9]+\)\s+").unwrap(),
        Regex::new(r"^\s*[a-zA-Z]\.\s+").unwrap(),
        Regex::new(r"^\s*[ivxlc]+\.\s+").unwrap(),
    ]
});

static NUMERIC_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d+(,\d{3})*(\.\d+)?%?\b").unwrap());
static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{3,}").unwrap());

static FINANCIAL_TABLE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\$\s*[\d,]+(\.\d{2})?").unwrap(),
        Regex::new(r"\d+\.\d+\s*%").unwrap(),
        Regex::new(r"\(\d+\)").unwrap(),
        Regex::new(r"\d{4}\s+\d+\.\d+\s*%").unwrap(),
    ]
});

static FOOTNOTE_PREFIXES: [&str; 6] = ["*", "†", "‡", "Note:", "See:", "Source:"];

/// Whether a block is a bare page number.
#[inline]
#[must_use = "the page-number check is returned but not used"]
pub fn is_page_number(text: &str) -> bool {
    PAGE_NUMBER.is_match(text)
}

/// The outcome of typing a raw block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypedBlock {
    /// A content element of the given type
    Element(ElementType),
    /// A page-number-only block; the caller drops it or keeps it as a label
    PageNumber,
}

/// Classify a cleaned block.
#[must_use = "the typing result is returned but not used"]
pub fn classify_block(text: &str, font: Option<&FontHints>) -> TypedBlock {
    let trimmed = text.trim();
    let char_count = trimmed.chars().count();
    let upper = trimmed.to_uppercase();

    // Digits-only first so the page-number policy stays decidable even for
    // one-character blocks.
    if is_page_number(trimmed) {
        return TypedBlock::PageNumber;
    }

    if char_count < 10 {
        return TypedBlock::Element(ElementType::Label);
    }

    // Heading evidence: formatting, casing, or pattern
    let is_all_caps =
        char_count < 100 && trimmed.chars().any(|c| c.is_alphabetic()) && trimmed == upper;
    let font_heading = font.is_some_and(FontHints::suggests_heading);
    let pattern_heading = HEADING_PATTERNS.iter().any(|re| re.is_match(trimmed));
    // Short capitalized phrases closing on a title noun ("Fund Performance
    // Overview") but not prose that merely mentions one.
    let indicator_heading = char_count < 150
        && trimmed.chars().next().is_some_and(char::is_uppercase)
        && TITLE_INDICATORS.iter().any(|kw| upper.ends_with(kw));

    if font_heading || is_all_caps || pattern_heading || indicator_heading {
        return TypedBlock::Element(ElementType::Heading);
    }

    if LIST_PATTERNS.iter().any(|re| re.is_match(trimmed)) {
        return TypedBlock::Element(ElementType::ListItem);
    }

    let numeric_tokens = NUMERIC_TOKEN.find_iter(trimmed).count();
    let has_tab = trimmed.contains('\t');
    let space_runs = SPACE_RUN.find_iter(trimmed).count();
    if numeric_tokens >= 3 && (has_tab || space_runs >= 2) {
        return TypedBlock::Element(ElementType::TableData);
    }
    let financial_matches = FINANCIAL_TABLE_PATTERNS
        .iter()
        .filter(|re| re.is_match(trimmed))
        .count();
    if financial_matches >= 2 {
        return TypedBlock::Element(ElementType::TableData);
    }

    if char_count < 300
        && FOOTNOTE_PREFIXES
            .iter()
            .any(|prefix| trimmed.starts_with(prefix))
    {
        return TypedBlock::Element(ElementType::Footnote);
    }

    if char_count > 200 {
        TypedBlock::Element(ElementType::Paragraph)
    } else if char_count >= 50 {
        TypedBlock::Element(ElementType::TextBlock)
    } else {
        TypedBlock::Element(ElementType::Label)
    }
}

static LEVEL1_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)^(EXECUTIVE\s+SUMMARY|INVESTMENT\s+OVERVIEW|FUND\s+OVERVIEW)$").unwrap(),
        Regex::new(r"(?i)^(CONTENTS?|TABLE\s+OF\s+CONTENTS?)$").unwrap(),
        Regex::new(r"^[IVX]{1,4}\.\s+").unwrap(),
        Regex::new(r"^[A-Z\s]{3,20}$").unwrap(),
    ]
});

static LEVEL2_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\d+\.\s+[A-Z]").unwrap(),
        Regex::new(r"^[A-Z][a-z]+\s+[A-Z][a-z]+$").unwrap(),
    ]
});

static LEVEL3_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\d+\.\d+\s+").unwrap(),
        Regex::new(r"^[a-z]\)\s+").unwrap(),
    ]
});

/// Assign a heading level.
///
/// A source-provided level wins (clamped to 1-6). Otherwise three pattern
/// tiers are tried in order, then a length-based fallback: at most four
/// words in capitals is level 2, at most eight words level 3, anything
/// longer level 4.
#[must_use = "the assigned level is returned but not used"]
pub fn heading_level(text: &str, explicit: Option<u8>) -> u8 {
    if let Some(level) = explicit {
        return level.clamp(1, 6);
    }

    let trimmed = text.trim();
    if LEVEL1_PATTERNS.iter().any(|re| re.is_match(trimmed)) {
        return 1;
    }
    if LEVEL2_PATTERNS.iter().any(|re| re.is_match(trimmed)) {
        return 2;
    }
    if LEVEL3_PATTERNS.iter().any(|re| re.is_match(trimmed)) {
        return 3;
    }

    let words = trimmed.split_whitespace().count();
    let is_caps = trimmed.chars().any(|c| c.is_alphabetic()) && trimmed == trimmed.to_uppercase();
    if words <= 4 && is_caps {
        2
    } else if words <= 8 {
        3
    } else {
        4
    }
}
