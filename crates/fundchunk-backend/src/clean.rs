//! Text noise filtering
//!
//! Extracted PDF text carries visual debris: separator runs, dot leaders
//! from tables of contents, bare page numbers, punctuation-dominated
//! fragments. These helpers strip it before typing so the heuristics see
//! real content.

use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATOR_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-_=*#+~`]{3,}").unwrap());
static DOT_LEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{2,}\s*\d*\s*$").unwrap());
// Runs of four or more collapse to exactly three spaces: long gaps shrink
// while the >= 3-space column signal the table-typing rule keys on survives.
static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]{4,}").unwrap());
static PAGE_NUMBER_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d+\s*$").unwrap());

/// Fraction of punctuation/separator characters above which a block counts
/// as pure visual noise.
const NOISE_PUNCTUATION_RATIO: f64 = 0.7;

/// Clean one block of extracted text.
///
/// Collapses whitespace runs, strips separator runs of three or more
/// identical punctuation characters and removes index dot-leaders
/// (`"...... 42"`). Table-relevant structure (tabs, newlines) survives:
/// only runs of spaces/tabs within a line are collapsed to a single space
/// when they exceed one character, except tabs which are preserved.
#[must_use = "the cleaned text is returned but not used"]
pub fn clean_block_text(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    for line in text.lines() {
        let mut cleaned = SEPARATOR_RUNS.replace_all(line, " ").into_owned();
        cleaned = DOT_LEADER.replace(&cleaned, "").into_owned();
        // Tabs separate table columns; collapse space runs but keep tabs.
        if !cleaned.contains('\t') {
            cleaned = WHITESPACE_RUNS.replace_all(&cleaned, "   ").into_owned();
        }
        let trimmed = cleaned.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    lines.join("\n")
}

/// Whether a (cleaned) block is pure visual noise and should be dropped.
///
/// Catches blocks shorter than `min_len`, and blocks made up of
/// punctuation and separators to at least 70%. Digits-only page-number
/// lines are *not* treated as noise here; the typing stage decides their
/// fate so the keep-page-numbers option can take effect.
#[must_use = "the noise check result is returned but not used"]
pub fn is_noise_block(text: &str, min_len: usize) -> bool {
    let trimmed = text.trim();
    if trimmed.chars().count() < min_len {
        return true;
    }
    if PAGE_NUMBER_LINE.is_match(trimmed) {
        return false;
    }

    let total = trimmed.chars().filter(|c| !c.is_whitespace()).count();
    if total == 0 {
        return true;
    }
    let punctuation = trimmed
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_alphanumeric())
        .count();

    #[allow(clippy::cast_precision_loss)]
    let ratio = punctuation as f64 / total as f64;
    ratio >= NOISE_PUNCTUATION_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_runs_removed() {
        let cleaned = clean_block_text("Section header ----------------");
        assert_eq!(cleaned, "Section header");
    }

    #[test]
    fn test_dot_leaders_removed() {
        let cleaned = clean_block_text("Risk Factors ........ 42");
        assert_eq!(cleaned, "Risk Factors");
    }

    #[test]
    fn test_tabs_preserved_for_tables() {
        let cleaned = clean_block_text("2023\t12.5%\t1,250,000");
        assert!(cleaned.contains('\t'));
    }

    #[test]
    fn test_space_runs_collapsed_but_column_signal_survives() {
        let cleaned = clean_block_text("Year      Return      Benchmark");
        assert_eq!(cleaned, "Year   Return   Benchmark");
    }

    #[test]
    fn test_blank_lines_dropped() {
        let cleaned = clean_block_text("First line\n\n   \nSecond line");
        assert_eq!(cleaned, "First line\nSecond line");
    }

    #[test]
    fn test_noise_too_short() {
        assert!(is_noise_block("ab", 3));
        assert!(is_noise_block("  ", 3));
        assert!(!is_noise_block("abc", 3));
    }

    #[test]
    fn test_noise_punctuation_dominated() {
        assert!(is_noise_block("*** ### --- !!!", 3));
        assert!(is_noise_block("::::::::", 3));
        assert!(!is_noise_block("Normal sentence, with punctuation.", 3));
    }

    #[test]
    fn test_page_number_line_is_not_noise() {
        // Digits-only blocks pass through; typing decides drop-or-label.
        assert!(!is_noise_block("42", 1));
        assert!(!is_noise_block(" 7 ", 1));
    }
}
