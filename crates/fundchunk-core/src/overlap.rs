//! Overlap and carryover computation between consecutive chunks
//!
//! When a chunk boundary is crossed, the trailing portion of the finalized
//! chunk seeds the next accumulator so local context survives the split.
//! The seed is trimmed to a sentence boundary when one exists inside the
//! overlap window, so the next chunk does not open mid-sentence.

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Compute the overlap seed carried from a finalized chunk into the next.
///
/// - content no longer than `overlap` characters is carried whole;
/// - otherwise the trailing `overlap` characters are taken and split on
///   sentence-ending punctuation followed by whitespace. When the split
///   produced more than one fragment the first (possibly truncated) one is
///   dropped and the rest rejoined with `". "` plus a trailing period;
/// - with no sentence boundary in the window, the raw suffix is used.
#[must_use = "the overlap seed is returned but not used"]
pub fn overlap_suffix(content: &str, overlap: usize) -> String {
    if overlap == 0 {
        return String::new();
    }
    if content.chars().count() <= overlap {
        return content.to_string();
    }

    let start = content
        .char_indices()
        .rev()
        .nth(overlap - 1)
        .map_or(0, |(i, _)| i);
    let tail = &content[start..];

    let fragments: Vec<&str> = SENTENCE_BOUNDARY.split(tail).collect();
    if fragments.len() > 1 {
        let mut rejoined = fragments[1..].join(". ");
        if !rejoined.ends_with('.') {
            rejoined.push('.');
        }
        rejoined
    } else {
        tail.to_string()
    }
}

/// Summarize a chunk for the next chunk's carryover context.
///
/// Content of 20 words or fewer is returned verbatim; longer content is
/// reduced to its first ten and last ten words.
#[must_use = "the carryover summary is returned but not used"]
pub fn carryover_summary(content: &str) -> String {
    let words: Vec<&str> = content.split_whitespace().collect();
    if words.len() <= 20 {
        return words.join(" ");
    }

    format!(
        "{} ... {}",
        words[..10].join(" "),
        words[words.len() - 10..].join(" ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_content_carried_whole() {
        assert_eq!(overlap_suffix("short text", 200), "short text");
        assert_eq!(overlap_suffix("", 200), "");
    }

    #[test]
    fn test_zero_overlap_yields_empty_seed() {
        assert_eq!(overlap_suffix("some content here", 0), "");
    }

    #[test]
    fn test_suffix_trimmed_to_sentence_boundary() {
        let content = "The first sentence sets context. The second sentence carries on. Closing remark here";
        let seed = overlap_suffix(content, 40);

        // The truncated leading fragment is dropped
        assert!(!seed.contains("carries on"));
        assert!(seed.contains("Closing remark here"));
        assert!(seed.ends_with('.'));
    }

    #[test]
    fn test_suffix_without_sentence_boundary_is_raw() {
        let content = "a".repeat(50);
        let seed = overlap_suffix(&content, 20);
        assert_eq!(seed, "a".repeat(20));
    }

    #[test]
    fn test_seed_is_bounded_by_overlap() {
        let content = "word ".repeat(100);
        let seed = overlap_suffix(content.trim(), 30);
        assert!(seed.chars().count() <= 30 + 1, "seed exceeds overlap window");
    }

    #[test]
    fn test_seed_is_suffix_material() {
        let content = format!("{} Tail sentence stays intact.", "Lead sentence. ".repeat(20));
        let seed = overlap_suffix(&content, 40);
        assert!(content.ends_with(seed.trim_end_matches('.')) || content.contains(&seed));
    }

    #[test]
    fn test_multibyte_content_char_boundary_safe() {
        let content = format!("{}. Última frase en español aquí", "relleno ".repeat(30));
        // Must not panic on non-ASCII boundaries
        let seed = overlap_suffix(&content, 25);
        assert!(!seed.is_empty());
    }

    #[test]
    fn test_carryover_short_content_verbatim() {
        let content = "only a handful of words here";
        assert_eq!(carryover_summary(content), content);
    }

    #[test]
    fn test_carryover_long_content_truncated() {
        let words: Vec<String> = (1..=30).map(|i| format!("w{i}")).collect();
        let content = words.join(" ");
        let summary = carryover_summary(&content);

        assert!(summary.starts_with("w1 w2"));
        assert!(summary.ends_with("w29 w30"));
        assert!(summary.contains(" ... "));
        assert_eq!(summary.split_whitespace().count(), 21);
    }

    #[test]
    fn test_carryover_exactly_twenty_words() {
        let words: Vec<String> = (1..=20).map(|i| format!("w{i}")).collect();
        let content = words.join(" ");
        assert_eq!(carryover_summary(&content), content);
    }
}
