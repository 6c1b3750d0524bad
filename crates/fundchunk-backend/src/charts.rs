//! Image and chart heuristics
//!
//! Approximate, dimension-based classification of embedded images plus a
//! page-level score for "this page probably carries a chart". Both are
//! pure functions over numbers the source parser reports; no pixel data is
//! inspected.

use serde::{Deserialize, Serialize};

/// Rough image category by dimensions alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageKind {
    /// Plausible chart: large, roughly screen-shaped
    Chart,
    /// Wide strip, likely a diagram or timeline
    Diagram,
    /// Small image, likely an icon or logo
    Icon,
    /// Anything else
    Other,
}

/// Classify an embedded image by its pixel dimensions.
#[must_use = "the image classification is returned but not used"]
pub fn classify_image(width: u32, height: u32) -> ImageKind {
    let pixels = u64::from(width) * u64::from(height);
    let aspect = if height > 0 {
        f64::from(width) / f64::from(height)
    } else {
        1.0
    };

    if pixels > 50_000 && (0.5..=3.0).contains(&aspect) && width > 300 && height > 200 {
        ImageKind::Chart
    } else if pixels > 20_000 && aspect > 2.5 {
        ImageKind::Diagram
    } else if pixels < 20_000 {
        ImageKind::Icon
    } else {
        ImageKind::Other
    }
}

/// Countable visual features of one page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageVisualStats {
    /// Embedded images on the page
    pub image_count: usize,
    /// Images above ~100k pixels
    pub large_image_count: usize,
    /// Horizontal vector lines
    pub horizontal_lines: usize,
    /// Vertical vector lines
    pub vertical_lines: usize,
    /// Vector rectangles
    pub rectangles: usize,
    /// Standalone numeric tokens (axis labels)
    pub numeric_labels: usize,
    /// Words of running text
    pub word_count: usize,
}

/// Confidence band for the chart score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartConfidence {
    /// Score >= 0.7
    High,
    /// Score >= 0.4
    Medium,
    /// Anything lower
    Low,
}

/// Score how likely a page is to carry a chart, in `[0, 1]`.
///
/// Indicator weights: a large chart-shaped image 0.4, perpendicular axes
/// (both line directions present) 0.3, a grid pattern 0.25, a run of
/// rectangles (bar pattern) 0.2, four or more numeric labels 0.15, and a
/// near-empty text layer next to visual evidence 0.15.
#[must_use = "the chart score is returned but not used"]
pub fn chart_score(stats: &PageVisualStats) -> f32 {
    let mut score = 0.0f32;

    if stats.large_image_count > 0 {
        score += 0.4;
    } else if stats.image_count > 0 {
        score += 0.2;
    }

    if stats.horizontal_lines > 0 && stats.vertical_lines > 0 {
        score += 0.3;
    }
    if stats.horizontal_lines >= 3 && stats.vertical_lines >= 2 {
        score += 0.25;
    }
    if stats.rectangles >= 3 {
        score += 0.2;
    }
    if stats.numeric_labels >= 4 {
        score += 0.15;
    }
    if stats.word_count < 100
        && (stats.image_count > 0 || stats.large_image_count > 0 || stats.horizontal_lines > 0)
    {
        score += 0.15;
    }

    score.min(1.0)
}

/// Fold one element's text into a page's visual stats: running words and
/// standalone numeric tokens (axis-label candidates).
pub fn accumulate_text(stats: &mut PageVisualStats, text: &str) {
    for word in text.split_whitespace() {
        stats.word_count += 1;
        let numeric = !word.is_empty()
            && word
                .chars()
                .all(|c| c.is_ascii_digit() || c == '.' || c == ',' || c == '%');
        if numeric && word.chars().any(|c| c.is_ascii_digit()) {
            stats.numeric_labels += 1;
        }
    }
}

/// Band a chart score into a confidence label.
#[inline]
#[must_use = "the confidence band is returned but not used"]
pub fn chart_confidence(score: f32) -> ChartConfidence {
    if score >= 0.7 {
        ChartConfidence::High
    } else if score >= 0.4 {
        ChartConfidence::Medium
    } else {
        ChartConfidence::Low
    }
}
