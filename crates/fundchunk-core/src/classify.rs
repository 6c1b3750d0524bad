//! Section classification for headings and body text
//!
//! Two classification modes are provided:
//!
//! - [`classify_title`] tests a heading against ordered per-category regex
//!   lists; the first category whose list matches wins. Used to tag
//!   [`Section`](crate::Section) nodes.
//! - [`classify_content`] scores body text with weighted keyword and
//!   numeric-pattern matches per category and picks the strictly highest
//!   score. Used for chunk section context when no classified heading is in
//!   scope.
//!
//! Both are pure functions: identical input yields identical output. Ties in
//! the weighted mode are resolved by the declaration order of
//! [`SectionType`] (first declared wins), which keeps the result
//! deterministic across runs and platforms.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// The closed set of semantic section categories.
///
/// Declaration order doubles as the tie-break order for the weighted
/// content classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    /// Cover page, legal banner, document identification
    DocumentHeader,
    /// Executive summary / overview material
    ExecutiveSummary,
    /// Investment strategy, portfolio and allocation content
    InvestmentContent,
    /// Fund facts, share classes, subscription terms
    FundInformation,
    /// Returns, track record, performance attribution
    PerformanceData,
    /// Risk factors, warnings, disclaimers
    RiskSection,
    /// Legal, regulatory and compliance content
    LegalRegulatory,
    /// Fees, costs and expenses
    Fees,
    /// Board, committees, corporate governance
    Governance,
    /// Addresses, administrators, service providers
    ContactInfo,
    /// Number-dense financial data
    FinancialData,
    /// Anything that matches no other category
    GeneralContent,
}

impl SectionType {
    /// All categories in declaration (tie-break) order.
    pub const ALL: [Self; 12] = [
        Self::DocumentHeader,
        Self::ExecutiveSummary,
        Self::InvestmentContent,
        Self::FundInformation,
        Self::PerformanceData,
        Self::RiskSection,
        Self::LegalRegulatory,
        Self::Fees,
        Self::Governance,
        Self::ContactInfo,
        Self::FinancialData,
        Self::GeneralContent,
    ];

    /// snake_case name, matching the serialized form.
    #[must_use = "the category name is returned but not used"]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DocumentHeader => "document_header",
            Self::ExecutiveSummary => "executive_summary",
            Self::InvestmentContent => "investment_content",
            Self::FundInformation => "fund_information",
            Self::PerformanceData => "performance_data",
            Self::RiskSection => "risk_section",
            Self::LegalRegulatory => "legal_regulatory",
            Self::Fees => "fees",
            Self::Governance => "governance",
            Self::ContactInfo => "contact_info",
            Self::FinancialData => "financial_data",
            Self::GeneralContent => "general_content",
        }
    }
}

impl std::fmt::Display for SectionType {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for SectionType {
    #[inline]
    fn default() -> Self {
        Self::GeneralContent
    }
}

macro_rules! regex_set {
    ($($pattern:literal),+ $(,)?) => {
        Lazy::new(|| vec![$(Regex::new($pattern).unwrap()),+])
    };
}

// Title patterns are matched against the uppercased heading text, one
// ordered list per category. First category with a match wins.
static TITLE_EXECUTIVE_SUMMARY: Lazy<Vec<Regex>> = regex_set![
    r"EXECUTIVE\s+SUMMARY",
    r"\bSUMMARY\b",
    r"\bOVERVIEW\b",
    r"\bHIGHLIGHTS\b",
];
static TITLE_INVESTMENT: Lazy<Vec<Regex>> = regex_set![
    r"INVESTMENT\s+(STRATEGY|APPROACH|OBJECTIVE)",
    r"\bSTRATEGY\b",
    r"\bAPPROACH\b",
    r"\bMETHODOLOGY\b",
    r"\bPORTFOLIO\b",
];
static TITLE_FUND_INFORMATION: Lazy<Vec<Regex>> = regex_set![
    r"FUND\s+(INFORMATION|DETAILS|FACTS)",
    r"SHARE\s+CLASS",
    r"FUND\s+OVERVIEW",
    r"\bSUBSCRIPTION\b",
    r"\bREDEMPTION\b",
];
static TITLE_PERFORMANCE: Lazy<Vec<Regex>> = regex_set![
    r"\bPERFORMANCE\b",
    r"\bRETURNS?\b",
    r"TRACK\s+RECORD",
];
static TITLE_RISK: Lazy<Vec<Regex>> = regex_set![
    r"RISK\s+(FACTORS?|WARNINGS?|DISCLOSURES?)",
    r"IMPORTANT\s+NOTICES?",
    r"\bWARNINGS?\b",
    r"\bRISKS?\b",
];
static TITLE_LEGAL: Lazy<Vec<Regex>> = regex_set![
    r"\bLEGAL\b",
    r"\bREGULATORY\b",
    r"\bDISCLAIMERS?\b",
    r"TERMS\s+AND\s+CONDITIONS",
];
static TITLE_FEES: Lazy<Vec<Regex>> =
    regex_set![r"\bFEES?\b", r"\bCOSTS?\b", r"\bEXPENSES?\b", r"\bCHARGES?\b"];
static TITLE_GOVERNANCE: Lazy<Vec<Regex>> = regex_set![
    r"\bGOVERNANCE\b",
    r"\bBOARD\b",
    r"\bDIRECTORS?\b",
    r"\bCOMMITTEES?\b",
];
static TITLE_CONTACT: Lazy<Vec<Regex>> = regex_set![
    r"\bCONTACTS?\b",
    r"\bADDRESS\b",
    r"\bADMINISTRATORS?\b",
    r"SERVICE\s+PROVIDERS?",
];
static TITLE_DOCUMENT_HEADER: Lazy<Vec<Regex>> = regex_set![
    r"\bCONFIDENTIAL\b",
    r"\bMEMORANDUM\b",
    r"\bPROSPECTUS\b",
    r"OFFERING\s+(CIRCULAR|DOCUMENT)",
    r"PRIVATE\s+PLACEMENT",
];

/// Classify a heading by title alone.
///
/// The per-category pattern lists are tried in a fixed order; the first
/// category with a matching pattern wins and [`SectionType::GeneralContent`]
/// is the fallback.
#[must_use = "the classification result is returned but not used"]
pub fn classify_title(title: &str) -> SectionType {
    let upper = title.trim().to_uppercase();
    if upper.is_empty() {
        return SectionType::GeneralContent;
    }

    let tables: [(&Lazy<Vec<Regex>>, SectionType); 10] = [
        (&TITLE_EXECUTIVE_SUMMARY, SectionType::ExecutiveSummary),
        (&TITLE_INVESTMENT, SectionType::InvestmentContent),
        (&TITLE_FUND_INFORMATION, SectionType::FundInformation),
        (&TITLE_PERFORMANCE, SectionType::PerformanceData),
        (&TITLE_RISK, SectionType::RiskSection),
        (&TITLE_LEGAL, SectionType::LegalRegulatory),
        (&TITLE_FEES, SectionType::Fees),
        (&TITLE_GOVERNANCE, SectionType::Governance),
        (&TITLE_CONTACT, SectionType::ContactInfo),
        (&TITLE_DOCUMENT_HEADER, SectionType::DocumentHeader),
    ];

    for (patterns, section_type) in tables {
        if patterns.iter().any(|re| re.is_match(&upper)) {
            return section_type;
        }
    }

    SectionType::GeneralContent
}

// ---------------------------------------------------------------------------
// Weighted content classification
// ---------------------------------------------------------------------------

/// Per-category scores from one [`score_content`] pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContentScores {
    scores: [f32; SectionType::ALL.len()],
}

impl ContentScores {
    #[inline]
    fn add(&mut self, section_type: SectionType, amount: f32) {
        self.scores[section_type as usize] += amount;
    }

    /// Score assigned to one category.
    #[inline]
    #[must_use = "the score is returned but not used"]
    pub fn score(&self, section_type: SectionType) -> f32 {
        self.scores[section_type as usize]
    }

    /// The winning category: strictly highest score, ties broken by
    /// declaration order, sub-threshold maxima fall back to
    /// [`SectionType::GeneralContent`].
    #[must_use = "the winning category is returned but not used"]
    pub fn winner(&self) -> SectionType {
        let mut best = SectionType::GeneralContent;
        let mut best_score = 0.0f32;
        for section_type in SectionType::ALL {
            let score = self.score(section_type);
            if score > best_score {
                best = section_type;
                best_score = score;
            }
        }

        if best_score < 1.0 {
            SectionType::GeneralContent
        } else {
            best
        }
    }
}

static HEADER_INDICATORS: [&str; 13] = [
    "CONFIDENTIAL",
    "MEMORANDUM",
    "PROSPECTUS",
    "OFFERING",
    "CIRCULAR",
    "ANNUAL REPORT",
    "INTERIM REPORT",
    "QUARTERLY REPORT",
    "HALF YEAR",
    "PRIVATE PLACEMENT",
    "SUPPLEMENT",
    "ADDENDUM",
    "AMENDMENT",
];

static SUMMARY_INDICATORS: [&str; 8] = [
    "EXECUTIVE SUMMARY",
    "OVERVIEW",
    "HIGHLIGHTS",
    "KEY POINTS",
    "SUMMARY",
    "INTRODUCTION",
    "AT A GLANCE",
    "SNAPSHOT",
];

static INVESTMENT_INDICATORS: [&str; 18] = [
    "INVESTMENT",
    "PORTFOLIO",
    "ALLOCATION",
    "STRATEGY",
    "MANAGER",
    "BENCHMARK",
    "EQUITY",
    "FIXED INCOME",
    "ALTERNATIVE",
    "DERIVATIVE",
    "HEDGE",
    "LONG",
    "SHORT",
    "POSITION",
    "HOLDING",
    "SECURITY",
    "INSTRUMENT",
    "ASSET",
];

static FUND_INFO_INDICATORS: [&str; 6] = [
    "SHARE CLASS",
    "FUND FACTS",
    "FUND DETAILS",
    "SUBSCRIPTION",
    "REDEMPTION",
    "MINIMUM INVESTMENT",
];

static RISK_INDICATORS: [&str; 14] = [
    "RISK",
    "WARNING",
    "CAUTION",
    "DISCLAIMER",
    "LIMITATION",
    "UNCERTAINTY",
    "VOLATILE",
    "LOSS",
    "ADVERSE",
    "FLUCTUATION",
    "MARKET RISK",
    "CREDIT RISK",
    "LIQUIDITY RISK",
    "OPERATIONAL RISK",
];

static DISCLAIMER_PHRASES: [&str; 8] = [
    "PAST PERFORMANCE",
    "NOT GUARANTEE",
    "MAY LOSE",
    "NO ASSURANCE",
    "SHOULD NOT RELY",
    "CONSULT",
    "ADVISOR",
    "PROFESSIONAL ADVICE",
];

static LEGAL_INDICATORS: [&str; 16] = [
    "LEGAL",
    "REGULATORY",
    "COMPLIANCE",
    "REGULATION",
    "STATUTE",
    "MIFID",
    "UCITS",
    "AIFMD",
    "FATCA",
    "TAXATION",
    "WITHHOLDING",
    "JURISDICTION",
    "GOVERNING LAW",
    "LITIGATION",
    "PROCEEDING",
    "EXAMINATION",
];

static GOVERNANCE_INDICATORS: [&str; 12] = [
    "BOARD",
    "DIRECTOR",
    "GOVERNANCE",
    "COMMITTEE",
    "SHAREHOLDER",
    "VOTING",
    "ELECTION",
    "APPOINTMENT",
    "REMUNERATION",
    "INDEPENDENCE",
    "OVERSIGHT",
    "FIDUCIARY",
];

static PERFORMANCE_INDICATORS: [&str; 14] = [
    "RETURN",
    "YIELD",
    "GAIN",
    "OUTPERFORM",
    "UNDERPERFORM",
    "ALPHA",
    "BETA",
    "SHARPE",
    "VOLATILITY",
    "TRACKING",
    "ATTRIBUTION",
    "CONTRIBUTION",
    "DRAWDOWN",
    "RECOVERY",
];

static FEE_INDICATORS: [&str; 7] = [
    "MANAGEMENT FEE",
    "PERFORMANCE FEE",
    "EXPENSE RATIO",
    "CARRIED INTEREST",
    "HURDLE",
    "FEE",
    "EXPENSE",
];

static FINANCIAL_PATTERNS: Lazy<Vec<Regex>> = regex_set![
    r"\$[\d,]+(\.\d{2})?(\s*(million|billion|thousand))?",
    r"[\d,]+\.\d+%",
    r"\b\d{1,3}(,\d{3})+\b",
    r"\b(USD|EUR|GBP|JPY|CHF|AUD|CAD)\b",
    r"\(\$?[\d,]+\)",
    r"\b(NAV|AUM)\b",
    r"\bbasis points\b|\bbps\b",
    r"\b(EBITDA|WACC|ROE|ROA)\b",
];

static CONTACT_PATTERNS: Lazy<Vec<Regex>> = regex_set![
    r"www\.[\w.\-]+\.\w+",
    r"[\w.\-]+@[\w.\-]+\.\w+",
    r"\+?\d{1,4}[-.\s]?\d{3,4}[-.\s]?\d{4,6}",
    r"(?i)\b(address|contact|phone|email|website|fax)\b",
];

static ENTITY_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(LTD|LLC|INC|CORP|GMBH|PLC|NV|S\.A\.)\b").unwrap());

static NUMERIC_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+(\.\d+)?\b").unwrap());

fn indicator_hits(upper: &str, indicators: &[&str]) -> usize {
    indicators.iter().filter(|kw| upper.contains(*kw)).count()
}

#[allow(clippy::cast_precision_loss)]
fn capped(hits: usize, weight: f32, cap: f32) -> f32 {
    (hits as f32 * weight).min(cap)
}

/// Score body text against every category.
///
/// Exposed separately from [`classify_content`] so the determinism and
/// tie-break behavior can be tested against raw scores.
#[must_use = "the computed scores are returned but not used"]
#[allow(clippy::cast_precision_loss)]
pub fn score_content(content: &str) -> ContentScores {
    let mut scores = ContentScores::default();
    let clean: String = content.split_whitespace().collect::<Vec<_>>().join(" ");
    if clean.is_empty() {
        return scores;
    }
    let upper = clean.to_uppercase();
    let char_count = clean.chars().count();

    // Document header: banner keywords weigh heavily, short blocks naming a
    // legal entity get a smaller bump.
    let header_hits = indicator_hits(&upper, &HEADER_INDICATORS);
    scores.add(SectionType::DocumentHeader, header_hits as f32 * 3.0);
    if char_count < 200 && ENTITY_SUFFIX.is_match(&upper) {
        scores.add(SectionType::DocumentHeader, 2.0);
    }

    scores.add(
        SectionType::ExecutiveSummary,
        indicator_hits(&upper, &SUMMARY_INDICATORS) as f32 * 2.0,
    );

    // Numeric patterns: currency amounts, percentages, thousands-separated
    // figures and financial acronyms.
    let financial_matches: usize = FINANCIAL_PATTERNS
        .iter()
        .map(|re| re.find_iter(&clean).count())
        .sum();
    scores.add(SectionType::FinancialData, capped(financial_matches, 0.5, 3.0));

    scores.add(
        SectionType::InvestmentContent,
        capped(indicator_hits(&upper, &INVESTMENT_INDICATORS), 0.3, 3.0),
    );
    scores.add(
        SectionType::FundInformation,
        capped(indicator_hits(&upper, &FUND_INFO_INDICATORS), 0.5, 2.0),
    );
    scores.add(
        SectionType::RiskSection,
        capped(indicator_hits(&upper, &RISK_INDICATORS), 0.5, 3.0),
    );
    scores.add(
        SectionType::RiskSection,
        capped(indicator_hits(&upper, &DISCLAIMER_PHRASES), 0.5, 2.0),
    );
    scores.add(
        SectionType::LegalRegulatory,
        capped(indicator_hits(&upper, &LEGAL_INDICATORS), 0.4, 3.0),
    );
    scores.add(
        SectionType::Governance,
        capped(indicator_hits(&upper, &GOVERNANCE_INDICATORS), 0.4, 3.0),
    );
    scores.add(
        SectionType::PerformanceData,
        capped(indicator_hits(&upper, &PERFORMANCE_INDICATORS), 0.3, 3.0),
    );
    scores.add(
        SectionType::Fees,
        capped(indicator_hits(&upper, &FEE_INDICATORS), 0.4, 2.0),
    );

    let contact_matches = CONTACT_PATTERNS
        .iter()
        .filter(|re| re.is_match(&clean))
        .count();
    scores.add(SectionType::ContactInfo, capped(contact_matches, 0.5, 2.0));

    // Number density: lots of numeric tokens relative to words points at
    // financial or performance tables even without keyword hits.
    let word_count = clean.split_whitespace().count().max(1);
    let number_density = NUMERIC_TOKEN.find_iter(&clean).count() as f32 / word_count as f32;
    if number_density > 0.1 {
        scores.add(SectionType::FinancialData, 1.0);
        scores.add(SectionType::PerformanceData, 1.0);
    }

    // Length shaping
    if char_count < 100 {
        scores.add(SectionType::DocumentHeader, 0.5);
    } else if char_count > 1000 {
        scores.add(SectionType::GeneralContent, 1.0);
    }

    scores
}

/// Classify body text with the weighted scorer.
#[inline]
#[must_use = "the classification result is returned but not used"]
pub fn classify_content(content: &str) -> SectionType {
    score_content(content).winner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_executive_summary() {
        assert_eq!(
            classify_title("EXECUTIVE SUMMARY"),
            SectionType::ExecutiveSummary
        );
        assert_eq!(classify_title("Fund at a Glance Overview"), SectionType::ExecutiveSummary);
    }

    #[test]
    fn test_title_fees() {
        assert_eq!(
            classify_title("Fees and Expenses breakdown"),
            SectionType::Fees
        );
        assert_eq!(classify_title("Charges"), SectionType::Fees);
    }

    #[test]
    fn test_title_risk() {
        assert_eq!(classify_title("Risk Factors"), SectionType::RiskSection);
        assert_eq!(classify_title("IMPORTANT NOTICE"), SectionType::RiskSection);
    }

    #[test]
    fn test_title_order_first_match_wins() {
        // "Summary" is tested before "Performance"; a title carrying both
        // lands in the earlier category.
        assert_eq!(
            classify_title("Performance Summary"),
            SectionType::ExecutiveSummary
        );
    }

    #[test]
    fn test_title_default_general() {
        assert_eq!(classify_title("Heading One"), SectionType::GeneralContent);
        assert_eq!(classify_title(""), SectionType::GeneralContent);
    }

    #[test]
    fn test_title_case_insensitive() {
        assert_eq!(classify_title("risk factors"), SectionType::RiskSection);
        assert_eq!(classify_title("Track Record"), SectionType::PerformanceData);
    }

    #[test]
    fn test_content_risk_keywords() {
        let text =
            "This is a short paragraph about risk and warning disclosures that is somewhat long.";
        assert_eq!(classify_content(text), SectionType::RiskSection);
    }

    #[test]
    fn test_content_financial_patterns() {
        let text = "The fund returned 12.5% on $1,500,000 of committed capital in USD, \
                    with NAV of $2,300,000 and fees of 1.25% charged quarterly against AUM.";
        let scores = score_content(text);
        assert!(scores.score(SectionType::FinancialData) >= 1.0);
    }

    #[test]
    fn test_content_document_header() {
        let text = "CONFIDENTIAL PRIVATE PLACEMENT MEMORANDUM - Alpine Capital Partners Ltd";
        assert_eq!(classify_content(text), SectionType::DocumentHeader);
    }

    #[test]
    fn test_content_all_zero_returns_general() {
        assert_eq!(classify_content("plain everyday words"), SectionType::GeneralContent);
        assert_eq!(classify_content(""), SectionType::GeneralContent);
    }

    #[test]
    fn test_content_subthreshold_max_returns_general() {
        // One investment keyword scores 0.3 which is below the 1.0 floor.
        let scores = score_content("a single portfolio mention");
        assert!(scores.score(SectionType::InvestmentContent) > 0.0);
        assert_eq!(scores.winner(), SectionType::GeneralContent);
    }

    #[test]
    fn test_content_deterministic() {
        let text = "Risk warning: past performance is not guarantee of future returns. \
                    Investors may lose capital and should consult a professional advisor.";
        let first = classify_content(text);
        let second = classify_content(text);
        assert_eq!(first, second);

        let scores_a = score_content(text);
        let scores_b = score_content(text);
        for section_type in SectionType::ALL {
            assert!((scores_a.score(section_type) - scores_b.score(section_type)).abs()
                < f32::EPSILON);
        }
    }

    #[test]
    fn test_content_tie_break_declaration_order() {
        let mut scores = ContentScores::default();
        scores.add(SectionType::RiskSection, 2.0);
        scores.add(SectionType::Fees, 2.0);
        // RiskSection is declared before Fees, so it wins the tie.
        assert_eq!(scores.winner(), SectionType::RiskSection);
    }

    #[test]
    fn test_governance_content() {
        let text = "The board of directors and the remuneration committee provide oversight; \
                    shareholder voting and director appointment follow the governance charter \
                    with independence requirements and fiduciary duties.";
        assert_eq!(classify_content(text), SectionType::Governance);
    }

    #[test]
    fn test_section_type_serde() {
        let json = serde_json::to_string(&SectionType::LegalRegulatory).unwrap();
        assert_eq!(json, "\"legal_regulatory\"");
        let back: SectionType = serde_json::from_str("\"risk_section\"").unwrap();
        assert_eq!(back, SectionType::RiskSection);
    }

    #[test]
    fn test_all_order_matches_discriminants() {
        for (i, section_type) in SectionType::ALL.iter().enumerate() {
            assert_eq!(*section_type as usize, i);
        }
    }
}
