//! Fund identity metadata
//!
//! A [`FundRecord`] is fetched from an external relational store and passed
//! through to the output untouched. The chunking core tolerates its absence:
//! a failed or skipped lookup becomes [`FundLookup::Unavailable`] and has no
//! effect on chunk computation.

use serde::{Deserialize, Serialize};

/// One fund-identity record from the mapping store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundRecord {
    /// Stable mapping key
    pub map_id: i64,
    /// Management company name
    pub management_company: String,
    /// Full fund name
    pub fund_name: String,
    /// Abbreviated fund name
    pub fund_short_name: String,
    /// Reporting asset class
    pub asset_class: String,
    /// Return currency code
    pub currency: String,
}

/// Outcome of the fund metadata lookup, attached to the output as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FundLookup {
    /// A record was found (first match wins on ambiguity)
    Found {
        /// The matched record
        record: FundRecord,
    },
    /// No record, or the store was unreachable
    Unavailable {
        /// Human-readable cause
        reason: String,
    },
}

impl FundLookup {
    /// Construct an `Unavailable` marker.
    #[inline]
    #[must_use = "constructors return a new lookup marker"]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Whether a record was found.
    #[inline]
    #[must_use = "the lookup status is returned but not used"]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// The record, when found.
    #[inline]
    #[must_use = "the record reference is returned but not used"]
    pub const fn record(&self) -> Option<&FundRecord> {
        match self {
            Self::Found { record } => Some(record),
            Self::Unavailable { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> FundRecord {
        FundRecord {
            map_id: 4711,
            management_company: "Alpine Capital Partners".to_string(),
            fund_name: "Alpine Global Macro Fund".to_string(),
            fund_short_name: "Alpine Macro".to_string(),
            asset_class: "Global Macro".to_string(),
            currency: "USD".to_string(),
        }
    }

    #[test]
    fn test_lookup_found_accessors() {
        let lookup = FundLookup::Found {
            record: sample_record(),
        };
        assert!(lookup.is_found());
        assert_eq!(lookup.record().unwrap().map_id, 4711);
    }

    #[test]
    fn test_lookup_unavailable() {
        let lookup = FundLookup::unavailable("store unreachable");
        assert!(!lookup.is_found());
        assert!(lookup.record().is_none());
    }

    #[test]
    fn test_lookup_serde_tagging() {
        let found = FundLookup::Found {
            record: sample_record(),
        };
        let json = serde_json::to_string(&found).unwrap();
        assert!(json.contains("\"status\":\"found\""));
        assert!(json.contains("Alpine Global Macro Fund"));

        let unavailable = FundLookup::unavailable("no data found in store");
        let json = serde_json::to_string(&unavailable).unwrap();
        assert!(json.contains("\"status\":\"unavailable\""));

        let back: FundLookup = serde_json::from_str(&json).unwrap();
        assert_eq!(back, unavailable);
    }
}
