//! Price range formats and price buckets.
//!
//! A stored `price_range` is either a legacy symbol (`$`, `$$`, `$$$`) or a
//! literal dollar amount (`$28`). When a listing is filtered by a legacy
//! symbol, stored values are classified by their numeric amount into one of
//! three buckets and the filter becomes a membership test on the stored
//! strings that landed in the requested bucket.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::CoreError;

/// Literal dollar amount, e.g. `$25`.
const AMOUNT_PATTERN: &str = r"^\$\d+$";

static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(AMOUNT_PATTERN).expect("valid regex"));

/// Legacy symbolic price buckets accepted on input.
pub const LEGACY_SYMBOLS: &[&str] = &["$", "$$", "$$$"];

/// Upper bound (exclusive) of the budget band.
pub const BUDGET_CEILING: u64 = 20;

/// Upper bound (inclusive) of the moderate band.
pub const MODERATE_CEILING: u64 = 35;

/// Message returned for any malformed price range.
pub const PRICE_RANGE_FORMAT_MESSAGE: &str =
    "Price range must be $, $$, $$$, or specific amount like $25";

/// One of the three derived price categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceBucket {
    Budget,
    Moderate,
    Expensive,
}

impl PriceBucket {
    /// Map a legacy symbol to its bucket. Returns `None` for anything else.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "$" => Some(Self::Budget),
            "$$" => Some(Self::Moderate),
            "$$$" => Some(Self::Expensive),
            _ => None,
        }
    }

    /// Band an amount: `< 20` budget, `20..=35` moderate, `> 35` expensive.
    pub fn for_amount(amount: u64) -> Self {
        if amount < BUDGET_CEILING {
            Self::Budget
        } else if amount <= MODERATE_CEILING {
            Self::Moderate
        } else {
            Self::Expensive
        }
    }

    /// Classify a stored price string by its numeric amount.
    ///
    /// Stored legacy symbols carry no amount and therefore fall in no bucket.
    pub fn classify(stored: &str) -> Option<Self> {
        parse_amount(stored).map(Self::for_amount)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::Moderate => "moderate",
            Self::Expensive => "expensive",
        }
    }
}

impl fmt::Display for PriceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a `priceRange` filter value is applied to the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceFilter {
    /// Membership in the set of stored values classified into this bucket.
    Bucket(PriceBucket),
    /// Exact match on the stored string.
    Exact(String),
}

impl PriceFilter {
    /// Interpret a raw filter value. Legacy symbols become buckets; every
    /// other value, literal amounts included, is matched exactly.
    pub fn parse(raw: &str) -> Self {
        match PriceBucket::from_symbol(raw) {
            Some(bucket) => Self::Bucket(bucket),
            None => Self::Exact(raw.to_string()),
        }
    }
}

/// Extract the numeric amount from a stored price string.
///
/// Strips one leading `$` and reads the leading decimal digits, so `"$28"`
/// yields `28` while `"$"` and `"$$"` yield `None`. A digit run too long for
/// `u64` saturates to `u64::MAX`.
pub fn parse_amount(stored: &str) -> Option<u64> {
    let rest = stored.strip_prefix('$').unwrap_or(stored);
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(u64::MAX))
}

/// Select the stored price strings that fall into `bucket`.
///
/// The result is deduplicated and sorted so the bound parameter is stable.
pub fn bucket_members<'a, I>(stored: I, bucket: PriceBucket) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    stored
        .into_iter()
        .filter(|price| PriceBucket::classify(price) == Some(bucket))
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Whether `value` is a literal dollar amount such as `$25`.
pub fn is_amount(value: &str) -> bool {
    AMOUNT_RE.is_match(value)
}

/// Whether `value` is an accepted price range in either format.
pub fn is_valid_price_range(value: &str) -> bool {
    LEGACY_SYMBOLS.contains(&value) || is_amount(value)
}

/// Validate a price range, returning a [`CoreError::Validation`] if malformed.
pub fn validate_price_range(value: &str) -> Result<(), CoreError> {
    if is_valid_price_range(value) {
        Ok(())
    } else {
        Err(CoreError::Validation(PRICE_RANGE_FORMAT_MESSAGE.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn classifies_reference_amounts() {
        assert_eq!(PriceBucket::classify("$18"), Some(PriceBucket::Budget));
        assert_eq!(PriceBucket::classify("$28"), Some(PriceBucket::Moderate));
        assert_eq!(PriceBucket::classify("$58"), Some(PriceBucket::Expensive));
    }

    #[test]
    fn band_edges() {
        assert_eq!(PriceBucket::for_amount(19), PriceBucket::Budget);
        assert_eq!(PriceBucket::for_amount(20), PriceBucket::Moderate);
        assert_eq!(PriceBucket::for_amount(35), PriceBucket::Moderate);
        assert_eq!(PriceBucket::for_amount(36), PriceBucket::Expensive);
        assert_eq!(PriceBucket::for_amount(0), PriceBucket::Budget);
    }

    #[test]
    fn legacy_symbols_map_to_buckets() {
        assert_eq!(PriceBucket::from_symbol("$"), Some(PriceBucket::Budget));
        assert_eq!(PriceBucket::from_symbol("$$"), Some(PriceBucket::Moderate));
        assert_eq!(PriceBucket::from_symbol("$$$"), Some(PriceBucket::Expensive));
        assert_eq!(PriceBucket::from_symbol("$$$$"), None);
    }

    #[test]
    fn stored_legacy_symbols_have_no_bucket() {
        assert_eq!(PriceBucket::classify("$"), None);
        assert_eq!(PriceBucket::classify("$$"), None);
        assert_eq!(PriceBucket::classify("$$$"), None);
    }

    #[test]
    fn parse_amount_reads_leading_digits() {
        assert_eq!(parse_amount("$45"), Some(45));
        assert_eq!(parse_amount("$7x"), Some(7));
        assert_eq!(parse_amount("12"), Some(12));
        assert_eq!(parse_amount("$"), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn oversized_amount_is_expensive() {
        let huge = "$99999999999999999999";
        assert!(is_valid_price_range(huge));
        assert_eq!(parse_amount(huge), Some(u64::MAX));
        assert_eq!(PriceBucket::classify(huge), Some(PriceBucket::Expensive));
        assert_eq!(
            bucket_members([huge, "$18"], PriceBucket::Expensive),
            vec![huge.to_string()]
        );
    }

    #[test]
    fn filter_parse_distinguishes_symbols_from_literals() {
        assert_eq!(PriceFilter::parse("$$"), PriceFilter::Bucket(PriceBucket::Moderate));
        assert_matches!(PriceFilter::parse("$28"), PriceFilter::Exact(ref s) if s == "$28");
        assert_matches!(PriceFilter::parse("cheap"), PriceFilter::Exact(_));
    }

    #[test]
    fn bucket_members_selects_and_dedupes() {
        let stored = ["$28", "$18", "$45", "$28", "$35", "$$", "$19", "$58"];
        assert_eq!(
            bucket_members(stored, PriceBucket::Budget),
            vec!["$18".to_string(), "$19".to_string()]
        );
        assert_eq!(
            bucket_members(stored, PriceBucket::Moderate),
            vec!["$28".to_string(), "$35".to_string()]
        );
        assert_eq!(
            bucket_members(stored, PriceBucket::Expensive),
            vec!["$45".to_string(), "$58".to_string()]
        );
    }

    #[test]
    fn bucket_members_of_empty_table_is_empty() {
        assert!(bucket_members(std::iter::empty(), PriceBucket::Budget).is_empty());
    }

    #[test]
    fn price_range_format_validation() {
        for ok in ["$", "$$", "$$$", "$0", "$25", "$120"] {
            assert!(is_valid_price_range(ok), "{ok} should be accepted");
        }
        for bad in ["", "$$$$", "25", "$25.50", "$ 25", "€25", "$2a"] {
            assert!(!is_valid_price_range(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn validate_price_range_reports_message() {
        let err = validate_price_range("cheap").unwrap_err();
        assert_matches!(err, CoreError::Validation(ref msg) if msg == PRICE_RANGE_FORMAT_MESSAGE);
    }

    #[test]
    fn bucket_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PriceBucket::Moderate).unwrap(),
            "\"moderate\""
        );
        assert_eq!(PriceBucket::Expensive.to_string(), "expensive");
    }
}
