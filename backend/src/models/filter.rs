//! Resolved query filters.
//!
//! A [`FilterSpec`] is built once per request from loosely-typed query-string
//! values. All normalisation (trimming, lowercasing, numeric coercion) happens
//! here so the query engine only ever sees clean, strongly-typed input.

use std::fmt;

/// Default page when the parameter is missing or malformed.
pub const DEFAULT_PAGE: usize = 1;

/// Default page size when the parameter is missing or malformed.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Keyword that disables diet-type filtering.
pub const ALL_DIETS: &str = "all";

/// Lowercase and trim a free-text value.
pub fn normalize_text(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Coerce a raw numeric query value into an integer `>= 1`.
///
/// Missing, non-numeric or non-finite values fall back to `default`.
/// Fractional values are floored, then clamped to at least 1.
pub fn coerce_positive(raw: Option<&str>, default: usize) -> usize {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return default.max(1);
    };

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => {
            let floored = value.floor();
            if floored < 1.0 {
                1
            } else if floored >= usize::MAX as f64 {
                usize::MAX
            } else {
                floored as usize
            }
        }
        _ => default.max(1),
    }
}

/// Diet-type predicate: either everything or an exact (case-insensitive) tag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DietTypeFilter {
    #[default]
    All,
    /// Normalised (trimmed, lowercase) diet tag.
    Exact(String),
}

impl DietTypeFilter {
    /// Parse a raw `dietType` parameter. Missing, empty or `all` → [`DietTypeFilter::All`].
    pub fn parse(raw: Option<&str>) -> Self {
        let value = raw.map(normalize_text).unwrap_or_default();
        if value.is_empty() || value == ALL_DIETS {
            DietTypeFilter::All
        } else {
            DietTypeFilter::Exact(value)
        }
    }

    /// Whether a record's diet field passes this filter.
    pub fn accepts(&self, diet: &str) -> bool {
        match self {
            DietTypeFilter::All => true,
            DietTypeFilter::Exact(expected) => normalize_text(diet) == normalize_text(expected),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DietTypeFilter::All => ALL_DIETS,
            DietTypeFilter::Exact(value) => value,
        }
    }
}

impl fmt::Display for DietTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved filter for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub diet_type: DietTypeFilter,
    /// Normalised substring pattern; empty matches everything.
    pub text_query: String,
    /// 1-based page index.
    pub page: usize,
    pub page_size: usize,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            diet_type: DietTypeFilter::All,
            text_query: String::new(),
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FilterSpec {
    /// Resolve a filter from raw query-string values.
    pub fn from_raw(
        diet_type: Option<&str>,
        text_query: Option<&str>,
        page: Option<&str>,
        page_size: Option<&str>,
    ) -> Self {
        Self {
            diet_type: DietTypeFilter::parse(diet_type),
            text_query: text_query.map(normalize_text).unwrap_or_default(),
            page: coerce_positive(page, DEFAULT_PAGE),
            page_size: coerce_positive(page_size, DEFAULT_PAGE_SIZE),
        }
    }

    pub fn with_diet_type(mut self, diet_type: &str) -> Self {
        self.diet_type = DietTypeFilter::parse(Some(diet_type));
        self
    }

    pub fn with_text_query(mut self, text_query: &str) -> Self {
        self.text_query = normalize_text(text_query);
        self
    }

    /// Set the pagination window; both values are clamped to at least 1.
    pub fn with_page(mut self, page: usize, page_size: usize) -> Self {
        self.page = page.max(1);
        self.page_size = page_size.max(1);
        self
    }

    /// Whether `text` contains the query (case-insensitive). Empty query matches all.
    ///
    /// Both sides are normalised here as well, so a hand-built filter with a
    /// mixed-case query still matches.
    pub fn accepts_text(&self, text: &str) -> bool {
        let needle = normalize_text(&self.text_query);
        needle.is_empty() || text.to_lowercase().contains(&needle)
    }

    /// Zero-based offset of the first item on the requested page.
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1).saturating_mul(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_positive_defaults() {
        assert_eq!(coerce_positive(None, 10), 10);
        assert_eq!(coerce_positive(Some(""), 10), 10);
        assert_eq!(coerce_positive(Some("abc"), 1), 1);
        assert_eq!(coerce_positive(Some("NaN"), 10), 10);
        assert_eq!(coerce_positive(Some("inf"), 10), 10);
    }

    #[test]
    fn test_coerce_positive_clamps_and_floors() {
        assert_eq!(coerce_positive(Some("0"), 10), 1);
        assert_eq!(coerce_positive(Some("-5"), 10), 1);
        assert_eq!(coerce_positive(Some("2.9"), 10), 2);
        assert_eq!(coerce_positive(Some(" 3 "), 10), 3);
        assert_eq!(coerce_positive(Some("0.5"), 10), 1);
    }

    #[test]
    fn test_diet_type_filter_parse() {
        assert_eq!(DietTypeFilter::parse(None), DietTypeFilter::All);
        assert_eq!(DietTypeFilter::parse(Some("")), DietTypeFilter::All);
        assert_eq!(DietTypeFilter::parse(Some("ALL")), DietTypeFilter::All);
        assert_eq!(
            DietTypeFilter::parse(Some(" KETO ")),
            DietTypeFilter::Exact("keto".to_string())
        );
    }

    #[test]
    fn test_diet_type_filter_is_exact_not_substring() {
        let filter = DietTypeFilter::parse(Some("veg"));
        assert!(!filter.accepts("Vegan"));
        assert!(!filter.accepts("Vegetarian"));

        let filter = DietTypeFilter::parse(Some("KETO"));
        assert!(filter.accepts("Keto"));
        assert!(filter.accepts("keto"));
    }

    #[test]
    fn test_filter_spec_from_raw() {
        let spec = FilterSpec::from_raw(Some("Vegan"), Some("  Bowl "), Some("2"), Some("5"));
        assert_eq!(spec.diet_type.as_str(), "vegan");
        assert_eq!(spec.text_query, "bowl");
        assert_eq!(spec.page, 2);
        assert_eq!(spec.page_size, 5);
        assert_eq!(spec.offset(), 5);
    }

    #[test]
    fn test_filter_spec_defaults() {
        let spec = FilterSpec::from_raw(None, None, None, None);
        assert_eq!(spec, FilterSpec::default());
        assert_eq!(spec.diet_type.to_string(), "all");
        assert_eq!(spec.offset(), 0);
    }

    #[test]
    fn test_accepts_text_substring() {
        let spec = FilterSpec::default().with_text_query("veg");
        assert!(spec.accepts_text("Vegan"));
        assert!(spec.accepts_text("Vegetarian"));
        assert!(!spec.accepts_text("Keto"));
    }

    #[test]
    fn test_hand_built_filter_is_case_insensitive() {
        let spec = FilterSpec {
            diet_type: DietTypeFilter::Exact(" KETO".to_string()),
            text_query: "Ch".to_string(),
            ..FilterSpec::default()
        };
        assert!(spec.diet_type.accepts("Keto"));
        assert!(spec.accepts_text("Keto Chicken"));
        assert!(!spec.accepts_text("Keto Omelette"));

        let blank = FilterSpec {
            text_query: "   ".to_string(),
            ..FilterSpec::default()
        };
        assert!(blank.accepts_text("anything"));
    }

    #[test]
    fn test_offset_saturates() {
        let spec = FilterSpec::default().with_page(usize::MAX, usize::MAX);
        assert_eq!(spec.offset(), usize::MAX);
    }
}
