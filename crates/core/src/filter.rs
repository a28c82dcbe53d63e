//! Filter criteria for store-app queries.
//!
//! Each variant describes one read predicate. Text criteria keep the raw
//! input; both sides are case-folded at comparison time, one character at
//! a time, the same way Postgres `LOWER` folds them.

use std::fmt;

/// Number of rows returned by the "first ten" listing.
pub const FIRST_TEN_LIMIT: i64 = 10;

/// Fields a filter inspects on a candidate record.
pub trait FilterTarget {
    fn name(&self) -> &str;
    fn category(&self) -> &str;
    fn rating(&self) -> f64;
    fn people(&self) -> i32;
}

/// A single read predicate over the store-apps table.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreAppFilter {
    /// Case-insensitive substring match on `name`.
    NameContains(String),
    /// Case-insensitive substring match on `category`.
    CategoryContains(String),
    /// `rating >= threshold`.
    MinRating(f64),
    /// `people >= threshold`.
    MinPeople(i32),
}

impl StoreAppFilter {
    pub fn name_contains(search: &str) -> Self {
        Self::NameContains(search.to_string())
    }

    pub fn category_contains(category: &str) -> Self {
        Self::CategoryContains(category.to_string())
    }

    pub fn min_rating(rating: f64) -> Self {
        Self::MinRating(rating)
    }

    pub fn min_people(people: i32) -> Self {
        Self::MinPeople(people)
    }

    /// Evaluate the predicate in process.
    ///
    /// The Postgres store expresses the same predicate in SQL; both must
    /// agree on inclusivity and case folding.
    pub fn matches<T: FilterTarget + ?Sized>(&self, target: &T) -> bool {
        match self {
            Self::NameContains(needle) => contains_folded(target.name(), needle),
            Self::CategoryContains(needle) => contains_folded(target.category(), needle),
            Self::MinRating(threshold) => target.rating() >= *threshold,
            Self::MinPeople(threshold) => target.people() >= *threshold,
        }
    }
}

impl fmt::Display for StoreAppFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameContains(needle) => write!(f, "name contains {needle:?}"),
            Self::CategoryContains(needle) => write!(f, "category contains {needle:?}"),
            Self::MinRating(threshold) => write!(f, "rating >= {threshold}"),
            Self::MinPeople(threshold) => write!(f, "people >= {threshold}"),
        }
    }
}

/// Case-fold text for substring comparison.
///
/// Folds each character independently to match Postgres `LOWER`, which has
/// no word-final sigma rule (unlike `str::to_lowercase`).
pub fn normalize(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    normalize(haystack).contains(normalize(needle).as_str())
}
