//! Comparator half of the filter-sort pipeline.
//!
//! One stable sort over an extracted scalar: the resolved timestamp or
//! the derived engagement score. Direction is explicit input on every
//! call; toggling on repeated header clicks is the UI layer's concern.

use crate::filter::FilterSpec;
use crate::record::Record;
use std::cmp::Ordering;
use std::{fmt, str::FromStr};

use crate::model::{ParseEnumError, normalize};

/// Scalar a record list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Resolved timestamp (each record type's date preference order).
    #[default]
    Date,
    /// Derived engagement score (metric counter sum).
    Engagement,
}

/// Sort direction. Defaults to descending, the console's "newest /
/// highest first" convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// A complete sort criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    #[must_use]
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    fn compare<R: Record>(self, a: &R, b: &R) -> Ordering {
        let ord = match self.key {
            SortKey::Date => a.sort_timestamp_us().cmp(&b.sort_timestamp_us()),
            SortKey::Engagement => a.engagement().cmp(&b.engagement()),
        };
        match self.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

/// Stable-sort records by the given spec, consuming and returning the vec.
///
/// Ties keep their incoming relative order, so sorting is idempotent and
/// an already-filtered list keeps its filter ordering among equals.
#[must_use]
pub fn sort<R: Record>(mut records: Vec<R>, spec: SortSpec) -> Vec<R> {
    records.sort_by(|a, b| spec.compare(a, b));
    records
}

/// Run the full pipeline: filter, then stable sort.
#[must_use]
pub fn apply<R: Record + Clone>(records: &[R], filter: &FilterSpec, spec: SortSpec) -> Vec<R> {
    sort(filter.apply(records), spec)
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date => f.write_str("date"),
            Self::Engagement => f.write_str("engagement"),
        }
    }
}

impl FromStr for SortKey {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "date" | "time" => Ok(Self::Date),
            "engagement" | "score" => Ok(Self::Engagement),
            _ => Err(ParseEnumError {
                expected: "sort key",
                got: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("asc"),
            Self::Desc => f.write_str("desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            _ => Err(ParseEnumError {
                expected: "sort direction",
                got: s.to_string(),
            }),
        }
    }
}
