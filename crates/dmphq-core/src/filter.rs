//! Predicate half of the filter-sort pipeline.
//!
//! A [`FilterSpec`] is a set of independent predicates combined with AND
//! semantics: a record survives only if it passes every active one.
//! Selecting `"all"` (or an empty value) for a dimension deactivates that
//! predicate, matching how the console's dropdown filters behave.

use crate::record::{DimensionKey, Record};

/// Filter criteria applied to a record list.
///
/// All criteria are optional; an empty spec retains everything. The spec
/// never mutates the records it is applied to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// Lowercased free-text term; `None` when search is inactive.
    search: Option<String>,
    /// Active dimension selections (disabled selections are never stored).
    dimensions: Vec<(DimensionKey, String)>,
}

impl FilterSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text search term. Empty or whitespace-only input
    /// deactivates search.
    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        let trimmed = term.trim();
        self.search = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_ascii_lowercase())
        };
        self
    }

    /// Select a value for one dimension. `"all"` or an empty value
    /// deactivates the dimension, mirroring the console's dropdowns.
    #[must_use]
    pub fn dimension(mut self, key: DimensionKey, value: impl Into<String>) -> Self {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            self.dimensions.retain(|(k, _)| *k != key);
        } else {
            self.dimensions.retain(|(k, _)| *k != key);
            self.dimensions.push((key, trimmed.to_string()));
        }
        self
    }

    /// Select a value only when one was given; `None` leaves the
    /// dimension inactive. Convenience for optional CLI flags.
    #[must_use]
    pub fn dimension_opt(self, key: DimensionKey, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.dimension(key, v),
            None => self,
        }
    }

    /// Returns true if no criteria are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.dimensions.is_empty()
    }

    /// Number of active predicates (search counts as one).
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.dimensions.len() + usize::from(self.search.is_some())
    }

    /// Returns true if the record satisfies every active predicate.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        for (key, value) in &self.dimensions {
            if record.dimension(*key) != Some(value.as_str()) {
                return false;
            }
        }

        if let Some(ref term) = self.search {
            let hit = record
                .search_fields()
                .iter()
                .any(|field| field.to_ascii_lowercase().contains(term.as_str()));
            if !hit {
                return false;
            }
        }

        true
    }

    /// Apply this filter, returning a new vec of the surviving records
    /// in their original order.
    pub fn apply<R: Record + Clone>(&self, records: &[R]) -> Vec<R> {
        records
            .iter()
            .filter(|record| self.matches(*record))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::FilterSpec;
    use crate::model::{Platform, PostStatus, SocialPost};
    use crate::record::DimensionKey;

    fn post(id: &str, platform: Platform, status: PostStatus, content: &str) -> SocialPost {
        SocialPost {
            id: id.into(),
            platform,
            status,
            content: content.into(),
            entity: "acme".into(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<SocialPost> {
        vec![
            post("p1", Platform::Instagram, PostStatus::Draft, "Spring promo"),
            post("p2", Platform::Facebook, PostStatus::Scheduled, "Sale starts"),
            post(
                "p3",
                Platform::Instagram,
                PostStatus::Published,
                "Launch day!",
            ),
        ]
    }

    #[test]
    fn empty_spec_retains_everything() {
        let spec = FilterSpec::new();
        assert!(spec.is_empty());
        assert_eq!(spec.apply(&sample()).len(), 3);
    }

    #[test]
    fn dimension_filter_is_exact() {
        let spec = FilterSpec::new().dimension(DimensionKey::Platform, "instagram");
        let out = spec.apply(&sample());
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|p| p.platform == Platform::Instagram));
    }

    #[test]
    fn all_value_deactivates_dimension() {
        let spec = FilterSpec::new()
            .dimension(DimensionKey::Platform, "instagram")
            .dimension(DimensionKey::Platform, "all");
        assert!(spec.is_empty());
        assert_eq!(spec.apply(&sample()).len(), 3);
    }

    #[test]
    fn reselecting_a_dimension_replaces_the_value() {
        let spec = FilterSpec::new()
            .dimension(DimensionKey::Platform, "instagram")
            .dimension(DimensionKey::Platform, "facebook");
        assert_eq!(spec.active_count(), 1);
        let out = spec.apply(&sample());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "p2");
    }

    #[test]
    fn filters_combine_with_and_semantics() {
        let spec = FilterSpec::new()
            .dimension(DimensionKey::Platform, "instagram")
            .dimension(DimensionKey::Status, "published");
        let out = spec.apply(&sample());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "p3");
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let lower = FilterSpec::new().search("launch");
        let upper = FilterSpec::new().search("LAUNCH");
        assert_eq!(lower.apply(&sample()), upper.apply(&sample()));
        assert_eq!(lower.apply(&sample())[0].id, "p3");
    }

    #[test]
    fn search_matches_any_field() {
        let mut posts = sample();
        posts[0].tags = vec!["giveaway".into()];

        let spec = FilterSpec::new().search("giveaway");
        let out = spec.apply(&posts);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "p1");
    }

    #[test]
    fn blank_search_is_inactive() {
        let spec = FilterSpec::new().search("   ");
        assert!(spec.is_empty());
    }

    #[test]
    fn selection_on_missing_dimension_matches_nothing() {
        // Posts carry no asset-type dimension, so a concrete selection
        // on it can never match.
        let spec = FilterSpec::new().dimension(DimensionKey::AssetType, "story");
        assert!(spec.apply(&sample()).is_empty());
    }

    #[test]
    fn apply_preserves_input_order() {
        let spec = FilterSpec::new().dimension(DimensionKey::Platform, "instagram");
        let out = spec.apply(&sample());
        assert_eq!(out[0].id, "p1");
        assert_eq!(out[1].id, "p3");
    }
}
