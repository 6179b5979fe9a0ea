//! Property tests for the filter-sort pipeline and the folder hierarchy.

#[path = "generators.rs"]
mod generators;

use dmphq_core::filter::FilterSpec;
use dmphq_core::hierarchy::{
    CatalogEntry, DimensionCatalog, DimensionDescriptor, NavPath, build,
};
use dmphq_core::model::{AssetCategory, AssetType, SocialPost};
use dmphq_core::record::{DimensionKey, Record};
use dmphq_core::sort::{SortDirection, SortKey, SortSpec, sort};
use proptest::prelude::*;

use generators::{ENTITIES, arb_assets, arb_posts};

fn ids(posts: &[SocialPost]) -> Vec<String> {
    posts.iter().map(|p| p.id.clone()).collect()
}

fn descriptors() -> Vec<DimensionDescriptor> {
    vec![
        DimensionDescriptor::open(DimensionKey::Entity),
        DimensionDescriptor::open(DimensionKey::Category),
        DimensionDescriptor::gated(
            DimensionKey::AssetType,
            DimensionKey::Category,
            AssetCategory::SocialTemplate.as_str(),
        ),
    ]
}

fn catalog() -> DimensionCatalog {
    let mut catalog = DimensionCatalog::new();
    catalog.insert(
        DimensionKey::Entity,
        ENTITIES
            .iter()
            .map(|e| CatalogEntry::new(*e, *e))
            .collect(),
    );
    catalog.insert(
        DimensionKey::Category,
        AssetCategory::ALL
            .iter()
            .map(|c| CatalogEntry::new(c.as_str(), c.label()))
            .collect(),
    );
    catalog.insert(
        DimensionKey::AssetType,
        AssetType::ALL
            .iter()
            .map(|t| CatalogEntry::new(t.as_str(), t.label()))
            .collect(),
    );
    catalog
}

/// A random navigation state built the way the browser builds one: by
/// entering folders in traversal order, stopping at a random depth.
fn arb_path() -> impl Strategy<Value = NavPath> {
    (
        proptest::option::of(proptest::sample::select(ENTITIES.to_vec())),
        proptest::option::of(proptest::sample::select(AssetCategory::ALL.to_vec())),
        proptest::option::of(proptest::sample::select(AssetType::ALL.to_vec())),
    )
        .prop_map(|(entity, category, asset_type)| {
            let mut path = NavPath::new();
            if let Some(entity) = entity {
                path.enter(DimensionKey::Entity, entity);
                if let Some(category) = category {
                    path.enter(DimensionKey::Category, category.as_str());
                    if let Some(ty) = asset_type {
                        path.enter(DimensionKey::AssetType, ty.as_str());
                    }
                }
            }
            path
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Adding a predicate can only narrow the result, never widen it.
    #[test]
    fn adding_a_filter_narrows_the_result(posts in arb_posts(), entity in proptest::sample::select(ENTITIES.to_vec())) {
        let base = FilterSpec::new().dimension(DimensionKey::Platform, "instagram");
        let narrowed = base.clone().dimension(DimensionKey::Entity, entity);

        let base_ids = ids(&base.apply(&posts));
        let narrowed_ids = ids(&narrowed.apply(&posts));

        prop_assert!(narrowed_ids.iter().all(|id| base_ids.contains(id)));
        prop_assert!(narrowed_ids.len() <= base_ids.len());
    }

    /// Filtering keeps the survivors in their input order.
    #[test]
    fn filter_preserves_input_order(posts in arb_posts()) {
        let spec = FilterSpec::new().dimension(DimensionKey::Status, "published");
        let out = ids(&spec.apply(&posts));

        let expected: Vec<String> = posts
            .iter()
            .filter(|p| spec.matches(*p))
            .map(|p| p.id.clone())
            .collect();
        prop_assert_eq!(out, expected);
    }

    /// Search is case-insensitive over every searchable field.
    #[test]
    fn search_ignores_case(posts in arb_posts(), term in "[a-z]{1,5}") {
        let lower = FilterSpec::new().search(term.clone());
        let upper = FilterSpec::new().search(term.to_ascii_uppercase());
        prop_assert_eq!(ids(&lower.apply(&posts)), ids(&upper.apply(&posts)));
    }

    /// The stable sort is idempotent for both keys and directions.
    #[test]
    fn sorting_twice_changes_nothing(posts in arb_posts()) {
        for spec in [
            SortSpec::new(SortKey::Date, SortDirection::Desc),
            SortSpec::new(SortKey::Date, SortDirection::Asc),
            SortSpec::new(SortKey::Engagement, SortDirection::Desc),
            SortSpec::new(SortKey::Engagement, SortDirection::Asc),
        ] {
            let once = sort(posts.clone(), spec);
            let twice = sort(once.clone(), spec);
            prop_assert_eq!(once, twice);
        }
    }

    /// With all keys distinct, ascending is exactly descending reversed.
    #[test]
    fn directions_mirror_each_other_on_distinct_keys(posts in arb_posts()) {
        let mut posts = posts;
        for (i, post) in posts.iter_mut().enumerate() {
            post.scheduled_at_us = None;
            post.published_at_us = None;
            post.created_at_us = i as i64;
        }

        let desc = sort(posts.clone(), SortSpec::new(SortKey::Date, SortDirection::Desc));
        let mut asc = sort(posts, SortSpec::new(SortKey::Date, SortDirection::Asc));
        asc.reverse();
        prop_assert_eq!(desc, asc);
    }

    /// Sorting permutes the records, never drops or invents one.
    #[test]
    fn sort_is_a_permutation(posts in arb_posts()) {
        let sorted = sort(posts.clone(), SortSpec::default());
        let mut before = ids(&posts);
        let mut after = ids(&sorted);
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    /// A listing shows folders or leaves, never both.
    #[test]
    fn folders_and_leaves_are_exclusive(assets in arb_assets(), path in arb_path()) {
        let listing = build(&assets, &path, &descriptors(), &catalog());
        prop_assert!(listing.folders.is_empty() || listing.leaves.is_empty());
    }

    /// Every folder count matches the records that would be visible
    /// inside it, and the root counts sum to the full collection.
    #[test]
    fn folder_counts_are_accurate(assets in arb_assets(), path in arb_path()) {
        let listing = build(&assets, &path, &descriptors(), &catalog());

        for folder in &listing.folders {
            let expected = assets
                .iter()
                .filter(|a| {
                    path.matches(*a) && a.dimension(folder.key) == Some(folder.value.as_str())
                })
                .count();
            prop_assert_eq!(folder.count, expected, "folder {}", folder.id);
        }

        if path.depth() == 0 {
            let total: usize = listing.folders.iter().map(|f| f.count).sum();
            prop_assert_eq!(total, assets.len());
        }
    }

    /// Entering any listed folder and going back up restores the exact
    /// listing the browser started from.
    #[test]
    fn enter_then_up_restores_the_listing(assets in arb_assets(), path in arb_path()) {
        let mut path = path;
        let before = build(&assets, &path, &descriptors(), &catalog());

        for folder in &before.folders {
            path.enter(folder.key, folder.value.clone());
            path.up();
            let after = build(&assets, &path, &descriptors(), &catalog());
            prop_assert_eq!(&before, &after);
        }
    }

    /// Identical inputs always derive the identical listing.
    #[test]
    fn build_is_deterministic(assets in arb_assets(), path in arb_path()) {
        let first = build(&assets, &path, &descriptors(), &catalog());
        let second = build(&assets, &path, &descriptors(), &catalog());
        prop_assert_eq!(first, second);
    }
}
