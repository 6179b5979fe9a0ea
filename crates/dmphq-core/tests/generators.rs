//! Proptest strategies for the record types.

use dmphq_core::model::{
    Asset, AssetCategory, AssetType, Metrics, Platform, PostStatus, SocialPost,
};
use proptest::prelude::*;

pub const ENTITIES: [&str; 3] = ["acme", "globex", "initech"];

pub fn arb_platform() -> impl Strategy<Value = Platform> {
    proptest::sample::select(Platform::ALL.to_vec())
}

pub fn arb_post_status() -> impl Strategy<Value = PostStatus> {
    proptest::sample::select(PostStatus::ALL.to_vec())
}

pub fn arb_category() -> impl Strategy<Value = AssetCategory> {
    proptest::sample::select(AssetCategory::ALL.to_vec())
}

pub fn arb_asset_type() -> impl Strategy<Value = Option<AssetType>> {
    proptest::option::of(proptest::sample::select(AssetType::ALL.to_vec()))
}

pub fn arb_entity() -> impl Strategy<Value = String> {
    proptest::sample::select(ENTITIES.to_vec()).prop_map(str::to_string)
}

pub fn arb_metrics() -> impl Strategy<Value = Option<Metrics>> {
    proptest::option::of((0u64..100, 0u64..100, 0u64..100, 0u64..100).prop_map(
        |(likes, comments, shares, saves)| Metrics {
            likes,
            comments,
            shares,
            saves,
        },
    ))
}

prop_compose! {
    pub fn arb_post()(
        platform in arb_platform(),
        status in arb_post_status(),
        entity in arb_entity(),
        content in "[a-z ]{0,20}",
        created_at_us in 0i64..1_000_000_000,
        scheduled_at_us in proptest::option::of(0i64..1_000_000_000),
        metrics in arb_metrics(),
    ) -> SocialPost {
        SocialPost {
            platform,
            status,
            entity,
            content,
            created_at_us,
            scheduled_at_us,
            metrics,
            ..Default::default()
        }
    }
}

/// A post list with unique sequential ids.
pub fn arb_posts() -> impl Strategy<Value = Vec<SocialPost>> {
    proptest::collection::vec(arb_post(), 0..24).prop_map(|mut posts| {
        for (i, post) in posts.iter_mut().enumerate() {
            post.id = format!("p{i}");
        }
        posts
    })
}

prop_compose! {
    pub fn arb_asset()(
        entity in arb_entity(),
        category in arb_category(),
        asset_type in arb_asset_type(),
        name in "[a-z]{0,12}",
        created_at_us in 0i64..1_000_000_000,
    ) -> Asset {
        Asset {
            entity,
            category,
            asset_type,
            name,
            created_at_us,
            ..Default::default()
        }
    }
}

/// An asset list with unique sequential ids.
pub fn arb_assets() -> impl Strategy<Value = Vec<Asset>> {
    proptest::collection::vec(arb_asset(), 0..24).prop_map(|mut assets| {
        for (i, asset) in assets.iter_mut().enumerate() {
            asset.id = format!("a{i}");
        }
        assets
    })
}
