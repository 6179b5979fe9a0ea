//! Throughput benchmarks for the two pure derivations.
//!
//! Run with:
//! ```sh
//! cargo bench --bench pipeline
//! ```

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use dmphq_core::filter::FilterSpec;
use dmphq_core::hierarchy::{CatalogEntry, DimensionCatalog, DimensionDescriptor, NavPath, build};
use dmphq_core::model::{
    Asset, AssetCategory, AssetType, Metrics, Platform, PostStatus, SocialPost,
};
use dmphq_core::record::DimensionKey;
use dmphq_core::sort::{SortDirection, SortKey, SortSpec, apply};

const SIZES: [usize; 3] = [1_000, 10_000, 50_000];
const ENTITIES: [&str; 4] = ["acme", "globex", "initech", "umbrella"];

fn synth_posts(count: usize) -> Vec<SocialPost> {
    (0..count)
        .map(|i| SocialPost {
            id: format!("p{i}"),
            content: format!("post {i} spring launch"),
            platform: Platform::ALL[i % Platform::ALL.len()],
            status: PostStatus::ALL[i % PostStatus::ALL.len()],
            entity: ENTITIES[i % ENTITIES.len()].to_string(),
            created_at_us: (i as i64) * 60_000_000,
            metrics: Some(Metrics {
                likes: (i as u64 * 7) % 500,
                comments: (i as u64 * 3) % 80,
                shares: (i as u64) % 40,
                saves: (i as u64 * 11) % 60,
            }),
            ..Default::default()
        })
        .collect()
}

fn synth_assets(count: usize) -> Vec<Asset> {
    (0..count)
        .map(|i| Asset {
            id: format!("a{i}"),
            name: format!("asset {i}"),
            entity: ENTITIES[i % ENTITIES.len()].to_string(),
            category: AssetCategory::ALL[i % AssetCategory::ALL.len()],
            asset_type: if i % 3 == 0 {
                Some(AssetType::ALL[i % AssetType::ALL.len()])
            } else {
                None
            },
            created_at_us: (i as i64) * 60_000_000,
            ..Default::default()
        })
        .collect()
}

fn browse_setup() -> (Vec<DimensionDescriptor>, DimensionCatalog) {
    let descriptors = vec![
        DimensionDescriptor::open(DimensionKey::Entity),
        DimensionDescriptor::open(DimensionKey::Category),
        DimensionDescriptor::gated(
            DimensionKey::AssetType,
            DimensionKey::Category,
            AssetCategory::SocialTemplate.as_str(),
        ),
    ];

    let mut catalog = DimensionCatalog::new();
    catalog.insert(
        DimensionKey::Entity,
        ENTITIES.iter().map(|e| CatalogEntry::new(*e, *e)).collect(),
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

    (descriptors, catalog)
}

fn bench_filter_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline.filter_sort");

    for size in SIZES {
        let posts = synth_posts(size);
        let filter = FilterSpec::new()
            .dimension(DimensionKey::Platform, "instagram")
            .search("launch");
        let spec = SortSpec::new(SortKey::Engagement, SortDirection::Desc);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &posts, |b, posts| {
            b.iter(|| black_box(apply(posts, &filter, spec)).len());
        });
    }

    group.finish();
}

fn bench_hierarchy_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline.hierarchy_build");
    let (descriptors, catalog) = browse_setup();

    let mut path = NavPath::new();
    path.enter(DimensionKey::Entity, "acme");

    for size in SIZES {
        let assets = synth_assets(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &assets, |b, assets| {
            b.iter(|| black_box(build(assets, &path, &descriptors, &catalog)).folders.len());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter_sort, bench_hierarchy_build);
criterion_main!(benches);
