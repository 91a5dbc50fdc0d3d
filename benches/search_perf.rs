//! Performance benchmarks for the catalog search hot paths.
//!
//! Measures the operations that dominate query latency:
//! - Fuzzy matcher scoring across candidate pools of increasing size
//! - Index construction from raw catalog records
//! - End-to-end search over a built snapshot
//!
//! Run with: `cargo bench`
//! View reports: `open target/criterion/report/index.html`

use catalog_search_mcp::catalog::Module;
use catalog_search_mcp::search::{Matcher, SearchIndex, SubsequenceMatcher};
use catalog_search_mcp::types::ModuleId;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Builds a synthetic catalog with realistic id/team/application shapes.
fn synthetic_catalog(size: usize) -> Vec<Module> {
    (0..size)
        .map(|i| Module {
            module_id: ModuleId::new(format!("service-{i}-gateway")),
            name: format!("Service {i}"),
            description: format!("Synthetic module number {i}"),
            team: format!("team-{}", i % 40),
            application: format!("app-{}", i % 15),
            kind: "service".to_string(),
            complexity_score: (i % 10) as f32,
        })
        .collect()
}

fn bench_matcher(c: &mut Criterion) {
    let mut group = c.benchmark_group("matcher");

    for size in [100, 1_000, 10_000] {
        let candidates: Vec<String> = (0..size)
            .map(|i| format!("service-{i}-gateway"))
            .collect();
        let matcher = SubsequenceMatcher;

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &candidates,
            |b, candidates| {
                b.iter(|| matcher.matches(black_box("svgw"), black_box(candidates)));
            },
        );
    }

    group.finish();
}

fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");

    for size in [100, 1_000, 10_000] {
        let modules = synthetic_catalog(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &modules,
            |b, modules| {
                b.iter(|| SearchIndex::build(black_box(modules)));
            },
        );
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    let index = SearchIndex::build(&synthetic_catalog(10_000));

    for keyword in ["service", "team-7", ""] {
        let label = if keyword.is_empty() { "browse" } else { keyword };
        group.bench_with_input(BenchmarkId::from_parameter(label), &keyword, |b, keyword| {
            b.iter(|| index.search(black_box(keyword), black_box(10)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_matcher, bench_index_build, bench_search);
criterion_main!(benches);
