mod fixtures;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libgraphql_merge::MergeEngine;
use libgraphql_merge::PareEngine;
use libgraphql_merge::SchemaSource;

const SIZES: [usize; 3] = [10, 100, 500];

// ─── Group 1: Merging ─────────────────────────────────────

fn merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");
    let engine = MergeEngine::default();

    for type_count in SIZES {
        let target: SchemaSource = fixtures::object_schema(type_count, 10, "left").into();
        let disjoint: SchemaSource = fixtures::object_schema(type_count, 10, "right").into();
        let identical = target.clone();
        let extensions: SchemaSource =
            fixtures::extension_schema(type_count, 10, "ext").into();

        group.bench_with_input(
            BenchmarkId::new("disjoint_fields", type_count),
            &(&target, &disjoint),
            |b, (target, source)| b.iter(|| black_box(engine.merge(target, source))),
        );

        group.bench_with_input(
            BenchmarkId::new("all_fields_collide", type_count),
            &(&target, &identical),
            |b, (target, source)| b.iter(|| black_box(engine.merge(target, source))),
        );

        group.bench_with_input(
            BenchmarkId::new("extensions", type_count),
            &(&target, &extensions),
            |b, (target, source)| b.iter(|| black_box(engine.merge(target, source))),
        );
    }

    group.finish();
}

// ─── Group 2: Paring ──────────────────────────────────────

fn pare(c: &mut Criterion) {
    let mut group = c.benchmark_group("pare");
    let merge_engine = MergeEngine::default();
    let pare_engine = PareEngine::new();

    for type_count in SIZES {
        let left: SchemaSource = fixtures::object_schema(type_count, 10, "left").into();
        let right: SchemaSource = fixtures::object_schema(type_count, 10, "right").into();
        let Ok(merged) = merge_engine.merge(&left, &right) else {
            panic!("benchmark fixtures merge cleanly");
        };
        let merged: SchemaSource = merged.into();

        group.bench_with_input(
            BenchmarkId::new("undo_merge", type_count),
            &(&merged, &right),
            |b, (target, source)| b.iter(|| black_box(pare_engine.pare(target, source))),
        );

        group.bench_with_input(
            BenchmarkId::new("drop_everything", type_count),
            &(&left, &left),
            |b, (target, source)| b.iter(|| black_box(pare_engine.pare(target, source))),
        );
    }

    group.finish();
}

criterion_group!(benches, merge, pare);
criterion_main!(benches);
