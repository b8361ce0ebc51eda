//! Resolve and merge throughput for a button-sized schema.
//!
//! Run with: cargo bench --package arkae_variants --bench merge

use arkae_variants::{merge_str, CompoundVariant, Selection, VariantSchema};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

const BUTTON_CLASSES: &str = "inline-flex items-center justify-center gap-2 rounded-lg font-medium \
    transition-all duration-base ease-inOut focus-visible:outline-none focus-visible:ring-2 \
    focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50 bg-primary-600 \
    text-white hover:bg-primary-700 focus-visible:ring-primary-500 data-[disabled]:bg-primary-300 \
    px-4 py-2 text-base w-full bg-error-600 px-6 hover:bg-error-700";

fn schema() -> VariantSchema {
    VariantSchema::builder("button")
        .base("inline-flex items-center justify-center gap-2 rounded-lg font-medium")
        .variant("variant", |g| {
            g.option("primary", "bg-primary-600 text-white hover:bg-primary-700")
                .option("danger", "bg-error-600 text-white hover:bg-error-700")
        })
        .variant("size", |g| {
            g.option("sm", "px-3 py-1.5 text-sm")
                .option("md", "px-4 py-2 text-base")
                .option("lg", "px-6 py-3 text-lg")
        })
        .variant("fullWidth", |g| g.when_true("w-full"))
        .compound(
            CompoundVariant::new()
                .when("variant", "danger")
                .when_any("size", ["md", "lg"])
                .classes("font-semibold"),
        )
        .default("variant", "primary")
        .default("size", "md")
        .build()
        .expect("benchmark schema is valid")
}

fn benchmark_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");
    group.throughput(Throughput::Elements(
        BUTTON_CLASSES.split_ascii_whitespace().count() as u64,
    ));
    group.bench_function("button_classes", |b| {
        b.iter(|| black_box(merge_str(black_box(BUTTON_CLASSES))))
    });
    group.finish();
}

fn benchmark_resolve(c: &mut Criterion) {
    let schema = schema();
    let selection = Selection::new()
        .with("variant", "danger")
        .with("size", "lg")
        .with("fullWidth", true);

    c.bench_function("resolve_button", |b| {
        b.iter(|| black_box(schema.resolve(black_box(&selection))))
    });

    c.bench_function("resolve_and_merge_button", |b| {
        b.iter(|| {
            let classes = schema.resolve(&selection).map(|c| c.to_string());
            black_box(classes.map(|c| merge_str(&format!("{c} px-2"))))
        })
    });
}

criterion_group!(benches, benchmark_merge, benchmark_resolve);
criterion_main!(benches);
