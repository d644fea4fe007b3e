use criterion::{criterion_group, criterion_main, Criterion};
use std::fmt::Write;
use std::hint::black_box;
use wilayah_core::{build_hierarchy, DEFAULT_SEARCH_LIMIT};

/// Synthetic dataset shaped like the national one, children before parents.
fn synthetic_dataset() -> String {
    let mut out = String::new();
    for p in 11..=40 {
        for r in 1..=10 {
            for d in 1..=10 {
                for v in 1001..=1010 {
                    let _ = writeln!(out, "{p}.{r:02}.{d:02}.{v},Desa {p} {r} {d} {v}");
                }
                let _ = writeln!(out, "{p}.{r:02}.{d:02},Kecamatan {p} {r} {d}");
            }
            let _ = writeln!(out, "{p}.{r:02},Kabupaten {p} {r}");
        }
        let _ = writeln!(out, "{p},Provinsi {p}");
    }
    out
}

fn bench_build(c: &mut Criterion) {
    let text = synthetic_dataset();
    c.bench_function("build_hierarchy (30k villages)", |b| {
        b.iter(|| build_hierarchy(black_box(&text)))
    });
}

fn bench_lookup(c: &mut Criterion) {
    let h = build_hierarchy(&synthetic_dataset());
    c.bench_function("region_description", |b| {
        b.iter(|| h.region_description(black_box("25.05.07.1004")))
    });
    c.bench_function("search_villages", |b| {
        b.iter(|| h.search_villages(black_box("25 5"), DEFAULT_SEARCH_LIMIT))
    });
}

criterion_group!(benches, bench_build, bench_lookup);
criterion_main!(benches);
