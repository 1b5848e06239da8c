// benches/assemble.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use ldoce_scrape::extract_entries;

static PAGE: &str = include_str!("../tests/fixtures/sprint.html");

fn bench_assemble(c: &mut Criterion) {
    c.bench_function("extract_entries_full_page", |b| {
        b.iter(|| {
            let out = extract_entries(black_box(PAGE)).unwrap();
            black_box(out.entries.len())
        })
    });

    // parse cost alone, to keep an eye on the tree-walk share
    c.bench_function("extract_entries_no_roots", |b| {
        b.iter(|| {
            let out = extract_entries(black_box("<html><body><p>plain</p></body></html>")).unwrap();
            black_box(out.entries.len())
        })
    });
}

criterion_group!(benches, bench_assemble);
criterion_main!(benches);
