// benches/parse_event.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use meet_scrape::specs;

fn load_sample(name: &str) -> String {
    let path = format!("tests/fixtures/{}", name);
    std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("read {}", path))
}

fn bench_parsers(c: &mut Criterion) {
    let individual = load_sample("individual_page.txt");
    let relay = load_sample("relay_page.txt");
    let diving = load_sample("diving_page.txt");

    c.bench_function("individual_page", |b| {
        b.iter(|| {
            let parsed = specs::parse_event_page(black_box(&individual));
            black_box(parsed.records.len())
        })
    });

    c.bench_function("relay_page", |b| {
        b.iter(|| {
            let parsed = specs::parse_event_page(black_box(&relay));
            black_box(parsed.records.len())
        })
    });

    c.bench_function("diving_page", |b| {
        b.iter(|| {
            let parsed = specs::parse_event_page(black_box(&diving));
            black_box(parsed.records.len())
        })
    });
}

criterion_group!(benches, bench_parsers);
criterion_main!(benches);
