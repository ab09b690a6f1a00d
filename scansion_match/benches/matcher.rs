// Matcher throughput benchmarks.
//
// Singability checks run per candidate phrase when filtering a corpus, so
// single-phrase latency matters. Covers the hit path, the early-reject
// path, and a parallel batch over the demo-sized list.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use scansion_dict::default_dictionary;
use scansion_match::{OverrideTable, check_all, is_singable};
use scansion_stress::default_templates;

const PHRASES: [&str; 8] = [
    "teenage mutant ninja turtles",
    "common wordplay indicator",
    "call yourself a people pleaser",
    "english is my second language",
    "I just ate the Wednesday whopper",
    "bold, autumnal aspen yellow",
    "poop too long and take my nuggets",
    "very good pronunciation",
];

fn bench_matcher(c: &mut Criterion) {
    let dictionary = default_dictionary();
    let overrides = OverrideTable::standard();
    let templates = default_templates();
    let tmnt = templates.get("tmnt").unwrap().pattern.clone();

    c.bench_function("is_singable_hit", |b| {
        b.iter(|| {
            is_singable(
                black_box("teenage mutant ninja turtles"),
                &tmnt,
                &dictionary,
                &overrides,
            )
        })
    });

    c.bench_function("is_singable_early_reject", |b| {
        b.iter(|| {
            is_singable(
                black_box("xylograph mutant ninja turtles"),
                &tmnt,
                &dictionary,
                &overrides,
            )
        })
    });

    c.bench_function("check_all_batch", |b| {
        b.iter(|| check_all(black_box(&PHRASES), &tmnt, &dictionary, &overrides))
    });
}

criterion_group!(benches, bench_matcher);
criterion_main!(benches);
