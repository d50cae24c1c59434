//! Criterion benchmarks for the expression library.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::seq::SliceRandom;
use rand::Rng;

use expression_library::catalog::Catalog;
use expression_library::clipboard::MemoryClipboard;
use expression_library::engine::ExpressionLibrary;
use expression_library::storage::MemoryStore;
use expression_library::types::{Category, Difficulty, EntryBuilder};

const WORDS: [&str; 12] = [
    "wiggle", "bounce", "ease", "loop", "random", "spring", "fade", "offset", "pulse", "orbit",
    "trail", "jitter",
];

/// Build a catalog of `count` synthetic entries.
fn make_catalog(count: usize) -> Catalog {
    let mut rng = rand::thread_rng();
    let difficulties = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    let entries = (0..count)
        .map(|i| {
            let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
            let mut builder = EntryBuilder::new(
                i.to_string(),
                format!("{} expression {}", WORDS.choose(&mut rng).unwrap(), i),
                category,
            )
            .description(format!(
                "Applies {} and {} to a property",
                WORDS.choose(&mut rng).unwrap(),
                WORDS.choose(&mut rng).unwrap()
            ))
            .code(format!("value + {i};"))
            .difficulty(difficulties[i % difficulties.len()]);
            for _ in 0..4 {
                builder = builder.tag(*WORDS.choose(&mut rng).unwrap());
            }
            builder.build()
        })
        .collect();

    Catalog::new(entries).unwrap()
}

fn make_library(count: usize) -> ExpressionLibrary<MemoryStore, MemoryClipboard> {
    let mut library =
        ExpressionLibrary::new(make_catalog(count), MemoryStore::new(), MemoryClipboard::new());
    for i in (0..count).step_by(7) {
        library.toggle_favorite(&i.to_string());
    }
    library
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    let mut library = make_library(10_000);
    group.bench_function("unfiltered_10k", |b| {
        b.iter(|| library.filtered_expressions().len())
    });

    library.set_search_query("Wiggle");
    group.bench_function("search_10k", |b| {
        b.iter(|| library.filtered_expressions().len())
    });

    library.set_selected_category(Category::Color);
    group.bench_function("search_category_10k", |b| {
        b.iter(|| library.filtered_expressions().len())
    });

    library.toggle_show_favorites();
    group.bench_function("search_category_favorites_10k", |b| {
        b.iter(|| library.filtered_expressions().len())
    });

    group.finish();
}

fn bench_copy(c: &mut Criterion) {
    let mut library = make_library(1_000);
    let entries = library.entries().to_vec();
    let mut rng = rand::thread_rng();

    c.bench_function("copy_expression", |b| {
        b.iter(|| {
            let entry = entries.choose(&mut rng).unwrap();
            library.copy_expression(entry)
        })
    });
}

criterion_group!(benches, bench_filter, bench_copy);
criterion_main!(benches);
