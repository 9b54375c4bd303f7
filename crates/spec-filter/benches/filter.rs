//! Benchmarks for specification filtering
//!
//! Run with: cargo bench --package spec-filter

use catalog::{Catalog, Color, Product, Size};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spec_filter::specs::{all_of, color_is, name_is, size_is};
use spec_filter::{filter, Specification, SpecificationExt};

fn build_catalog(count: usize) -> Catalog {
    let colors = [Color::Red, Color::Green, Color::Blue];
    let sizes = [Size::Small, Size::Medium, Size::Large];

    let products = (0..count)
        .map(|i| {
            Product::new(
                format!("product-{}", i),
                colors[i % colors.len()],
                sizes[(i / colors.len()) % sizes.len()],
            )
        })
        .collect::<Vec<_>>();
    Catalog::from(products)
}

fn bench_single_attribute(c: &mut Criterion) {
    let catalog = build_catalog(10_000);
    let spec = color_is(Color::Blue);

    c.bench_function("filter_color_10k", |b| {
        b.iter(|| filter(black_box(catalog.products()), &spec).count())
    });
}

fn bench_static_conjunction(c: &mut Criterion) {
    let catalog = build_catalog(10_000);
    let spec = color_is(Color::Green)
        .and(size_is(Size::Large))
        .and(name_is("product-9999"));

    c.bench_function("filter_and_static_10k", |b| {
        b.iter(|| filter(black_box(catalog.products()), &spec).count())
    });
}

fn bench_boxed_conjunction(c: &mut Criterion) {
    let catalog = build_catalog(10_000);
    let spec = all_of(vec![
        Box::new(color_is(Color::Green)) as Box<dyn Specification<Product>>,
        Box::new(size_is(Size::Large)),
        Box::new(name_is("product-9999")),
    ]);

    c.bench_function("filter_and_boxed_10k", |b| {
        b.iter(|| filter(black_box(catalog.products()), &spec).count())
    });
}

criterion_group!(
    benches,
    bench_single_attribute,
    bench_static_conjunction,
    bench_boxed_conjunction
);
criterion_main!(benches);
