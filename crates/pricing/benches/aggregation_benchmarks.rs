use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use coordinate_catalog::{BrandName, Category, Price, Product};
use coordinate_pricing::{cheapest_brand_total, cheapest_brand_total_all, lowest_prices, price_range};

/// `brands` brands, each listing `per_category` products in every category.
fn synthetic_catalog(brands: usize, per_category: usize) -> Vec<Product> {
    let mut products = Vec::with_capacity(brands * per_category * Category::ALL.len());
    for b in 0..brands {
        let brand = BrandName::new(format!("brand-{b:05}")).unwrap();
        for (c, category) in Category::ALL.into_iter().enumerate() {
            for n in 0..per_category {
                // Deterministic spread with frequent ties.
                let amount = 1_000 + ((b * 31 + c * 17 + n * 7) % 500) as u64 * 10;
                products.push(Product::listed(brand.clone(), category, Price::new(amount).unwrap()));
            }
        }
    }
    products
}

fn bench_category_aggregator(c: &mut Criterion) {
    let mut group = c.benchmark_group("category_aggregator");

    for brands in [10usize, 100, 1_000] {
        let catalog = synthetic_catalog(brands, 2);
        group.throughput(Throughput::Elements(catalog.len() as u64));

        group.bench_with_input(BenchmarkId::new("lowest_prices", brands), &catalog, |b, catalog| {
            b.iter(|| lowest_prices(black_box(catalog)).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("price_range", brands), &catalog, |b, catalog| {
            b.iter(|| price_range(black_box(Category::Sneakers), black_box(catalog)).unwrap());
        });
    }

    group.finish();
}

fn bench_brand_total_aggregator(c: &mut Criterion) {
    let mut group = c.benchmark_group("brand_total_aggregator");

    for brands in [10usize, 100, 1_000] {
        let catalog = synthetic_catalog(brands, 2);
        group.throughput(Throughput::Elements(catalog.len() as u64));

        group.bench_with_input(BenchmarkId::new("all_categories", brands), &catalog, |b, catalog| {
            b.iter(|| cheapest_brand_total_all(black_box(catalog)).unwrap());
        });

        let subset = [Category::Top, Category::Outer, Category::Hat];
        group.bench_with_input(BenchmarkId::new("three_categories", brands), &catalog, |b, catalog| {
            b.iter(|| cheapest_brand_total(black_box(&subset), black_box(catalog)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_category_aggregator, bench_brand_total_aggregator);
criterion_main!(benches);
