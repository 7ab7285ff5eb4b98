//! Catalog Build Benchmarks
//!
//! Measures request validation and PDF rendering for the sample products,
//! with and without embedded images.
//!
//! Run with: `cargo bench --bench catalog_build`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use catalog_pdf_server::catalog::samples::sample_products;
use catalog_pdf_server::catalog::{parse_entry, BuilderOptions, CatalogBuilder, ProductCatalogEntry};
use catalog_pdf_server::images::{decode_for_embedding, ImageError};
use catalog_pdf_server::render::EmbeddedImage;

fn sample_entries() -> Vec<(String, Vec<u8>, ProductCatalogEntry)> {
    sample_products()
        .iter()
        .map(|product| {
            let body = serde_json::to_vec(product).expect("Failed to serialize sample");
            let entry = parse_entry(&body).expect("Sample failed validation");
            (entry.name.clone(), body, entry)
        })
        .collect()
}

/// Solid-color PNG standing in for a product photo
fn sample_image() -> EmbeddedImage {
    let mut png = Vec::new();
    image::RgbImage::from_pixel(400, 300, image::Rgb([180, 120, 60]))
        .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
        .expect("Failed to encode PNG");
    decode_for_embedding(&png).expect("Failed to decode PNG")
}

/// Benchmark JSON validation
fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    for (name, body, _) in sample_entries() {
        group.throughput(Throughput::Bytes(body.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse_entry", &name), &body, |b, body| {
            b.iter(|| black_box(parse_entry(black_box(body)).expect("Sample failed validation")))
        });
    }

    group.finish();
}

/// Benchmark rendering with every image missing
fn bench_build_placeholders(c: &mut Criterion) {
    let builder = CatalogBuilder::new(BuilderOptions::default());

    let mut group = c.benchmark_group("build_placeholders");
    group.measurement_time(Duration::from_secs(10));

    for (name, _, entry) in sample_entries() {
        group.bench_with_input(BenchmarkId::new("sample", &name), &entry, |b, entry| {
            b.iter(|| {
                let images: Vec<Result<EmbeddedImage, ImageError>> = entry
                    .images
                    .iter()
                    .map(|_| Err(ImageError::NotFound { tried: Vec::new() }))
                    .collect();
                black_box(builder.build(black_box(entry), &images).expect("Failed to build"))
            })
        });
    }

    group.finish();
}

/// Benchmark rendering with embedded images
fn bench_build_images(c: &mut Criterion) {
    let builder = CatalogBuilder::new(BuilderOptions::default());
    let image = sample_image();

    let mut group = c.benchmark_group("build_images");
    group.measurement_time(Duration::from_secs(10));

    for (name, _, entry) in sample_entries() {
        group.bench_with_input(BenchmarkId::new("sample", &name), &entry, |b, entry| {
            b.iter(|| {
                let images: Vec<Result<EmbeddedImage, ImageError>> =
                    entry.images.iter().map(|_| Ok(image.clone())).collect();
                black_box(builder.build(black_box(entry), &images).expect("Failed to build"))
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_validation,
    bench_build_placeholders,
    bench_build_images
);
criterion_main!(benches);
