//! Benchmarks for unulyz parsing and rendering performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic sheets of varying paragraph counts.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates a synthetic sheet with the given number of paragraphs.
fn create_test_sheet(paragraph_count: usize) -> String {
    let mut xml = String::new();

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push_str("\n<sheet version=\"5\">\n");
    xml.push_str(r#"<markup version="1" identifier="markdownl">"#);
    xml.push_str(r###"<tag definition="heading2" pattern="##"/>"###);
    xml.push_str(r#"<tag definition="strong" startPattern="**" endPattern="**"/>"#);
    xml.push_str(r#"<tag definition="emph" startPattern="_" endPattern="_"/>"#);
    xml.push_str("</markup>\n<string xml:space=\"preserve\">\n");

    for i in 0..paragraph_count {
        if i % 10 == 0 {
            xml.push_str(&format!(
                "<p><tags><tag kind=\"heading2\">## </tag></tags>Section {}</p>\n",
                i / 10 + 1
            ));
        } else {
            xml.push_str(&format!(
                "<p>Paragraph {} has <element kind=\"strong\">bold</element> and \
                 <element kind=\"emph\">caf&#233;</element> text.</p>\n",
                i
            ));
        }
    }

    xml.push_str("</string>\n");
    xml.push_str(r#"<attachment type="keywords">bench, synthetic</attachment>"#);
    xml.push_str("\n</sheet>\n");
    xml
}

/// Benchmark format detection.
fn bench_format_detection(c: &mut Criterion) {
    let xml = create_test_sheet(1);
    let non_sheet = b"Not a sheet at all, just random text content";

    c.bench_function("detect_sheet_xml", |b| {
        b.iter(|| unulyz::detect_format_from_bytes(black_box(xml.as_bytes())).unwrap());
    });

    c.bench_function("detect_non_sheet", |b| {
        b.iter(|| unulyz::detect_format_from_bytes(black_box(non_sheet)).is_err());
    });
}

/// Benchmark sheet parsing at various sizes.
fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("sheet_parsing");

    for paragraph_count in [10, 100, 1000].iter() {
        let xml = create_test_sheet(*paragraph_count);

        group.bench_function(format!("{}_paragraphs", paragraph_count), |b| {
            b.iter(|| unulyz::parse_str(black_box(&xml)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark rendering, sequential against parallel.
fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("sheet_rendering");
    let sheet = unulyz::parse_str(&create_test_sheet(1000)).unwrap();

    let sequential = unulyz::RenderOptions::new();
    group.bench_function("sequential", |b| {
        b.iter(|| unulyz::render::render_sheet(black_box(&sheet), &sequential).unwrap());
    });

    let parallel = unulyz::RenderOptions::new().with_parallel(true);
    group.bench_function("parallel", |b| {
        b.iter(|| unulyz::render::render_sheet(black_box(&sheet), &parallel).unwrap());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_format_detection,
    bench_parsing,
    bench_rendering,
);
criterion_main!(benches);
