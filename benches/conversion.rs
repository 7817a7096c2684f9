//! Benchmarks for the notebook conversion pipeline.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use highlight_hop::import::merge_markers;
use highlight_hop::{Format, format_notebook, parse_notebook, parse_notebook_bytes};

const HIGHLIGHTS_HTML: &str = include_str!("../tests/fixtures/highlights.html");
const PAGES_HTML: &str = include_str!("../tests/fixtures/location-with-pages.html");

/// A large export built by repeating the fixture's marker blocks.
fn large_export(blocks: usize) -> String {
    let mut body = String::new();
    for i in 0..blocks {
        body.push_str(&format!(
            "<div class=\"sectionHeading\">CHAPTER {i}.</div>\n\
             <div class=\"noteHeading\">Highlight(<span class=\"highlight_yellow\">yellow</span>) - Chapter {i} &gt; Page {} · Location {}</div>\n\
             <div class=\"noteText\">Quote number {i}, with \"quotes\" &amp; commas.</div>\n\
             <div class=\"noteHeading\">Note - Chapter {i} &gt; Page {} · Location {}</div>\n\
             <div class=\"noteText\">Note number {i}.</div>\n",
            i + 1,
            i * 10 + 1,
            i + 1,
            i * 10 + 1,
        ));
    }
    format!(
        "<html><head><meta charset=\"UTF-8\"></head><body><div class=\"bodyContainer\">\n\
         <div class=\"bookTitle\">Large Export</div>\n{body}</div></body></html>"
    )
}

// ============================================================================
// Parsing Benchmarks
// ============================================================================

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_highlights", |b| {
        b.iter(|| parse_notebook(HIGHLIGHTS_HTML).unwrap());
    });

    c.bench_function("parse_pages_bytes", |b| {
        b.iter(|| parse_notebook_bytes(PAGES_HTML.as_bytes()).unwrap());
    });

    let large = large_export(1000);
    c.bench_function("parse_large_export", |b| {
        b.iter(|| parse_notebook(&large).unwrap());
    });
}

fn bench_merge(c: &mut Criterion) {
    let notebook = parse_notebook(&large_export(1000)).unwrap();
    c.bench_function("merge_markers", |b| {
        b.iter(|| merge_markers(notebook.markers.clone()));
    });
}

// ============================================================================
// Format Benchmarks
// ============================================================================

fn bench_format(c: &mut Criterion) {
    let notebook = parse_notebook(&large_export(1000)).unwrap();

    for format in Format::ALL {
        c.bench_function(&format!("format_{}", format.tag()), |b| {
            b.iter(|| format_notebook(&notebook, format).unwrap());
        });
    }
}

criterion_group!(benches, bench_parse, bench_merge, bench_format);
criterion_main!(benches);
