//! Chunking throughput benchmark over a synthetic manual-style document.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use docrumb::model::{DocItem, Document, TableData};
use docrumb::chunk_document;

fn synthetic_document(sections: usize) -> Document {
    let mut doc = Document::new();
    doc.add_item(DocItem::title("t0", "Benchmark Manual"));

    for s in 0..sections {
        doc.add_item(DocItem::section_header(
            format!("h{s}"),
            format!("{} Section heading", s + 1),
            1,
        ));
        for p in 0..4 {
            doc.add_item(DocItem::paragraph(
                format!("p{s}.{p}"),
                "A body paragraph with enough words to resemble real prose content.",
            ));
        }

        let mut data = TableData::new(["Id", "A", "B", "C"]);
        for r in 0..5 {
            data.add_row([
                format!("r{r}"),
                "alpha".to_string(),
                "beta".to_string(),
                "gamma".to_string(),
            ]);
        }
        doc.add_item(DocItem::paragraph(
            format!("c{s}"),
            format!("Table {}: synthetic data", s + 1),
        ));
        doc.add_item(DocItem::table(format!("tbl{s}"), data));
    }

    doc
}

fn bench_chunking(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_document");
    for sections in [10usize, 100, 500] {
        let doc = synthetic_document(sections);
        group.bench_with_input(BenchmarkId::from_parameter(sections), &doc, |b, doc| {
            b.iter(|| {
                let chunks: Vec<_> = chunk_document(black_box(doc)).collect();
                black_box(chunks)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_chunking);
criterion_main!(benches);
