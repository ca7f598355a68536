//! Integration tests for the chunking engine.

use std::collections::{HashMap, HashSet};

use docrumb::model::{DocItem, Document, DocumentOrigin, TableData};
use docrumb::{chunk_document, ChunkKind, Chunker};

fn spec_like_document() -> Document {
    let mut doc = Document::with_origin(DocumentOrigin::new("manual.pdf", "application/pdf"));
    doc.add_item(DocItem::section_header("h0", "3 Intro", 1));
    doc.add_item(DocItem::paragraph("p0", "Intro body."));
    doc.add_item(DocItem::section_header("h1", "3.1 Scope", 1));
    doc.add_item(DocItem::section_header("h2", "3.1.1 Detail", 1));
    doc.add_item(DocItem::section_header("h3", "Shall", 1));
    doc.add_item(DocItem::paragraph("p1", "The system shall do things."));
    doc.add_item(DocItem::section_header("h4", "3.2 Next", 1));
    doc.add_item(DocItem::paragraph("p2", "Next section body."));
    doc
}

#[test]
fn breadcrumbs_follow_heading_hierarchy() {
    let doc = spec_like_document();
    let chunks: Vec<_> = chunk_document(&doc).collect();

    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0].breadcrumb.as_deref(), Some("3 Intro"));
    assert_eq!(
        chunks[1].breadcrumb.as_deref(),
        Some("3 Intro > 3.1 Scope > 3.1.1 Detail > Shall")
    );
    assert_eq!(chunks[2].breadcrumb.as_deref(), Some("3 Intro > 3.2 Next"));
}

#[test]
fn sibling_section_prunes_deeper_state() {
    let mut doc = Document::new();
    doc.add_item(DocItem::section_header("h0", "3 Intro", 1));
    doc.add_item(DocItem::section_header("h1", "3.2 Scope", 1));
    doc.add_item(DocItem::section_header("h2", "3.2.1 Foo", 1));
    doc.add_item(DocItem::section_header("h3", "3.3 Baz", 1));
    doc.add_item(DocItem::paragraph("p0", "After Baz."));

    let chunks: Vec<_> = chunk_document(&doc).collect();
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].breadcrumb.as_deref(), Some("3 Intro > 3.3 Baz"));
}

#[test]
fn chunks_have_nonempty_doc_items_and_disjoint_claims() {
    let mut doc = spec_like_document();
    let mut data = TableData::new(["Id", "A", "B"]);
    data.add_row(["r1", "x", "y"]);
    doc.add_item(DocItem::table("t0", data));
    doc.add_item(DocItem::unordered_list(
        "l0",
        vec![
            DocItem::paragraph("l0.0", "first"),
            DocItem::paragraph("l0.1", "second"),
        ],
    ));

    let chunks: Vec<_> = chunk_document(&doc).collect();
    assert!(!chunks.is_empty());

    let mut seen: HashSet<&str> = HashSet::new();
    for chunk in &chunks {
        assert!(!chunk.doc_items.is_empty());
        for id in &chunk.doc_items {
            assert!(seen.insert(id), "item {id} claimed by two chunks");
        }
    }
}

#[test]
fn table_triplets_address_cells_by_labels() {
    let mut data = TableData::new(["Id", "A", "B"]);
    data.add_row(["r1", "x", "y"]);

    let mut doc = Document::new();
    doc.add_item(DocItem::paragraph("c0", "Table 1: sample data").with_label("caption"));
    doc.add_item(DocItem::table("t0", data));

    let chunks: Vec<_> = chunk_document(&doc).collect();
    let table = chunks
        .iter()
        .find(|c| c.kind == ChunkKind::Table)
        .expect("table chunk");

    assert!(table.text.starts_with("Table 1: sample data\n\n"));
    assert!(table.text.contains("r1, A = x"));
    assert!(table.text.contains("r1, B = y"));
    assert_eq!(table.doc_items, vec!["t0"]);
}

#[test]
fn picture_in_map_yields_one_image_chunk() {
    let mut doc = Document::new();
    doc.add_item(DocItem::section_header("h0", "4 Diagrams", 1));
    doc.add_item(DocItem::paragraph("c0", "Fig 2: architecture"));
    doc.add_item(DocItem::picture("i0"));

    let chunks: Vec<_> = Chunker::new()
        .with_image_ref("i0", "images/i0.png")
        .chunk(&doc)
        .collect();

    let images: Vec<_> = chunks.iter().filter(|c| c.kind == ChunkKind::Image).collect();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].doc_items, vec!["i0"]);
    assert_eq!(images[0].text, "Fig 2: architecture");
    assert_eq!(images[0].image_path.as_deref(), Some("images/i0.png"));
    assert_eq!(images[0].breadcrumb.as_deref(), Some("4 Diagrams"));
}

#[test]
fn picture_absent_from_map_yields_no_chunk() {
    let mut doc = Document::new();
    doc.add_item(DocItem::picture("i0"));

    let chunks: Vec<_> = chunk_document(&doc).collect();
    assert!(chunks.is_empty());
}

#[test]
fn rerun_is_deterministic() {
    let doc = spec_like_document();
    let first: Vec<String> = chunk_document(&doc)
        .map(|c| format!("{:?}|{}|{:?}", c.kind, c.text, c.doc_items))
        .collect();
    let second: Vec<String> = chunk_document(&doc)
        .map(|c| format!("{:?}|{}|{:?}", c.kind, c.text, c.doc_items))
        .collect();
    assert_eq!(first, second);
}

#[test]
fn early_termination_produces_prefix() {
    let doc = spec_like_document();
    let all: Vec<_> = chunk_document(&doc).collect();
    let prefix: Vec<_> = chunk_document(&doc).take(2).collect();

    assert_eq!(prefix.len(), 2);
    assert_eq!(prefix[0].text, all[0].text);
    assert_eq!(prefix[1].text, all[1].text);
}

#[test]
fn origin_is_passed_through() {
    let doc = spec_like_document();
    let chunks: Vec<_> = chunk_document(&doc).collect();
    let origin = chunks[0].origin.as_ref().expect("origin");
    assert_eq!(origin.filename.as_deref(), Some("manual.pdf"));
}

#[test]
fn lists_become_one_text_chunk() {
    let mut doc = Document::new();
    doc.add_item(DocItem::section_header("h0", "2 Steps", 1));
    doc.add_item(DocItem::ordered_list(
        "l0",
        vec![
            DocItem::paragraph("l0.0", "prepare"),
            DocItem::paragraph("l0.1", "execute"),
            DocItem::paragraph("l0.2", "verify"),
        ],
    ));

    let chunks: Vec<_> = chunk_document(&doc).collect();
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].kind, ChunkKind::Text);
    assert_eq!(chunks[0].text, "1. prepare\n2. execute\n3. verify");
    assert_eq!(chunks[0].doc_items, vec!["l0.0", "l0.1", "l0.2"]);
}

#[test]
fn image_map_only_consults_picture_items() {
    let mut doc = Document::new();
    doc.add_item(DocItem::paragraph("p0", "text"));

    // A map entry for a non-picture id changes nothing.
    let refs = HashMap::from([("p0".to_string(), "images/p0.png".to_string())]);
    let chunks: Vec<_> = Chunker::new().with_image_refs(refs).chunk(&doc).collect();

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].kind, ChunkKind::Text);
    assert!(chunks[0].image_path.is_none());
}

#[test]
fn empty_paragraphs_yield_no_chunks() {
    let mut doc = Document::new();
    doc.add_item(DocItem::paragraph("p0", "   "));
    doc.add_item(DocItem::paragraph("p1", ""));

    let chunks: Vec<_> = chunk_document(&doc).collect();
    assert!(chunks.is_empty());
}
