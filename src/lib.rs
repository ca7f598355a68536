//! # docrumb
//!
//! Hierarchical breadcrumb chunking for structured documents.
//!
//! docrumb takes a previously-parsed, structurally-tagged document (the
//! output of an external PDF/layout pipeline) and turns it into a sequence
//! of retrieval-ready chunks. Each chunk carries the full heading breadcrumb
//! active at its position, a content-type classification (text, table,
//! image), and the ids of every source item it consumed.
//!
//! ## Quick Start
//!
//! ```
//! use docrumb::model::{DocItem, Document};
//! use docrumb::chunk_document;
//!
//! let mut doc = Document::new();
//! doc.add_item(DocItem::section_header("h0", "3 Introduction", 1));
//! doc.add_item(DocItem::paragraph("p0", "This system chunks documents."));
//!
//! for chunk in chunk_document(&doc) {
//!     println!("{:?} | {}", chunk.breadcrumb, chunk.text);
//! }
//! ```
//!
//! ## Guarantees
//!
//! - **Single pass, lazy**: the document sequence is consumed exactly once,
//!   in reading order; consumers may stop early at no cost.
//! - **At-most-once claim**: every source item id appears in the `doc_items`
//!   of at most one chunk.
//! - **Breadcrumbs look backward only**: a chunk's breadcrumb reflects
//!   exactly the headings seen strictly before it.

pub mod chunker;
pub mod error;
pub mod mapper;
pub mod model;

// Re-export commonly used types
pub use chunker::{
    caption_for, context_for, serialize_table, Chunk, ChunkKind, ChunkOptions, ChunkStream,
    HeadingTracker,
};
pub use error::{Error, Result};
pub use mapper::{ChunkMapper, ChunkRecord};
pub use model::{DocItem, Document, DocumentOrigin, ItemBody, Provenance, TableCell, TableData};

use std::collections::HashMap;
use std::path::Path;

/// Chunk a document with default options.
///
/// Returns a lazy stream; collect it or iterate as far as needed.
pub fn chunk_document(doc: &Document) -> ChunkStream<'_> {
    ChunkStream::new(doc)
}

/// Load a document from its JSON serialization on disk.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    let json = std::fs::read_to_string(path)?;
    Document::from_json(&json)
}

/// Load a document from disk and chunk it with default options.
pub fn chunk_file<P: AsRef<Path>>(path: P) -> Result<Vec<Chunk>> {
    let doc = load_document(path)?;
    Ok(chunk_document(&doc).collect())
}

/// Builder for configuring and running the chunking engine.
///
/// # Example
///
/// ```
/// use docrumb::{Chunker, Document, DocItem};
///
/// let mut doc = Document::new();
/// doc.add_item(DocItem::picture("i0"));
///
/// let chunks: Vec<_> = Chunker::new()
///     .with_image_ref("i0", "images/i0.png")
///     .with_caption_distance(3)
///     .chunk(&doc)
///     .collect();
/// ```
#[derive(Debug, Clone, Default)]
pub struct Chunker {
    options: ChunkOptions,
    image_refs: HashMap<String, String>,
}

impl Chunker {
    /// Create a chunker with default options.
    pub fn new() -> Self {
        Self {
            options: ChunkOptions::default(),
            image_refs: HashMap::new(),
        }
    }

    /// Set the picture id -> extracted image path map.
    pub fn with_image_refs(mut self, refs: HashMap<String, String>) -> Self {
        self.image_refs = refs;
        self
    }

    /// Register one extracted image path.
    pub fn with_image_ref(mut self, id: impl Into<String>, path: impl Into<String>) -> Self {
        self.image_refs.insert(id.into(), path.into());
        self
    }

    /// Set the caption search window.
    pub fn with_caption_distance(mut self, distance: usize) -> Self {
        self.options = self.options.with_caption_distance(distance);
        self
    }

    /// Keep page furniture in the output.
    pub fn keep_furniture(mut self) -> Self {
        self.options = self.options.keep_furniture();
        self
    }

    /// Chunk a document, yielding a lazy stream.
    pub fn chunk<'a>(&self, doc: &'a Document) -> ChunkStream<'a> {
        ChunkStream::with_options(doc, self.options.clone(), self.image_refs.clone())
    }

    /// Chunk a document and collect all chunks.
    pub fn chunk_to_vec(&self, doc: &Document) -> Vec<Chunk> {
        self.chunk(doc).collect()
    }
}
