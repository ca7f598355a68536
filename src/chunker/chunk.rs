//! Chunk output records.

use crate::model::{DocumentOrigin, Provenance};
use serde::{Deserialize, Serialize};

/// Content classification of a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkKind {
    /// Plain text content (paragraphs, lists, inline groups)
    Text,
    /// A serialized table
    Table,
    /// An externally extracted image
    Image,
}

impl ChunkKind {
    /// Stable lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChunkKind::Text => "text",
            ChunkKind::Table => "table",
            ChunkKind::Image => "image",
        }
    }
}

/// One retrieval-ready unit of document content.
///
/// Chunks are immutable once yielded. `doc_items` lists the ids of every
/// source item that contributed to this chunk; across a whole traversal
/// each id appears in at most one chunk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    /// Chunk text (empty only for uncaptioned image chunks)
    pub text: String,

    /// Content classification
    pub kind: ChunkKind,

    /// Ids of the contributing source items, in reading order (non-empty)
    pub doc_items: Vec<String>,

    /// Heading breadcrumb active when this chunk was emitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breadcrumb: Option<String>,

    /// Relative output path of the extracted image, for image chunks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,

    /// Provenance of the chunk's defining item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prov: Option<Provenance>,

    /// Origin of the source document, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<DocumentOrigin>,
}

impl Chunk {
    /// Check if this chunk classifies as the given kind.
    pub fn is_kind(&self, kind: ChunkKind) -> bool {
        self.kind == kind
    }
}
