//! Mapping chunks into the standardized persistence schema.
//!
//! The mapper is a stateless, order-independent, per-chunk transform: it
//! never looks at traversal state, only at the chunk handed to it. It sits
//! downstream of the chunking engine and upstream of whatever store ingests
//! the records.

use crate::chunker::{Chunk, ChunkKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Default creator tool tag written into every record.
pub const DEFAULT_CREATOR_TOOL: &str = concat!("docrumb_v", env!("CARGO_PKG_VERSION"));

/// Fallback mimetype when the source document carries none.
const DEFAULT_FILE_TYPE: &str = "application/pdf";

/// Maps chunks to fixed-schema persistence records.
#[derive(Debug, Clone)]
pub struct ChunkMapper {
    creator_tool: String,
    stamp: bool,
}

impl ChunkMapper {
    /// Create a mapper with the default creator tool tag.
    pub fn new() -> Self {
        Self {
            creator_tool: DEFAULT_CREATOR_TOOL.to_string(),
            stamp: false,
        }
    }

    /// Override the creator tool tag.
    pub fn with_creator_tool(mut self, tool: impl Into<String>) -> Self {
        self.creator_tool = tool.into();
        self
    }

    /// Stamp records with the mapping time.
    pub fn with_timestamps(mut self) -> Self {
        self.stamp = true;
        self
    }

    /// Map one chunk to a record. `block_id` is the 1-based position of the
    /// chunk in the output sequence.
    pub fn map(&self, chunk: &Chunk, block_id: u32, doc_id: Option<&str>) -> ChunkRecord {
        let breadcrumb = chunk.breadcrumb.clone().unwrap_or_default();
        let (page, coords) = match &chunk.prov {
            Some(prov) => (prov.page, prov.bbox),
            None => (1, None),
        };
        let (coords_x, coords_y, coords_cx, coords_cy) = match coords {
            Some(bbox) => (
                bbox.l as i32,
                bbox.t as i32,
                bbox.width() as i32,
                bbox.height() as i32,
            ),
            None => (0, 0, 0, 0),
        };

        let text_block = if breadcrumb.is_empty() {
            chunk.text.clone()
        } else {
            format!("{breadcrumb}\n\n{}", chunk.text)
        };

        let metadata = json!({
            "breadcrumb": breadcrumb,
            "page_no": page,
            "doc_items": chunk.doc_items,
            "content_type": chunk.kind.as_str(),
            "image_path": chunk.image_path,
        });

        ChunkRecord {
            block_id,
            doc_id: doc_id.map(str::to_string),
            content_type: chunk.kind,
            file_type: chunk
                .origin
                .as_ref()
                .and_then(|o| o.mimetype.clone())
                .unwrap_or_else(|| DEFAULT_FILE_TYPE.to_string()),
            master_index: page,
            coords_x,
            coords_y,
            coords_cx,
            coords_cy,
            file_source: chunk
                .origin
                .as_ref()
                .and_then(|o| o.filename.clone())
                .unwrap_or_default(),
            table_block: matches!(chunk.kind, ChunkKind::Table).then(|| chunk.text.clone()),
            external_files: chunk.image_path.clone(),
            text_block,
            header_text: breadcrumb,
            text_search: chunk.text.clone(),
            created_date: self.stamp.then(Utc::now),
            creator_tool: self.creator_tool.clone(),
            metadata,
        }
    }

    /// Map a whole chunk sequence, numbering blocks from 1.
    pub fn map_all(&self, chunks: &[Chunk], doc_id: Option<&str>) -> Vec<ChunkRecord> {
        chunks
            .iter()
            .enumerate()
            .map(|(i, chunk)| self.map(chunk, i as u32 + 1, doc_id))
            .collect()
    }
}

impl Default for ChunkMapper {
    fn default() -> Self {
        Self::new()
    }
}

/// One persistence record in the standardized output schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkRecord {
    /// 1-based position of the chunk in the output sequence
    pub block_id: u32,

    /// Document id shared by all records of one document
    pub doc_id: Option<String>,

    /// Content classification
    pub content_type: ChunkKind,

    /// Source mimetype
    pub file_type: String,

    /// Source page number
    pub master_index: u32,

    /// Bounding box left edge, page points
    pub coords_x: i32,
    /// Bounding box top edge
    pub coords_y: i32,
    /// Bounding box width
    pub coords_cx: i32,
    /// Bounding box height
    pub coords_cy: i32,

    /// Source file name
    pub file_source: String,

    /// Serialized table payload, table chunks only
    pub table_block: Option<String>,

    /// Extracted image path, image chunks only
    pub external_files: Option<String>,

    /// Breadcrumb plus content, the block handed to embedding
    pub text_block: String,

    /// Breadcrumb on its own
    pub header_text: String,

    /// Text used for search indexing
    pub text_search: String,

    /// Mapping time, when stamping is enabled
    pub created_date: Option<DateTime<Utc>>,

    /// Tool tag identifying the producer
    pub creator_tool: String,

    /// Full chunk metadata as a JSON blob
    pub metadata: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoundingBox, DocumentOrigin, Provenance};

    fn text_chunk() -> Chunk {
        Chunk {
            text: "Body paragraph.".to_string(),
            kind: ChunkKind::Text,
            doc_items: vec!["p0".to_string()],
            breadcrumb: Some("1 Intro".to_string()),
            image_path: None,
            prov: Some(Provenance::with_bbox(
                3,
                BoundingBox::new(10.0, 20.0, 110.0, 70.0),
            )),
            origin: Some(DocumentOrigin::new("spec.pdf", "application/pdf")),
        }
    }

    #[test]
    fn test_text_record_fields() {
        let record = ChunkMapper::new().map(&text_chunk(), 1, Some("doc-1"));

        assert_eq!(record.block_id, 1);
        assert_eq!(record.doc_id.as_deref(), Some("doc-1"));
        assert_eq!(record.master_index, 3);
        assert_eq!(record.coords_x, 10);
        assert_eq!(record.coords_cx, 100);
        assert_eq!(record.coords_cy, 50);
        assert_eq!(record.file_source, "spec.pdf");
        assert_eq!(record.text_block, "1 Intro\n\nBody paragraph.");
        assert_eq!(record.header_text, "1 Intro");
        assert!(record.table_block.is_none());
        assert!(record.created_date.is_none());
    }

    #[test]
    fn test_table_record_carries_payload() {
        let mut chunk = text_chunk();
        chunk.kind = ChunkKind::Table;
        chunk.text = "r1, A = x. r1, B = y".to_string();

        let record = ChunkMapper::new().map(&chunk, 2, None);
        assert_eq!(record.table_block.as_deref(), Some("r1, A = x. r1, B = y"));
        assert_eq!(record.content_type, ChunkKind::Table);
    }

    #[test]
    fn test_image_record_external_files() {
        let mut chunk = text_chunk();
        chunk.kind = ChunkKind::Image;
        chunk.text = "Figure 1".to_string();
        chunk.image_path = Some("images/i0.png".to_string());

        let record = ChunkMapper::new().map(&chunk, 3, None);
        assert_eq!(record.external_files.as_deref(), Some("images/i0.png"));
        assert_eq!(record.text_search, "Figure 1");
    }

    #[test]
    fn test_map_all_numbers_from_one() {
        let chunks = vec![text_chunk(), text_chunk()];
        let records = ChunkMapper::new().map_all(&chunks, Some("d"));
        assert_eq!(records[0].block_id, 1);
        assert_eq!(records[1].block_id, 2);
    }

    #[test]
    fn test_timestamps_opt_in() {
        let record = ChunkMapper::new()
            .with_timestamps()
            .map(&text_chunk(), 1, None);
        assert!(record.created_date.is_some());
    }

    #[test]
    fn test_missing_provenance_defaults() {
        let mut chunk = text_chunk();
        chunk.prov = None;
        chunk.origin = None;

        let record = ChunkMapper::new().map(&chunk, 1, None);
        assert_eq!(record.master_index, 1);
        assert_eq!(record.coords_x, 0);
        assert_eq!(record.file_type, "application/pdf");
        assert_eq!(record.file_source, "");
    }
}
