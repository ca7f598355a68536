//! The chunk stream: classification, dispatch, and emission.
//!
//! `ChunkStream` walks the document's flattened reading-order sequence
//! exactly once and lazily yields [`Chunk`]s. Headings update the breadcrumb
//! tracker and are never chunked themselves; every other item is classified
//! and serialized, possibly consuming nested descendants. Dropping the
//! stream early discards all traversal state with no other side effects.

use super::captions::find_caption;
use super::chunk::{Chunk, ChunkKind};
use super::headings::HeadingTracker;
use super::options::ChunkOptions;
use super::tables::serialize_table;
use super::text::serialize_subtree;
use crate::model::{DocItem, Document, ItemBody};
use std::collections::{HashMap, HashSet};

/// A lazy, forward-only iterator over the chunks of one document.
///
/// All mutable traversal state (heading hierarchy, visited set) lives inside
/// the stream and is created fresh per invocation.
pub struct ChunkStream<'a> {
    doc: &'a Document,
    sequence: Vec<&'a DocItem>,
    pos: usize,
    headings: HeadingTracker,
    visited: HashSet<String>,
    options: ChunkOptions,
    image_refs: HashMap<String, String>,
}

impl<'a> ChunkStream<'a> {
    /// Create a stream over `doc` with default options and no image map.
    pub fn new(doc: &'a Document) -> Self {
        Self::with_options(doc, ChunkOptions::default(), HashMap::new())
    }

    /// Create a stream with explicit options and a picture id -> extracted
    /// image path map.
    pub fn with_options(
        doc: &'a Document,
        options: ChunkOptions,
        image_refs: HashMap<String, String>,
    ) -> Self {
        Self {
            doc,
            sequence: doc.flattened(),
            pos: 0,
            headings: HeadingTracker::new(),
            visited: HashSet::new(),
            options,
            image_refs,
        }
    }

    /// Number of items in the flattened sequence.
    pub fn sequence_len(&self) -> usize {
        self.sequence.len()
    }

    /// The breadcrumb active at the current traversal position.
    pub fn current_breadcrumb(&self) -> Option<&str> {
        self.headings.breadcrumb()
    }

    fn emit(&self, item: &DocItem, kind: ChunkKind, text: String, doc_items: Vec<String>) -> Chunk {
        Chunk {
            text,
            kind,
            doc_items,
            breadcrumb: self.headings.breadcrumb().map(str::to_string),
            image_path: None,
            prov: item.prov.clone(),
            origin: self.doc.origin.clone(),
        }
    }

    fn picture_chunk(&mut self, index: usize, item: &DocItem) -> Option<Chunk> {
        self.visited.insert(item.id.clone());

        let Some(path) = self.image_refs.get(&item.id) else {
            log::warn!("image path not found in reference map for {}", item.id);
            return None;
        };

        let caption = find_caption(&self.sequence, index, self.options.max_caption_distance)
            .unwrap_or_default();
        let mut chunk = self.emit(item, ChunkKind::Image, caption, vec![item.id.clone()]);
        chunk.image_path = Some(path.clone());
        Some(chunk)
    }

    fn table_chunk(&mut self, index: usize, item: &DocItem) -> Chunk {
        self.visited.insert(item.id.clone());

        let body = match &item.body {
            ItemBody::Table { data } => serialize_table(data),
            _ => unreachable!("table_chunk called on non-table item"),
        };
        let caption = find_caption(&self.sequence, index, self.options.max_caption_distance);

        let combined = match caption {
            Some(caption) if !caption.is_empty() => format!("{caption}\n\n{body}"),
            _ => body,
        };

        self.emit(
            item,
            ChunkKind::Table,
            combined.trim().to_string(),
            vec![item.id.clone()],
        )
    }

    fn text_chunk(&mut self, item: &DocItem) -> Option<Chunk> {
        let result = serialize_subtree(item, &mut self.visited);
        if result.text.is_empty() || result.doc_items.is_empty() {
            return None;
        }
        Some(self.emit(item, ChunkKind::Text, result.text, result.doc_items))
    }
}

impl<'a> Iterator for ChunkStream<'a> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.sequence.len() {
            let index = self.pos;
            self.pos += 1;
            let item = self.sequence[index];

            if self.visited.contains(&item.id) {
                continue;
            }

            if self.options.skip_furniture && item.is_furniture() {
                self.visited.insert(item.id.clone());
                continue;
            }

            match &item.body {
                ItemBody::Title { text } => {
                    self.headings.observe(text, 0);
                    self.visited.insert(item.id.clone());
                }
                ItemBody::SectionHeader { text, level } => {
                    self.headings.observe(text, *level);
                    self.visited.insert(item.id.clone());
                }
                ItemBody::Picture {} => {
                    if let Some(chunk) = self.picture_chunk(index, item) {
                        return Some(chunk);
                    }
                }
                ItemBody::Table { .. } => {
                    return Some(self.table_chunk(index, item));
                }
                ItemBody::Paragraph { .. }
                | ItemBody::Inline { .. }
                | ItemBody::OrderedList { .. }
                | ItemBody::UnorderedList { .. } => {
                    if let Some(chunk) = self.text_chunk(item) {
                        return Some(chunk);
                    }
                }
            }
        }
        None
    }
}
