//! Document-level types.

use super::DocItem;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A structurally-tagged document produced by an external conversion
/// pipeline, ready for chunking.
///
/// `items` are the top-level items in reading order; list and inline
/// containers carry their children inline. The chunking engine only ever
/// borrows a document, it never mutates one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Source document origin (filename, mimetype)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<DocumentOrigin>,

    /// Top-level items in reading order
    pub items: Vec<DocItem>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document with origin metadata.
    pub fn with_origin(origin: DocumentOrigin) -> Self {
        Self {
            origin: Some(origin),
            items: Vec::new(),
        }
    }

    /// Append a top-level item.
    pub fn add_item(&mut self, item: DocItem) {
        self.items.push(item);
    }

    /// Number of top-level items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the document has any items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Flatten the document into its full reading-order sequence.
    ///
    /// Containers appear immediately before their children, matching the
    /// traversal order of the upstream pipeline. This sequence is what the
    /// chunker walks and what caption/context proximity search scans.
    pub fn flattened(&self) -> Vec<&DocItem> {
        fn walk<'a>(items: &'a [DocItem], out: &mut Vec<&'a DocItem>) {
            for item in items {
                out.push(item);
                walk(item.children(), out);
            }
        }
        let mut out = Vec::new();
        walk(&self.items, &mut out);
        out
    }

    /// Find an item anywhere in the tree by id.
    pub fn get(&self, id: &str) -> Option<&DocItem> {
        fn find<'a>(items: &'a [DocItem], id: &str) -> Option<&'a DocItem> {
            for item in items {
                if item.id == id {
                    return Some(item);
                }
                if let Some(found) = find(item.children(), id) {
                    return Some(found);
                }
            }
            None
        }
        find(&self.items, id)
    }

    /// Parse a document from its JSON serialization, verifying id
    /// uniqueness across the whole tree.
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: Document = serde_json::from_str(json)?;
        let mut seen: HashSet<&str> = HashSet::new();
        for item in doc.flattened() {
            if !seen.insert(item.id.as_str()) {
                return Err(crate::error::Error::InvalidDocument(format!(
                    "duplicate item id: {}",
                    item.id
                )));
            }
        }
        Ok(doc)
    }

    /// Serialize the document to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Plain text of every leaf item, in reading order.
    pub fn plain_text(&self) -> String {
        self.flattened()
            .iter()
            .map(|item| item.plain_text())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Origin metadata passed through to chunks, opaque to the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentOrigin {
    /// Source file name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// Source mimetype (e.g. "application/pdf")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mimetype: Option<String>,
}

impl DocumentOrigin {
    /// Create origin metadata for a file.
    pub fn new(filename: impl Into<String>, mimetype: impl Into<String>) -> Self {
        Self {
            filename: Some(filename.into()),
            mimetype: Some(mimetype.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.item_count(), 0);
    }

    #[test]
    fn test_flattened_order() {
        let mut doc = Document::new();
        doc.add_item(DocItem::title("t0", "Title"));
        doc.add_item(DocItem::unordered_list(
            "l0",
            vec![
                DocItem::paragraph("l0.0", "first"),
                DocItem::paragraph("l0.1", "second"),
            ],
        ));
        doc.add_item(DocItem::paragraph("p0", "tail"));

        let ids: Vec<_> = doc.flattened().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["t0", "l0", "l0.0", "l0.1", "p0"]);
    }

    #[test]
    fn test_get_nested() {
        let mut doc = Document::new();
        doc.add_item(DocItem::ordered_list(
            "l0",
            vec![DocItem::paragraph("l0.0", "entry")],
        ));
        assert!(doc.get("l0.0").is_some());
        assert!(doc.get("missing").is_none());
    }

    #[test]
    fn test_from_json_rejects_duplicate_ids() {
        let mut doc = Document::new();
        doc.add_item(DocItem::paragraph("p0", "one"));
        doc.add_item(DocItem::paragraph("p0", "two"));
        let json = doc.to_json().unwrap();

        let err = Document::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("duplicate item id"));
    }

    #[test]
    fn test_json_round_trip() {
        let mut doc = Document::with_origin(DocumentOrigin::new("spec.pdf", "application/pdf"));
        doc.add_item(DocItem::section_header("h0", "1 Overview", 1));
        doc.add_item(DocItem::paragraph("p0", "Body."));

        let json = doc.to_json().unwrap();
        let back = Document::from_json(&json).unwrap();
        assert_eq!(back.item_count(), 2);
        assert_eq!(
            back.origin.unwrap().filename.as_deref(),
            Some("spec.pdf")
        );
    }
}
