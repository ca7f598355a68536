//! Document item types.

use super::TableData;
use serde::{Deserialize, Serialize};

/// A single node in the document's reading order.
///
/// Items are produced by an external layout/conversion pipeline and are
/// never mutated by the chunking engine. The `id` must be unique and stable
/// for the lifetime of the document; it is how chunks claim their sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocItem {
    /// Unique, stable identifier (e.g. "#/texts/12")
    pub id: String,

    /// Optional layout label from the upstream pipeline
    /// (e.g. "caption", "page_footer")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Source provenance (page number, bounding box)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prov: Option<Provenance>,

    /// Typed content payload
    #[serde(flatten)]
    pub body: ItemBody,
}

impl DocItem {
    /// Create a document title item (implicitly level 0).
    pub fn title(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(
            id,
            ItemBody::Title {
                text: text.into(),
            },
        )
    }

    /// Create a section header with its declared structural level (>= 1).
    pub fn section_header(id: impl Into<String>, text: impl Into<String>, level: u32) -> Self {
        Self::new(
            id,
            ItemBody::SectionHeader {
                text: text.into(),
                level,
            },
        )
    }

    /// Create a paragraph item.
    pub fn paragraph(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(
            id,
            ItemBody::Paragraph {
                text: text.into(),
            },
        )
    }

    /// Create an ordered list container.
    pub fn ordered_list(id: impl Into<String>, items: Vec<DocItem>) -> Self {
        Self::new(id, ItemBody::OrderedList { items })
    }

    /// Create an unordered list container.
    pub fn unordered_list(id: impl Into<String>, items: Vec<DocItem>) -> Self {
        Self::new(id, ItemBody::UnorderedList { items })
    }

    /// Create an inline group container.
    pub fn inline(id: impl Into<String>, items: Vec<DocItem>) -> Self {
        Self::new(id, ItemBody::Inline { items })
    }

    /// Create a table item.
    pub fn table(id: impl Into<String>, data: TableData) -> Self {
        Self::new(id, ItemBody::Table { data })
    }

    /// Create a picture item.
    pub fn picture(id: impl Into<String>) -> Self {
        Self::new(id, ItemBody::Picture {})
    }

    fn new(id: impl Into<String>, body: ItemBody) -> Self {
        Self {
            id: id.into(),
            label: None,
            prov: None,
            body,
        }
    }

    /// Set the layout label and return self.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the provenance and return self.
    pub fn with_prov(mut self, prov: Provenance) -> Self {
        self.prov = Some(prov);
        self
    }

    /// Check if this item is a heading (title or section header).
    pub fn is_heading(&self) -> bool {
        matches!(
            self.body,
            ItemBody::Title { .. } | ItemBody::SectionHeader { .. }
        )
    }

    /// Check if this item is a container holding child items.
    pub fn is_container(&self) -> bool {
        matches!(
            self.body,
            ItemBody::OrderedList { .. } | ItemBody::UnorderedList { .. } | ItemBody::Inline { .. }
        )
    }

    /// Child items for containers, empty for leaves.
    pub fn children(&self) -> &[DocItem] {
        match &self.body {
            ItemBody::OrderedList { items }
            | ItemBody::UnorderedList { items }
            | ItemBody::Inline { items } => items,
            _ => &[],
        }
    }

    /// Plain text carried directly by this item (empty for containers,
    /// tables, and pictures).
    pub fn plain_text(&self) -> &str {
        match &self.body {
            ItemBody::Title { text }
            | ItemBody::SectionHeader { text, .. }
            | ItemBody::Paragraph { text } => text.trim(),
            _ => "",
        }
    }

    /// Check if this item is page furniture (running headers, footers,
    /// page numbers, watermarks) based on its layout label.
    pub fn is_furniture(&self) -> bool {
        const FURNITURE_LABELS: [&str; 8] = [
            "page_header",
            "page_footer",
            "header",
            "footer",
            "footnote",
            "page_number",
            "watermark",
            "background",
        ];
        let Some(label) = &self.label else {
            return false;
        };
        let label = label.to_lowercase();
        FURNITURE_LABELS.iter().any(|f| label.contains(f))
    }
}

/// Typed content of a document item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemBody {
    /// The document title (level 0)
    Title {
        /// Heading text
        text: String,
    },

    /// A section heading with a declared structural level
    SectionHeader {
        /// Heading text
        text: String,
        /// Declared level (1 = top-level section)
        level: u32,
    },

    /// A paragraph of body text
    Paragraph {
        /// Paragraph text
        text: String,
    },

    /// An inline group of content units
    Inline {
        /// Child items
        items: Vec<DocItem>,
    },

    /// An ordered (numbered) list
    OrderedList {
        /// List entries
        items: Vec<DocItem>,
    },

    /// An unordered (bulleted) list
    UnorderedList {
        /// List entries
        items: Vec<DocItem>,
    },

    /// A table with structured cell data
    Table {
        /// Cell grid
        data: TableData,
    },

    /// A picture; pixel data lives with the external extraction step
    Picture {},
}

/// Where an item came from in the source document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Provenance {
    /// 1-indexed page number
    pub page: u32,

    /// Bounding box on the page, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
}

impl Provenance {
    /// Create provenance for a page without coordinates.
    pub fn page(page: u32) -> Self {
        Self { page, bbox: None }
    }

    /// Create provenance with a bounding box.
    pub fn with_bbox(page: u32, bbox: BoundingBox) -> Self {
        Self {
            page,
            bbox: Some(bbox),
        }
    }
}

/// An axis-aligned bounding box in page coordinates (points).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge
    pub l: f32,
    /// Top edge
    pub t: f32,
    /// Right edge
    pub r: f32,
    /// Bottom edge
    pub b: f32,
}

impl BoundingBox {
    /// Create a new bounding box.
    pub fn new(l: f32, t: f32, r: f32, b: f32) -> Self {
        Self { l, t, r, b }
    }

    /// Box width.
    pub fn width(&self) -> f32 {
        self.r - self.l
    }

    /// Box height.
    pub fn height(&self) -> f32 {
        self.b - self.t
    }
}
