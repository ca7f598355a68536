//! Chunking options.

/// Default proximity window for caption search, in sequence positions.
pub const DEFAULT_CAPTION_DISTANCE: usize = 2;

/// Options controlling chunk extraction.
#[derive(Debug, Clone)]
pub struct ChunkOptions {
    /// How many sequence positions to scan before/after a table or picture
    /// when resolving its caption
    pub max_caption_distance: usize,

    /// Skip page furniture (running headers/footers, page numbers) instead
    /// of chunking it
    pub skip_furniture: bool,
}

impl ChunkOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the caption search window.
    pub fn with_caption_distance(mut self, distance: usize) -> Self {
        self.max_caption_distance = distance;
        self
    }

    /// Keep page furniture in the output instead of skipping it.
    pub fn keep_furniture(mut self) -> Self {
        self.skip_furniture = false;
        self
    }
}

impl Default for ChunkOptions {
    fn default() -> Self {
        Self {
            max_caption_distance: DEFAULT_CAPTION_DISTANCE,
            skip_furniture: true,
        }
    }
}
