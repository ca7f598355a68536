//! The hierarchical breadcrumb chunking engine.
//!
//! One pass over the document's reading-order sequence: headings feed the
//! [`HeadingTracker`], content items become [`Chunk`]s carrying the
//! breadcrumb active at their position, and a visited set guarantees every
//! source item is claimed by at most one chunk.

mod captions;
mod chunk;
mod headings;
mod options;
mod stream;
mod tables;
mod text;

pub use captions::{caption_for, context_for, find_caption, sibling_context};
pub use chunk::{Chunk, ChunkKind};
pub use headings::{HeadingTracker, BREADCRUMB_SEPARATOR};
pub use options::{ChunkOptions, DEFAULT_CAPTION_DISTANCE};
pub use stream::ChunkStream;
pub use tables::serialize_table;
