//! Document model types for structured content representation.
//!
//! This module defines the intermediate representation supplied by an
//! external layout/conversion pipeline. The model is format-agnostic: the
//! chunking engine only cares about item types, reading order, and stable
//! ids.

mod document;
mod item;
mod table;

pub use document::{Document, DocumentOrigin};
pub use item::{BoundingBox, DocItem, ItemBody, Provenance};
pub use table::{TableCell, TableData};
