//! Generic subtree text serialization.
//!
//! Container-like items (lists, inline groups) are flattened into one text
//! block. Every leaf the serializer touches is claimed in the visited set,
//! including tables and pictures nested inside containers, so a later pass
//! never re-emits them as standalone chunks.

use super::tables::serialize_table;
use crate::model::{DocItem, ItemBody};
use std::collections::HashSet;

/// Result of serializing one content subtree.
#[derive(Debug, Default)]
pub(crate) struct SubtreeText {
    /// Concatenated text of the subtree
    pub text: String,
    /// Ids of the leaves that contributed text, in reading order
    pub doc_items: Vec<String>,
}

/// Serialize a content item (and any descendants) to plain text, marking
/// every touched id as visited.
pub(crate) fn serialize_subtree(item: &DocItem, visited: &mut HashSet<String>) -> SubtreeText {
    let mut result = SubtreeText::default();
    serialize_into(item, visited, &mut result);
    result
}

fn serialize_into(item: &DocItem, visited: &mut HashSet<String>, out: &mut SubtreeText) {
    visited.insert(item.id.clone());

    match &item.body {
        ItemBody::Paragraph { .. } | ItemBody::Title { .. } | ItemBody::SectionHeader { .. } => {
            push_text(out, item, item.plain_text().to_string());
        }
        ItemBody::Inline { items } => {
            let mut parts = Vec::new();
            for child in items {
                let nested = serialize_subtree(child, visited);
                if !nested.text.is_empty() {
                    parts.push(nested.text);
                }
                out.doc_items.extend(nested.doc_items);
            }
            append_block(out, parts.join(" "));
        }
        ItemBody::OrderedList { items } => {
            let entries: Vec<String> = list_entries(items, visited, out)
                .into_iter()
                .enumerate()
                .map(|(i, entry)| format!("{}. {}", i + 1, entry))
                .collect();
            append_block(out, entries.join("\n"));
        }
        ItemBody::UnorderedList { items } => {
            let entries: Vec<String> = list_entries(items, visited, out)
                .into_iter()
                .map(|entry| format!("- {entry}"))
                .collect();
            append_block(out, entries.join("\n"));
        }
        ItemBody::Table { data } => {
            push_text(out, item, serialize_table(data));
        }
        // Nested pictures are claimed but contribute no text; the image
        // bytes live with the external extraction step.
        ItemBody::Picture {} => {}
    }
}

fn list_entries(
    items: &[DocItem],
    visited: &mut HashSet<String>,
    out: &mut SubtreeText,
) -> Vec<String> {
    let mut entries = Vec::new();
    for child in items {
        let nested = serialize_subtree(child, visited);
        if !nested.text.is_empty() {
            entries.push(nested.text);
        }
        out.doc_items.extend(nested.doc_items);
    }
    entries
}

fn push_text(out: &mut SubtreeText, item: &DocItem, text: String) {
    if text.is_empty() {
        return;
    }
    out.doc_items.push(item.id.clone());
    append_block(out, text);
}

fn append_block(out: &mut SubtreeText, text: String) {
    if text.is_empty() {
        return;
    }
    if !out.text.is_empty() {
        out.text.push('\n');
    }
    out.text.push_str(&text);
}
