//! Caption and sibling-context resolution by bounded proximity search.

use crate::model::{DocItem, Document};

/// Text markers that identify a caption-like item.
const CAPTION_MARKERS: [&str; 5] = ["caption", "figure", "fig", "table", "tbl"];

/// Marker-bearing text longer than this is treated as body text, not a
/// caption.
const CAPTION_MAX_CHARS: usize = 200;

/// Find a caption for the item at `index` in the flattened reading-order
/// sequence.
///
/// Scans up to `max_distance` items before the target, then up to
/// `max_distance` after; matches before the target win. A candidate either
/// carries a caption label or contains a caption marker in short text.
pub fn find_caption(sequence: &[&DocItem], index: usize, max_distance: usize) -> Option<String> {
    let before_start = index.saturating_sub(max_distance);
    for item in &sequence[before_start..index] {
        if is_caption_candidate(item) {
            return Some(item.plain_text().to_string());
        }
    }

    let after_end = (index + max_distance + 1).min(sequence.len());
    if index + 1 < after_end {
        for item in &sequence[index + 1..after_end] {
            if is_caption_candidate(item) {
                return Some(item.plain_text().to_string());
            }
        }
    }

    None
}

fn is_caption_candidate(item: &DocItem) -> bool {
    if let Some(label) = &item.label {
        if label.to_lowercase().contains("caption") {
            return true;
        }
    }

    let text = item.plain_text();
    if text.is_empty() || text.chars().count() >= CAPTION_MAX_CHARS {
        return false;
    }
    let lower = text.to_lowercase();
    CAPTION_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Plain text immediately before and after the item at `index`, each capped
/// at roughly `context_chars` characters with word-boundary-safe truncation.
///
/// Intended for downstream consumers (e.g. giving uncaptioned images some
/// textual surroundings); the chunking engine itself never embeds this into
/// chunk text.
pub fn sibling_context(
    sequence: &[&DocItem],
    index: usize,
    context_chars: usize,
) -> (String, String) {
    let mut before = String::new();
    let mut i = index;
    while i > 0 && before.chars().count() < context_chars {
        i -= 1;
        let text = sequence[i].plain_text();
        if !text.is_empty() {
            if before.is_empty() {
                before = text.to_string();
            } else {
                before = format!("{text} {before}");
            }
        }
    }

    let mut after = String::new();
    let mut i = index + 1;
    while i < sequence.len() && after.chars().count() < context_chars {
        let text = sequence[i].plain_text();
        if !text.is_empty() {
            if after.is_empty() {
                after = text.to_string();
            } else {
                after = format!("{after} {text}");
            }
        }
        i += 1;
    }

    (
        truncate_leading(&before, context_chars),
        truncate_trailing(&after, context_chars),
    )
}

/// Keep roughly the last `max_chars` characters, cutting at a word boundary
/// and prefixing an ellipsis marker.
fn truncate_leading(text: &str, max_chars: usize) -> String {
    let total = text.chars().count();
    if total <= max_chars {
        return text.trim().to_string();
    }
    let cut: usize = text
        .char_indices()
        .nth(total - max_chars)
        .map(|(byte, _)| byte)
        .unwrap_or(0);
    match text[cut..].find(' ') {
        Some(space) => format!("...{}", &text[cut + space..]).trim_end().to_string(),
        None => format!("...{}", &text[cut..]).trim_end().to_string(),
    }
}

/// Keep roughly the first `max_chars` characters, cutting at a word boundary
/// and appending an ellipsis marker.
fn truncate_trailing(text: &str, max_chars: usize) -> String {
    let total = text.chars().count();
    if total <= max_chars {
        return text.trim().to_string();
    }
    let cut: usize = text
        .char_indices()
        .nth(max_chars)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len());
    match text[..cut].rfind(' ') {
        Some(space) => format!("{}...", &text[..space]).trim_start().to_string(),
        None => format!("{}...", &text[..cut]).trim_start().to_string(),
    }
}

/// Find a caption for an item by id, scanning the document's flattened
/// sequence.
pub fn caption_for(doc: &Document, item_id: &str, max_distance: usize) -> Option<String> {
    let sequence = doc.flattened();
    let Some(index) = sequence.iter().position(|item| item.id == item_id) else {
        log::warn!("item {item_id} not found in document sequence");
        return None;
    };
    find_caption(&sequence, index, max_distance)
}

/// Sibling context for an item by id; empty strings when the id is unknown.
pub fn context_for(doc: &Document, item_id: &str, context_chars: usize) -> (String, String) {
    let sequence = doc.flattened();
    let Some(index) = sequence.iter().position(|item| item.id == item_id) else {
        log::warn!("item {item_id} not found in document sequence");
        return (String::new(), String::new());
    };
    sibling_context(&sequence, index, context_chars)
}
