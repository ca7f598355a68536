//! Heading hierarchy tracking.
//!
//! The tracker consumes heading items in reading order and maintains the
//! breadcrumb state: a map from hierarchy level to the full " > "-joined
//! ancestor chain open at that level. Headings carrying real numbering
//! ("3.2.1 Detail") or a declared structural level anchor the hierarchy;
//! short unnumbered labels ("Shall") nest one level beneath the last such
//! significant heading instead of opening a section of their own.

use regex::Regex;
use std::collections::BTreeMap;

/// Separator between breadcrumb components.
pub const BREADCRUMB_SEPARATOR: &str = " > ";

/// Unnumbered headings with at most this many tokens are treated as
/// sub-labels rather than real sections.
const SIMPLE_HEADING_MAX_TOKENS: usize = 2;

/// Stateful tracker for the heading hierarchy of one traversal.
///
/// Created fresh per chunking invocation; never shared.
#[derive(Debug)]
pub struct HeadingTracker {
    /// level -> full breadcrumb path open at that level
    by_level: BTreeMap<u32, String>,
    /// Most recent heading with genuine numbering or declared depth
    last_significant: Option<(u32, String)>,
    numbering: Regex,
}

impl HeadingTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self {
            by_level: BTreeMap::new(),
            last_significant: None,
            numbering: Regex::new(r"^(\d+(?:\.\d+)*)\.?").unwrap(),
        }
    }

    /// Extract the numeric hierarchy level from a heading's leading section
    /// number ("3.2.1 Detail" -> 3). Returns `None` for unnumbered headings;
    /// malformed numbering simply fails to match.
    pub fn numeric_level(&self, text: &str) -> Option<u32> {
        let captures = self.numbering.captures(text)?;
        let section_number = captures.get(1)?.as_str();
        Some(section_number.matches('.').count() as u32 + 1)
    }

    /// Observe a heading and update the breadcrumb state.
    ///
    /// `declared_level` is the structural level reported by the upstream
    /// pipeline: 0 for the document title, >= 1 for section headers.
    pub fn observe(&mut self, text: &str, declared_level: u32) {
        let numeric_level = self.numeric_level(text);
        let is_simple = numeric_level.is_none()
            && text.split_whitespace().count() <= SIMPLE_HEADING_MAX_TOKENS;

        if is_simple && self.last_significant.is_some() {
            // Sub-label: nest under the last significant heading at a
            // synthetic level one deeper. Deeper levels are deliberately
            // left open so a sub-label never closes numbered scope.
            let sig_level = self.last_significant.as_ref().unwrap().0;
            let parent_path = self.by_level.get(&sig_level).cloned();
            let path = Self::join(parent_path.as_deref(), text);
            self.by_level.insert(sig_level + 1, path);
        } else if let Some(level) = numeric_level {
            self.place(level, text);
        } else {
            self.place(declared_level, text);
        }
    }

    /// Place a significant heading at `level`, closing any deeper scope.
    fn place(&mut self, level: u32, text: &str) {
        let parent_path = level
            .checked_sub(1)
            .and_then(|parent| self.by_level.get(&parent))
            .cloned();
        let path = Self::join(parent_path.as_deref(), text);
        self.by_level.insert(level, path);
        self.by_level.retain(|&k, _| k <= level);
        self.last_significant = Some((level, text.to_string()));
    }

    fn join(parent: Option<&str>, text: &str) -> String {
        match parent {
            Some(p) if !p.is_empty() => format!("{p}{BREADCRUMB_SEPARATOR}{text}"),
            _ => text.to_string(),
        }
    }

    /// The breadcrumb active for content at this point: the path stored at
    /// the deepest open level, or `None` before any heading was seen.
    pub fn breadcrumb(&self) -> Option<&str> {
        self.by_level.values().next_back().map(|s| s.as_str())
    }
}

impl Default for HeadingTracker {
    fn default() -> Self {
        Self::new()
    }
}
