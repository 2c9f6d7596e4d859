//! Highlight marks laid over the text.

use std::collections::BTreeMap;

use crate::editor::port::{CellSpan, MarkId};

/// A highlight group applied to a set of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mark {
    pub group: String,
    pub spans: Vec<CellSpan>,
}

/// Active highlight marks keyed by handle.
///
/// Handles are never reused within one set, so a stale handle can't delete
/// a newer mark.
#[derive(Debug, Clone, Default)]
pub struct MarkSet {
    marks: BTreeMap<MarkId, Mark>,
    next_id: u64,
}

impl MarkSet {
    /// Creates a new empty mark set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a mark and returns its handle.
    pub fn add(&mut self, group: &str, spans: &[CellSpan]) -> MarkId {
        self.next_id += 1;
        let id = MarkId(self.next_id);
        self.marks.insert(
            id,
            Mark {
                group: group.to_string(),
                spans: spans.to_vec(),
            },
        );
        id
    }

    /// Removes a mark. Returns None if the handle is unknown.
    pub fn remove(&mut self, id: MarkId) -> Option<Mark> {
        self.marks.remove(&id)
    }

    pub fn get(&self, id: MarkId) -> Option<&Mark> {
        self.marks.get(&id)
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Clears all marks.
    pub fn clear(&mut self) {
        self.marks.clear();
    }

    /// Lists all marks in creation order.
    pub fn list(&self) -> Vec<(MarkId, &Mark)> {
        self.marks.iter().map(|(&id, mark)| (id, mark)).collect()
    }

    /// Group covering a cell. The most recently added mark wins.
    pub fn group_at(&self, line: usize, col: usize) -> Option<&str> {
        self.marks
            .values()
            .rev()
            .find(|mark| mark.spans.iter().any(|s| s.contains(line, col)))
            .map(|mark| mark.group.as_str())
    }

    /// Spans touching `line` with their group, oldest first.
    pub fn spans_on_line(&self, line: usize) -> Vec<(CellSpan, &str)> {
        self.marks
            .values()
            .flat_map(|mark| {
                mark.spans
                    .iter()
                    .filter(move |s| s.line == line)
                    .map(move |s| (*s, mark.group.as_str()))
            })
            .collect()
    }
}
