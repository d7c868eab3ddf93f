//! Rendered rows.

use std::fmt;

/// Identity of a row within one render pass.
///
/// The generation changes on every render, so an id kept across a re-render
/// never matches a row of the new output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId {
    generation: u64,
    index: usize,
}

impl RowId {
    pub(crate) fn new(generation: u64, index: usize) -> Self {
        Self { generation, index }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Position of the row in display order.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__row_{}_{}", self.generation, self.index)
    }
}

/// One rendered link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: RowId,
    /// Display text (the link title).
    pub text: String,
    /// Navigable target.
    pub href: String,
    /// Relation tag with the `describedby:` carrier removed.
    pub relation: String,
    pub selected: bool,
    /// Id of the anchor element this row was drawn as.
    pub element_id: String,
}

impl Row {
    pub fn index(&self) -> usize {
        self.id.index()
    }
}
