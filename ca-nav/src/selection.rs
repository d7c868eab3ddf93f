//! Which row is selected.

use navdom::{Element, find_element_mut};

use crate::event::NavigateEvent;
use crate::row::{Row, RowId};

/// Attribute that marks the selected anchor in the rendered tree.
pub const DATA_SELECTED: &str = "data-selected";

/// Owns the selection and runs the activation path.
///
/// The selection is a weak reference: a [`RowId`] that may name a row from an
/// older render, in which case it resolves to nothing.
#[derive(Debug, Default)]
pub struct SelectionController {
    selected: Option<RowId>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<RowId> {
        self.selected
    }

    /// Overwrite the selection without touching any row markers.
    pub fn set_selected(&mut self, id: Option<RowId>) {
        self.selected = id;
    }

    /// Forget the selection (the row set is being replaced).
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Deselect the current row, select `id` and build its notification.
    ///
    /// The deselect step always runs, even when `id` is already selected.
    /// Returns `None` when `id` does not name a row in `rows`; nothing changes
    /// in that case.
    pub fn activate(
        &mut self,
        rows: &mut [Row],
        container: &mut Element,
        id: RowId,
    ) -> Option<NavigateEvent> {
        let Some(position) = rows.iter().position(|row| row.id == id) else {
            log::debug!("[SelectionController::activate] {id} is not a current row");
            return None;
        };

        self.deselect(rows, container);

        let row = &mut rows[position];
        row.selected = true;
        if let Some(anchor) = find_element_mut(container, &row.element_id) {
            anchor.set_attribute(DATA_SELECTED, "true");
        }
        self.selected = Some(row.id);

        log::debug!(
            "[SelectionController::activate] selected {} -> {:?}",
            row.id,
            row.href
        );
        Some(NavigateEvent::load(&row.relation, &row.href))
    }

    fn deselect(&self, rows: &mut [Row], container: &mut Element) {
        let Some(current) = self.selected else {
            return;
        };
        // A stale id (from an older render) has no row to unmark.
        let Some(row) = rows.iter_mut().find(|row| row.id == current) else {
            return;
        };
        row.selected = false;
        if let Some(anchor) = find_element_mut(container, &row.element_id) {
            anchor.remove_attribute(DATA_SELECTED);
        }
    }
}
