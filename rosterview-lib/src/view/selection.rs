//! Row selection for bulk actions.

use serde::Serialize;

use crate::model::RecordId;

/// Selection mode for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// No checkbox column, selection calls are ignored.
    #[default]
    None,
    /// Checkbox column, any number of rows.
    Multi,
}

/// State of the header checkbox for the rows on the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderCheckbox {
    Unchecked,
    Indeterminate,
    Checked,
}

/// Tracks selected rows by id, in the order they were selected.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub mode: SelectionMode,
    selected: Vec<RecordId>,
}

impl Selection {
    /// Create selection with no selection allowed.
    pub fn none() -> Self {
        Self::default()
    }

    /// Create multi-selection mode.
    pub fn multi() -> Self {
        Self {
            mode: SelectionMode::Multi,
            selected: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.mode == SelectionMode::Multi
    }

    /// Toggle selection for an id. Returns true if selection changed.
    pub fn toggle(&mut self, id: RecordId) -> bool {
        if !self.is_enabled() {
            return false;
        }
        match self.selected.iter().position(|s| s == &id) {
            Some(index) => {
                self.selected.remove(index);
            }
            None => self.selected.push(id),
        }
        true
    }

    /// Selects or deselects exactly the given (visible) ids.
    ///
    /// Checking replaces the selection with `visible`. Unchecking clears it.
    pub fn set_all<'a, I>(&mut self, visible: I, checked: bool)
    where
        I: IntoIterator<Item = &'a RecordId>,
    {
        if !self.is_enabled() {
            return;
        }
        self.selected.clear();
        if checked {
            for id in visible {
                if !self.selected.contains(id) {
                    self.selected.push(id.clone());
                }
            }
        }
    }

    /// Header checkbox state relative to the visible ids.
    pub fn header_state(&self, visible: &[RecordId]) -> HeaderCheckbox {
        let selected = visible.iter().filter(|id| self.is_selected(id)).count();
        if visible.is_empty() || selected == 0 {
            HeaderCheckbox::Unchecked
        } else if selected == visible.len() {
            HeaderCheckbox::Checked
        } else {
            HeaderCheckbox::Indeterminate
        }
    }

    /// Check if an id is selected.
    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.selected.contains(id)
    }

    /// Drops every id the predicate rejects. Returns how many were dropped.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&RecordId) -> bool,
    {
        let before = self.selected.len();
        self.selected.retain(|id| keep(id));
        before - self.selected.len()
    }

    /// Clear all selections.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Get all selected ids.
    pub fn ids(&self) -> &[RecordId] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
