//! Display-agnostic render model.
//!
//! [`TableView::render`](super::TableView::render) produces a
//! [`RenderedTable`] that a front end (terminal, HTML, GUI) draws as-is.

use serde::Serialize;

use super::BulkAction;
use super::Direction;
use super::FilterDescriptor;
use super::FilterSelection;
use super::HeaderCheckbox;
use super::PageSummary;
use super::RowAction;
use crate::model::RecordId;

/// One column heading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderCell {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    /// Direction when the table is currently sorted by this column.
    pub sorted: Option<Direction>,
}

impl HeaderCell {
    /// Label with a sort arrow when the column is the active sort.
    pub fn decorated_label(&self) -> String {
        match self.sorted {
            Some(Direction::Asc) => format!("{} ▲", self.label),
            Some(Direction::Desc) => format!("{} ▼", self.label),
            None => self.label.clone(),
        }
    }
}

/// A filter select box with its current value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedFilter {
    pub descriptor: FilterDescriptor,
    pub selection: FilterSelection,
}

/// One data row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedRow {
    /// Row id, `None` when the record lacks a usable id field.
    pub id: Option<RecordId>,
    pub selected: bool,
    /// Formatted cells in column order.
    pub cells: Vec<String>,
    /// Actions offered in this row's menu.
    pub actions: Vec<RowAction>,
}

/// What the table body shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableBody {
    /// Placeholder rows while data is loading.
    Loading { skeleton_rows: usize },
    /// Nothing survived search and filters.
    Empty { message: String },
    /// The rows of the current page.
    Rows { rows: Vec<RenderedRow> },
}

/// Pagination footer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Footer {
    pub summary: PageSummary,
    pub page: usize,
    pub total_pages: usize,
}

/// A fully computed table, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedTable {
    pub headers: Vec<HeaderCell>,
    /// Search box placeholder, `None` when search is disabled.
    pub search_placeholder: Option<String>,
    pub query: String,
    pub filters: Vec<RenderedFilter>,
    /// Header checkbox, `None` when selection is disabled.
    pub select_all: Option<HeaderCheckbox>,
    pub show_actions: bool,
    pub bulk_actions: Vec<BulkAction>,
    pub selected_count: usize,
    pub body: TableBody,
    pub footer: Option<Footer>,
}

impl RenderedTable {
    /// Returns the data rows, empty while loading or when nothing matched.
    pub fn rows(&self) -> &[RenderedRow] {
        match &self.body {
            TableBody::Rows { rows } => rows,
            _ => &[],
        }
    }
}
