//! TableView: the owned view model behind one table.

use std::collections::HashSet;

use super::ActiveFilters;
use super::BulkCallback;
use super::FilterSelection;
use super::HeaderCheckbox;
use super::PageSummary;
use super::RowAction;
use super::RowActions;
use super::Selection;
use super::SortState;
use super::filter::filter;
use super::page;
use super::render::Footer;
use super::render::HeaderCell;
use super::render::RenderedFilter;
use super::render::RenderedRow;
use super::render::RenderedTable;
use super::render::TableBody;
use super::search::search;
use super::sort::sort;
use crate::config::TableConfig;
use crate::model::Record;
use crate::model::RecordId;

/// View model of a searchable, filterable, sortable, paginated and
/// selectable table.
///
/// All derived views are recomputed from the full record collection on
/// every call; nothing is cached. The visible rows are always
/// `paginate(sort(filter(search(records))))`.
///
/// # Example
///
/// ```
/// use rosterview_lib::{Record, TableConfig, TableView};
/// use rosterview_lib::view::Column;
///
/// let records: Vec<Record> = (1..=12)
///     .map(|n| Record::new().set("id", n).set("name", format!("Student {n}")))
///     .collect();
///
/// let mut view = TableView::new(TableConfig::new(vec![Column::new("name", "Name")]))
///     .with_records(records);
///
/// assert_eq!(view.visible_rows().len(), 10);
/// assert_eq!(view.summary().unwrap().to_string(), "Showing 1 to 10 of 12");
///
/// view.set_page(2);
/// assert_eq!(view.visible_rows().len(), 2);
/// ```
pub struct TableView {
    config: TableConfig,
    records: Vec<Record>,
    query: String,
    filters: ActiveFilters,
    sort: SortState,
    /// 1-indexed.
    page: usize,
    selection: Selection,
    loading: bool,
    row_actions: RowActions,
    on_bulk_action: Option<BulkCallback>,
}

impl TableView {
    /// Creates an empty view for the given config.
    pub fn new(config: TableConfig) -> Self {
        let selection = if config.selectable {
            Selection::multi()
        } else {
            Selection::none()
        };
        Self {
            config,
            records: Vec::new(),
            query: String::new(),
            filters: ActiveFilters::new(),
            sort: SortState::Unset,
            page: 1,
            selection,
            loading: false,
            row_actions: RowActions::new(),
            on_bulk_action: None,
        }
    }

    /// Sets the initial records (builder pattern).
    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        self.set_records(records);
        self
    }

    /// Sets the per-row action callbacks.
    pub fn with_row_actions(mut self, actions: RowActions) -> Self {
        self.row_actions = actions;
        self
    }

    /// Sets the bulk action callback.
    pub fn on_bulk_action<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&str, &[RecordId]) + Send + 'static,
    {
        self.on_bulk_action = Some(Box::new(callback));
        self
    }

    // =========================================================================
    // Inputs
    // =========================================================================

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Replaces the record collection.
    ///
    /// Selected ids that no longer exist in the new collection are dropped.
    /// The current page is kept as is.
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;
        let present: HashSet<RecordId> = self
            .records
            .iter()
            .filter_map(|r| r.record_id(&self.config.id_field).ok())
            .collect();
        let dropped = self.selection.retain(|id| present.contains(id));
        if dropped > 0 {
            log::debug!("dropped {} stale selected ids", dropped);
        }
        log::trace!("records set: {}", self.records.len());
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Sets the search query. Ignored when search is disabled.
    ///
    /// The current page is not reset.
    pub fn set_search(&mut self, query: impl Into<String>) {
        if !self.config.searchable {
            log::warn!("search ignored: table is not searchable");
            return;
        }
        self.query = query.into();
    }

    /// Selects a value for a filter. `FilterSelection::All` removes it.
    ///
    /// The current page is not reset.
    pub fn set_filter(&mut self, key: impl Into<String>, selection: FilterSelection) {
        self.filters.set(key, selection);
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    pub fn filters(&self) -> &ActiveFilters {
        &self.filters
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Handles a click on a column header.
    ///
    /// Returns `false` if the column is unknown or not sortable.
    pub fn toggle_sort(&mut self, key: &str) -> bool {
        let sortable = self
            .config
            .columns
            .iter()
            .any(|column| column.key == key && column.sortable);
        if !sortable {
            return false;
        }
        self.sort.toggle(key);
        true
    }

    /// Sets the sort state directly, bypassing the click cycle.
    pub fn set_sort(&mut self, sort: SortState) {
        self.sort = sort;
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Navigates to a 1-indexed page. Page 0 reads as page 1.
    ///
    /// The page is not clamped to the page count. Moving to another page
    /// clears the selection.
    pub fn set_page(&mut self, page: usize) {
        let page = page.max(1);
        if page != self.page {
            self.selection.clear();
        }
        self.page = page;
    }

    /// Moves to the next page if there is one.
    pub fn next_page(&mut self) -> bool {
        if self.page < self.total_pages() {
            self.set_page(self.page + 1);
            true
        } else {
            false
        }
    }

    /// Moves to the previous page if there is one.
    pub fn prev_page(&mut self) -> bool {
        if self.page > 1 {
            self.set_page(self.page - 1);
            true
        } else {
            false
        }
    }

    // =========================================================================
    // Pipeline
    // =========================================================================

    /// Rows after search, filters and sorting, before pagination.
    pub fn processed(&self) -> Vec<&Record> {
        let query = if self.config.searchable { self.query.as_str() } else { "" };
        let rows = search(&self.records, &self.config.columns, query);
        let rows = filter(rows, &self.filters);
        sort(rows, &self.sort)
    }

    pub fn processed_count(&self) -> usize {
        self.processed().len()
    }

    /// Rows shown on the current page.
    pub fn visible_rows(&self) -> Vec<&Record> {
        self.current_page(self.processed())
    }

    /// Ids of the rows shown on the current page.
    pub fn visible_ids(&self) -> Vec<RecordId> {
        self.ids_of(&self.visible_rows())
    }

    fn current_page<'a>(&self, processed: Vec<&'a Record>) -> Vec<&'a Record> {
        if !self.config.pagination {
            return processed;
        }
        page::paginate(&processed, self.page, self.config.page_size).to_vec()
    }

    fn ids_of(&self, rows: &[&Record]) -> Vec<RecordId> {
        rows.iter()
            .filter_map(|r| r.record_id(&self.config.id_field).ok())
            .collect()
    }

    pub fn total_pages(&self) -> usize {
        if self.config.pagination {
            page::total_pages(self.processed_count(), self.config.page_size)
        } else {
            1
        }
    }

    /// Footer numbers, `None` when pagination is off.
    pub fn summary(&self) -> Option<PageSummary> {
        self.config
            .pagination
            .then(|| PageSummary::new(self.page, self.config.page_size, self.processed_count()))
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_ids(&self) -> &[RecordId] {
        self.selection.ids()
    }

    /// Toggles one row's checkbox.
    ///
    /// Only rows on the current page can be toggled. Returns `false` and
    /// leaves the selection unchanged for any other id.
    pub fn toggle_row(&mut self, id: impl Into<RecordId>) -> bool {
        let id = id.into();
        if !self.visible_ids().contains(&id) {
            log::debug!("row {} is not on the current page", id);
            return false;
        }
        self.selection.toggle(id)
    }

    /// Header checkbox: selects or deselects the rows on the current page.
    pub fn select_all(&mut self, checked: bool) {
        let visible = self.visible_ids();
        self.selection.set_all(&visible, checked);
    }

    pub fn header_state(&self) -> HeaderCheckbox {
        self.selection.header_state(&self.visible_ids())
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Runs a row action on the record with the given id.
    ///
    /// Returns `false` if no record has that id or the action is not
    /// configured.
    pub fn trigger_row_action(&mut self, action: &RowAction, id: &RecordId) -> bool {
        let id_field = &self.config.id_field;
        let Some(record) = self
            .records
            .iter()
            .find(|r| r.record_id(id_field).is_ok_and(|rid| &rid == id))
        else {
            log::warn!("{} on unknown row {}", action, id);
            return false;
        };
        self.row_actions.dispatch(action, record)
    }

    /// Forwards a bulk action on the current selection to the callback,
    /// then clears the selection.
    ///
    /// Nothing is dispatched when the selection is empty or no callback is
    /// set. The outcome of the callback is not observed.
    pub fn trigger_bulk_action(&mut self, action: &str) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        let Some(callback) = self.on_bulk_action.as_mut() else {
            log::warn!("bulk action '{}' has no handler", action);
            return false;
        };
        log::debug!("bulk action '{}' on {} rows", action, self.selection.len());
        (*callback)(action, self.selection.ids());
        self.selection.clear();
        true
    }

    // =========================================================================
    // Render
    // =========================================================================

    /// Computes everything a front end needs to draw the table.
    pub fn render(&self) -> RenderedTable {
        let config = &self.config;
        let headers = config
            .columns
            .iter()
            .map(|column| HeaderCell {
                key: column.key.clone(),
                label: column.label.clone(),
                sortable: column.sortable,
                sorted: self.sort.direction_for(&column.key),
            })
            .collect();

        let filters = config
            .filter_options
            .iter()
            .map(|descriptor| RenderedFilter {
                descriptor: descriptor.clone(),
                selection: self.filters.get(&descriptor.key).clone(),
            })
            .collect();

        let actions = self.row_actions.available();
        let processed = self.processed();
        let processed_count = processed.len();
        let visible = self.current_page(processed);

        let body = if self.loading {
            TableBody::Loading {
                skeleton_rows: config.page_size,
            }
        } else if processed_count == 0 {
            TableBody::Empty {
                message: config.empty_message.clone(),
            }
        } else {
            let rows = visible
                .iter()
                .map(|record| {
                    let id = record.record_id(&config.id_field).ok();
                    RenderedRow {
                        selected: id.as_ref().is_some_and(|id| self.selection.is_selected(id)),
                        id,
                        cells: config.columns.iter().map(|c| c.display(record)).collect(),
                        actions: actions.clone(),
                    }
                })
                .collect();
            TableBody::Rows { rows }
        };

        let footer = (config.pagination && !self.loading && processed_count > 0).then(|| Footer {
            summary: PageSummary::new(self.page, config.page_size, processed_count),
            page: self.page,
            total_pages: page::total_pages(processed_count, config.page_size),
        });

        RenderedTable {
            headers,
            search_placeholder: config.searchable.then(|| config.search_placeholder.clone()),
            query: self.query.clone(),
            filters,
            select_all: self
                .selection
                .is_enabled()
                .then(|| self.selection.header_state(&self.ids_of(&visible))),
            show_actions: !actions.is_empty(),
            bulk_actions: config.bulk_actions.clone(),
            selected_count: self.selection.len(),
            body,
            footer,
        }
    }
}
