//! Table view configuration

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::model::Record;
use crate::view::BulkAction;
use crate::view::Column;
use crate::view::FilterDescriptor;

fn default_searchable() -> bool {
    true
}

fn default_search_placeholder() -> String {
    "Search...".to_string()
}

fn default_page_size() -> usize {
    10
}

fn default_pagination() -> bool {
    true
}

fn default_empty_message() -> String {
    "No data found".to_string()
}

fn default_id_field() -> String {
    "id".to_string()
}

/// Configuration of one table: columns, filters and behaviour flags.
///
/// Each admin screen declares its own config. Field names follow the
/// camelCase used by screen definitions in JSON.
///
/// # Example
///
/// ```
/// use rosterview_lib::TableConfig;
/// use rosterview_lib::view::{Column, FilterDescriptor};
///
/// let config = TableConfig::new(vec![
///     Column::new("title", "Title").sortable(),
///     Column::new("status", "Status"),
/// ])
/// .with_filter(FilterDescriptor::new("status", "Status").options(["Open", "Closed"]))
/// .with_selectable(true)
/// .with_page_size(25);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    /// Columns in display order.
    pub columns: Vec<Column>,

    /// Single-select filters shown above the table.
    #[serde(default)]
    pub filter_options: Vec<FilterDescriptor>,

    /// Whether the free-text search box is shown.
    ///
    /// Default: true
    #[serde(default = "default_searchable")]
    pub searchable: bool,

    /// Default: "Search..."
    #[serde(default = "default_search_placeholder")]
    pub search_placeholder: String,

    /// Whether rows carry selection checkboxes.
    #[serde(default)]
    pub selectable: bool,

    /// Default: 10
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Whether rows are split into pages.
    ///
    /// Default: true
    #[serde(default = "default_pagination")]
    pub pagination: bool,

    /// Shown when search and filters leave no rows.
    ///
    /// Default: "No data found"
    #[serde(default = "default_empty_message")]
    pub empty_message: String,

    /// Field holding each record's stable identifier.
    ///
    /// Default: "id"
    #[serde(default = "default_id_field")]
    pub id_field: String,

    /// Operations offered for the selected rows.
    #[serde(default)]
    pub bulk_actions: Vec<BulkAction>,
}

impl TableConfig {
    /// Creates a config with the given columns and default settings.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            filter_options: Vec::new(),
            searchable: default_searchable(),
            search_placeholder: default_search_placeholder(),
            selectable: false,
            page_size: default_page_size(),
            pagination: default_pagination(),
            empty_message: default_empty_message(),
            id_field: default_id_field(),
            bulk_actions: Vec::new(),
        }
    }

    /// Derives plain sortable columns from the fields present in `records`.
    ///
    /// The id field comes first, the rest in name order.
    pub fn from_records(records: &[Record]) -> Self {
        let id_field = default_id_field();
        let mut keys: Vec<&str> = records
            .iter()
            .flat_map(|r| r.fields().keys().map(String::as_str))
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        keys.sort_unstable_by_key(|key| (*key != id_field, *key));

        let columns = keys.into_iter().map(|key| Column::new(key, key).sortable()).collect();
        Self::new(columns)
    }

    /// Parses and validates a config from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("loading table config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Checks the config can drive a table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns.is_empty() {
            return Err(ConfigError::NoColumns);
        }
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }

        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.key.as_str()) {
                return Err(ConfigError::duplicate_column(&column.key));
            }
        }

        for filter in &self.filter_options {
            if !seen.contains(filter.key.as_str()) {
                log::warn!("filter '{}' targets a field with no column", filter.key);
            }
        }
        Ok(())
    }

    pub fn with_filter(mut self, filter: FilterDescriptor) -> Self {
        self.filter_options.push(filter);
        self
    }

    pub fn with_searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    pub fn with_search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    pub fn with_selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_pagination(mut self, pagination: bool) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn with_id_field(mut self, id_field: impl Into<String>) -> Self {
        self.id_field = id_field.into();
        self
    }

    pub fn with_bulk_action(mut self, action: impl Into<BulkAction>) -> Self {
        self.bulk_actions.push(action.into());
        self
    }
}
