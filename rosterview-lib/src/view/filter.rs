//! Categorical filters.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::model::Record;

/// One selectable value of a filter.
///
/// Deserializes from either a bare string or a `{label, value}` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "OptionRepr")]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OptionRepr {
    Bare(String),
    Labeled { label: String, value: String },
}

impl From<OptionRepr> for FilterOption {
    fn from(repr: OptionRepr) -> Self {
        match repr {
            OptionRepr::Bare(value) => value.into(),
            OptionRepr::Labeled { label, value } => FilterOption::new(label, value),
        }
    }
}

impl FilterOption {
    /// Creates an option with a distinct label and value.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl From<String> for FilterOption {
    fn from(value: String) -> Self {
        Self {
            label: value.clone(),
            value,
        }
    }
}

impl From<&str> for FilterOption {
    fn from(value: &str) -> Self {
        value.to_string().into()
    }
}

/// A single-select filter over one record field.
///
/// # Example
///
/// ```
/// use rosterview_lib::view::{FilterDescriptor, FilterOption};
///
/// let status = FilterDescriptor::new("status", "Status")
///     .options(["Open", "Closed"])
///     .option(FilterOption::new("In progress", "in_progress"));
/// assert_eq!(status.options.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterDescriptor {
    /// Field name the filter tests.
    pub key: String,
    /// Display name.
    pub label: String,
    /// Selectable values, not counting the implicit "all".
    #[serde(default)]
    pub options: Vec<FilterOption>,
}

impl FilterDescriptor {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            options: Vec::new(),
        }
    }

    /// Adds one option.
    pub fn option(mut self, option: impl Into<FilterOption>) -> Self {
        self.options.push(option.into());
        self
    }

    /// Adds several options.
    pub fn options<I, O>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<FilterOption>,
    {
        self.options.extend(options.into_iter().map(Into::into));
        self
    }
}

/// Current selection of one filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum FilterSelection {
    /// No constraint.
    #[default]
    All,
    /// Keep records whose field equals this value, ignoring case.
    Value(String),
}

impl FilterSelection {
    /// Interprets a select-box value, where `"all"` means no constraint.
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value == "all" {
            FilterSelection::All
        } else {
            FilterSelection::Value(value.to_string())
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, FilterSelection::Value(_))
    }
}

/// Active selection per filter key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveFilters {
    selections: BTreeMap<String, FilterSelection>,
}

impl ActiveFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the selection for a key. Selecting `All` drops the constraint.
    pub fn set(&mut self, key: impl Into<String>, selection: FilterSelection) {
        let key = key.into();
        match selection {
            FilterSelection::All => {
                self.selections.remove(&key);
            }
            active => {
                self.selections.insert(key, active);
            }
        }
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, FilterSelection::Value(value.into()));
        self
    }

    /// Returns the selection for a key, `All` if none is set.
    pub fn get(&self, key: &str) -> &FilterSelection {
        static ALL: FilterSelection = FilterSelection::All;
        self.selections.get(key).unwrap_or(&ALL)
    }

    pub fn clear(&mut self) {
        self.selections.clear();
    }

    /// Number of constraining filters.
    pub fn active_count(&self) -> usize {
        self.selections.len()
    }

    /// Returns `true` if the record passes every active filter.
    pub fn matches(&self, record: &Record) -> bool {
        self.selections.iter().all(|(key, selection)| match selection {
            FilterSelection::All => true,
            FilterSelection::Value(wanted) => {
                record.get_or_null(key).to_display_string().to_lowercase() == wanted.to_lowercase()
            }
        })
    }
}

/// Keeps the records that pass every active filter, in input order.
pub fn filter<'a, I>(records: I, active: &ActiveFilters) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    let records: Vec<&Record> = records.into_iter().collect();
    if active.active_count() == 0 {
        return records;
    }

    let before = records.len();
    let kept: Vec<&Record> = records.into_iter().filter(|r| active.matches(r)).collect();
    log::debug!(
        "filter: {} active, kept {} of {} records",
        active.active_count(),
        kept.len(),
        before
    );
    kept
}
