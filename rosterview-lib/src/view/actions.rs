//! Row and bulk actions.
//!
//! The table never mutates records itself. Row actions and bulk actions are
//! forwarded to caller-supplied callbacks, which talk to the backend.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::model::Record;
use crate::model::RecordId;

/// Callback for a per-row action.
pub type RowCallback = Box<dyn FnMut(&Record) + Send>;

/// Callback for a bulk action: action id and the selected row ids.
pub type BulkCallback = Box<dyn FnMut(&str, &[RecordId]) + Send>;

/// An action offered in a row's actions menu.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowAction {
    View,
    Edit,
    Delete,
    Custom(String),
}

impl RowAction {
    pub fn label(&self) -> &str {
        match self {
            RowAction::View => "View",
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
            RowAction::Custom(name) => name,
        }
    }
}

impl fmt::Display for RowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The set of per-row callbacks. Any one present shows the actions column.
///
/// # Example
///
/// ```
/// use rosterview_lib::view::{RowAction, RowActions};
///
/// let actions = RowActions::new()
///     .on_edit(|record| println!("edit {:?}", record.get("id")))
///     .on_delete(|record| println!("delete {:?}", record.get("id")))
///     .custom("Print pass", |_| {});
///
/// assert_eq!(
///     actions.available(),
///     vec![RowAction::Edit, RowAction::Delete, RowAction::Custom("Print pass".into())]
/// );
/// ```
#[derive(Default)]
pub struct RowActions {
    view: Option<RowCallback>,
    edit: Option<RowCallback>,
    delete: Option<RowCallback>,
    custom: Vec<(String, RowCallback)>,
}

impl fmt::Debug for RowActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowActions")
            .field("available", &self.available())
            .finish()
    }
}

impl RowActions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_view<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Record) + Send + 'static,
    {
        self.view = Some(Box::new(callback));
        self
    }

    pub fn on_edit<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Record) + Send + 'static,
    {
        self.edit = Some(Box::new(callback));
        self
    }

    pub fn on_delete<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Record) + Send + 'static,
    {
        self.delete = Some(Box::new(callback));
        self
    }

    /// Adds a named custom action after the built-in ones.
    pub fn custom<F>(mut self, name: impl Into<String>, callback: F) -> Self
    where
        F: FnMut(&Record) + Send + 'static,
    {
        self.custom.push((name.into(), Box::new(callback)));
        self
    }

    /// Returns `true` when no row action is configured.
    pub fn is_empty(&self) -> bool {
        self.view.is_none() && self.edit.is_none() && self.delete.is_none() && self.custom.is_empty()
    }

    /// Actions in menu order: view, edit, delete, then custom ones.
    pub fn available(&self) -> Vec<RowAction> {
        let mut actions = Vec::new();
        if self.view.is_some() {
            actions.push(RowAction::View);
        }
        if self.edit.is_some() {
            actions.push(RowAction::Edit);
        }
        if self.delete.is_some() {
            actions.push(RowAction::Delete);
        }
        actions.extend(self.custom.iter().map(|(name, _)| RowAction::Custom(name.clone())));
        actions
    }

    /// Invokes the callback for an action. Returns `false` if the action is
    /// not configured.
    pub fn dispatch(&mut self, action: &RowAction, record: &Record) -> bool {
        let callback = match action {
            RowAction::View => self.view.as_mut(),
            RowAction::Edit => self.edit.as_mut(),
            RowAction::Delete => self.delete.as_mut(),
            RowAction::Custom(name) => self
                .custom
                .iter_mut()
                .find(|(custom, _)| custom == name)
                .map(|(_, callback)| callback),
        };
        match callback {
            Some(callback) => {
                (*callback)(record);
                true
            }
            None => false,
        }
    }
}

/// A bulk operation offered for the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkAction {
    /// Identifier passed to the bulk callback.
    pub id: String,
    /// Button text.
    pub label: String,
}

impl BulkAction {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

impl From<&str> for BulkAction {
    fn from(id: &str) -> Self {
        Self::new(id, id)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn test_empty_actions() {
        let actions = RowActions::new();
        assert!(actions.is_empty());
        assert!(actions.available().is_empty());
    }

    #[test]
    fn test_dispatch_reaches_callback() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut actions = RowActions::new().on_view(move |record| {
            sink.lock().unwrap().push(record.get_int("id").unwrap());
        });

        let record = Record::new().set("id", 4);
        assert!(actions.dispatch(&RowAction::View, &record));
        assert!(!actions.dispatch(&RowAction::Delete, &record));
        assert_eq!(*seen.lock().unwrap(), vec![Some(4)]);
    }

    #[test]
    fn test_custom_action_by_name() {
        let hits = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&hits);
        let mut actions = RowActions::new().custom("Approve", move |_| {
            *counter.lock().unwrap() += 1;
        });

        let record = Record::new();
        assert!(actions.dispatch(&RowAction::Custom("Approve".into()), &record));
        assert!(!actions.dispatch(&RowAction::Custom("Reject".into()), &record));
        assert_eq!(*hits.lock().unwrap(), 1);
    }
}
