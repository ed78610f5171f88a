//! Tabular record views for admin consoles.
//!
//! A schema-agnostic table view model: search, categorical filters, column
//! sorting, pagination and row selection over an in-memory record collection,
//! with row and bulk actions delegated to caller-supplied callbacks.

pub mod config;
pub mod error;
pub mod model;
pub mod view;

pub use config::TableConfig;
pub use model::Record;
pub use model::RecordId;
pub use model::Value;
pub use view::TableView;
