//! The tabular data view.
//!
//! The pipeline stages are plain functions over record references so each
//! one can be used and tested on its own:
//!
//! - [`search()`] - free-text match against the raw column values
//! - [`filter()`] - categorical filters, combined with AND
//! - [`sort()`] - stable sort on one field
//! - [`paginate()`] - 1-indexed page slicing
//!
//! [`TableView`] owns the inputs, wires the stages together and produces a
//! [`RenderedTable`] for front ends.

mod actions;
mod column;
mod filter;
mod page;
mod render;
mod search;
mod selection;
mod sort;
mod state;

pub use actions::*;
pub use column::*;
pub use filter::*;
pub use page::*;
pub use render::*;
pub use search::*;
pub use selection::*;
pub use sort::*;
pub use state::*;
