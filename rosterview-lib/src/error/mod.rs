//! Error types

mod config;
mod field;

pub use config::*;
pub use field::*;
