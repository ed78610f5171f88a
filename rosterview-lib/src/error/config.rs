//! ConfigError for table view configuration

/// Error type for loading and validating a [`TableConfig`](crate::TableConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid JSON for a table config.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The table has no columns to render.
    #[error("Table config must declare at least one column")]
    NoColumns,

    /// Page size must be positive.
    #[error("Page size must be greater than zero")]
    ZeroPageSize,

    /// Two columns read the same field.
    #[error("Column '{key}' is declared more than once")]
    DuplicateColumn { key: String },
}

impl ConfigError {
    /// Creates a new duplicate column error.
    pub fn duplicate_column(key: impl Into<String>) -> Self {
        Self::DuplicateColumn { key: key.into() }
    }
}
