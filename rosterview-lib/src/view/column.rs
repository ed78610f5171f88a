//! Column descriptors and cell formatting.

use std::fmt;
use std::sync::Arc;

use chrono::DateTime;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::model::Record;
use crate::model::Value;

/// Injected cell formatter, called with the raw field value and the whole row.
pub type CellRenderer = Arc<dyn Fn(&Value, &Record) -> String + Send + Sync>;

/// How a column turns a raw field value into display text.
///
/// Formatting only affects what is shown. Search, filters and sorting always
/// work on the raw value.
#[derive(Clone, Default, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellFormat {
    /// The value's display string.
    #[default]
    Raw,
    /// A number with a currency symbol and fixed decimals, e.g. `₹1500.00`.
    Currency {
        symbol: String,
        #[serde(default = "default_decimals")]
        decimals: u32,
    },
    /// A date-time or RFC 3339 / `YYYY-MM-DD` string, reformatted with a
    /// strftime pattern.
    Date { pattern: String },
    /// Booleans shown as custom words.
    Boolean { yes: String, no: String },
    /// Status-style badge: upper-cased and bracketed.
    Badge,
    /// Caller-supplied formatter.
    #[serde(skip)]
    Custom(CellRenderer),
}

fn default_decimals() -> u32 {
    2
}

impl fmt::Debug for CellFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellFormat::Raw => f.write_str("Raw"),
            CellFormat::Currency { symbol, decimals } => f
                .debug_struct("Currency")
                .field("symbol", symbol)
                .field("decimals", decimals)
                .finish(),
            CellFormat::Date { pattern } => {
                f.debug_struct("Date").field("pattern", pattern).finish()
            }
            CellFormat::Boolean { yes, no } => f
                .debug_struct("Boolean")
                .field("yes", yes)
                .field("no", no)
                .finish(),
            CellFormat::Badge => f.write_str("Badge"),
            CellFormat::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl CellFormat {
    /// Wraps a closure as a custom formatter.
    pub fn custom<F>(render: F) -> Self
    where
        F: Fn(&Value, &Record) -> String + Send + Sync + 'static,
    {
        CellFormat::Custom(Arc::new(render))
    }

    /// Formats a value for display. Null always renders as an empty cell.
    pub fn apply(&self, value: &Value, record: &Record) -> String {
        if let CellFormat::Custom(render) = self {
            return render(value, record);
        }
        if value.is_null() {
            return String::new();
        }

        match self {
            CellFormat::Raw | CellFormat::Custom(_) => value.to_display_string(),
            CellFormat::Currency { symbol, decimals } => format_currency(value, symbol, *decimals),
            CellFormat::Date { pattern } => format_date(value, pattern),
            CellFormat::Boolean { yes, no } => match value {
                Value::Bool(true) => yes.clone(),
                Value::Bool(false) => no.clone(),
                other => other.to_display_string(),
            },
            CellFormat::Badge => format!("[{}]", value.to_display_string().to_uppercase()),
        }
    }
}

fn format_currency(value: &Value, symbol: &str, decimals: u32) -> String {
    let places = decimals as usize;
    match value {
        Value::Decimal(d) => format!("{symbol}{:.places$}", d.round_dp(decimals)),
        Value::Int(n) => format!("{symbol}{:.places$}", Decimal::from(*n)),
        Value::Float(n) => format!("{symbol}{n:.places$}"),
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(n) => format!("{symbol}{n:.places$}"),
            Err(_) => s.clone(),
        },
        other => other.to_display_string(),
    }
}

fn format_date(value: &Value, pattern: &str) -> String {
    match value {
        Value::DateTime(dt) => dt.format(pattern).to_string(),
        Value::String(s) => {
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                dt.format(pattern).to_string()
            } else if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
                date.format(pattern).to_string()
            } else {
                s.clone()
            }
        }
        other => other.to_display_string(),
    }
}

/// A table column definition.
///
/// # Example
///
/// ```
/// use rosterview_lib::view::{CellFormat, Column};
///
/// let columns = vec![
///     Column::new("className", "Class").sortable(),
///     Column::new("fee", "Fee").sortable().format(CellFormat::Currency {
///         symbol: "₹".into(),
///         decimals: 2,
///     }),
///     Column::new("status", "Status").format(CellFormat::Badge),
/// ];
/// assert!(columns[0].sortable);
/// ```
#[derive(Clone, Debug, Deserialize)]
pub struct Column {
    /// Field name read from each record.
    pub key: String,
    /// Header text.
    pub label: String,
    /// Whether clicking the header re-sorts the table.
    #[serde(default)]
    pub sortable: bool,
    /// Display formatter.
    #[serde(default)]
    pub format: CellFormat,
}

impl Column {
    /// Create a new column with the given key and header label.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            format: CellFormat::Raw,
        }
    }

    /// Mark this column as sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set the display formatter.
    pub fn format(mut self, format: CellFormat) -> Self {
        self.format = format;
        self
    }

    /// Set a custom render function.
    pub fn render<F>(self, render: F) -> Self
    where
        F: Fn(&Value, &Record) -> String + Send + Sync + 'static,
    {
        self.format(CellFormat::custom(render))
    }

    /// The raw value this column reads from a record.
    pub fn raw_value<'a>(&self, record: &'a Record) -> &'a Value {
        record.get_or_null(&self.key)
    }

    /// The formatted cell text for a record.
    pub fn display(&self, record: &Record) -> String {
        self.format.apply(self.raw_value(record), record)
    }
}
