//! Column sorting.

use std::cmp::Ordering;

use serde::Serialize;

use crate::model::Record;
use crate::model::Value;

/// Sort direction for ordering rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Parses `asc` / `desc` (any case).
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(Direction::Asc),
            "desc" | "descending" => Some(Direction::Desc),
            _ => None,
        }
    }
}

/// Current ordering of the table.
///
/// # Example
///
/// ```
/// use rosterview_lib::view::{Direction, SortState};
///
/// let mut sort = SortState::Unset;
/// sort.toggle("amount");
/// assert_eq!(sort.direction_for("amount"), Some(Direction::Asc));
/// sort.toggle("amount");
/// assert_eq!(sort.direction_for("amount"), Some(Direction::Desc));
/// sort.toggle("amount");
/// assert_eq!(sort, SortState::Unset);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SortState {
    /// Input order is kept.
    #[default]
    Unset,
    /// Ordered by one field.
    By { key: String, direction: Direction },
}

impl SortState {
    /// Creates an ascending sort on a field.
    pub fn asc(key: impl Into<String>) -> Self {
        SortState::By {
            key: key.into(),
            direction: Direction::Asc,
        }
    }

    /// Creates a descending sort on a field.
    pub fn desc(key: impl Into<String>) -> Self {
        SortState::By {
            key: key.into(),
            direction: Direction::Desc,
        }
    }

    /// Advances the state as a header click on `key` would.
    ///
    /// The same key cycles ascending, descending, unset. A different key
    /// starts over at ascending.
    pub fn toggle(&mut self, key: &str) {
        let next = match &*self {
            SortState::By { key: current, direction } if current == key => match direction {
                Direction::Asc => SortState::desc(key),
                Direction::Desc => SortState::Unset,
            },
            _ => SortState::asc(key),
        };
        log::trace!("sort {:?} -> {:?}", self, next);
        *self = next;
    }

    /// Returns the direction if the table is sorted by `key`.
    pub fn direction_for(&self, key: &str) -> Option<Direction> {
        match self {
            SortState::By { key: current, direction } if current == key => Some(*direction),
            _ => None,
        }
    }

    /// Sorts rows in place. Stable: equal rows keep their relative order.
    pub fn apply(&self, rows: &mut [&Record]) {
        if let SortState::By { key, direction } = self {
            rows.sort_by(|a, b| {
                let ordering = compare_values(a.get_or_null(key), b.get_or_null(key));
                match direction {
                    Direction::Asc => ordering,
                    Direction::Desc => ordering.reverse(),
                }
            });
        }
    }
}

/// Rank used to keep the comparison total across mixed value kinds.
fn rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        v if v.is_numeric() => 1,
        _ => 2,
    }
}

/// Compares two raw field values.
///
/// Numbers compare numerically, everything else by display string. Null
/// sorts first, then numbers, then the rest.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    rank(a).cmp(&rank(b)).then_with(|| match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        _ => a.to_display_string().cmp(&b.to_display_string()),
    })
}

/// Returns the rows ordered by the sort state.
pub fn sort<'a>(mut rows: Vec<&'a Record>, state: &SortState) -> Vec<&'a Record> {
    state.apply(&mut rows);
    rows
}
