//! Client-side list helpers: predicate filtering, pagination, CSV export.
//!
//! None of these operations fail. Malformed payloads decode to empty lists
//! (see [`records_from_value`]) and out-of-range pages are empty slices.

mod export;
mod filter;
mod paginate;
mod records;

pub use export::{Column, export_filename, to_csv};
pub use filter::{DateRange, PredicateSet, filter_records};
pub use mejora_client::records_from_value;
pub use paginate::{page_count, paginate};

use chrono::{DateTime, Utc};

/// A fetched record seen through the projection the filters operate on.
pub trait ListRecord {
    /// Fields the free-text search matches against.
    fn search_fields(&self) -> Vec<&str>;

    /// Value of a categorical field, compared by exact match.
    fn category(&self, field: &str) -> Option<&str>;

    /// Timestamp used by date-range predicates.
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        None
    }
}
