//! Dataset-wide constants consumed by the request core.
//!
//! The core validates against these but does not own them: the date format,
//! the data ceiling, the default window length and the data-type catalog all
//! belong to the dataset configuration.

use adequa::PeriodBounds;
use chrono::NaiveDate;
use once_cell::sync::Lazy;

/// Fixed date format of period bounds in params files.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default analysis window length, in days.
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// Valid data-type names of the underlying ERAA datasets.
pub const AVAILABLE_DATA_TYPES: [&str; 4] = ["load", "generation", "exchanges", "res_capa_factors"];

/// Bounds handed to the period resolver. The ceiling is the latest date for
/// which every dataset is guaranteed to have values.
pub static PERIOD_BOUNDS: Lazy<PeriodBounds> = Lazy::new(|| {
    let max_date = NaiveDate::from_ymd_opt(2033, 12, 31).expect("ceiling is a fixed valid date");
    PeriodBounds::new(DATE_FORMAT, max_date, DEFAULT_WINDOW_DAYS)
});
