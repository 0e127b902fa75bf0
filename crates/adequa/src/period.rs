//! Period window resolution with defaulting and bounds checks.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::diag::Diagnostic;
use crate::error::{AdequaError, Result};

/// Anchor year of the default full-year window. A template-calendar
/// convention: the default window never derives from the request's own
/// reference or climatic year.
const TEMPLATE_YEAR: i32 = 1900;

/// Dataset-wide constants the resolver consumes but does not own.
#[derive(Debug, Clone)]
pub struct PeriodBounds {
    /// Fixed date format of raw period strings (e.g. `%Y-%m-%d`).
    pub date_format: &'static str,
    /// Latest timestamp for which underlying data is guaranteed to exist.
    pub max_date: NaiveDateTime,
    /// Window length in days applied when no end is supplied.
    pub default_window_days: i64,
}

impl PeriodBounds {
    /// Build bounds from a calendar ceiling date (midnight time-of-day).
    pub fn new(date_format: &'static str, max_date: NaiveDate, default_window_days: i64) -> Self {
        Self {
            date_format,
            max_date: max_date.and_time(NaiveTime::MIN),
            default_window_days,
        }
    }
}

/// A fully resolved analysis window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPeriod {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Outcome of a successful resolution: the window plus any warnings the
/// caller should surface.
#[derive(Debug, Clone)]
pub struct PeriodResolution {
    pub period: ResolvedPeriod,
    pub warnings: Vec<Diagnostic>,
}

/// Resolve a possibly-partial period specification into concrete timestamps.
///
/// Defaulting policy, in order:
/// - no start: the full template-year window, January 1 through December 1 of
///   year 1900; a supplied end cannot anchor anything and is discarded with a
///   warning (start-undefined takes precedence);
/// - start without end: end defaults to `min(max_date, start + default window)`;
/// - both supplied: the end must be strictly after the start, otherwise the
///   fatal [`AdequaError::InvalidPeriodRange`] is returned.
///
/// All timestamps carry a zero time-of-day component.
pub fn resolve(
    start: Option<&str>,
    end: Option<&str>,
    bounds: &PeriodBounds,
) -> Result<PeriodResolution> {
    let Some(raw_start) = start else {
        let mut warnings = Vec::new();
        if let Some(raw_end) = end {
            warnings.push(Diagnostic::warning(format!(
                "period end {raw_end} cannot be used as period start is not defined; \
                 defaulting to the full template year"
            )));
        }
        return Ok(PeriodResolution {
            period: ResolvedPeriod {
                start: template_date(1, 1),
                end: template_date(12, 1),
            },
            warnings,
        });
    };

    let start_ts = parse_date(raw_start, "period_start", bounds.date_format)?;
    let end_ts = match end {
        None => bounds
            .max_date
            .min(start_ts + Duration::days(bounds.default_window_days)),
        Some(raw_end) => {
            let end_ts = parse_date(raw_end, "period_end", bounds.date_format)?;
            if end_ts <= start_ts {
                return Err(AdequaError::InvalidPeriodRange {
                    start: start_ts.format(bounds.date_format).to_string(),
                    end: end_ts.format(bounds.date_format).to_string(),
                });
            }
            end_ts
        }
    };

    Ok(PeriodResolution {
        period: ResolvedPeriod {
            start: start_ts,
            end: end_ts,
        },
        warnings: Vec::new(),
    })
}

fn template_date(month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(TEMPLATE_YEAR, month, day)
        .expect("template anchors are fixed valid dates")
        .and_time(NaiveTime::MIN)
}

fn parse_date(value: &str, field: &'static str, format: &str) -> Result<NaiveDateTime> {
    let date =
        NaiveDate::parse_from_str(value, format).map_err(|source| AdequaError::InvalidDate {
            field,
            value: value.to_string(),
            source,
        })?;
    Ok(date.and_time(NaiveTime::MIN))
}
