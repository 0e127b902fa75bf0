//! Adequa: validated analysis request descriptors for ERAA time-series datasets.
//!
//! An [`AnalysisRequest`] names what to run (an aggregate calculation or one of
//! several plot styles), over which data type, country, reference year and
//! climatic-year scenario, and over which time window. It is built from the raw
//! parameter mapping supplied by a configuration loader, then explicitly
//! validated and period-resolved before being handed to the execution engine.
//!
//! # Example
//!
//! ```
//! use adequa::{AnalysisRequest, PeriodBounds};
//! use chrono::NaiveDate;
//! use indexmap::IndexMap;
//! use serde_json::json;
//!
//! let mut params = IndexMap::new();
//! params.insert("analysis_type".to_string(), json!("plot"));
//! params.insert("data_type".to_string(), json!("load"));
//! params.insert("country".to_string(), json!("France"));
//! params.insert("year".to_string(), json!(2035));
//! params.insert("climatic_year".to_string(), json!(1989));
//! params.insert("period_start".to_string(), json!("2035-06-01"));
//!
//! let mut request = AnalysisRequest::from_params(&params).unwrap();
//! request.check_data_type(&["load", "generation"]).unwrap();
//!
//! let ceiling = NaiveDate::from_ymd_opt(2035, 12, 31).unwrap();
//! let warnings = request
//!     .resolve_period(&PeriodBounds::new("%Y-%m-%d", ceiling, 7))
//!     .unwrap();
//! assert!(warnings.is_empty());
//! assert_eq!(request.full_datatype(), vec!["load"]);
//! ```

pub mod catalog;
pub mod diag;
pub mod error;
pub mod period;
pub mod request;
pub mod schema;
pub mod typecheck;

pub use catalog::AnalysisKind;
pub use diag::{Diagnostic, Severity};
pub use error::{AdequaError, Result};
pub use period::{PeriodBounds, PeriodResolution, ResolvedPeriod};
pub use request::{AnalysisRequest, Period};
pub use schema::{FieldSpec, FieldType, REQUEST_FIELDS};
pub use typecheck::check_param_types;
