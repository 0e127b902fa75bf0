//! The analysis request descriptor and its validation flow.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::catalog::AnalysisKind;
use crate::diag::Diagnostic;
use crate::error::{AdequaError, Result};
use crate::period::{self, PeriodBounds, ResolvedPeriod};
use crate::schema::{FieldType, REQUEST_FIELDS, value_type_name};
use crate::typecheck::check_param_types;

/// Context label for request-level validation messages.
const PARAMS_CONTEXT: &str = "data analysis params (selecting the calc/plot to run)";

const DATA_SUBTYPE_KEY: &str = "data_subtype";
const PERIOD_START_KEY: &str = "period_start";
const PERIOD_END_KEY: &str = "period_end";

/// Analysis window state: raw bounds as supplied, or the resolved window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    /// Bounds as read from the raw parameters, not yet resolved.
    Unresolved {
        start: Option<String>,
        end: Option<String>,
    },
    /// Concrete window, populated exactly once by
    /// [`AnalysisRequest::resolve_period`].
    Resolved(ResolvedPeriod),
}

/// A validated request for one time-series analysis run.
///
/// Built from the raw parameter mapping supplied by the configuration loader,
/// validated against the declared schema and the catalogs, then period-resolved
/// before being handed to the execution engine.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRequest {
    pub analysis_type: AnalysisKind,
    pub data_type: String,
    pub data_subtype: Option<String>,
    pub country: String,
    pub year: i64,
    pub climatic_year: i64,
    pub period: Period,
}

impl AnalysisRequest {
    /// Build a descriptor from the raw parameter mapping.
    ///
    /// Runs [`AnalysisRequest::check_types`] first, then extracts the typed
    /// fields; the analysis kind is parsed against the catalog. Membership of
    /// `data_type` is checked separately via
    /// [`AnalysisRequest::check_data_type`], since the valid set is owned by
    /// the dataset configuration, not this crate. An empty `data_subtype`
    /// counts as absent, keeping the absent-or-non-empty invariant.
    pub fn from_params(params: &IndexMap<String, Value>) -> Result<Self> {
        Self::check_types(params)?;
        for spec in REQUEST_FIELDS.iter().filter(|spec| spec.required) {
            if !params.contains_key(spec.name) {
                return Err(AdequaError::MissingField {
                    field: spec.name,
                    context: PARAMS_CONTEXT.to_string(),
                });
            }
        }

        let analysis_type: AnalysisKind = require_str(params, "analysis_type")?.parse()?;
        let data_type = require_str(params, "data_type")?.to_string();
        let data_subtype = optional_str(params, DATA_SUBTYPE_KEY)?
            .filter(|subtype| !subtype.is_empty())
            .map(str::to_string);
        let country = require_str(params, "country")?.to_string();
        let year = require_int(params, "year")?;
        let climatic_year = require_int(params, "climatic_year")?;
        let period = Period::Unresolved {
            start: optional_str(params, PERIOD_START_KEY)?.map(str::to_string),
            end: optional_str(params, PERIOD_END_KEY)?.map(str::to_string),
        };

        Ok(Self {
            analysis_type,
            data_type,
            data_subtype,
            country,
            year,
            climatic_year,
            period,
        })
    }

    /// Check every supplied field against the declared schema.
    ///
    /// A null `data_subtype` counts as absent and is excluded from the check;
    /// any other supplied field must match its declared type.
    pub fn check_types(params: &IndexMap<String, Value>) -> Result<()> {
        let expected: IndexMap<&str, FieldType> = REQUEST_FIELDS
            .iter()
            .map(|spec| (spec.name, spec.field_type))
            .collect();
        let values: IndexMap<String, Value> = params
            .iter()
            .filter(|(name, value)| !(name.as_str() == DATA_SUBTYPE_KEY && value.is_null()))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        check_param_types(&values, &expected, PARAMS_CONTEXT)
    }

    /// Validate `data_type` membership against the externally supplied catalog.
    pub fn check_data_type(&self, available: &[&str]) -> Result<()> {
        if available.iter().any(|name| *name == self.data_type) {
            Ok(())
        } else {
            Err(AdequaError::UnknownDataType {
                value: self.data_type.clone(),
                valid: available.join(", "),
            })
        }
    }

    /// Resolve the analysis window, mutating the period state exactly once.
    ///
    /// Returns the warnings the resolution produced. Resolving an
    /// already-resolved period is a no-op. On error the period state is left
    /// untouched.
    pub fn resolve_period(&mut self, bounds: &PeriodBounds) -> Result<Vec<Diagnostic>> {
        let Period::Unresolved { start, end } = &self.period else {
            return Ok(Vec::new());
        };
        let resolution = period::resolve(start.as_deref(), end.as_deref(), bounds)?;
        self.period = Period::Resolved(resolution.period);
        Ok(resolution.warnings)
    }

    /// The resolved window, if [`AnalysisRequest::resolve_period`] has run.
    pub fn resolved_period(&self) -> Option<&ResolvedPeriod> {
        match &self.period {
            Period::Resolved(period) => Some(period),
            Period::Unresolved { .. } => None,
        }
    }

    /// Ordered lookup key for the full data type: `[data_type]` or
    /// `[data_type, data_subtype]`.
    ///
    /// Purely derived, always of length 1 or 2; the canonical key external
    /// data-loading collaborators use to locate the right dataset.
    pub fn full_datatype(&self) -> Vec<&str> {
        match &self.data_subtype {
            None => vec![self.data_type.as_str()],
            Some(subtype) => vec![self.data_type.as_str(), subtype.as_str()],
        }
    }
}

impl fmt::Display for AnalysisRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Data analysis request:")?;
        writeln!(f, "- analysis type: {}", self.analysis_type)?;
        match &self.data_subtype {
            Some(subtype) => writeln!(f, "- data type: {} (subtype {})", self.data_type, subtype)?,
            None => writeln!(f, "- data type: {}", self.data_type)?,
        }
        writeln!(f, "- country: {}", self.country)?;
        writeln!(f, "- year: {}", self.year)?;
        write!(f, "- climatic year: {}", self.climatic_year)
    }
}

fn require_str<'a>(params: &'a IndexMap<String, Value>, field: &'static str) -> Result<&'a str> {
    let value = params.get(field).ok_or(AdequaError::MissingField {
        field,
        context: PARAMS_CONTEXT.to_string(),
    })?;
    value
        .as_str()
        .ok_or_else(|| type_mismatch(field, FieldType::String, value))
}

fn optional_str<'a>(
    params: &'a IndexMap<String, Value>,
    field: &'static str,
) -> Result<Option<&'a str>> {
    match params.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_str()
            .map(Some)
            .ok_or_else(|| type_mismatch(field, FieldType::String, value)),
    }
}

fn require_int(params: &IndexMap<String, Value>, field: &'static str) -> Result<i64> {
    let value = params.get(field).ok_or(AdequaError::MissingField {
        field,
        context: PARAMS_CONTEXT.to_string(),
    })?;
    value
        .as_i64()
        .ok_or_else(|| type_mismatch(field, FieldType::Integer, value))
}

fn type_mismatch(field: &str, expected: FieldType, value: &Value) -> AdequaError {
    AdequaError::TypeMismatch {
        field: field.to_string(),
        expected: expected.name(),
        actual: value_type_name(value),
        context: PARAMS_CONTEXT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn params() -> IndexMap<String, Value> {
        IndexMap::from([
            ("analysis_type".to_string(), json!("calc")),
            ("data_type".to_string(), json!("load")),
            ("country".to_string(), json!("France")),
            ("year".to_string(), json!(2035)),
            ("climatic_year".to_string(), json!(1989)),
        ])
    }

    fn bounds() -> PeriodBounds {
        PeriodBounds::new("%Y-%m-%d", NaiveDate::from_ymd_opt(2035, 12, 31).unwrap(), 7)
    }

    #[test]
    fn test_from_valid_params() {
        let request = AnalysisRequest::from_params(&params()).unwrap();
        assert_eq!(request.analysis_type, AnalysisKind::Calc);
        assert_eq!(request.data_type, "load");
        assert_eq!(request.data_subtype, None);
        assert_eq!(request.country, "France");
        assert_eq!(request.year, 2035);
        assert_eq!(request.climatic_year, 1989);
        assert!(request.resolved_period().is_none());
    }

    #[test]
    fn test_null_subtype_counts_as_absent() {
        let mut raw = params();
        raw.insert(DATA_SUBTYPE_KEY.to_string(), Value::Null);
        let request = AnalysisRequest::from_params(&raw).unwrap();
        assert_eq!(request.data_subtype, None);
    }

    #[test]
    fn test_empty_subtype_counts_as_absent() {
        let mut raw = params();
        raw.insert(DATA_SUBTYPE_KEY.to_string(), json!(""));
        let request = AnalysisRequest::from_params(&raw).unwrap();
        assert_eq!(request.data_subtype, None);
        assert_eq!(request.full_datatype(), vec!["load"]);
    }

    #[test]
    fn test_non_string_subtype_is_a_type_mismatch() {
        let mut raw = params();
        raw.insert(DATA_SUBTYPE_KEY.to_string(), json!(12));
        let err = AnalysisRequest::from_params(&raw).unwrap_err();
        assert!(matches!(err, AdequaError::TypeMismatch { .. }));
    }

    #[test]
    fn test_missing_required_field() {
        let mut raw = params();
        raw.shift_remove("country");
        let err = AnalysisRequest::from_params(&raw).unwrap_err();
        assert!(matches!(
            err,
            AdequaError::MissingField { field: "country", .. }
        ));
    }

    #[test]
    fn test_non_string_period_bound_is_a_type_mismatch() {
        let mut raw = params();
        raw.insert(PERIOD_START_KEY.to_string(), json!(20350601));
        let err = AnalysisRequest::from_params(&raw).unwrap_err();
        assert!(matches!(err, AdequaError::TypeMismatch { .. }));
    }

    #[test]
    fn test_check_data_type_membership() {
        let request = AnalysisRequest::from_params(&params()).unwrap();
        assert!(request.check_data_type(&["load", "generation"]).is_ok());
        let err = request.check_data_type(&["generation"]).unwrap_err();
        assert!(err.to_string().contains("generation"));
    }

    #[test]
    fn test_resolve_period_is_a_one_shot_mutation() {
        let mut raw = params();
        raw.insert(PERIOD_START_KEY.to_string(), json!("2035-06-01"));
        let mut request = AnalysisRequest::from_params(&raw).unwrap();

        let warnings = request.resolve_period(&bounds()).unwrap();
        assert!(warnings.is_empty());
        let resolved = *request.resolved_period().unwrap();

        // Second call must not move the window.
        assert!(request.resolve_period(&bounds()).unwrap().is_empty());
        assert_eq!(request.resolved_period().unwrap(), &resolved);
    }

    #[test]
    fn test_full_datatype_with_subtype() {
        let mut raw = params();
        raw.insert(DATA_SUBTYPE_KEY.to_string(), json!("residential"));
        let request = AnalysisRequest::from_params(&raw).unwrap();
        assert_eq!(request.full_datatype(), vec!["load", "residential"]);
    }

    #[test]
    fn test_display_summary() {
        let mut raw = params();
        raw.insert(DATA_SUBTYPE_KEY.to_string(), json!("residential"));
        let request = AnalysisRequest::from_params(&raw).unwrap();
        let summary = request.to_string();
        assert!(summary.contains("- analysis type: calc"));
        assert!(summary.contains("- data type: load (subtype residential)"));
        assert!(summary.contains("- country: France"));
        assert!(summary.contains("- year: 2035"));
        assert!(summary.contains("- climatic year: 1989"));
    }
}
