//! Catalog of recognized analysis operations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AdequaError;

/// Kind of analysis to run over the selected dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    /// Aggregate calculation over the selected window.
    Calc,
    /// Plain time-series plot.
    Plot,
    /// Duration-curve plot (values sorted in decreasing order).
    PlotDurationCurve,
    /// Rolling-horizon average plot.
    PlotRollingHorizonAvg,
}

impl AnalysisKind {
    /// Every recognized kind, in canonical order.
    pub const ALL: [AnalysisKind; 4] = [
        AnalysisKind::Calc,
        AnalysisKind::Plot,
        AnalysisKind::PlotDurationCurve,
        AnalysisKind::PlotRollingHorizonAvg,
    ];

    /// The config-file name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisKind::Calc => "calc",
            AnalysisKind::Plot => "plot",
            AnalysisKind::PlotDurationCurve => "plot_duration_curve",
            AnalysisKind::PlotRollingHorizonAvg => "plot_rolling_horizon_avg",
        }
    }

    /// Flat list of valid kind names, for membership checks and error messages.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|kind| kind.as_str()).collect()
    }

    /// True for the plotting kinds.
    pub fn is_plot(&self) -> bool {
        !matches!(self, AnalysisKind::Calc)
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisKind {
    type Err = AdequaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| AdequaError::UnknownAnalysisType {
                value: s.to_string(),
                valid: Self::names().join(", "),
            })
    }
}
