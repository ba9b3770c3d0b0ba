//----------------------------------------
// report mod types
//----------------------------------------
use crate::comparison::types::TestResult;
use crate::summary::descriptive::{NonparametricSummary, ParametricSummary};

#[derive(Debug, PartialEq, Copy, Clone)]
pub struct NumberFormat {
    pub width: usize,
    pub decimals: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat {
            width: 7,
            decimals: 3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GroupSummary {
    pub label: String,
    pub parametric: ParametricSummary,
    pub nonparametric: NonparametricSummary,
}

/// Everything a two-sample t test report shows. The first result is the
/// requested test; any further results are shown as alternatives.
#[derive(Debug, Clone)]
pub struct Report {
    pub title: String,
    pub groups: Vec<GroupSummary>,
    pub significance_level: f64,
    pub hypothesized_difference: f64,
    pub results: Vec<TestResult>,
    pub format: NumberFormat,
}
