//----------------------------------------
// comparison mod types
//----------------------------------------
use crate::error::{ArgumentErr, TtcomputeErr};
use crate::hypothesis_type::AlternativeHypothesis;
use crate::normality::types::NormalityResult;
use std::fmt;
use std::str::FromStr;

/// How the variance of the mean difference is estimated
#[derive(Default, Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum VarianceAssumption {
    /// Equal population variances; one pooled estimate, n1 + n2 - 2
    /// degrees of freedom
    #[default]
    Pooled,
    /// Unequal population variances; Welch-Satterthwaite degrees of freedom
    Welch,
}

impl VarianceAssumption {
    pub fn tag(&self) -> &'static str {
        match self {
            VarianceAssumption::Pooled => "pooled",
            VarianceAssumption::Welch => "welch",
        }
    }
}

impl FromStr for VarianceAssumption {
    type Err = TtcomputeErr;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "pooled" => Ok(VarianceAssumption::Pooled),
            "welch" => Ok(VarianceAssumption::Welch),
            _ => Err(ArgumentErr::UnrecognizedVariance(tag.to_string()).into()),
        }
    }
}

impl fmt::Display for VarianceAssumption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Default, Debug, PartialEq, Copy, Clone)]
pub struct ComparisonSettings {
    pub variance: VarianceAssumption,
    /// Mean one minus mean two under the null hypothesis
    pub hypothesized_difference: f64,
}

#[derive(Debug, PartialEq, Copy, Clone)]
pub struct TestResult {
    pub alternative: AlternativeHypothesis,
    pub variance: VarianceAssumption,
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
    pub power: f64,
    /// `None` when the normality test is undefined for sample one
    pub normality_one: Option<NormalityResult>,
    /// `None` when the normality test is undefined for sample two
    pub normality_two: Option<NormalityResult>,
}
