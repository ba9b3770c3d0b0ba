//----------------------------------------
// comparison errors
//----------------------------------------
use crate::error::TtcomputeErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ArgumentErr {
    #[error("sample {label} has {given} observation(s); at least {needed} required")]
    InsufficientSampleSize {
        label: String,
        given: usize,
        needed: usize,
    },
    #[error("sample {label} has a non-finite observation at index {index}")]
    NonFiniteObservation { label: String, index: usize },
    #[error("significance level should be in (0, 1); got {0}")]
    BadSignificanceLevel(f64),
    #[error(
        "alternative hypothesis should be one of \"two-sided\", \"less\", \"greater\"; got \"{0}\""
    )]
    UnrecognizedAlternative(String),
    #[error("variance assumption should be one of \"pooled\", \"welch\"; got \"{0}\"")]
    UnrecognizedVariance(String),
    #[error("hypothesized difference should be finite; got {0}")]
    BadHypothesizedDifference(f64),
}

impl From<ArgumentErr> for TtcomputeErr {
    fn from(err: ArgumentErr) -> TtcomputeErr {
        TtcomputeErr::InvalidArgument(err)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum DegeneracyErr {
    #[error("standard error of the mean difference is zero or negligible; got {0}")]
    ZeroStandardError(f64),
    #[error("standard error of the mean difference is not finite; got {0}")]
    NonFiniteStandardError(f64),
    #[error("t statistic is not finite; got {0}")]
    NonFiniteStatistic(f64),
    #[error("degrees of freedom should be positive and finite; got {0}")]
    BadDegreesOfFreedom(f64),
    #[error("distribution could not be evaluated: {0}")]
    DistributionFailure(String),
}

impl From<DegeneracyErr> for TtcomputeErr {
    fn from(err: DegeneracyErr) -> TtcomputeErr {
        TtcomputeErr::NumericDegeneracy(err)
    }
}
