//----------------------------------------
// normality errors
//----------------------------------------
use crate::error::TtcomputeErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum NormalityErr {
    #[error("sample has {given} observation(s); at least {needed} required")]
    InsufficientSampleSize { given: usize, needed: usize },
    #[error("sample has zero range")]
    ZeroRange,
    #[error("sample has a non-finite observation at index {0}")]
    NonFiniteObservation(usize),
}

impl From<NormalityErr> for TtcomputeErr {
    fn from(err: NormalityErr) -> TtcomputeErr {
        TtcomputeErr::Normality(err)
    }
}
