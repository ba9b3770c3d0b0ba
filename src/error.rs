//----------------------------------------
// Crate error type
//----------------------------------------
pub use crate::comparison::error::{ArgumentErr, DegeneracyErr};
pub use crate::data::error::DataLoadErr;
pub use crate::distribution::error::{NormalDistErr, StudentsTErr};
pub use crate::normality::error::NormalityErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum TtcomputeErr {
    #[error("invalid argument: {0}")]
    InvalidArgument(ArgumentErr),
    #[error("numeric degeneracy: {0}")]
    NumericDegeneracy(DegeneracyErr),
    #[error("while evaluating normal distribution: {0}")]
    NormalDist(NormalDistErr),
    #[error("while evaluating Student's t distribution: {0}")]
    StudentsT(StudentsTErr),
    #[error("while computing normality test: {0}")]
    Normality(NormalityErr),
    #[error("while loading grouped data: {0}")]
    DataLoad(DataLoadErr),
}

impl TtcomputeErr {
    /// True when the inputs were well formed but the arithmetic could not
    /// produce a defined statistic
    pub fn is_degenerate(&self) -> bool {
        matches!(self, TtcomputeErr::NumericDegeneracy(_))
    }
}
