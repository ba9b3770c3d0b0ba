//----------------------------------------
// distribution errors
//----------------------------------------
use crate::error::TtcomputeErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum NormalDistErr {
    #[error("arguments to quantile function should be in [0, 1]; got {0}")]
    QuantileOutOfBounds(f64),
}

impl From<NormalDistErr> for TtcomputeErr {
    fn from(err: NormalDistErr) -> TtcomputeErr {
        TtcomputeErr::NormalDist(err)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum StudentsTErr {
    #[error("degrees of freedom should be positive; got {0}")]
    BadFreedom(f64),
    #[error("arguments to quantile function should be in (0, 1); got {0}")]
    QuantileOutOfBounds(f64),
    #[error("quantile for probability {0} is not finite")]
    NonFiniteQuantile(f64),
    #[error("argument should not be NaN")]
    NanArgument,
}

impl From<StudentsTErr> for TtcomputeErr {
    fn from(err: StudentsTErr) -> TtcomputeErr {
        TtcomputeErr::StudentsT(err)
    }
}
