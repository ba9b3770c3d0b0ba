//----------------------------------------
// data errors
//----------------------------------------
use crate::error::TtcomputeErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DataLoadErr {
    #[error("malformed csv at row {row}: {message}")]
    Csv { row: usize, message: String },
    #[error("column \"{column}\" not found; available columns: {available:?}")]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },
    #[error("value \"{value}\" at row {row} is not a number")]
    BadValue { row: usize, value: String },
    #[error("group level \"{0}\" not found")]
    MissingLevel(String),
    #[error("need at least two group levels; found {0}")]
    TooFewLevels(usize),
}

impl From<DataLoadErr> for TtcomputeErr {
    fn from(err: DataLoadErr) -> TtcomputeErr {
        TtcomputeErr::DataLoad(err)
    }
}
