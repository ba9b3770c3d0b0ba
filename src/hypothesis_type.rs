use crate::error::{ArgumentErr, TtcomputeErr};
use std::fmt;
use std::str::FromStr;

/// Alternative hypothesis about the mean of sample one relative to the mean
/// of sample two
#[derive(Default, Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum AlternativeHypothesis {
    /// The means differ
    #[default]
    TwoSided,
    /// Mean one is less than mean two
    Less,
    /// Mean one is greater than mean two
    Greater,
}

impl AlternativeHypothesis {
    pub const ALL: [AlternativeHypothesis; 3] = [
        AlternativeHypothesis::TwoSided,
        AlternativeHypothesis::Less,
        AlternativeHypothesis::Greater,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            AlternativeHypothesis::TwoSided => "two-sided",
            AlternativeHypothesis::Less => "less",
            AlternativeHypothesis::Greater => "greater",
        }
    }

    /// The same claim with the roles of the two samples exchanged
    pub fn swapped(&self) -> AlternativeHypothesis {
        match self {
            AlternativeHypothesis::TwoSided => AlternativeHypothesis::TwoSided,
            AlternativeHypothesis::Less => AlternativeHypothesis::Greater,
            AlternativeHypothesis::Greater => AlternativeHypothesis::Less,
        }
    }
}

impl FromStr for AlternativeHypothesis {
    type Err = TtcomputeErr;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "two-sided" => Ok(AlternativeHypothesis::TwoSided),
            "less" => Ok(AlternativeHypothesis::Less),
            "greater" => Ok(AlternativeHypothesis::Greater),
            _ => Err(ArgumentErr::UnrecognizedAlternative(tag.to_string()).into()),
        }
    }
}

impl fmt::Display for AlternativeHypothesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
