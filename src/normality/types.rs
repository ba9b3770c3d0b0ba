//----------------------------------------
// normality mod types
//----------------------------------------

/// Outcome of a normality test
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct NormalityResult {
    pub statistic: f64,
    pub p_value: f64,
}
