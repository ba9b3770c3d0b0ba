//----------------------------------------
// compute mod
//----------------------------------------
pub use crate::comparison::compare::{compare, compare_with};
pub use crate::comparison::types::{ComparisonSettings, TestResult, VarianceAssumption};
pub use crate::distribution::noncentral_t::noncentral_t_cdf;
pub use crate::distribution::std_normal::{std_normal_cdf, std_normal_pdf, std_normal_quantile};
pub use crate::distribution::students_t::{students_t_cdf, students_t_quantile, students_t_sf};
pub use crate::hypothesis_type::AlternativeHypothesis;
pub use crate::normality::shapiro_wilk::shapiro_wilk;
pub use crate::normality::types::NormalityResult;
pub use crate::power::t_test_power::t_test_power;
