use crate::comparison::error::ArgumentErr;
use crate::comparison::t_statistic::{directional_p_value, t_statistic};
use crate::comparison::types::{ComparisonSettings, TestResult};
use crate::error::TtcomputeErr;
use crate::hypothesis_type::AlternativeHypothesis;
use crate::normality::shapiro_wilk::shapiro_wilk;
use crate::normality::types::NormalityResult;
use crate::power::t_test_power::t_test_power;

const MIN_SAMPLE_SIZE: usize = 2;

/// Compares the means of two independent samples with a pooled-variance t
/// test and no hypothesized difference. See [`compare_with`].
pub fn compare(
    sample_one: &[f64],
    sample_two: &[f64],
    alternative: AlternativeHypothesis,
    significance_level: f64,
) -> Result<TestResult, TtcomputeErr> {
    compare_with(
        sample_one,
        sample_two,
        alternative,
        significance_level,
        &ComparisonSettings::default(),
    )
}

/// Compares the means of two independent samples.
///
/// The t statistic is always the two-sided one; `alternative` only decides
/// how its p-value is read and which rejection region power is computed for.
/// `significance_level` is used for power only. Each sample also gets a
/// Shapiro-Wilk normality check, reported as `None` when the test is not
/// defined for it (e.g. fewer than three observations).
///
/// Errors are `InvalidArgument` for malformed inputs, raised before any
/// computation, and `NumericDegeneracy` when the statistic is undefined.
pub fn compare_with(
    sample_one: &[f64],
    sample_two: &[f64],
    alternative: AlternativeHypothesis,
    significance_level: f64,
    settings: &ComparisonSettings,
) -> Result<TestResult, TtcomputeErr> {
    //----------------------------------------
    // Check arguments
    check_sample(sample_one, "one")?;
    check_sample(sample_two, "two")?;
    if !(significance_level > 0. && significance_level < 1.) {
        return Err(ArgumentErr::BadSignificanceLevel(significance_level).into());
    }
    if !settings.hypothesized_difference.is_finite() {
        return Err(ArgumentErr::BadHypothesizedDifference(settings.hypothesized_difference).into());
    }

    //----------------------------------------
    // Test statistic + p-value
    let stat = t_statistic(
        sample_one,
        sample_two,
        settings.variance,
        settings.hypothesized_difference,
    )?;
    let p_value = directional_p_value(stat.p_two_sided, stat.t, alternative);

    //----------------------------------------
    // Post-hoc power at the observed effect
    let power = t_test_power(stat.t, stat.df, significance_level, alternative)?;

    //----------------------------------------
    // Normality of each sample
    let normality_one = normality_if_defined(sample_one)?;
    let normality_two = normality_if_defined(sample_two)?;

    Ok(TestResult {
        alternative,
        variance: settings.variance,
        t_statistic: stat.t,
        degrees_of_freedom: stat.df,
        p_value,
        power,
        normality_one,
        normality_two,
    })
}

fn check_sample(sample: &[f64], label: &str) -> Result<(), TtcomputeErr> {
    if sample.len() < MIN_SAMPLE_SIZE {
        return Err(ArgumentErr::InsufficientSampleSize {
            label: label.to_string(),
            given: sample.len(),
            needed: MIN_SAMPLE_SIZE,
        }
        .into());
    }
    if let Some(index) = sample.iter().position(|x| !x.is_finite()) {
        return Err(ArgumentErr::NonFiniteObservation {
            label: label.to_string(),
            index,
        }
        .into());
    }
    Ok(())
}

fn normality_if_defined(sample: &[f64]) -> Result<Option<NormalityResult>, TtcomputeErr> {
    match shapiro_wilk(sample) {
        Ok(result) => Ok(Some(result)),
        Err(TtcomputeErr::Normality(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
