use crate::comparison::error::DegeneracyErr;
use crate::comparison::types::VarianceAssumption;
use crate::distribution::students_t::students_t_sf;
use crate::error::TtcomputeErr;
use crate::hypothesis_type::AlternativeHypothesis;
use statrs::statistics::Statistics;

/// Two-sided t statistic for independent samples
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct TStatistic {
    pub t: f64,
    pub df: f64,
    pub standard_error: f64,
    pub p_two_sided: f64,
}

/// Computes t = (mean1 - mean2 - d0) / se along with its degrees of freedom
/// and two-sided p-value.
///
/// Both samples are assumed to hold at least two finite observations.
pub fn t_statistic(
    sample_one: &[f64],
    sample_two: &[f64],
    variance: VarianceAssumption,
    hypothesized_difference: f64,
) -> Result<TStatistic, TtcomputeErr> {
    let n_one = sample_one.len() as f64;
    let n_two = sample_two.len() as f64;
    let mean_one = Statistics::mean(sample_one);
    let mean_two = Statistics::mean(sample_two);
    let var_one = Statistics::variance(sample_one);
    let var_two = Statistics::variance(sample_two);

    //----------------------------------------
    // Standard error of the mean difference
    let standard_error = match variance {
        VarianceAssumption::Pooled => {
            let pooled_var =
                ((n_one - 1.) * var_one + (n_two - 1.) * var_two) / (n_one + n_two - 2.);
            (pooled_var * (1. / n_one + 1. / n_two)).sqrt()
        }
        VarianceAssumption::Welch => (var_one / n_one + var_two / n_two).sqrt(),
    };
    if !standard_error.is_finite() {
        return Err(DegeneracyErr::NonFiniteStandardError(standard_error).into());
    }
    let scale = mean_one.abs().max(mean_two.abs());
    if standard_error <= f64::EPSILON * scale {
        return Err(DegeneracyErr::ZeroStandardError(standard_error).into());
    }

    let t = (mean_one - mean_two - hypothesized_difference) / standard_error;
    if !t.is_finite() {
        return Err(DegeneracyErr::NonFiniteStatistic(t).into());
    }

    //----------------------------------------
    // Degrees of freedom
    let df = match variance {
        VarianceAssumption::Pooled => n_one + n_two - 2.,
        VarianceAssumption::Welch => {
            // Welch-Satterthwaite
            let v_one = var_one / n_one;
            let v_two = var_two / n_two;
            (v_one + v_two).powi(2) / (v_one * v_one / (n_one - 1.) + v_two * v_two / (n_two - 1.))
        }
    };
    if !(df.is_finite() && df > 0.) {
        return Err(DegeneracyErr::BadDegreesOfFreedom(df).into());
    }

    let p_two_sided = (2. * students_t_sf(t.abs(), df)?).min(1.);
    Ok(TStatistic {
        t,
        df,
        standard_error,
        p_two_sided,
    })
}

/// Converts a two-sided p-value into the p-value for `alternative`.
///
/// A directional p-value is half the two-sided one only when the observed
/// difference points the way the alternative claims; otherwise it is the
/// complement.
pub fn directional_p_value(p_two_sided: f64, t: f64, alternative: AlternativeHypothesis) -> f64 {
    match alternative {
        AlternativeHypothesis::TwoSided => p_two_sided,
        AlternativeHypothesis::Greater if t >= 0. => p_two_sided / 2.,
        AlternativeHypothesis::Less if t <= 0. => p_two_sided / 2.,
        AlternativeHypothesis::Greater | AlternativeHypothesis::Less => 1. - p_two_sided / 2.,
    }
}
