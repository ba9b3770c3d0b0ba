use crate::comparison::error::{ArgumentErr, DegeneracyErr};
use crate::distribution::noncentral_t::noncentral_t_cdf;
use crate::distribution::students_t::students_t_quantile;
use crate::error::TtcomputeErr;
use crate::hypothesis_type::AlternativeHypothesis;

/// Power of a t test: the probability that the statistic lands in the
/// rejection region when it follows a noncentral t distribution with the
/// given noncentrality and degrees of freedom.
///
/// For a post-hoc estimate the noncentrality is the observed standardized
/// mean difference, i.e. the t statistic itself.
pub fn t_test_power(
    noncentrality: f64,
    df: f64,
    significance_level: f64,
    alternative: AlternativeHypothesis,
) -> Result<f64, TtcomputeErr> {
    if !(significance_level > 0.0 && significance_level < 1.0) {
        return Err(ArgumentErr::BadSignificanceLevel(significance_level).into());
    }
    if !noncentrality.is_finite() {
        return Err(DegeneracyErr::NonFiniteStatistic(noncentrality).into());
    }
    if !(df.is_finite() && df > 0.0) {
        return Err(DegeneracyErr::BadDegreesOfFreedom(df).into());
    }

    let power = match alternative {
        AlternativeHypothesis::TwoSided => {
            let critical = critical_value(significance_level / 2.0, df)?;
            let upper = 1.0 - noncentral_cdf(critical, df, noncentrality)?;
            let lower = noncentral_cdf(-critical, df, noncentrality)?;
            upper + lower
        }
        AlternativeHypothesis::Greater => {
            let critical = critical_value(significance_level, df)?;
            1.0 - noncentral_cdf(critical, df, noncentrality)?
        }
        AlternativeHypothesis::Less => {
            let critical = critical_value(significance_level, df)?;
            noncentral_cdf(-critical, df, noncentrality)?
        }
    };
    Ok(power.clamp(0.0, 1.0))
}

/// Upper critical value t(1 - tail), taken from the lower tail so that tiny
/// significance levels do not round to a probability of one
fn critical_value(tail: f64, df: f64) -> Result<f64, TtcomputeErr> {
    students_t_quantile(tail, df)
        .map(|t| -t)
        .map_err(as_degeneracy)
}

fn noncentral_cdf(t: f64, df: f64, noncentrality: f64) -> Result<f64, TtcomputeErr> {
    noncentral_t_cdf(t, df, noncentrality).map_err(as_degeneracy)
}

// Arguments are checked before any distribution is evaluated, so a failure
// there means the numbers themselves could not be handled.
fn as_degeneracy(err: TtcomputeErr) -> TtcomputeErr {
    match err {
        TtcomputeErr::StudentsT(e) => DegeneracyErr::DistributionFailure(e.to_string()).into(),
        TtcomputeErr::NormalDist(e) => DegeneracyErr::DistributionFailure(e.to_string()).into(),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_of_example_samples() {
        let t = 2.2066971235586332;
        let two_sided = t_test_power(t, 18.0, 0.05, AlternativeHypothesis::TwoSided).unwrap();
        let less = t_test_power(t, 18.0, 0.05, AlternativeHypothesis::Less).unwrap();
        let greater = t_test_power(t, 18.0, 0.05, AlternativeHypothesis::Greater).unwrap();
        assert!((two_sided - 0.5510566836848744).abs() < 1e-6);
        assert!((less - 8.068361761393895e-05).abs() < 1e-8);
        assert!((greater - 0.6835840521967709).abs() < 1e-6);
    }

    #[test]
    fn null_effect_has_power_alpha() {
        for alternative in AlternativeHypothesis::ALL {
            let power = t_test_power(0.0, 25.0, 0.05, alternative).unwrap();
            assert!((power - 0.05).abs() < 1e-9);
        }
    }

    #[test]
    fn power_increases_with_effect() {
        let small = t_test_power(1.0, 20.0, 0.05, AlternativeHypothesis::TwoSided).unwrap();
        let large = t_test_power(3.0, 20.0, 0.05, AlternativeHypothesis::TwoSided).unwrap();
        assert!(large > small);
    }

    #[test]
    fn two_sided_power_symmetric_in_effect_sign() {
        let positive = t_test_power(1.8, 11.0, 0.1, AlternativeHypothesis::TwoSided).unwrap();
        let negative = t_test_power(-1.8, 11.0, 0.1, AlternativeHypothesis::TwoSided).unwrap();
        assert!((positive - negative).abs() < 1e-12);
    }

    #[test]
    fn one_sided_power_mirrors_under_sign_flip() {
        let greater = t_test_power(1.8, 11.0, 0.05, AlternativeHypothesis::Greater).unwrap();
        let less = t_test_power(-1.8, 11.0, 0.05, AlternativeHypothesis::Less).unwrap();
        assert!((greater - less).abs() < 1e-12);
    }

    #[test]
    fn tiny_significance_level() {
        let t = 2.2066971235586332;
        for alternative in AlternativeHypothesis::ALL {
            let power = t_test_power(t, 18.0, 1e-17, alternative).unwrap();
            assert!((0.0..1e-6).contains(&power));
        }
        let loose = t_test_power(t, 18.0, 1e-12, AlternativeHypothesis::TwoSided).unwrap();
        let strict = t_test_power(t, 18.0, 1e-17, AlternativeHypothesis::TwoSided).unwrap();
        assert!(strict <= loose);
    }

    #[test]
    fn extreme_significance_level_is_never_a_distribution_error() {
        for alternative in AlternativeHypothesis::ALL {
            match t_test_power(2.2, 18.0, 1e-300, alternative) {
                Ok(power) => assert!((0.0..=1.0).contains(&power)),
                Err(e) => assert!(e.is_degenerate()),
            }
        }
    }

    #[test]
    fn bad_significance_level() {
        if let Err(e) = t_test_power(1.0, 10.0, 1.0, AlternativeHypothesis::Less) {
            assert_eq!(
                String::from(
                    "invalid argument: significance level should be in (0, 1); got 1"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }
}
