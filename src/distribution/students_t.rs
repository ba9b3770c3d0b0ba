use crate::distribution::error::StudentsTErr;
use crate::error::TtcomputeErr;
use statrs::distribution::{Continuous, ContinuousCDF, StudentsT};

const NEWTON_STEPS: usize = 32;

fn standard_t(df: f64) -> Result<StudentsT, TtcomputeErr> {
    if df.is_nan() || df <= 0.0 {
        return Err(StudentsTErr::BadFreedom(df).into());
    }
    StudentsT::new(0.0, 1.0, df).map_err(|_| StudentsTErr::BadFreedom(df).into())
}

pub fn students_t_cdf(t: f64, df: f64) -> Result<f64, TtcomputeErr> {
    if t.is_nan() {
        return Err(StudentsTErr::NanArgument.into());
    }
    Ok(standard_t(df)?.cdf(t))
}

/// Upper tail probability, P(T > t)
pub fn students_t_sf(t: f64, df: f64) -> Result<f64, TtcomputeErr> {
    if t.is_nan() {
        return Err(StudentsTErr::NanArgument.into());
    }
    Ok(standard_t(df)?.sf(t))
}

/// Inverse cdf. Upper-tail probabilities are reflected into the lower tail,
/// where small probabilities such as `alpha / 2` stay representable.
pub fn students_t_quantile(p: f64, df: f64) -> Result<f64, TtcomputeErr> {
    if !(p > 0.0 && p < 1.0) {
        return Err(StudentsTErr::QuantileOutOfBounds(p).into());
    }
    let dist = standard_t(df)?;
    let t = if p == 0.5 {
        0.0
    } else if p > 0.5 {
        -lower_tail_quantile(&dist, 1.0 - p)
    } else {
        lower_tail_quantile(&dist, p)
    };
    if !t.is_finite() {
        return Err(StudentsTErr::NonFiniteQuantile(p).into());
    }
    Ok(t)
}

// statrs' inverse cdf, polished with Newton steps on ln F(t) - ln p, which
// stays well scaled in the polynomial tail. A step is only taken while it
// shrinks the residual.
fn lower_tail_quantile(dist: &StudentsT, p: f64) -> f64 {
    let log_p = p.ln();
    let residual_at = |t: f64| dist.cdf(t).ln() - log_p;
    let mut t = dist.inverse_cdf(p);
    let mut residual = residual_at(t);
    for _ in 0..NEWTON_STEPS {
        if !(t.is_finite() && residual.is_finite()) || residual == 0.0 {
            break;
        }
        let slope = dist.pdf(t) / dist.cdf(t);
        if !(slope > 0.0) {
            break;
        }
        let next = t - residual / slope;
        let next_residual = residual_at(next);
        if !(next.is_finite() && next_residual.abs() < residual.abs()) {
            break;
        }
        t = next;
        residual = next_residual;
    }
    t
}
