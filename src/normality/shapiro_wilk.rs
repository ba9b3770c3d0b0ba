use crate::distribution::std_normal::{std_normal_quantile, std_normal_sf};
use crate::error::TtcomputeErr;
use crate::normality::error::NormalityErr;
use crate::normality::types::NormalityResult;

pub const MIN_SAMPLE_SIZE: usize = 3;
/// Largest sample for which Royston's p-value approximation was fitted.
/// Larger samples still get W and a p-value, the latter less exact.
pub const MAX_FITTED_SAMPLE_SIZE: usize = 5000;

const SMALL: f64 = 1e-19;
// Reported for n <= 11 when W is far below any tabulated value
const TINY_P_VALUE: f64 = 1e-99;

// Royston (1995), Algorithm AS R94 polynomial coefficients
const C1: [f64; 6] = [0.0, 0.221157, -0.147981, -2.071190, 4.434685, -2.706056];
const C2: [f64; 6] = [0.0, 0.042981, -0.293762, -1.752461, 5.682633, -3.582633];
const C3: [f64; 4] = [0.5440, -0.39978, 0.025054, -6.714e-4];
const C4: [f64; 4] = [1.3822, -0.77857, 0.062767, -0.0020322];
const C5: [f64; 4] = [-1.5861, -0.31082, -0.083751, 0.0038915];
const C6: [f64; 3] = [-0.4803, -0.082676, 0.0030302];
const G: [f64; 2] = [-2.273, 0.459];

/// Shapiro-Wilk test of the null hypothesis that `sample` was drawn from a
/// normal distribution.
///
/// Follows Royston's AS R94: the first one or two coefficients come from
/// polynomial approximations in 1/sqrt(n), the rest from normalized Blom
/// scores, and the p-value from a normalizing transform of W. Needs at least
/// three observations; above [`MAX_FITTED_SAMPLE_SIZE`] the p-value is an
/// extrapolation.
pub fn shapiro_wilk(sample: &[f64]) -> Result<NormalityResult, TtcomputeErr> {
    let n = sample.len();
    if n < MIN_SAMPLE_SIZE {
        return Err(NormalityErr::InsufficientSampleSize {
            given: n,
            needed: MIN_SAMPLE_SIZE,
        }
        .into());
    }
    if let Some(index) = sample.iter().position(|x| !x.is_finite()) {
        return Err(NormalityErr::NonFiniteObservation(index).into());
    }

    let mut x = sample.to_vec();
    x.sort_by(f64::total_cmp);
    if x[n - 1] - x[0] < SMALL {
        return Err(NormalityErr::ZeroRange.into());
    }

    //----------------------------------------
    // W statistic
    let a = coefficients(n)?;
    let mean = x.iter().sum::<f64>() / n as f64;
    let ssq: f64 = x.iter().map(|xi| (xi - mean) * (xi - mean)).sum();
    let numerator: f64 = a
        .iter()
        .enumerate()
        .map(|(i, ai)| ai * (x[n - 1 - i] - x[i]))
        .sum();
    let w = (numerator * numerator / ssq).clamp(0.0, 1.0);

    Ok(NormalityResult {
        statistic: w,
        p_value: p_value(w, n),
    })
}

// cc[0] + cc[1] * x + cc[2] * x^2 + ...
fn poly(cc: &[f64], x: f64) -> f64 {
    cc.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

/// Upper half of the antisymmetric coefficient vector: a[i] weights
/// x(n - i) - x(i + 1). Normalized so that twice the sum of squares is one.
fn coefficients(n: usize) -> Result<Vec<f64>, TtcomputeErr> {
    if n == 3 {
        return Ok(vec![0.5_f64.sqrt()]);
    }
    let an = n as f64;
    let half = n / 2;
    let m = (1..=half)
        .map(|i| std_normal_quantile((i as f64 - 0.375) / (an + 0.25)))
        .collect::<Result<Vec<f64>, TtcomputeErr>>()?;
    let summ2 = 2.0 * m.iter().map(|mi| mi * mi).sum::<f64>();
    let ssumm2 = summ2.sqrt();
    let rsn = 1.0 / an.sqrt();
    let a1 = poly(&C1, rsn) - m[0] / ssumm2;

    let mut a = Vec::with_capacity(half);
    a.push(a1);
    let (fac, first_scaled) = if n > 5 {
        let a2 = -m[1] / ssumm2 + poly(&C2, rsn);
        a.push(a2);
        let fac = ((summ2 - 2.0 * m[0] * m[0] - 2.0 * m[1] * m[1])
            / (1.0 - 2.0 * a1 * a1 - 2.0 * a2 * a2))
            .sqrt();
        (fac, 2)
    } else {
        let fac = ((summ2 - 2.0 * m[0] * m[0]) / (1.0 - 2.0 * a1 * a1)).sqrt();
        (fac, 1)
    };
    a.extend(m[first_scaled..].iter().map(|mi| -mi / fac));
    Ok(a)
}

fn p_value(w: f64, n: usize) -> f64 {
    if n == 3 {
        // exact
        let pi6 = 6.0 / std::f64::consts::PI;
        let stqr = std::f64::consts::FRAC_PI_3;
        return (pi6 * (w.sqrt().asin() - stqr)).clamp(0.0, 1.0);
    }
    let an = n as f64;
    let w1 = 1.0 - w;
    let mut y = w1.ln();
    let (mean, sd) = if n <= 11 {
        let gamma = poly(&G, an);
        if y >= gamma {
            return TINY_P_VALUE;
        }
        y = -(gamma - y).ln();
        (poly(&C3, an), poly(&C4, an).exp())
    } else {
        let ln_n = an.ln();
        (poly(&C5, ln_n), poly(&C6, ln_n).exp())
    };
    std_normal_sf((y - mean) / sd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_sample_one() {
        let res = shapiro_wilk(&[32., 37., 35., 38., 41., 44., 35., 31., 34., 38., 42.]).unwrap();
        assert!((res.statistic - 0.9662597179412842).abs() < 1e-5);
        assert!((res.p_value - 0.8464781045913696).abs() < 1e-5);
    }

    #[test]
    fn example_sample_two() {
        let res = shapiro_wilk(&[36., 31., 30., 31., 34., 36., 39., 32., 31.]).unwrap();
        assert!((res.statistic - 0.8837727308273315).abs() < 1e-5);
        assert!((res.p_value - 0.17198464274406433).abs() < 1e-5);
    }

    #[test]
    fn three_observations_exact() {
        let res = shapiro_wilk(&[1., 2., 4.]).unwrap();
        assert!((res.statistic - 0.9642857142857143).abs() < 1e-12);
        assert!((res.p_value - 0.6368868450).abs() < 1e-8);
    }

    #[test]
    fn evenly_spaced_large_sample() {
        let sample: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let res = shapiro_wilk(&sample).unwrap();
        assert!((res.statistic - 0.9603751831).abs() < 1e-6);
        assert!((res.p_value - 0.5513717430).abs() < 1e-6);
    }

    #[test]
    fn order_does_not_matter() {
        let sorted = shapiro_wilk(&[30., 31., 31., 31., 32., 34., 36., 36., 39.]).unwrap();
        let shuffled = shapiro_wilk(&[36., 31., 30., 31., 34., 36., 39., 32., 31.]).unwrap();
        assert_eq!(sorted, shuffled);
    }

    #[test]
    fn coefficients_are_normalized() {
        for n in [4, 5, 6, 11, 50, 999] {
            let a = coefficients(n).unwrap();
            let norm: f64 = 2.0 * a.iter().map(|ai| ai * ai).sum::<f64>();
            assert!((norm - 1.0).abs() < 1e-12, "n = {n}: {norm}");
            assert!(a.windows(2).all(|pair| pair[0] >= pair[1]));
        }
    }

    #[test]
    fn skewed_sample_rejects_normality() {
        let sample = [1., 1., 1., 1., 1., 1., 1., 1., 1., 1., 10., 10., 10., 10., 10., 10., 10., 10., 10., 10.];
        let res = shapiro_wilk(&sample).unwrap();
        assert!(res.p_value < 0.05);
    }

    #[test]
    fn too_few_observations() {
        assert_eq!(
            shapiro_wilk(&[1., 2.]),
            Err(TtcomputeErr::from(NormalityErr::InsufficientSampleSize {
                given: 2,
                needed: 3
            }))
        );
    }

    #[test]
    fn zero_range() {
        if let Err(e) = shapiro_wilk(&[4., 4., 4., 4.]) {
            assert_eq!(
                String::from("while computing normality test: sample has zero range"),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn beyond_fitted_sample_size() {
        // Blom scores: as close to normal as a sample of this size gets
        let n = 6000;
        let sample: Vec<f64> = (1..=n)
            .map(|i| std_normal_quantile((i as f64 - 0.375) / (n as f64 + 0.25)).unwrap())
            .collect();
        assert!(n > MAX_FITTED_SAMPLE_SIZE);
        let res = shapiro_wilk(&sample).unwrap();
        assert!((res.statistic - 0.9999834156).abs() < 1e-6);
        assert!(res.p_value > 0.99);
    }

    #[test]
    fn non_finite_observation() {
        assert_eq!(
            shapiro_wilk(&[1., f64::NAN, 3.]),
            Err(TtcomputeErr::from(NormalityErr::NonFiniteObservation(1)))
        );
    }
}
