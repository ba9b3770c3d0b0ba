use crate::distribution::error::NormalDistErr;
use crate::error::TtcomputeErr;
use statrs::function::erf::{erfc, erfc_inv};
use std::f64::consts::{PI, SQRT_2};

pub fn std_normal_pdf(z: f64) -> f64 {
    (-z * z / 2.0).exp() / (2.0 * PI).sqrt()
}

pub fn std_normal_cdf(z: f64) -> f64 {
    0.5 * erfc(-z / SQRT_2)
}

/// Upper tail probability, P(Z > z)
pub fn std_normal_sf(z: f64) -> f64 {
    0.5 * erfc(z / SQRT_2)
}

pub fn std_normal_quantile(p: f64) -> Result<f64, TtcomputeErr> {
    if !(0.0..=1.0).contains(&p) {
        return Err(NormalDistErr::QuantileOutOfBounds(p).into());
    }
    Ok(-SQRT_2 * erfc_inv(2.0 * p))
}
