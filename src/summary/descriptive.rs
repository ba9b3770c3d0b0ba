use crate::error::{ArgumentErr, TtcomputeErr};
use statrs::statistics::{Data, OrderStatistics, Statistics};

/// Moment-based summary of one sample
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct ParametricSummary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub variance: f64,
    pub std_error: f64,
    pub min: f64,
    pub max: f64,
}

impl ParametricSummary {
    pub fn new(sample: &[f64]) -> Result<ParametricSummary, TtcomputeErr> {
        check_sample(sample, 2)?;
        let count = sample.len();
        let variance = Statistics::variance(sample);
        let std_dev = variance.sqrt();
        Ok(ParametricSummary {
            count,
            mean: Statistics::mean(sample),
            std_dev,
            variance,
            std_error: std_dev / (count as f64).sqrt(),
            min: Statistics::min(sample),
            max: Statistics::max(sample),
        })
    }
}

/// Order-statistic summary of one sample
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct NonparametricSummary {
    pub count: usize,
    pub min: f64,
    pub lower_quartile: f64,
    pub median: f64,
    pub upper_quartile: f64,
    pub max: f64,
    pub interquartile_range: f64,
}

impl NonparametricSummary {
    pub fn new(sample: &[f64]) -> Result<NonparametricSummary, TtcomputeErr> {
        check_sample(sample, 1)?;
        let mut data = Data::new(sample.to_vec());
        Ok(NonparametricSummary {
            count: sample.len(),
            min: Statistics::min(sample),
            lower_quartile: data.lower_quartile(),
            median: data.median(),
            upper_quartile: data.upper_quartile(),
            max: Statistics::max(sample),
            interquartile_range: data.interquartile_range(),
        })
    }
}

fn check_sample(sample: &[f64], needed: usize) -> Result<(), TtcomputeErr> {
    if sample.len() < needed {
        return Err(ArgumentErr::InsufficientSampleSize {
            label: String::from("to summarize"),
            given: sample.len(),
            needed,
        }
        .into());
    }
    if let Some(index) = sample.iter().position(|x| !x.is_finite()) {
        return Err(ArgumentErr::NonFiniteObservation {
            label: String::from("to summarize"),
            index,
        }
        .into());
    }
    Ok(())
}
