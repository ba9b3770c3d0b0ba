use crate::comparison::types::{TestResult, VarianceAssumption};
use crate::error::TtcomputeErr;
use crate::hypothesis_type::AlternativeHypothesis;
use crate::normality::shapiro_wilk::MAX_FITTED_SAMPLE_SIZE;
use crate::normality::types::NormalityResult;
use crate::report::types::{GroupSummary, NumberFormat, Report};
use crate::summary::descriptive::{NonparametricSummary, ParametricSummary};
use std::fmt;

const ASSUMPTIONS: [&str; 7] = [
    "The data are continuous interval or ratio scales.",
    "The data in each sample follow a normal distribution with mean mu and variance sigma squared.",
    "The sample variances s squared follow a chi-squared distribution with rho degrees of \
     freedom under the null hypothesis, where rho is a positive constant.",
    "(sample average - population average) and the sample standard deviations s are independent.",
    "The size of each sample may be equal or unequal.",
    "The variance of each sample may be equal or unequal.",
    "The data should be sampled independently from the two populations being compared.",
];

impl GroupSummary {
    pub fn new(label: &str, sample: &[f64]) -> Result<GroupSummary, TtcomputeErr> {
        Ok(GroupSummary {
            label: label.to_string(),
            parametric: ParametricSummary::new(sample)?,
            nonparametric: NonparametricSummary::new(sample)?,
        })
    }
}

pub fn render_report(report: &Report) -> String {
    report.to_string()
}

fn question(alternative: AlternativeHypothesis, hypothesized_difference: f64) -> String {
    let relation = match alternative {
        AlternativeHypothesis::TwoSided => "different from",
        AlternativeHypothesis::Less => "less than",
        AlternativeHypothesis::Greater => "greater than",
    };
    if hypothesized_difference == 0. {
        format!("Is the average of sample one {relation} the average of sample two?")
    } else {
        format!(
            "Is the average of sample one {relation} the average of sample two \
             plus {hypothesized_difference}?"
        )
    }
}

fn variance_description(variance: VarianceAssumption) -> &'static str {
    match variance {
        VarianceAssumption::Pooled => "Assume the sample variances are equal.",
        VarianceAssumption::Welch => "Assume the sample variances are unequal.",
    }
}

struct Num(f64, NumberFormat);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Num(value, NumberFormat { width, decimals }) = *self;
        write!(f, "{value:>width$.decimals$}")
    }
}

fn write_parametric(
    f: &mut fmt::Formatter<'_>,
    summary: &ParametricSummary,
    format: NumberFormat,
) -> fmt::Result {
    let n = |v| Num(v, format);
    writeln!(f, "  n                  : {:>w$}", summary.count, w = format.width)?;
    writeln!(f, "  average            : {}", n(summary.mean))?;
    writeln!(f, "  standard deviation : {}", n(summary.std_dev))?;
    writeln!(f, "  variance           : {}", n(summary.variance))?;
    writeln!(f, "  standard error     : {}", n(summary.std_error))?;
    writeln!(f, "  minimum            : {}", n(summary.min))?;
    writeln!(f, "  maximum            : {}", n(summary.max))
}

fn write_nonparametric(
    f: &mut fmt::Formatter<'_>,
    summary: &NonparametricSummary,
    format: NumberFormat,
) -> fmt::Result {
    let n = |v| Num(v, format);
    writeln!(f, "  n                  : {:>w$}", summary.count, w = format.width)?;
    writeln!(f, "  minimum            : {}", n(summary.min))?;
    writeln!(f, "  lower quartile     : {}", n(summary.lower_quartile))?;
    writeln!(f, "  median             : {}", n(summary.median))?;
    writeln!(f, "  upper quartile     : {}", n(summary.upper_quartile))?;
    writeln!(f, "  maximum            : {}", n(summary.max))?;
    writeln!(f, "  interquartile range: {}", n(summary.interquartile_range))
}

fn write_normality(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    normality: Option<NormalityResult>,
    group: Option<&GroupSummary>,
    format: NumberFormat,
) -> fmt::Result {
    match normality {
        Some(NormalityResult { statistic, p_value }) => {
            write!(
                f,
                "  Shapiro-Wilk sample {label}: W = {}, p = {}",
                Num(statistic, format),
                Num(p_value, format)
            )?;
            match group {
                Some(g) if g.parametric.count > MAX_FITTED_SAMPLE_SIZE => writeln!(
                    f,
                    " (p extrapolated beyond {MAX_FITTED_SAMPLE_SIZE} observations)"
                ),
                _ => writeln!(f),
            }
        }
        None => writeln!(f, "  Shapiro-Wilk sample {label}: not applicable"),
    }
}

fn write_result(
    f: &mut fmt::Formatter<'_>,
    result: &TestResult,
    report: &Report,
) -> fmt::Result {
    let format = report.format;
    writeln!(f, "{}", question(result.alternative, report.hypothesized_difference))?;
    writeln!(f, "{}", variance_description(result.variance))?;
    writeln!(f, "  alternative hypothesis: {}", result.alternative)?;
    writeln!(f, "  t     : {}", Num(result.t_statistic, format))?;
    writeln!(f, "  df    : {}", Num(result.degrees_of_freedom, format))?;
    writeln!(f, "  p     : {}", Num(result.p_value, format))?;
    writeln!(f, "  power : {}", Num(result.power, format))?;
    if result.p_value < report.significance_level {
        writeln!(
            f,
            "  p < {}: reject the null hypothesis of equal averages.",
            report.significance_level
        )?;
    } else {
        writeln!(
            f,
            "  p >= {}: do not reject the null hypothesis of equal averages.",
            report.significance_level
        )?;
    }
    write_normality(f, "one", result.normality_one, report.groups.first(), format)?;
    write_normality(f, "two", result.normality_two, report.groups.get(1), format)
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f)?;

        writeln!(f, "ASSUMPTIONS")?;
        writeln!(f)?;
        for assumption in ASSUMPTIONS {
            writeln!(f, "{assumption}")?;
        }
        writeln!(f)?;

        writeln!(f, "PARAMETRIC STATISTICS")?;
        for group in &self.groups {
            writeln!(f, "{}", group.label)?;
            write_parametric(f, &group.parametric, self.format)?;
        }
        writeln!(f)?;

        writeln!(f, "NONPARAMETRIC STATISTICS")?;
        for group in &self.groups {
            writeln!(f, "{}", group.label)?;
            write_nonparametric(f, &group.nonparametric, self.format)?;
        }

        for (i, result) in self.results.iter().enumerate() {
            writeln!(f)?;
            if i == 0 {
                writeln!(f, "TWO-SAMPLE T TEST")?;
            } else {
                writeln!(f, "TWO-SAMPLE T TEST (ALTERNATIVE VARIANCE ASSUMPTION)")?;
            }
            write_result(f, result, self)?;
        }
        Ok(())
    }
}
