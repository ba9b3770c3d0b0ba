use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{debug, info};
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;
use ttcompute::compute::{
    AlternativeHypothesis, ComparisonSettings, VarianceAssumption, compare_with,
};
use ttcompute::data::grouped::GroupedSamples;
use ttcompute::report::types::{GroupSummary, NumberFormat, Report};

const EXAMPLE_LEVELS: [&str; 16] = [
    "1", "1", "1", "1", "1", "1", "1", "1", "1", "2", "2", "2", "2", "2", "2", "2",
];
const EXAMPLE_VALUES: [f64; 16] = [
    35., 28., 41., 44., 35., 31., 34., 38., 42., 36., 31., 30., 31., 34., 36., 29.,
];

#[derive(Parser)]
#[command(name = "ttcompute")]
#[command(about = "Two-sample t test with power and normality checks")]
#[command(version)]
struct Cli {
    /// CSV file with a header row; the built-in example data is used when omitted
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Column holding the group level of each observation
    #[arg(long, default_value = "x")]
    group_column: String,

    /// Column holding the observed values
    #[arg(long, default_value = "y")]
    value_column: String,

    /// Level treated as sample one (defaults to the first level in sorted order)
    #[arg(long, requires = "level_two")]
    level_one: Option<String>,

    /// Level treated as sample two (defaults to the second level in sorted order)
    #[arg(long, requires = "level_one")]
    level_two: Option<String>,

    /// two-sided, less or greater
    #[arg(short, long, default_value = "two-sided")]
    alternative: AlternativeHypothesis,

    #[arg(long, default_value_t = 0.05)]
    significance_level: f64,

    /// pooled or welch
    #[arg(long, default_value = "pooled")]
    variance: VarianceAssumption,

    /// Difference of means under the null hypothesis
    #[arg(long, default_value_t = 0., allow_hyphen_values = true)]
    hypothesized_difference: f64,

    /// Digits after the decimal point in the report
    #[arg(long, default_value_t = 3)]
    decimals: usize,

    /// Minimum field width of numbers in the report
    #[arg(long, default_value_t = 7)]
    width: usize,

    #[arg(short, long)]
    verbose: bool,
}

fn load(cli: &Cli) -> Result<GroupedSamples> {
    match &cli.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("could not open {}", path.display()))?;
            let grouped =
                GroupedSamples::from_csv_reader(file, &cli.group_column, &cli.value_column)
                    .with_context(|| format!("could not read {}", path.display()))?;
            Ok(grouped)
        }
        None => {
            info!("no file given, using the built-in example data");
            Ok(GroupedSamples::from_records(
                EXAMPLE_LEVELS.into_iter().zip(EXAMPLE_VALUES),
            ))
        }
    }
}

fn other_variance(variance: VarianceAssumption) -> VarianceAssumption {
    match variance {
        VarianceAssumption::Pooled => VarianceAssumption::Welch,
        VarianceAssumption::Welch => VarianceAssumption::Pooled,
    }
}

/// Explicit levels when both are given, otherwise the first two in sorted order
fn choose_levels<'a>(
    grouped: &'a GroupedSamples,
    level_one: Option<&'a str>,
    level_two: Option<&'a str>,
) -> Result<(&'a str, &'a str)> {
    match (level_one, level_two) {
        (Some(one), Some(two)) => Ok((one, two)),
        (None, None) => Ok(grouped.default_pair()?),
        _ => bail!("--level-one and --level-two must be given together"),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let grouped = load(cli)?;
    debug!("loaded {} group levels: {:?}", grouped.len(), grouped.levels());

    let (level_one, level_two) =
        choose_levels(&grouped, cli.level_one.as_deref(), cli.level_two.as_deref())?;
    let (sample_one, sample_two) = grouped.pair(level_one, level_two)?;
    info!(
        "comparing level {level_one} (n = {}) with level {level_two} (n = {})",
        sample_one.len(),
        sample_two.len()
    );

    //----------------------------------------
    // Requested test, then the other variance assumption
    let settings = ComparisonSettings {
        variance: cli.variance,
        hypothesized_difference: cli.hypothesized_difference,
    };
    let start = Instant::now();
    let requested = compare_with(
        sample_one,
        sample_two,
        cli.alternative,
        cli.significance_level,
        &settings,
    )
    .context("two-sample t test failed")?;
    let alternate = compare_with(
        sample_one,
        sample_two,
        AlternativeHypothesis::TwoSided,
        cli.significance_level,
        &ComparisonSettings {
            variance: other_variance(cli.variance),
            ..settings
        },
    )
    .context("two-sample t test under the other variance assumption failed")?;
    debug!("comparisons took {:?}", start.elapsed());

    //----------------------------------------
    // Report
    let report = Report {
        title: format!("Two-sample t test of {} by {}", cli.value_column, cli.group_column),
        groups: vec![
            GroupSummary::new(level_one, sample_one)?,
            GroupSummary::new(level_two, sample_two)?,
        ],
        significance_level: cli.significance_level,
        hypothesized_difference: cli.hypothesized_difference,
        results: vec![requested, alternate],
        format: NumberFormat {
            width: cli.width,
            decimals: cli.decimals,
        },
    };
    print!("{report}");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    run(&cli)
}
