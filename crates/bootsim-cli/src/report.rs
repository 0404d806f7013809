use std::fmt::Write as _;

use bootsim_engine::{SampleSizeResult, SummaryRow};

const SUMMARY_HEADER: &str = "Sample Size (n),Average of Sample Means,Average of Sample StdDevs";
const DETAIL_HEADER: &str = "Sample Size (n),Sample Mean,Sample StdDev";

/// Serializes the summary and detail tables into one CSV report.
///
/// The summary table comes first, then a blank separator line, then one
/// detail row per replication, grouped by sample size in the same order as
/// the summary and in draw order within a group. Values are written with
/// `f64`'s `Display`, which round-trips full double precision; `NaN`
/// statistics print as `NaN`. No statistics are computed here.
#[must_use]
pub fn render_report(summary: &[SummaryRow], results: &[SampleSizeResult]) -> String {
    let mut out = String::new();

    writeln!(&mut out, "{SUMMARY_HEADER}").unwrap();
    for row in summary {
        writeln!(
            &mut out,
            "{},{},{}",
            row.sample_size, row.avg_mean, row.avg_std_dev
        )
        .unwrap();
    }

    writeln!(&mut out).unwrap();

    writeln!(&mut out, "{DETAIL_HEADER}").unwrap();
    for result in results {
        for replication in &result.replications {
            writeln!(
                &mut out,
                "{},{},{}",
                result.sample_size, replication.mean, replication.std_dev
            )
            .unwrap();
        }
    }

    out
}
