use std::fmt::Write as _;

use bootsim_stats::histogram::{Histogram, sqrt_bin_count};

use crate::config::PlotTemplate;

const MAX_BAR_WIDTH: usize = 50;

/// Renders a text histogram of one sample size's replication means.
///
/// Bin count follows the square-root rule unless the caller's data is too
/// small to support it (minimum one bin). Bars are scaled so the fullest
/// bin spans `MAX_BAR_WIDTH` characters.
#[expect(clippy::cast_possible_truncation)]
#[must_use]
pub fn render_histogram(values: &[f64], sample_size: usize, template: &PlotTemplate) -> String {
    let histogram = Histogram::new(values, sqrt_bin_count(values.len()));

    let mut out = String::new();
    writeln!(&mut out, "{} (n = {sample_size})", template.title).unwrap();
    writeln!(&mut out, "x: {}", template.x).unwrap();
    writeln!(&mut out, "y: {}", template.y).unwrap();
    writeln!(&mut out).unwrap();

    let max_count = histogram.bins.iter().map(|b| b.count).max().unwrap_or(1);
    for bin in &histogram.bins {
        let bar_width = (bin.count * MAX_BAR_WIDTH as u64 / max_count) as usize;
        writeln!(
            &mut out,
            "{:>12.5} .. {:<12.5} | {:<6} {}",
            bin.range.start,
            bin.range.end,
            bin.count,
            "#".repeat(bar_width)
        )
        .unwrap();
    }

    out
}
