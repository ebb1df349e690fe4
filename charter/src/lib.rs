//! Turns cached throughput samples into charts.
//!
//! For every curve and thread count the trials are aggregated into a mean and a sample standard
//! deviation, then drawn as one line per curve. The legend is drawn into its own image so it can
//! be placed independently of the chart.

mod analyze;
mod draw;
mod error;
mod figure;
mod format;
mod legend;
mod model;
mod samples;
mod summary;
mod table;

#[cfg(test)]
mod test_data;

use crate::analyze::throughput_stats;
use crate::samples::load_curve_samples;
use crate::summary::{summarize, write_summary};
use std::path::Path;
use ubench_core::prelude::{ensure_dir, Chart};
use ubench_summary_model::ChartSummary;

pub use crate::error::RenderError;
pub use crate::figure::{Figure, Series, Tick};
pub use crate::format::{formatter, FormatTable};
pub use crate::legend::{Legend, LegendEntry};
pub use crate::model::ThroughputStats;
pub use crate::table::summary_table;

/// File names of the chart and legend images.
pub fn output_names(chart_name: &str, with_error_bars: bool) -> (String, String) {
    let stem = if with_error_bars {
        format!("{chart_name}_variance")
    } else {
        chart_name.to_string()
    };
    (format!("{stem}.png"), format!("{stem}_legend.png"))
}

/// Aggregate the samples of every curve, in curve and thread count order.
pub fn chart_stats(chart: &Chart, data_dir: &Path) -> Result<Vec<Vec<ThroughputStats>>, RenderError> {
    chart
        .curves
        .iter()
        .map(|curve| -> Result<Vec<ThroughputStats>, RenderError> {
            load_curve_samples(chart, curve, data_dir)?
                .iter()
                .map(|samples| throughput_stats(samples).map_err(RenderError::from))
                .collect()
        })
        .collect()
}

/// Draw `chart` and its legend into `output_dir` from the samples in `data_dir`.
///
/// Without error bars a `<chart>_summary.json` is written next to the images as well. Every
/// sample must already be collected and the chart must have a format.
pub fn render(
    chart: &Chart,
    data_dir: &Path,
    output_dir: &Path,
    with_error_bars: bool,
    formats: &FormatTable,
) -> Result<ChartSummary, RenderError> {
    let format = formats.get(&chart.name)?;

    ensure_dir(output_dir).map_err(|source| RenderError::OutputFolder {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let stats = chart_stats(chart, data_dir)?;
    let summary = summarize(chart, &stats);

    let figure = Figure::build(chart, &stats, format, with_error_bars);
    let legend = figure.legend(format);

    let (chart_file, legend_file) = output_names(&chart.name, with_error_bars);
    figure.save_png(&output_dir.join(&chart_file))?;
    legend.save_png(&output_dir.join(&legend_file))?;

    if !with_error_bars {
        write_summary(&summary, &output_dir.join(format!("{}_summary.json", chart.name)))?;
    }

    log::info!(
        "Rendered {} and {} to {}",
        chart_file,
        legend_file,
        output_dir.display()
    );

    Ok(summary)
}
