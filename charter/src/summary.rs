use crate::model::ThroughputStats;
use anyhow::Context;
use std::path::Path;
use ubench_core::prelude::Chart;
use ubench_summary_model::{store_chart_summary, ChartSummary, CurveSummary};

pub(crate) fn summarize(chart: &Chart, stats: &[Vec<ThroughputStats>]) -> ChartSummary {
    let policy = &chart.run_policy;
    let mut summary = ChartSummary::new(
        chart.name.clone(),
        policy.name().to_string(),
        policy.thread_counts.clone(),
        policy.trial_count,
    );

    for (curve, curve_stats) in chart.curves.iter().zip(stats) {
        summary.add_curve(CurveSummary {
            label: curve.label.clone(),
            executable: curve.executable.display_name.clone(),
            ds_config: curve.ds_config.name.clone(),
            points: policy
                .thread_counts
                .iter()
                .zip(curve_stats)
                .map(|(&thread_count, s)| s.to_point(thread_count))
                .collect(),
        });
    }

    summary
}

pub(crate) fn write_summary(summary: &ChartSummary, path: &Path) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create summary file {}", path.display()))?;
    store_chart_summary(summary, file)
        .with_context(|| format!("Failed to write summary to {}", path.display()))
}
