use crate::draw::draw_figure;
use crate::error::RenderError;
use crate::legend::Legend;
use crate::model::ThroughputStats;
use std::path::Path;
use ubench_core::prelude::{Chart, ChartFormat, LineStyle, ThreadAxis};

/// Room left above the highest mean, as a factor of it.
pub(crate) const Y_HEADROOM: f64 = 1.2;

/// A labelled position on the x axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// One curve as it will be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub style: LineStyle,
    /// `(x position, mean throughput)` in thread count order
    pub points: Vec<(f64, f64)>,
    /// Standard deviation for every point, only when drawing error bars
    pub errors: Option<Vec<f64>>,
}

/// Everything needed to draw a chart, computed up front so that drawing is a single pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub x_upper: f64,
    /// `1.2 ×` the highest mean; may be zero or `NaN` for degenerate data
    pub y_upper: f64,
    pub x_ticks: Vec<Tick>,
    pub x_label: String,
    pub y_label: String,
    pub y_exponent: i32,
    /// In curve declaration order
    pub series: Vec<Series>,
}

impl Figure {
    /// Lay out a chart from per-curve, per-thread-count statistics.
    ///
    /// `stats` must be in curve declaration order, each entry in thread count order.
    pub fn build(
        chart: &Chart,
        stats: &[Vec<ThroughputStats>],
        format: &ChartFormat,
        with_error_bars: bool,
    ) -> Self {
        let thread_counts = &chart.run_policy.thread_counts;
        let positions = thread_positions(thread_counts, format.thread_axis);

        let x_upper = match format.thread_axis {
            ThreadAxis::Linear => f64::from(chart.run_policy.max_thread_count()) + 1.0,
            ThreadAxis::Ordinal => thread_counts.len() as f64 + 1.0,
        };

        let max_mean = stats
            .iter()
            .flatten()
            .map(|s| s.mean)
            .fold(f64::NEG_INFINITY, f64::max);
        let y_upper = if max_mean.is_finite() {
            max_mean * Y_HEADROOM
        } else {
            f64::NAN
        };

        let x_ticks = positions
            .iter()
            .zip(thread_counts)
            .map(|(&position, thread_count)| Tick {
                position,
                label: thread_count.to_string(),
            })
            .collect();

        let series = chart
            .curves
            .iter()
            .zip(stats)
            .map(|(curve, curve_stats)| Series {
                label: curve.label.clone(),
                style: curve.style,
                points: positions
                    .iter()
                    .zip(curve_stats)
                    .map(|(&x, s)| (x, s.mean))
                    .collect(),
                errors: with_error_bars.then(|| curve_stats.iter().map(|s| s.std).collect()),
            })
            .collect();

        Self {
            x_upper,
            y_upper,
            x_ticks,
            x_label: chart.x_label.clone(),
            y_label: chart.y_label.clone(),
            y_exponent: format.exponent,
            series,
        }
    }

    /// The y bound handed to the drawing backend, which cannot draw an empty range.
    pub fn drawn_y_upper(&self) -> f64 {
        if self.y_upper.is_finite() && self.y_upper > 0.0 {
            self.y_upper
        } else {
            1.0
        }
    }

    /// The curve labels and styles, for drawing on their own.
    pub fn legend(&self, format: &ChartFormat) -> Legend {
        Legend::new(
            self.series
                .iter()
                .map(|s| (s.label.clone(), s.style))
                .collect(),
            format,
        )
    }

    /// Draw the figure to a PNG file. A figure is drawn exactly once.
    pub fn save_png(self, path: &Path) -> Result<(), RenderError> {
        log::debug!("Drawing chart to {}", path.display());
        draw_figure(&self, path)
    }
}

fn thread_positions(thread_counts: &[u32], axis: ThreadAxis) -> Vec<f64> {
    match axis {
        ThreadAxis::Linear => thread_counts.iter().map(|&t| f64::from(t)).collect(),
        ThreadAxis::Ordinal => (1..=thread_counts.len()).map(|i| i as f64).collect(),
    }
}
