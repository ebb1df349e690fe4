use serde::Deserialize;
use std::num::NonZeroUsize;

/// Where thread counts are placed along the x axis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadAxis {
    /// Points sit at their thread count; the axis runs to the largest count plus one.
    #[default]
    Linear,
    /// Points sit at 1, 2, 3, ... in declaration order, labelled with the real thread count.
    Ordinal,
}

/// Per-chart presentation settings.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ChartFormat {
    /// Power of ten factored out of the y axis labels
    pub exponent: i32,
    /// Size of the standalone legend image, in inches
    pub legend_size: (f64, f64),
    /// Number of columns in the standalone legend
    pub legend_columns: NonZeroUsize,
    #[serde(default)]
    pub thread_axis: ThreadAxis,
}

impl ChartFormat {
    pub fn new(exponent: i32, legend_size: (f64, f64), legend_columns: NonZeroUsize) -> Self {
        Self {
            exponent,
            legend_size,
            legend_columns,
            thread_axis: ThreadAxis::default(),
        }
    }

    pub fn with_thread_axis(mut self, thread_axis: ThreadAxis) -> Self {
        self.thread_axis = thread_axis;
        self
    }
}
