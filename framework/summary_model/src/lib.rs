use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::Path;

/// Store a single throughput sample as a JSON scalar, replacing any previous content.
pub fn store_sample(path: &Path, value: f64) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    serde_json::to_writer(&mut file, &value)?;
    file.flush()
}

/// Load a single throughput sample written by [store_sample].
pub fn load_sample(path: &Path) -> std::io::Result<f64> {
    let file = std::fs::File::open(path)?;
    let value: f64 = serde_json::from_reader(std::io::BufReader::new(file))?;
    Ok(value)
}

/// Aggregated throughput for every curve of a chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSummary {
    /// The name of the chart
    pub chart_name: String,
    /// The name of the run policy the samples were collected with
    pub run_policy: String,
    /// Thread counts, in the order the points of each curve are listed
    pub thread_counts: Vec<u32>,
    /// The number of samples behind every point
    pub trial_count: u32,
    /// When the summary was produced
    ///
    /// This is a Unix timestamp in seconds.
    pub generated_at: i64,
    /// One entry per curve, in legend order
    pub curves: Vec<CurveSummary>,
}

impl ChartSummary {
    pub fn new(
        chart_name: String,
        run_policy: String,
        thread_counts: Vec<u32>,
        trial_count: u32,
    ) -> Self {
        Self {
            chart_name,
            run_policy,
            thread_counts,
            trial_count,
            generated_at: Utc::now().timestamp(),
            curves: Vec::new(),
        }
    }

    pub fn add_curve(&mut self, curve: CurveSummary) {
        self.curves.push(curve);
    }

    /// The largest mean across all curves and thread counts.
    pub fn max_mean(&self) -> Option<f64> {
        self.curves
            .iter()
            .flat_map(|c| c.points.iter().map(|p| p.mean))
            .fold(None, |acc, mean| match acc {
                Some(max) if max >= mean => Some(max),
                _ => Some(mean),
            })
    }
}

/// Aggregated throughput for one curve
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurveSummary {
    pub label: String,
    /// Display name of the executable
    pub executable: String,
    /// Name of the data structure configuration
    pub ds_config: String,
    pub points: Vec<ThroughputPoint>,
}

/// Aggregated throughput at one thread count
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThroughputPoint {
    pub thread_count: u32,
    pub mean: f64,
    /// Sample standard deviation, absent when there is a single sample
    pub std: Option<f64>,
    pub min: f64,
    pub max: f64,
}

/// Write the summary as pretty printed JSON.
pub fn store_chart_summary<W: Write>(summary: &ChartSummary, writer: W) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(writer, summary)?;
    Ok(())
}

/// Load a summary written by [store_chart_summary].
pub fn load_chart_summary<R: Read>(reader: R) -> anyhow::Result<ChartSummary> {
    let reader = std::io::BufReader::new(reader);
    let summary: ChartSummary = serde_json::from_reader(reader)?;
    Ok(summary)
}
